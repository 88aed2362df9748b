/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::models::{GenerationRequest, StyleAllocation};

/// 初始化 tracing 日志
///
/// `RUST_LOG` 优先；未设置时默认 info，`verbose` 为 true 时为 debug。
/// 重复初始化会被忽略。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录出题请求概要
pub fn log_request(request: &GenerationRequest) {
    info!("{}", "=".repeat(60));
    info!("🚀 开始生成题目");
    info!(
        "📚 科目: {} | 主题: {}",
        request.subject,
        request.theme().unwrap_or("(无)")
    );
    info!("📊 难度: {} | 数量: {}", request.difficulty, request.count);
    info!("{}", "=".repeat(60));
}

/// 记录题型分配结果
pub fn log_allocations(allocations: &[StyleAllocation]) {
    let summary: Vec<String> = allocations
        .iter()
        .map(|a| format!("{}×{}", a.style, a.count))
        .collect();
    info!("🧮 题型分配: {}", summary.join(", "));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdefghij", 4), "abcd...");
        // 按字符而不是字节截断
        assert_eq!(truncate_text("题目内容很长", 2), "题目...");
    }
}
