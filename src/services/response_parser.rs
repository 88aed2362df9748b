//! 模型响应解析
//!
//! 模型经常在 JSON 外面包一层说明文字或 markdown 代码块，这里只取
//! 第一个 `[` 到最后一个 `]` 之间的内容，要求这一段本身是合法 JSON。

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value as JsonValue;
use tracing::{debug, error};

use crate::error::MalformedResponseError;
use crate::utils::logging::truncate_text;

fn json_array_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\[.*\]").expect("JSON 数组正则无效"))
}

/// 从原始响应中找出 JSON 数组片段
pub fn extract_json_array(raw: &str) -> Option<&str> {
    json_array_regex().find(raw).map(|m| m.as_str())
}

/// 解析模型响应为 JSON 元素列表
///
/// 两种失败都会保留原始响应：找不到数组片段，或者片段不是合法 JSON。
pub fn parse_questions(raw: &str) -> Result<Vec<JsonValue>, MalformedResponseError> {
    let Some(json_text) = extract_json_array(raw) else {
        error!(
            "响应中没有找到 JSON 数组，原始响应: {}",
            truncate_text(raw, 500)
        );
        return Err(MalformedResponseError::NoJsonArray {
            raw: raw.to_string(),
        });
    };

    debug!("提取到 JSON 片段，长度: {} 字符", json_text.len());

    serde_json::from_str::<Vec<JsonValue>>(json_text).map_err(|source| {
        error!(
            "JSON 数组解析失败: {}，原始响应: {}",
            source,
            truncate_text(raw, 500)
        );
        MalformedResponseError::InvalidJson {
            raw: raw.to_string(),
            source,
        }
    })
}
