//! 出题上下文
//!
//! 封装"我正在为哪个科目、什么难度生成几道题"这一信息，只用于日志

use std::fmt::Display;

use crate::models::{Difficulty, GenerationRequest};

/// 出题上下文
#[derive(Debug, Clone)]
pub struct QuizCtx {
    /// 科目
    pub subject: String,

    /// 难度
    pub difficulty: Difficulty,

    /// 请求的题目数量
    pub count: u32,
}

impl QuizCtx {
    pub fn new(request: &GenerationRequest) -> Self {
        Self {
            subject: request.subject.trim().to_string(),
            difficulty: request.difficulty,
            count: request.count,
        }
    }
}

impl Display for QuizCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}/{} ×{}]", self.subject, self.difficulty, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let request = GenerationRequest::parse(" Polity ", None, "hard", &["match"], 3)
            .expect("请求应当有效");
        assert_eq!(QuizCtx::new(&request).to_string(), "[Polity/hard ×3]");
    }
}
