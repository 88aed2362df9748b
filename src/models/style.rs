use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// 题型枚举（UPSC 预考的五种题目形式）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionStyle {
    /// 标准事实题
    Factual,
    /// 概念/应用题
    Conceptual,
    /// 陈述判断题
    Statement,
    /// 连线匹配题
    Match,
    /// 断言-理由题
    Assertion,
}

impl QuestionStyle {
    pub const ALL: [QuestionStyle; 5] = [
        QuestionStyle::Factual,
        QuestionStyle::Conceptual,
        QuestionStyle::Statement,
        QuestionStyle::Match,
        QuestionStyle::Assertion,
    ];

    /// 模板表中使用的键
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionStyle::Factual => "factual",
            QuestionStyle::Conceptual => "conceptual",
            QuestionStyle::Statement => "statement",
            QuestionStyle::Match => "match",
            QuestionStyle::Assertion => "assertion",
        }
    }
}

impl FromStr for QuestionStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "factual" => Ok(QuestionStyle::Factual),
            "conceptual" => Ok(QuestionStyle::Conceptual),
            "statement" | "statement-based" => Ok(QuestionStyle::Statement),
            "match" | "match-the-following" => Ok(QuestionStyle::Match),
            "assertion" | "assertion-reason" => Ok(QuestionStyle::Assertion),
            _ => Err(ConfigError::UnknownStyle {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for QuestionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 难度枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ConfigError::UnknownDifficulty {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
