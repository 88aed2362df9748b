use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::style::{Difficulty, QuestionStyle};

/// 单个题型分配到的题目数量
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleAllocation {
    pub style: QuestionStyle,
    pub count: u32,
}

/// 一次出题请求
///
/// `styles` 允许重复，顺序决定余数分配给谁。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub subject: String,
    #[serde(default)]
    pub theme: Option<String>,
    pub difficulty: Difficulty,
    pub styles: Vec<QuestionStyle>,
    pub count: u32,
}

impl GenerationRequest {
    /// 从字符串参数构建请求，题型/难度不在枚举内时返回配置错误
    pub fn parse<S: AsRef<str>>(
        subject: impl Into<String>,
        theme: Option<String>,
        difficulty: &str,
        styles: &[S],
        count: u32,
    ) -> Result<Self, ConfigError> {
        let styles = styles
            .iter()
            .map(|s| s.as_ref().parse())
            .collect::<Result<Vec<QuestionStyle>, _>>()?;

        let request = Self {
            subject: subject.into(),
            theme: theme.filter(|t| !t.trim().is_empty()),
            difficulty: difficulty.parse()?,
            styles,
            count,
        };
        request.validate()?;
        Ok(request)
    }

    /// 校验请求的基本约束
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.subject.trim().is_empty() {
            return Err(ConfigError::EmptySubject);
        }
        if self.count == 0 {
            return Err(ConfigError::InvalidCount { count: self.count });
        }
        if self.styles.is_empty() {
            return Err(ConfigError::EmptyStyles { count: self.count });
        }
        Ok(())
    }

    /// 非空主题
    pub fn theme(&self) -> Option<&str> {
        self.theme
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}
