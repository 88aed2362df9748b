use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// 选项数量固定为 4（A/B/C/D）
pub const OPTION_COUNT: usize = 4;

/// 经过校验的题目，对外输出的唯一格式
///
/// 不变量：`options.len() == 4` 且 `correct_option <= 3`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestion {
    pub question_text: String,
    /// "standard" | "statement" | "match" | "assertion"，未知值按 standard 展示
    pub question_type: String,
    pub options: Vec<String>,
    pub correct_option: u8,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonValue>,
}

/// 记录规范化时被替换成默认值的字段
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultedFields {
    pub question_text: bool,
    pub question_type: bool,
    pub options: bool,
    pub correct_option: bool,
    pub explanation: bool,
}

impl DefaultedFields {
    /// 是否有任何字段被替换
    pub fn any(&self) -> bool {
        self.count() > 0
    }

    /// 被替换的字段数量
    pub fn count(&self) -> usize {
        [
            self.question_text,
            self.question_type,
            self.options,
            self.correct_option,
            self.explanation,
        ]
        .iter()
        .filter(|&&defaulted| defaulted)
        .count()
    }
}
