//! 题目规范化
//!
//! 逐字段校验模型返回的元素，不合法的字段替换为默认值，而不是丢弃整道题。
//! 数组级别的结构错误由 `response_parser` 负责，这里只处理字段级别的内容问题。

use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use crate::models::{DefaultedFields, GeneratedQuestion, OPTION_COUNT};

pub const DEFAULT_QUESTION_TYPE: &str = "standard";
pub const DEFAULT_EXPLANATION: &str = "No explanation provided.";
pub const PLACEHOLDER_OPTIONS: [&str; OPTION_COUNT] =
    ["Option A", "Option B", "Option C", "Option D"];

fn non_empty_str<'a>(value: &'a JsonValue, field: &str) -> Option<&'a str> {
    value
        .get(field)
        .and_then(JsonValue::as_str)
        .filter(|s| !s.is_empty())
}

/// 恰好 4 个字符串才接受
fn valid_options(value: &JsonValue) -> Option<Vec<String>> {
    let options = value.get("options")?.as_array()?;
    if options.len() != OPTION_COUNT {
        return None;
    }
    options
        .iter()
        .map(|o| o.as_str().map(str::to_string))
        .collect()
}

/// 0..=3 的整数，`2.0` 这类整值浮点数也接受
fn valid_correct_option(value: &JsonValue) -> Option<u8> {
    let raw = value.get("correctOption")?;
    let index = match raw.as_u64() {
        Some(index) => index,
        None => {
            let f = raw.as_f64()?;
            if f.fract() != 0.0 || f < 0.0 {
                return None;
            }
            f as u64
        }
    };
    (index < OPTION_COUNT as u64).then_some(index as u8)
}

/// 规范化单个元素，同时记录哪些字段被替换
pub fn normalize_question(value: &JsonValue, index: usize) -> (GeneratedQuestion, DefaultedFields) {
    let mut defaulted = DefaultedFields::default();

    let question_text = match non_empty_str(value, "questionText") {
        Some(text) => text.to_string(),
        None => {
            defaulted.question_text = true;
            format!("Question {}", index + 1)
        }
    };

    let question_type = match non_empty_str(value, "questionType") {
        Some(kind) => kind.to_string(),
        None => {
            defaulted.question_type = true;
            DEFAULT_QUESTION_TYPE.to_string()
        }
    };

    let options = valid_options(value).unwrap_or_else(|| {
        defaulted.options = true;
        PLACEHOLDER_OPTIONS.iter().map(|o| o.to_string()).collect()
    });

    let correct_option = valid_correct_option(value).unwrap_or_else(|| {
        defaulted.correct_option = true;
        0
    });

    let explanation = match non_empty_str(value, "explanation") {
        Some(text) => text.to_string(),
        None => {
            defaulted.explanation = true;
            DEFAULT_EXPLANATION.to_string()
        }
    };

    let metadata = value.get("metadata").filter(|m| !m.is_null()).cloned();

    (
        GeneratedQuestion {
            question_text,
            question_type,
            options,
            correct_option,
            explanation,
            metadata,
        },
        defaulted,
    )
}

/// 规范化并附带每道题的默认值记录
///
/// 超出 `count` 的元素按顺序丢弃；不足时不补齐。
pub fn normalize_with_report(
    values: &[JsonValue],
    count: usize,
) -> Vec<(GeneratedQuestion, DefaultedFields)> {
    if values.len() > count {
        warn!(
            "模型多生成了 {} 道题，已截断到 {}",
            values.len() - count,
            count
        );
    } else if values.len() < count {
        warn!("模型只生成了 {}/{} 道题", values.len(), count);
    }

    values
        .iter()
        .take(count)
        .enumerate()
        .map(|(index, value)| {
            let (question, defaulted) = normalize_question(value, index);
            if defaulted.any() {
                debug!(
                    "第 {} 题有 {} 个字段使用了默认值: {:?}",
                    index + 1,
                    defaulted.count(),
                    defaulted
                );
            }
            (question, defaulted)
        })
        .collect()
}

/// 规范化为最终题目列表（静默修复字段）
pub fn normalize(values: &[JsonValue], count: usize) -> Vec<GeneratedQuestion> {
    normalize_with_report(values, count)
        .into_iter()
        .map(|(question, _)| question)
        .collect()
}
