use crate::error::{AppResult, ConfigError};

/// 程序配置
///
/// 只在启动时读取一次，生成过程中只读。
#[derive(Clone, Debug)]
pub struct Config {
    // --- LLM 配置 ---
    /// 默认 API 密钥（调用方未显式提供时使用）
    pub llm_api_key: Option<String>,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    /// 采样温度
    pub temperature: f32,
    /// 单次模型调用超时（秒）
    pub request_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm_api_key: None,
            llm_api_base_url: "https://generativelanguage.googleapis.com/v1beta/openai"
                .to_string(),
            llm_model_name: "gemini-3-flash-preview".to_string(),
            temperature: 0.7,
            request_timeout_secs: 180,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从环境变量加载配置，无法解析的值回退到默认值
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            llm_api_key: api_key_from_env(),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL")
                .unwrap_or(default.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME")
                .unwrap_or(default.llm_model_name),
            temperature: std::env::var("LLM_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.temperature),
            request_timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.request_timeout_secs),
            verbose_logging: std::env::var("VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.verbose_logging),
        }
    }

    /// 从环境变量加载配置，数值无法解析时报错
    pub fn try_from_env() -> AppResult<Self> {
        let default = Self::default();
        Ok(Self {
            llm_api_key: api_key_from_env(),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL")
                .unwrap_or(default.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME")
                .unwrap_or(default.llm_model_name),
            temperature: parse_env("LLM_TEMPERATURE", "f32")?
                .unwrap_or(default.temperature),
            request_timeout_secs: parse_env("LLM_TIMEOUT_SECS", "u64")?
                .unwrap_or(default.request_timeout_secs),
            verbose_logging: parse_env("VERBOSE_LOGGING", "bool")?
                .unwrap_or(default.verbose_logging),
        })
    }
}

/// LLM_API_KEY 优先，其次 GOOGLE_API_KEY；空字符串视为未设置
fn api_key_from_env() -> Option<String> {
    ["LLM_API_KEY", "GOOGLE_API_KEY"]
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

fn parse_env<T: std::str::FromStr>(var_name: &str, expected_type: &str) -> AppResult<Option<T>> {
    match std::env::var(var_name) {
        Ok(value) => value.trim().parse().map(Some).map_err(|_| {
            ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }
            .into()
        }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_api_key() {
        let config = Config::default();
        assert!(config.llm_api_key.is_none());
        assert_eq!(config.llm_model_name, "gemini-3-flash-preview");
    }

    #[test]
    fn test_parse_env_reports_bad_value() {
        std::env::set_var("QUIZ_GEN_TEST_TIMEOUT", "soon");
        let err = parse_env::<u64>("QUIZ_GEN_TEST_TIMEOUT", "u64").unwrap_err();
        assert!(err.to_string().contains("QUIZ_GEN_TEST_TIMEOUT"));
        std::env::remove_var("QUIZ_GEN_TEST_TIMEOUT");

        let missing = parse_env::<u64>("QUIZ_GEN_TEST_MISSING", "u64").unwrap();
        assert!(missing.is_none());
    }
}
