//! LLM 服务 - 业务能力层
//!
//! 只负责"调用模型拿到原始文本"，不关心提示词内容和响应解析。
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 默认走 Gemini 的 OpenAI 兼容端点，也可以指向其他兼容服务
//!
//! 网络错误、鉴权失败、服务端错误和超时统一归为"生成后端不可用"，这里不重试。

use std::future::Future;
use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult, BackendError, ConfigError};

/// 基础 token 预算
pub const BASE_TOKEN_BUDGET: u32 = 8000;
/// 每道题追加的 token 预算
pub const TOKENS_PER_QUESTION: u32 = 300;
/// token 预算上限
pub const MAX_TOKEN_BUDGET: u32 = 32000;

/// 按题目数量计算 token 预算：`min(8000 + count * 300, 32000)`
pub fn token_budget(count: u32) -> u32 {
    count
        .saturating_mul(TOKENS_PER_QUESTION)
        .saturating_add(BASE_TOKEN_BUDGET)
        .min(MAX_TOKEN_BUDGET)
}

/// 选择 API 密钥：显式传入的优先，其次是配置中的默认值；空白字符串视为没有
pub fn resolve_credential(
    explicit: Option<&str>,
    fallback: Option<&str>,
) -> Result<String, ConfigError> {
    explicit
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .or_else(|| fallback.map(str::trim).filter(|k| !k.is_empty()))
        .map(str::to_string)
        .ok_or(ConfigError::MissingCredential)
}

/// 一次模型调用的输入
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub max_tokens: u32,
    pub api_key: String,
}

/// 文本补全能力
///
/// 工作流只依赖这个 trait，方便替换传输层。
pub trait CompletionBackend {
    fn complete(
        &self,
        request: CompletionRequest,
    ) -> impl Future<Output = AppResult<String>> + Send;
}

/// LLM 服务
///
/// 职责：
/// - 按请求携带的密钥构建客户端并调用 chat completion
/// - 设置 token 预算、温度与超时
/// - 不解析响应内容
pub struct LlmService {
    api_base_url: String,
    model_name: String,
    temperature: f32,
    timeout: Duration,
}

impl LlmService {
    /// 创建新的 LLM 服务
    pub fn new(config: &Config) -> Self {
        Self {
            api_base_url: config.llm_api_base_url.clone(),
            model_name: config.llm_model_name.clone(),
            temperature: config.temperature,
            timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }

    /// 发送系统消息 + 用户消息，返回模型的原始文本
    pub async fn send_to_llm(&self, request: CompletionRequest) -> AppResult<String> {
        debug!(
            "调用 LLM API，模型: {}，max_tokens: {}",
            self.model_name, request.max_tokens
        );
        debug!(
            "系统消息长度: {} 字符，用户消息长度: {} 字符",
            request.system_prompt.len(),
            request.user_prompt.len()
        );

        // 配置 OpenAI 客户端（兼容 OpenAI API 的服务）
        let openai_config = OpenAIConfig::new()
            .with_api_key(&request.api_key)
            .with_api_base(&self.api_base_url);
        let client = Client::with_config(openai_config);

        let system_msg = ChatCompletionRequestSystemMessageArgs::default()
            .content(request.system_prompt)
            .build()?;
        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(request.user_prompt)
            .build()?;

        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(vec![
                ChatCompletionRequestMessage::System(system_msg),
                ChatCompletionRequestMessage::User(user_msg),
            ])
            .temperature(self.temperature)
            .max_tokens(request.max_tokens)
            .build()?;

        let response = tokio::time::timeout(self.timeout, client.chat().create(chat_request))
            .await
            .map_err(|_| {
                warn!("LLM API 调用超时 ({} 秒)", self.timeout.as_secs());
                AppError::Backend(BackendError::Timeout {
                    model: self.model_name.clone(),
                    secs: self.timeout.as_secs(),
                })
            })?
            .map_err(|e| {
                warn!("LLM API 调用失败: {}", e);
                AppError::llm_api_failed(&self.model_name, e)
            })?;

        if let Some(usage) = &response.usage {
            info!(
                "LLM 用量: prompt {} / completion {} / total {} tokens",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        // 提取响应内容
        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| {
                AppError::Backend(BackendError::EmptyContent {
                    model: self.model_name.clone(),
                })
            })?;

        debug!("LLM API 调用成功，响应长度: {} 字符", content.len());

        Ok(content.trim().to_string())
    }
}

impl CompletionBackend for LlmService {
    async fn complete(&self, request: CompletionRequest) -> AppResult<String> {
        self.send_to_llm(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_token_budget_grows_then_caps() {
        assert_eq!(token_budget(0), 8000);
        assert_eq!(token_budget(1), 8300);
        assert_eq!(token_budget(10), 11000);
        assert_eq!(token_budget(80), 32000);
        assert_eq!(token_budget(81), 32000);
        assert_eq!(token_budget(u32::MAX), 32000);
    }

    #[test]
    fn test_resolve_credential_prefers_explicit() {
        assert_eq!(
            resolve_credential(Some("user"), Some("env")).unwrap(),
            "user"
        );
        assert_eq!(resolve_credential(None, Some("env")).unwrap(), "env");
        assert_eq!(resolve_credential(Some("  "), Some("env")).unwrap(), "env");
    }

    #[test]
    fn test_resolve_credential_missing() {
        assert!(matches!(
            resolve_credential(None, None),
            Err(ConfigError::MissingCredential)
        ));
        assert!(matches!(
            resolve_credential(Some(""), Some(" ")),
            Err(ConfigError::MissingCredential)
        ));
    }

    #[test]
    fn test_new_takes_settings_from_config() {
        let config = Config {
            llm_model_name: "gemini-2.5-pro".to_string(),
            request_timeout_secs: 42,
            ..Config::default()
        };
        let service = LlmService::new(&config);
        assert_eq!(service.model_name, "gemini-2.5-pro");
        assert_eq!(service.timeout, Duration::from_secs(42));
    }

    fn ping_request() -> CompletionRequest {
        CompletionRequest {
            system_prompt: "system".to_string(),
            user_prompt: "user".to_string(),
            max_tokens: token_budget(1),
            api_key: "test-key".to_string(),
        }
    }

    /// 端口 9 上没有服务，连接失败应归为"后端不可用"
    #[tokio::test]
    async fn test_unreachable_endpoint_is_backend_error() {
        let config = Config {
            llm_api_base_url: "http://127.0.0.1:9/v1".to_string(),
            request_timeout_secs: 5,
            ..Config::default()
        };
        let service = LlmService::new(&config);
        let err = service.complete(ping_request()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BackendUnavailable);
    }

    /// 服务端接受连接但一直不回应，调用应在超时后失败而不是挂起
    #[tokio::test]
    async fn test_silent_endpoint_times_out() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let config = Config {
            llm_api_base_url: format!("http://{addr}/v1"),
            request_timeout_secs: 1,
            ..Config::default()
        };
        let service = LlmService::new(&config);

        let started = std::time::Instant::now();
        let err = service.complete(ping_request()).await.unwrap_err();
        server.abort();

        assert_eq!(err.kind(), ErrorKind::BackendUnavailable);
        assert!(matches!(err, AppError::Backend(BackendError::Timeout { secs: 1, .. })));
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    /// 真实调用，需要设置 LLM_API_KEY
    #[tokio::test]
    #[ignore]
    async fn test_send_to_llm_live() {
        let _ = tracing_subscriber::fmt::try_init();

        let config = Config::from_env();
        let api_key = resolve_credential(None, config.llm_api_key.as_deref())
            .expect("需要设置 LLM_API_KEY");
        let service = LlmService::new(&config);

        let response = service
            .send_to_llm(CompletionRequest {
                system_prompt: "You are a terse assistant.".to_string(),
                user_prompt: "Reply with the JSON array [1, 2, 3] and nothing else."
                    .to_string(),
                max_tokens: 256,
                api_key,
            })
            .await
            .unwrap();
        println!("LLM 响应: {}", response);
        assert!(response.contains('['));
    }
}
