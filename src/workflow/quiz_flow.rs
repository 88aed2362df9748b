//! 出题流程 - 流程层
//!
//! 核心职责：定义"一次出题"的完整处理流程
//!
//! 流程顺序：
//! 1. 选择 API 密钥 → 校验请求
//! 2. 题型分配 → 组装提示词
//! 3. 调用模型（唯一的异步等待点）
//! 4. 解析 JSON 数组 → 逐字段规范化
//!
//! 流程本身不持有可变状态，同一个 `QuizFlow` 可以被多个任务并发使用。
//! 任何一步失败都直接返回，不在内部重试。

use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::AppResult;
use crate::models::{DefaultedFields, GeneratedQuestion, GenerationRequest};
use crate::prompts::{compose_user_prompt, system_prompt, validate_tables};
use crate::services::{
    distribute, normalize_with_report, parse_questions, resolve_credential, token_budget,
    CompletionBackend, CompletionRequest, LlmService,
};
use crate::utils::logging;
use crate::workflow::quiz_ctx::QuizCtx;

/// 带默认值记录的出题结果
#[derive(Debug, Clone)]
pub struct QuizReport {
    pub questions: Vec<GeneratedQuestion>,
    /// 与 `questions` 一一对应
    pub defaulted: Vec<DefaultedFields>,
}

impl QuizReport {
    /// 有字段被替换的题目数量
    pub fn repaired_count(&self) -> usize {
        self.defaulted.iter().filter(|d| d.any()).count()
    }
}

/// 出题流程
///
/// - 编排 分配 → 提示词 → 模型 → 解析 → 规范化
/// - 只依赖 `CompletionBackend`，不关心传输细节
pub struct QuizFlow<B = LlmService> {
    backend: B,
    default_api_key: Option<String>,
}

impl QuizFlow<LlmService> {
    /// 使用配置创建默认的出题流程
    pub fn new(config: &Config) -> AppResult<Self> {
        Self::with_backend(LlmService::new(config), config.llm_api_key.clone())
    }
}

impl<B: CompletionBackend> QuizFlow<B> {
    /// 使用自定义后端创建，构建时校验提示词模板是否完整
    pub fn with_backend(backend: B, default_api_key: Option<String>) -> AppResult<Self> {
        validate_tables()?;
        Ok(Self {
            backend,
            default_api_key,
        })
    }

    /// 生成题目
    ///
    /// 返回的题目数量不超过 `request.count`；模型少生成时如实返回较少的题目。
    pub async fn generate_quiz(
        &self,
        request: &GenerationRequest,
        api_key: Option<&str>,
    ) -> AppResult<Vec<GeneratedQuestion>> {
        let report = self.generate_quiz_with_report(request, api_key).await?;
        Ok(report.questions)
    }

    /// 生成题目，并返回每道题哪些字段使用了默认值
    pub async fn generate_quiz_with_report(
        &self,
        request: &GenerationRequest,
        api_key: Option<&str>,
    ) -> AppResult<QuizReport> {
        let api_key = resolve_credential(api_key, self.default_api_key.as_deref())?;
        request.validate()?;

        let ctx = QuizCtx::new(request);
        logging::log_request(request);

        // ========== 1. 题型分配 ==========
        let allocations = distribute(request.count, &request.styles)?;
        logging::log_allocations(&allocations);

        // ========== 2. 组装提示词 ==========
        let user_prompt = compose_user_prompt(request, &allocations)?;
        let max_tokens = token_budget(request.count);
        info!(
            "{} 📝 提示词 {} 字符，token 预算 {}",
            ctx,
            user_prompt.len(),
            max_tokens
        );

        // ========== 3. 调用模型 ==========
        info!("{} 🤖 正在调用模型...", ctx);
        let raw = self
            .backend
            .complete(CompletionRequest {
                system_prompt: system_prompt(request.count),
                user_prompt,
                max_tokens,
                api_key,
            })
            .await
            .inspect_err(|e| error!("{} ❌ 模型调用失败: {}", ctx, e))?;

        // ========== 4. 解析与规范化 ==========
        let values = parse_questions(&raw)?;
        let report = normalize_with_report(&values, request.count as usize);

        let (questions, defaulted): (Vec<_>, Vec<_>) = report.into_iter().unzip();
        let report = QuizReport {
            questions,
            defaulted,
        };

        let repaired = report.repaired_count();
        if repaired > 0 {
            warn!("{} ⚠️ {} 道题的部分字段使用了默认值", ctx, repaired);
        }
        info!(
            "{} ✓ 生成完成: {}/{} 道题",
            ctx,
            report.questions.len(),
            request.count
        );

        Ok(report)
    }
}
