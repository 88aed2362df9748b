use thiserror::Error;

/// 应用程序错误类型
///
/// 按照处理方式分为三大类：配置错误（立即失败，不重试）、
/// 生成后端不可用（提示用户重试）、模型响应格式错误（附带原始响应）。
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 生成后端不可用
    #[error("生成后端不可用: {0}")]
    Backend(#[from] BackendError),
    /// 模型响应格式错误
    #[error("模型响应格式错误: {0}")]
    Malformed(#[from] MalformedResponseError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
}

/// 错误类别，供调用方决定重试策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    BackendUnavailable,
    MalformedResponse,
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 没有任何可用的 API 密钥
    #[error("缺少 API 密钥，请在设置中添加 (或设置 LLM_API_KEY 环境变量)")]
    MissingCredential,
    /// 题型列表为空但题目数量大于 0
    #[error("题型列表为空，无法分配 {count} 道题目")]
    EmptyStyles { count: u32 },
    /// 未知题型
    #[error("未知题型: '{value}'")]
    UnknownStyle { value: String },
    /// 未知难度
    #[error("未知难度: '{value}'")]
    UnknownDifficulty { value: String },
    /// 科目为空
    #[error("科目不能为空")]
    EmptySubject,
    /// 题目数量非法
    #[error("题目数量必须大于 0，当前为 {count}")]
    InvalidCount { count: u32 },
    /// 提示词模板缺失
    #[error("缺少 {table} 模板: '{key}'")]
    MissingTemplate { table: &'static str, key: String },
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

/// 生成后端错误（网络、鉴权、超时、服务端错误）
#[derive(Debug, Error)]
pub enum BackendError {
    /// 构建请求失败
    #[error("构建 LLM 请求失败: {source}")]
    RequestBuildFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// API 调用失败
    #[error("LLM API调用失败 (模型: {model}): {source}")]
    ApiCallFailed {
        model: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 请求超时
    #[error("LLM API调用超时 (模型: {model}, {secs} 秒)")]
    Timeout { model: String, secs: u64 },
    /// 返回内容为空
    #[error("LLM返回内容为空 (模型: {model})")]
    EmptyContent { model: String },
}

/// 模型响应格式错误，保留原始响应便于排查
#[derive(Debug, Error)]
pub enum MalformedResponseError {
    /// 响应中找不到 JSON 数组
    #[error("响应中没有找到 JSON 数组")]
    NoJsonArray { raw: String },
    /// 找到的数组不是合法 JSON
    #[error("JSON 数组解析失败: {source}")]
    InvalidJson {
        raw: String,
        source: serde_json::Error,
    },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        source: toml::de::Error,
    },
}

impl MalformedResponseError {
    /// 原始响应文本
    pub fn raw(&self) -> &str {
        match self {
            MalformedResponseError::NoJsonArray { raw }
            | MalformedResponseError::InvalidJson { raw, .. } => raw,
        }
    }
}

impl AppError {
    /// 错误类别
    ///
    /// 文件错误只出现在请求加载阶段，归为配置错误。
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Config(_) | AppError::File(_) => ErrorKind::Configuration,
            AppError::Backend(_) => ErrorKind::BackendUnavailable,
            AppError::Malformed(_) => ErrorKind::MalformedResponse,
        }
    }

    /// 如果是响应格式错误，返回模型的原始响应
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            AppError::Malformed(e) => Some(e.raw()),
            _ => None,
        }
    }

    // ========== 便捷构造函数 ==========

    /// 创建LLM API调用错误
    pub fn llm_api_failed(
        model: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Backend(BackendError::ApiCallFailed {
            model: model.into(),
            source: Box::new(source),
        })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::Backend(BackendError::RequestBuildFailed {
            source: Box::new(err),
        })
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
