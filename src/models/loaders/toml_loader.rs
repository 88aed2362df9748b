use serde::Deserialize;
use std::path::Path;
use tokio::fs;

use crate::error::{AppError, AppResult, FileError};
use crate::models::request::GenerationRequest;

/// TOML 请求文件的原始格式（题型、难度仍是字符串）
#[derive(Debug, Clone, Deserialize)]
pub struct RequestFile {
    pub subject: String,
    #[serde(default)]
    pub theme: Option<String>,
    pub difficulty: String,
    pub styles: Vec<String>,
    pub count: u32,
}

impl RequestFile {
    /// 转换为经过校验的出题请求
    pub fn into_request(self) -> AppResult<GenerationRequest> {
        let request = GenerationRequest::parse(
            self.subject,
            self.theme,
            &self.difficulty,
            self.styles.as_slice(),
            self.count,
        )?;
        Ok(request)
    }
}

/// 解析 TOML 文本为出题请求
pub fn parse_request_toml(content: &str, path: &str) -> AppResult<GenerationRequest> {
    let file: RequestFile = toml::from_str(content).map_err(|source| {
        AppError::File(FileError::TomlParseFailed {
            path: path.to_string(),
            source,
        })
    })?;
    file.into_request()
}

/// 从 TOML 文件加载出题请求
pub async fn load_request_toml(toml_file_path: &Path) -> AppResult<GenerationRequest> {
    let path = toml_file_path.display().to_string();
    let content = fs::read_to_string(toml_file_path)
        .await
        .map_err(|e| AppError::file_read_failed(&path, e))?;

    let request = parse_request_toml(&content, &path)?;
    tracing::info!(
        "已加载请求文件 {}: 科目 {} | 难度 {} | {} 道题",
        path,
        request.subject,
        request.difficulty,
        request.count
    );
    Ok(request)
}
