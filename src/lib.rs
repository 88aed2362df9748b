//! # Quiz Generator
//!
//! 一个用大语言模型生成 UPSC 预考选择题的 Rust 库
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 题型、难度、出题请求、输出题目
//! - `loaders` - 从 TOML 文件加载出题请求
//!
//! ### ② 提示词层（Prompts）
//! - `prompts/` - 静态模板表（题型 / 难度 / 科目知识库）与提示词组装
//! - 模板表在工作流构建时校验完整性
//!
//! ### ③ 业务能力层（Services）
//! - `style_distributor` - 题型数量分配
//! - `LlmService` - 调用模型拿到原始文本
//! - `response_parser` - 从响应中提取 JSON 数组
//! - `normalizer` - 逐字段校验与默认值修复
//!
//! ### ④ 流程层（Workflow）
//! - `QuizFlow` - 流程编排（分配 → 提示词 → 模型 → 解析 → 规范化）
//! - `QuizCtx` - 日志上下文
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod prompts;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, ErrorKind};
pub use models::{
    DefaultedFields, Difficulty, GeneratedQuestion, GenerationRequest, QuestionStyle,
    StyleAllocation,
};
pub use services::{CompletionBackend, CompletionRequest, LlmService};
pub use workflow::{QuizCtx, QuizFlow, QuizReport};
