use std::path::PathBuf;

use anyhow::{Context, Result};
use quiz_generator::models::load_request_toml;
use quiz_generator::utils::logging;
use quiz_generator::{Config, QuizFlow};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::try_from_env()?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 加载出题请求（第一个参数，默认 quiz_request.toml）
    let request_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("quiz_request.toml"));
    let request = load_request_toml(&request_path).await?;

    // 生成题目
    let flow = QuizFlow::new(&config)?;
    let questions = flow.generate_quiz(&request, None).await?;

    let output = serde_json::to_string_pretty(&questions).context("序列化题目失败")?;
    println!("{}", output);

    Ok(())
}
