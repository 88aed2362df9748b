use std::sync::{Arc, Mutex};

use quiz_generator::error::BackendError;
use quiz_generator::{
    AppError, AppResult, CompletionBackend, CompletionRequest, Config, ErrorKind,
    GenerationRequest, QuizFlow,
};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};

/// 按脚本返回固定响应的后端，记录收到的请求
#[derive(Clone)]
enum Script {
    Reply(String),
    Timeout,
}

#[derive(Clone)]
struct ScriptedBackend {
    script: Script,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl ScriptedBackend {
    fn reply(text: impl Into<String>) -> Self {
        Self {
            script: Script::Reply(text.into()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn timeout() -> Self {
        Self {
            script: Script::Timeout,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl CompletionBackend for ScriptedBackend {
    async fn complete(&self, request: CompletionRequest) -> AppResult<String> {
        self.calls.lock().unwrap().push(request);
        match &self.script {
            Script::Reply(text) => Ok(text.clone()),
            Script::Timeout => Err(AppError::Backend(BackendError::Timeout {
                model: "scripted".to_string(),
                secs: 1,
            })),
        }
    }
}

fn flow(backend: ScriptedBackend) -> QuizFlow<ScriptedBackend> {
    let api_key = Some("config-key".to_string());
    QuizFlow::with_backend(backend, api_key).unwrap()
}

fn reply_with(questions: &[serde_json::Value]) -> ScriptedBackend {
    ScriptedBackend::reply(serde_json::to_string(questions).unwrap())
}

fn polity_request(count: u32) -> GenerationRequest {
    GenerationRequest::parse(
        "polity",
        None,
        "medium",
        &["factual", "statement", "statement"],
        count,
    )
    .unwrap()
}

fn question_json(i: usize) -> serde_json::Value {
    json!({
        "questionText": format!("Consider the following statements ({i})"),
        "questionType": "statement",
        "options": ["A) Only one", "B) Only two", "C) All three", "D) None"],
        "correctOption": i % 4,
        "explanation": "Article 32 is the right to constitutional remedies."
    })
}

#[tokio::test]
async fn test_end_to_end_with_prose_around_json() {
    let questions: Vec<_> = (0..5).map(question_json).collect();
    let raw = format!(
        "Here are the questions:\n```json\n{}\n```\nHope this helps!",
        serde_json::to_string_pretty(&questions).unwrap()
    );
    let backend = ScriptedBackend::reply(raw);
    let flow = flow(backend.clone());

    let result = assert_ok!(flow.generate_quiz(&polity_request(5), None).await);
    assert_eq!(result.len(), 5);
    assert_eq!(serde_json::to_value(&result[2]).unwrap(), questions[2]);

    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    let call = &calls[0];
    assert_eq!(call.api_key, "config-key");
    assert_eq!(call.max_tokens, 8000 + 5 * 300);
    let ending = "Generate exactly 5 questions now.";
    assert!(call.system_prompt.ends_with(ending));

    // 分配为 [2, 2, 1]，对应 factual, statement, statement
    let prompt = &call.user_prompt;
    let block = |n: u32| format!("GENERATE {n} QUESTION(S) IN THE FOLLOWING STYLE:");
    assert!(prompt.contains(&block(2)));
    assert!(prompt.contains(&block(1)));
    assert_eq!(prompt.matches("QUESTION STYLE: STATEMENT-BASED").count(), 2);
    assert!(prompt.contains("INDIAN POLITY & GOVERNANCE"));
}

#[tokio::test]
async fn test_explicit_api_key_wins() {
    let backend = ScriptedBackend::reply("[]");
    let flow = flow(backend.clone());
    let request = polity_request(3);

    assert_ok!(flow.generate_quiz(&request, Some("user-key")).await);
    assert_eq!(backend.calls()[0].api_key, "user-key");
}

#[tokio::test]
async fn test_missing_api_key_fails_before_calling_model() {
    let backend = ScriptedBackend::reply("[]");
    let flow = QuizFlow::with_backend(backend.clone(), None).unwrap();

    let err = assert_err!(flow.generate_quiz(&polity_request(3), None).await);
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_invalid_fields_are_repaired() {
    let raw = r#"[{"questionText":"Q1","options":["A","B"],"correctOption":5}]"#;
    let flow = flow(ScriptedBackend::reply(raw));
    let request =
        GenerationRequest::parse("history", None, "easy", &["factual"], 1).unwrap();

    let report = assert_ok!(flow.generate_quiz_with_report(&request, None).await);
    let question = &report.questions[0];
    assert_eq!(question.question_text, "Q1");
    assert_eq!(
        question.options,
        vec!["Option A", "Option B", "Option C", "Option D"]
    );
    assert_eq!(question.correct_option, 0);
    assert!(report.defaulted[0].options);
    assert!(report.defaulted[0].correct_option);
    assert!(!report.defaulted[0].question_text);
    assert_eq!(report.repaired_count(), 1);
}

#[tokio::test]
async fn test_plain_prose_is_malformed_response() {
    let prose = "Sorry, I could not come up with any questions today.";
    let flow = flow(ScriptedBackend::reply(prose));

    let err = assert_err!(flow.generate_quiz(&polity_request(3), None).await);
    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    assert_eq!(err.raw_response(), Some(prose));
}

#[tokio::test]
async fn test_over_and_under_generation() {
    let request = polity_request(5);

    let many: Vec<_> = (0..8).map(question_json).collect();
    let flow_many = flow(reply_with(&many));
    let result = assert_ok!(flow_many.generate_quiz(&request, None).await);
    assert_eq!(result.len(), 5);
    assert_eq!(result[4].question_text, many[4]["questionText"]);

    let few: Vec<_> = (0..2).map(question_json).collect();
    let flow_few = flow(reply_with(&few));
    let result = assert_ok!(flow_few.generate_quiz(&request, None).await);
    assert_eq!(result.len(), 2);
}

#[tokio::test]
async fn test_backend_failure_is_surfaced() {
    let flow = flow(ScriptedBackend::timeout());
    let err = assert_err!(flow.generate_quiz(&polity_request(2), None).await);
    assert_eq!(err.kind(), ErrorKind::BackendUnavailable);
}

#[tokio::test]
async fn test_invalid_request_is_config_error() {
    let backend = ScriptedBackend::reply("[]");
    let flow = flow(backend.clone());
    let mut request = polity_request(3);
    request.styles.clear();

    let err = assert_err!(flow.generate_quiz(&request, None).await);
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_concurrent_invocations_share_one_flow() {
    let questions: Vec<_> = (0..3).map(question_json).collect();
    let backend = reply_with(&questions);
    let flow = Arc::new(flow(backend.clone()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let flow = Arc::clone(&flow);
            let request = polity_request(3);
            tokio::spawn(async move { flow.generate_quiz(&request, None).await })
        })
        .collect();

    for handle in handles {
        let result = handle.await.unwrap().unwrap();
        assert_eq!(result.len(), 3);
    }

    let calls = backend.calls();
    assert_eq!(calls.len(), 4);
    // 提示词是确定的
    assert!(calls.iter().all(|c| c.user_prompt == calls[0].user_prompt));
}

/// 真实调用，需要设置 LLM_API_KEY 或 GOOGLE_API_KEY
#[tokio::test]
#[ignore] // 默认忽略，需要手动运行：cargo test -- --ignored
async fn test_generate_quiz_live() {
    quiz_generator::utils::logging::init(true);

    let config = Config::from_env();
    let flow = QuizFlow::new(&config).expect("创建出题流程失败");
    let request = GenerationRequest::parse(
        "Environment",
        Some("Ramsar wetlands".to_string()),
        "medium",
        &["statement", "match"],
        2,
    )
    .unwrap();

    let questions = flow
        .generate_quiz(&request, None)
        .await
        .expect("生成题目失败");

    println!("{}", serde_json::to_string_pretty(&questions).unwrap());
    assert!(questions.len() <= 2);
    assert!(questions
        .iter()
        .all(|q| q.options.len() == 4 && q.correct_option <= 3));
}
