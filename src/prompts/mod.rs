//! 提示词组装
//!
//! 纯函数：相同的请求与分配总是得到相同的提示词，重试时可以放心重新组装。
//!
//! 组装顺序：任务标题 → 科目/主题 → 科目知识库（可选）→ 难度校准 →
//! 每个非零题型一段说明 → 质量要求 → 自检清单 → JSON 输出格式。

pub mod difficulty_templates;
pub mod style_templates;
pub mod subject_contexts;
pub mod system;

use crate::error::{AppResult, ConfigError};
use crate::models::{Difficulty, GenerationRequest, QuestionStyle, StyleAllocation};

pub use difficulty_templates::DIFFICULTY_INSTRUCTIONS;
pub use style_templates::STYLE_INSTRUCTIONS;
pub use subject_contexts::{find_subject_context, SUBJECT_CONTEXTS};
pub use system::system_prompt;

const SECTION_RULE: &str =
    "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const STYLE_RULE: &str =
    "═══════════════════════════════════════════════════════════════════════════════";

/// 检查每个题型、每个难度都有对应模板
///
/// 在工作流构建时调用一次，把运行时的"找不到模板"提前变成启动失败。
pub fn validate_tables() -> Result<(), ConfigError> {
    for style in QuestionStyle::ALL {
        if !STYLE_INSTRUCTIONS.contains_key(style.as_str()) {
            return Err(ConfigError::MissingTemplate {
                table: "style",
                key: style.as_str().to_string(),
            });
        }
    }
    for difficulty in Difficulty::ALL {
        if !DIFFICULTY_INSTRUCTIONS.contains_key(difficulty.as_str()) {
            return Err(ConfigError::MissingTemplate {
                table: "difficulty",
                key: difficulty.as_str().to_string(),
            });
        }
    }
    Ok(())
}

fn style_template(style: QuestionStyle) -> Result<&'static str, ConfigError> {
    STYLE_INSTRUCTIONS
        .get(style.as_str())
        .copied()
        .ok_or_else(|| ConfigError::MissingTemplate {
            table: "style",
            key: style.as_str().to_string(),
        })
}

fn difficulty_template(difficulty: Difficulty) -> Result<&'static str, ConfigError> {
    DIFFICULTY_INSTRUCTIONS
        .get(difficulty.as_str())
        .copied()
        .ok_or_else(|| ConfigError::MissingTemplate {
            table: "difficulty",
            key: difficulty.as_str().to_string(),
        })
}

fn section(title: &str) -> String {
    format!("{SECTION_RULE}\n{title}\n{SECTION_RULE}")
}

/// 组装题型分配说明，数量为 0 的题型不出现
fn compose_style_blocks(allocations: &[StyleAllocation]) -> Result<String, ConfigError> {
    let mut blocks = Vec::with_capacity(allocations.len());
    for allocation in allocations.iter().filter(|a| a.count > 0) {
        let template = style_template(allocation.style)?;
        blocks.push(format!(
            "\n{STYLE_RULE}\nGENERATE {} QUESTION(S) IN THE FOLLOWING STYLE:\n{STYLE_RULE}\n{}",
            allocation.count, template
        ));
    }
    Ok(blocks.join("\n"))
}

/// 组装用户提示词
pub fn compose_user_prompt(
    request: &GenerationRequest,
    allocations: &[StyleAllocation],
) -> AppResult<String> {
    let total = request.count;
    let subject = request.subject.trim();

    let theme_context = match request.theme() {
        Some(theme) => format!(
            "SPECIFIC FOCUS: \"{theme}\" - Generate questions specifically on this topic/theme within {subject}."
        ),
        None => format!(
            "COVERAGE: Generate questions covering diverse important topics within {subject}."
        ),
    };

    let mut prompt = String::new();

    // 标题与科目
    prompt.push_str(&format!(
        r#"
╔══════════════════════════════════════════════════════════════════════════════╗
║                    UPSC CIVIL SERVICES PRELIMINARY EXAMINATION                ║
║                         MCQ GENERATION TASK                                   ║
╚══════════════════════════════════════════════════════════════════════════════╝

GENERATE {total} UPSC-STANDARD MCQ QUESTIONS

SUBJECT: {}
{theme_context}
"#,
        subject.to_uppercase()
    ));

    if let Some((_, knowledge)) = find_subject_context(subject) {
        prompt.push_str(&format!(
            "\n{}\n{knowledge}\n",
            section("SUBJECT-SPECIFIC CONTEXT & KNOWLEDGE BASE:")
        ));
    }

    prompt.push_str(&format!(
        "\n{}\n{}\n",
        section("DIFFICULTY CALIBRATION:"),
        difficulty_template(request.difficulty)?
    ));

    prompt.push_str(&format!(
        "\n{}\n{}\n",
        section("QUESTION STYLE DISTRIBUTION:"),
        compose_style_blocks(allocations)?
    ));

    prompt.push_str(&format!(
        r#"
{}

1. FACTUAL ACCURACY (MOST IMPORTANT):
   - Every fact, date, number, name MUST be 100% accurate
   - Cross-reference with NCERT textbooks and standard references
   - If uncertain about a fact, DO NOT include it
   - Constitutional articles, amendment numbers must be exact
   - Years of events, treaties, acts must be verified

2. SINGLE CORRECT ANSWER:
   - There must be exactly ONE correct answer
   - The correct answer must be DEFINITIVELY correct, not "most correct"
   - All distractors must be DEFINITIVELY incorrect
   - No ambiguity - a subject expert should agree on the answer

3. ELIMINATION-PROOF DISTRACTORS:
   - DO NOT use absolute words (only, always, never, all, none) in wrong options
   - UPSC aspirants know these patterns - your questions must be smarter
   - Distractors should be plausible misconceptions, not obvious wrong answers
   - Each distractor should trap someone with incomplete knowledge

4. UPSC LANGUAGE STANDARDS:
   - Use formal, precise language
   - Avoid colloquialisms or informal expressions
   - Technical terms should be used correctly
   - Questions should be clear but not simplistic

5. NO CONTROVERSIAL CONTENT:
   - Avoid politically sensitive topics
   - No questions on disputed territories without clear UPSC precedent
   - No questions on ongoing court cases
   - Avoid religious content unless historically factual

{}

Before finalizing EACH question, verify:

□ Is every fact in the question 100% accurate?
□ Is the correct answer definitively correct?
□ Are ALL distractors definitively incorrect?
□ Would a UPSC subject expert agree with the answer?
□ Is the explanation accurate and educational?
□ Does the explanation cite proper reasoning (not just "this is correct")?
□ For statement questions: Is each statement independently verifiable?
□ For match questions: Is only ONE combination correct?
□ For assertion-reason: Is the relationship between A and R correctly identified?
□ Are there NO absolute words (only, always, never, all, none) making distractors obvious?

{}

Return a JSON array with exactly {total} question objects.

Each object MUST have these exact fields:
{{
  "questionText": "The complete question text with all statements/assertions formatted properly",
  "questionType": "standard" | "statement" | "match" | "assertion",
  "options": ["A) Option text", "B) Option text", "C) Option text", "D) Option text"],
  "correctOption": 0 | 1 | 2 | 3,  // Index of correct answer (0=A, 1=B, 2=C, 3=D)
  "explanation": "Detailed explanation with: 1) Why correct answer is correct, 2) Why each distractor is wrong, 3) Source reference (NCERT/Laxmikanth/etc.)"
}}

IMPORTANT:
- Options array must have EXACTLY 4 options
- Each option must start with "A) ", "B) ", "C) ", "D) " prefix
- correctOption is 0-indexed (0=A, 1=B, 2=C, 3=D)
- Explanation should be educational and cite sources where applicable

{SECTION_RULE}

NOW GENERATE {total} HIGH-QUALITY UPSC MCQ QUESTIONS:"#,
        section("CRITICAL QUALITY REQUIREMENTS (NON-NEGOTIABLE):"),
        section("MANDATORY SELF-VERIFICATION CHECKLIST:"),
        section("OUTPUT FORMAT (STRICT JSON):"),
    ));

    Ok(prompt)
}
