//! 题型说明模板，按 `QuestionStyle::as_str()` 索引
//!
//! 模板只依赖题型本身，数量由外层的 "GENERATE N QUESTION(S)" 描述给出。

use phf::phf_map;

pub static STYLE_INSTRUCTIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "factual" => r#"
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
QUESTION STYLE: STANDARD/FACTUAL MCQ
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

Format: Direct question with 4 options (A, B, C, D)
questionType: "standard"

UPSC Pattern Guidelines:
- Question should test specific knowledge or understanding
- Frame questions as "Which of the following...", "Consider the following...", or direct questions
- All four options must be grammatically consistent with the question stem
- Correct answer must be definitively correct, not "most correct"

Distractor Design (CRITICAL):
- DO NOT use absolute words like "only", "always", "never", "all", "none" in wrong options
  (UPSC aspirants know these are usually wrong - your distractors must be smarter)
- Each distractor should be a plausible misconception or commonly confused fact
- Distractors should test genuine knowledge gaps, not trick through wordplay
- Include distractors that would trap someone who studied superficially

Example Structure:
Q: Which of the following is NOT a feature of the Indian Constitution borrowed from the British Constitution?
A) Parliamentary system of government
B) Rule of law
C) Single citizenship
D) Bicameral legislature"#,

    "conceptual" => r#"
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
QUESTION STYLE: CONCEPTUAL/APPLICATION MCQ
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

Format: Scenario-based or concept-testing question with 4 options
questionType: "standard"

UPSC Pattern Guidelines:
- Tests understanding of WHY, not just WHAT
- May present a scenario and ask for correct interpretation
- Tests ability to apply constitutional/legal/economic principles
- Often connects theoretical knowledge to real-world application

Question Framing:
- "In the context of..., which statement is correct?"
- "Which of the following best explains...?"
- "The primary objective of [policy/provision] is:"
- Present a situation and ask what provision/article applies

Distractor Design:
- Include options that would be correct in a different context
- Use commonly held misconceptions as distractors
- Test understanding of scope and limitations of concepts
- Include options that mix up similar-sounding provisions"#,

    "statement" => r#"
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
QUESTION STYLE: STATEMENT-BASED (56% OF UPSC PAPER - MOST IMPORTANT!)
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

Format: Multiple statements to evaluate for correctness
questionType: "statement"

UPSC 2025 Distribution (follow this):
- Two-statement questions: ~15 per paper
- Three-statement questions: ~39 per paper (MOST COMMON)
- Four-statement questions: ~9 per paper
- Five+ statement questions: ~4 per paper

TWO-STATEMENT FORMAT:
"Consider the following statements:
Statement I: [First statement]
Statement II: [Second statement]
Which of the statements given above is/are correct?"

Options MUST be:
A) Both Statement I and Statement II are correct
B) Only Statement I is correct
C) Only Statement II is correct
D) Neither Statement I nor Statement II is correct

THREE-STATEMENT FORMAT (MOST USED IN UPSC):
"Consider the following statements regarding [topic]:
1. [Statement 1]
2. [Statement 2]
3. [Statement 3]
How many of the above statements is/are correct?"

Options MUST be:
A) Only one
B) Only two
C) All three
D) None

OR Alternative format:
"Which of the statements given above is/are correct?"
A) 1 and 2 only
B) 2 and 3 only
C) 1 and 3 only
D) 1, 2 and 3

FOUR-STATEMENT FORMAT:
Same as three-statement but with 4 statements
Options: A) Only one  B) Only two  C) Only three  D) All four

CRITICAL RULES FOR STATEMENT QUESTIONS:
1. Each statement must be independently verifiable as true or false
2. Statements should be related to the same topic but test different aspects
3. AVOID making all statements true or all false (makes question too easy)
4. Ideal: 1-2 statements correct, 1-2 incorrect (requires careful analysis)
5. Wrong statements should contain subtle errors, not obvious mistakes
6. Use specific facts (years, numbers, names) in some statements to test precision
7. Test common misconceptions in incorrect statements"#,

    "match" => r#"
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
QUESTION STYLE: MATCH THE FOLLOWING (~8 questions per UPSC paper)
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

Format: Two columns to match with combination options
questionType: "match"

STANDARD UPSC FORMAT:
"Match List-I with List-II and select the correct answer using the code given below:

List-I (Item)          List-II (Description)
A. [Item 1]            1. [Description 1]
B. [Item 2]            2. [Description 2]
C. [Item 3]            3. [Description 3]
D. [Item 4]            4. [Description 4]

Select the correct answer using the code given below:"

Options format:
A)  A-1, B-2, C-3, D-4
B)  A-2, B-1, C-4, D-3
C)  A-3, B-4, C-1, D-2
D)  A-4, B-3, C-2, D-1

DESIGN RULES:
1. Items in List-I should be of same category (all are rivers, all are acts, all are treaties, etc.)
2. Descriptions in List-II should be parallel (all are locations, all are years, all are features, etc.)
3. Include at least 2 items that could plausibly match with same description (creates difficulty)
4. Commonly confused pairs should be included to test precise knowledge
5. Ensure only ONE correct matching combination exists

COMMON UPSC MATCH THEMES:
- Treaties/Agreements ↔ Years/Countries
- Constitutional Articles ↔ Provisions
- Rivers ↔ Origins/Tributaries
- National Parks ↔ States/Species
- Government Schemes ↔ Objectives/Ministries
- International Organizations ↔ Headquarters/Functions
- Battles/Events ↔ Years/Leaders
- Authors ↔ Books
- Folk Arts ↔ States/Regions"#,

    "assertion" => r#"
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
QUESTION STYLE: ASSERTION-REASON (~7-18 questions per UPSC paper)
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

Format: Assertion and Reason with logical relationship analysis
questionType: "assertion"

EXACT UPSC FORMAT:
"Consider the following:
Assertion (A): [Statement of fact or claim]
Reason (R): [Statement explaining or related to assertion]

Which one of the following is correct in respect of the above statements?"

Options MUST BE EXACTLY:
A) Both A and R are correct and R is the correct explanation of A
B) Both A and R are correct but R is NOT the correct explanation of A
C) A is correct but R is incorrect
D) A is incorrect but R is correct

CRITICAL DESIGN RULES:
1. Assertion must be a clear, verifiable statement
2. Reason must also be independently verifiable
3. The relationship between A and R is what makes this question hard
4. Most challenging: Both true but R doesn't explain A (tests logical thinking)

DIFFICULTY CALIBRATION:
- Easy: A is false, R is true (or vice versa) - straightforward
- Medium: Both true, R clearly explains A - tests knowledge
- Hard: Both true, but R is NOT the correct explanation - tests reasoning

COMMON TRAPS TO CREATE:
- R is a true statement but explains something else, not A
- R partially explains A but misses the main reason
- A and R are both true and seem related but causation is reversed
- R is the effect, not the cause of A

EXAMPLE:
Assertion (A): The Indian Parliament cannot discuss the conduct of judges of Supreme Court and High Courts.
Reason (R): Judges can be removed only through impeachment.

(Both are true, but R doesn't explain A - the correct explanation relates to judicial independence, not removal process)"#,
};
