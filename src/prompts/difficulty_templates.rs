//! 难度校准模板，按 `Difficulty::as_str()` 索引

use phf::phf_map;

pub static DIFFICULTY_INSTRUCTIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "easy" => r#"
DIFFICULTY: EASY (NCERT Level - ~33% of actual UPSC paper)
Target: Foundation-level questions that test basic recall and fundamental understanding.

Characteristics:
- Questions answerable directly from NCERT textbooks (Class 6-12)
- Tests basic facts, definitions, and fundamental concepts
- Clear, unambiguous language without tricky phrasing
- One option should be obviously correct to a prepared candidate
- Distractors should be clearly wrong but not absurd

Example difficulty benchmark:
- "Which Article of the Constitution deals with Right to Education?" (Factual recall)
- "The Indus Valley Civilization was primarily known for:" (Basic NCERT fact)
- Simple cause-effect relationships from textbooks"#,

    "medium" => r#"
DIFFICULTY: MEDIUM (Application Level - ~35% of actual UPSC paper)
Target: Questions requiring conceptual understanding and application of knowledge.

Characteristics:
- Requires connecting multiple concepts or applying knowledge to scenarios
- Tests understanding beyond mere memorization
- May require elimination strategy to arrive at correct answer
- Distractors are plausible and test fine distinctions
- Questions from standard reference books (Laxmikanth, Spectrum, Ramesh Singh)

Example difficulty benchmark:
- Comparing two constitutional provisions and their implications
- Understanding why a particular policy was implemented (not just what)
- Questions linking current affairs to static syllabus concepts
- Questions requiring understanding of exceptions and special cases"#,

    "hard" => r#"
DIFFICULTY: HARD (Analytical Level - ~32% of actual UPSC paper)
Target: Questions requiring deep analysis, multi-concept integration, and nuanced understanding.

Characteristics:
- Multi-layered reasoning required
- Tests obscure facts or fine distinctions between similar concepts
- Elimination techniques alone won't work - needs solid knowledge
- Sophisticated distractors that appear correct on surface reading
- Questions that integrate current affairs with deep static knowledge
- May test exceptions, recent amendments, or lesser-known provisions

Example difficulty benchmark:
- Statement questions where 2-3 statements appear correct but have subtle errors
- Questions on recent constitutional amendments and their implications
- Match-the-following with similar-sounding options
- Assertion-Reason where both seem independently true but relationship is tricky
- Questions on international conventions/treaties with specific provisions"#,
};
