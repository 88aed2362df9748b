//! 题型分配
//!
//! 每个题型先分到 floor(count / N)，余数按输入顺序逐个补给前面的题型。

use crate::error::ConfigError;
use crate::models::{QuestionStyle, StyleAllocation};

/// 把 `count` 道题分配到 `styles` 的每个位置
///
/// 重复的题型按位置分别计数，不合并。`styles` 为空且 `count > 0` 时返回配置错误。
pub fn distribute(
    count: u32,
    styles: &[QuestionStyle],
) -> Result<Vec<StyleAllocation>, ConfigError> {
    if styles.is_empty() {
        if count > 0 {
            return Err(ConfigError::EmptyStyles { count });
        }
        return Ok(Vec::new());
    }

    let n = styles.len() as u32;
    let base = count / n;
    let remainder = (count % n) as usize;

    Ok(styles
        .iter()
        .enumerate()
        .map(|(index, &style)| StyleAllocation {
            style,
            count: base + u32::from(index < remainder),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use QuestionStyle::{Assertion, Conceptual, Factual, Match, Statement};

    fn counts(allocations: &[StyleAllocation]) -> Vec<u32> {
        allocations.iter().map(|a| a.count).collect()
    }

    #[test]
    fn test_duplicate_styles_are_counted_per_position() {
        let allocations = distribute(5, &[Factual, Statement, Statement]).unwrap();
        assert_eq!(counts(&allocations), vec![2, 2, 1]);
        assert_eq!(allocations[0].style, Factual);
        assert_eq!(allocations[1].style, Statement);
        assert_eq!(allocations[2].style, Statement);
    }

    #[test]
    fn test_fewer_questions_than_styles() {
        let allocations = distribute(2, &[Match, Assertion, Factual, Conceptual]).unwrap();
        assert_eq!(counts(&allocations), vec![1, 1, 0, 0]);
    }

    #[test]
    fn test_single_style_gets_everything() {
        let allocations = distribute(17, &[Statement]).unwrap();
        assert_eq!(counts(&allocations), vec![17]);
    }

    #[test]
    fn test_empty_styles() {
        assert!(matches!(
            distribute(3, &[]),
            Err(ConfigError::EmptyStyles { count: 3 })
        ));
        assert!(distribute(0, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_sum_and_shape_hold_for_many_inputs() {
        for n in 1..=QuestionStyle::ALL.len() {
            let styles = &QuestionStyle::ALL[..n];
            for count in 0..=40u32 {
                let allocations = distribute(count, styles).unwrap();
                assert_eq!(allocations.len(), n);
                assert_eq!(allocations.iter().map(|a| a.count).sum::<u32>(), count);

                let remainder = (count as usize) % n;
                let floor = count / n as u32;
                for (i, a) in allocations.iter().enumerate() {
                    let expected = if i < remainder { floor + 1 } else { floor };
                    assert_eq!(a.count, expected, "count={count} n={n} i={i}");
                    assert_eq!(a.style, styles[i]);
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let styles = [Conceptual, Match, Conceptual];
        assert_eq!(
            distribute(8, &styles).unwrap(),
            distribute(8, &styles).unwrap()
        );
    }
}
