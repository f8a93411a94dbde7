/// The tie-break cascade: ordering a group of skaters on equal majority
/// victories and recording how each one was separated.
///
/// The cascade itself is one reusable operator, [`refine`], driven by a
/// sequence of [`Criterion`] values. The four competition criteria are
/// assembled by [`criteria_for_group`]; `refine` neither knows nor cares
/// what they mean, which keeps the provenance bookkeeping testable on bare
/// numbers.
///
/// Provenance follows one rule: a member collects a criterion's record
/// exactly when it enters that criterion still tied with at least one
/// group member whose separation is unresolved. The record for the level
/// that finally separates a member is therefore included, and members
/// resolved early stop collecting while the rest of the group carries on.
/// Narrowing those "still tied with" sets is inherently sequential; each
/// level's sets depend on the previous level's.
use std::cmp::Ordering;

use crate::majority::Standings;
use crate::normalize::Normalized;
use crate::types::{TieBreak, TieBreakLevel};

/// One tie-break criterion: its level label and one value per group
/// member, parallel to the group. All values are computed before any
/// member is compared; criteria never mix mid-comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Criterion {
    pub level: TieBreakLevel,
    pub values: Vec<f64>,
}

/// Outcome of progressively refining one tied group.
///
/// All vectors use group-local positions `0..group_len` in the group's
/// original (input) order, except `order`, which lists those positions
/// best-first.
#[derive(Debug, Clone, PartialEq)]
pub struct Refinement {
    /// Group-local positions in final order, best first. Members identical
    /// under every criterion stay in their original relative order.
    pub order: Vec<usize>,
    /// Per member: the criteria it consulted, in cascade order. Empty for
    /// a group that never differs under any criterion.
    pub trails: Vec<Vec<TieBreak>>,
    /// Per member: the first criterion separating it from its neighbour in
    /// the final order. `None` when the two are identical throughout.
    pub summaries: Vec<Option<TieBreak>>,
}

/// Assemble the four competition criteria for one tied group.
///
/// `group` holds input positions; the returned values are parallel to it.
/// In order: pair scores within the group, artistic-mark sums, pair scores
/// against the whole field, and one-decimal-rounded total scores. For a
/// two-skater field the third criterion cannot say more than the first;
/// it earns its keep when outsiders exist.
pub fn criteria_for_group(
    group: &[usize],
    standings: &Standings,
    normalized: &[Normalized],
) -> Vec<Criterion> {
    let universe = normalized.len();
    vec![
        Criterion {
            level: TieBreakLevel::DirectComparison,
            values: group
                .iter()
                .map(|&x| standings.comparison_sum(x, group.iter().copied()))
                .collect(),
        },
        Criterion {
            level: TieBreakLevel::BScoreSum,
            values: group.iter().map(|&x| normalized[x].b_score_sum).collect(),
        },
        Criterion {
            level: TieBreakLevel::ComparisonAll,
            values: group
                .iter()
                .map(|&x| standings.comparison_sum(x, 0..universe))
                .collect(),
        },
        Criterion {
            level: TieBreakLevel::TotalScore,
            values: group.iter().map(|&x| normalized[x].total_score).collect(),
        },
    ]
}

/// Refine a tied group of `group_len` members under ordered `criteria`.
///
/// The final order is a stable descending lexicographic sort over the
/// criteria sequence. Trails start at the first criterion where any two
/// members differ; leading criteria that are uniform across the group
/// separate nobody and are recorded for nobody.
pub fn refine(criteria: &[Criterion], group_len: usize) -> Refinement {
    for criterion in criteria {
        assert_eq!(
            criterion.values.len(),
            group_len,
            "criterion {:?} carries {} values for a group of {}",
            criterion.level,
            criterion.values.len(),
            group_len
        );
    }

    let mut order: Vec<usize> = (0..group_len).collect();
    order.sort_by(|&a, &b| {
        for criterion in criteria {
            let by_value = criterion.values[b]
                .partial_cmp(&criterion.values[a])
                .unwrap_or(Ordering::Equal);
            if by_value != Ordering::Equal {
                return by_value;
            }
        }
        Ordering::Equal
    });

    let mut trails: Vec<Vec<TieBreak>> = vec![Vec::new(); group_len];
    let start = criteria
        .iter()
        .position(|criterion| !all_equal(&criterion.values));
    if let Some(start) = start {
        // still_tied[x]: members matching x under every criterion consulted
        // so far. Separation is symmetric, so a member resolved at some
        // level has already dropped out of every other member's set.
        let mut still_tied: Vec<Vec<usize>> = (0..group_len)
            .map(|x| (0..group_len).filter(|&y| y != x).collect())
            .collect();
        for criterion in &criteria[start..] {
            let active: Vec<bool> = still_tied.iter().map(|peers| !peers.is_empty()).collect();
            if !active.contains(&true) {
                break;
            }
            for x in 0..group_len {
                if active[x] {
                    trails[x].push(TieBreak {
                        level: criterion.level,
                        value: criterion.values[x],
                    });
                    still_tied[x].retain(|&y| criterion.values[y] == criterion.values[x]);
                }
            }
        }
    }

    let mut summaries: Vec<Option<TieBreak>> = vec![None; group_len];
    if group_len > 1 {
        for position in 0..group_len {
            let member = order[position];
            let neighbour = if position + 1 < group_len {
                order[position + 1]
            } else {
                order[position - 1]
            };
            summaries[member] = criteria.iter().find_map(|criterion| {
                (criterion.values[member] != criterion.values[neighbour]).then(|| TieBreak {
                    level: criterion.level,
                    value: criterion.values[member],
                })
            });
        }
    }

    Refinement {
        order,
        trails,
        summaries,
    }
}

fn all_equal(values: &[f64]) -> bool {
    values.windows(2).all(|pair| pair[0] == pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criterion(level: TieBreakLevel, values: &[f64]) -> Criterion {
        Criterion {
            level,
            values: values.to_vec(),
        }
    }

    fn levels(trail: &[TieBreak]) -> Vec<TieBreakLevel> {
        trail.iter().map(|record| record.level).collect()
    }

    #[test]
    fn first_criterion_can_separate_everyone() {
        let refinement = refine(
            &[criterion(TieBreakLevel::DirectComparison, &[3.0, 1.0, 2.0])],
            3,
        );
        assert_eq!(refinement.order, vec![0, 2, 1]);
        for x in 0..3 {
            assert_eq!(levels(&refinement.trails[x]), vec![TieBreakLevel::DirectComparison]);
            assert_eq!(
                refinement.summaries[x].map(|record| record.level),
                Some(TieBreakLevel::DirectComparison)
            );
        }
    }

    #[test]
    fn resolved_members_stop_collecting_records() {
        // Member 2 separates at the first criterion and must still carry
        // its record; members 0 and 1 go one level further.
        let refinement = refine(
            &[
                criterion(TieBreakLevel::DirectComparison, &[5.0, 5.0, 3.0]),
                criterion(TieBreakLevel::BScoreSum, &[7.0, 6.0, 9.0]),
            ],
            3,
        );
        assert_eq!(refinement.order, vec![0, 1, 2]);
        assert_eq!(
            levels(&refinement.trails[0]),
            vec![TieBreakLevel::DirectComparison, TieBreakLevel::BScoreSum]
        );
        assert_eq!(
            levels(&refinement.trails[1]),
            vec![TieBreakLevel::DirectComparison, TieBreakLevel::BScoreSum]
        );
        assert_eq!(levels(&refinement.trails[2]), vec![TieBreakLevel::DirectComparison]);
        assert_eq!(refinement.trails[2][0].value, 3.0);
    }

    #[test]
    fn uniform_leading_criteria_enter_no_trail() {
        let refinement = refine(
            &[
                criterion(TieBreakLevel::DirectComparison, &[1.5, 1.5]),
                criterion(TieBreakLevel::BScoreSum, &[6.0, 5.8]),
            ],
            2,
        );
        assert_eq!(refinement.order, vec![0, 1]);
        assert_eq!(levels(&refinement.trails[0]), vec![TieBreakLevel::BScoreSum]);
        assert_eq!(levels(&refinement.trails[1]), vec![TieBreakLevel::BScoreSum]);
        assert_eq!(
            refinement.summaries[0],
            Some(TieBreak {
                level: TieBreakLevel::BScoreSum,
                value: 6.0
            })
        );
    }

    #[test]
    fn identical_group_keeps_input_order() {
        let refinement = refine(
            &[
                criterion(TieBreakLevel::DirectComparison, &[1.0, 1.0, 1.0]),
                criterion(TieBreakLevel::BScoreSum, &[2.0, 2.0, 2.0]),
            ],
            3,
        );
        assert_eq!(refinement.order, vec![0, 1, 2]);
        assert!(refinement.trails.iter().all(|trail| trail.is_empty()));
        assert!(refinement.summaries.iter().all(|summary| summary.is_none()));
    }

    #[test]
    fn unresolved_members_collect_every_criterion() {
        // Members 1 and 2 never separate; member 0 leaves at the first
        // criterion. The stragglers collect all four records and keep
        // their input order at the bottom.
        let refinement = refine(
            &[
                criterion(TieBreakLevel::DirectComparison, &[9.0, 4.0, 4.0]),
                criterion(TieBreakLevel::BScoreSum, &[1.0, 2.0, 2.0]),
                criterion(TieBreakLevel::ComparisonAll, &[9.0, 4.0, 4.0]),
                criterion(TieBreakLevel::TotalScore, &[1.0, 2.0, 2.0]),
            ],
            3,
        );
        assert_eq!(refinement.order, vec![0, 1, 2]);
        assert_eq!(levels(&refinement.trails[0]), vec![TieBreakLevel::DirectComparison]);
        for x in [1, 2] {
            assert_eq!(
                levels(&refinement.trails[x]),
                vec![
                    TieBreakLevel::DirectComparison,
                    TieBreakLevel::BScoreSum,
                    TieBreakLevel::ComparisonAll,
                    TieBreakLevel::TotalScore,
                ]
            );
            assert!(refinement.summaries[x].is_none());
        }
    }

    #[test]
    fn summaries_compare_against_the_final_order_neighbour() {
        // Final order is 0, 1, 2. Members 0 and 1 agree on the first
        // criterion and differ on the second; members 1 and 2 differ
        // immediately.
        let refinement = refine(
            &[
                criterion(TieBreakLevel::DirectComparison, &[5.0, 5.0, 3.0]),
                criterion(TieBreakLevel::BScoreSum, &[2.0, 1.0, 9.0]),
            ],
            3,
        );
        assert_eq!(refinement.order, vec![0, 1, 2]);
        assert_eq!(
            refinement.summaries[0],
            Some(TieBreak {
                level: TieBreakLevel::BScoreSum,
                value: 2.0
            })
        );
        // Member 1's neighbour below is member 2: first difference is the
        // first criterion, not the one that separated it from member 0.
        assert_eq!(
            refinement.summaries[1],
            Some(TieBreak {
                level: TieBreakLevel::DirectComparison,
                value: 5.0
            })
        );
        // The last member compares upward.
        assert_eq!(
            refinement.summaries[2],
            Some(TieBreak {
                level: TieBreakLevel::DirectComparison,
                value: 3.0
            })
        );
    }

    #[test]
    fn singleton_group_is_trivial() {
        let refinement = refine(&[criterion(TieBreakLevel::DirectComparison, &[4.0])], 1);
        assert_eq!(refinement.order, vec![0]);
        assert!(refinement.trails[0].is_empty());
        assert!(refinement.summaries[0].is_none());
    }

    #[test]
    fn competition_criteria_in_cascade_order() {
        use crate::majority::evaluate;
        use crate::normalize::normalize;
        use crate::types::SkaterInput;

        // Two tied skaters plus an outsider that only the first one takes
        // a judge from. The third criterion sees it; the first cannot.
        let field: Vec<Normalized> = [
            &[10.0, 5.0, 5.0][..],
            &[5.0, 8.0, 5.0][..],
            &[9.0, 9.0, 9.0][..],
        ]
        .iter()
        .map(|technical| {
            normalize(&SkaterInput {
                name: "test".to_string(),
                technical: technical.iter().copied().map(Some).collect(),
                artistic: vec![None, None, None],
            })
        })
        .collect();
        let standings = evaluate(&field);
        let criteria = criteria_for_group(&[0, 1], &standings, &field);

        let levels: Vec<TieBreakLevel> = criteria.iter().map(|c| c.level).collect();
        assert_eq!(
            levels,
            vec![
                TieBreakLevel::DirectComparison,
                TieBreakLevel::BScoreSum,
                TieBreakLevel::ComparisonAll,
                TieBreakLevel::TotalScore,
            ]
        );
        assert_eq!(criteria[0].values, vec![1.5, 1.5]);
        assert_eq!(criteria[1].values, vec![0.0, 0.0]);
        assert_eq!(criteria[2].values, vec![2.5, 1.5]);
        assert_eq!(criteria[3].values, vec![20.0, 18.0]);
    }
}
