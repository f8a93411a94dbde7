/// Rank assignment, the top-level entry point of the engine.
///
/// The field is sorted by majority victories, runs of equal victories are
/// handed to the tie-break cascade, and every skater receives a distinct
/// 1-based rank. Skaters a full cascade cannot separate stay in input
/// order and still get consecutive ranks; placements are never shared.
use std::cmp::Ordering;

use crate::cascade::{criteria_for_group, refine};
use crate::head_to_head;
use crate::majority;
use crate::normalize::{normalize, Normalized};
use crate::types::{SkaterInput, SkaterResult, TieBreak};

/// Rank a field of skaters by pairwise majority victories.
///
/// Pure and deterministic: identical input produces identical output,
/// bit for bit. Results come back best-first; each carries its position
/// in the input collection, so callers can resolve head-to-head opponent
/// references after the reordering.
pub fn rank_skaters(skaters: &[SkaterInput]) -> Vec<SkaterResult> {
    let n = skaters.len();
    let normalized: Vec<Normalized> = skaters.iter().map(normalize).collect();
    let standings = majority::evaluate(&normalized);
    let reports = head_to_head::report(&normalized);

    // Stable sort keeps tied skaters in input order, which fixes both the
    // group order the cascade sees and the fallback order for groups it
    // cannot separate.
    let mut by_victories: Vec<usize> = (0..n).collect();
    by_victories.sort_by(|&a, &b| {
        standings.majority_victories[b]
            .partial_cmp(&standings.majority_victories[a])
            .unwrap_or(Ordering::Equal)
    });

    let make_result = |index: usize, rank: usize, tie_break: Option<TieBreak>, trail: Option<Vec<TieBreak>>| {
        SkaterResult {
            skater: skaters[index].clone(),
            index,
            total_score: normalized[index].total_score,
            majority_victories: standings.majority_victories[index],
            rank,
            tie_break,
            tie_break_trail: trail,
            head_to_head: reports[index].clone(),
        }
    };

    let mut results = Vec::with_capacity(n);
    let mut start = 0;
    while start < n {
        let mut end = start + 1;
        while end < n
            && standings.majority_victories[by_victories[end]]
                == standings.majority_victories[by_victories[start]]
        {
            end += 1;
        }

        let run = &by_victories[start..end];
        if run.len() == 1 {
            results.push(make_result(run[0], start + 1, None, None));
        } else {
            let criteria = criteria_for_group(run, &standings, &normalized);
            let refinement = refine(&criteria, run.len());
            for (offset, &local) in refinement.order.iter().enumerate() {
                let trail = &refinement.trails[local];
                results.push(make_result(
                    run[local],
                    start + 1 + offset,
                    refinement.summaries[local],
                    (!trail.is_empty()).then(|| trail.clone()),
                ));
            }
        }
        start = end;
    }

    results
}
