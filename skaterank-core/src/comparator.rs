/// The pairwise judge comparator, the atomic primitive of the whole method.
///
/// All comparisons are exact floating-point comparisons. Scores that differ
/// in the last bit are different scores; an epsilon here would make "tie"
/// depend on an arbitrary threshold and break the strict complement between
/// the two sides of a pair.
use crate::normalize::Normalized;

/// One judge's verdict on a pair, from the first skater's perspective:
/// 1.0 = first wins, 0.0 = second wins, 0.5 = exact tie.
///
/// Totals decide; the artistic (B) mark breaks equal totals.
pub fn compare_judge(total_a: f64, b_a: f64, total_b: f64, b_b: f64) -> f64 {
    if total_a > total_b {
        return 1.0;
    }
    if total_a < total_b {
        return 0.0;
    }
    if b_a > b_b {
        return 1.0;
    }
    if b_a < b_b {
        return 0.0;
    }
    0.5
}

/// Judge count for a pair: the larger of the two effective judge counts.
/// The shorter-scored skater reads as 0.0 on the judges it is missing.
pub fn pair_judges(a: &Normalized, b: &Normalized) -> usize {
    a.judge_count().max(b.judge_count())
}

/// Aggregate pair score for `a` against `b`: per-judge verdicts summed over
/// the pair's judge count. Always in `[0, pair_judges]`.
///
/// The opposing score is `pair_judges - pair_score`, derived by the caller.
/// It is never recomputed from `b`'s perspective.
pub fn pair_score(a: &Normalized, b: &Normalized) -> f64 {
    let mut score = 0.0;
    for j in 0..pair_judges(a, b) {
        score += compare_judge(a.total_at(j), a.b_at(j), b.total_at(j), b.b_at(j));
    }
    score
}
