/// Majority evaluation: the full pair-score matrix and the per-skater
/// majority-victory tally.
///
/// Each unordered pair is judged exactly once; the opposing side of the
/// matrix is filled with the complement `judges - score`. That halves the
/// work and makes reciprocity structural rather than something to verify.
use crate::comparator::{pair_judges, pair_score};
use crate::normalize::Normalized;

/// Pairwise standings over a whole field, indexed by input position.
#[derive(Debug, Clone, PartialEq)]
pub struct Standings {
    /// `pair_scores[x][y]` is x's aggregate score against y. Diagonal 0.
    pub pair_scores: Vec<Vec<f64>>,
    /// Majority victories per skater: 1 per pair won, 0.5 per pair drawn.
    pub majority_victories: Vec<f64>,
}

impl Standings {
    /// Sum of x's pair scores against `others`, skipping x itself.
    /// Feeds the direct-comparison and comparison-with-all criteria.
    pub fn comparison_sum<I>(&self, x: usize, others: I) -> f64
    where
        I: IntoIterator<Item = usize>,
    {
        let mut sum = 0.0;
        for y in others {
            if y != x {
                sum += self.pair_scores[x][y];
            }
        }
        sum
    }
}

/// Judge every unordered pair once and tally majority victories.
///
/// Pairs are visited in ascending index order so the accumulation order,
/// and with it every floating-point sum, is fixed for a given input.
pub fn evaluate(normalized: &[Normalized]) -> Standings {
    let n = normalized.len();
    let mut pair_scores = vec![vec![0.0; n]; n];
    let mut majority_victories = vec![0.0; n];

    for x in 0..n {
        for y in (x + 1)..n {
            let judges = pair_judges(&normalized[x], &normalized[y]) as f64;
            let score = pair_score(&normalized[x], &normalized[y]);
            let complement = judges - score;
            pair_scores[x][y] = score;
            pair_scores[y][x] = complement;

            if score > complement {
                majority_victories[x] += 1.0;
            } else if score < complement {
                majority_victories[y] += 1.0;
            } else {
                majority_victories[x] += 0.5;
                majority_victories[y] += 0.5;
            }
        }
    }

    Standings {
        pair_scores,
        majority_victories,
    }
}
