/// Score normalization: raw judge marks reduced to the per-judge totals the
/// comparator reads.
///
/// Totals are derived exactly once per skater, up front, and every later
/// stage reads the same vector. Re-deriving a sum along a different
/// accumulation path can differ in the last bit, and the comparator's
/// equality checks are exact.
use crate::types::SkaterInput;

/// A skater's marks in comparator-ready form.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    /// Per-judge totals (technical + artistic, missing marks as 0.0).
    /// Length is the skater's effective judge count.
    pub totals: Vec<f64>,
    /// Per-judge artistic marks with missing marks as 0.0, at the raw
    /// artistic length. Read positionally by the comparator.
    pub b_scores: Vec<f64>,
    /// Sum of non-missing artistic marks (tie-break criterion 2).
    pub b_score_sum: f64,
    /// One-decimal-rounded sum of totals (display and criterion 4).
    pub total_score: f64,
}

impl Normalized {
    /// Effective judge count for this skater.
    pub fn judge_count(&self) -> usize {
        self.totals.len()
    }

    /// Total read for judge `j`, 0.0 beyond this skater's own length.
    pub fn total_at(&self, j: usize) -> f64 {
        self.totals.get(j).copied().unwrap_or(0.0)
    }

    /// Artistic read for judge `j`, 0.0 beyond this skater's own length.
    pub fn b_at(&self, j: usize) -> f64 {
        self.b_scores.get(j).copied().unwrap_or(0.0)
    }
}

/// Effective judge count: the larger of the non-missing technical and
/// non-missing artistic counts. A skater with marks `[1.4, 1.4, None]` and
/// no artistic marks has two effective judges, not three.
pub fn effective_judge_count(skater: &SkaterInput) -> usize {
    let technical = skater.technical.iter().filter(|m| m.is_some()).count();
    let artistic = skater.artistic.iter().filter(|m| m.is_some()).count();
    technical.max(artistic)
}

/// Round to one decimal place, the display precision for total scores.
pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Reduce one skater's raw marks to comparator-ready form.
pub fn normalize(skater: &SkaterInput) -> Normalized {
    let judges = effective_judge_count(skater);
    let mut totals = Vec::with_capacity(judges);
    for j in 0..judges {
        let technical = skater.technical.get(j).copied().flatten().unwrap_or(0.0);
        let artistic = skater.artistic.get(j).copied().flatten().unwrap_or(0.0);
        totals.push(technical + artistic);
    }

    let b_scores = skater.artistic.iter().map(|m| m.unwrap_or(0.0)).collect();
    let b_score_sum = skater.artistic.iter().flatten().sum();
    let total_score = round_one_decimal(totals.iter().sum());

    Normalized {
        totals,
        b_scores,
        b_score_sum,
        total_score,
    }
}
