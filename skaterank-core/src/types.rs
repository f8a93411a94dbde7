/// Input format for a single skater's score sheet.
///
/// Skaters are identified by their position in the input collection, not by
/// name. Names are display labels only and may repeat freely.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkaterInput {
    /// Display name. Never used as a key.
    pub name: String,
    /// Technical (A) marks, one slot per judge. `None` = missing mark.
    pub technical: Vec<Option<f64>>,
    /// Artistic (B) marks, one slot per judge. `None` = missing mark.
    pub artistic: Vec<Option<f64>>,
}

/// The four tie-break criteria, in the order the cascade consults them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TieBreakLevel {
    /// Pair scores summed over the tied group only.
    DirectComparison,
    /// Sum of non-missing artistic marks.
    BScoreSum,
    /// Pair scores summed over the whole field.
    ComparisonAll,
    /// Total score rounded to one decimal.
    TotalScore,
}

/// One consulted tie-break criterion and the skater's value under it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TieBreak {
    pub level: TieBreakLevel,
    pub value: f64,
}

/// One opponent's entry in a skater's head-to-head report.
///
/// Only strict per-judge preferences count as votes here; judges who see an
/// exact tie contribute to neither side, so `votes_for + votes_against` can
/// fall short of the pair's judge count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeadToHeadEntry {
    /// Position of the opponent in the input collection.
    pub opponent: usize,
    /// True when `votes_for > votes_against`. A drawn pairing is not a win.
    pub won: bool,
    /// Judges who strictly preferred this skater.
    pub votes_for: u32,
    /// Judges who strictly preferred the opponent.
    pub votes_against: u32,
}

/// One skater's row in the final ranking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkaterResult {
    /// The input record, passed through untouched.
    pub skater: SkaterInput,
    /// Position of this skater in the input collection.
    pub index: usize,
    /// Sum of per-judge totals, rounded to one decimal.
    pub total_score: f64,
    /// Majority victories. Multiples of 0.5 in `[0, n-1]`.
    pub majority_victories: f64,
    /// Final rank, 1-based. Distinct for every skater, ties included.
    pub rank: usize,
    /// First criterion separating this skater from its neighbour in the
    /// final order. `None` outside tie groups and for identical neighbours.
    pub tie_break: Option<TieBreak>,
    /// Every criterion this skater's tie group consulted before the skater
    /// was uniquely placed, in cascade order. `None` outside tie groups and
    /// when the whole group is identical under all four criteria.
    pub tie_break_trail: Option<Vec<TieBreak>>,
    /// One entry per opponent, ordered by opponent position.
    pub head_to_head: Vec<HeadToHeadEntry>,
}
