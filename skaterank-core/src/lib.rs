/// skaterank-core: Pure-computation competition ranking engine.
///
/// Per-judge marks, pairwise majority victories, ranked list with tie-break
/// provenance. No IO, no filesystem, just the ranking arithmetic. Bring your
/// own score sheets.
///
/// Skaters are identified by their position in the input collection. Names
/// are display labels only; two skaters may share one and nothing breaks.
///
/// # Quick start
///
/// ```rust
/// use skaterank_core::{rank_skaters, SkaterInput};
///
/// let field = vec![
///     SkaterInput {
///         name: "Anna".to_string(),
///         technical: vec![Some(3.9), Some(4.0), Some(4.1)],
///         artistic: vec![Some(3.9), Some(3.9), Some(4.0)],
///     },
///     SkaterInput {
///         name: "Ben".to_string(),
///         technical: vec![Some(4.0), Some(3.8), Some(3.9)],
///         artistic: vec![Some(4.0), Some(3.9), Some(3.9)],
///     },
/// ];
///
/// for r in rank_skaters(&field) {
///     println!("{}. {} ({} M.V., {:.1} total)", r.rank, r.skater.name, r.majority_victories, r.total_score);
/// }
/// ```

pub mod cascade;
pub mod comparator;
pub mod head_to_head;
pub mod majority;
pub mod normalize;
pub mod rank;
pub mod types;

// Re-export primary public API at crate root.
pub use cascade::{criteria_for_group, refine, Criterion, Refinement};
pub use comparator::{compare_judge, pair_judges, pair_score};
pub use majority::Standings;
pub use normalize::{effective_judge_count, normalize, Normalized};
pub use rank::rank_skaters;
pub use types::{HeadToHeadEntry, SkaterInput, SkaterResult, TieBreak, TieBreakLevel};
