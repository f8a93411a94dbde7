/// Head-to-head reporting: per-opponent strict vote tallies.
///
/// This deliberately keeps different books from the pair-score matrix. A
/// judge's exact tie contributes 0.5 to each side of a pair score but is no
/// vote at all here, so a pairing can be drawn with zero votes cast.
use crate::comparator::{compare_judge, pair_judges};
use crate::normalize::Normalized;
use crate::types::HeadToHeadEntry;

/// Build the full head-to-head report: one list per skater, one entry per
/// opponent, ordered by opponent position.
///
/// Both directions of a pair come from the same comparator pass, so one
/// side's `votes_for` is always the other side's `votes_against`, and at
/// most one side of a pair has `won` set.
pub fn report(normalized: &[Normalized]) -> Vec<Vec<HeadToHeadEntry>> {
    let n = normalized.len();
    let mut votes = vec![vec![(0u32, 0u32); n]; n];

    for x in 0..n {
        for y in (x + 1)..n {
            let mut for_x = 0u32;
            let mut for_y = 0u32;
            for j in 0..pair_judges(&normalized[x], &normalized[y]) {
                let verdict = compare_judge(
                    normalized[x].total_at(j),
                    normalized[x].b_at(j),
                    normalized[y].total_at(j),
                    normalized[y].b_at(j),
                );
                if verdict == 1.0 {
                    for_x += 1;
                } else if verdict == 0.0 {
                    for_y += 1;
                }
            }
            votes[x][y] = (for_x, for_y);
            votes[y][x] = (for_y, for_x);
        }
    }

    (0..n)
        .map(|x| {
            (0..n)
                .filter(|&y| y != x)
                .map(|y| {
                    let (votes_for, votes_against) = votes[x][y];
                    HeadToHeadEntry {
                        opponent: y,
                        won: votes_for > votes_against,
                        votes_for,
                        votes_against,
                    }
                })
                .collect()
        })
        .collect()
}
