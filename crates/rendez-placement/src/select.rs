//! Ranking and top-K selection over scored members.

use std::cmp::Ordering;

/// A member name paired with its score for one key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Scored<'a> {
    pub name: &'a str,
    pub score: f64,
}

/// Rank order: higher score first, then lexicographically smaller name.
///
/// Names are unique in a registry, so this is a strict total order and every
/// selection below has exactly one correct answer regardless of the order
/// the registry yields its entries.
pub(crate) fn rank(a: &Scored<'_>, b: &Scored<'_>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.name.cmp(b.name))
}

/// Return the best-ranked entry, or `None` if there are none.
pub(crate) fn best<'a>(scores: impl IntoIterator<Item = Scored<'a>>) -> Option<Scored<'a>> {
    scores.into_iter().min_by(rank)
}

/// Partition `scores` so it holds exactly the `count` best-ranked entries.
///
/// Runs in expected linear time. The order of the retained entries is
/// unspecified. `count` must not exceed `scores.len()`.
pub(crate) fn select_top(scores: &mut Vec<Scored<'_>>, count: usize) {
    debug_assert!(count <= scores.len());
    if count == 0 {
        scores.clear();
        return;
    }
    if count < scores.len() {
        scores.select_nth_unstable_by(count - 1, rank);
        scores.truncate(count);
    }
}

/// Like [`select_top`], then sort the retained entries best first.
pub(crate) fn select_top_ranked(scores: &mut Vec<Scored<'_>>, count: usize) {
    select_top(scores, count);
    scores.sort_unstable_by(rank);
}
