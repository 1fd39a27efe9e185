use crate::spatial::PlacementPath;

/// Scores candidate placements; higher scores are committed first
pub trait PathScorer {
    /// Score a complete candidate path
    fn score(&self, path: &PlacementPath) -> usize;
}

/// Prefers winding paths by counting direction changes
///
/// Straight placements score 0 and are the easiest for a player to spot.
#[derive(Debug, Clone, Copy, Default)]
pub struct TurnCountScorer;

impl PathScorer for TurnCountScorer {
    fn score(&self, path: &PlacementPath) -> usize {
        path.direction_changes()
    }
}

/// Gives every path the same score so the first path found is committed
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFoundScorer;

impl PathScorer for FirstFoundScorer {
    fn score(&self, _path: &PlacementPath) -> usize {
        0
    }
}

impl<F> PathScorer for F
where
    F: Fn(&PlacementPath) -> usize,
{
    fn score(&self, path: &PlacementPath) -> usize {
        self(path)
    }
}

/// Index of the highest scoring path, earliest on ties
pub fn best_candidate<S: PathScorer + ?Sized>(
    scorer: &S,
    candidates: &[PlacementPath],
) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (index, path) in candidates.iter().enumerate() {
        let score = scorer.score(path);
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((index, score));
        }
    }
    best.map(|(index, _)| index)
}
