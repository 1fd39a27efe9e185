use crate::algorithm::random::RandomSelector;
use crate::algorithm::visited::VisitedSet;
use crate::spatial::{LetterGrid, PlacementPath, Position};

/// Find a path spelling `word` that starts at `start`
///
/// Randomized depth-first search: every cell on the path must be empty or
/// already hold the required letter, neighbours are tried in shuffled order,
/// and the first complete path wins. `visited` is restored to its previous
/// contents before returning.
pub fn find_path(
    grid: &LetterGrid,
    word: &[char],
    start: Position,
    visited: &mut VisitedSet,
    random: &mut RandomSelector,
) -> Option<PlacementPath> {
    if word.is_empty() || visited.contains(start) {
        return None;
    }

    let mut reversed = extend(grid, word, start, visited, random)?;
    reversed.reverse();
    Some(PlacementPath::new(reversed))
}

/// Recursive step; returns the path from `current` to the end in reverse order
fn extend(
    grid: &LetterGrid,
    word: &[char],
    current: Position,
    visited: &mut VisitedSet,
    random: &mut RandomSelector,
) -> Option<Vec<Position>> {
    let (&letter, rest) = word.split_first()?;
    if !grid.accepts(current, letter) {
        return None;
    }

    if rest.is_empty() {
        let mut tail = Vec::with_capacity(word.len());
        tail.push(current);
        return Some(tail);
    }

    visited.insert(current);

    let mut neighbors = grid.neighbors(current);
    random.shuffle(&mut neighbors);

    let mut found = None;
    for next in neighbors {
        if visited.contains(next) {
            continue;
        }
        if let Some(mut tail) = extend(grid, rest, next, visited, random) {
            tail.push(current);
            found = Some(tail);
            break;
        }
    }

    visited.remove(current);
    found
}
