//! Tests for word placement and the substitution ladder

#[cfg(test)]
mod tests {
    use lexigrid::algorithm::placer::{PlacementExhaustion, PlacementLimits, Placer};
    use lexigrid::algorithm::random::RandomSelector;
    use lexigrid::algorithm::scoring::{FirstFoundScorer, TurnCountScorer};
    use lexigrid::lexicon::VocabularyIndex;
    use lexigrid::spatial::{LetterGrid, PlacementPath};
    use std::collections::HashSet;
    use std::time::{Duration, Instant};

    const LIMITS: PlacementLimits = PlacementLimits {
        attempts_per_word: 200,
        candidate_paths: 20,
        max_replacements: 100,
    };

    fn reserved(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    // Tests placing a word on an empty grid
    // Verified by writing letters in reverse order
    #[test]
    fn test_place_writes_word() {
        let mut grid = LetterGrid::new(3, 3);
        let mut random = RandomSelector::new(42);
        let placer = Placer::new(LIMITS, &TurnCountScorer);

        let path = placer
            .place(&mut grid, "CRANE", &mut random)
            .expect("Expected CRANE to fit an empty 3x3 grid");

        assert!(path.is_valid());
        assert_eq!(path.spell(&grid), Some("CRANE".to_string()));
        assert_eq!(grid.empty_positions().len(), 4);
        assert_eq!(placer.limits(), LIMITS);
    }

    // Tests that the highest scoring candidate is committed
    // Verified by committing the first candidate found
    #[test]
    fn test_place_commits_best_candidate() {
        let limits = PlacementLimits {
            attempts_per_word: 9,
            candidate_paths: 9,
            max_replacements: 0,
        };
        let corner = |path: &PlacementPath| -> usize { usize::from(path.start() == Some([0, 0])) };

        for seed in 0..10 {
            let mut grid = LetterGrid::new(3, 3);
            let mut random = RandomSelector::new(seed);
            let path = Placer::new(limits, &corner)
                .place(&mut grid, "AB", &mut random)
                .expect("Expected AB to fit");
            assert_eq!(path.start(), Some([0, 0]));
        }
    }

    // Tests that a failed placement leaves the grid untouched
    // Verified by writing partial candidates
    #[test]
    fn test_place_failure_leaves_grid() {
        let mut grid = LetterGrid::from_rows(&["XCX", "XAX", "XXX"]);
        let before = grid.clone();
        let mut random = RandomSelector::new(1);

        let result = Placer::new(LIMITS, &FirstFoundScorer).place(&mut grid, "CAT", &mut random);

        assert!(result.is_none());
        assert_eq!(grid, before);
        assert!(Placer::new(LIMITS, &FirstFoundScorer).place(&mut grid, "", &mut random).is_none());
    }

    // Tests that a zero start budget places nothing
    // Verified by ignoring attempts_per_word
    #[test]
    fn test_place_respects_start_budget() {
        let limits = PlacementLimits {
            attempts_per_word: 0,
            ..LIMITS
        };
        let mut grid = LetterGrid::new(3, 3);
        let mut random = RandomSelector::new(2);

        assert!(Placer::new(limits, &TurnCountScorer).place(&mut grid, "CAT", &mut random).is_none());
        assert_eq!(grid.empty_positions().len(), 9);
    }

    // Tests substitution with a same-length word when the original cannot fit
    // Verified by returning the original word after a substitute lands
    #[test]
    fn test_place_slot_substitutes() {
        let index = VocabularyIndex::from_words(["cat", "dog"]).expect("Failed to build index");
        let mut grid = LetterGrid::from_rows(&["D.."]);
        let mut random = RandomSelector::new(9);

        let placed = Placer::new(LIMITS, &TurnCountScorer)
            .place_slot(&mut grid, "CAT", &index, &reserved(&["CAT"]), &mut random)
            .expect("Expected DOG to replace CAT");

        assert_eq!(placed.word, "DOG");
        assert_eq!(placed.path.spell(&grid), Some("DOG".to_string()));
        assert_eq!(grid.read(&[[0, 0], [0, 1], [0, 2]]), Some("DOG".to_string()));
    }

    // Tests exhaustion once every substitute fails
    // Verified by counting only substitutes in tried
    #[test]
    fn test_place_slot_exhaustion() {
        let index = VocabularyIndex::from_words(["cat", "cow", "dogs"]).expect("Failed to build index");
        let mut grid = LetterGrid::from_rows(&["D.."]);
        let mut random = RandomSelector::new(4);
        let placer = Placer::new(LIMITS, &TurnCountScorer);

        let result = placer.place_slot(&mut grid, "CAT", &index, &reserved(&["CAT"]), &mut random);
        assert_eq!(
            result,
            Err(PlacementExhaustion {
                word: "CAT".to_string(),
                tried: 2,
            })
        );
        assert_eq!(grid.get([0, 0]), Some('D'));
        assert_eq!(grid.empty_positions().len(), 2);
    }

    // Tests that reserved words are never used as substitutes
    // Verified by dropping the reserved filter
    #[test]
    fn test_place_slot_skips_reserved() {
        let index = VocabularyIndex::from_words(["cat", "dog"]).expect("Failed to build index");
        let mut grid = LetterGrid::from_rows(&["D.."]);
        let mut random = RandomSelector::new(4);

        let result = Placer::new(LIMITS, &TurnCountScorer).place_slot(
            &mut grid,
            "CAT",
            &index,
            &reserved(&["CAT", "DOG"]),
            &mut random,
        );

        let Err(exhaustion) = result else {
            panic!("Expected the slot to be exhausted");
        };
        assert_eq!(exhaustion.tried, 1);
        assert_eq!(
            exhaustion.to_string(),
            "No placement for 'CAT' after trying 1 words"
        );
    }

    // Tests that no substitutes are tried without a replacement budget
    // Verified by always trying one substitute
    #[test]
    fn test_place_slot_zero_replacements() {
        let limits = PlacementLimits {
            max_replacements: 0,
            ..LIMITS
        };
        let index = VocabularyIndex::from_words(["cat", "dog"]).expect("Failed to build index");
        let mut grid = LetterGrid::from_rows(&["D.."]);
        let mut random = RandomSelector::new(4);

        let result = Placer::new(limits, &TurnCountScorer).place_slot(
            &mut grid,
            "CAT",
            &index,
            &reserved(&["CAT"]),
            &mut random,
        );
        assert!(matches!(result, Err(PlacementExhaustion { tried: 1, .. })));
    }

    // Tests that a word longer than the grid has cells is rejected at once
    // Verified by removing the length check and watching the search run for minutes
    #[test]
    fn test_place_rejects_word_longer_than_grid() {
        let mut grid = LetterGrid::new(6, 6);
        let mut random = RandomSelector::new(9);
        let long_word = "A".repeat(37);
        let started = Instant::now();

        let placed =
            Placer::new(LIMITS, &TurnCountScorer).place(&mut grid, &long_word, &mut random);

        assert!(placed.is_none());
        assert!(started.elapsed() < Duration::from_secs(5));
        assert_eq!(grid.empty_positions().len(), 36);
    }
}
