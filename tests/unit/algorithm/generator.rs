//! Tests for the generation state machine, retry ladders and configuration

#[cfg(test)]
mod tests {
    use lexigrid::GenerationError;
    use lexigrid::algorithm::board::PlacedWord;
    use lexigrid::algorithm::filler::DecoyFiller;
    use lexigrid::algorithm::generator::{
        AttemptBudget, BoardGenerator, GenerationPolicy, GeneratorConfig, generate_board,
    };
    use lexigrid::algorithm::random::RandomSelector;
    use lexigrid::algorithm::scoring::FirstFoundScorer;
    use lexigrid::algorithm::selection::select_words;
    use lexigrid::lexicon::{TargetDistribution, VocabularyIndex};
    use std::collections::HashSet;
    use std::time::{Duration, Instant};

    struct Decoy(char);

    impl DecoyFiller for Decoy {
        fn letter_weights(&self, _placed: &[PlacedWord]) -> Vec<(char, f64)> {
            vec![(self.0, 1.0)]
        }
    }

    fn small_config(rows: usize, cols: usize, distribution: &[(usize, usize)]) -> GeneratorConfig {
        let distribution = TargetDistribution::new(distribution.iter().copied());
        GeneratorConfig {
            rows,
            cols,
            target_count: distribution.total(),
            distribution,
            ..GeneratorConfig::default()
        }
    }

    fn short_words() -> VocabularyIndex {
        VocabularyIndex::from_words([
            "cat", "dog", "sun", "hat", "pen", "map", "cup", "bee", "owl", "fox", "tree", "lamp",
            "rose", "bird", "fish", "moon",
        ])
        .expect("Failed to build index")
    }

    // Tests the default configuration
    // Verified by changing a default constant
    #[test]
    fn test_default_config_is_valid() {
        let config = GeneratorConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!((config.rows, config.cols), (5, 6));
        assert_eq!(config.target_count, 7);
        assert_eq!(config.distribution.total(), 7);
        assert_eq!(config.policy, GenerationPolicy::Strict);
        assert_eq!(config.placement_limits().attempts_per_word, 200);
        assert_eq!(config.placement_limits().candidate_paths, 20);
        assert_eq!(config.placement_limits().max_replacements, 100);
        assert_eq!(config.board_attempts, 20);
        assert_eq!(config.generation_attempts, 30);
        assert_eq!(config.selection_attempts, 5);
    }

    // Tests validation of dimensions and caps
    // Verified by skipping the cap loop
    #[test]
    fn test_invalid_configs() {
        let cases = [
            GeneratorConfig {
                rows: 0,
                ..GeneratorConfig::default()
            },
            GeneratorConfig {
                cols: 1_001,
                ..GeneratorConfig::default()
            },
            GeneratorConfig {
                target_count: 0,
                ..GeneratorConfig::default()
            },
            GeneratorConfig {
                board_attempts: 0,
                ..GeneratorConfig::default()
            },
            GeneratorConfig {
                generation_attempts: 0,
                ..GeneratorConfig::default()
            },
        ];

        for config in cases {
            assert!(matches!(
                config.validate(),
                Err(GenerationError::InvalidParameter { .. })
            ));
        }

        let index = short_words();
        let config = GeneratorConfig {
            rows: 0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            generate_board(&index, config, 1),
            Err(GenerationError::InvalidParameter {
                parameter: "rows",
                ..
            })
        ));
    }

    // Tests the bounded retry counter
    // Verified by allowing one attempt past the cap
    #[test]
    fn test_attempt_budget() {
        let mut budget = AttemptBudget::new(2);
        assert_eq!(budget.remaining(), 2);
        assert!(!budget.is_exhausted());

        assert!(budget.try_consume());
        assert!(budget.try_consume());
        assert!(!budget.try_consume());

        assert_eq!(budget.used(), 2);
        assert_eq!(budget.remaining(), 0);
        assert!(budget.is_exhausted());
        assert!(AttemptBudget::new(0).is_exhausted());
    }

    // Tests a successful generation end to end
    // Verified by skipping the fill state
    #[test]
    fn test_generate_success() {
        let index = short_words();
        let config = small_config(5, 5, &[(4, 2), (3, 2)]);
        let mut generator = BoardGenerator::new(&index, config, 42);

        let board = generator.generate().expect("Expected a board");

        assert_eq!(board.placed().len(), 4);
        assert_eq!(board.shortfall(), 0);
        assert!(board.grid().is_complete());
        assert!(board.is_consistent());
        let unique: HashSet<&str> = board.words().into_iter().collect();
        assert_eq!(unique.len(), 4);
        assert!(board.words().iter().all(|w| index.contains(w)));
        assert!(generator.stats.selections >= 1);
        assert!(generator.stats.boards >= 1);
        assert_eq!(generator.config().rows, 5);
    }

    // Tests that placed words come longest first
    // Verified by placing in draw order
    #[test]
    fn test_words_longest_first() {
        let index = short_words();
        let config = small_config(5, 5, &[(3, 2), (4, 2)]);
        let board = generate_board(&index, config, 9).expect("Expected a board");

        let lengths: Vec<usize> = board.placed().iter().map(PlacedWord::len).collect();
        let mut sorted = lengths.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(lengths, sorted);
    }

    // Tests failure once every selection is exhausted
    // Verified by returning a partial board
    #[test]
    fn test_generation_failure() {
        let index = VocabularyIndex::from_words(["abcdefghij"]).expect("Failed to build index");
        let config = GeneratorConfig {
            board_attempts: 2,
            generation_attempts: 3,
            ..small_config(2, 2, &[(10, 1)])
        };
        let mut generator = BoardGenerator::new(&index, config, 5);

        let result = generator.generate();

        assert!(matches!(
            result,
            Err(GenerationError::GenerationFailed {
                generation_attempts: 3,
                board_attempts: 2,
                requested: 1,
            })
        ));
        assert_eq!(generator.stats.selections, 3);
        assert_eq!(generator.stats.boards, 6);
    }

    // Tests that strict mode redraws short selections
    // Verified by accepting short selections in strict mode
    #[test]
    fn test_strict_rejects_shortfall() {
        let index = VocabularyIndex::from_words(["cat"]).expect("Failed to build index");
        let config = GeneratorConfig {
            generation_attempts: 4,
            ..small_config(3, 3, &[(3, 2)])
        };
        let mut generator = BoardGenerator::new(&index, config, 1);

        assert!(matches!(
            generator.generate(),
            Err(GenerationError::GenerationFailed { .. })
        ));
        assert_eq!(generator.stats.shortfalls, 4);
        assert_eq!(generator.stats.boards, 0);
    }

    // Tests best-effort boards with a short selection
    // Verified by failing on shortfall regardless of policy
    #[test]
    fn test_best_effort_accepts_shortfall() {
        let index = VocabularyIndex::from_words(["cat"]).expect("Failed to build index");
        let config = GeneratorConfig {
            policy: GenerationPolicy::BestEffort,
            ..small_config(3, 3, &[(3, 2)])
        };

        let board = generate_board(&index, config, 1).expect("Expected a best-effort board");

        assert_eq!(board.words(), vec!["CAT"]);
        assert_eq!(board.requested(), 2);
        assert_eq!(board.shortfall(), 1);
        assert!(board.grid().is_complete());
    }

    // Tests dropping an unplaceable slot on a single board
    // Verified by ignoring the drop flag
    #[test]
    fn test_place_board_drop_exhausted() {
        let index = VocabularyIndex::from_words(["cat", "dog"]).expect("Failed to build index");
        let config = small_config(1, 3, &[(3, 2)]);
        let mut generator = BoardGenerator::new(&index, config, 3);
        let words = vec!["CAT".to_string(), "DOG".to_string()];

        let strict = generator.place_board(&words, false);
        assert!(matches!(strict, Err(ref e) if e.word == "DOG"));

        let (grid, placed) = generator
            .place_board(&words, true)
            .expect("Expected CAT to be kept");
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].word, "CAT");
        assert_eq!(placed[0].path.spell(&grid), Some("CAT".to_string()));
        assert_eq!(generator.stats.dropped_slots, 1);
    }

    // Tests placing a whole selection on fresh boards
    // Verified by reusing the grid across board attempts
    #[test]
    fn test_place_selection() {
        let index = short_words();
        let distribution = TargetDistribution::new([(3, 3)]);
        let selection = select_words(&index, &distribution, 3, 5, &mut RandomSelector::new(2));
        let mut generator = BoardGenerator::new(&index, small_config(4, 4, &[(3, 3)]), 2);

        let (grid, placed) = generator
            .place_selection(&selection)
            .expect("Expected three short words to fit a 4x4 grid");

        assert_eq!(placed.len(), 3);
        for word in &placed {
            assert_eq!(word.path.spell(&grid), Some(word.word.clone()));
        }
    }

    // Tests strategy injection
    // Verified by ignoring the injected filler
    #[test]
    fn test_custom_strategies() {
        let index = short_words();
        let config = small_config(4, 4, &[(3, 2)]);
        let mut generator = BoardGenerator::new(&index, config, 6)
            .with_scorer(FirstFoundScorer)
            .with_filler(Decoy('#'));

        let board = generator.generate().expect("Expected a board");

        let on_path: HashSet<[usize; 2]> = board
            .placed()
            .iter()
            .flat_map(|p| p.path.positions().iter().copied())
            .collect();
        for position in board.grid().positions() {
            if !on_path.contains(&position) {
                assert_eq!(board.grid().get(position), Some('#'));
            }
        }

        let explicit = BoardGenerator::with_strategies(
            &index,
            small_config(4, 4, &[(3, 2)]),
            RandomSelector::new(6),
            FirstFoundScorer,
            Decoy('#'),
        )
        .generate()
        .expect("Expected a board");
        assert_eq!(explicit, board);
    }

    // Tests reproducibility under a fixed seed
    // Verified by seeding from entropy
    #[test]
    fn test_deterministic() {
        let index = short_words();
        let config = small_config(5, 5, &[(4, 2), (3, 2)]);

        let first = generate_board(&index, config.clone(), 123).expect("Expected a board");
        let second = generate_board(&index, config, 123).expect("Expected a board");
        assert_eq!(first, second);
    }

    // Tests that a word too long for the grid never stalls generation
    // Verified by selecting words without the grid area ceiling
    #[test]
    fn test_oversized_word_fails_fast() {
        let long_word = "a".repeat(37);
        let index = VocabularyIndex::from_words(["crane", "slate", long_word.as_str()])
            .expect("Failed to build index");
        let strict = GeneratorConfig {
            rows: 6,
            cols: 6,
            target_count: 3,
            distribution: TargetDistribution::new([(5, 2)]),
            attempts_per_word: 1,
            candidate_paths: 1,
            max_replacements: 0,
            board_attempts: 1,
            generation_attempts: 1,
            selection_attempts: 1,
            policy: GenerationPolicy::Strict,
        };
        let started = Instant::now();

        let result = generate_board(&index, strict.clone(), 5);
        assert!(matches!(
            result,
            Err(GenerationError::GenerationFailed { requested: 3, .. })
        ));

        let best_effort = GeneratorConfig {
            attempts_per_word: 200,
            candidate_paths: 20,
            board_attempts: 5,
            policy: GenerationPolicy::BestEffort,
            ..strict
        };
        let board = generate_board(&index, best_effort, 5).expect("Expected a short board");
        let words: HashSet<&str> = board.words().into_iter().collect();
        assert_eq!(words, HashSet::from(["CRANE", "SLATE"]));
        assert_eq!(board.shortfall(), 1);
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
