//! Property-based tests for lesson progression

use proptest::prelude::*;

use super::*;

/// Definitions with 0..=5 thresholds and value arrays sized to match.
fn arb_definition() -> impl Strategy<Value = CurriculumDefinition> {
    (
        prop::collection::vec(0.0f64..1.0, 0..6),
        prop::collection::btree_set("[a-z]{1,8}", 1..4),
        any::<bool>(),
    )
        .prop_flat_map(|(thresholds, names, signal_smoothing)| {
            let lesson_count = thresholds.len() + 1;
            let values = prop::collection::vec(
                prop::collection::vec(-10.0f64..10.0, lesson_count),
                names.len(),
            );
            (Just(thresholds), Just(names), Just(signal_smoothing), values)
        })
        .prop_map(|(thresholds, names, signal_smoothing, values)| CurriculumDefinition {
            measure: Measure::Progress,
            thresholds,
            min_lesson_length: 1,
            signal_smoothing,
            parameters: names.into_iter().zip(values).collect(),
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_set_lesson_num_stays_in_range(definition in arb_definition(), lesson in 0usize..100) {
        let max = definition.max_lesson_num();
        let mut curriculum = JsonCurriculum::new(definition);

        curriculum.set_lesson_num(lesson);
        prop_assert!(curriculum.lesson_num() <= max);
        if lesson <= max {
            prop_assert_eq!(curriculum.lesson_num(), lesson);
        }
    }

    #[test]
    fn prop_increment_moves_at_most_one_lesson(
        definition in arb_definition(),
        progresses in prop::collection::vec(-1.0f64..2.0, 0..20),
    ) {
        let max = definition.max_lesson_num();
        let mut curriculum = JsonCurriculum::new(definition);

        for progress in progresses {
            let before = curriculum.lesson_num();
            let advanced = curriculum.increment_lesson(progress);
            let after = curriculum.lesson_num();

            prop_assert_eq!(after - before, usize::from(advanced));
            prop_assert!(after <= max);
        }
    }

    #[test]
    fn prop_advancement_requires_exceeding_threshold(
        definition in arb_definition(),
        progress in 0.0f64..1.0,
    ) {
        prop_assume!(!definition.thresholds.is_empty());

        let threshold = definition.thresholds[0];
        let mut definition = definition;
        definition.signal_smoothing = false;
        let mut curriculum = JsonCurriculum::new(definition);

        let advanced = curriculum.increment_lesson(progress);
        prop_assert_eq!(advanced, progress > threshold);
    }

    #[test]
    fn prop_config_keys_match_parameters(definition in arb_definition(), lesson in 0usize..10) {
        let names: Vec<String> = definition.parameters.keys().cloned().collect();
        let mut curriculum = JsonCurriculum::new(definition);
        curriculum.set_lesson_num(lesson);

        let config = curriculum.get_config();
        let config_names: Vec<String> = config.keys().cloned().collect();
        prop_assert_eq!(config_names, names);
    }

    #[test]
    fn prop_config_values_come_from_current_lesson(definition in arb_definition()) {
        let mut curriculum = JsonCurriculum::new(definition.clone());

        for lesson in 0..definition.lesson_count() {
            curriculum.set_lesson_num(lesson);
            for (param, value) in curriculum.get_config() {
                prop_assert_eq!(value, definition.parameters[&param][lesson]);
            }
        }
    }
}
