//! Property-based tests for config merging and fan-out

use std::collections::BTreeMap;

use proptest::prelude::*;

use super::tests::StubCurriculum;
use super::*;
use crate::curriculum::ResetParameters;

fn arb_config() -> impl Strategy<Value = ResetParameters> {
    prop::collection::btree_map("[a-z]{1,6}", -100.0f64..100.0, 0..5)
}

fn arb_school() -> impl Strategy<Value = School<StubCurriculum>> {
    prop::collection::btree_map("Brain[0-9]", arb_config(), 0..5).prop_map(|configs| {
        let curriculums = configs
            .into_iter()
            .map(|(brain, config)| (brain, StubCurriculum::with_config(config)))
            .collect();
        School::with_curriculums(curriculums)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_merged_config_is_union_of_brain_configs(school in arb_school()) {
        let config = school.get_config();

        for curriculum in school.brains_to_curriculums().values() {
            for param in curriculum.config.keys() {
                prop_assert!(config.contains_key(param));
            }
        }
        for param in config.keys() {
            let known = school
                .brains_to_curriculums()
                .values()
                .any(|curriculum| curriculum.config.contains_key(param));
            prop_assert!(known);
        }
    }

    #[test]
    fn prop_merge_takes_value_from_last_brain_with_key(school in arb_school()) {
        let config = school.get_config();

        for (param, value) in &config {
            let winner = school
                .brains_to_curriculums()
                .values()
                .filter_map(|curriculum| curriculum.config.get(param))
                .next_back()
                .expect("merged key must come from some brain");
            prop_assert_eq!(value, winner);
        }
    }

    #[test]
    fn prop_set_all_reaches_every_brain(school in arb_school(), lesson in 0usize..50) {
        let mut school = school;
        school.set_all_curriculums_to_lesson_num(lesson);

        prop_assert!(school.lesson_nums().values().all(|&l| l == lesson));
    }

    #[test]
    fn prop_lesson_nums_round_trip(school in arb_school(), lessons in prop::collection::vec(0usize..50, 0..5)) {
        let mut school = school;
        let assignment: BTreeMap<String, usize> = school
            .lesson_nums()
            .into_keys()
            .zip(lessons)
            .collect();

        school.set_lesson_nums(&assignment).expect("all brains exist");
        for (brain, lesson) in &assignment {
            prop_assert_eq!(school.lesson_nums()[brain], *lesson);
        }
    }

    #[test]
    fn prop_unknown_brain_is_always_rejected(school in arb_school(), lesson in 0usize..50) {
        let mut school = school;
        let request = BTreeMap::from([("NoSuchBrain".to_string(), lesson)]);

        prop_assert!(school.set_lesson_nums(&request).is_err());
    }
}
