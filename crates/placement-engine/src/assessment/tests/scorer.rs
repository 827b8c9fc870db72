use super::common::*;
use crate::assessment::domain::{Confidence, Difficulty, GradedAnswer, ItemId, PlacementLevel};
use crate::assessment::{classify, LevelScorer, ScoreError};

#[test]
fn eighteen_of_twenty_places_at_c2_with_high_confidence() {
    let bank = standard_bank();
    let result = LevelScorer::new(&bank)
        .score(&graded_answers(20, 18))
        .expect("scored");

    assert_eq!(result.percentage, 90.0);
    assert_eq!(result.level, PlacementLevel::C2);
    assert_eq!(result.confidence, Confidence::High);
}

#[test]
fn four_of_ten_places_at_a2_with_medium_confidence() {
    let bank = standard_bank();
    let result = LevelScorer::new(&bank)
        .score(&graded_answers(10, 4))
        .expect("scored");

    assert_eq!(result.percentage, 40.0);
    assert_eq!(result.level, PlacementLevel::A2);
    assert_eq!(result.confidence, Confidence::Medium);
}

#[test]
fn empty_answer_set_is_rejected() {
    let bank = standard_bank();
    let err = LevelScorer::new(&bank)
        .score(&[])
        .expect_err("empty answers rejected");
    assert_eq!(err, ScoreError::EmptyAnswers);
}

#[test]
fn totals_mirror_the_answer_set() {
    let bank = standard_bank();
    let scorer = LevelScorer::new(&bank);

    for total in 1..=30 {
        for correct in 0..=total {
            let result = scorer
                .score(&graded_answers(total, correct))
                .expect("scored");
            assert_eq!(result.correct_count, correct);
            assert_eq!(result.total_questions, total);
        }
    }
}

#[test]
fn more_correct_answers_never_lower_the_level() {
    let bank = standard_bank();
    let scorer = LevelScorer::new(&bank);

    for total in 1..=40 {
        let mut previous = PlacementLevel::A0;
        for correct in 0..=total {
            let level = scorer
                .score(&graded_answers(total, correct))
                .expect("scored")
                .level;
            assert!(
                level >= previous,
                "{correct}/{total} dropped from {previous} to {level}"
            );
            previous = level;
        }
    }
}

#[test]
fn band_boundaries_resolve_as_documented() {
    assert_eq!(classify(100.0), (PlacementLevel::C2, Confidence::High));
    assert_eq!(classify(90.0), (PlacementLevel::C2, Confidence::High));
    assert_eq!(classify(89.9).0, PlacementLevel::C1);
    assert_eq!(classify(85.0), (PlacementLevel::C1, Confidence::High));
    assert_eq!(classify(84.9), (PlacementLevel::C1, Confidence::Medium));
    assert_eq!(classify(75.0), (PlacementLevel::B2, Confidence::High));
    assert_eq!(classify(70.0), (PlacementLevel::B2, Confidence::Medium));
    assert_eq!(classify(60.0), (PlacementLevel::B1, Confidence::High));
    assert_eq!(classify(55.0), (PlacementLevel::B1, Confidence::Medium));
    assert_eq!(classify(45.0), (PlacementLevel::A2, Confidence::High));
    assert_eq!(classify(44.9), (PlacementLevel::A2, Confidence::Medium));
    assert_eq!(classify(30.0), (PlacementLevel::A1, Confidence::Medium));
    assert_eq!(classify(20.0), (PlacementLevel::A1, Confidence::Low));
    assert_eq!(classify(19.9), (PlacementLevel::A0, Confidence::Medium));
    assert_eq!(classify(0.0), (PlacementLevel::A0, Confidence::Medium));
}

#[test]
fn attainable_boundaries_match_the_table() {
    let bank = standard_bank();
    let scorer = LevelScorer::new(&bank);

    let b1_medium = scorer.score(&graded_answers(20, 11)).expect("scored");
    assert_eq!(b1_medium.percentage, 55.0);
    assert_eq!(
        (b1_medium.level, b1_medium.confidence),
        (PlacementLevel::B1, Confidence::Medium)
    );

    let b1_high = scorer.score(&graded_answers(20, 12)).expect("scored");
    assert_eq!(
        (b1_high.level, b1_high.confidence),
        (PlacementLevel::B1, Confidence::High)
    );

    let a1_low = scorer.score(&graded_answers(20, 4)).expect("scored");
    assert_eq!(
        (a1_low.level, a1_low.confidence),
        (PlacementLevel::A1, Confidence::Low)
    );

    let a0 = scorer.score(&graded_answers(20, 3)).expect("scored");
    assert_eq!(a0.level, PlacementLevel::A0);
}

#[test]
fn percentage_is_not_truncated() {
    let bank = standard_bank();
    let result = LevelScorer::new(&bank)
        .score(&graded_answers(3, 2))
        .expect("scored");
    assert!((result.percentage - 66.666_666).abs() < 1e-3);
    assert_eq!(result.level, PlacementLevel::B1);
    assert_eq!(result.confidence, Confidence::High);
}

#[test]
fn unknown_ids_count_overall_but_not_per_tier() {
    let bank = standard_bank();
    let answers = vec![
        GradedAnswer {
            question_id: ItemId::new("a1-01"),
            selected_option_index: 0,
            is_correct: true,
        },
        GradedAnswer {
            question_id: ItemId::new("retired-17"),
            selected_option_index: 2,
            is_correct: true,
        },
        GradedAnswer {
            question_id: ItemId::new("c2-01"),
            selected_option_index: 3,
            is_correct: false,
        },
    ];

    let result = LevelScorer::new(&bank).score(&answers).expect("scored");

    assert_eq!(result.total_questions, 3);
    assert_eq!(result.correct_count, 2);
    assert_eq!(result.unresolved, 1);
    assert_eq!(result.breakdown.len(), 6);
    let attributed: usize = result.breakdown.iter().map(|tally| tally.total).sum();
    assert_eq!(attributed, 2);

    let a1 = result
        .breakdown
        .iter()
        .find(|tally| tally.difficulty == Difficulty::A1)
        .expect("a1 tally");
    assert_eq!((a1.correct, a1.total), (1, 1));
    let c2 = result
        .breakdown
        .iter()
        .find(|tally| tally.difficulty == Difficulty::C2)
        .expect("c2 tally");
    assert_eq!((c2.correct, c2.total), (0, 1));
}

#[test]
fn tier_mix_does_not_change_the_placement() {
    let bank = standard_bank();
    let scorer = LevelScorer::new(&bank);
    let answer = |id: &str, is_correct: bool| GradedAnswer {
        question_id: ItemId::new(id),
        selected_option_index: 0,
        is_correct,
    };

    let easy_right = scorer
        .score(&[answer("a1-01", true), answer("c2-01", false)])
        .expect("scored");
    let hard_right = scorer
        .score(&[answer("a1-01", false), answer("c2-01", true)])
        .expect("scored");

    assert_eq!(easy_right.level, hard_right.level);
    assert_eq!(easy_right.confidence, hard_right.confidence);
    assert_ne!(easy_right.breakdown, hard_right.breakdown);
}

#[test]
fn supplied_correctness_flag_is_trusted() {
    let bank = standard_bank();
    let answers = vec![GradedAnswer {
        question_id: ItemId::new("a1-01"),
        selected_option_index: 3,
        is_correct: true,
    }];

    let result = LevelScorer::new(&bank).score(&answers).expect("scored");
    assert_eq!(result.correct_count, 1);
    assert_eq!(result.level, PlacementLevel::C2);
}
