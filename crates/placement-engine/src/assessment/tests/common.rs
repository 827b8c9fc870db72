use std::collections::HashSet;
use std::sync::Arc;

use axum::response::Response;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;

use crate::assessment::domain::{
    AnswerSubmission, AssessmentItem, Difficulty, GradedAnswer, ItemId, Skill,
};
use crate::assessment::{placement_router, PlacementService, QuestionBank, QuizSample};

pub(super) fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub(super) fn standard_bank() -> QuestionBank {
    QuestionBank::standard()
}

pub(super) fn item(id: &str, difficulty: Difficulty) -> AssessmentItem {
    AssessmentItem {
        id: ItemId::new(id),
        text: format!("Prompt for {id}"),
        options: vec![
            "first".to_string(),
            "second".to_string(),
            "third".to_string(),
        ],
        correct_option_index: 1,
        difficulty,
        skill: Skill::Grammar,
    }
}

/// Bank with a single A1 item, two of every middle tier and nothing at C2.
pub(super) fn starved_bank() -> QuestionBank {
    let mut items = vec![item("a1-only", Difficulty::A1)];
    for tier in [Difficulty::A2, Difficulty::B1, Difficulty::B2, Difficulty::C1] {
        for n in 0..2 {
            items.push(item(&format!("{}-{n}", tier.label().to_lowercase()), tier));
        }
    }
    QuestionBank::from_items(items).expect("starved bank is still valid")
}

/// `total` answers against the standard bank, the first `correct` of which
/// are marked correct.
pub(super) fn graded_answers(total: usize, correct: usize) -> Vec<GradedAnswer> {
    let bank = standard_bank();
    let items = bank.all_items();
    (0..total)
        .map(|n| {
            let item = &items[n % items.len()];
            GradedAnswer {
                question_id: item.id.clone(),
                selected_option_index: item.correct_option_index,
                is_correct: n < correct,
            }
        })
        .collect()
}

pub(super) fn correct_submissions(sample: &QuizSample) -> Vec<AnswerSubmission> {
    sample
        .items()
        .iter()
        .map(|item| AnswerSubmission {
            question_id: item.id.clone(),
            selected_option_index: item.correct_option_index,
        })
        .collect()
}

pub(super) fn unique_ids(sample: &QuizSample) -> bool {
    let mut seen = HashSet::new();
    sample.items().iter().all(|item| seen.insert(item.id.clone()))
}

pub(super) fn service() -> Arc<PlacementService> {
    Arc::new(PlacementService::new(Arc::new(standard_bank()), 20))
}

pub(super) fn router() -> axum::Router {
    placement_router(service())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 64)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
