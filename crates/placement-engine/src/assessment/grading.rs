use super::bank::QuestionBank;
use super::domain::{AnswerSubmission, GradedAnswer};

/// Grade raw selections against the bank's answer key.
///
/// Selections for ids the bank does not know are graded incorrect; the scorer
/// still counts them toward the total.
pub fn grade(bank: &QuestionBank, submissions: &[AnswerSubmission]) -> Vec<GradedAnswer> {
    submissions
        .iter()
        .map(|submission| {
            let is_correct = bank
                .find_by_id(submission.question_id.as_str())
                .map(|item| item.is_correct_choice(submission.selected_option_index))
                .unwrap_or(false);

            GradedAnswer {
                question_id: submission.question_id.clone(),
                selected_option_index: submission.selected_option_index,
                is_correct,
            }
        })
        .collect()
}
