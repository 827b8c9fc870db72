use std::sync::Arc;

use tracing::info;

use super::bank::QuestionBank;
use super::domain::{AnswerSubmission, GradedAnswer, PlacementResult};
use super::grading::grade;
use super::sampler::{QuizSample, QuizSampler, SampleError};
use super::scorer::{LevelScorer, ScoreError};

/// Quiz length used when nothing else is configured.
pub const DEFAULT_QUIZ_LENGTH: usize = 20;

/// Facade composing the bank, sampler, grader, and scorer.
pub struct PlacementService {
    bank: Arc<QuestionBank>,
    quiz_length: usize,
}

impl PlacementService {
    pub fn new(bank: Arc<QuestionBank>, quiz_length: usize) -> Self {
        Self { bank, quiz_length }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn quiz_length(&self) -> usize {
        self.quiz_length
    }

    /// Draw a fresh quiz, using the configured length unless one is given.
    pub fn start_quiz(&self, count: Option<usize>) -> Result<QuizSample, PlacementServiceError> {
        let requested = count.unwrap_or(self.quiz_length);
        let sample = QuizSampler::new(&self.bank).sample(requested)?;

        if sample.is_short() {
            info!(
                requested,
                delivered = sample.len(),
                "quiz under-filled by tier pool starvation"
            );
        }
        Ok(sample)
    }

    /// Score answers that were graded by the caller.
    pub fn score(&self, answers: &[GradedAnswer]) -> Result<PlacementResult, PlacementServiceError> {
        let result = LevelScorer::new(&self.bank).score(answers)?;
        info!(
            level = %result.level,
            confidence = result.confidence.label(),
            correct = result.correct_count,
            total = result.total_questions,
            "placement scored"
        );
        Ok(result)
    }

    /// Grade raw selections against the bank, then score them.
    pub fn submit(
        &self,
        submissions: &[AnswerSubmission],
    ) -> Result<PlacementResult, PlacementServiceError> {
        let graded = grade(&self.bank, submissions);
        self.score(&graded)
    }
}

/// Error raised by the placement service.
#[derive(Debug, thiserror::Error)]
pub enum PlacementServiceError {
    #[error(transparent)]
    Sampling(#[from] SampleError),
    #[error(transparent)]
    Scoring(#[from] ScoreError),
}
