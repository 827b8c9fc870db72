//! Placement assessment: a static question bank, a tier-stratified quiz
//! sampler, and a scorer that maps graded answers to a CEFR placement.

pub mod bank;
mod catalog;
pub mod domain;
pub mod grading;
mod import;
pub mod router;
pub mod sampler;
pub mod scorer;
pub mod service;

#[cfg(test)]
mod tests;

pub use bank::{BankError, QuestionBank};
pub use domain::{
    AnswerSubmission, AssessmentItem, Confidence, Difficulty, GradedAnswer, ItemId,
    PlacementLevel, PlacementResult, PublicItem, Skill, TierTally, UnknownSkill, UnknownTier,
};
pub use grading::grade;
pub use router::{placement_router, QuizRequest, QuizResponse, ScoreRequest, SubmitRequest};
pub use sampler::{tier_target, QuizSample, QuizSampler, SampleError};
pub use scorer::{classify, LevelScorer, ScoreError};
pub use service::{PlacementService, PlacementServiceError, DEFAULT_QUIZ_LENGTH};
