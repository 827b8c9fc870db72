use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::bank::QuestionBank;
use super::domain::{AssessmentItem, Difficulty, PublicItem};

/// Draws tier-stratified quizzes from a bank. Holds no state between calls.
pub struct QuizSampler<'a> {
    bank: &'a QuestionBank,
}

impl<'a> QuizSampler<'a> {
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self { bank }
    }

    /// Sample with the thread-local RNG. Two calls may return different quizzes.
    pub fn sample(&self, total_questions: usize) -> Result<QuizSample, SampleError> {
        let mut rng = rand::rng();
        self.sample_with(total_questions, &mut rng)
    }

    /// Sample with a caller-provided RNG so draws can be reproduced.
    ///
    /// Tiers are visited from A1 to C2. Each takes up to its weighted target
    /// without replacement, bounded by its pool and by the budget left over
    /// from earlier tiers. A tier with too few items is taken whole and the
    /// deficit is not backfilled, so the result can be shorter than requested.
    pub fn sample_with<R: Rng + ?Sized>(
        &self,
        total_questions: usize,
        rng: &mut R,
    ) -> Result<QuizSample, SampleError> {
        if total_questions == 0 {
            return Err(SampleError::InvalidQuestionCount);
        }

        // The request is caller-controlled; the bank bounds what can be drawn.
        let mut selected: Vec<AssessmentItem> =
            Vec::with_capacity(total_questions.min(self.bank.len()));

        for tier in Difficulty::ordered() {
            let remaining = total_questions - selected.len();
            if remaining == 0 {
                break;
            }

            let target = tier_target(total_questions, tier);
            let mut pool = self.bank.items_by_difficulty(tier);
            if pool.len() < target {
                debug!(%tier, target, available = pool.len(), "tier pool short of target");
            }

            let draws = target.min(pool.len()).min(remaining);
            for _ in 0..draws {
                let pick = rng.random_range(0..pool.len());
                selected.push(pool.swap_remove(pick).clone());
            }
        }

        selected.shuffle(rng);
        selected.truncate(total_questions);

        Ok(QuizSample {
            requested: total_questions,
            items: selected,
        })
    }
}

/// `ceil(total * weight)` in integer arithmetic. Targets across all tiers may
/// add up to slightly more than `total`; the sampler's budget absorbs that.
pub fn tier_target(total_questions: usize, tier: Difficulty) -> usize {
    total_questions
        .saturating_mul(tier.weight_percent() as usize)
        .div_ceil(100)
}

/// One attempt's worth of items, already shuffled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSample {
    requested: usize,
    items: Vec<AssessmentItem>,
}

impl QuizSample {
    pub fn requested(&self) -> usize {
        self.requested
    }

    pub fn items(&self) -> &[AssessmentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when pool starvation left the quiz shorter than requested.
    pub fn is_short(&self) -> bool {
        self.items.len() < self.requested
    }

    pub fn composition(&self) -> BTreeMap<Difficulty, usize> {
        let mut counts = BTreeMap::new();
        for item in &self.items {
            *counts.entry(item.difficulty).or_insert(0) += 1;
        }
        counts
    }

    pub fn public_items(&self) -> Vec<PublicItem> {
        self.items.iter().map(AssessmentItem::public_view).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SampleError {
    #[error("quiz length must be a positive number of questions")]
    InvalidQuestionCount,
}
