use std::collections::{HashMap, HashSet};

use tracing::warn;

use super::catalog::standard_items;
use super::domain::{AssessmentItem, Difficulty, ItemId, UnknownSkill, UnknownTier};

/// Read-only catalog of assessment items, kept in declaration order.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    items: Vec<AssessmentItem>,
    index: HashMap<String, usize>,
}

impl QuestionBank {
    /// The compiled-in bank: six items for each CEFR tier.
    pub fn standard() -> Self {
        Self::indexed(standard_items())
    }

    /// Build a bank from externally supplied items, enforcing the per-item
    /// invariants. Tiers without items are accepted but logged.
    pub fn from_items(items: Vec<AssessmentItem>) -> Result<Self, BankError> {
        if items.is_empty() {
            return Err(BankError::Empty);
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(BankError::DuplicateId(item.id.clone()));
            }
            if item.options.is_empty() {
                return Err(BankError::NoOptions(item.id.clone()));
            }
            if let Some(position) = item.options.iter().position(|o| o.trim().is_empty()) {
                return Err(BankError::BlankOption {
                    id: item.id.clone(),
                    position,
                });
            }
            if item.correct_option_index >= item.options.len() {
                return Err(BankError::CorrectIndexOutOfRange {
                    id: item.id.clone(),
                    index: item.correct_option_index,
                    len: item.options.len(),
                });
            }
        }

        let bank = Self::indexed(items);
        let missing = bank.missing_tiers();
        if !missing.is_empty() {
            warn!(
                ?missing,
                "question bank has empty tiers; quizzes will be under-filled"
            );
        }
        Ok(bank)
    }

    fn indexed(items: Vec<AssessmentItem>) -> Self {
        let index = items
            .iter()
            .enumerate()
            .map(|(position, item)| (item.id.0.clone(), position))
            .collect();
        Self { items, index }
    }

    pub fn all_items(&self) -> &[AssessmentItem] {
        &self.items
    }

    pub fn items_by_difficulty(&self, difficulty: Difficulty) -> Vec<&AssessmentItem> {
        self.items
            .iter()
            .filter(|item| item.difficulty == difficulty)
            .collect()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&AssessmentItem> {
        self.index.get(id).map(|&position| &self.items[position])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item count per tier, in tier order, including empty tiers.
    pub fn tier_counts(&self) -> Vec<(Difficulty, usize)> {
        Difficulty::ordered()
            .into_iter()
            .map(|tier| {
                let count = self
                    .items
                    .iter()
                    .filter(|item| item.difficulty == tier)
                    .count();
                (tier, count)
            })
            .collect()
    }

    pub fn missing_tiers(&self) -> Vec<Difficulty> {
        self.tier_counts()
            .into_iter()
            .filter(|(_, count)| *count == 0)
            .map(|(tier, _)| tier)
            .collect()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}

/// Failures raised while building or importing a bank.
#[derive(Debug, thiserror::Error)]
pub enum BankError {
    #[error("failed to read question bank: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid question bank CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("item '{id}': {source}")]
    UnknownDifficulty { id: String, source: UnknownTier },
    #[error("item '{id}': {source}")]
    UnknownSkill { id: String, source: UnknownSkill },
    #[error("item '{id}': correct_option_index '{value}' is not a non-negative integer")]
    InvalidCorrectIndex { id: String, value: String },
    #[error("duplicate item id '{0}'")]
    DuplicateId(ItemId),
    #[error("item '{0}' has no answer options")]
    NoOptions(ItemId),
    #[error("item '{id}' has a blank answer option at position {position}")]
    BlankOption { id: ItemId, position: usize },
    #[error("item '{id}' marks option {index} correct but only has {len} options")]
    CorrectIndexOutOfRange { id: ItemId, index: usize, len: usize },
    #[error("question bank contains no items")]
    Empty,
}
