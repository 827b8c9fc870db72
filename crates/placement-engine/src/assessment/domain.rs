use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a bank item. Never reused once published.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// CEFR difficulty tier attached to every bank item, ordered low to high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl Difficulty {
    pub const fn ordered() -> [Self; 6] {
        [Self::A1, Self::A2, Self::B1, Self::B2, Self::C1, Self::C2]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::B1 => "B1",
            Self::B2 => "B2",
            Self::C1 => "C1",
            Self::C2 => "C2",
        }
    }

    /// Share of a quiz drawn from this tier, in whole percent. Sums to 100.
    pub const fn weight_percent(self) -> u32 {
        match self {
            Self::A1 | Self::A2 | Self::C1 | Self::C2 => 15,
            Self::B1 | Self::B2 => 20,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = UnknownTier;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|tier| tier.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownTier(trimmed.to_string()))
    }
}

/// Raised when a tier or level label does not name a known CEFR band.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown CEFR band '{0}'")]
pub struct UnknownTier(pub String);

/// Skill category carried for reporting. Scoring never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Grammar,
    Vocabulary,
    Reading,
    Listening,
    Usage,
}

impl Skill {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Grammar,
            Self::Vocabulary,
            Self::Reading,
            Self::Listening,
            Self::Usage,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Grammar => "grammar",
            Self::Vocabulary => "vocabulary",
            Self::Reading => "reading",
            Self::Listening => "listening",
            Self::Usage => "usage",
        }
    }
}

impl FromStr for Skill {
    type Err = UnknownSkill;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|skill| skill.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownSkill(trimmed.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown skill category '{0}'")]
pub struct UnknownSkill(pub String);

/// A single multiple-choice bank entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentItem {
    pub id: ItemId,
    pub text: String,
    pub options: Vec<String>,
    pub correct_option_index: usize,
    pub difficulty: Difficulty,
    pub skill: Skill,
}

impl AssessmentItem {
    pub fn is_correct_choice(&self, selected_option_index: usize) -> bool {
        self.correct_option_index == selected_option_index
    }

    /// Learner-facing projection without the answer key.
    pub fn public_view(&self) -> PublicItem {
        PublicItem {
            id: self.id.clone(),
            text: self.text.clone(),
            options: self.options.clone(),
            difficulty: self.difficulty,
            skill: self.skill,
        }
    }
}

/// Item as transmitted to a learner's client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicItem {
    pub id: ItemId,
    pub text: String,
    pub options: Vec<String>,
    pub difficulty: Difficulty,
    pub skill: Skill,
}

/// Raw learner selection before grading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSubmission {
    pub question_id: ItemId,
    pub selected_option_index: usize,
}

/// Pre-graded answer consumed by the scorer. `is_correct` is trusted as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradedAnswer {
    pub question_id: ItemId,
    pub selected_option_index: usize,
    pub is_correct: bool,
}

/// Placement outcome band. `A0` means "below A1" and only comes from the
/// percentage table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlacementLevel {
    A0,
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl PlacementLevel {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::A0,
            Self::A1,
            Self::A2,
            Self::B1,
            Self::B2,
            Self::C1,
            Self::C2,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::A0 => "A0",
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::B1 => "B1",
            Self::B2 => "B2",
            Self::C1 => "C1",
            Self::C2 => "C2",
        }
    }
}

impl From<Difficulty> for PlacementLevel {
    fn from(value: Difficulty) -> Self {
        match value {
            Difficulty::A1 => Self::A1,
            Difficulty::A2 => Self::A2,
            Difficulty::B1 => Self::B1,
            Difficulty::B2 => Self::B2,
            Difficulty::C1 => Self::C1,
            Difficulty::C2 => Self::C2,
        }
    }
}

impl fmt::Display for PlacementLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PlacementLevel {
    type Err = UnknownTier;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownTier(trimmed.to_string()))
    }
}

/// How decisively a percentage sits inside its level band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Correct/attempted counts for one tier, reported alongside a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierTally {
    pub difficulty: Difficulty,
    pub correct: usize,
    pub total: usize,
}

/// Result of scoring one completed attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementResult {
    pub level: PlacementLevel,
    pub confidence: Confidence,
    pub correct_count: usize,
    pub total_questions: usize,
    pub percentage: f64,
    pub breakdown: Vec<TierTally>,
    pub unresolved: usize,
}

impl PlacementResult {
    pub fn summary(&self) -> String {
        format!(
            "{} ({} confidence): {}/{} correct ({:.1}%)",
            self.level,
            self.confidence.label(),
            self.correct_count,
            self.total_questions,
            self.percentage
        )
    }
}
