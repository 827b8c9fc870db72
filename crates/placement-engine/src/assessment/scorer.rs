use std::collections::BTreeMap;

use tracing::debug;

use super::bank::QuestionBank;
use super::domain::{
    Confidence, Difficulty, GradedAnswer, PlacementLevel, PlacementResult, TierTally,
};

struct LevelBand {
    floor: f64,
    level: PlacementLevel,
    confident_from: f64,
    confident: Confidence,
    otherwise: Confidence,
}

/// Evaluated top-down; the first band whose floor the percentage reaches wins.
const LEVEL_BANDS: [LevelBand; 6] = [
    LevelBand {
        floor: 90.0,
        level: PlacementLevel::C2,
        confident_from: 90.0,
        confident: Confidence::High,
        otherwise: Confidence::High,
    },
    LevelBand {
        floor: 80.0,
        level: PlacementLevel::C1,
        confident_from: 85.0,
        confident: Confidence::High,
        otherwise: Confidence::Medium,
    },
    LevelBand {
        floor: 70.0,
        level: PlacementLevel::B2,
        confident_from: 75.0,
        confident: Confidence::High,
        otherwise: Confidence::Medium,
    },
    LevelBand {
        floor: 55.0,
        level: PlacementLevel::B1,
        confident_from: 60.0,
        confident: Confidence::High,
        otherwise: Confidence::Medium,
    },
    LevelBand {
        floor: 40.0,
        level: PlacementLevel::A2,
        confident_from: 45.0,
        confident: Confidence::High,
        otherwise: Confidence::Medium,
    },
    LevelBand {
        floor: 20.0,
        level: PlacementLevel::A1,
        confident_from: 30.0,
        confident: Confidence::Medium,
        otherwise: Confidence::Low,
    },
];

const BELOW_LOWEST_BAND: (PlacementLevel, Confidence) = (PlacementLevel::A0, Confidence::Medium);

/// Map a correctness percentage to a level and confidence. Depends on the
/// percentage alone.
pub fn classify(percentage: f64) -> (PlacementLevel, Confidence) {
    for band in &LEVEL_BANDS {
        if percentage >= band.floor {
            let confidence = if percentage >= band.confident_from {
                band.confident
            } else {
                band.otherwise
            };
            return (band.level, confidence);
        }
    }
    BELOW_LOWEST_BAND
}

/// Reduces graded answers to a placement. The bank is only consulted for the
/// per-tier breakdown.
pub struct LevelScorer<'a> {
    bank: &'a QuestionBank,
}

impl<'a> LevelScorer<'a> {
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self { bank }
    }

    pub fn score(&self, answers: &[GradedAnswer]) -> Result<PlacementResult, ScoreError> {
        if answers.is_empty() {
            return Err(ScoreError::EmptyAnswers);
        }

        let total_questions = answers.len();
        let correct_count = answers.iter().filter(|answer| answer.is_correct).count();
        let percentage = (correct_count * 100) as f64 / total_questions as f64;

        let (breakdown, unresolved) = self.tally_by_difficulty(answers);
        let (level, confidence) = classify(percentage);

        Ok(PlacementResult {
            level,
            confidence,
            correct_count,
            total_questions,
            percentage,
            breakdown,
            unresolved,
        })
    }

    // Diagnostics only; never feeds back into the level decision.
    fn tally_by_difficulty(&self, answers: &[GradedAnswer]) -> (Vec<TierTally>, usize) {
        let mut tallies: BTreeMap<Difficulty, (usize, usize)> = BTreeMap::new();
        let mut unresolved = 0;

        for answer in answers {
            match self.bank.find_by_id(answer.question_id.as_str()) {
                Some(item) => {
                    let entry = tallies.entry(item.difficulty).or_insert((0, 0));
                    entry.1 += 1;
                    if answer.is_correct {
                        entry.0 += 1;
                    }
                }
                None => {
                    debug!(question_id = %answer.question_id, "answer references unknown item");
                    unresolved += 1;
                }
            }
        }

        let breakdown = Difficulty::ordered()
            .into_iter()
            .map(|difficulty| {
                let (correct, total) = tallies.get(&difficulty).copied().unwrap_or((0, 0));
                TierTally {
                    difficulty,
                    correct,
                    total,
                }
            })
            .collect();

        (breakdown, unresolved)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    #[error("cannot score an attempt with no answers")]
    EmptyAnswers,
}
