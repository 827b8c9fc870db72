use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use super::bank::{BankError, QuestionBank};
use super::domain::{AssessmentItem, Difficulty, ItemId, Skill};

const OPTION_SEPARATOR: char = '|';

impl QuestionBank {
    /// Load a bank from a CSV export with the columns
    /// `id,difficulty,skill,text,options,correct_option_index`.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, BankError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, BankError> {
        let items = parse_items(reader)?;
        Self::from_items(items)
    }
}

#[derive(Debug, Deserialize)]
struct BankRow {
    id: String,
    difficulty: String,
    skill: String,
    text: String,
    options: String,
    correct_option_index: String,
}

impl BankRow {
    fn into_item(self) -> Result<AssessmentItem, BankError> {
        let difficulty = self.difficulty.parse::<Difficulty>().map_err(|source| {
            BankError::UnknownDifficulty {
                id: self.id.clone(),
                source,
            }
        })?;
        let skill = self
            .skill
            .parse::<Skill>()
            .map_err(|source| BankError::UnknownSkill {
                id: self.id.clone(),
                source,
            })?;
        let correct_option_index = self.correct_option_index.trim().parse::<usize>().map_err(
            |_| BankError::InvalidCorrectIndex {
                id: self.id.clone(),
                value: self.correct_option_index.clone(),
            },
        )?;

        let options = split_options(&self.id, &self.options)?;

        Ok(AssessmentItem {
            id: ItemId(self.id),
            text: self.text,
            options,
            correct_option_index,
            difficulty,
            skill,
        })
    }
}

fn parse_items<R: Read>(reader: R) -> Result<Vec<AssessmentItem>, BankError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut items = Vec::new();

    for record in csv_reader.deserialize::<BankRow>() {
        let row = record?;
        items.push(row.into_item()?);
    }

    Ok(items)
}

/// Split the `|`-joined option list. Positions are kept exactly as written
/// because `correct_option_index` refers to them, so a blank segment is an
/// error rather than something to skip.
fn split_options(id: &str, raw: &str) -> Result<Vec<String>, BankError> {
    raw.split(OPTION_SEPARATOR)
        .map(str::trim)
        .enumerate()
        .map(|(position, option)| {
            if option.is_empty() {
                Err(BankError::BlankOption {
                    id: ItemId::new(id),
                    position,
                })
            } else {
                Ok(option.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_options_keeps_written_positions() {
        assert_eq!(
            split_options("x", " went | gone |going ").expect("options split"),
            vec!["went".to_string(), "gone".to_string(), "going".to_string()]
        );
    }

    #[test]
    fn split_options_rejects_blank_segments() {
        match split_options("x", "a||b|c") {
            Err(BankError::BlankOption { id, position }) => {
                assert_eq!(id, ItemId::new("x"));
                assert_eq!(position, 1);
            }
            other => panic!("expected blank option error, got {other:?}"),
        }
        assert!(matches!(
            split_options("x", "a|b| "),
            Err(BankError::BlankOption { position: 2, .. })
        ));
    }
}
