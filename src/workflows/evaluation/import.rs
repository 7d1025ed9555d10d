//! CSV import for social-performance goals exported from the HR system.
//!
//! Used to hydrate the demo directory from the command line until the real
//! HR adapter is wired in.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::{SocialPerformance, ValidationError};

#[derive(Debug)]
pub enum SocialImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Validation(ValidationError),
}

impl std::fmt::Display for SocialImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SocialImportError::Io(err) => write!(f, "failed to read HR export: {}", err),
            SocialImportError::Csv(err) => write!(f, "invalid HR CSV data: {}", err),
            SocialImportError::Validation(err) => {
                write!(f, "HR export contains an invalid record: {}", err)
            }
        }
    }
}

impl std::error::Error for SocialImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SocialImportError::Io(err) => Some(err),
            SocialImportError::Csv(err) => Some(err),
            SocialImportError::Validation(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SocialImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for SocialImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<ValidationError> for SocialImportError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

#[derive(Debug, Deserialize)]
struct SocialGoalRow {
    #[serde(rename = "Salesman ID")]
    salesman_id: u32,
    #[serde(rename = "Goal ID")]
    social_id: u32,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Target")]
    target_value: f64,
    #[serde(rename = "Actual")]
    actual_value: f64,
    #[serde(rename = "Year")]
    year: u16,
}

pub struct SocialPerformanceImporter;

impl SocialPerformanceImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<SocialPerformance>, SocialImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<SocialPerformance>, SocialImportError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for row in csv_reader.deserialize::<SocialGoalRow>() {
            let row = row?;
            records.push(SocialPerformance::new(
                row.salesman_id,
                row.social_id,
                row.description,
                row.target_value,
                row.actual_value,
                row.year,
            )?);
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const EXPORT: &str = "\
Salesman ID,Goal ID,Description,Target,Actual,Year
90123,1,Leadership Competence,4,3,2024
90123,2,Openness to Employee,20,25,2024
";

    #[test]
    fn imports_goals_with_derived_bonus() {
        let records = SocialPerformanceImporter::from_reader(Cursor::new(EXPORT))
            .expect("export parses");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].description(), "Leadership Competence");
        // 3 under target 4: 3 * 10 * 0.8 = 24, rounded up to 30.
        assert_eq!(records[0].bonus(), 30);
        assert_eq!(records[1].bonus(), 250);
    }

    #[test]
    fn rejects_rows_violating_entity_invariants() {
        let export = "Salesman ID,Goal ID,Description,Target,Actual,Year\n0,1,Leadership,4,3,2024\n";
        let result = SocialPerformanceImporter::from_reader(Cursor::new(export));
        assert!(matches!(result, Err(SocialImportError::Validation(_))));
    }

    #[test]
    fn surfaces_malformed_csv() {
        let export = "Salesman ID,Goal ID,Description,Target,Actual,Year\nnot-a-number,1,Leadership,4,3,2024\n";
        let result = SocialPerformanceImporter::from_reader(Cursor::new(export));
        assert!(matches!(result, Err(SocialImportError::Csv(_))));
    }
}
