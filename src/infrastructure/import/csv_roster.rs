use crate::domain::referral::Friend;
use std::io::Read;
use thiserror::Error;
use tracing::warn;

/// Column names the roster file must carry in its header row.
pub const REQUIRED_COLUMNS: [&str; 3] = ["firstName", "lastName", "email"];

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("The file is empty. Export your contacts with firstName, lastName and email columns and try again.")]
    EmptyFile,

    #[error("Missing required column(s): {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    #[error("The file could not be read: {0}")]
    Malformed(#[from] csv::Error),
}

/// Parses a referral roster from CSV.
///
/// Header matching is trimmed and case-insensitive; extra columns are
/// ignored and fully blank rows are skipped. The whole file is parsed
/// before anything is returned, so a failed import never leaves a caller
/// with a half-populated roster.
pub fn read_roster<R: Read>(reader: R) -> Result<Vec<Friend>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.is_empty() || (headers.len() == 1 && headers[0].trim().is_empty()) {
        return Err(ImportError::EmptyFile);
    }

    let find = |name: &str| {
        headers
            .iter()
            .position(|header| header.trim().eq_ignore_ascii_case(name))
    };
    let columns: Vec<Option<usize>> = REQUIRED_COLUMNS.iter().map(|name| find(name)).collect();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .zip(&columns)
        .filter(|(_, index)| index.is_none())
        .map(|(name, _)| name.to_string())
        .collect();
    if !missing.is_empty() {
        warn!("Roster import rejected, missing column(s): {:?}", missing);
        return Err(ImportError::MissingColumns { columns: missing });
    }

    let (first_idx, last_idx, email_idx) = (
        columns[0].unwrap_or_default(),
        columns[1].unwrap_or_default(),
        columns[2].unwrap_or_default(),
    );

    let mut friends = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let field = |index: usize| record.get(index).unwrap_or("").trim().to_string();

        let friend = Friend {
            first_name: field(first_idx),
            last_name: field(last_idx),
            email: field(email_idx),
        };
        if friend.is_blank() {
            continue;
        }
        friends.push(friend);
    }

    if friends.is_empty() {
        return Err(ImportError::EmptyFile);
    }
    Ok(friends)
}
