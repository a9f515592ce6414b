use thiserror::Error;

use crate::models::Field;

#[derive(Error, Debug)]
pub enum Error {
    // Validation errors
    #[error("Missing answer for: {}", join_fields(.0))]
    MissingField(Vec<Field>),

    // Clipboard errors
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic
    #[error("Internal error: {0}")]
    Internal(String),
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_names_every_field() {
        let err = Error::MissingField(vec![Field::Pet, Field::Job]);
        assert_eq!(err.to_string(), "Missing answer for: pet, job");
    }

    #[test]
    fn test_clipboard_message() {
        let err = Error::ClipboardUnavailable("no display".to_string());
        assert_eq!(err.to_string(), "Clipboard unavailable: no display");
    }
}
