//! Errors raised while parsing permission data.

use thiserror::Error;

/// Errors from decoding a permission matrix or its vocabulary.
#[derive(Error, Debug)]
pub enum MatrixError {
    /// The payload did not match the matrix schema (missing object key,
    /// missing action, or a non-boolean value).
    #[error("Malformed permission matrix: {0}")]
    Parse(#[from] serde_json::Error),

    /// An object type name outside the fixed set.
    #[error("Unknown object type '{0}' (expected accounts, contacts, opportunities or activities)")]
    UnknownObject(String),

    /// An action name outside create/read/edit/delete.
    #[error("Unknown permission action '{0}' (expected create, read, edit or delete)")]
    UnknownAction(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_object_names_the_input() {
        let err = MatrixError::UnknownObject("leads".to_string());
        let msg = err.to_string();
        assert!(msg.contains("'leads'"), "got: {msg}");
    }

    #[test]
    fn parse_error_wraps_serde() {
        let serde_err = serde_json::from_str::<bool>("nope").unwrap_err();
        let err = MatrixError::from(serde_err);
        assert!(err.to_string().starts_with("Malformed permission matrix"));
    }
}
