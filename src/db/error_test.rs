//! Tests for database error types.

use crate::db::DbError;

#[test]
fn connection_error_display() {
    let err = DbError::Connection {
        message: "refused".to_string(),
    };
    assert_eq!(err.to_string(), "Connection error: refused");
}

#[test]
fn database_error_display() {
    let err = DbError::Database {
        message: "write failed".to_string(),
    };
    assert_eq!(err.to_string(), "Database error: write failed");
}

#[test]
fn invalid_document_display() {
    let err = DbError::InvalidDocument {
        message: "bad field".to_string(),
    };
    assert_eq!(err.to_string(), "Invalid document: bad field");
}
