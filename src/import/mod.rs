//! Ledger payload loading
//!
//! Reads journal entries and currency lists from JSON documents saved off the
//! accounting API. Both the API's `{ success, message, data }` envelope and a
//! bare array are accepted, so a payload captured with curl works as-is.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{CashflowError, CashflowResult};
use crate::models::{Currency, JournalEntry};

/// The wrapper every accounting API endpoint responds with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Whether the server reported success
    pub success: bool,

    /// Server message, mostly interesting when `success` is false
    #[serde(default)]
    pub message: String,

    /// The payload itself
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload, turning a failed response into an error
    pub fn into_data(self) -> CashflowResult<Vec<T>> {
        if self.success {
            Ok(self.data)
        } else {
            let message = if self.message.is_empty() {
                "server reported failure".to_string()
            } else {
                self.message
            };
            Err(CashflowError::Payload(message))
        }
    }
}

/// Read journal entries from a JSON document
pub fn read_entries<R: Read>(reader: R) -> CashflowResult<Vec<JournalEntry>> {
    read_payload(reader)
}

/// Read journal entries from a file path
pub fn read_entries_file(path: &Path) -> CashflowResult<Vec<JournalEntry>> {
    read_entries(open(path)?)
}

/// Read currencies from a JSON document
pub fn read_currencies<R: Read>(reader: R) -> CashflowResult<Vec<Currency>> {
    read_payload(reader)
}

/// Read currencies from a file path
pub fn read_currencies_file(path: &Path) -> CashflowResult<Vec<Currency>> {
    read_currencies(open(path)?)
}

fn open(path: &Path) -> CashflowResult<BufReader<File>> {
    let file = File::open(path)
        .map_err(|e| CashflowError::Import(format!("Failed to open {}: {}", path.display(), e)))?;
    Ok(BufReader::new(file))
}

/// Parse either an API envelope or a bare JSON array
fn read_payload<R: Read, T: DeserializeOwned>(mut reader: R) -> CashflowResult<Vec<T>> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .map_err(|e| CashflowError::Import(e.to_string()))?;

    // Envelope first; a bare array is what operators save when they strip
    // the wrapper by hand.
    if let Ok(envelope) = serde_json::from_str::<ApiEnvelope<T>>(&raw) {
        return envelope.into_data();
    }

    serde_json::from_str::<Vec<T>>(&raw)
        .map_err(|e| CashflowError::Import(format!("Unrecognized payload: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_entries_envelope() {
        let json = r#"{
            "success": true,
            "message": "ok",
            "data": [
                { "id": "je-1", "transactionDate": "2025-01-15T00:00:00.000Z" }
            ]
        }"#;
        let entries = read_entries(json.as_bytes()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "je-1");
    }

    #[test]
    fn test_read_entries_bare_array() {
        let json = r#"[ { "id": "je-1" }, { "id": "je-2" } ]"#;
        let entries = read_entries(json.as_bytes()).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_failed_envelope_carries_server_message() {
        let json = r#"{ "success": false, "message": "token expired", "data": [] }"#;
        let err = read_entries(json.as_bytes()).unwrap_err();
        assert!(matches!(err, CashflowError::Payload(_)));
        assert!(err.to_string().contains("token expired"));
    }

    #[test]
    fn test_failed_envelope_without_message() {
        let json = r#"{ "success": false, "data": [] }"#;
        let err = read_entries(json.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("server reported failure"));
    }

    #[test]
    fn test_malformed_json_is_import_error() {
        let err = read_entries("{ nope".as_bytes()).unwrap_err();
        assert!(matches!(err, CashflowError::Import(_)));
    }

    #[test]
    fn test_read_currencies_envelope() {
        let json = r#"{
            "success": true,
            "data": [
                { "id": "c1", "code": "USD", "name": "US Dollar", "isDefault": true }
            ]
        }"#;
        let currencies = read_currencies(json.as_bytes()).unwrap();
        assert_eq!(currencies.len(), 1);
        assert!(currencies[0].is_default);
    }

    #[test]
    fn test_read_entries_file_missing() {
        let err = read_entries_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CashflowError::Import(_)));
    }
}
