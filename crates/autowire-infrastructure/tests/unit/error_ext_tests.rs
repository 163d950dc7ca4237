//! Error Extension Tests

use autowire_domain::error::{Error, ReasonCode, Result};
use autowire_infrastructure::error_ext::ErrorContext;
use std::error::Error as _;
use std::io;

#[test]
fn test_context_produces_settings_error() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

    let result: Result<()> = Err(io_error).context("failed to read file");
    match result {
        Err(err @ Error::Settings { .. }) => {
            assert_eq!(err.reason(), ReasonCode::InvalidSettings);
            assert!(err.to_string().contains("failed to read file: file not found"));
            assert!(err.source().is_some());
        }
        other => panic!("Expected settings error, got {other:?}"),
    }
}

#[test]
fn test_context_passes_success_through() {
    let ok: std::result::Result<u8, io::Error> = Ok(1);
    assert_eq!(ok.context("never shown").unwrap(), 1);
}
