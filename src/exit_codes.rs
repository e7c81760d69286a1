//! Exit codes for the CLI

use crate::error::HarborTagError;

/// Success
pub const SUCCESS: u8 = 0;

/// General error
pub const ERROR: u8 = 1;

/// Configuration error (missing arguments, unreadable config file)
pub const CONFIG_ERROR: u8 = 2;

/// Registry error
pub const REGISTRY_ERROR: u8 = 3;

/// Version error (unparsable version, malformed pre-release counter)
pub const VERSION_ERROR: u8 = 4;

/// Validation error (forbidden environment / bump type pair)
pub const VALIDATION_ERROR: u8 = 5;

/// Map an error to the process exit code.
///
/// Errors wrapped with context are matched on the underlying
/// [HarborTagError]; anything else is a general error.
pub fn for_error(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<HarborTagError>() {
        Some(HarborTagError::Config(_)) => CONFIG_ERROR,
        Some(HarborTagError::Registry(_)) => REGISTRY_ERROR,
        Some(HarborTagError::VersionParse(_)) | Some(HarborTagError::MalformedCounter { .. }) => {
            VERSION_ERROR
        }
        Some(HarborTagError::InvalidPairing { .. }) => VALIDATION_ERROR,
        Some(HarborTagError::Io(_)) | None => ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BumpKind, Environment};
    use anyhow::Context;

    #[test]
    fn test_exit_code_per_variant() {
        let cases = vec![
            (HarborTagError::config("x"), CONFIG_ERROR),
            (HarborTagError::registry("x"), REGISTRY_ERROR),
            (HarborTagError::version("x"), VERSION_ERROR),
            (
                HarborTagError::MalformedCounter {
                    version: "v1.0.0".to_string(),
                    kind: BumpKind::Rc,
                },
                VERSION_ERROR,
            ),
            (
                HarborTagError::InvalidPairing {
                    environment: Environment::Prod,
                    kind: BumpKind::Dev,
                },
                VALIDATION_ERROR,
            ),
        ];

        for (err, code) in cases {
            assert_eq!(for_error(&anyhow::Error::new(err)), code);
        }
    }

    #[test]
    fn test_exit_code_through_context() {
        let err = Err::<(), _>(HarborTagError::registry("503"))
            .context("Failed to list tags")
            .unwrap_err();
        assert_eq!(for_error(&err), REGISTRY_ERROR);
    }

    #[test]
    fn test_exit_code_unknown_error() {
        assert_eq!(for_error(&anyhow::anyhow!("boom")), ERROR);
    }
}
