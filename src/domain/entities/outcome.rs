//! The uniform result contract of every operation.

use crate::domain::errors::Failure;

/// Tagged outcome of check-connection, shorten, stats and delete.
///
/// `AlreadyExists` is only produced by shorten. Its short URL is optional:
/// when the service reports a duplicate without saying where it lives, the
/// result is still a (non-failing) duplicate.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationResult<T> {
    Success(T),
    AlreadyExists { short_url: Option<String> },
    Failure(Failure),
}

impl<T> OperationResult<T> {
    /// Returns true for every outcome except `Failure`.
    pub fn is_ok(&self) -> bool {
        !matches!(self, Self::Failure(_))
    }

    /// Returns the failure, if any.
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Failure(f) => Some(f),
            _ => None,
        }
    }
}

impl<T> From<Failure> for OperationResult<T> {
    fn from(failure: Failure) -> Self {
        Self::Failure(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::FailureKind;

    #[test]
    fn test_already_exists_is_ok() {
        let outcome: OperationResult<String> = OperationResult::AlreadyExists { short_url: None };
        assert!(outcome.is_ok());
        assert!(outcome.failure().is_none());
    }

    #[test]
    fn test_failure_conversion() {
        let outcome: OperationResult<()> = Failure::not_configured().into();

        assert!(!outcome.is_ok());
        assert_eq!(outcome.failure().map(|f| f.kind), Some(FailureKind::NotConfigured));
    }
}
