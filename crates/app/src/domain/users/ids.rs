//! User identifier generation.

use jiff::Zoned;
use uuid::Uuid;

use crate::domain::users::models::UserId;

/// `strftime` layout of [`IdScheme::Timestamp`] identifiers.
pub const TIMESTAMP_ID_FORMAT: &str = "%Y%m%d%H%M%S";

/// How new user identifiers are minted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum IdScheme {
    /// Time-ordered UUIDv7 strings.
    #[default]
    Uuid,

    /// Local wall-clock time at second precision, e.g. `20260102150405`.
    ///
    /// Two users created within the same second receive the same identifier
    /// and the later one replaces the earlier one.
    Timestamp,
}

impl IdScheme {
    /// Mint a new identifier.
    #[must_use]
    pub fn generate(self) -> UserId {
        match self {
            Self::Uuid => UserId::new(Uuid::now_v7().to_string()),
            Self::Timestamp => UserId::new(Zoned::now().strftime(TIMESTAMP_ID_FORMAT).to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn uuid_ids_are_unique_and_parseable() -> TestResult {
        let a = IdScheme::Uuid.generate();
        let b = IdScheme::Uuid.generate();

        assert_ne!(a, b);
        assert_eq!(Uuid::parse_str(a.as_str())?.get_version_num(), 7);

        Ok(())
    }

    #[test]
    fn uuid_ids_sort_in_creation_order() {
        let ids: Vec<UserId> = (0..16).map(|_| IdScheme::Uuid.generate()).collect();

        let mut sorted = ids.clone();
        sorted.sort();

        assert_eq!(ids, sorted);
    }

    #[test]
    fn timestamp_ids_are_fourteen_digits() {
        let id = IdScheme::Timestamp.generate();

        assert_eq!(id.as_str().len(), 14, "unexpected id {id}");
        assert!(id.as_str().chars().all(|c| c.is_ascii_digit()), "unexpected id {id}");
    }
}
