use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Prefix sent ahead of a formula so the model evaluates it.
pub const FORMULA_INSTRUCTION: &str =
    "Calculate the result of the following formula and show the final value: ";

/// Prefix sent ahead of a range description so the model counts its primes.
pub const PRIME_INSTRUCTION: &str =
    "How many prime numbers are there within the following range? ";

/// Which operation a query is routed to.
///
/// The mode is decided by the endpoint that received the query, never by the
/// prompt text itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    Generic,
    Formula,
    Prime,
}

impl QueryMode {
    pub fn all() -> [QueryMode; 3] {
        [QueryMode::Generic, QueryMode::Formula, QueryMode::Prime]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryMode::Generic => "generic",
            QueryMode::Formula => "formula",
            QueryMode::Prime => "prime",
        }
    }

    /// Fixed text placed in front of the user's prompt before it goes upstream.
    pub fn instruction(&self) -> &'static str {
        match self {
            QueryMode::Generic => "",
            QueryMode::Formula => FORMULA_INSTRUCTION,
            QueryMode::Prime => PRIME_INSTRUCTION,
        }
    }
}

impl std::fmt::Display for QueryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QueryMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "generic" | "query" => Ok(QueryMode::Generic),
            "formula" => Ok(QueryMode::Formula),
            "prime" | "primes" => Ok(QueryMode::Prime),
            other => Err(DomainError::invalid_input(format!(
                "unknown query mode '{other}' (expected generic, formula or prime)"
            ))),
        }
    }
}
