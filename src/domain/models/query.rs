use serde::{Deserialize, Serialize};

use super::QueryMode;
use crate::domain::DomainError;

/// A single prompt bound for the language model.
///
/// Queries live for exactly one request: they are built from the submitted
/// form, turned into an upstream prompt, and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    prompt: String,
    mode: QueryMode,
}

impl Query {
    pub fn new(prompt: impl Into<String>, mode: QueryMode) -> Result<Self, DomainError> {
        let prompt = prompt.into();
        if prompt.is_empty() {
            return Err(DomainError::invalid_input("prompt must not be empty"));
        }
        Ok(Self { prompt, mode })
    }

    pub fn generic(prompt: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(prompt, QueryMode::Generic)
    }

    pub fn formula(formula: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(formula, QueryMode::Formula)
    }

    pub fn prime(range: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(range, QueryMode::Prime)
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn mode(&self) -> QueryMode {
        self.mode
    }

    /// The exact text sent upstream: the mode's instruction followed by the
    /// prompt, untouched.
    pub fn upstream_prompt(&self) -> String {
        format!("{}{}", self.mode.instruction(), self.prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FORMULA_INSTRUCTION;

    #[test]
    fn test_generic_prompt_is_forwarded_as_is() {
        let query = Query::generic("  tell me a joke\n").unwrap();
        assert_eq!(query.upstream_prompt(), "  tell me a joke\n");
        assert_eq!(query.mode(), QueryMode::Generic);
    }

    #[test]
    fn test_formula_prompt_gets_instruction_prefix() {
        let query = Query::formula("2+2").unwrap();
        assert_eq!(query.upstream_prompt(), format!("{FORMULA_INSTRUCTION}2+2"));
        assert_eq!(query.prompt(), "2+2");
    }

    #[test]
    fn test_empty_prompt_is_rejected() {
        assert!(Query::generic("").unwrap_err().is_invalid_input());
        assert!(Query::prime("").unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_whitespace_prompt_is_kept_unmodified() {
        let query = Query::generic(" \t\n").unwrap();
        assert_eq!(query.prompt(), " \t\n");
        assert_eq!(query.upstream_prompt(), " \t\n");
    }
}
