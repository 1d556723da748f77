use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SyntaxErrorReason {
    UnterminatedVariable,
    UnterminatedSelection,
    InvalidCharacterInSelection,
    InvalidCharacter,
    AmbiguousAdjacentWildcards,
}

impl SyntaxErrorReason {
    /// Stable machine-readable code.
    pub fn code(self) -> &'static str {
        match self {
            Self::UnterminatedVariable => "unterminated_variable",
            Self::UnterminatedSelection => "unterminated_selection",
            Self::InvalidCharacterInSelection => "invalid_character_in_selection",
            Self::InvalidCharacter => "invalid_character",
            Self::AmbiguousAdjacentWildcards => "ambiguous_adjacent_wildcards",
        }
    }
}

impl fmt::Display for SyntaxErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::UnterminatedVariable => "variable is not closed",
            Self::UnterminatedSelection => "selection is not closed",
            Self::InvalidCharacterInSelection => "invalid character in selection",
            Self::InvalidCharacter => "invalid character",
            Self::AmbiguousAdjacentWildcards => "consecutive variable-length elements",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}{} (pattern='{pattern}', offset={offset})", found_suffix(.found))]
pub struct PatternSyntaxError {
    pub reason: SyntaxErrorReason,
    pub offset: usize,
    pub found: Option<char>,
    pub pattern: String,
}

impl PatternSyntaxError {
    pub(crate) fn new(
        reason: SyntaxErrorReason,
        pattern: &str,
        offset: usize,
        found: Option<char>,
    ) -> Self {
        Self {
            reason,
            offset,
            found,
            pattern: pattern.to_string(),
        }
    }

    #[inline]
    pub fn code(&self) -> &'static str {
        self.reason.code()
    }
}

fn found_suffix(found: &Option<char>) -> String {
    match found {
        Some(ch) => format!(" {:?}", ch),
        None => String::new(),
    }
}

pub type PatternResult<T> = Result<T, PatternSyntaxError>;
