use serde::{Deserialize, Serialize};

use crate::enums::CharacterPolicy;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompileOptions {
    pub character_policy: CharacterPolicy,
}

impl CompileOptions {
    pub fn builder() -> CompileOptionsBuilder {
        CompileOptionsBuilder::default()
    }
}

#[derive(Debug, Default, Clone)]
pub struct CompileOptionsBuilder {
    options: CompileOptions,
}

impl CompileOptionsBuilder {
    pub fn character_policy(mut self, value: CharacterPolicy) -> Self {
        self.options.character_policy = value;
        self
    }

    pub fn build(self) -> CompileOptions {
        self.options
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchOptions {
    /// When false, tokens and selection alternatives compare ASCII case-insensitively.
    pub case_sensitive: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

impl MatchOptions {
    pub fn builder() -> MatchOptionsBuilder {
        MatchOptionsBuilder::default()
    }
}

#[derive(Debug, Default, Clone)]
pub struct MatchOptionsBuilder {
    options: MatchOptions,
}

impl MatchOptionsBuilder {
    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.options.case_sensitive = value;
        self
    }

    pub fn build(self) -> MatchOptions {
        self.options
    }
}
