use bitflags::bitflags;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PatternElementKind {
    Token = 0,
    Wildcard = 1,
    Variable = 2,
    Selection = 3,
}

impl PatternElementKind {
    /// Wildcards and variables consume a run of unknown length.
    #[inline]
    pub fn is_variable_length(self) -> bool {
        matches!(self, Self::Wildcard | Self::Variable)
    }

    #[inline]
    pub fn flag(self) -> ElementKinds {
        match self {
            Self::Token => ElementKinds::TOKEN,
            Self::Wildcard => ElementKinds::WILDCARD,
            Self::Variable => ElementKinds::VARIABLE,
            Self::Selection => ElementKinds::SELECTION,
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ElementKinds: u8 {
        const TOKEN = 0b00000001;
        const WILDCARD = 0b00000010;
        const VARIABLE = 0b00000100;
        const SELECTION = 0b00001000;
    }
}

/// Which characters are accepted inside tokens, variable names and selection alternatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum CharacterPolicy {
    /// Only `*`, `$`, `{`, `}`, `\` and control characters are reserved.
    #[default]
    Grammar,
    /// Additionally reserves `|`, `?`, `#`, `[` and `]` outside selections.
    Reserved,
}

impl CharacterPolicy {
    #[inline]
    pub(crate) fn is_reserved(self, ch: char) -> bool {
        if ch.is_control() || matches!(ch, '\\' | '}') {
            return true;
        }
        self == Self::Reserved && matches!(ch, '|' | '?' | '#' | '[' | ']')
    }
}
