use std::borrow::Cow;
use std::fmt::{self, Write as _};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{PatternSyntaxError, compile};
use crate::enums::{ElementKinds, PatternElementKind};

/// A compiled search pattern.
///
/// Serializes as its source text; deserializing compiles the text with the
/// default options, so a malformed pattern is rejected where it is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pattern {
    source: String,
    segments: Vec<Segment>,
    contains_variables: bool,
}

impl Pattern {
    pub(crate) fn new(source: String, segments: Vec<Segment>) -> Self {
        let contains_variables = segments
            .iter()
            .flat_map(|segment| segment.elements())
            .any(|element| element.kind() == PatternElementKind::Variable);
        Self {
            source,
            segments,
            contains_variables,
        }
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// True if any segment holds a `${...}` element, anonymous ones included.
    #[inline]
    pub fn contains_variables(&self) -> bool {
        self.contains_variables
    }

    pub fn contains_traverse(&self) -> bool {
        self.segments.iter().any(Segment::is_traverse)
    }

    pub fn element_kinds(&self) -> ElementKinds {
        self.segments
            .iter()
            .fold(ElementKinds::empty(), |acc, segment| acc | segment.kinds())
    }

    /// Named variables in source order; anonymous variables are skipped.
    pub fn variable_names(&self) -> Vec<&str> {
        self.segments
            .iter()
            .flat_map(|segment| segment.elements())
            .filter_map(|element| match element {
                PatternElement::Variable(var) if !var.is_anonymous() => Some(var.name.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Pattern {
    type Err = PatternSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        compile(s)
    }
}

impl TryFrom<String> for Pattern {
    type Error = PatternSyntaxError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        compile(&value)
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.source
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// `**`: zero or more hierarchy levels.
    Traverse,
    /// Elements matched as a concatenation against exactly one level.
    Literal(Vec<PatternElement>),
}

impl Segment {
    #[inline]
    pub fn is_traverse(&self) -> bool {
        matches!(self, Self::Traverse)
    }

    #[inline]
    pub fn elements(&self) -> &[PatternElement] {
        match self {
            Self::Traverse => &[],
            Self::Literal(elements) => elements,
        }
    }

    /// A literal segment without wildcards or variables.
    pub fn is_fixed(&self) -> bool {
        match self {
            Self::Traverse => false,
            Self::Literal(elements) => elements
                .iter()
                .all(|element| !element.kind().is_variable_length()),
        }
    }

    pub fn kinds(&self) -> ElementKinds {
        self.elements()
            .iter()
            .fold(ElementKinds::empty(), |acc, element| acc | element.kind().flag())
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Traverse => f.write_str("**"),
            Self::Literal(elements) => {
                for element in elements {
                    write!(f, "{}", element)?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PatternElement {
    Token(String),
    Wildcard,
    Variable(Variable),
    Selection(Selection),
}

impl PatternElement {
    #[inline]
    pub fn kind(&self) -> PatternElementKind {
        match self {
            Self::Token(_) => PatternElementKind::Token,
            Self::Wildcard => PatternElementKind::Wildcard,
            Self::Variable(_) => PatternElementKind::Variable,
            Self::Selection(_) => PatternElementKind::Selection,
        }
    }

    /// Surface text of this element as it would be written in a pattern.
    pub fn token(&self) -> Cow<'_, str> {
        match self {
            Self::Token(text) => Cow::Borrowed(text.as_str()),
            Self::Wildcard => Cow::Borrowed("*"),
            _ => Cow::Owned(self.to_string()),
        }
    }
}

impl fmt::Display for PatternElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(text) => f.write_str(text),
            Self::Wildcard => f.write_char('*'),
            Self::Variable(var) => write!(f, "${{{}}}", var.name),
            Self::Selection(sel) => {
                f.write_char('{')?;
                for (i, alt) in sel.alternatives.iter().enumerate() {
                    if i > 0 {
                        f.write_char('|')?;
                    }
                    f.write_str(alt)?;
                }
                f.write_char('}')
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    pub name: String,
}

impl Variable {
    pub fn new(name: String) -> Self {
        Self { name }
    }

    #[inline]
    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selection {
    pub alternatives: Vec<String>,
}

impl Selection {
    pub fn new(alternatives: Vec<String>) -> Self {
        Self { alternatives }
    }
}
