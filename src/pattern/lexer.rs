use super::ast::{PatternElement, Selection, Variable};
use super::{PatternResult, PatternSyntaxError, SyntaxErrorReason};
use crate::enums::CharacterPolicy;

/// An element together with the byte offset it starts at in the pattern text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Lexeme {
    pub offset: usize,
    pub element: PatternElement,
}

#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(segment_len=raw.len() as u64, base=base as u64)
)]
pub(crate) fn tokenize_segment(
    pattern: &str,
    raw: &str,
    base: usize,
    policy: CharacterPolicy,
) -> PatternResult<Vec<Lexeme>> {
    SegmentLexer::new(pattern, raw, base, policy).run()
}

struct SegmentLexer<'a> {
    pattern: &'a str,
    segment: &'a str,
    chars: Vec<(usize, char)>,
    index: usize,
    base: usize,
    policy: CharacterPolicy,
}

impl<'a> SegmentLexer<'a> {
    fn new(pattern: &'a str, segment: &'a str, base: usize, policy: CharacterPolicy) -> Self {
        Self {
            pattern,
            segment,
            chars: segment.char_indices().collect(),
            index: 0,
            base,
            policy,
        }
    }

    fn run(mut self) -> PatternResult<Vec<Lexeme>> {
        let mut lexemes = Vec::new();
        while let Some(ch) = self.peek() {
            let offset = self.current_offset();
            let element = match ch {
                '*' => {
                    self.next();
                    PatternElement::Wildcard
                }
                '$' => self.lex_variable()?,
                '{' => self.lex_selection()?,
                _ if self.policy.is_reserved(ch) => {
                    return Err(self.error(SyntaxErrorReason::InvalidCharacter, offset, Some(ch)));
                }
                _ => self.lex_token(),
            };
            lexemes.push(Lexeme { offset, element });
        }
        Ok(lexemes)
    }

    fn lex_token(&mut self) -> PatternElement {
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if is_special(ch) || self.policy.is_reserved(ch) {
                break;
            }
            text.push(ch);
            self.next();
        }
        debug_assert!(!text.is_empty());
        PatternElement::Token(text)
    }

    fn lex_variable(&mut self) -> PatternResult<PatternElement> {
        let start = self.current_offset();
        self.expect('$');
        if self.peek() != Some('{') {
            return Err(self.error(SyntaxErrorReason::InvalidCharacter, start, Some('$')));
        }
        self.expect('{');

        let mut name = String::new();
        loop {
            match self.peek() {
                None => {
                    return Err(self.error(SyntaxErrorReason::UnterminatedVariable, start, None));
                }
                Some('}') => {
                    self.next();
                    return Ok(PatternElement::Variable(Variable::new(name)));
                }
                Some(ch) if is_special(ch) || self.policy.is_reserved(ch) => {
                    let offset = self.current_offset();
                    return Err(self.error(SyntaxErrorReason::InvalidCharacter, offset, Some(ch)));
                }
                Some(ch) => {
                    name.push(ch);
                    self.next();
                }
            }
        }
    }

    fn lex_selection(&mut self) -> PatternResult<PatternElement> {
        let start = self.current_offset();
        self.expect('{');

        let mut alternatives = Vec::new();
        let mut current = String::new();
        loop {
            match self.peek() {
                None => {
                    return Err(self.error(SyntaxErrorReason::UnterminatedSelection, start, None));
                }
                Some('}') => {
                    self.next();
                    alternatives.push(current);
                    return Ok(PatternElement::Selection(Selection::new(alternatives)));
                }
                Some('|') => {
                    self.next();
                    alternatives.push(std::mem::take(&mut current));
                }
                Some(ch) if is_special(ch) || self.policy.is_reserved(ch) => {
                    let offset = self.current_offset();
                    return Err(self.error(
                        SyntaxErrorReason::InvalidCharacterInSelection,
                        offset,
                        Some(ch),
                    ));
                }
                Some(ch) => {
                    current.push(ch);
                    self.next();
                }
            }
        }
    }

    fn error(
        &self,
        reason: SyntaxErrorReason,
        offset: usize,
        found: Option<char>,
    ) -> PatternSyntaxError {
        PatternSyntaxError::new(reason, self.pattern, offset, found)
    }

    fn expect(&mut self, expected: char) {
        let actual = self.next();
        debug_assert_eq!(Some(expected), actual);
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.index).map(|(_, ch)| *ch)
    }

    fn next(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.index += 1;
        }
        ch
    }

    /// Byte offset of the cursor within the whole pattern text.
    fn current_offset(&self) -> usize {
        self.base
            + self
                .chars
                .get(self.index)
                .map(|(idx, _)| *idx)
                .unwrap_or(self.segment.len())
    }
}

#[inline]
fn is_special(ch: char) -> bool {
    matches!(ch, '*' | '$' | '{')
}
