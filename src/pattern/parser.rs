use super::ast::{Pattern, Segment};
use super::lexer::{Lexeme, tokenize_segment};
use super::{PatternResult, PatternSyntaxError, SyntaxErrorReason};
use crate::enums::CharacterPolicy;
use crate::options::CompileOptions;

pub const SEPARATOR: char = '/';
pub const TRAVERSE: &str = "**";

/// Compiles `text` with the default options.
pub fn compile(text: &str) -> PatternResult<Pattern> {
    compile_with(text, &CompileOptions::default())
}

#[tracing::instrument(level = "trace", skip_all, fields(pattern_len=text.len() as u64))]
pub fn compile_with(text: &str, options: &CompileOptions) -> PatternResult<Pattern> {
    let mut segments = Vec::new();
    let mut base = 0usize;
    for raw in text.split(SEPARATOR) {
        segments.push(compile_segment(text, raw, base, options.character_policy)?);
        base += raw.len() + SEPARATOR.len_utf8();
    }

    let pattern = Pattern::new(text.to_string(), segments);
    tracing::event!(
        tracing::Level::TRACE,
        operation = "compile",
        segments = pattern.segments().len() as u64,
        contains_variables = pattern.contains_variables()
    );
    Ok(pattern)
}

fn compile_segment(
    pattern: &str,
    raw: &str,
    base: usize,
    policy: CharacterPolicy,
) -> PatternResult<Segment> {
    if raw == TRAVERSE {
        return Ok(Segment::Traverse);
    }

    let lexemes = tokenize_segment(pattern, raw, base, policy)?;
    validate_adjacency(pattern, &lexemes)?;
    Ok(Segment::Literal(
        lexemes.into_iter().map(|lexeme| lexeme.element).collect(),
    ))
}

// Two variable-length elements side by side leave the split point undecidable.
fn validate_adjacency(pattern: &str, lexemes: &[Lexeme]) -> PatternResult<()> {
    for pair in lexemes.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if prev.element.kind().is_variable_length() && next.element.kind().is_variable_length() {
            return Err(PatternSyntaxError::new(
                SyntaxErrorReason::AmbiguousAdjacentWildcards,
                pattern,
                next.offset,
                next.element.token().chars().next(),
            ));
        }
    }
    Ok(())
}
