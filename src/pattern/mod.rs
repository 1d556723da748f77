mod ast;
mod error;
mod lexer;
mod matcher;
mod parser;
mod plan;

pub use ast::{Pattern, PatternElement, Segment, Selection, Variable};
pub use error::{PatternResult, PatternSyntaxError, SyntaxErrorReason};
pub use matcher::match_segment;
pub use parser::{SEPARATOR, TRAVERSE, compile, compile_with};
pub use plan::SearchStep;
