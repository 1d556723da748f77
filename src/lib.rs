pub mod enums;
pub mod matcher;
pub mod options;
pub mod path;
pub mod pattern;
pub mod types;

pub use enums::{CharacterPolicy, ElementKinds, PatternElementKind};
pub use matcher::{MatchResult, match_components, match_components_with};
pub use options::{CompileOptions, MatchOptions};
pub use path::{join_components, split_components};
pub use pattern::{
    Pattern, PatternElement, PatternResult, PatternSyntaxError, SearchStep, Segment,
    SyntaxErrorReason, compile, compile_with,
};
pub use types::Bindings;
