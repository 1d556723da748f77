mod params;
pub mod resolver;

pub use params::MatchResult;
pub(crate) use params::captures_to_bindings;
pub use resolver::{match_components, match_components_with};
