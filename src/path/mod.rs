mod split;

pub use split::{join_components, split_components};
