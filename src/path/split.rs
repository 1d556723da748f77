use crate::pattern::SEPARATOR;

/// Splits a hierarchical name into its components.
///
/// No trimming is done: a leading, trailing or doubled separator yields an
/// empty component, the same way pattern text is split into segments.
#[inline]
pub fn split_components(path: &str) -> Vec<&str> {
    path.split(SEPARATOR).collect()
}

/// Inverse of [`split_components`].
pub fn join_components<S: AsRef<str>>(components: &[S]) -> String {
    let capacity = components
        .iter()
        .map(|c| c.as_ref().len() + SEPARATOR.len_utf8())
        .sum::<usize>();
    let mut out = String::with_capacity(capacity);
    for (i, component) in components.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(component.as_ref());
    }
    out
}
