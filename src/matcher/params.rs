use crate::types::{Bindings, ComponentCapture};

/// Outcome of aligning a pattern with a candidate name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    pub matched: bool,
    /// Captured values by variable name; empty unless `matched`.
    pub bindings: Bindings,
}

impl MatchResult {
    pub(crate) fn matched(bindings: Bindings) -> Self {
        Self {
            matched: true,
            bindings,
        }
    }

    pub(crate) fn unmatched() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_match(&self) -> bool {
        self.matched
    }

    #[inline]
    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.bindings.get(name).map(String::as_str)
    }

    pub fn into_bindings(self) -> Bindings {
        self.bindings
    }
}

/// Resolves captured offsets against the candidate components.
///
/// Captures are applied in pattern order, so a name bound more than once keeps
/// the value of its last occurrence.
pub(crate) fn captures_to_bindings<S: AsRef<str>>(
    candidate: &[S],
    captures: &[ComponentCapture<'_>],
) -> Bindings {
    let mut map = Bindings::with_capacity(captures.len());
    for &(name, component, (start, len)) in captures {
        let Some(text) = candidate.get(component).map(AsRef::as_ref) else {
            continue;
        };
        if let Some(value) = text.get(start..start.saturating_add(len)) {
            map.insert(name.to_string(), value.to_string());
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_capture_of_same_name_wins() {
        let candidate = ["2024-01", "2025"];
        let captures = [("y", 0, (0, 4)), ("m", 0, (5, 2)), ("y", 1, (0, 4))];
        let map = captures_to_bindings(&candidate, &captures);
        assert_eq!(map.len(), 2);
        assert_eq!(map["y"], "2025");
        assert_eq!(map["m"], "01");
    }

    #[test]
    fn out_of_range_captures_are_ignored() {
        let candidate = ["abc"];
        let captures = [("a", 0, (1, 9)), ("b", 3, (0, 1))];
        assert!(captures_to_bindings(&candidate, &captures).is_empty());
    }

    #[test]
    fn accessors_expose_bindings() {
        let mut bindings = Bindings::new();
        bindings.insert("v".to_string(), "x".to_string());
        let result = MatchResult::matched(bindings);
        assert!(result.is_match());
        assert_eq!(result.get("v"), Some("x"));
        assert_eq!(result.get("w"), None);
        assert_eq!(result.into_bindings().len(), 1);
        assert!(!MatchResult::unmatched().is_match());
    }
}
