use std::collections::BTreeSet;

use hashbrown::HashSet as FastHashSet;

use super::ast::{Pattern, PatternElement, Segment};
use super::parser::SEPARATOR;

/// One listing action a storage backend performs to enumerate candidates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SearchStep {
    /// The current entries and all of their descendants.
    Traverse,
    /// Relative glob expressions expanded under every entry reached so far.
    Glob(Vec<String>),
}

impl Segment {
    /// Glob expressions equivalent to this segment, sorted and without duplicates.
    ///
    /// Selections are expanded into their alternatives; wildcards and variables
    /// both become `*`. A traverse segment has no expansion.
    pub fn expand(&self) -> Vec<String> {
        let Self::Literal(elements) = self else {
            return Vec::new();
        };

        let mut results = vec![String::new()];
        for element in elements {
            let suffixes: BTreeSet<&str> = match element {
                PatternElement::Token(text) => BTreeSet::from([text.as_str()]),
                PatternElement::Wildcard | PatternElement::Variable(_) => BTreeSet::from(["*"]),
                PatternElement::Selection(sel) => {
                    sel.alternatives.iter().map(String::as_str).collect()
                }
            };
            results = results
                .iter()
                .flat_map(|prefix| suffixes.iter().map(move |suffix| format!("{prefix}{suffix}")))
                .collect();
        }

        results.sort_unstable();
        results.dedup();
        results
    }
}

impl Pattern {
    /// Splits this pattern into listing steps.
    ///
    /// Literal segments are folded into a single glob step while the segment
    /// folded last is fixed, so selections over known directories expand
    /// without listing them. A wildcard or variable ends the step since its
    /// entries must be listed before going deeper.
    #[tracing::instrument(level = "trace", skip_all, fields(segments=self.segments().len() as u64))]
    pub fn search_plan(&self) -> Vec<SearchStep> {
        let mut steps = Vec::new();
        let mut rest = self.segments().iter().peekable();

        while let Some(segment) = rest.next() {
            if segment.is_traverse() {
                steps.push(SearchStep::Traverse);
                continue;
            }

            let mut expressions = segment.expand();
            let mut last = segment;
            while last.is_fixed() {
                let Some(next) = rest.next_if(|next| !next.is_traverse()) else {
                    break;
                };
                let suffixes = next.expand();
                expressions = expressions
                    .iter()
                    .flat_map(|parent| {
                        suffixes
                            .iter()
                            .map(move |suffix| format!("{parent}{SEPARATOR}{suffix}"))
                    })
                    .collect();
                last = next;
            }

            let mut seen = FastHashSet::new();
            expressions.retain(|expr| seen.insert(expr.clone()));
            steps.push(SearchStep::Glob(expressions));
        }

        tracing::event!(
            tracing::Level::TRACE,
            operation = "search_plan",
            steps = steps.len() as u64
        );
        steps
    }
}
