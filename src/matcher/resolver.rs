use hashbrown::HashSet as FastHashSet;
use smallvec::SmallVec;

use super::{MatchResult, captures_to_bindings};
use crate::options::MatchOptions;
use crate::path::split_components;
use crate::pattern::{Pattern, PatternElement, Segment, match_segment};
use crate::types::{CaptureList, ComponentCapture};

type CaptureStack<'p> = SmallVec<[ComponentCapture<'p>; 8]>;

/// Matches `pattern` against `candidate` with the default options.
pub fn match_components<S: AsRef<str>>(pattern: &Pattern, candidate: &[S]) -> MatchResult {
    match_components_with(pattern, candidate, &MatchOptions::default())
}

#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(segments=pattern.segments().len() as u64, components=candidate.len() as u64)
)]
pub fn match_components_with<S: AsRef<str>>(
    pattern: &Pattern,
    candidate: &[S],
    options: &MatchOptions,
) -> MatchResult {
    let mut aligner = Aligner::new(pattern.segments(), candidate, options.case_sensitive);
    let result = match aligner.run() {
        Some(captures) => MatchResult::matched(captures_to_bindings(candidate, &captures)),
        None => MatchResult::unmatched(),
    };

    tracing::event!(
        tracing::Level::TRACE,
        operation = "match",
        matched = result.matched,
        bindings = result.bindings.len() as u64,
        visited_failures = aligner.failed.len() as u64
    );
    result
}

/// A visited `(segment, component)` state and the next component indices
/// still to try from it, `next..=last`.
struct Frame<'p> {
    seg: usize,
    comp: usize,
    next: usize,
    last: usize,
    captures: CaptureList<'p>,
}

struct Aligner<'p, 'c, S> {
    segments: &'p [Segment],
    candidate: &'c [S],
    case_sensitive: bool,
    // literal segments at or after each index; a state that has fewer
    // components left than this can never match
    literals_from: Vec<usize>,
    failed: FastHashSet<(usize, usize)>,
}

impl<'p, 'c, S: AsRef<str>> Aligner<'p, 'c, S> {
    fn new(segments: &'p [Segment], candidate: &'c [S], case_sensitive: bool) -> Self {
        let mut literals_from = vec![0usize; segments.len() + 1];
        for (idx, segment) in segments.iter().enumerate().rev() {
            literals_from[idx] = literals_from[idx + 1] + usize::from(!segment.is_traverse());
        }
        Self {
            segments,
            candidate,
            case_sensitive,
            literals_from,
            failed: FastHashSet::new(),
        }
    }

    // Depth-first over an explicit stack; each state is expanded at most once,
    // and a traverse tries its narrowest span first.
    fn run(&mut self) -> Option<CaptureStack<'p>> {
        if self.segments.is_empty() {
            return self.candidate.is_empty().then(CaptureStack::new);
        }

        let mut stack: Vec<Frame<'p>> = Vec::new();
        stack.push(self.open(0, 0)?);

        while let Some(top) = stack.last_mut() {
            if top.next > top.last {
                let state = (top.seg, top.comp);
                stack.pop();
                self.failed.insert(state);
                continue;
            }
            let comp = top.next;
            top.next += 1;

            let seg = top.seg + 1;
            if seg == self.segments.len() {
                if comp == self.candidate.len() {
                    return Some(collect_captures(&stack));
                }
                continue;
            }
            if let Some(frame) = self.open(seg, comp) {
                stack.push(frame);
            }
        }
        None
    }

    fn open(&mut self, seg: usize, comp: usize) -> Option<Frame<'p>> {
        let segments = self.segments;
        let remaining = self.candidate.len().saturating_sub(comp);
        if self.literals_from[seg] > remaining || self.failed.contains(&(seg, comp)) {
            return None;
        }

        match &segments[seg] {
            Segment::Traverse => Some(Frame {
                seg,
                comp,
                next: comp,
                last: comp + (remaining - self.literals_from[seg]),
                captures: CaptureList::new(),
            }),
            Segment::Literal(elements) => {
                let captures = self.match_literal(comp, elements);
                if captures.is_none() {
                    self.failed.insert((seg, comp));
                }
                captures.map(|captures| Frame {
                    seg,
                    comp,
                    next: comp + 1,
                    last: comp + 1,
                    captures,
                })
            }
        }
    }

    fn match_literal(
        &self,
        comp: usize,
        elements: &'p [PatternElement],
    ) -> Option<CaptureList<'p>> {
        let component = self.candidate.get(comp)?;
        match_segment(component.as_ref(), elements, self.case_sensitive)
    }
}

fn collect_captures<'p>(stack: &[Frame<'p>]) -> CaptureStack<'p> {
    stack
        .iter()
        .flat_map(|frame| {
            frame
                .captures
                .iter()
                .map(move |&(name, offset)| (name, frame.comp, offset))
        })
        .collect()
}

impl Pattern {
    /// Matches this pattern against candidate components with the default options.
    #[inline]
    pub fn matches<S: AsRef<str>>(&self, candidate: &[S]) -> MatchResult {
        match_components(self, candidate)
    }

    #[inline]
    pub fn matches_with<S: AsRef<str>>(
        &self,
        candidate: &[S],
        options: &MatchOptions,
    ) -> MatchResult {
        match_components_with(self, candidate, options)
    }

    pub fn is_match<S: AsRef<str>>(&self, candidate: &[S]) -> bool {
        self.matches(candidate).matched
    }

    /// Splits `path` on `/` without trimming and matches the components.
    pub fn match_path(&self, path: &str) -> MatchResult {
        let components = split_components(path);
        self.matches(components.as_slice())
    }
}
