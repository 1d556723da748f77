use hashbrown::HashSet as FastHashSet;
use memchr::memmem;
use smallvec::SmallVec;

use super::PatternElement;
use crate::types::CaptureList;

type RunEnds = SmallVec<[usize; 8]>;

/// Matches one candidate component against the elements of a literal segment.
///
/// Wildcards and variables take the shortest run that still lets the rest of
/// the segment match, left to right. Returns captured variables with byte
/// offsets relative to `component`; anonymous variables are not captured.
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(component_len=component.len() as u64, elements=elements.len() as u64)
)]
pub fn match_segment<'p>(
    component: &str,
    elements: &'p [PatternElement],
    case_sensitive: bool,
) -> Option<CaptureList<'p>> {
    if elements.is_empty() {
        return component.is_empty().then(CaptureList::new);
    }

    let mut matcher = SegmentMatcher {
        component,
        elements,
        case_sensitive,
        failed: FastHashSet::new(),
    };
    matcher.run()
}

/// A visited `(element, byte)` state and the end offsets left to try from it.
struct Frame {
    idx: usize,
    pos: usize,
    ends: Ends,
    // end offset of the branch currently being explored
    chosen: usize,
}

enum Ends {
    Listed { ends: RunEnds, cursor: usize },
    /// Run of a wildcard or variable; the next candidate end is at or after `from`.
    Scan { from: usize },
}

struct SegmentMatcher<'c, 'p> {
    component: &'c str,
    elements: &'p [PatternElement],
    case_sensitive: bool,
    // (element index, byte offset) pairs known not to match
    failed: FastHashSet<(usize, usize)>,
}

impl<'p> SegmentMatcher<'_, 'p> {
    // Depth-first over an explicit stack; each state is expanded at most once.
    fn run(&mut self) -> Option<CaptureList<'p>> {
        let mut stack: Vec<Frame> = Vec::new();
        stack.push(self.open(0, 0)?);

        while let Some(top) = stack.last_mut() {
            let Some(end) = self.next_end(top) else {
                let state = (top.idx, top.pos);
                stack.pop();
                self.failed.insert(state);
                continue;
            };

            let idx = top.idx + 1;
            if idx == self.elements.len() {
                if end == self.component.len() {
                    return Some(self.captures(&stack));
                }
                continue;
            }
            if let Some(frame) = self.open(idx, end) {
                stack.push(frame);
            }
        }
        None
    }

    fn open(&mut self, idx: usize, pos: usize) -> Option<Frame> {
        if self.failed.contains(&(idx, pos)) {
            return None;
        }

        let elements = self.elements;
        let listed = match &elements[idx] {
            PatternElement::Token(text) => {
                let mut ends = RunEnds::new();
                if self.literal_at(pos, text) {
                    ends.push(pos + text.len());
                }
                ends
            }
            PatternElement::Selection(selection) => selection
                .alternatives
                .iter()
                .filter(|alt| self.literal_at(pos, alt))
                .map(|alt| pos + alt.len())
                .collect(),
            PatternElement::Wildcard | PatternElement::Variable(_) => {
                if idx + 1 < elements.len() {
                    return Some(Frame {
                        idx,
                        pos,
                        ends: Ends::Scan { from: pos },
                        chosen: pos,
                    });
                }
                let mut ends = RunEnds::new();
                ends.push(self.component.len());
                ends
            }
        };

        if listed.is_empty() {
            self.failed.insert((idx, pos));
            return None;
        }
        Some(Frame {
            idx,
            pos,
            ends: Ends::Listed {
                ends: listed,
                cursor: 0,
            },
            chosen: pos,
        })
    }

    fn next_end(&self, frame: &mut Frame) -> Option<usize> {
        let end = match &mut frame.ends {
            Ends::Listed { ends, cursor } => {
                let end = ends.get(*cursor).copied()?;
                *cursor += 1;
                end
            }
            Ends::Scan { from } => {
                let end = self.scan_run_end(frame.idx, *from)?;
                *from = end + 1;
                end
            }
        };
        frame.chosen = end;
        Some(end)
    }

    /// Shortest end offset at or after `from` for the run of element `idx`.
    fn scan_run_end(&self, idx: usize, from: usize) -> Option<usize> {
        let bytes = self.component.as_bytes();
        if from > bytes.len() {
            return None;
        }
        if let (true, Some(PatternElement::Token(anchor))) =
            (self.case_sensitive, self.elements.get(idx + 1))
        {
            // the anchor starts with a leading byte, so every hit is a char boundary
            return memmem::find(&bytes[from..], anchor.as_bytes()).map(|rel| from + rel);
        }
        (from..=bytes.len()).find(|&end| self.component.is_char_boundary(end))
    }

    fn literal_at(&self, pos: usize, text: &str) -> bool {
        let bytes = self.component.as_bytes();
        let needle = text.as_bytes();
        let Some(window) = bytes.get(pos..pos + needle.len()) else {
            return false;
        };
        if self.case_sensitive {
            window == needle
        } else {
            window.eq_ignore_ascii_case(needle)
        }
    }

    /// Named variable runs along the successful path on `stack`.
    fn captures(&self, stack: &[Frame]) -> CaptureList<'p> {
        let elements = self.elements;
        let mut out = CaptureList::new();
        for frame in stack {
            if let PatternElement::Variable(var) = &elements[frame.idx] {
                if !var.is_anonymous() {
                    out.push((var.name.as_str(), (frame.pos, frame.chosen - frame.pos)));
                }
            }
        }
        out
    }
}
