use smallvec::SmallVec;
use std::collections::HashMap;

/// Byte offset and length of a capture inside one candidate component.
pub type ParamOffset = (usize, usize);
pub type CapturedVariable<'p> = (&'p str, ParamOffset);
pub type CaptureList<'p> = SmallVec<[CapturedVariable<'p>; 4]>;

/// A capture resolved against the candidate: variable name, component index, offset.
pub type ComponentCapture<'p> = (&'p str, usize, ParamOffset);

pub type Bindings = HashMap<String, String>;
