//! Control-flow results.

use crate::Value;

/// How a statement or block finished.
///
/// Block execution returns this instead of raising host-level exceptions:
/// a non-`Normal` result stops the block immediately and is handed to the
/// enclosing construct. `Skip`/`Stop` are consumed by the innermost `while`;
/// `Give` travels all the way to the call boundary.
#[derive(Clone, PartialEq, Debug)]
pub enum Flow {
    /// Ran to completion; keep going.
    Normal,
    /// A `give` fired, possibly carrying a value.
    Give(Option<Value>),
    /// A `skip` fired: next loop iteration.
    Skip,
    /// A `stop` fired: leave the loop.
    Stop,
}
