//! Stack safety for the pipeline's grammar-shaped recursion.
//!
//! The parser and the interpreter both recurse to the depth of the source's
//! nesting (expression depth, block depth, call depth). Deeply nested input
//! would blow the default thread stack long before it exhausts memory, so
//! the recursive entry points wrap themselves in [`ensure_sufficient_stack`],
//! which grows the stack on demand instead.
//!
//! This does not mask unbounded language-level recursion: a rill function
//! calling itself without a base case still exhausts the process and aborts,
//! which is the accepted fatal condition.

/// Remaining stack below which we grow (64 KiB).
const RED_ZONE: usize = 64 * 1024;

/// Amount added per growth (2 MiB).
const GROWTH: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_the_result_through() {
        assert_eq!(ensure_sufficient_stack(|| 7), 7);
        let ok: Result<&str, ()> = ensure_sufficient_stack(|| Ok("fine"));
        assert_eq!(ok, Ok("fine"));
    }

    #[test]
    fn survives_recursion_past_the_default_stack() {
        fn countdown(n: u32) -> u32 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { countdown(n - 1) + 1 })
        }

        // Deep enough to overflow an 8 MiB stack without the guard.
        assert_eq!(countdown(200_000), 200_000);
    }
}
