//! Stack growth for recursive tree walks.
//!
//! Type substitution and tree printing recurse once per tree level. Deeply
//! nested type expressions (long chains of type arguments) can exceed the
//! default thread stack, so those walks wrap each level in
//! [`ensure_sufficient_stack`].
//!
//! On native targets this grows the stack on demand with `stacker`; on WASM
//! it is a plain call.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A chain of `depth` nested one-element vectors, walked recursively.
    fn nested_depth(chain: &[usize], at: usize) -> usize {
        ensure_sufficient_stack(|| {
            if at == chain.len() {
                0
            } else {
                1 + nested_depth(chain, chain[at])
            }
        })
    }

    #[test]
    fn test_deep_walk_does_not_overflow() {
        let depth = 200_000;
        let chain: Vec<usize> = (1..=depth).collect();
        assert_eq!(nested_depth(&chain, 0), depth);
    }

    #[test]
    fn test_passes_result_through() {
        let result: Result<u8, &str> = ensure_sufficient_stack(|| Err("unbound"));
        assert_eq!(result, Err("unbound"));
    }
}
