//! Index wrapping for closed-loop knot sequences.

/// Wrap `index` into `0..len` with a true (non-negative) modulo.
///
/// `wrap_index(-1, 5) == 4`, unlike the truncating `%`. Returns `0` when
/// `len == 0`.
pub fn wrap_index(index: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    // len fits in isize for any allocated Vec
    index.rem_euclid(len as isize) as usize
}
