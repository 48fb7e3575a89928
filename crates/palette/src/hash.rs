//! String hashing for palette selection.

/// djb2 over UTF-16 code units with 32-bit signed wraparound after every
/// step, returning the absolute value.
///
/// The per-step wrap keeps indices identical to the browser client, which
/// computes `(hash << 5) + hash + charCode` and truncates with `| 0`.
pub fn djb2(s: &str) -> u32 {
    let hash = s.encode_utf16().fold(5381i32, |acc, unit| {
        acc.wrapping_shl(5)
            .wrapping_add(acc)
            .wrapping_add(i32::from(unit))
    });
    hash.unsigned_abs()
}
