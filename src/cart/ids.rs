//! Identifier Generation
//!
//! Fixed-width numeric identifiers drawn from a uniform random range.

use rand::Rng;

/// Exclusive upper bound of the identifier space: 10^12.
const ID_SPACE: u64 = 1_000_000_000_000;

/// Generates a 12-digit numeric string, zero-padded on the left.
///
/// Identifiers are unique enough for normal use; callers that need
/// collision-freedom (cart ids) check against their live keys and retry.
pub fn generate_numeric_id() -> String {
    let n = rand::thread_rng().gen_range(0..ID_SPACE);
    format!("{:012}", n)
}
