//! Cryptographic Utilities

use rand::{Rng, rngs::OsRng};

/// Alphabet for human-facing random codes.
///
/// Uppercase letters and digits, minus the easily-confused O/0 and I/1.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Generate a random human-facing code of the given length
///
/// Drawn from a CSPRNG; suitable for join codes that are shared out of
/// band, not for secrets.
pub fn random_code(len: usize) -> String {
    let mut rng = OsRng;
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..CODE_ALPHABET.len());
            CODE_ALPHABET[idx] as char
        })
        .collect()
}
