//! Short randomized base-36 node ids.

use rand::Rng;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Default length of generated ids. Configurable via [`crate::config`].
pub const DEFAULT_LENGTH: usize = 6;

/// Generate a random base-36 id of the default length.
///
/// Collisions are treated as caller error: `add_node` rejects a duplicate
/// id with `DuplicateId` rather than retrying.
pub fn generate() -> String {
    generate_with_length(DEFAULT_LENGTH)
}

/// Generate a random base-36 id of the given length.
pub fn generate_with_length(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
