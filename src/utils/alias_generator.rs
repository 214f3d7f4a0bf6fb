//! Random alias generation.
//!
//! Generated aliases are not unique by construction. Uniqueness is enforced by the
//! store's insert, which fails on collision.

use rand::Rng;

/// Length of aliases generated when the caller does not supply one.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Characters a generated alias is drawn from.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generates an alias of exactly `length` ASCII letters, uniformly at random.
///
/// # Examples
///
/// ```
/// use alias_shortener::utils::alias_generator::generate_alias;
///
/// let alias = generate_alias(6);
/// assert_eq!(alias.len(), 6);
/// assert!(alias.chars().all(|c| c.is_ascii_alphabetic()));
/// ```
pub fn generate_alias(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
