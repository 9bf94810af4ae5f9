// Identifier suggestions sent to the API. The server has the final say on
// ids; these only need to be unlikely to collide within a test database,
// so a non-cryptographic thread-local RNG is enough and no uniqueness
// check is made.

use rand::Rng;

/// Number of random letters in every generated identifier.
pub const ID_LEN: usize = 10;

pub const USER_PREFIX: &str = "user";
pub const GROUP_PREFIX: &str = "group";

/// Random lowercase ASCII string of `ID_LEN` letters.
pub fn generate_id() -> String {
    generate_id_with(&mut rand::thread_rng())
}

/// Same as [`generate_id`] but drawing from the given RNG.
pub fn generate_id_with<R: Rng>(rng: &mut R) -> String {
    (0..ID_LEN)
        .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
        .collect()
}

pub fn user_id_suggestion() -> String {
    format!("{USER_PREFIX}{}", generate_id())
}

pub fn group_name_suggestion() -> String {
    format!("{GROUP_PREFIX}{}", generate_id())
}

/// True when `s` is `prefix` followed by exactly `ID_LEN` lowercase letters.
pub fn is_suggestion(s: &str, prefix: &str) -> bool {
    s.strip_prefix(prefix)
        .map(|rest| rest.len() == ID_LEN && rest.bytes().all(|b| b.is_ascii_lowercase()))
        .unwrap_or(false)
}
