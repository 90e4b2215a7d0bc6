use chrono::Utc;
use rand::Rng;

const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 9;

/// Generates an identifier of the form `{prefix}-{millis}-{suffix}`.
///
/// The millisecond timestamp keeps ids roughly creation-ordered; the random
/// base-36 suffix keeps ids created within the same millisecond distinct.
pub(crate) fn generate(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    format!("{}-{}-{}", prefix, millis, random_suffix())
}

fn random_suffix() -> String {
    let mut rng = rand::rng();
    (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.random_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect()
}
