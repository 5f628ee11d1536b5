//! Random identifier generation.
//!
//! Posting and media ids are opaque 9-character base-36 strings with a short
//! type prefix, minted from OS entropy. There is no central id authority;
//! uniqueness is probabilistic, which is sufficient for a catalog measured in
//! hundreds of records.

pub const PREFIX_JOB: &str = "job";
pub const PREFIX_EVENT: &str = "evt";
pub const PREFIX_MEDIA: &str = "med";

const ID_LEN: usize = 9;
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a fresh `<prefix>-<random>` identifier.
#[must_use]
pub fn generate_id(prefix: &str) -> String {
    let mut bytes = [0u8; ID_LEN];
    // getrandom only fails on broken OS entropy; fall back to a time-derived
    // seed rather than propagating an error through every caller.
    if getrandom::fill(&mut bytes).is_err() {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.subsec_nanos());
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = (nanos >> (i % 4 * 8)) as u8 ^ (i as u8).wrapping_mul(31);
        }
    }

    let mut id = String::with_capacity(prefix.len() + 1 + ID_LEN);
    id.push_str(prefix);
    id.push('-');
    for b in bytes {
        id.push(ALPHABET[usize::from(b) % ALPHABET.len()] as char);
    }
    id
}
