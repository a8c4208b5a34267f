//! Value objects - validated, immutable domain primitives

mod chirp_body;
mod email;

pub use chirp_body::{replace_profanity, ChirpBody, MAX_CHIRP_LENGTH, PROFANE_WORDS};
pub use email::Email;
