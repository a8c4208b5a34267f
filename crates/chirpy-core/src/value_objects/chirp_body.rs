//! Chirp body rules: profanity masking and the length limit

use crate::error::DomainError;

/// Maximum chirp length, counted in characters after filtering
pub const MAX_CHIRP_LENGTH: usize = 140;

/// Words masked out of every chirp
pub const PROFANE_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

const MASK: &str = "****";

/// Replace each space-separated word that matches a profane word
/// (case-insensitively) with `****`. Punctuated words are left alone.
pub fn replace_profanity(body: &str) -> String {
    body.split(' ')
        .map(|word| {
            let lowered = word.to_lowercase();
            if PROFANE_WORDS.contains(&lowered.as_str()) {
                MASK
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A filtered chirp body that fits the length limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChirpBody(String);

impl ChirpBody {
    /// Filter `raw` and check the result against [`MAX_CHIRP_LENGTH`]
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Chirp body must not be empty".to_string(),
            ));
        }

        let cleaned = replace_profanity(raw);
        if cleaned.chars().count() > MAX_CHIRP_LENGTH {
            return Err(DomainError::ContentTooLong {
                max: MAX_CHIRP_LENGTH,
            });
        }

        Ok(Self(cleaned))
    }

    /// Borrow the filtered body
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the filtered body
    pub fn into_inner(self) -> String {
        self.0
    }
}
