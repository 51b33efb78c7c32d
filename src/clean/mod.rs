//! Amharic text-cleaning pipeline.
//!
//! Deterministic, per-row transforms applied to the `Message` column of an
//! export file, in this order:
//!
//! 1. Null handling — a missing message becomes an empty string
//! 2. Noise removal — strip URLs, then everything outside the allow-list
//!    (word characters, whitespace, Ethiopic punctuation)
//! 3. Whitespace normalization — collapse runs, trim ends
//! 4. Tokenization — plain whitespace split, no locale segmentation
//! 5. Character-variant normalization — fold the ha-family variants to ሀ
//! 6. Optional stopword removal — drop tokens from a fixed Amharic set
//!
//! Every stage is pure; cleaning the same text twice yields the same string
//! as cleaning it once.

mod preprocess;

use regex::Regex;

use crate::config::CleanConfig;

pub use preprocess::{CleanSummary, clean_file};

/// URLs, with or without a scheme (`https://…`, `www.…`).
const URL_PATTERN: &str = r"(?:https?://|www\.)\S+";

/// Everything outside the allow-list: Unicode word characters, whitespace,
/// and the Ethiopic punctuation set.
const NOISE_PATTERN: &str = r"[^\w\s፡።፣፤፥፦፧፨]";

const WHITESPACE_PATTERN: &str = r"\s+";

/// Visually/phonetically similar Ethiopic characters folded to one canonical
/// form. The ha-family spellings are interchangeable in informal writing.
const CHAR_VARIANTS: [(char, char); 6] = [
    ('ሃ', 'ሀ'),
    ('ሐ', 'ሀ'),
    ('ሓ', 'ሀ'),
    ('ኀ', 'ሀ'),
    ('ኅ', 'ሀ'),
    ('ኻ', 'ሀ'),
];

/// Common low-information Amharic words excluded in stopword mode.
pub const AMHARIC_STOPWORDS: [&str; 12] = [
    "እና", "ነው", "የ", "ላይ", "ውስጥ", "ወደ", "ከ", "ይህ", "ያ", "ግን", "ስለ", "እስከ",
];

/// The cleaned form of one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedMessage {
    /// Cleaned, character-normalized text; replaces the `Message` column.
    pub text: String,
    /// Whitespace tokens of `text`, in order.
    pub tokens: Vec<String>,
    /// `tokens` minus stopwords (identical to `tokens` unless stopword
    /// removal is enabled).
    pub filtered_tokens: Vec<String>,
}

/// Applies the cleaning pipeline to message text.
///
/// Regexes are compiled once at construction; cleaning itself is allocation
/// plus regex replacement, no I/O.
///
/// # Example
///
/// ```
/// use channelpack::clean::Cleaner;
/// use channelpack::config::CleanConfig;
///
/// let cleaner = Cleaner::new(CleanConfig::new());
/// let cleaned = cleaner.process(Some("ሃብት  በዋጋ!!  https://t.me/x"));
/// assert_eq!(cleaned.text, "ሀብት በዋጋ");
/// ```
pub struct Cleaner {
    config: CleanConfig,
    url_re: Regex,
    noise_re: Regex,
    whitespace_re: Regex,
}

impl Cleaner {
    /// Creates a cleaner for the given configuration.
    pub fn new(config: CleanConfig) -> Self {
        // Patterns are static and known-good.
        Self {
            config,
            url_re: Regex::new(URL_PATTERN).unwrap(),
            noise_re: Regex::new(NOISE_PATTERN).unwrap(),
            whitespace_re: Regex::new(WHITESPACE_PATTERN).unwrap(),
        }
    }

    /// Steps 1–3: null handling, noise removal, whitespace normalization.
    ///
    /// Idempotent: cleaning already-clean text changes nothing.
    pub fn clean(&self, text: Option<&str>) -> String {
        let Some(text) = text else {
            return String::new();
        };

        // URL removal must run before the allow-list strip, which would
        // otherwise leave scheme fragments behind as bare words.
        let text = self.url_re.replace_all(text, "");
        let text = self.noise_re.replace_all(&text, "");
        self.whitespace_re.replace_all(&text, " ").trim().to_string()
    }

    /// Full pipeline: clean, normalize variants, tokenize, filter stopwords.
    pub fn process(&self, text: Option<&str>) -> CleanedMessage {
        let cleaned = self.clean(text);
        let text = normalize_chars(&cleaned);

        let tokens: Vec<String> = tokenize(&text).into_iter().map(str::to_owned).collect();
        let filtered_tokens = if self.config.remove_stopwords {
            tokens
                .iter()
                .filter(|token| !is_stopword(token))
                .cloned()
                .collect()
        } else {
            tokens.clone()
        };

        CleanedMessage {
            text,
            tokens,
            filtered_tokens,
        }
    }
}

/// Step 4: splits cleaned text into word tokens on whitespace.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Step 5: folds character variants through the fixed substitution table.
pub fn normalize_chars(text: &str) -> String {
    text.chars()
        .map(|c| {
            CHAR_VARIANTS
                .iter()
                .find(|(variant, _)| *variant == c)
                .map_or(c, |(_, canonical)| *canonical)
        })
        .collect()
}

/// Returns `true` if `token` is in the fixed Amharic stopword set.
pub fn is_stopword(token: &str) -> bool {
    AMHARIC_STOPWORDS.contains(&token)
}
