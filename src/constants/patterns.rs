use once_cell::sync::Lazy;
use regex::Regex;

/// YouTube ids are 11 characters today; anything id-like up to 64 characters is accepted.
pub static VIDEO_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]{1,64}$").expect("VIDEO_ID_REGEX is a valid regex pattern")
});
