use regex::Regex;
use std::sync::LazyLock;

/// Increment between successive assigned prefixes.
pub const STEP: u32 = 10;

/// Width of the zero-padded numeric prefix.
pub const PREFIX_WIDTH: usize = 4;

/// Matches a leading four-digit prefix like `0042-`, capturing the digits.
pub static FOUR_DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{4})-").unwrap());

/// Matches a leading four-digit prefix whose first digit is `0`, like `0042-`.
pub static ZERO_LED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(0\d{3})-").unwrap());
