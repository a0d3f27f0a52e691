use crate::consts::{FOUR_DIGIT_RE, ZERO_LED_RE};
use regex::Regex;

/// Which leading numeric prefixes a renumbering run considers eligible.
///
/// Both rules expect exactly four ASCII digits followed by a `-` separator
/// at the start of the filename; `ZeroLed` additionally requires the first
/// digit to be `0`, so `1000-c.js` is left untouched under it.
///
/// # Examples
///
/// ```rust
/// use renumber::name::split_prefix;
/// use renumber::types::PrefixRule;
///
/// assert_eq!(
///     split_prefix("0042-setup.md", PrefixRule::FourDigit),
///     Some(("0042", "setup.md"))
/// );
///
/// // no leading zero, so the zero-led rule skips it
/// assert_eq!(split_prefix("1000-c.js", PrefixRule::ZeroLed), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixRule {
    /// Any four ASCII digits then `-`.
    FourDigit,
    /// Four ASCII digits starting with `0`, then `-`.
    ZeroLed,
}

impl PrefixRule {
    pub fn pattern(self) -> &'static Regex {
        match self {
            Self::FourDigit => &FOUR_DIGIT_RE,
            Self::ZeroLed => &ZERO_LED_RE,
        }
    }
}

/// A single planned rename within the target directory. Both names are bare
/// filenames, not paths.
///
/// # Examples
///
/// ```rust
/// use renumber::types::RenameStep;
///
/// let step = RenameStep {
///     from: "0005-intro.md".to_string(),
///     to: "0010-intro.md".to_string(),
/// };
/// assert_eq!(step.to, "0010-intro.md");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameStep {
    pub from: String,
    pub to: String,
}
