use crate::consts::PREFIX_WIDTH;
use crate::types::PrefixRule;

/// Format the filename for an assigned sequence number, e.g.
/// `prefixed(10, "intro.md")` -> `"0010-intro.md"`.
pub fn prefixed(seq: u32, remainder: &str) -> String {
    format!("{seq:0width$}-{remainder}", width = PREFIX_WIDTH)
}

/// Split a filename into `(prefix, remainder)` per `rule`, e.g.
/// `"0042-setup.md"` -> `Some(("0042", "setup.md"))`. Returns `None` when the
/// name does not start with an eligible prefix.
pub fn split_prefix(name: &str, rule: PrefixRule) -> Option<(&str, &str)> {
    let caps = rule.pattern().captures(name)?;
    let prefix = caps.get(1)?.as_str();
    Some((prefix, &name[prefix.len() + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixed_pads_to_four() {
        assert_eq!(prefixed(10, "intro.md"), "0010-intro.md");
        assert_eq!(prefixed(990, "a.js"), "0990-a.js");
        assert_eq!(prefixed(1000, "a.js"), "1000-a.js");
    }

    #[test]
    fn split_four_digit_ok() {
        assert_eq!(
            split_prefix("0042-setup.md", PrefixRule::FourDigit),
            Some(("0042", "setup.md"))
        );
        assert_eq!(
            split_prefix("1000-c.js", PrefixRule::FourDigit),
            Some(("1000", "c.js"))
        );
        assert_eq!(
            split_prefix("0000-", PrefixRule::FourDigit),
            Some(("0000", ""))
        );
    }

    #[test]
    fn split_four_digit_none() {
        assert_eq!(split_prefix("misc.md", PrefixRule::FourDigit), None);
        assert_eq!(split_prefix("042-short.md", PrefixRule::FourDigit), None);
        assert_eq!(split_prefix("0042_setup.md", PrefixRule::FourDigit), None);
        assert_eq!(split_prefix("x0042-setup.md", PrefixRule::FourDigit), None);
    }

    #[test]
    fn split_zero_led_requires_leading_zero() {
        assert_eq!(
            split_prefix("0099-b.js", PrefixRule::ZeroLed),
            Some(("0099", "b.js"))
        );
        assert_eq!(split_prefix("1000-c.js", PrefixRule::ZeroLed), None);
    }
}
