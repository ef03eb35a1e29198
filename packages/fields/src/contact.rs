//! Phone and email matching.
//!
//! Both extractors are pure functions over the raw text: no normalization
//! is applied and the first match in document order wins.

use std::sync::LazyLock;

use regex::Regex;

/// Mainland mobile number: `1`, then `3`-`9`, then nine more digits, not
/// embedded in a longer digit run.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9])(1[3-9][0-9]{9})(?:[^0-9]|$)").expect("valid regex")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid regex")
});

/// Returns the first 11-digit mobile number in `text`.
#[must_use]
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
}

/// Returns the first email address in `text`.
#[must_use]
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_phone_and_email_in_contact_line() {
        let text = "Contact: 13812345678, email: a.b@test.com";
        assert_eq!(extract_phone(text).as_deref(), Some("13812345678"));
        assert_eq!(extract_email(text).as_deref(), Some("a.b@test.com"));
    }

    #[test]
    fn phone_after_ideographs_matches() {
        assert_eq!(
            extract_phone("电话：13812345678").as_deref(),
            Some("13812345678")
        );
        assert_eq!(
            extract_phone("手机15912345678男").as_deref(),
            Some("15912345678")
        );
    }

    #[test]
    fn phone_rejects_longer_digit_runs() {
        assert_eq!(extract_phone("id 138123456789"), None);
        assert_eq!(extract_phone("id 9138123456789 x"), None);
    }

    #[test]
    fn phone_rejects_invalid_second_digit() {
        assert_eq!(extract_phone("12812345678"), None);
    }

    #[test]
    fn phone_is_not_normalized() {
        assert_eq!(extract_phone("(+86) 159-2842-3292"), None);
        assert_eq!(extract_phone("138 1234 5678"), None);
    }

    #[test]
    fn first_phone_wins() {
        assert_eq!(
            extract_phone("13912345678 / 13812345678").as_deref(),
            Some("13912345678")
        );
    }

    #[test]
    fn first_email_wins() {
        let text = "联系邮箱：5@163.com gsm2832954437@163.com";
        assert_eq!(extract_email(text).as_deref(), Some("5@163.com"));
    }

    #[test]
    fn email_requires_alphabetic_tld() {
        assert_eq!(extract_email("user@host.1"), None);
        assert_eq!(extract_email("user@host.c"), None);
    }

    #[test]
    fn results_are_well_formed_for_assorted_inputs() {
        let inputs = [
            "",
            "no contact info here",
            "tel:+8613812345678;",
            "a@b.co 17700001111 x@y",
            "00000000000000000",
            "邮箱:test123@qq.com 手机:18612345678",
        ];
        for input in inputs {
            if let Some(phone) = extract_phone(input) {
                assert_eq!(phone.len(), 11, "{input}");
                assert!(phone.starts_with('1'));
                assert!(phone.chars().all(|c| c.is_ascii_digit()));
            }
            if let Some(email) = extract_email(input) {
                assert!(EMAIL_RE.is_match(&email));
                assert!(email.contains('@'));
            }
            assert_eq!(extract_phone(input), extract_phone(input));
            assert_eq!(extract_email(input), extract_email(input));
        }
    }
}
