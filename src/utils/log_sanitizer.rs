//! Log sanitization utilities for masking sensitive data.
//!
//! Emails and usernames are masked before they reach log lines so PII never
//! lands in log storage.

/// Mask an email address for safe logging.
///
/// Keeps at most the first 3 characters of the local part and the full
/// domain: `user@example.com` -> `use***@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => format!("{}***@{}", visible_prefix(local), domain),
        None => format!("{}***", visible_prefix(email)),
    }
}

/// Mask a username for safe logging, keeping at most the first 3 characters.
pub fn mask_username(username: &str) -> String {
    format!("{}***", visible_prefix(username))
}

fn visible_prefix(s: &str) -> String {
    s.chars().take(3).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_email_local_part() {
        assert_eq!(mask_email("user@example.com"), "use***@example.com");
        assert_eq!(mask_email("johndoe@test.org"), "joh***@test.org");
    }

    #[test]
    fn short_local_parts_stay_short() {
        assert_eq!(mask_email("ab@test.org"), "ab***@test.org");
        assert_eq!(mask_email("a@test.org"), "a***@test.org");
    }

    #[test]
    fn masks_strings_without_at_sign() {
        assert_eq!(mask_email("notanemail"), "not***");
    }

    #[test]
    fn masks_username() {
        assert_eq!(mask_username("johndoe"), "joh***");
        assert_eq!(mask_username("ab"), "ab***");
    }
}
