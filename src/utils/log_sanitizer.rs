//! Log sanitization utilities for masking sensitive data.
//!
//! Emails echoed by the auth endpoints are masked before they reach the log.

const VISIBLE_CHARS: usize = 3;

/// Mask an email address for safe logging.
///
/// Shows only the first 3 characters of the local part (or fewer if it is
/// shorter) followed by asterisks and the domain. Counts characters, not
/// bytes, so non-ASCII input never splits a code point.
///
/// # Examples
/// ```ignore
/// assert_eq!(mask_email("user@example.com"), "use***@example.com");
/// assert_eq!(mask_email("ab@test.org"), "ab***@test.org");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.find('@') {
        Some(at_pos) => {
            let (local_part, domain) = email.split_at(at_pos);
            format!("{}***{}", visible_prefix(local_part), domain)
        }
        // Not a valid email format, just mask most of it
        None => format!("{}***", visible_prefix(email)),
    }
}

fn visible_prefix(value: &str) -> String {
    value.chars().take(VISIBLE_CHARS).collect()
}
