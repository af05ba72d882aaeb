// Helper functions for safe logging of sensitive values.

/// Masks email addresses for safe logging
/// Prevents sensitive data exposure while preserving debugging utility
pub fn safe_email_log(email: &str) -> String {
    if email.len() > 3 {
        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() == 2 {
            // First char, not first byte; the local part may be multibyte.
            if let Some(first) = parts[0].chars().next() {
                return format!("{first}***@{}", parts[1]);
            }
        }
        "***@***.***".to_string()
    } else {
        "***@***.***".to_string()
    }
}

/// Masks tokens for safe logging
/// Shows only first and last 4 characters
pub fn safe_token_log(token: &str) -> String {
    if token.len() > 8 {
        format!("{}...{}", &token[..4], &token[token.len() - 4..])
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_keeps_first_char_and_domain() {
        assert_eq!(safe_email_log("reader@example.com"), "r***@example.com");
    }

    #[test]
    fn email_masking_handles_multibyte_first_char() {
        assert_eq!(safe_email_log("émile@example.com"), "é***@example.com");
        assert_eq!(safe_email_log("日本@example.com"), "日***@example.com");
    }

    #[test]
    fn short_or_malformed_emails_are_fully_masked() {
        assert_eq!(safe_email_log("ab"), "***@***.***");
        assert_eq!(safe_email_log("no-at-sign"), "***@***.***");
    }

    #[test]
    fn token_masking_keeps_edges() {
        assert_eq!(safe_token_log("abcdefghijkl"), "abcd...ijkl");
        assert_eq!(safe_token_log("short"), "***");
    }
}
