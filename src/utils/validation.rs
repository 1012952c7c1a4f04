use regex::Regex;

/// Loose email shape check. Deliverability is the mail provider's problem.
pub fn is_valid_email(email: &str) -> bool {
    let email_regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    email_regex.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("jane@x.com"));
        assert!(is_valid_email("a.b+c@sub.domain.co.id"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("jane"));
        assert!(!is_valid_email("jane@x"));
        assert!(!is_valid_email("jane @x.com"));
        assert!(!is_valid_email("@x.com"));
    }
}
