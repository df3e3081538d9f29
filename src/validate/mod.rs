//! Contact-capture validation
//!
//! Structural email check, a disposable-domain deny-list, and a non-blocking
//! typo suggestion for common provider misspellings. The honeypot check
//! lives here too: a filled hidden field marks the submission as bot traffic
//! so the caller can fake success without sending anything.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    // Structural check only. Deliverability is the webhook's problem.
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

/// Throwaway providers rejected before any network call.
const DISPOSABLE_DOMAINS: [&str; 12] = [
    "mailinator.com",
    "guerrillamail.com",
    "10minutemail.com",
    "tempmail.com",
    "temp-mail.org",
    "throwawaymail.com",
    "yopmail.com",
    "sharklasers.com",
    "getnada.com",
    "trashmail.com",
    "dispostable.com",
    "maildrop.cc",
];

/// Common domain misspellings worth a correction prompt.
const DOMAIN_TYPOS: [(&str, &str); 8] = [
    ("gmial.com", "gmail.com"),
    ("gmal.com", "gmail.com"),
    ("gamil.com", "gmail.com"),
    ("gmail.co", "gmail.com"),
    ("hotmial.com", "hotmail.com"),
    ("outlok.com", "outlook.com"),
    ("yaho.com", "yahoo.com"),
    ("yahooo.com", "yahoo.com"),
];

/// Result of checking a contact email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailCheck {
    /// Acceptable, optionally with a did-you-mean suggestion the UI may
    /// show without blocking.
    Valid { suggestion: Option<String> },
    /// Does not look like an email address.
    Malformed,
    /// Matches the disposable-domain deny-list.
    Disposable,
}

impl EmailCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, EmailCheck::Valid { .. })
    }
}

/// Validate a contact email.
pub fn check_email(email: &str) -> EmailCheck {
    let email = email.trim();
    if !EMAIL_RE.is_match(email) {
        return EmailCheck::Malformed;
    }

    let domain = match email.rsplit_once('@') {
        Some((_, domain)) => domain.to_ascii_lowercase(),
        None => return EmailCheck::Malformed,
    };

    if DISPOSABLE_DOMAINS.contains(&domain.as_str()) {
        return EmailCheck::Disposable;
    }

    let suggestion = DOMAIN_TYPOS
        .iter()
        .find(|(typo, _)| *typo == domain)
        .map(|(_, fixed)| {
            let local = email.rsplit_once('@').map(|(l, _)| l).unwrap_or_default();
            format!("{local}@{fixed}")
        });

    EmailCheck::Valid { suggestion }
}

/// True when the hidden honeypot field was filled in.
///
/// The caller responds with a silently-faked success and submits nothing.
pub fn is_honeypot_tripped(honeypot_field: &str) -> bool {
    !honeypot_field.trim().is_empty()
}
