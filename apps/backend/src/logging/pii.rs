use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Redaction patterns, compiled once.
pub struct PiiRegexRegistry;

impl PiiRegexRegistry {
    /// UUID-shaped tokens inside free text; the first group is kept.
    pub fn invite_token() -> &'static Regex {
        static INVITE_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(
                r"\b([0-9A-Fa-f]{8})-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{12}\b",
            )
            .unwrap()
        });
        &INVITE_TOKEN_REGEX
    }

    /// `scheme://user:password@` credentials in connection strings.
    pub fn url_password() -> &'static Regex {
        static URL_PASSWORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"(?P<prefix>[A-Za-z][A-Za-z0-9+.-]*://[^:/@\s]+:)[^@\s]+@").unwrap()
        });
        &URL_PASSWORD_REGEX
    }

    pub fn email() -> &'static Regex {
        static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
        });
        &EMAIL_REGEX
    }
}

/// Masks invite tokens, URL passwords and email local parts.
///
/// Credentials go first so the password of `user:pw@host` is never mistaken
/// for an email local part.
pub fn redact(input: &str) -> String {
    let without_passwords = PiiRegexRegistry::url_password().replace_all(input, "${prefix}***@");

    let without_tokens =
        PiiRegexRegistry::invite_token().replace_all(&without_passwords, "${1}-****");

    PiiRegexRegistry::email()
        .replace_all(&without_tokens, |caps: &regex::Captures| {
            let full_match = &caps[0];
            match full_match.split_once('@') {
                Some((local, domain)) if !local.is_empty() && local != "***" => {
                    format!("{}***@{domain}", &local[..1])
                }
                _ => full_match.to_string(),
            }
        })
        .into_owned()
}

/// Masks an opaque token whatever its shape.
///
/// At most the first 8 characters are kept, and never more than a third of
/// the token.
pub fn mask_token(token: &str) -> String {
    let keep = (token.chars().count() / 3).min(8);
    let prefix: String = token.chars().take(keep).collect();
    format!("{prefix}****")
}

/// Request path with every segment after `/api/<resource>` masked.
///
/// Used when no route pattern matched, so the position of tokens is unknown.
pub fn redact_path(path: &str) -> String {
    path.split('/')
        .enumerate()
        .map(|(i, segment)| {
            if i > 2 && !segment.is_empty() {
                mask_token(segment)
            } else {
                segment.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Display wrapper that applies [`redact`] when formatted. For free text.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

/// Display wrapper that applies [`mask_token`] when formatted.
pub struct MaskedToken<'a>(pub &'a str);

impl fmt::Display for MaskedToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&mask_token(self.0))
    }
}

impl fmt::Debug for MaskedToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&mask_token(self.0))
    }
}
