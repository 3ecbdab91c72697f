//! String helpers.

/// Canonical form of an email address: trimmed and lowercased.
///
/// Applied at every entry point that receives an email (registration,
/// login, Google claims) so the "one account per email" invariant holds
/// regardless of how the client typed it.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}
