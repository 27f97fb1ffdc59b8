/// Prefix that marks a demo-issued user token.
pub const TOKEN_PREFIX: &str = "user_";

/// Extracts the token from an `Authorization: Bearer <token>` header value.
///
/// Defensive: absent or malformed headers yield `None`, never an error.
/// The value must split into exactly two whitespace-separated parts with a
/// `bearer` scheme (ASCII case-insensitive).
pub fn extract_bearer_token(header: Option<&str>) -> Option<&str> {
    let header = header?;

    let mut parts = header.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    Some(token)
}

/// Demo auth rule: valid tokens carry the [`TOKEN_PREFIX`].
///
/// Absent tokens are invalid, not a panic.
pub fn validate_token(token: Option<&str>) -> bool {
    token
        .map(|value| value.starts_with(TOKEN_PREFIX))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_token_from_well_formed_header() {
        assert_eq!(extract_bearer_token(Some("Bearer user_123")), Some("user_123"));
    }

    #[test]
    fn scheme_is_case_insensitive() {
        assert_eq!(extract_bearer_token(Some("bearer user_123")), Some("user_123"));
        assert_eq!(extract_bearer_token(Some("BEARER user_123")), Some("user_123"));
    }

    #[test]
    fn missing_header_yields_none() {
        assert_eq!(extract_bearer_token(None), None);
    }

    #[test]
    fn empty_header_yields_none() {
        assert_eq!(extract_bearer_token(Some("")), None);
        assert_eq!(extract_bearer_token(Some("   ")), None);
    }

    #[test]
    fn scheme_without_token_yields_none() {
        assert_eq!(extract_bearer_token(Some("Bearer")), None);
        assert_eq!(extract_bearer_token(Some("Bearer   ")), None);
    }

    #[test]
    fn extra_parts_yield_none() {
        assert_eq!(extract_bearer_token(Some("Bearer user_123 extra")), None);
    }

    #[test]
    fn non_bearer_scheme_yields_none() {
        assert_eq!(extract_bearer_token(Some("Basic user_123")), None);
        assert_eq!(extract_bearer_token(Some("Token user_123")), None);
    }

    #[test]
    fn repeated_whitespace_is_tolerated() {
        assert_eq!(extract_bearer_token(Some("Bearer   user_123")), Some("user_123"));
    }

    #[test]
    fn prefixed_tokens_validate() {
        assert!(validate_token(Some("user_123")));
        assert!(validate_token(Some("user_")));
    }

    #[test]
    fn unprefixed_tokens_are_rejected() {
        assert!(!validate_token(Some("admin_123")));
        assert!(!validate_token(Some("usr_123")));
        assert!(!validate_token(Some("")));
    }

    #[test]
    fn absent_token_is_rejected_without_panicking() {
        assert!(!validate_token(None));
    }
}
