//! Default-global-access policy.

/// Whether a principal implicitly holds non-global access ("user",
/// "codeviewer" and friends) when no component context is given.
///
/// There is no concept of global users or global codeviewers. Someone is
/// considered a user when authentication is not forced, or when it is
/// forced and the principal is authenticated.
#[must_use]
pub fn default_global_access(force_authentication: bool, authenticated: bool) -> bool {
    !force_authentication || authenticated
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn open_instance_admits_everyone() {
        assert!(default_global_access(false, false));
        assert!(default_global_access(false, true));
    }

    #[test]
    fn forced_authentication_admits_only_authenticated_principals() {
        assert!(!default_global_access(true, false));
        assert!(default_global_access(true, true));
    }
}
