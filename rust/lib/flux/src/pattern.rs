//! Path pattern matching for subscriptions and request routes.
//!
//! - `a/b` matches only `a/b`
//! - `+` matches exactly one level
//! - `#` matches zero or more remaining levels and must be the last segment

/// Returns true if `path` matches `pattern`.
pub fn matches(pattern: &str, path: &str) -> bool {
    let mut pat = pattern.split('/');
    let mut segs = path.split('/');

    loop {
        match (pat.next(), segs.next()) {
            (Some("#"), _) => return true,
            (Some("+"), Some(_)) => {}
            (Some(p), Some(s)) if p == s => {}
            (None, None) => return true,
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact() {
        assert!(matches("feed/state", "feed/state"));
        assert!(!matches("feed/state", "feed/other"));
        assert!(!matches("feed/state", "feed"));
        assert!(!matches("feed", "feed/state"));
    }

    #[test]
    fn single_level() {
        assert!(matches("app/+", "app/route"));
        assert!(matches("app/+", "app/theme"));
        assert!(!matches("app/+", "app/route/extra"));
        assert!(!matches("+/state", "feed"));
        assert!(matches("+/state", "feed/state"));
    }

    #[test]
    fn multi_level() {
        assert!(matches("#", "feed/state"));
        assert!(matches("feed/#", "feed/state"));
        assert!(matches("feed/#", "feed/a/b/c"));
        assert!(matches("feed/#", "feed"));
        assert!(!matches("feed/#", "app/route"));
    }
}
