use switchback_domain::DomainError;

/// An ordered list of compiled patterns matched against DNS names.
///
/// Readers may run concurrently with a single writer calling `update`;
/// they must never observe a partially swapped list.
pub trait PatternMatcher: Send + Sync {
    /// True if any pattern matches the (trailing-dot-stripped) name.
    fn is_match(&self, name: &str) -> bool;

    /// Source string of the first matching pattern, if any.
    fn matching_pattern(&self, name: &str) -> Option<String>;

    /// Snapshot of the configured pattern source strings.
    fn patterns(&self) -> Vec<String>;

    /// Replace the whole list atomically. If any entry fails to compile
    /// the live list is left untouched.
    fn update(&self, patterns: &[String]) -> Result<(), DomainError>;
}
