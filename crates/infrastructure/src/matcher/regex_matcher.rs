//! Regex pattern list with lock-free reads and atomic hot swap.
//!
//! The compiled list lives behind an `ArcSwap`: readers load a snapshot
//! pointer per evaluation, the single admin writer compiles a whole
//! replacement list off to the side and swaps it in one store. A reader
//! that raced the swap finishes against the list it loaded.

use arc_swap::ArcSwap;
use regex::Regex;
use std::sync::Arc;
use switchback_application::ports::PatternMatcher;
use switchback_domain::DomainError;

#[derive(Debug)]
struct CompiledPattern {
    regex: Regex,
    source: String,
}

#[derive(Debug)]
pub struct RegexMatcher {
    patterns: ArcSwap<Vec<CompiledPattern>>,
}

impl RegexMatcher {
    /// Compile the pattern list. Entries are whitespace-trimmed and blank
    /// entries dropped; the first compile failure rejects the whole list.
    pub fn new(patterns: &[String]) -> Result<Self, DomainError> {
        Ok(Self {
            patterns: ArcSwap::from_pointee(compile_list(patterns)?),
        })
    }
}

fn compile_list(patterns: &[String]) -> Result<Vec<CompiledPattern>, DomainError> {
    let mut compiled = Vec::with_capacity(patterns.len());

    for pattern in patterns {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            continue;
        }

        let regex = Regex::new(pattern).map_err(|e| DomainError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        compiled.push(CompiledPattern {
            regex,
            source: pattern.to_string(),
        });
    }

    Ok(compiled)
}

impl PatternMatcher for RegexMatcher {
    fn is_match(&self, name: &str) -> bool {
        let name = name.trim_end_matches('.');
        self.patterns.load().iter().any(|p| p.regex.is_match(name))
    }

    fn matching_pattern(&self, name: &str) -> Option<String> {
        let name = name.trim_end_matches('.');
        self.patterns
            .load()
            .iter()
            .find(|p| p.regex.is_match(name))
            .map(|p| p.source.clone())
    }

    fn patterns(&self) -> Vec<String> {
        self.patterns
            .load()
            .iter()
            .map(|p| p.source.clone())
            .collect()
    }

    fn update(&self, patterns: &[String]) -> Result<(), DomainError> {
        let compiled = compile_list(patterns)?;
        self.patterns.store(Arc::new(compiled));
        Ok(())
    }
}

/// A matcher that never matches; stands in for a disabled slot.
pub struct NoopMatcher;

impl PatternMatcher for NoopMatcher {
    fn is_match(&self, _name: &str) -> bool {
        false
    }

    fn matching_pattern(&self, _name: &str) -> Option<String> {
        None
    }

    fn patterns(&self) -> Vec<String> {
        Vec::new()
    }

    fn update(&self, _patterns: &[String]) -> Result<(), DomainError> {
        Ok(())
    }
}
