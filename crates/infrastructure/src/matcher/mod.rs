mod regex_matcher;

pub use regex_matcher::{NoopMatcher, RegexMatcher};
