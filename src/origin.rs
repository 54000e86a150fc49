use regex_automata::meta::{BuildError, Regex};
use thiserror::Error;

const MAX_PATTERN_LENGTH: usize = 50_000;

/// Origin rule, resolved once at policy construction.
///
/// An empty or `"*"` exact value collapses to [`Origin::Any`] during
/// resolution, so request handling never re-probes the rule's shape.
#[derive(Clone, Debug, Default)]
pub enum Origin {
    /// Wildcard: every response advertises `*`.
    #[default]
    Any,
    /// Fixed value, emitted regardless of the request's `Origin` header.
    Exact(String),
    /// Ordered matcher list; the request origin is reflected back iff any
    /// element accepts it.
    List(Vec<OriginMatcher>),
}

/// Per-request outcome derived from an [`Origin`] rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    /// Emit the wildcard.
    Any,
    /// Emit this fixed value.
    Exact(String),
    /// Echo the request's own origin.
    Reflect,
    /// Withhold the allow-origin header.
    Disallow,
}

/// Error compiling an origin pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile origin pattern")]
    Build(#[source] Box<BuildError>),
    #[error("origin pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

/// A single element of an [`Origin::List`] rule.
#[derive(Clone, Debug)]
pub enum OriginMatcher {
    Exact(String),
    Pattern(Regex),
    /// Escape hatch: `true` accepts every origin, `false` accepts none.
    Bool(bool),
}

impl OriginMatcher {
    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn pattern(regex: Regex) -> Self {
        Self::Pattern(regex)
    }

    /// Compiles `pattern` verbatim, so its own anchoring governs matching.
    pub fn pattern_str(pattern: &str) -> Result<Self, PatternError> {
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        Regex::new(pattern)
            .map(Self::Pattern)
            .map_err(|err| PatternError::Build(Box::new(err)))
    }

    /// Exact comparisons are case-sensitive; patterns match wherever their
    /// own anchoring allows.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            OriginMatcher::Exact(value) => value == candidate,
            OriginMatcher::Pattern(regex) => regex.is_match(candidate),
            OriginMatcher::Bool(value) => *value,
        }
    }
}

impl From<String> for OriginMatcher {
    fn from(value: String) -> Self {
        OriginMatcher::Exact(value)
    }
}

impl From<&str> for OriginMatcher {
    fn from(value: &str) -> Self {
        OriginMatcher::Exact(value.to_owned())
    }
}

impl From<bool> for OriginMatcher {
    fn from(value: bool) -> Self {
        OriginMatcher::Bool(value)
    }
}

impl From<Regex> for OriginMatcher {
    fn from(value: Regex) -> Self {
        OriginMatcher::Pattern(value)
    }
}

impl Origin {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginMatcher>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn pattern(regex: Regex) -> Self {
        Self::List(vec![OriginMatcher::Pattern(regex)])
    }

    pub fn pattern_str(pattern: &str) -> Result<Self, PatternError> {
        OriginMatcher::pattern_str(pattern).map(|matcher| Self::List(vec![matcher]))
    }

    /// Maps a request origin to a decision. Pure and total: a rule that
    /// fails to match yields [`OriginDecision::Disallow`], never an error.
    pub fn decide(&self, request_origin: &str) -> OriginDecision {
        match self {
            Origin::Any => OriginDecision::Any,
            Origin::Exact(value) => OriginDecision::Exact(value.clone()),
            Origin::List(matchers) => {
                if matchers.iter().any(|matcher| matcher.matches(request_origin)) {
                    OriginDecision::Reflect
                } else {
                    OriginDecision::Disallow
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
