use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Field used when a sort expression fails validation.
pub const DEFAULT_SORT_FIELD: &str = "_id";

/// Sort direction of a single key.
#[cfg_attr(feature = "with-utoipa", derive(utoipa::ToSchema))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    /// Numeric direction used by document-store sort documents: ascending is
    /// `+1`, descending is `-1`.
    #[must_use]
    pub fn sign(self) -> i32 {
        match self {
            SortDir::Asc => 1,
            SortDir::Desc => -1,
        }
    }

    /// Lenient direction mapping: `asc` in any case sorts ascending, every
    /// other token sorts descending (fail-to-descending policy).
    fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case("asc") {
            SortDir::Asc
        } else {
            SortDir::Desc
        }
    }
}

impl fmt::Display for SortDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDir::Asc => write!(f, "asc"),
            SortDir::Desc => write!(f, "desc"),
        }
    }
}

/// One parsed sort directive.
#[cfg_attr(feature = "with-utoipa", derive(utoipa::ToSchema))]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: String,
    pub dir: SortDir,
}

impl SortKey {
    pub fn new(field: impl Into<String>, dir: SortDir) -> Self {
        Self {
            field: field.into(),
            dir,
        }
    }

    fn default_key() -> Self {
        Self::new(DEFAULT_SORT_FIELD, SortDir::Desc)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.dir)
    }
}

/// Strict sort-expression parse failure. The lenient [`parse_sort`] never
/// reports these; it falls back to the default key instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortParseError {
    #[error("sort expression contains characters outside [A-Za-z0-9,;_]")]
    InvalidCharacters,

    #[error("sort clause has no direction: {0}")]
    MissingDirection(String),

    #[error("empty sort field in clause: {0}")]
    EmptyField(String),

    #[error("unknown sort direction: {0}")]
    UnknownDirection(String),
}

// End-anchored only: an invalid prefix slips through as long as the
// expression ends with a valid run. Kept as-is; parse_sort_strict checks the
// whole string.
fn charset_gate() -> &'static Regex {
    static GATE: OnceLock<Regex> = OnceLock::new();
    GATE.get_or_init(|| Regex::new(r"[A-Za-z0-9,;_]+$").expect("sort charset pattern"))
}

fn charset_full() -> &'static Regex {
    static FULL: OnceLock<Regex> = OnceLock::new();
    FULL.get_or_init(|| Regex::new(r"^[A-Za-z0-9,;_]+$").expect("sort charset pattern"))
}

/// Parse a `field,dir;field,dir` sort expression into ordered sort keys.
///
/// Clauses without a comma are silently dropped. The direction comes from
/// the second comma-separated segment only (further segments are ignored):
/// `asc` in any case sorts ascending, any other token sorts descending. An
/// empty expression, or one whose trailing characters fall outside
/// `[A-Za-z0-9,;_]`, yields the single default key `_id` descending.
///
/// Clause order is preserved and duplicate fields are kept. Use
/// [`parse_sort_strict`] when malformed input should be reported instead of
/// normalized away.
#[must_use]
pub fn parse_sort(expr: &str) -> Vec<SortKey> {
    if expr.is_empty() || !charset_gate().is_match(expr) {
        tracing::debug!(expr, "sort expression rejected, using default sort");
        return vec![SortKey::default_key()];
    }

    let mut keys = Vec::new();
    for clause in expr.split(';') {
        let mut segments = clause.split(',');
        if let (Some(field), Some(token)) = (segments.next(), segments.next()) {
            keys.push(SortKey::new(field, SortDir::from_token(token)));
        }
    }
    keys
}

/// Strict variant of [`parse_sort`]: the whole expression must match
/// `[A-Za-z0-9,;_]+`, every clause must carry a direction, and the direction
/// must be `asc` or `desc` (case-insensitive).
pub fn parse_sort_strict(expr: &str) -> Result<Vec<SortKey>, SortParseError> {
    if !charset_full().is_match(expr) {
        return Err(SortParseError::InvalidCharacters);
    }

    let mut keys = Vec::new();
    for clause in expr.split(';') {
        let Some((field, token)) = clause.split_once(',') else {
            return Err(SortParseError::MissingDirection(clause.to_string()));
        };
        if field.is_empty() {
            return Err(SortParseError::EmptyField(clause.to_string()));
        }
        let dir = if token.eq_ignore_ascii_case("asc") {
            SortDir::Asc
        } else if token.eq_ignore_ascii_case("desc") {
            SortDir::Desc
        } else {
            return Err(SortParseError::UnknownDirection(token.to_string()));
        };
        keys.push(SortKey::new(field, dir));
    }
    Ok(keys)
}
