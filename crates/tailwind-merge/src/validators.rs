use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static ARBITRARY_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(.+)\]$").expect("arbitrary value pattern"));

static FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+/\d+$").expect("fraction pattern"));

static LENGTH_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+(%|px|r?em|[sdl]?v[hwib]|vmin|vmax|pt|pc|in|cm|mm|cap|ch|ex|r?lh)")
        .expect("length unit pattern")
});

/// Keyword values that Tailwind accepts wherever a length is expected.
const STRING_LENGTHS: &[&str] = &["px", "full", "screen"];

/// A named predicate over the unconsumed suffix of a class name.
///
/// Validators are the only way a class shape accepts open-ended values such
/// as `p-4`, `w-1/2` or `text-[#bada55]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validator {
    /// Accepts any non-empty value.
    Any,
    /// Accepts an integer or an arbitrary value.
    Integer,
    /// Accepts a number, a fraction, a length keyword or an arbitrary length.
    Length,
    /// Accepts only an explicit `[...]` value.
    ArbitraryValue,
}

impl Validator {
    pub fn accepts(self, value: &str) -> bool {
        match self {
            Validator::Any => !value.is_empty(),
            Validator::Integer => is_arbitrary_value(value) || value.parse::<i64>().is_ok(),
            Validator::Length => is_length(value),
            Validator::ArbitraryValue => is_arbitrary_value(value),
        }
    }
}

fn arbitrary_value(value: &str) -> Option<&str> {
    ARBITRARY_VALUE
        .captures(value)
        .and_then(|captures| captures.get(1))
        .map(|inner| inner.as_str())
}

fn is_arbitrary_value(value: &str) -> bool {
    arbitrary_value(value).is_some()
}

fn is_length(value: &str) -> bool {
    if let Some(inner) = arbitrary_value(value) {
        return inner.starts_with("length:") || LENGTH_UNIT.is_match(inner);
    }
    value.parse::<f64>().is_ok_and(f64::is_finite)
        || STRING_LENGTHS.contains(&value)
        || FRACTION.is_match(value)
}
