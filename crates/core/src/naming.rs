//! Bracket-style field names.
//!
//! A field's submitted name is built from a chain of base-name segments
//! followed by its own name: `["user", "1"]` + `email` gives
//! `user[1][email]`. The chain can also be suppressed entirely so that a
//! field keeps its bare name even inside a form with a base field name.

use formwork_types::{Value, ValueExt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameSegment {
    Name(String),
    /// Drops everything accumulated so far.
    Reset,
}

impl From<&str> for NameSegment {
    fn from(s: &str) -> Self {
        NameSegment::Name(s.to_string())
    }
}

impl From<String> for NameSegment {
    fn from(s: String) -> Self {
        NameSegment::Name(s)
    }
}

impl From<usize> for NameSegment {
    fn from(n: usize) -> Self {
        NameSegment::Name(n.to_string())
    }
}

impl NameSegment {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(false) => Some(NameSegment::Reset),
            Value::Null => None,
            other => other.as_text().map(NameSegment::Name),
        }
    }

    fn to_value(&self) -> Value {
        match self {
            NameSegment::Name(name) => Value::from(name.as_str()),
            NameSegment::Reset => Value::Bool(false),
        }
    }
}

/// The `baseNames` property of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseNames {
    /// The field ignores all base names.
    Suppressed,
    Chain(Vec<NameSegment>),
}

impl Default for BaseNames {
    fn default() -> Self {
        BaseNames::Chain(Vec::new())
    }
}

impl BaseNames {
    /// `false` suppresses; an array is a segment chain; a scalar is a
    /// one-segment chain.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Bool(false) => BaseNames::Suppressed,
            Value::Array(items) => {
                BaseNames::Chain(items.iter().filter_map(NameSegment::from_value).collect())
            }
            other => BaseNames::Chain(NameSegment::from_value(other).into_iter().collect()),
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            BaseNames::Suppressed => Value::Bool(false),
            BaseNames::Chain(segments) => {
                Value::Array(segments.iter().map(NameSegment::to_value).collect())
            }
        }
    }

    pub fn is_suppressed(&self) -> bool {
        matches!(self, BaseNames::Suppressed)
    }

    /// Adds a segment at the outermost (`on_top`) or innermost position.
    /// Has no effect on a suppressed chain.
    pub fn push(&mut self, segment: NameSegment, on_top: bool) {
        if let BaseNames::Chain(segments) = self {
            if on_top {
                segments.insert(0, segment);
            } else {
                segments.push(segment);
            }
        }
    }
}

/// Composes the submitted name.
///
/// Segments apply in order: the first accumulated segment stays bare, every
/// later one is wrapped as `[segment]`, and [`NameSegment::Reset`] empties
/// the accumulator. `own` is appended the same way, and `multiple` adds a
/// trailing `[]`. Returns `None` when nothing was accumulated.
pub fn compute_name(own: Option<&str>, base: &BaseNames, multiple: bool) -> Option<String> {
    let chain: &[NameSegment] = match base {
        BaseNames::Suppressed => &[],
        BaseNames::Chain(segments) => segments,
    };

    let mut name: Option<String> = None;
    let own_segment = own.map(|s| NameSegment::Name(s.to_string()));
    for segment in chain.iter().chain(own_segment.iter()) {
        match segment {
            NameSegment::Reset => name = None,
            NameSegment::Name(part) if part.is_empty() => {}
            NameSegment::Name(part) => {
                name = Some(match name {
                    None => part.clone(),
                    Some(acc) => format!("{acc}[{part}]"),
                });
            }
        }
    }

    match name {
        Some(name) if multiple => Some(format!("{name}[]")),
        other => other,
    }
}

/// `user[1][email][]` → `user.1.email`.
pub fn dot_name(name: &str) -> String {
    name.replace("[]", "").replace('[', ".").replace(']', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn chain(value: Value) -> BaseNames {
        BaseNames::from_value(&value)
    }

    #[test]
    fn test_nested_name() {
        let base = chain(json!(["user", "1"]));
        assert_eq!(compute_name(Some("email"), &base, false).as_deref(), Some("user[1][email]"));
    }

    #[test]
    fn test_reset_drops_outer_segments() {
        let base = chain(json!(["user", false, "profile"]));
        assert_eq!(compute_name(Some("bio"), &base, false).as_deref(), Some("profile[bio]"));

        let base = chain(json!(["user", false]));
        assert_eq!(compute_name(Some("bio"), &base, false).as_deref(), Some("bio"));
    }

    #[test]
    fn test_multiple_appends_brackets() {
        let base = chain(json!(["filters"]));
        assert_eq!(compute_name(Some("tags"), &base, true).as_deref(), Some("filters[tags][]"));
        assert_eq!(compute_name(Some("tags"), &BaseNames::default(), true).as_deref(), Some("tags[]"));
    }

    #[test]
    fn test_suppressed_keeps_bare_name() {
        assert_eq!(
            compute_name(Some("_method"), &BaseNames::Suppressed, false).as_deref(),
            Some("_method")
        );
    }

    #[test]
    fn test_no_name() {
        assert_eq!(compute_name(None, &BaseNames::default(), true), None);
        assert_eq!(compute_name(Some(""), &BaseNames::default(), false), None);
    }

    #[test]
    fn test_dot_name() {
        assert_eq!(dot_name("user[1][email]"), "user.1.email");
        assert_eq!(dot_name("tags[]"), "tags");
        assert_eq!(dot_name("title"), "title");
    }

    #[test]
    fn test_push_on_top() {
        let mut base = chain(json!(["1"]));
        base.push("user".into(), true);
        base.push("address".into(), false);
        assert_eq!(base.to_value(), json!(["user", "1", "address"]));

        let mut suppressed = BaseNames::Suppressed;
        suppressed.push("user".into(), true);
        assert!(suppressed.is_suppressed());
    }
}
