//! Dynamic values.
//!
//! Properties, option lists, old input and configuration all travel as JSON
//! values. `serde_json` is built with `preserve_order`, so object keys keep
//! their insertion order (option lists depend on it).

pub use serde_json::{Map, Value};

/// Loose conversions used when a dynamic value has to become markup or a flag.
pub trait ValueExt {
    /// Truthiness the way a template would judge it.
    ///
    /// - `Null`, `false`, `0`, `""`, `"0"`, empty arrays and objects are false
    /// - everything else is true
    fn is_truthy(&self) -> bool;

    /// Text form of a scalar. `Null` becomes `""`, `true` becomes `"1"`,
    /// `false` becomes `""`. Arrays and objects are JSON-encoded.
    fn to_text(&self) -> String;

    /// Like [`ValueExt::to_text`] but `None` for `Null`.
    fn as_text(&self) -> Option<String>;

    /// Numeric view, used for ordering.
    fn to_number(&self) -> Option<f64>;
}

impl ValueExt for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !(s.is_empty() || s == "0"),
            Value::Array(a) => !a.is_empty(),
            Value::Object(o) => !o.is_empty(),
        }
    }

    fn to_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(true) => "1".to_string(),
            Value::Bool(false) => String::new(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    fn as_text(&self) -> Option<String> {
        match self {
            Value::Null => None,
            other => Some(other.to_text()),
        }
    }

    fn to_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        assert!(!Value::Null.is_truthy());
        assert!(!json!(false).is_truthy());
        assert!(!json!(0).is_truthy());
        assert!(!json!("").is_truthy());
        assert!(!json!("0").is_truthy());
        assert!(!json!([]).is_truthy());
        assert!(json!("label").is_truthy());
        assert!(json!([1]).is_truthy());
        assert!(json!(true).is_truthy());
    }

    #[test]
    fn test_to_text() {
        assert_eq!(Value::Null.to_text(), "");
        assert_eq!(json!(true).to_text(), "1");
        assert_eq!(json!(42).to_text(), "42");
        assert_eq!(json!("abc").to_text(), "abc");
        assert_eq!(Value::Null.as_text(), None);
        assert_eq!(json!(7).as_text(), Some("7".to_string()));
    }

    #[test]
    fn test_to_number() {
        assert_eq!(json!(3).to_number(), Some(3.0));
        assert_eq!(json!(" 2.5 ").to_number(), Some(2.5));
        assert_eq!(json!("x").to_number(), None);
        assert_eq!(json!(null).to_number(), None);
    }
}
