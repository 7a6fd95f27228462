//! The single coercion point for scalar values entering the graph.

use oxrdf::vocab::xsd;
use oxrdf::{Literal, NamedNodeRef};

pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";

/// A scalar on its way into the graph.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Null,
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Str(v.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Coerce a scalar: explicit datatype if given, else
/// boolean > integer > float > dateTime > string.
///
/// Nulls and empty strings produce no literal at all.
pub fn coerce(value: Value, datatype: Option<NamedNodeRef<'static>>) -> Option<Literal> {
    let natural = match &value {
        Value::Null => return None,
        Value::Str(s) if s.is_empty() => return None,
        Value::Bool(_) => xsd::BOOLEAN,
        Value::Int(_) => xsd::INTEGER,
        Value::Float(_) => xsd::FLOAT,
        Value::Str(s) if s.ends_with('Z') && s.contains('T') => xsd::DATE_TIME,
        Value::Str(_) => xsd::STRING,
    };
    let datatype = datatype.unwrap_or(natural);
    let lexical = match value {
        Value::Int(i) if datatype == xsd::FLOAT => float_lexical(i as f64),
        Value::Float(f) if datatype == xsd::INTEGER && f.fract() == 0.0 && f.is_finite() => {
            format!("{}", f as i64)
        }
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => float_lexical(f),
        Value::Str(s) => s,
        Value::Null => return None,
    };
    Some(Literal::new_typed_literal(lexical, datatype))
}

/// `105.0`, `0.25`, `INF`, `NaN`
fn float_lexical(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        if f > 0.0 { "INF" } else { "-INF" }.to_string()
    } else {
        format!("{:?}", f)
    }
}
