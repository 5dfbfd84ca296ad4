use serde_json::{Number, Value};

/// An integer field as rendered by the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnChainNumber {
    /// A JSON number.
    Bare(u128),
    /// A decimal string, the usual rendering of `u64` and wider.
    Text(u128),
    /// `{ "value": .. }` or `{ "fields": { "value": .. } }`, e.g. a `Balance<T>`.
    Wrapped(u128),
    /// Missing or any other shape.
    Unrecognized,
}

impl OnChainNumber {
    /// Classifies a field value.
    pub fn decode(field: Option<&Value>) -> Self {
        match field {
            Some(Value::Number(n)) => number_to_u128(n).map_or(Self::Unrecognized, Self::Bare),
            Some(Value::String(s)) => parse_text(s).map_or(Self::Unrecognized, Self::Text),
            Some(Value::Object(map)) => map
                .get("value")
                .filter(|v| !v.is_null())
                .or_else(|| map.get("fields").and_then(|f| f.get("value")))
                .and_then(scalar)
                .map_or(Self::Unrecognized, Self::Wrapped),
            _ => Self::Unrecognized,
        }
    }

    /// The decoded value; `Unrecognized` reads as zero.
    pub fn value(self) -> u128 {
        match self {
            Self::Bare(v) | Self::Text(v) | Self::Wrapped(v) => v,
            Self::Unrecognized => 0,
        }
    }

    pub fn is_recognized(self) -> bool {
        !matches!(self, Self::Unrecognized)
    }
}

fn scalar(value: &Value) -> Option<u128> {
    match value {
        Value::Number(n) => number_to_u128(n),
        Value::String(s) => parse_text(s),
        _ => None,
    }
}

fn number_to_u128(n: &Number) -> Option<u128> {
    if let Some(v) = n.as_u64() {
        return Some(u128::from(v));
    }
    // Integral floats, e.g. `7.0`.
    n.as_f64()
        .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0 && *f < u128::MAX as f64)
        .map(|f| f as u128)
}

fn parse_text(s: &str) -> Option<u128> {
    s.trim().parse().ok()
}
