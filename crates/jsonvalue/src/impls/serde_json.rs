use serde_json::{Map, Value};

use crate::{ConversionError, JsonValue, Number};

impl From<&serde_json::Number> for Number {
    fn from(value: &serde_json::Number) -> Self {
        if let Some(i) = value.as_i64() {
            Number::Integer(i)
        } else if let Some(u) = value.as_u64() {
            Number::from_decoded_u64(u)
        } else if let Some(f) = value.as_f64() {
            Number::FloatingPoint(f)
        } else {
            // Only reachable with `arbitrary_precision`, for literals beyond the `f64` range
            Number::FloatingPoint(parse_float(&value.to_string()))
        }
    }
}

/// Out-of-range literals saturate to an infinity, which equals no finite number.
fn parse_float(literal: &str) -> f64 {
    literal.parse().unwrap_or(f64::NAN)
}

impl TryFrom<Number> for serde_json::Number {
    type Error = ConversionError;

    fn try_from(value: Number) -> Result<Self, Self::Error> {
        match value {
            Number::Integer(i) => Ok(i.into()),
            Number::UnsignedInteger(u) => Ok(u.into()),
            Number::FloatingPoint(f) => {
                serde_json::Number::from_f64(f).ok_or(ConversionError::NonFiniteNumber(f))
            }
        }
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(b),
            Value::Number(num) => JsonValue::Number(Number::from(&num)),
            Value::String(s) => JsonValue::String(s.into()),
            Value::Array(old) => {
                let new: Vec<JsonValue> = old.into_iter().map(JsonValue::from).collect();
                JsonValue::Array(new.into_boxed_slice())
            }
            Value::Object(old) => JsonValue::Object(Box::new(
                old.into_iter()
                    .map(|(k, v)| (k.into(), JsonValue::from(v)))
                    .collect(),
            )),
        }
    }
}

/// Absent object entries are omitted and absent array items become `null`.
impl TryFrom<&JsonValue> for Value {
    type Error = ConversionError;

    fn try_from(value: &JsonValue) -> Result<Self, Self::Error> {
        match value.core() {
            Some(JsonValue::Null) => Ok(Value::Null),
            Some(JsonValue::Bool(b)) => Ok(Value::Bool(*b)),
            Some(JsonValue::Number(num)) => Ok(Value::Number((*num).try_into()?)),
            Some(JsonValue::String(s)) => Ok(Value::String(s.as_str().to_owned())),
            Some(JsonValue::Array(items)) => {
                let mut new = Vec::with_capacity(items.len());
                for item in items.iter() {
                    if item.is_absent() {
                        new.push(Value::Null);
                    } else {
                        new.push(Value::try_from(item)?);
                    }
                }
                Ok(Value::Array(new))
            }
            Some(JsonValue::Object(map)) => {
                let mut new = Map::new();
                for (key, value) in map.iter() {
                    if value.is_absent() {
                        continue;
                    }
                    new.insert(key.as_str().to_owned(), Value::try_from(value)?);
                }
                Ok(Value::Object(new))
            }
            Some(JsonValue::IfPresent(_)) | None => Err(ConversionError::Absent),
        }
    }
}

impl TryFrom<JsonValue> for Value {
    type Error = ConversionError;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        Value::try_from(&value)
    }
}

fn eq(lhs: &Value, rhs: &JsonValue) -> bool {
    let Some(rhs) = rhs.core() else {
        return false;
    };
    match (lhs, rhs) {
        (Value::Null, JsonValue::Null) => true,
        (Value::Bool(l), JsonValue::Bool(r)) => l == r,
        (Value::Number(l), JsonValue::Number(r)) => Number::from(l) == *r,
        (Value::String(l), JsonValue::String(r)) => l.as_str() == r.as_str(),
        (Value::Array(l), JsonValue::Array(r)) => {
            if l.len() != r.len() {
                return false;
            }
            for (l, r) in l.iter().zip(r.iter()) {
                if !eq(l, r) {
                    return false;
                }
            }
            true
        }
        (Value::Object(l), JsonValue::Object(r)) => {
            if l.len() != r.len() {
                return false;
            }
            for (key, rv) in r.iter() {
                match l.get(key.as_str()) {
                    Some(lv) if eq(lv, rv) => continue,
                    _ => return false,
                }
            }
            true
        }
        _ => false,
    }
}

impl PartialEq<Value> for JsonValue {
    fn eq(&self, other: &Value) -> bool {
        eq(other, self)
    }
}

impl PartialEq<JsonValue> for Value {
    fn eq(&self, other: &JsonValue) -> bool {
        eq(self, other)
    }
}
