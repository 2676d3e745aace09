use compact_str::CompactString;

use super::{JsonValue, Number, Object};

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for JsonValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    JsonValue::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl From<Number> for JsonValue {
    fn from(value: Number) -> Self {
        JsonValue::Number(value)
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.into())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value.into())
    }
}

impl From<CompactString> for JsonValue {
    fn from(value: CompactString) -> Self {
        JsonValue::String(value)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(value: Vec<JsonValue>) -> Self {
        JsonValue::Array(value.into_boxed_slice())
    }
}

impl From<Object> for JsonValue {
    fn from(value: Object) -> Self {
        JsonValue::Object(Box::new(value))
    }
}

/// `None` is the JSON `null` literal. Use [`JsonValue::if_present`] for optional slots.
impl<T: Into<JsonValue>> From<Option<T>> for JsonValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(JsonValue::Null, Into::into)
    }
}

impl<T: Into<JsonValue>> FromIterator<T> for JsonValue {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        JsonValue::Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<CompactString>, V: Into<JsonValue>> FromIterator<(K, V)> for JsonValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        JsonValue::Object(Box::new(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        ))
    }
}
