mod digest;
mod from;
mod number;

use std::hash::{Hash, Hasher};

use ahash::AHashMap;
use compact_str::CompactString;
use digest::UnorderedDigest;
pub use number::Number;

/// Key-value pairs of a JSON object.
pub type Object = AHashMap<CompactString, JsonValue>;

/// An immutable JSON value.
///
/// Equality and hashing are semantic rather than structural:
///
/// - numbers compare by mathematical value across `i64`, `u64` and `f64` (see [`Number`]);
/// - objects ignore insertion order, arrays do not;
/// - [`JsonValue::IfPresent`] layers are stripped before comparing, so any nesting depth of the
///   same content is equal, while an absent slot is distinct from [`JsonValue::Null`].
#[derive(Debug, Clone, Default)]
pub enum JsonValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(CompactString),
    Array(Box<[JsonValue]>),
    Object(Box<Object>),
    /// An optional slot: `None` is an absent field, `Some` a field that holds a value.
    IfPresent(Option<Box<JsonValue>>),
}

const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<JsonValue>();
};

// Hash discriminants of core values
const NULL: u8 = 0;
const BOOL: u8 = 1;
const NUMBER: u8 = 2;
const STRING: u8 = 3;
const ARRAY: u8 = 4;
const OBJECT: u8 = 5;
const ABSENT: u8 = 6;

impl JsonValue {
    /// Wrap an optional value into an [`JsonValue::IfPresent`] slot.
    #[must_use]
    pub fn if_present(value: Option<JsonValue>) -> Self {
        JsonValue::IfPresent(value.map(Box::new))
    }

    /// An absent slot, i.e. `IfPresent(None)`.
    #[must_use]
    pub const fn absent() -> Self {
        JsonValue::IfPresent(None)
    }

    /// Strip every `IfPresent` layer.
    ///
    /// Returns `None` if the slot is absent at any depth, and a value that is never
    /// `IfPresent` otherwise.
    #[must_use]
    pub fn core(&self) -> Option<&JsonValue> {
        let mut current = self;
        while let JsonValue::IfPresent(inner) = current {
            current = inner.as_deref()?;
        }
        Some(current)
    }

    #[must_use]
    pub fn is_absent(&self) -> bool {
        self.core().is_none()
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self.core(), Some(JsonValue::Null))
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self.core()? {
            JsonValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match self.core()? {
            JsonValue::Number(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self.core()? {
            JsonValue::String(value) => Some(value.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self.core()? {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self.core()? {
            JsonValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Look up `key` if this value is an object.
    ///
    /// The returned value is the stored one, `IfPresent` wrappers included.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.as_object()?.get(key)
    }
}

impl PartialEq for JsonValue {
    fn eq(&self, other: &Self) -> bool {
        match (self.core(), other.core()) {
            (Some(lhs), Some(rhs)) => eq_core(lhs, rhs),
            (None, None) => true,
            _ => false,
        }
    }
}

// Non-finite numbers aside, see `Number`.
impl Eq for JsonValue {}

fn eq_core(lhs: &JsonValue, rhs: &JsonValue) -> bool {
    match (lhs, rhs) {
        (JsonValue::Null, JsonValue::Null) => true,
        (JsonValue::Bool(l), JsonValue::Bool(r)) => l == r,
        (JsonValue::Number(l), JsonValue::Number(r)) => l == r,
        (JsonValue::String(l), JsonValue::String(r)) => l == r,
        (JsonValue::Array(l), JsonValue::Array(r)) => {
            if l.len() != r.len() {
                return false;
            }
            for (l, r) in l.iter().zip(r.iter()) {
                if l != r {
                    return false;
                }
            }
            true
        }
        (JsonValue::Object(l), JsonValue::Object(r)) => {
            if l.len() != r.len() {
                return false;
            }
            for (key, lv) in l.iter() {
                match r.get(key) {
                    Some(rv) if lv == rv => continue,
                    _ => return false,
                }
            }
            true
        }
        _ => false,
    }
}

impl Hash for JsonValue {
    fn hash<H: Hasher>(&self, h: &mut H) {
        match self.core() {
            Some(JsonValue::Null) => h.write_u8(NULL),
            Some(JsonValue::Bool(value)) => {
                h.write_u8(BOOL);
                value.hash(h);
            }
            Some(JsonValue::Number(value)) => {
                h.write_u8(NUMBER);
                value.hash(h);
            }
            Some(JsonValue::String(value)) => {
                h.write_u8(STRING);
                value.as_str().hash(h);
            }
            Some(JsonValue::Array(items)) => {
                h.write_u8(ARRAY);
                h.write_usize(items.len());
                for item in items.iter() {
                    item.hash(h);
                }
            }
            Some(JsonValue::Object(map)) => {
                h.write_u8(OBJECT);
                h.write_usize(map.len());
                let mut digest = UnorderedDigest::new();
                for (key, value) in map.iter() {
                    digest.add((key.as_str(), value));
                }
                h.write_u64(digest.finish());
            }
            // `core` never yields `IfPresent`
            None | Some(JsonValue::IfPresent(_)) => h.write_u8(ABSENT),
        }
    }
}
