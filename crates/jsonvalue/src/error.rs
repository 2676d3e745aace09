use core::fmt;

/// Errors raised when converting a [`JsonValue`](crate::JsonValue) into a representation that
/// cannot express it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConversionError {
    /// NaN and infinities have no JSON representation.
    NonFiniteNumber(f64),
    /// The value is an absent `IfPresent` slot and there is no enclosing object to omit it from.
    Absent,
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::NonFiniteNumber(value) => {
                write!(f, "{value} is not a valid JSON number")
            }
            ConversionError::Absent => f.write_str("Absent value can not be represented"),
        }
    }
}

impl std::error::Error for ConversionError {}
