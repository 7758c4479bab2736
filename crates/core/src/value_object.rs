//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** domain values defined entirely by their
/// attributes: two instances with the same values are the same value. To
/// "modify" one, build a new one with the new values.
///
/// The trait requires:
/// - **Clone**: values are cheap to copy
/// - **PartialEq**: compared by value, never by identity
/// - **Debug**: loggable in tests and traces
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
