//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new value; never mutate a stored instance in place. Containers that
/// hold value objects can therefore hand out clones freely: a clone shares no
/// state with the original.
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Portion {
///     label: String,
///     grams: f64,
/// }
///
/// impl ValueObject for Portion {}
///
/// let a = Portion { label: "flour".to_string(), grams: 250.0 };
/// let b = Portion { label: "flour".to_string(), grams: 250.0 };
/// assert_eq!(a, b);  // Equal by value, not identity
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
