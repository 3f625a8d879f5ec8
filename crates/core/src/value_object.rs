//! Value object trait: equality by value, not identity.
//!
//! A barcode or a movement kind is defined entirely by its value; two barcodes
//! holding the same digits are the same barcode.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Barcode(String);
///
/// impl ValueObject for Barcode {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
