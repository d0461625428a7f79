//! Type definitions for managed-object syntax.
//!
//! This module provides the base type classification together with the
//! static `Type`, `Enum` and `Range` descriptors that generated bindings
//! reference from their scalar and column nodes.

/// Base type classification underlying every SMI type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaseType {
    /// Unknown or unresolved base type.
    #[default]
    Unknown,
    /// Signed 32-bit integer.
    Integer32,
    /// Octet sequence.
    OctetString,
    /// Object identifier.
    ObjectIdentifier,
    /// Unsigned 32-bit integer.
    Unsigned32,
    /// Signed 64-bit integer.
    Integer64,
    /// Unsigned 64-bit integer.
    Unsigned64,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
    /// 128-bit floating point.
    Float128,
    /// Enumerated integer.
    Enum,
    /// Named bit set.
    Bits,
    /// Pointer to another object.
    Pointer,
}

impl BaseType {
    /// Every base type, in declaration order.
    pub const ALL: [BaseType; 13] = [
        Self::Unknown,
        Self::Integer32,
        Self::OctetString,
        Self::ObjectIdentifier,
        Self::Unsigned32,
        Self::Integer64,
        Self::Unsigned64,
        Self::Float32,
        Self::Float64,
        Self::Float128,
        Self::Enum,
        Self::Bits,
        Self::Pointer,
    ];

    /// Returns the variant name, as written in generated code.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Integer32 => "Integer32",
            Self::OctetString => "OctetString",
            Self::ObjectIdentifier => "ObjectIdentifier",
            Self::Unsigned32 => "Unsigned32",
            Self::Integer64 => "Integer64",
            Self::Unsigned64 => "Unsigned64",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::Float128 => "Float128",
            Self::Enum => "Enum",
            Self::Bits => "Bits",
            Self::Pointer => "Pointer",
        }
    }

    /// Parses a base type from its variant name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|base| base.name() == name)
    }

    /// Returns true if values of this base type are integers.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::Integer32
                | Self::Unsigned32
                | Self::Integer64
                | Self::Unsigned64
                | Self::Enum
        )
    }
}

/// A single named number of an enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumValue {
    /// Integer value.
    pub value: i64,
    /// Symbolic name.
    pub name: &'static str,
}

/// Enumeration attached to a type.
///
/// Generated bindings always list `values` in ascending order of `value`,
/// which the lookup helpers rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Enum {
    /// Base type of the enumeration itself.
    pub base_type: BaseType,
    /// Named numbers, sorted by value.
    pub values: &'static [EnumValue],
}

impl Enum {
    /// Returns the name bound to `value`.
    #[must_use]
    pub fn name_of(&self, value: i64) -> Option<&'static str> {
        self.values
            .binary_search_by_key(&value, |entry| entry.value)
            .ok()
            .map(|idx| self.values[idx].name)
    }

    /// Returns the value bound to `name`.
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<i64> {
        self.values
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value)
    }
}

/// Inclusive value (or size) range constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    /// Base type the bounds are expressed in.
    pub base_type: BaseType,
    /// Lower bound.
    pub min: i128,
    /// Upper bound.
    pub max: i128,
}

impl Range {
    /// Returns true if `value` lies within the bounds.
    #[must_use]
    pub const fn contains(&self, value: i128) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Syntax of a scalar or column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Type {
    /// Base type classification.
    pub base_type: BaseType,
    /// Type name as declared in the schema.
    pub name: &'static str,
    /// Enumeration, if the type is enumerated.
    pub enumeration: Option<&'static Enum>,
    /// Range constraints, in declaration order.
    pub ranges: &'static [Range],
    /// DISPLAY-HINT format string.
    pub format: Option<&'static str>,
    /// Units description.
    pub units: Option<&'static str>,
}

impl Type {
    /// Base value used by generated literals for the fields they omit.
    pub const EMPTY: Type = Type {
        base_type: BaseType::Unknown,
        name: "",
        enumeration: None,
        ranges: &[],
        format: None,
        units: None,
    };

    /// Returns the enumeration name for `value`, if the type is enumerated.
    #[must_use]
    pub fn enum_name(&self, value: i64) -> Option<&'static str> {
        self.enumeration.and_then(|e| e.name_of(value))
    }

    /// Returns the enumeration value for `name`, if the type is enumerated.
    #[must_use]
    pub fn enum_value(&self, name: &str) -> Option<i64> {
        self.enumeration.and_then(|e| e.value_of(name))
    }

    /// Returns true if `value` satisfies the range constraints.
    ///
    /// A type without ranges accepts every value.
    #[must_use]
    pub fn in_range(&self, value: i128) -> bool {
        self.ranges.is_empty() || self.ranges.iter().any(|range| range.contains(value))
    }
}
