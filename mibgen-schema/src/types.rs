//! Schema type definitions.
//!
//! This module contains the owned, loader-side representation of a type
//! (syntax) as attached to scalar and column nodes.

use mibgen_models::BaseType;
use serde::{Deserialize, Serialize};

/// Type (syntax) definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Type {
    /// Type name.
    pub name: String,
    /// Base type classification.
    #[serde(default)]
    pub base_type: BaseType,
    /// Enumeration, if the type is enumerated.
    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enumeration: Option<Enum>,
    /// Range constraints in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ranges: Vec<Range>,
    /// DISPLAY-HINT format string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Units description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

impl Type {
    /// Creates a new type definition.
    #[must_use]
    pub fn new(name: impl Into<String>, base_type: BaseType) -> Self {
        Self {
            name: name.into(),
            base_type,
            enumeration: None,
            ranges: Vec::new(),
            format: None,
            units: None,
        }
    }

    /// Sets the enumeration.
    #[must_use]
    pub fn with_enum(mut self, enumeration: Enum) -> Self {
        self.enumeration = Some(enumeration);
        self
    }

    /// Appends a range constraint.
    #[must_use]
    pub fn with_range(mut self, range: Range) -> Self {
        self.ranges.push(range);
        self
    }

    /// Sets the format string.
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Sets the units string.
    #[must_use]
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    /// Returns the format string, treating an empty one as absent.
    #[must_use]
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref().filter(|f| !f.is_empty())
    }

    /// Returns the units string, treating an empty one as absent.
    #[must_use]
    pub fn units(&self) -> Option<&str> {
        self.units.as_deref().filter(|u| !u.is_empty())
    }
}

/// Enumeration definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enum {
    /// Base type of the enumeration.
    #[serde(default = "enum_base_type")]
    pub base_type: BaseType,
    /// Named numbers in source order.
    #[serde(default)]
    pub values: Vec<NamedNumber>,
}

fn enum_base_type() -> BaseType {
    BaseType::Enum
}

impl Enum {
    /// Creates an enumeration from `(value, name)` pairs.
    #[must_use]
    pub fn new<I, S>(base_type: BaseType, values: I) -> Self
    where
        I: IntoIterator<Item = (i64, S)>,
        S: Into<String>,
    {
        Self {
            base_type,
            values: values
                .into_iter()
                .map(|(value, name)| NamedNumber::new(value, name))
                .collect(),
        }
    }

    /// Returns the named numbers ordered by ascending value.
    #[must_use]
    pub fn sorted_values(&self) -> Vec<&NamedNumber> {
        let mut values: Vec<&NamedNumber> = self.values.iter().collect();
        values.sort_by_key(|entry| entry.value);
        values
    }
}

/// Named number of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedNumber {
    /// Integer value.
    pub value: i64,
    /// Symbolic name.
    pub name: String,
}

impl NamedNumber {
    /// Creates a new named number.
    #[must_use]
    pub fn new(value: i64, name: impl Into<String>) -> Self {
        Self {
            value,
            name: name.into(),
        }
    }
}

/// Range constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    /// Base type of the bounds.
    #[serde(default)]
    pub base_type: BaseType,
    /// Lower bound.
    pub min: i128,
    /// Upper bound.
    pub max: i128,
}

impl Range {
    /// Creates a new range.
    #[must_use]
    pub const fn new(base_type: BaseType, min: i128, max: i128) -> Self {
        Self {
            base_type,
            min,
            max,
        }
    }
}
