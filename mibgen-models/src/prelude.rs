//! Prelude module imported by generated bindings.
//!
//! ```ignore
//! use mibgen_models::prelude::*;
//! ```

pub use crate::node::{BaseNode, ColumnNode, NotificationNode, RowNode, ScalarNode, TableNode};
pub use crate::types::{BaseType, Enum, EnumValue, Range, Type};
