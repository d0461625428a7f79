//! # mibgen models
//!
//! Runtime model types for SNMP bindings generated by mibgen.
//!
//! This crate provides:
//! - Node types (`ScalarNode`, `ColumnNode`, `TableNode`, `RowNode`, `NotificationNode`)
//! - Syntax descriptors (`Type`, `Enum`, `Range`) and the `BaseType` classification
//! - Small lookup helpers over the generated static data
//!
//! Generated code imports everything it needs through [`prelude`].

pub mod node;
pub mod prelude;
pub mod types;

pub use node::{BaseNode, ColumnNode, NotificationNode, RowNode, ScalarNode, TableNode};
pub use types::{BaseType, Enum, EnumValue, Range, Type};
