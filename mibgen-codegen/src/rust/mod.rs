//! Rust code generation modules.

pub mod comment;
pub mod module;
pub mod naming;
pub mod nodes;
pub mod types;

pub use module::ModuleGenerator;
pub use nodes::{NodeClass, NodeGenerator, NodeIdentity};
pub use types::TypeGenerator;
