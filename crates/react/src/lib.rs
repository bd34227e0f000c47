#![deny(missing_docs)]
//! svgx React engine: component modules and re-export indexes.

/// Code generation for component modules and index files.
pub mod codegen;

pub use codegen::{
    ComponentModuleOptions, SIZES, generate_component_module, module_index, package_index,
    reexport_line,
};
