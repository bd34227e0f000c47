#![deny(missing_docs)]
//! svgx core: SVG markup tree, cleanup, JSX attribute rewriting and serialization.

/// Markup cleanup applied before parsing.
pub mod clean;
/// Single-asset markup pipeline.
pub mod compile;
/// Core error and location types.
pub mod error;
/// Component, attribute and style key naming rules.
pub mod naming;
/// SVG parsing into the markup tree.
pub mod parse;
/// JSX fragment serialization.
pub mod stringify;
/// Attribute rewriting into JSX prop names.
pub mod transform;
/// Markup tree types.
pub mod tree;

pub use clean::{Cleaner, Passthrough, SvgCleaner};
pub use compile::compile_markup;
pub use error::{SourceLocation, SvgxError};
pub use naming::{camel_case, component_name};
pub use parse::{parse, parse_style};
pub use stringify::{stringify, stringify_node};
pub use transform::{attribute_name, transform, transform_nodes};
pub use tree::{Document, Element, Node, PropValue, Properties, StyleMap, StyleValue};
