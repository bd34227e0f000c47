//! Generates React component modules and re-export indexes for compiled icons.

use std::fmt::Write as FmtWrite;

/// Named icon sizes and their pixel dimensions, in the order they are declared.
pub const SIZES: &[(&str, u32)] = &[("xs", 12), ("s", 16), ("m", 20), ("l", 24), ("xl", 32)];

/// Size used when the component receives no `size` prop.
pub const DEFAULT_SIZE: &str = "m";

/// Color used when the component receives no `color` prop.
pub const DEFAULT_COLOR: &str = "currentColor";

/// View box of the generated outer `<svg>`.
pub const DEFAULT_VIEW_BOX: &str = "0 0 24 24";

/// Line separator of the aggregate index.
pub const INDEX_LINE_SEPARATOR: &str = "\r\n";

const INDENT: &str = "    ";

/// Options for generating one component module.
#[derive(Debug, Clone, Copy)]
pub struct ComponentModuleOptions<'a> {
    /// Component identifier, also used as display name.
    pub name: &'a str,
    /// JSX fragment placed inside the outer `<svg>`.
    pub jsx: &'a str,
    /// View box of the outer `<svg>`.
    pub view_box: &'a str,
}

impl<'a> ComponentModuleOptions<'a> {
    /// Options with the default view box.
    pub fn new(name: &'a str, jsx: &'a str) -> Self {
        Self {
            name,
            jsx,
            view_box: DEFAULT_VIEW_BOX,
        }
    }
}

fn size_union() -> String {
    let mut union = SIZES
        .iter()
        .map(|(size, _)| format!("'{size}'"))
        .collect::<Vec<_>>()
        .join(" | ");
    union.push_str(" | number");
    union
}

fn size_table() -> String {
    let entries = SIZES
        .iter()
        .map(|(size, px)| format!("{size}: {px}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{ {entries} }}")
}

/// Emits the React import and the props interfaces.
fn emit_prelude(code: &mut String) {
    let _ = writeln!(code, "import React from 'react';");
    let _ = writeln!(code);
    let _ = writeln!(code, "interface Props {{");
    let _ = writeln!(code, "{INDENT}size?: {};", size_union());
    let _ = writeln!(code, "{INDENT}color?: string;");
    let _ = writeln!(code, "{INDENT}[key: string]: any;");
    let _ = writeln!(code, "}}");
    let _ = writeln!(code);
    let _ = writeln!(code, "interface HTMLAttributeProps {{");
    for (prop, ty) in [
        ("id", "string"),
        ("title", "string"),
        ("className", "string"),
        ("role", "string"),
        ("spellCheck", "boolean"),
        ("tabIndex", "number"),
    ] {
        let _ = writeln!(code, "{INDENT}{prop}?: {ty};");
    }
    let _ = writeln!(code, "}}");
    let _ = writeln!(code);
    let _ = writeln!(code, "const sizes = {};", size_table());
}

/// Emits the function component wrapping the fragment in a sized `<svg>`.
fn emit_component(code: &mut String, options: &ComponentModuleOptions<'_>) {
    let name = options.name;
    let _ = writeln!(
        code,
        "export const {name}: React.FC<HTMLAttributeProps & Props> = (props: Props): JSX.Element => {{"
    );
    let _ = writeln!(
        code,
        "{INDENT}const {{ color = '{DEFAULT_COLOR}', size = '{DEFAULT_SIZE}', ...attrs }} = props;"
    );
    let _ = writeln!(code, "{INDENT}const d = sizes[size] || size;");
    let _ = writeln!(code);
    let _ = writeln!(code, "{INDENT}return (");
    let _ = writeln!(
        code,
        "{INDENT}{INDENT}<svg xmlns='http://www.w3.org/2000/svg' viewBox='{}' width={{d}} height={{d}} fill={{color}} {{...attrs}}>",
        options.view_box
    );
    let _ = writeln!(code, "{INDENT}{INDENT}{INDENT}{}", options.jsx);
    let _ = writeln!(code, "{INDENT}{INDENT}</svg>");
    let _ = writeln!(code, "{INDENT})");
    let _ = writeln!(code, "}};");
}

/// Emits display name, default props and the default export.
fn emit_statics(code: &mut String, options: &ComponentModuleOptions<'_>) {
    let name = options.name;
    let _ = writeln!(code, "{name}.displayName = '{name}';");
    let _ = writeln!(code, "{name}.defaultProps = {{");
    let _ = writeln!(code, "{INDENT}size: '{DEFAULT_SIZE}',");
    let _ = writeln!(code, "{INDENT}color: '{DEFAULT_COLOR}',");
    let _ = writeln!(code, "}};");
    let _ = writeln!(code);
    let _ = writeln!(code, "export default {name};");
}

/// Generates the TSX module for one icon component.
///
/// The module exports the component both by name and as default. It accepts a
/// named size or a pixel number, a color override, and forwards any other
/// attributes to the outer `<svg>`.
pub fn generate_component_module(options: &ComponentModuleOptions<'_>) -> String {
    let mut code = String::with_capacity(1024 + options.jsx.len());
    emit_prelude(&mut code);
    emit_component(&mut code, options);
    let _ = writeln!(code);
    emit_statics(&mut code, options);
    code
}

/// Re-export statement for one component module.
///
/// # Examples
///
/// ```
/// use svgx_react::codegen::reexport_line;
///
/// assert_eq!(reexport_line("ArrowUp"), "export * from './ArrowUp';");
/// ```
pub fn reexport_line(name: &str) -> String {
    format!("export * from './{name}';")
}

/// Contents of the per-component `index.ts`.
pub fn module_index(name: &str) -> String {
    reexport_line(name)
}

/// Contents of the aggregate `index.ts`: one re-export per component, CRLF-joined.
pub fn package_index<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| reexport_line(name.as_ref()))
        .collect::<Vec<_>>()
        .join(INDEX_LINE_SEPARATOR)
}
