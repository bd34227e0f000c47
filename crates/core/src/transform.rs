//! Attribute rewriting from SVG markup names to React/JSX prop names.

use crate::naming::camel_case;
use crate::tree::{Element, Node, Properties};
use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::collections::HashMap;

/// Prefix of attributes passed through untouched.
pub const DATA_ATTRIBUTE_PREFIX: &str = "data-";

/// Attribute passed through untouched (its value is already a style map).
pub const STYLE_ATTRIBUTE: &str = "style";

/// Fixed attribute renames, checked before the generic camel-fold.
///
/// The identity entries keep SVG's mixed-case attributes intact; folding would
/// lower-case them (`viewBox` → `viewbox`).
const ATTRIBUTE_RULES: &[(&str, &str)] = &[
    ("class", "className"),
    ("for", "htmlFor"),
    ("tabindex", "tabIndex"),
    ("xlink:href", "xlinkHref"),
    ("xlink:title", "xlinkTitle"),
    ("xlink:role", "xlinkRole"),
    ("xlink:show", "xlinkShow"),
    ("xlink:actuate", "xlinkActuate"),
    ("xlink:arcrole", "xlinkArcrole"),
    ("xlink:type", "xlinkType"),
    ("xml:base", "xmlBase"),
    ("xml:lang", "xmlLang"),
    ("xml:space", "xmlSpace"),
    ("xmlns:xlink", "xmlnsXlink"),
    ("allowReorder", "allowReorder"),
    ("attributeName", "attributeName"),
    ("attributeType", "attributeType"),
    ("autoReverse", "autoReverse"),
    ("baseFrequency", "baseFrequency"),
    ("calcMode", "calcMode"),
    ("clipPathUnits", "clipPathUnits"),
    ("diffuseConstant", "diffuseConstant"),
    ("edgeMode", "edgeMode"),
    ("filterUnits", "filterUnits"),
    ("gradientTransform", "gradientTransform"),
    ("gradientUnits", "gradientUnits"),
    ("kernelMatrix", "kernelMatrix"),
    ("kernelUnitLength", "kernelUnitLength"),
    ("keyPoints", "keyPoints"),
    ("keySplines", "keySplines"),
    ("keyTimes", "keyTimes"),
    ("lengthAdjust", "lengthAdjust"),
    ("limitingConeAngle", "limitingConeAngle"),
    ("markerHeight", "markerHeight"),
    ("markerUnits", "markerUnits"),
    ("markerWidth", "markerWidth"),
    ("maskContentUnits", "maskContentUnits"),
    ("maskUnits", "maskUnits"),
    ("numOctaves", "numOctaves"),
    ("pathLength", "pathLength"),
    ("patternContentUnits", "patternContentUnits"),
    ("patternTransform", "patternTransform"),
    ("patternUnits", "patternUnits"),
    ("pointsAtX", "pointsAtX"),
    ("pointsAtY", "pointsAtY"),
    ("pointsAtZ", "pointsAtZ"),
    ("preserveAlpha", "preserveAlpha"),
    ("preserveAspectRatio", "preserveAspectRatio"),
    ("primitiveUnits", "primitiveUnits"),
    ("refX", "refX"),
    ("refY", "refY"),
    ("repeatCount", "repeatCount"),
    ("repeatDur", "repeatDur"),
    ("specularConstant", "specularConstant"),
    ("specularExponent", "specularExponent"),
    ("spreadMethod", "spreadMethod"),
    ("startOffset", "startOffset"),
    ("stdDeviation", "stdDeviation"),
    ("stitchTiles", "stitchTiles"),
    ("surfaceScale", "surfaceScale"),
    ("systemLanguage", "systemLanguage"),
    ("tableValues", "tableValues"),
    ("targetX", "targetX"),
    ("targetY", "targetY"),
    ("textLength", "textLength"),
    ("viewBox", "viewBox"),
    ("xChannelSelector", "xChannelSelector"),
    ("yChannelSelector", "yChannelSelector"),
    ("zoomAndPan", "zoomAndPan"),
];

static RENAME_TABLE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| ATTRIBUTE_RULES.iter().copied().collect());

/// Maps a source attribute name to its JSX prop name.
///
/// `data-*` and `style` are kept; names in the rename table use the table's
/// target; everything else is camel-folded.
///
/// # Examples
///
/// ```
/// use svgx_core::transform::attribute_name;
///
/// assert_eq!(attribute_name("class"), "className");
/// assert_eq!(attribute_name("stroke-width"), "strokeWidth");
/// assert_eq!(attribute_name("data-foo"), "data-foo");
/// assert_eq!(attribute_name("style"), "style");
/// ```
pub fn attribute_name(name: &str) -> Cow<'_, str> {
    if name.starts_with(DATA_ATTRIBUTE_PREFIX) || name == STYLE_ATTRIBUTE {
        return Cow::Borrowed(name);
    }
    if let Some(target) = RENAME_TABLE.get(name) {
        return Cow::Borrowed(*target);
    }
    Cow::Owned(camel_case(name))
}

/// Rewrites a node and its subtree into JSX attribute names.
///
/// Produces a new tree of the same shape: tag names, text, values and child
/// order are untouched.
pub fn transform(node: &Node) -> Node {
    match node {
        Node::Text(text) => Node::Text(text.clone()),
        Node::Element(element) => Node::Element(transform_element(element)),
    }
}

/// Rewrites a sequence of nodes, preserving order.
pub fn transform_nodes(nodes: &[Node]) -> Vec<Node> {
    nodes.iter().map(transform).collect()
}

fn transform_element(element: &Element) -> Element {
    let children = transform_nodes(&element.children);

    // Folded names can collide; the first position wins, the last value wins.
    let mut properties = Properties::with_capacity(element.properties.len());
    for (name, value) in &element.properties {
        properties.insert(attribute_name(name).into_owned(), value.clone());
    }

    Element {
        tag_name: element.tag_name.clone(),
        properties,
        children,
    }
}
