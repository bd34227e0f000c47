//! Serializes a markup tree into an embeddable JSX fragment.

use crate::naming::is_js_identifier;
use crate::tree::{Node, PropValue, Properties, StyleMap, StyleValue};

/// Serializes a sequence of nodes, in order.
pub fn stringify(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node);
    }
    out
}

/// Serializes a single node.
///
/// Elements always get an explicit closing tag, even without children.
pub fn stringify_node(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

/// Serializes style declarations as the body of a JS object literal.
///
/// Every entry is followed by `, `. Keys that are not plain identifiers are
/// quoted.
pub fn stringify_style(style: &StyleMap) -> String {
    let mut out = String::new();
    for (key, value) in style {
        if is_js_identifier(key) {
            out.push_str(key);
        } else {
            push_quoted(&mut out, key);
        }
        out.push_str(": ");
        match value {
            StyleValue::Text(text) => push_quoted(&mut out, text),
            StyleValue::Number(number) => out.push_str(number),
        }
        out.push_str(", ");
    }
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(text) => out.push_str(text),
        Node::Element(element) => {
            out.push('<');
            out.push_str(&element.tag_name);
            write_properties(out, &element.properties);
            out.push('>');
            for child in &element.children {
                write_node(out, child);
            }
            out.push_str("</");
            out.push_str(&element.tag_name);
            out.push('>');
        }
    }
}

/// Writes ` name="value"` pairs in map order; style maps become a JSX object
/// expression.
fn write_properties(out: &mut String, properties: &Properties) {
    for (name, value) in properties {
        out.push(' ');
        out.push_str(name);
        match value {
            PropValue::Text(text) => {
                out.push_str("=\"");
                out.push_str(text);
                out.push('"');
            }
            PropValue::Style(style) => {
                out.push_str("={{ ");
                out.push_str(&stringify_style(style));
                out.push_str(" }}");
            }
        }
    }
}

fn push_quoted(out: &mut String, value: &str) {
    out.push('"');
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;
    use crate::tree::Element;

    #[test]
    fn text_is_emitted_verbatim() {
        assert_eq!(stringify_node(&Node::Text("a &amp; b".into())), "a &amp; b");
    }

    #[test]
    fn empty_element_has_closing_tag() {
        let node: Node = Element::new("path").with_attr("d", "M0 0").into();
        insta::assert_snapshot!(stringify_node(&node), @r#"<path d="M0 0"></path>"#);
    }

    #[test]
    fn sequence_concatenates_in_order() {
        let nodes: Vec<Node> = vec![
            Element::new("path").into(),
            "\n".into(),
            Element::new("circle").with_attr("r", "2").into(),
        ];
        assert_eq!(stringify(&nodes), "<path></path>\n<circle r=\"2\"></circle>");
    }

    #[test]
    fn nested_children_keep_order() {
        let node: Node = Element::new("g")
            .with_child(Element::new("rect"))
            .with_child("t")
            .with_child(Element::new("circle"))
            .into();
        insta::assert_snapshot!(stringify_node(&node), @"<g><rect></rect>t<circle></circle></g>");
    }

    #[test]
    fn style_map_becomes_object_expression() {
        let doc = parse(r#"<path style="fill: red; stroke-width: 2"/>"#).unwrap();
        insta::assert_snapshot!(
            stringify(&doc.children),
            @r#"<path style={{ fill: "red", strokeWidth: 2,  }}></path>"#
        );
    }

    #[test]
    fn style_quotes_non_identifier_keys_and_escapes_values() {
        let style = crate::parse::parse_style(r#"--brand: #f00; font-family: "Inter""#);
        assert_eq!(
            stringify_style(&style),
            r##""--brand": "#f00", fontFamily: "\"Inter\"", "##
        );
    }

    #[test]
    fn style_values_with_semicolons_survive_serialization() {
        let doc = parse(
            r#"<path style="fill:url(&quot;data:image/png;base64,AA&quot;);opacity:08"/>"#,
        )
        .unwrap();
        assert_eq!(
            stringify(&doc.children),
            r#"<path style={{ fill: "url(\"data:image/png;base64,AA\")", opacity: "08",  }}></path>"#
        );
    }

    #[test]
    fn attribute_values_are_not_escaped() {
        let node: Node = Element::new("a").with_attr("href", "?a=1&amp;b=2").into();
        assert_eq!(stringify_node(&node), r#"<a href="?a=1&amp;b=2"></a>"#);
    }

    #[test]
    fn roundtrip_preserves_structure() {
        let input = r#"<g fill="none" stroke-width="2"><path d="M1 2L3 4"></path><circle cx="12" cy="12" r="3"></circle></g>"#;
        let doc = parse(input).unwrap();
        assert_eq!(stringify(&doc.children), input);
        assert_eq!(parse(&stringify(&doc.children)).unwrap(), doc);
    }
}
