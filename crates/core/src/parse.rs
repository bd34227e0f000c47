//! SVG markup parsing into a [`Document`] tree.

use crate::SvgxError;
use crate::naming::style_property_name;
use crate::tree::{Document, Element, Node, PropValue, StyleMap, StyleValue};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Parse SVG markup into a [`Document`].
///
/// Elements, text and CDATA become tree nodes; comments, processing
/// instructions, the XML declaration and doctype are skipped. Whitespace-only
/// text outside the outermost elements is dropped. The `style` attribute is
/// parsed into a [`StyleMap`]; every other attribute value is kept verbatim.
pub fn parse(input: &str) -> Result<Document, SvgxError> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<Element> = Vec::new();
    let mut document = Document::default();

    loop {
        let offset = reader.buffer_position() as usize;
        let event = reader.read_event().map_err(|err| {
            SvgxError::parse_at(err.to_string(), input, reader.error_position() as usize)
        })?;

        match event {
            Event::Start(start) => {
                stack.push(open_element(&start, input, offset)?);
            }
            Event::Empty(start) => {
                let element = open_element(&start, input, offset)?;
                attach(&mut stack, &mut document, Node::Element(element));
            }
            Event::End(_) => {
                let element = stack.pop().ok_or_else(|| {
                    SvgxError::parse_at("closing tag without an open element", input, offset)
                })?;
                attach(&mut stack, &mut document, Node::Element(element));
            }
            Event::Text(text) => {
                let text = std::str::from_utf8(&text)
                    .map_err(|err| SvgxError::encoding_at(err, input, offset))?;
                if stack.is_empty() && text.trim().is_empty() {
                    continue;
                }
                attach(&mut stack, &mut document, Node::Text(text.to_string()));
            }
            Event::CData(data) => {
                let text = std::str::from_utf8(&data)
                    .map_err(|err| SvgxError::encoding_at(err, input, offset))?;
                attach(&mut stack, &mut document, Node::Text(text.to_string()));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(SvgxError::parse_at(
            format!("unclosed element <{}>", open.tag_name),
            input,
            input.len(),
        ));
    }

    Ok(document)
}

/// Parse the body of a `style` attribute into ordered declarations.
///
/// Property names are converted to style-object keys; values that are plain
/// numbers are kept as numeric literals. Semicolons inside quotes or
/// parentheses belong to the value. Declarations without a colon or with an
/// empty name are skipped.
///
/// # Examples
///
/// ```
/// use svgx_core::parse::parse_style;
/// use svgx_core::tree::StyleValue;
///
/// let style = parse_style("fill: red; stroke-width: 2");
/// assert_eq!(style.get("fill"), Some(&StyleValue::Text("red".into())));
/// assert_eq!(style.get("strokeWidth"), Some(&StyleValue::Number("2".into())));
/// ```
pub fn parse_style(input: &str) -> StyleMap {
    let mut style = StyleMap::new();
    for declaration in split_declarations(input) {
        let Some((name, value)) = declaration.split_once(':') else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        let value = value.trim();
        let value = if is_numeric_literal(value) {
            StyleValue::Number(value.to_string())
        } else {
            StyleValue::Text(value.to_string())
        };
        style.insert(style_property_name(name), value);
    }
    style
}

/// Splits on `;` outside quoted strings and parenthesised groups.
fn split_declarations(input: &str) -> Vec<&str> {
    let mut declarations = Vec::new();
    let mut quote: Option<char> = None;
    let mut depth = 0usize;
    let mut escaped = false;
    let mut start = 0;

    for (index, ch) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, ch) {
            (_, '\\') => escaped = true,
            (Some(open), ch) if ch == open => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(ch),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';') if depth == 0 => {
                declarations.push(&input[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    declarations.push(&input[start..]);
    declarations
}

/// A plain JavaScript number literal. Leading zeros (`08`) are rejected since
/// they are not valid in module code.
fn is_numeric_literal(value: &str) -> bool {
    let digits = value.trim_start_matches(['-', '+']);
    let mut bytes = digits.bytes();
    if let (Some(b'0'), Some(next)) = (bytes.next(), bytes.next()) {
        if next.is_ascii_digit() {
            return false;
        }
    }
    !value.is_empty()
        && value
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+' | b'e' | b'E'))
        && value.parse::<f64>().is_ok()
}

fn open_element(start: &BytesStart<'_>, input: &str, offset: usize) -> Result<Element, SvgxError> {
    let tag_name = std::str::from_utf8(start.name().as_ref())
        .map_err(|err| SvgxError::encoding_at(err, input, offset))?
        .to_string();
    let mut element = Element::new(tag_name);

    for attr in start.attributes() {
        let attr = attr.map_err(|err| SvgxError::parse_at(err.to_string(), input, offset))?;
        let name = std::str::from_utf8(attr.key.as_ref())
            .map_err(|err| SvgxError::encoding_at(err, input, offset))?
            .to_string();

        let value = if name == "style" {
            let decoded = attr
                .unescape_value()
                .map_err(|err| SvgxError::parse_at(err.to_string(), input, offset))?;
            PropValue::Style(parse_style(&decoded))
        } else {
            let raw = std::str::from_utf8(&attr.value)
                .map_err(|err| SvgxError::encoding_at(err, input, offset))?;
            PropValue::Text(raw.to_string())
        };
        element.properties.insert(name, value);
    }

    Ok(element)
}

fn attach(stack: &mut [Element], document: &mut Document, node: Node) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => document.children.push(node),
    }
}
