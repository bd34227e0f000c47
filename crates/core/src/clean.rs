//! Markup cleanup applied before parsing.

use crate::SvgxError;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::borrow::Cow;

/// Optimizes raw SVG text before it is parsed.
///
/// Implementations must be idempotent and free of side effects.
pub trait Cleaner: Send + Sync {
    /// Clean the input markup, returning an owned or borrowed string.
    fn clean<'a>(&self, input: &'a str) -> Result<Cow<'a, str>, SvgxError>;
}

impl<F> Cleaner for F
where
    F: for<'a> Fn(&'a str) -> Result<Cow<'a, str>, SvgxError> + Send + Sync,
{
    fn clean<'a>(&self, input: &'a str) -> Result<Cow<'a, str>, SvgxError> {
        (self)(input)
    }
}

/// Cleaner that returns its input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Cleaner for Passthrough {
    fn clean<'a>(&self, input: &'a str) -> Result<Cow<'a, str>, SvgxError> {
        Ok(Cow::Borrowed(input))
    }
}

/// Elements removed together with their content.
const DROPPED_ELEMENTS: &[&str] = &["metadata", "title", "desc"];

/// Namespace prefixes written by vector editors.
const EDITOR_PREFIXES: &[&str] = &["sodipodi:", "inkscape:", "sketch:", "serif:"];

/// Built-in cleanup policy.
///
/// Removes the XML declaration, processing instructions, doctype, comments,
/// `metadata`/`title`/`desc` subtrees, editor-private elements and attributes,
/// namespace declarations and whitespace-only text outside `<text>`. Elements
/// left without content are written self-closing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgCleaner;

impl Cleaner for SvgCleaner {
    fn clean<'a>(&self, input: &'a str) -> Result<Cow<'a, str>, SvgxError> {
        let mut reader = Reader::from_str(input);
        reader.config_mut().trim_text(false);

        let mut out = CleanWriter::with_capacity(input.len());
        let mut skip_depth = 0usize;
        // open elements at or below a `<text>`; whitespace there is content
        let mut text_depth = 0usize;

        loop {
            let offset = reader.buffer_position() as usize;
            let event = reader.read_event().map_err(|err| {
                SvgxError::parse_at(err.to_string(), input, reader.error_position() as usize)
            })?;

            match event {
                Event::Start(start) => {
                    if skip_depth > 0 || is_dropped_element(&start) {
                        skip_depth += 1;
                        continue;
                    }
                    if text_depth > 0 || start.name().as_ref() == b"text" {
                        text_depth += 1;
                    }
                    out.open(&start, input, offset)?;
                }
                Event::Empty(start) => {
                    if skip_depth > 0 || is_dropped_element(&start) {
                        continue;
                    }
                    out.open(&start, input, offset)?;
                    out.close_empty();
                }
                Event::End(end) => {
                    if skip_depth > 0 {
                        skip_depth -= 1;
                        continue;
                    }
                    text_depth = text_depth.saturating_sub(1);
                    let qname = end.name();
                    let name = std::str::from_utf8(qname.as_ref())
                        .map_err(|err| SvgxError::encoding_at(err, input, offset))?;
                    out.close(name);
                }
                Event::Text(text) if skip_depth == 0 => {
                    let text = std::str::from_utf8(&text)
                        .map_err(|err| SvgxError::encoding_at(err, input, offset))?;
                    if text_depth > 0 || !text.trim().is_empty() {
                        out.raw(text);
                    }
                }
                Event::CData(data) if skip_depth == 0 => {
                    let text = std::str::from_utf8(&data)
                        .map_err(|err| SvgxError::encoding_at(err, input, offset))?;
                    out.raw("<![CDATA[");
                    out.raw(text);
                    out.raw("]]>");
                }
                Event::Eof => break,
                _ => {}
            }
        }

        let cleaned = out.finish();
        log::trace!("cleaned markup: {} -> {} bytes", input.len(), cleaned.len());
        Ok(Cow::Owned(cleaned))
    }
}

fn is_dropped_element(start: &BytesStart<'_>) -> bool {
    let name = start.name();
    let name = name.as_ref();
    DROPPED_ELEMENTS.iter().any(|tag| tag.as_bytes() == name)
        || EDITOR_PREFIXES
            .iter()
            .any(|prefix| name.starts_with(prefix.as_bytes()))
}

fn is_dropped_attribute(name: &str) -> bool {
    name == "xmlns"
        || name.starts_with("xmlns:")
        || EDITOR_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

/// Output buffer that defers `>` so childless elements can self-close.
struct CleanWriter {
    out: String,
    pending_open: bool,
}

impl CleanWriter {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            pending_open: false,
        }
    }

    fn flush_open(&mut self) {
        if self.pending_open {
            self.out.push('>');
            self.pending_open = false;
        }
    }

    fn open(&mut self, start: &BytesStart<'_>, input: &str, offset: usize) -> Result<(), SvgxError> {
        self.flush_open();
        let qname = start.name();
        let name = std::str::from_utf8(qname.as_ref())
            .map_err(|err| SvgxError::encoding_at(err, input, offset))?;
        self.out.push('<');
        self.out.push_str(name);

        for attr in start.attributes() {
            let attr = attr.map_err(|err| SvgxError::parse_at(err.to_string(), input, offset))?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|err| SvgxError::encoding_at(err, input, offset))?;
            if is_dropped_attribute(key) {
                continue;
            }
            let value = std::str::from_utf8(&attr.value)
                .map_err(|err| SvgxError::encoding_at(err, input, offset))?;
            let quote = if value.contains('"') { '\'' } else { '"' };
            self.out.push(' ');
            self.out.push_str(key);
            self.out.push('=');
            self.out.push(quote);
            self.out.push_str(value);
            self.out.push(quote);
        }

        self.pending_open = true;
        Ok(())
    }

    fn close_empty(&mut self) {
        self.out.push_str("/>");
        self.pending_open = false;
    }

    fn close(&mut self, name: &str) {
        if self.pending_open {
            self.close_empty();
            return;
        }
        self.out.push_str("</");
        self.out.push_str(name);
        self.out.push('>');
    }

    fn raw(&mut self, text: &str) {
        self.flush_open();
        self.out.push_str(text);
    }

    fn finish(mut self) -> String {
        self.flush_open();
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(input: &str) -> String {
        SvgCleaner.clean(input).unwrap().into_owned()
    }

    #[test]
    fn strips_prolog_comments_and_metadata() {
        let input = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<!-- Generator: editor -->
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
  <title>home</title>
  <desc>Created with an editor.</desc>
  <metadata><rdf:RDF><cc:Work/></rdf:RDF></metadata>
  <path d="M0 0"/>
</svg>
"#;
        assert_eq!(clean(input), r#"<svg viewBox="0 0 24 24"><path d="M0 0"/></svg>"#);
    }

    #[test]
    fn drops_editor_attributes_and_elements() {
        let input = r#"<svg xmlns:inkscape="x" inkscape:version="1.0"><sodipodi:namedview id="n"/><g inkscape:label="Layer 1" id="layer"><path d="M1 1"/></g></svg>"#;
        assert_eq!(
            clean(input),
            r#"<svg><g id="layer"><path d="M1 1"/></g></svg>"#
        );
    }

    #[test]
    fn collapses_empty_elements() {
        assert_eq!(clean("<svg><g>  </g><path></path></svg>"), "<svg><g/><path/></svg>");
    }

    #[test]
    fn keeps_text_content() {
        assert_eq!(
            clean("<svg><text x=\"1\">Hi &amp; bye</text></svg>"),
            "<svg><text x=\"1\">Hi &amp; bye</text></svg>"
        );
    }

    #[test]
    fn keeps_whitespace_between_text_spans() {
        let input = "<svg>\n  <text>a<tspan>b</tspan> <tspan>c</tspan></text>\n</svg>";
        assert_eq!(
            clean(input),
            "<svg><text>a<tspan>b</tspan> <tspan>c</tspan></text></svg>"
        );
        let once = clean(input);
        assert_eq!(clean(&once), once);
    }

    #[test]
    fn keeps_xlink_references() {
        let input = r##"<svg xmlns:xlink="http://www.w3.org/1999/xlink"><use xlink:href="#a"/></svg>"##;
        assert_eq!(clean(input), r##"<svg><use xlink:href="#a"/></svg>"##);
    }

    #[test]
    fn preserves_values_containing_double_quotes() {
        let input = r#"<svg><text font-family='"Inter"'>a</text></svg>"#;
        assert_eq!(clean(input), input);
    }

    #[test]
    fn cleaning_is_idempotent() {
        let input = r#"<?xml version="1.0"?><svg xmlns="http://www.w3.org/2000/svg">
  <!-- c -->
  <g fill="none"><title>t</title><path d="M0 0"></path></g>
</svg>"#;
        let once = clean(input);
        assert_eq!(clean(&once), once);
    }

    #[test]
    fn malformed_markup_is_an_error() {
        assert!(SvgCleaner.clean("<svg><g></svg>").is_err());
    }

    #[test]
    fn passthrough_borrows_input() {
        let input = "<svg/>";
        assert!(matches!(Passthrough.clean(input).unwrap(), Cow::Borrowed("<svg/>")));
    }

    #[test]
    fn functions_are_cleaners() {
        fn lowercase_paths(input: &str) -> Result<Cow<'_, str>, SvgxError> {
            Ok(Cow::Owned(input.replace("PATH", "path")))
        }
        assert_eq!(lowercase_paths.clean("<PATH/>").unwrap(), "<path/>");
    }
}
