//! Single-asset markup pipeline: clean, parse, unwrap, transform, serialize.

use crate::clean::Cleaner;
use crate::parse::parse;
use crate::stringify::stringify;
use crate::transform::transform_nodes;
use crate::SvgxError;

/// Compiles raw SVG source into the JSX fragment embedded in a component.
///
/// The outer `<svg>` element, when it leads the document, is dropped: the
/// component template provides its own.
///
/// # Examples
///
/// ```
/// use svgx_core::{compile_markup, SvgCleaner};
///
/// let jsx = compile_markup(r#"<svg><path d="M0 0" class="a" data-x="1"/></svg>"#, &SvgCleaner)?;
/// assert_eq!(jsx, r#"<path d="M0 0" className="a" data-x="1"></path>"#);
/// # Ok::<(), svgx_core::SvgxError>(())
/// ```
pub fn compile_markup(source: &str, cleaner: &dyn Cleaner) -> Result<String, SvgxError> {
    let cleaned = cleaner.clean(source)?;
    let document = parse(&cleaned)?;
    let content = transform_nodes(document.content());
    Ok(stringify(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clean::{Passthrough, SvgCleaner};

    #[test]
    fn unwraps_root_and_renames_attributes() {
        let jsx = compile_markup(
            r#"<svg viewBox="0 0 24 24"><g fill-rule="evenodd"><path class="a" stroke-width="2" d="M0 0"/></g></svg>"#,
            &SvgCleaner,
        )
        .unwrap();
        insta::assert_snapshot!(
            jsx,
            @r#"<g fillRule="evenodd"><path className="a" strokeWidth="2" d="M0 0"></path></g>"#
        );
    }

    #[test]
    fn document_without_svg_root_is_kept_whole() {
        let jsx = compile_markup(r#"<g class="x"><path/></g>"#, &SvgCleaner).unwrap();
        assert_eq!(jsx, r#"<g className="x"><path></path></g>"#);
    }

    #[test]
    fn passthrough_keeps_inner_whitespace() {
        let jsx = compile_markup("<svg>\n  <path d=\"M0 0\"/>\n</svg>\n", &Passthrough).unwrap();
        assert_eq!(jsx, "\n  <path d=\"M0 0\"></path>\n");
    }

    #[test]
    fn cleaner_output_drops_metadata_before_transform() {
        let jsx = compile_markup(
            r#"<svg xmlns="http://www.w3.org/2000/svg"><title>x</title><circle cx="1"/></svg>"#,
            &SvgCleaner,
        )
        .unwrap();
        assert_eq!(jsx, r#"<circle cx="1"></circle>"#);
    }

    #[test]
    fn parse_errors_propagate() {
        assert!(compile_markup("<svg><path></svg>", &Passthrough).is_err());
    }
}
