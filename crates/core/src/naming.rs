//! Identifier derivation for component names, JSX attributes and style keys.

/// Converts an asset base name into a React component name.
///
/// Hyphens become word breaks; every whitespace-delimited word gets an
/// upper-cased first character and a lower-cased remainder; whitespace is
/// dropped.
///
/// # Examples
///
/// ```
/// use svgx_core::naming::component_name;
///
/// assert_eq!(component_name("arrow-up"), "ArrowUp");
/// assert_eq!(component_name("USER-circle"), "UserCircle");
/// assert_eq!(component_name("home"), "Home");
/// ```
pub fn component_name(input: &str) -> String {
    let mut name = String::with_capacity(input.len());
    let mut word_start = true;

    for ch in input.chars() {
        if ch == '-' || ch.is_whitespace() {
            word_start = true;
            continue;
        }
        if word_start {
            name.extend(ch.to_uppercase());
            word_start = false;
        } else {
            name.extend(ch.to_lowercase());
        }
    }

    name
}

/// Folds a hyphenated attribute name into JSX camelCase.
///
/// The first segment is lower-cased in full; each following segment gets an
/// upper-cased first character and a lower-cased remainder.
///
/// # Examples
///
/// ```
/// use svgx_core::naming::camel_case;
///
/// assert_eq!(camel_case("stroke-width"), "strokeWidth");
/// assert_eq!(camel_case("FILL-RULE"), "fillRule");
/// assert_eq!(camel_case("opacity"), "opacity");
/// ```
pub fn camel_case(input: &str) -> String {
    let mut name = String::with_capacity(input.len());

    for (index, segment) in input.split('-').enumerate() {
        if index == 0 {
            name.push_str(&segment.to_lowercase());
            continue;
        }
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(&chars.as_str().to_lowercase());
        }
    }

    name
}

/// Converts a CSS property name into its JavaScript style-object key.
///
/// Vendor prefixes follow React's convention (`-webkit-mask` → `WebkitMask`,
/// `-ms-transform` → `msTransform`). Custom properties (`--brand`) are kept
/// verbatim.
///
/// # Examples
///
/// ```
/// use svgx_core::naming::style_property_name;
///
/// assert_eq!(style_property_name("stroke-linecap"), "strokeLinecap");
/// assert_eq!(style_property_name("-webkit-mask"), "WebkitMask");
/// assert_eq!(style_property_name("-ms-transform"), "msTransform");
/// assert_eq!(style_property_name("--brand"), "--brand");
/// ```
pub fn style_property_name(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.starts_with("--") {
        return trimmed.to_string();
    }
    match trimmed.strip_prefix('-') {
        Some(rest) if rest.starts_with("ms-") => camel_case(rest),
        Some(rest) => component_name(rest),
        None => camel_case(trimmed),
    }
}

/// Returns true when `key` can be written as a bare JavaScript object key.
pub fn is_js_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_alphanumeric() || ch == '_' || ch == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_name_pascal_cases_hyphenated_words() {
        assert_eq!(component_name("arrow-up"), "ArrowUp");
        assert_eq!(component_name("arrow-down"), "ArrowDown");
        assert_eq!(component_name("chevron-double-left"), "ChevronDoubleLeft");
    }

    #[test]
    fn component_name_lowercases_word_remainders() {
        assert_eq!(component_name("ARROW-UP"), "ArrowUp");
        assert_eq!(component_name("aRRow"), "Arrow");
    }

    #[test]
    fn component_name_collapses_repeated_separators() {
        assert_eq!(component_name("arrow--up"), "ArrowUp");
        assert_eq!(component_name("-arrow-up-"), "ArrowUp");
        assert_eq!(component_name("arrow up"), "ArrowUp");
    }

    #[test]
    fn component_name_keeps_digits_and_underscores() {
        assert_eq!(component_name("icon-24_px"), "Icon24_px");
        assert_eq!(component_name("2fa"), "2fa");
    }

    #[test]
    fn component_name_is_deterministic() {
        for input in ["arrow-up", "home", "a-b-c", ""] {
            assert_eq!(component_name(input), component_name(input));
        }
    }

    #[test]
    fn component_name_reapplication_is_stable_for_single_words() {
        for input in ["home", "SETTINGS", "bell"] {
            let once = component_name(input);
            assert_eq!(component_name(&once), once);
        }
        // Multi-word output is folded again: the rule lower-cases word tails.
        assert_eq!(component_name(&component_name("arrow-up")), "Arrowup");
    }

    #[test]
    fn camel_case_folds_segments() {
        assert_eq!(camel_case("stroke-width"), "strokeWidth");
        assert_eq!(camel_case("stroke-dasharray"), "strokeDasharray");
        assert_eq!(camel_case("clip-path"), "clipPath");
        assert_eq!(camel_case("viewBox"), "viewbox");
    }

    #[test]
    fn camel_case_skips_empty_segments() {
        assert_eq!(camel_case("a--b"), "aB");
        assert_eq!(camel_case("-moz-x"), "MozX");
    }

    #[test]
    fn identifiers() {
        assert!(is_js_identifier("strokeWidth"));
        assert!(is_js_identifier("_x"));
        assert!(!is_js_identifier("--brand"));
        assert!(!is_js_identifier("1x"));
        assert!(!is_js_identifier(""));
    }
}
