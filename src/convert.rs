//! One-call conversions from source lines to Markdown lines.

use crate::error::{check_input, Result};
use crate::grammar::{self, Marker, LINE_COMMENT};
use crate::{parser, render};

/// Parse, then render as Markdown.
pub fn convert<S: AsRef<str>>(lines: &[S]) -> Result<Vec<String>> {
    let doc = parser::parse(lines)?;
    Ok(render::format(Some(&doc)))
}

/// Older single-pass conversion.
///
/// Every annotated comment in the input becomes one Markdown line, in input
/// order, with no notion of packages, functions or tags: `#` and `##` turn
/// into level 3 and 4 headers, `-`, `--` and `---` into bullets at increasing
/// depth, and `>` lines pass through as a blockquote.
pub fn convert_flat<S: AsRef<str>>(lines: &[S]) -> Result<Vec<String>> {
    check_input(lines)?;
    tracing::debug!(lines = lines.len(), "start flat conversion");

    let out = lines
        .iter()
        .filter_map(|line| flat_line(line.as_ref()))
        .collect();
    Ok(out)
}

fn flat_line(line: &str) -> Option<String> {
    let text = line.trim().strip_prefix(LINE_COMMENT)?;
    let ann = grammar::annotation(text)?;
    // Marker and separator are kept as written; the leading separator is
    // one ASCII byte.
    let written = &text[1..];
    let line = match ann.marker {
        Marker::Scenario | Marker::Gwt => format!("##{}", written),
        Marker::Tags | Marker::Common => written.to_string(),
        Marker::Indented => format!("  -{}", &written[ann.marker.token().len()..]),
        Marker::Indented2 => format!("    -{}", &written[ann.marker.token().len()..]),
    };
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidInput;

    #[test]
    fn convert_rejects_nil_and_empty() {
        let none: [&str; 0] = [];
        assert_eq!(convert(&none), Err(InvalidInput::Nil));
        assert_eq!(convert(&[""]), Err(InvalidInput::Empty));
        assert_eq!(convert_flat(&none), Err(InvalidInput::Nil));
        assert_eq!(convert_flat(&[""]), Err(InvalidInput::Empty));
    }

    #[test]
    fn convert_without_comments_is_empty() {
        assert_eq!(convert(&[" something", "", " something else"]), Ok(vec![]));
        assert_eq!(
            convert_flat(&[" something", "", " something else"]),
            Ok(vec![])
        );
    }

    #[test]
    fn flat_ignores_badly_spaced_markers() {
        let input = [
            "// Scenario",
            "//- point",
            "//  - point",
            "// #header",
            "// ##  header",
        ];
        assert_eq!(convert_flat(&input), Ok(vec![]));
    }

    #[test]
    fn flat_headers() {
        assert_eq!(convert_flat(&["// # Scenario"]), Ok(vec!["### Scenario".to_string()]));
        assert_eq!(convert_flat(&["// ## GIVEN"]), Ok(vec!["#### GIVEN".to_string()]));
    }

    #[test]
    fn flat_quote_and_bullets() {
        let out = convert_flat(&["// > Group", "// - Step ", "// -- Step2 ", "// --- Step3 "]).unwrap();
        assert_eq!(out, vec!["> Group", "- Step", "  - Step2", "    - Step3"]);
    }

    #[test]
    fn flat_keeps_the_written_separator() {
        let out = convert_flat(&["// -\tstep", "// --\tdeeper", "// #\ttitle"]).unwrap();
        assert_eq!(out, vec!["-\tstep", "  -\tdeeper", "###\ttitle"]);
    }

    #[test]
    fn flat_needs_no_function_context() {
        let out = convert_flat(&["package p", "// # Loose", "func helper() {", "\t// - inside", "}"]).unwrap();
        assert_eq!(out, vec!["### Loose", "- inside"]);
    }
}
