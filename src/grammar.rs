//! Line grammar: the handful of Go source shapes the parser reacts to.
//!
//! Nothing here understands Go. A line is either a `package` header, a `func`
//! header, an unindented closing brace, a `//` comment carrying one of the
//! documentation markers, or noise.

use regex::Regex;
use std::sync::LazyLock;

/// Line comment prefix.
pub const LINE_COMMENT: &str = "//";

// -- Regex patterns -----------------------------------------------------------

// Whitespace and word classes are ASCII-only: a no-break space is not a
// separator and `é` is not a word character.
static RE_PACKAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^package[\t\n\f\r ]([0-9A-Za-z_]+)").unwrap());

static RE_TEST_FUNC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^func[\t\n\f\r ](Test[0-9A-Za-z_]+)\(t \*testing\.T\)").unwrap()
});

// Applied to the comment text after `//`: exactly one whitespace, a marker,
// exactly one whitespace, then content.
static RE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\t\n\f\r ](---|--|-|##|#|>)[\t\n\f\r ][^\t\n\f\r ]").unwrap()
});

// -- Types --------------------------------------------------------------------

/// Documentation marker at the start of an annotated comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `#`
    Scenario,
    /// `##`
    Gwt,
    /// `>`
    Tags,
    /// `-`
    Common,
    /// `--`
    Indented,
    /// `---`
    Indented2,
}

impl Marker {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "#" => Some(Marker::Scenario),
            "##" => Some(Marker::Gwt),
            ">" => Some(Marker::Tags),
            "-" => Some(Marker::Common),
            "--" => Some(Marker::Indented),
            "---" => Some(Marker::Indented2),
            _ => None,
        }
    }

    /// The marker as written in source.
    pub fn token(self) -> &'static str {
        match self {
            Marker::Scenario => "#",
            Marker::Gwt => "##",
            Marker::Tags => ">",
            Marker::Common => "-",
            Marker::Indented => "--",
            Marker::Indented2 => "---",
        }
    }
}

/// A recognized documentation comment: its marker and the trimmed text after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotation<'a> {
    pub marker: Marker,
    pub payload: &'a str,
}

/// Classification of one raw source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `package name`
    Package(&'a str),
    /// `func TestName(t *testing.T)`
    TestFunc(&'a str),
    /// Any other `func` line.
    OtherFunc,
    /// `}` in the first column.
    FuncEnd,
    Comment(Annotation<'a>),
    Ignored,
}

// -- Public API ---------------------------------------------------------------

/// Classify a raw line. Checks run in a fixed order and the first hit wins:
/// package, func, comment, closing brace.
pub fn classify(line: &str) -> Line<'_> {
    if line.starts_with("package") {
        return match RE_PACKAGE.captures(line).and_then(|caps| caps.get(1)) {
            Some(name) => Line::Package(name.as_str()),
            None => Line::Ignored,
        };
    }

    if line.starts_with("func") {
        return match RE_TEST_FUNC.captures(line).and_then(|caps| caps.get(1)) {
            Some(name) => Line::TestFunc(name.as_str()),
            None => Line::OtherFunc,
        };
    }

    let trimmed = line.trim();
    if let Some(text) = trimmed.strip_prefix(LINE_COMMENT) {
        return match annotation(text) {
            Some(ann) => Line::Comment(ann),
            None => Line::Ignored,
        };
    }

    // Indented braces belong to nested blocks; only column 0 ends a func.
    if line.starts_with('}') {
        return Line::FuncEnd;
    }

    Line::Ignored
}

/// Match the text following `//` against the marker shape.
pub fn annotation(text: &str) -> Option<Annotation<'_>> {
    let caps = RE_MARKER.captures(text)?;
    let token = caps.get(1)?;
    let marker = Marker::from_token(token.as_str())?;
    Some(Annotation {
        marker,
        payload: text[token.end()..].trim(),
    })
}
