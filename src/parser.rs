//! Test source parser — line-by-line state machine.
//!
//! Walks the lines of one Go test file and collects a [`Document`]: the
//! package name plus, for every `func TestXxx(t *testing.T)`, the annotated
//! comments found inside its body.
//!
//! Method bodies are tracked without counting braces. A method is open from
//! its header up to the first `}` in column 0, which is only right for
//! gofmt-style bodies. A stray top-level `}` inside a test ends it early.

use crate::error::{check_input, Result};
use crate::grammar::{self, Annotation, Line, Marker};
use crate::model::*;

// -- Parser state -------------------------------------------------------------

/// Where the parser is relative to test function bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    Outside,
    /// Inside the body of `methods[index]`.
    Inside(usize),
}

#[derive(Default)]
struct ParserState {
    doc: Document,
    state: State,
}

// -- Public API ---------------------------------------------------------------

/// Parse the lines of a test source file into a Document.
///
/// Fails only for input with no content at all: zero lines, or one empty line.
pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Document> {
    check_input(lines)?;
    tracing::debug!(lines = lines.len(), "start parsing");

    let mut s = ParserState::default();
    for line in lines {
        process_line(&mut s, line.as_ref());
    }

    tracing::debug!(
        "parsed package {:?} with {} methods",
        s.doc.package_name,
        s.doc.methods.len()
    );
    Ok(s.doc)
}

// -- Line processing ----------------------------------------------------------

fn process_line(s: &mut ParserState, line: &str) {
    match grammar::classify(line) {
        Line::Package(name) => {
            s.doc.package_name = name.to_string();
        }
        Line::TestFunc(name) => {
            s.doc.methods.push(Method::new(name));
            s.state = State::Inside(s.doc.methods.len() - 1);
        }
        // A helper func after an unterminated test must not inherit its comments
        Line::OtherFunc | Line::FuncEnd => {
            s.state = State::Outside;
        }
        Line::Comment(ann) => {
            if let State::Inside(index) = s.state {
                if let Some(method) = s.doc.methods.get_mut(index) {
                    apply_annotation(method, ann);
                }
            }
        }
        Line::Ignored => {}
    }
}

/// Record one annotated comment on the open method.
fn apply_annotation(method: &mut Method, ann: Annotation<'_>) {
    let step_kind = match ann.marker {
        Marker::Scenario => {
            method.scenario = ann.payload.to_string();
            return;
        }
        Marker::Tags => {
            method
                .tags
                .extend(ann.payload.split(',').map(|t| t.trim().to_string()));
            return;
        }
        Marker::Gwt => StepKind::Gwt,
        Marker::Common => StepKind::Common,
        Marker::Indented => StepKind::Indented,
        Marker::Indented2 => StepKind::Indented2,
    };
    method.steps.push(Step::new(step_kind, ann.payload));
}
