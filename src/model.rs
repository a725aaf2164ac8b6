//! Data model for parsed test documentation — format-agnostic.

/// Everything documented in a single test source file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Document {
    /// Display title. Never filled by the parser yet.
    pub title: Option<String>,
    /// From the `package` line; empty when the file has none.
    pub package_name: String,
    /// Test functions in declaration order.
    pub methods: Vec<Method>,
}

/// One documented test function.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    /// `// > a, b` entries, in order, duplicates kept
    pub tags: Vec<String>,
    /// `// # ...`
    pub scenario: String,
    pub steps: Vec<Step>,
}

/// A single documentation line inside a method body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub kind: StepKind,
    pub comment: String,
}

/// Rendering level of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// `##`, a Given/When/Then sub-header
    Gwt,
    /// `-`
    Common,
    /// `--`
    Indented,
    /// `---`
    Indented2,
}

impl Document {
    /// True when rendering would produce no lines at all.
    pub fn is_empty(&self) -> bool {
        self.package_name.is_empty() && self.methods.is_empty()
    }
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl Step {
    pub fn new(kind: StepKind, comment: impl Into<String>) -> Self {
        Self {
            kind,
            comment: comment.into(),
        }
    }
}
