//! Markdown renderer.
//!
//! One block per test method, each closed by a link back to the package
//! heading (or to `#top` when the file has no package line):
//!
//! ```text
//! ## `pkg`
//! ---
//! #### `TestName`
//! > tag, tag
//! ### Scenario
//! #### GIVEN ...
//! - step
//!   - sub step
//!
//! [top](#pkg)
//! ```

use crate::model::*;

/// Render a Document as Markdown lines. `None` renders to nothing.
pub fn format(doc: Option<&Document>) -> Vec<String> {
    let Some(doc) = doc.filter(|doc| !doc.is_empty()) else {
        return Vec::new();
    };

    let mut lines = Vec::new();

    if !doc.package_name.is_empty() {
        lines.push(format!("## `{}`", doc.package_name));
    }

    let top = top_link(&doc.package_name);
    for method in &doc.methods {
        render_method(&mut lines, method);
        lines.push(String::new());
        lines.push(top.clone());
    }

    lines
}

fn render_method(lines: &mut Vec<String>, method: &Method) {
    lines.push("---".to_string());
    lines.push(format!("#### `{}`", method.name));

    if !method.tags.is_empty() {
        lines.push(format!("> {}", method.tags.join(", ")));
    }

    if !method.scenario.is_empty() {
        lines.push(format!("### {}", method.scenario));
    }

    for step in &method.steps {
        lines.push(format!("{}{}", step_prefix(step.kind), step.comment));
    }
}

fn step_prefix(kind: StepKind) -> &'static str {
    match kind {
        StepKind::Gwt => "#### ",
        StepKind::Common => "- ",
        StepKind::Indented => "  - ",
        StepKind::Indented2 => "    - ",
    }
}

/// `[top](#anchor)` pointing at the package heading, or at `#top`.
fn top_link(package_name: &str) -> String {
    let anchor = if package_name.is_empty() {
        "top"
    } else {
        package_name
    };
    format!("[top](#{})", anchor)
}
