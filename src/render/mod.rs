//! Renderers turning a parsed Document into output lines.

pub mod markdown;

pub use markdown::format;

/// Join rendered lines for writing to a file or stdout: every line,
/// including the last, is terminated by `\n`.
pub fn to_text<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    out
}
