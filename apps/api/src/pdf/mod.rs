//! PDF export: a pluggable renderer that turns markup into PDF bytes.
//!
//! Default: `ChromiumPdfRenderer` (headless browser, one process per request).
//! `AppState` holds an `Arc<dyn PdfRenderer>` so handlers and tests never
//! need a real browser.

pub mod chromium;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

pub use chromium::ChromiumPdfRenderer;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("no markup to render")]
    EmptyInput,

    #[error("failed to launch renderer: {0}")]
    Launch(#[source] std::io::Error),

    #[error("renderer exited with status {status}: {stderr}")]
    RenderFailed { status: String, stderr: String },

    #[error("renderer produced no PDF output")]
    EmptyOutput,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Turns markup into a PDF document. Implementations make a single attempt.
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render(&self, html: &str) -> Result<Bytes, PdfError>;
}

/// Page setup applied to every export: A4, 20px margins, backgrounds printed.
pub const PRINT_STYLE: &str = "@page { size: A4; margin: 20px; } \
html, body { margin: 0; padding: 0; background: #ffffff; } \
* { -webkit-print-color-adjust: exact; print-color-adjust: exact; box-sizing: border-box; }";

/// Content policy for printed markup. Only inline styles and `data:` images
/// and fonts load; scripts, frames and any `file://` or network URL are blocked.
pub const CONTENT_POLICY: &str =
    "default-src 'none'; img-src data:; style-src 'unsafe-inline'; font-src data:";

fn print_head() -> String {
    format!(
        "<meta http-equiv=\"Content-Security-Policy\" content=\"{CONTENT_POLICY}\">\n\
         <style>{PRINT_STYLE}</style>\n"
    )
}

/// Wraps markup into a complete print document whose head opens with the
/// content policy and page style.
///
/// Fragments get a fresh document. Full documents keep their own markup; the
/// head is injected after any leading doctype, `<html>` and `<head>` tags so
/// it precedes every element that could load a resource.
pub fn print_document(html: &str) -> String {
    let head = print_head();
    let lower = html.trim_start().to_ascii_lowercase();

    if lower.starts_with("<!doctype") || lower.starts_with("<html") {
        let at = head_insertion_point(html);
        return format!("{}{}{}", &html[..at], head, &html[at..]);
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n{head}<meta charset=\"utf-8\">\n\
         <title>Resume</title>\n</head>\n<body>\n{html}\n</body>\n</html>\n"
    )
}

/// Byte offset just past the leading `<!doctype>`, `<html>` and `<head>` tags
/// (each optional, in that order).
fn head_insertion_point(html: &str) -> usize {
    let lower = html.to_ascii_lowercase();
    let mut at = 0;
    for tag in ["<!doctype", "<html", "<head"] {
        let rest = &lower[at..];
        let offset = rest.len() - rest.trim_start().len();
        let candidate = at + offset;
        if !lower[candidate..].starts_with(tag) {
            continue;
        }
        // `<header>` / `<html-foo>` are not the tag we want
        let next = lower[candidate + tag.len()..].chars().next();
        if !matches!(next, Some(c) if c == '>' || c.is_ascii_whitespace()) {
            continue;
        }
        match lower[candidate..].find('>') {
            Some(close) => at = candidate + close + 1,
            None => break,
        }
    }
    at
}
