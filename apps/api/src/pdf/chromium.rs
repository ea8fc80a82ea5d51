use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::process::Command;
use tracing::{debug, info};

use crate::pdf::{print_document, PdfError, PdfRenderer};

const INPUT_FILE: &str = "resume.html";
const OUTPUT_FILE: &str = "resume.pdf";

/// Renders PDFs by printing the markup with a headless Chromium.
///
/// Each call writes the print document into a fresh temp dir, launches one
/// browser process, waits for it to exit (the instance is gone afterwards),
/// and reads back the PDF. The temp dir is removed on drop. The page is
/// opened from `file://`, so it relies on the content policy added by
/// `print_document` to keep other local files out of the output.
#[derive(Debug, Clone)]
pub struct ChromiumPdfRenderer {
    binary: PathBuf,
    virtual_time_budget_ms: u64,
}

impl ChromiumPdfRenderer {
    pub fn new(binary: impl Into<PathBuf>, virtual_time_budget_ms: u64) -> Self {
        Self {
            binary: binary.into(),
            virtual_time_budget_ms,
        }
    }

    fn args(&self, input: &Path, output: &Path) -> Vec<String> {
        vec![
            "--headless".to_string(),
            "--disable-gpu".to_string(),
            "--no-sandbox".to_string(),
            "--disable-setuid-sandbox".to_string(),
            "--disable-dev-shm-usage".to_string(),
            "--no-pdf-header-footer".to_string(),
            "--run-all-compositor-stages-before-draw".to_string(),
            format!("--virtual-time-budget={}", self.virtual_time_budget_ms),
            format!("--print-to-pdf={}", output.display()),
            format!("file://{}", input.display()),
        ]
    }
}

#[async_trait]
impl PdfRenderer for ChromiumPdfRenderer {
    async fn render(&self, html: &str) -> Result<Bytes, PdfError> {
        if html.trim().is_empty() {
            return Err(PdfError::EmptyInput);
        }

        let workdir = tempfile::tempdir()?;
        let input = workdir.path().join(INPUT_FILE);
        let output = workdir.path().join(OUTPUT_FILE);
        tokio::fs::write(&input, print_document(html)).await?;

        debug!("Launching {} for PDF export", self.binary.display());
        let result = Command::new(&self.binary)
            .args(self.args(&input, &output))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(PdfError::Launch)?;

        if !result.status.success() {
            return Err(PdfError::RenderFailed {
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        let pdf = match tokio::fs::read(&output).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PdfError::EmptyOutput)
            }
            Err(e) => return Err(e.into()),
        };
        if pdf.is_empty() {
            return Err(PdfError::EmptyOutput);
        }

        info!("Rendered PDF ({} bytes)", pdf.len());
        Ok(Bytes::from(pdf))
    }
}
