use crate::utils::error::{Result, ScanError};
use std::path::Path;

pub const PLAIN_TEXT: &str = "text/plain";

/// Best guess at the MIME type a browser would report for `file_name`.
pub fn content_type_for(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("txt") | Some("text") => PLAIN_TEXT,
        Some("md") | Some("markdown") => "text/markdown",
        Some("html") | Some("htm") => "text/html",
        Some("json") => "application/json",
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}

fn is_plain_text(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|essence| essence.trim().eq_ignore_ascii_case(PLAIN_TEXT))
        .unwrap_or(false)
}

/// Accepts plain-text uploads only. Without an explicit content type the
/// file extension decides.
pub fn accept_upload(file_name: &str, content_type: Option<&str>, bytes: &[u8]) -> Result<String> {
    let content_type = content_type.unwrap_or_else(|| content_type_for(file_name));

    if !is_plain_text(content_type) {
        tracing::warn!("Rejected upload '{}' ({})", file_name, content_type);
        return Err(ScanError::UnsupportedFileType {
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
        });
    }

    tracing::debug!("Accepted upload '{}' ({} bytes)", file_name, bytes.len());
    Ok(String::from_utf8_lossy(bytes).into_owned())
}

pub async fn read_poem_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    // Check the type before touching the disk.
    if !is_plain_text(content_type_for(&file_name)) {
        return accept_upload(&file_name, None, &[]);
    }

    let bytes = tokio::fs::read(path).await?;
    accept_upload(&file_name, None, &bytes)
}
