use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Extensions the ingestion endpoint accepts. Only the file name is checked;
/// content validation belongs to the loyalty API.
pub const ALLOWED_EXTENSIONS: [&str; 3] = [".csv", ".xlsx", ".xls"];

/// Summary the loyalty API returns after ingesting an uploaded file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UploadResult {
    #[serde(rename = "registros_procesados")]
    pub processed_records: u64,
    #[serde(rename = "clientes_actualizados")]
    pub updated_customers: u64,
    #[serde(rename = "usuarios_actualizados", default)]
    pub updated_users: u64,
    /// Row-level warnings (`errores` on the wire); the upload still succeeded.
    #[serde(rename = "errores", default)]
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejection {
    #[error("Nombre de archivo no proporcionado")]
    MissingFileName,
    #[error("Formato no válido. Solo se permiten archivos CSV o Excel (.xlsx, .xls)")]
    UnsupportedExtension,
}

/// Checks `file_name` against [`ALLOWED_EXTENSIONS`], case-insensitively, and
/// returns the matched extension.
pub fn check_file_name(file_name: &str) -> Result<&'static str, UploadRejection> {
    if file_name.trim().is_empty() {
        return Err(UploadRejection::MissingFileName);
    }
    let lower = file_name.to_lowercase();
    let extension = lower
        .rfind('.')
        .map(|idx| &lower[idx..])
        .ok_or(UploadRejection::UnsupportedExtension)?;

    ALLOWED_EXTENSIONS
        .into_iter()
        .find(|allowed| *allowed == extension)
        .ok_or(UploadRejection::UnsupportedExtension)
}
