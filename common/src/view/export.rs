//! CSV export of the rows a list view currently shows.
//!
//! Records are written with the `csv` crate, so fields containing the
//! delimiter, quotes or line breaks are quoted. Lines end with `\n`.

use crate::model::{PointsSummary, UserRecord};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv buffer: {0}")]
    Buffer(String),
    #[error("csv output is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// A row type with a fixed export layout.
pub trait CsvExport {
    /// Header row, in column order.
    const HEADERS: &'static [&'static str];
    /// File name prefix; the export date is appended.
    const FILE_PREFIX: &'static str;

    fn csv_record(&self) -> Vec<String>;
}

impl CsvExport for UserRecord {
    const HEADERS: &'static [&'static str] = &[
        "Cédula",
        "Nombre",
        "Teléfono",
        "Correo",
        "Nivel",
        "Puntos Totales",
        "Puntos Vigentes",
        "Total Gastado",
        "Compras",
    ];
    const FILE_PREFIX: &'static str = "usuarios_club_soytechno";

    fn csv_record(&self) -> Vec<String> {
        vec![
            self.national_id.clone(),
            self.name.clone(),
            self.phone.clone().unwrap_or_default(),
            self.email.clone().unwrap_or_default(),
            self.tier.to_string(),
            self.total_points.to_string(),
            self.valid_points.to_string(),
            self.total_spent.to_string(),
            self.purchase_count.to_string(),
        ]
    }
}

impl CsvExport for PointsSummary {
    const HEADERS: &'static [&'static str] = &[
        "Cédula",
        "Nombre",
        "Nivel",
        "Puntos Vigentes",
        "Puntos Canje",
        "$ Canjeables",
    ];
    const FILE_PREFIX: &'static str = "clientes_listos_canje";

    fn csv_record(&self) -> Vec<String> {
        vec![
            self.national_id.clone(),
            self.name.clone(),
            self.tier.to_string(),
            self.valid_points.to_string(),
            self.ready_points.to_string(),
            self.redeemable_amount.to_string(),
        ]
    }
}

/// Serializes `rows` under `R::HEADERS`.
pub fn export_csv<'a, R, I>(rows: I) -> Result<String, ExportError>
where
    R: CsvExport + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(R::HEADERS)?;
    for row in rows {
        writer.write_record(row.csv_record())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// `<prefix>_<YYYY-MM-DD>.csv`, with `iso_date` taken from the browser clock.
pub fn export_file_name<R: CsvExport>(iso_date: &str) -> String {
    format!("{}_{}.csv", R::FILE_PREFIX, iso_date)
}
