use serde::{Deserialize, Serialize};

/// Column headers the ingestion endpoint expects, in order.
///
/// This is a contract with the loyalty API; the dashboard only displays it on
/// the upload page and never parses uploaded files itself.
pub const UPLOAD_COLUMNS: [&str; 14] = [
    "Tienda",
    "Marca",
    "Fecha",
    "Canal de Venta",
    "Cedula",
    "Nombre o Razon Social",
    "Telefono",
    "Correo Electronico",
    "Articulo",
    "Descripcion Articulo",
    "Cantidad",
    "Divisas de Venta",
    "Categoria",
    "Numero",
];

/// A fully ingested sales line, one per uploaded row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "tienda")]
    pub store: String,
    #[serde(rename = "marca")]
    pub brand: String,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "canal_venta")]
    pub sales_channel: String,
    #[serde(rename = "cedula")]
    pub national_id: String,
    #[serde(rename = "nombre_razon_social")]
    pub customer_name: String,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(rename = "correo_electronico", default)]
    pub email: Option<String>,
    #[serde(rename = "articulo")]
    pub item_code: String,
    #[serde(rename = "descripcion_articulo")]
    pub item_description: String,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
    #[serde(rename = "divisas_venta")]
    pub sale_amount: f64,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "numero")]
    pub document_number: String,
    #[serde(rename = "puntos_generados", default)]
    pub points: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_contract_is_fourteen_wide() {
        assert_eq!(UPLOAD_COLUMNS.len(), 14);
        assert_eq!(UPLOAD_COLUMNS[4], "Cedula");
        assert_eq!(UPLOAD_COLUMNS[13], "Numero");
    }

    #[test]
    fn decodes_ingested_transaction() {
        let body = r#"{
            "tienda": "Sambil", "marca": "Logitech", "fecha": "2024-02-03T11:00:00",
            "canal_venta": "Tienda", "cedula": "V-1", "nombre_razon_social": "Ana",
            "articulo": "LG-001", "descripcion_articulo": "Mouse inalámbrico",
            "cantidad": 2, "divisas_venta": 50.0, "categoria": "Periféricos",
            "numero": "F-0001", "puntos_generados": 50
        }"#;
        let tx: Transaction = serde_json::from_str(body).unwrap();
        assert_eq!(tx.email, None);
        assert_eq!(tx.points, 50);
        assert_eq!(tx.document_number, "F-0001");
    }
}
