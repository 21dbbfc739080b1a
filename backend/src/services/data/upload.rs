use crate::config::Config;
use crate::error::GatewayError;
use crate::upstream::Upstream;
use actix_multipart::Multipart;
use actix_web::web::{self, Bytes, BytesMut};
use actix_web::HttpResponse;
use common::model::{check_file_name, UploadResult};
use futures_util::StreamExt;
use log::info;

/// `POST /api/data/upload`
pub async fn process(
    upstream: web::Data<Upstream>,
    config: web::Data<Config>,
    payload: Multipart,
) -> Result<HttpResponse, GatewayError> {
    let (file_name, data) = read_file(payload, &config).await?;
    info!("forwarding upload {} ({} bytes)", file_name, data.len());

    let path = upstream.paths().upload();
    upstream
        .post_file(&path, &file_name, data)
        .await?
        .into_typed::<UploadResult>()
}

/// Reads the first `file` part; other parts are skipped.
async fn read_file(
    mut payload: Multipart,
    config: &Config,
) -> Result<(String, Bytes), GatewayError> {
    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| GatewayError::Multipart(e.to_string()))?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));
        if name.as_deref() != Some("file") {
            continue;
        }

        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
            .unwrap_or_default();
        check_file_name(&file_name).map_err(|e| GatewayError::BadRequest(e.to_string()))?;

        let mut data = BytesMut::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| GatewayError::Multipart(e.to_string()))?;
            if data.len() + chunk.len() > config.upload_limit_bytes {
                return Err(GatewayError::PayloadTooLarge {
                    limit_mb: config.upload_limit_mb(),
                });
            }
            data.extend_from_slice(&chunk);
        }

        if data.is_empty() {
            return Err(GatewayError::BadRequest("El archivo está vacío".to_string()));
        }
        return Ok((file_name, data.freeze()));
    }

    Err(GatewayError::BadRequest(
        "No se recibió ningún archivo".to_string(),
    ))
}
