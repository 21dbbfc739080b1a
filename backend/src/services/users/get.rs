use crate::error::GatewayError;
use crate::upstream::Upstream;
use actix_web::{web, HttpResponse};
use common::model::UserRecord;

/// `GET /api/users/{cedula}`
///
/// A 404 from the loyalty API is passed through with its `detail`; the
/// lookup view turns it into "Usuario no encontrado".
pub async fn process(
    upstream: web::Data<Upstream>,
    national_id: web::Path<String>,
) -> Result<HttpResponse, GatewayError> {
    let path = upstream.paths().user(&national_id);
    upstream.get(&path).await?.into_typed::<UserRecord>()
}
