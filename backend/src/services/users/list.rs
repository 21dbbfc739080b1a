use crate::error::GatewayError;
use crate::services::validated;
use crate::upstream::Upstream;
use actix_web::{web, HttpResponse};
use common::model::UsersPage;
use common::requests::PageQuery;

/// `GET /api/users/?page=&limit=`
pub async fn process(
    upstream: web::Data<Upstream>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, GatewayError> {
    let path = upstream.paths().users(validated(query)?);
    upstream.get(&path).await?.into_typed::<UsersPage>()
}
