use crate::error::GatewayError;
use crate::services::validated;
use crate::upstream::Upstream;
use actix_web::{web, HttpResponse};
use common::model::ReadyUsersPage;
use common::requests::PageQuery;

/// `GET /api/users/listos-canje/?page=&limit=`
///
/// The dashboard overview reads this page at the maximum size to count
/// customers ready to redeem and sum their redeemable dollars.
pub async fn process(
    upstream: web::Data<Upstream>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, GatewayError> {
    let path = upstream.paths().ready_users(validated(query)?);
    upstream.get(&path).await?.into_typed::<ReadyUsersPage>()
}
