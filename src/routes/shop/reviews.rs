use crate::forms::{Pagination, PaginationQuery};
use crate::helpers::JsonResponse;
use crate::services::ReviewQueryService;
use crate::views;
use actix_web::{get, web, Responder, Result};

#[tracing::instrument(name = "Get shop reviews.", skip(service))]
#[get("/{shop_id}/reviews")]
pub async fn list_reviews_handler(
    path: web::Path<(String,)>,
    query: web::Query<Vec<(String, String)>>,
    service: web::Data<ReviewQueryService>,
) -> Result<impl Responder> {
    // Pairs instead of a struct: a repeated key must not fail extraction.
    let pagination = Pagination::from(PaginationQuery::from_pairs(query.into_inner()));

    // No existence check: an id that cannot name a shop is an empty page.
    let shop_id = match path.into_inner().0.parse::<i32>() {
        Ok(shop_id) => shop_id,
        Err(_) => return Ok(web::Json(views::review::ReviewList { reviews: vec![] })),
    };

    service
        .list_reviews(shop_id, pagination)
        .await
        .map(web::Json)
        .map_err(|err| {
            tracing::error!("Failed to list reviews of shop {}: {}", shop_id, err);
            JsonResponse::build().internal_server_error("")
        })
}
