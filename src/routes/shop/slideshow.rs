use crate::helpers::JsonResponse;
use crate::services::PromotionSelectionService;
use actix_web::{get, web, Responder, Result};

#[tracing::instrument(name = "Get top feed slideshow.", skip(service))]
#[get("/top-feed-slideshow")]
pub async fn top_feed_slideshow_handler(
    service: web::Data<PromotionSelectionService>,
) -> Result<impl Responder> {
    service
        .get_top_feed_slideshow()
        .await
        .map(web::Json)
        .map_err(|err| {
            tracing::error!("Failed to select slideshow shops: {}", err);
            JsonResponse::build().internal_server_error("")
        })
}
