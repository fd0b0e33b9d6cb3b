use crate::db::Store;
use crate::helpers::JsonResponse;
use crate::routes;
use crate::services::{PromotionSelectionService, ReviewQueryService};
use actix_cors::Cors;
use actix_web::{dev::Server, web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub async fn run(listener: TcpListener, store: Arc<dyn Store>) -> Result<Server, std::io::Error> {
    let review_service = web::Data::new(ReviewQueryService::new(store.clone()));
    let promotion_service = web::Data::new(PromotionSelectionService::new(store));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(review_service.clone())
            .app_data(promotion_service.clone())
            .configure(configure)
    })
    .listen(listener)?
    .run();

    Ok(server)
}

/// Routes and extractor configuration.
fn configure(cfg: &mut web::ServiceConfig) {
    let query_config = web::QueryConfig::default().error_handler(|err, _req| {
        JsonResponse::build().bad_request(err.to_string())
    });

    cfg.app_data(query_config)
        .service(web::scope("/health_check").service(routes::health_check))
        .service(
            web::scope("/shops")
                .service(routes::shop::top_feed_slideshow_handler)
                .service(routes::shop::list_reviews_handler),
        )
        .default_service(web::to(|| async {
            Err::<actix_web::HttpResponse, _>(JsonResponse::build().not_found(""))
        }));
}
