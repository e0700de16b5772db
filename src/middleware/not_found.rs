use actix_web::http::StatusCode;
use actix_web::middleware::ErrorHandlerResponse;
use actix_web::{HttpResponse, Result, dev::ServiceResponse};
use serde_json::json;

use crate::utils::helpers::service_name;

/// Replace the empty body actix sends for unmatched routes. 404s raised by
/// handlers already carry a JSON body and pass through untouched.
pub fn not_found<B>(res: ServiceResponse<B>) -> Result<ErrorHandlerResponse<B>> {
    if res.response().error().is_some() {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let new_response = HttpResponse::build(StatusCode::NOT_FOUND).json(json!({
        "success": false,
        "message": "Route does not exist",
        "httpStatusCode": StatusCode::NOT_FOUND.as_u16(),
        "error": "NOT_FOUND_ERROR",
        "service": service_name(),
    }));
    let (req, _) = res.into_parts();
    let res = ServiceResponse::new(req, new_response.map_into_right_body());

    Ok(ErrorHandlerResponse::Response(res))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::post_index::post_routes;
    use crate::config::index::default_viewer;
    use crate::post::post_seed::load_seed;
    use crate::post::post_service::PostService;
    use actix_web::middleware::ErrorHandlers;
    use actix_web::{App, test, web};
    use serde_json::Value;

    #[actix_web::test]
    async fn unknown_routes_get_json_but_handler_404s_keep_their_message() {
        let viewer = default_viewer().author;
        let posts = web::Data::new(PostService::from_seed(load_seed(None).unwrap(), viewer));
        let app = test::init_service(
            App::new()
                .app_data(posts)
                .configure(post_routes)
                .wrap(ErrorHandlers::new().handler(StatusCode::NOT_FOUND, not_found)),
        )
        .await;

        let req = test::TestRequest::get().uri("/nowhere").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "Route does not exist");

        let req = test::TestRequest::get()
            .uri(&format!("/posts/{}", uuid::Uuid::new_v4()))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "Not Found: Post not found");
    }
}
