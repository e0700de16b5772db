use crate::comment::model::UpdateDraftRequest;
use crate::post::post_service::PostService;
use crate::utils::error::CustomError;
use crate::utils::helpers::{parse_id, service_name};
use actix_web::{HttpResponse, web};
use serde_json::json;

/// GET /posts
pub async fn list_posts(post_service: web::Data<PostService>) -> HttpResponse {
    let posts = post_service.list_posts().await;

    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Posts fetched successfully",
        "httpStatusCode": 200,
        "service": service_name(),
        "count": posts.len(),
        "data": posts
    }))
}

/// GET /posts/{post_id}
pub async fn get_post(
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let post_id = parse_id(&post_id.into_inner(), "post")?;
    let post = post_service.get_post(post_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Post fetched successfully",
        "httpStatusCode": 200,
        "service": service_name(),
        "post": post
    })))
}

/// PUT /posts/{post_id}/draft
pub async fn update_draft(
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
    body: web::Json<UpdateDraftRequest>,
) -> Result<HttpResponse, CustomError> {
    let post_id = parse_id(&post_id.into_inner(), "post")?;
    let post = post_service
        .update_draft(post_id, body.into_inner().text)
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Draft updated successfully",
        "httpStatusCode": 200,
        "draft": post.draft(),
        "state": post.draft().state(),
        "canSubmit": post.draft().can_submit()
    })))
}

/// POST /posts/{post_id}/draft/submit
pub async fn submit_draft(
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let post_id = parse_id(&post_id.into_inner(), "post")?;
    let comment = post_service.submit_draft(post_id).await?;

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Comment created successfully",
        "httpStatusCode": 201,
        "comment": comment
    })))
}
