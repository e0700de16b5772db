use crate::comment::model::{CreateCommentRequest, DeleteMatchingQuery};
use crate::post::post_service::PostService;
use crate::utils::error::CustomError;
use crate::utils::helpers::parse_id;
use actix_web::{HttpResponse, web};
use serde_json::json;

/// Add a comment to a post
/// POST /posts/{post_id}/comments
pub async fn create_comment(
    post_service: web::Data<PostService>,
    path: web::Path<String>,
    body: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse, CustomError> {
    let post_id = parse_id(&path.into_inner(), "post")?;
    let comment = post_service.add_comment(post_id, &body.content).await?;

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Comment created successfully",
        "httpStatusCode": 201,
        "comment": comment
    })))
}

/// Delete one comment by id
/// DELETE /posts/{post_id}/comments/{comment_id}
pub async fn delete_comment(
    post_service: web::Data<PostService>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, CustomError> {
    let (post_id, comment_id) = path.into_inner();
    let post_id = parse_id(&post_id, "post")?;
    let comment_id = parse_id(&comment_id, "comment")?;

    let deleted = post_service.delete_comment(post_id, comment_id).await?;
    let message = if deleted {
        "Comment deleted successfully"
    } else {
        "Comment already gone"
    };

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": message,
        "httpStatusCode": 200,
        "deleted": deleted
    })))
}

/// Delete every comment with the given text
/// DELETE /posts/{post_id}/comments?content=...
pub async fn delete_matching_comments(
    post_service: web::Data<PostService>,
    path: web::Path<String>,
    query: web::Query<DeleteMatchingQuery>,
) -> Result<HttpResponse, CustomError> {
    let post_id = parse_id(&path.into_inner(), "post")?;
    let removed = post_service
        .delete_comments_matching(post_id, &query.content)
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Matching comments deleted",
        "httpStatusCode": 200,
        "deleted": removed
    })))
}

/// POST /posts/{post_id}/comments/{comment_id}/like
pub async fn like_comment(
    post_service: web::Data<PostService>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, CustomError> {
    let (post_id, comment_id) = path.into_inner();
    let post_id = parse_id(&post_id, "post")?;
    let comment_id = parse_id(&comment_id, "comment")?;

    let comment = post_service.like_comment(post_id, comment_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Comment liked",
        "httpStatusCode": 200,
        "comment": comment
    })))
}
