use super::controller::{create_comment, delete_comment, delete_matching_comments, like_comment};
use actix_web::web;

pub fn comment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/posts/{post_id}/comments")
            .route("", web::post().to(create_comment))
            .route("", web::delete().to(delete_matching_comments))
            .route("/{comment_id}", web::delete().to(delete_comment))
            .route("/{comment_id}/like", web::post().to(like_comment)),
    );
}
