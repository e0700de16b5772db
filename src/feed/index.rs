use super::controller::{delete_comment_form, like_comment_form, show_feed, submit_comment_form};
use actix_web::web;

pub fn feed_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(show_feed));
    cfg.service(
        web::scope("/feed/posts/{post_id}/comments")
            .route("", web::post().to(submit_comment_form))
            .route("/{comment_id}/like", web::post().to(like_comment_form))
            .route("/{comment_id}/delete", web::post().to(delete_comment_form)),
    );
}
