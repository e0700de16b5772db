use super::post_controller::{get_post, list_posts, submit_draft, update_draft};
use actix_web::web;

pub fn post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/posts")
            .route("", web::get().to(list_posts))
            .route("/{post_id}", web::get().to(get_post))
            .route("/{post_id}/draft", web::put().to(update_draft))
            .route("/{post_id}/draft/submit", web::post().to(submit_draft)),
    );
}
