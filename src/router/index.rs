use crate::comment::index::comment_routes;
use crate::feed::index::feed_routes;
use crate::post::post_index::post_routes;
use actix_web::web;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(feed_routes);
    // Registered before `/posts` so that scope does not swallow comment paths
    cfg.configure(comment_routes);
    cfg.configure(post_routes);
}
