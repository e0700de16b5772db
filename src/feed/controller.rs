use actix_web::http::header;
use actix_web::{HttpResponse, web};
use uuid::Uuid;

use crate::comment::model::CommentForm;
use crate::config::index::ViewerProfile;
use crate::feed::view::render_feed_page;
use crate::post::post_service::PostService;
use crate::utils::error::CustomError;
use crate::utils::helpers::parse_id;

fn back_to_post(post_id: Uuid) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, format!("/#post-{}", post_id)))
        .finish()
}

/// GET /
pub async fn show_feed(
    post_service: web::Data<PostService>,
    viewer: web::Data<ViewerProfile>,
) -> HttpResponse {
    let posts = post_service.list_posts().await;
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_feed_page(&viewer, &posts))
}

/// POST /feed/posts/{post_id}/comments
pub async fn submit_comment_form(
    post_service: web::Data<PostService>,
    path: web::Path<String>,
    form: web::Form<CommentForm>,
) -> Result<HttpResponse, CustomError> {
    let post_id = parse_id(&path.into_inner(), "post")?;

    match post_service.add_comment(post_id, &form.comment).await {
        // The rejected draft is kept on the post and the page shows the hint
        Ok(_) | Err(CustomError::ValidationError(_)) => Ok(back_to_post(post_id)),
        Err(e) => Err(e),
    }
}

/// POST /feed/posts/{post_id}/comments/{comment_id}/like
pub async fn like_comment_form(
    post_service: web::Data<PostService>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, CustomError> {
    let (post_id, comment_id) = path.into_inner();
    let post_id = parse_id(&post_id, "post")?;
    let comment_id = parse_id(&comment_id, "comment")?;

    post_service.get_post(post_id).await?;

    // A comment deleted from another tab has nothing left to like
    match post_service.like_comment(post_id, comment_id).await {
        Ok(_) | Err(CustomError::NotFoundError(_)) => Ok(back_to_post(post_id)),
        Err(e) => Err(e),
    }
}

/// POST /feed/posts/{post_id}/comments/{comment_id}/delete
pub async fn delete_comment_form(
    post_service: web::Data<PostService>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, CustomError> {
    let (post_id, comment_id) = path.into_inner();
    let post_id = parse_id(&post_id, "post")?;
    let comment_id = parse_id(&comment_id, "comment")?;

    post_service.delete_comment(post_id, comment_id).await?;
    Ok(back_to_post(post_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::index::default_viewer;
    use crate::feed::index::feed_routes;
    use crate::post::post_seed::load_seed;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};

    fn state() -> (web::Data<PostService>, web::Data<ViewerProfile>) {
        let viewer = default_viewer();
        let service = PostService::from_seed(load_seed(None).unwrap(), viewer.author.clone());
        (web::Data::new(service), web::Data::new(viewer))
    }

    #[actix_web::test]
    async fn feed_page_lists_seed_posts() {
        let (posts, viewer) = state();
        let app = test::init_service(
            App::new()
                .app_data(posts.clone())
                .app_data(viewer.clone())
                .configure(feed_routes),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = test::read_body(res).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("Bruno Padilha"));
        assert!(html.contains("Vitor Padilha"));
        assert_eq!(html.matches("Post muito bacana").count(), 2);
    }

    #[actix_web::test]
    async fn form_submit_appends_and_redirects() {
        let (posts, viewer) = state();
        let post_id = posts.list_posts().await[0].id();
        let app = test::init_service(
            App::new()
                .app_data(posts.clone())
                .app_data(viewer.clone())
                .configure(feed_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/feed/posts/{}/comments", post_id))
            .set_form([("comment", "Top!")])
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            res.headers().get(header::LOCATION).unwrap().to_str().unwrap(),
            format!("/#post-{}", post_id)
        );

        let post = posts.get_post(post_id).await.unwrap();
        let contents: Vec<_> = post.comments().iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, vec!["Post muito bacana", "Top!"]);
    }

    #[actix_web::test]
    async fn blank_form_submit_shows_hint_instead_of_failing() {
        let (posts, viewer) = state();
        let post_id = posts.list_posts().await[0].id();
        let app = test::init_service(
            App::new()
                .app_data(posts.clone())
                .app_data(viewer.clone())
                .configure(feed_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/feed/posts/{}/comments", post_id))
            .set_form([("comment", "   ")])
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(posts.get_post(post_id).await.unwrap().comments().len(), 1);

        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let body = test::read_body(res).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("O comentário não pode ser vazio"));
    }

    #[actix_web::test]
    async fn like_and_delete_forms() {
        let (posts, viewer) = state();
        let post = posts.list_posts().await.remove(0);
        let comment_id = post.comments()[0].id;
        let app = test::init_service(
            App::new()
                .app_data(posts.clone())
                .app_data(viewer.clone())
                .configure(feed_routes),
        )
        .await;

        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri(&format!("/feed/posts/{}/comments/{}/like", post.id(), comment_id))
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::SEE_OTHER);
        }
        let liked = posts.get_post(post.id()).await.unwrap();
        assert_eq!(liked.comments()[0].like_count, 2);

        let req = test::TestRequest::post()
            .uri(&format!("/feed/posts/{}/comments/{}/delete", post.id(), comment_id))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert!(posts.get_post(post.id()).await.unwrap().comments().is_empty());
    }
}
