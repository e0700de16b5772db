//! HTML rendering for the feed page. Every function here is a pure
//! mapping from state to markup.

use crate::comment::model::Comment;
use crate::config::index::ViewerProfile;
use crate::post::post_model::ContentBlock;
use crate::post::post_state::PostState;
use crate::utils::date_format::{format_published, relative_to_now};
use crate::utils::helpers::escape_html;

const TOGGLE_SUBMIT_SCRIPT: &str = r#"<script>
document.querySelectorAll("form.comment-form").forEach(function (form) {
  var input = form.querySelector("textarea");
  var button = form.querySelector("button[type=submit]");
  input.addEventListener("input", function () {
    input.setCustomValidity("");
    button.disabled = input.value.trim() === "";
  });
});
</script>"#;

pub fn render_avatar(src: &str, has_border: bool) -> String {
    let class = if has_border { "avatar avatar-bordered" } else { "avatar" };
    format!(r#"<img class="{}" src="{}" alt="">"#, class, escape_html(src))
}

pub fn render_header() -> String {
    r#"<header class="header"><strong>Ignite Feed</strong></header>"#.to_string()
}

pub fn render_sidebar(viewer: &ViewerProfile) -> String {
    format!(
        concat!(
            r#"<aside class="sidebar">"#,
            r#"<img class="cover" src="{cover}" alt="">"#,
            r#"<div class="profile">{avatar}"#,
            "<strong>{name}</strong><span>{role}</span></div>",
            r##"<footer><a href="#">Editar seu perfil</a></footer>"##,
            "</aside>"
        ),
        cover = escape_html(&viewer.cover_url),
        avatar = render_avatar(&viewer.author.avatar_url, true),
        name = escape_html(&viewer.author.name),
        role = escape_html(&viewer.author.role),
    )
}

fn render_content_block(block: &ContentBlock) -> String {
    match block {
        ContentBlock::Paragraph(text) => format!("<p>{}</p>", escape_html(text)),
        ContentBlock::Link(text) => {
            format!(r##"<p><a href="#">{}</a></p>"##, escape_html(text))
        }
    }
}

pub fn render_comment(post_id: &str, comment: &Comment) -> String {
    let base = format!("/feed/posts/{}/comments/{}", post_id, comment.id);
    format!(
        concat!(
            r#"<div class="comment" id="comment-{id}">"#,
            "{avatar}",
            r#"<div class="comment-box"><div class="comment-content"><header>"#,
            r#"<div class="author-and-time"><strong>{author}</strong>"#,
            r#"<time title="{title}" datetime="{datetime}">{relative}</time></div>"#,
            r#"<form method="post" action="{base}/delete">"#,
            r#"<button type="submit" title="Deletar comentário">Deletar</button></form>"#,
            "</header><p>{content}</p></div>",
            r#"<footer><form method="post" action="{base}/like">"#,
            r#"<button type="submit" title="Curtir comentário">"#,
            "Aplaudir <span>{likes}</span></button>",
            "</form></footer></div></div>"
        ),
        id = comment.id,
        avatar = render_avatar(&comment.author.avatar_url, false),
        author = escape_html(&comment.author.name),
        title = escape_html(&format_published(&comment.created_at)),
        datetime = comment.created_at.to_rfc3339(),
        relative = escape_html(&relative_to_now(&comment.created_at)),
        base = base,
        content = escape_html(&comment.content),
        likes = comment.like_count,
    )
}

pub fn render_post(state: &PostState) -> String {
    let post = &state.post;
    let post_id = post.id.to_string();
    let mut html = format!(
        concat!(
            r#"<article class="post" id="post-{id}">"#,
            r#"<header><div class="author">{avatar}"#,
            r#"<div class="author-info"><strong>{name}</strong>"#,
            "<span>{role}</span></div></div>",
            r#"<time title="{title}" datetime="{datetime}">{relative}</time></header>"#,
            r#"<div class="content">"#
        ),
        id = post_id,
        avatar = render_avatar(&post.author.avatar_url, true),
        name = escape_html(&post.author.name),
        role = escape_html(&post.author.role),
        title = escape_html(&format_published(&post.published_at)),
        datetime = post.published_at.to_rfc3339(),
        relative = escape_html(&relative_to_now(&post.published_at)),
    );

    for block in &post.content {
        html.push_str(&render_content_block(block));
    }
    if !post.tags.is_empty() {
        html.push_str("<p>");
        let tags: Vec<String> = post
            .tags
            .iter()
            .map(|tag| format!(r##"<a href="#">#{}</a>"##, escape_html(tag)))
            .collect();
        html.push_str(&tags.join(" "));
        html.push_str("</p>");
    }
    html.push_str("</div>");

    let draft = state.draft();
    let hint = draft
        .hint()
        .map(|msg| {
            format!(
                r#"<p class="validation-hint" role="alert">{}</p>"#,
                escape_html(msg)
            )
        })
        .unwrap_or_default();
    html.push_str(&format!(
        concat!(
            r#"<form class="comment-form" method="post" action="/feed/posts/{id}/comments">"#,
            "<strong>Deixe seu feedback</strong>",
            r#"<textarea name="comment" placeholder="Deixe um comentário" required>"#,
            "{text}</textarea>",
            "{hint}",
            r#"<footer><button type="submit"{disabled}>Publicar</button></footer></form>"#
        ),
        id = post_id,
        text = escape_html(&draft.text),
        hint = hint,
        disabled = if draft.can_submit() { "" } else { " disabled" },
    ));

    html.push_str(r#"<div class="comment-list">"#);
    for comment in state.comments() {
        html.push_str(&render_comment(&post_id, comment));
    }
    html.push_str("</div></article>");
    html
}

/// Whole page: header, sidebar and posts in feed order
pub fn render_feed_page(viewer: &ViewerProfile, posts: &[PostState]) -> String {
    let body: String = posts.iter().map(render_post).collect();
    format!(
        concat!(
            "<!DOCTYPE html>",
            r#"<html lang="pt-BR"><head><meta charset="utf-8">"#,
            "<title>Ignite Feed</title></head>",
            "<body>{header}",
            r#"<div class="wrapper">{sidebar}<main>{body}</main></div>"#,
            "{script}</body></html>"
        ),
        header = render_header(),
        sidebar = render_sidebar(viewer),
        body = body,
        script = TOGGLE_SUBMIT_SCRIPT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::index::default_viewer;
    use crate::post::post_model::{Author, Post};
    use chrono::DateTime;
    use uuid::Uuid;

    fn sample_state(comments: &[&str]) -> PostState {
        let post = Post {
            id: Uuid::new_v4(),
            author: Author {
                name: "Vitor Padilha".into(),
                avatar_url: "https://github.com/maykbrito.png".into(),
                role: "Web Developer".into(),
            },
            published_at: DateTime::parse_from_rfc3339("2022-05-03T20:00:00-03:00")
                .unwrap(),
            content: vec![
                ContentBlock::Paragraph("Fala galeraa 👋".into()),
                ContentBlock::Link("jane.design/doctorcare".into()),
            ],
            tags: vec!["nlw".into()],
        };
        PostState::new(
            post,
            comments.iter().map(|c| c.to_string()).collect(),
            default_viewer().author,
        )
    }

    #[test]
    fn avatar_border_is_optional() {
        assert_eq!(
            render_avatar("a.png", true),
            r#"<img class="avatar avatar-bordered" src="a.png" alt="">"#
        );
        assert_eq!(
            render_avatar("a.png", false),
            r#"<img class="avatar" src="a.png" alt="">"#
        );
    }

    #[test]
    fn post_renders_blocks_by_kind() {
        let html = render_post(&sample_state(&[]));
        assert!(html.contains("<p>Fala galeraa 👋</p>"));
        assert!(html.contains(r##"<a href="#">jane.design/doctorcare</a>"##));
        assert!(html.contains(r##"<a href="#">#nlw</a>"##));
        assert!(html.contains(r#"title="3 de maio às 20:00h""#));
    }

    #[test]
    fn submit_is_disabled_until_draft_has_text() {
        let mut state = sample_state(&[]);
        let html = render_post(&state);
        let disabled_button = r#"<button type="submit" disabled>Publicar</button>"#;
        assert!(html.contains(disabled_button));

        state.update_draft("Top!");
        let html = render_post(&state);
        assert!(html.contains(r#"<button type="submit">Publicar</button>"#));
        assert!(html.contains(">Top!</textarea>"));
    }

    #[test]
    fn rejected_submission_shows_hint() {
        let mut state = sample_state(&[]);
        let _ = state.submit_comment("   ");
        let html = render_post(&state);
        assert!(html.contains("O comentário não pode ser vazio"));
        assert!(html.contains(" disabled>Publicar"));
    }

    #[test]
    fn comments_render_in_order_with_escaped_text_and_likes() {
        let mut state = sample_state(&["Post muito bacana", "<b>oi</b>"]);
        let id = state.comments()[0].id;
        state.like_comment(id);

        let html = render_post(&state);
        let first = html.find("Post muito bacana").unwrap();
        let second = html.find("&lt;b&gt;oi&lt;/b&gt;").unwrap();
        assert!(first < second);
        assert!(html.contains("Aplaudir <span>1</span>"));
        assert!(html.contains(&format!("/comments/{}/delete", id)));
    }

    #[test]
    fn page_composes_header_sidebar_and_posts() {
        let posts = vec![sample_state(&[]), sample_state(&[])];
        let html = render_feed_page(&default_viewer(), &posts);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Ignite Feed"));
        assert!(html.contains("Editar seu perfil"));
        assert_eq!(html.matches(r#"<article class="post""#).count(), 2);
        let first = html.find(&format!("post-{}", posts[0].id())).unwrap();
        let second = html.find(&format!("post-{}", posts[1].id())).unwrap();
        assert!(first < second);
    }
}
