//! Server-side page rendering with embedded tera templates.

pub mod view_model;

use lazy_static::lazy_static;
use tera::{Context, Tera};

use crate::error::Result;
use crate::models::Video;
use view_model::{FormView, VideoView};

lazy_static! {
    pub static ref TEMPLATES: Tera = {
        let mut tera = Tera::default();
        tera.add_raw_template("page.html", include_str!("../templates/page.html"))
            .unwrap();
        tera.add_raw_template("home.html", include_str!("../templates/home.html"))
            .unwrap();
        tera.add_raw_template("add.html", include_str!("../templates/add.html"))
            .unwrap();
        tera.add_raw_template(
            "video_list.html",
            include_str!("../templates/video_list.html"),
        )
        .unwrap();
        tera.add_raw_template(
            "video_data.html",
            include_str!("../templates/video_data.html"),
        )
        .unwrap();
        tera
    };
}

fn render_page(title: &str, inner: String) -> Result<String> {
    let mut context = Context::new();
    context.insert("title", title);
    context.insert("html", &inner);
    Ok(TEMPLATES.render("page.html", &context)?)
}

pub fn home_page(app_name: &str) -> Result<String> {
    let mut context = Context::new();
    context.insert("app_name", app_name);
    let inner = TEMPLATES.render("home.html", &context)?;
    render_page(app_name, inner)
}

/// The add form, optionally refilled with the rejected input and carrying
/// the warnings to display above it.
pub fn add_page(form: &FormView, messages: &[&str]) -> Result<String> {
    let mut context = Context::new();
    context.insert("form", form);
    context.insert("messages", messages);
    let inner = TEMPLATES.render("add.html", &context)?;
    render_page("Add video", inner)
}

pub fn video_list_page(videos: &[Video], search_term: Option<&str>) -> Result<String> {
    let views: Vec<VideoView> = videos.iter().map(VideoView::from_video).collect();
    let mut context = Context::new();
    context.insert("videos", &views);
    context.insert("search_term", &search_term.unwrap_or(""));
    let inner = TEMPLATES.render("video_list.html", &context)?;
    render_page("Video list", inner)
}

pub fn video_page(video: &Video) -> Result<String> {
    let mut context = Context::new();
    context.insert("video", &VideoView::from_video(video));
    let inner = TEMPLATES.render("video_data.html", &context)?;
    render_page(&video.name, inner)
}
