//! HTTP routes and handlers. Failures during create are recoverable: they
//! re-render the add form with a warning banner instead of failing the
//! request.

use actix_web::{HttpResponse, ResponseError, http::header, web};
use log::error;
use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::Error;
use crate::html_generator::{self, view_model::FormView};
use crate::models::NewVideo;
use crate::storage::StorageImpl;

pub const APP_NAME: &str = "Discipline and motivation videos";

pub const MSG_INVALID_URL: &str = "Invalid Youtube URL";
pub const MSG_DUPLICATE: &str = "You already added that video";
pub const MSG_CHECK_DATA: &str = "Please check data entered.";

pub type AppCatalog = Catalog<StorageImpl>;

impl ResponseError for Error {}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(home)))
        .service(
            web::resource("/add")
                .route(web::get().to(add_form))
                .route(web::post().to(add_video)),
        )
        .service(web::resource("/video_list").route(web::get().to(video_list)))
        .service(web::resource("/video/{id}").route(web::get().to(video_data)))
        .service(web::resource("/video/delete/{id}").route(web::post().to(delete_video)));
}

#[derive(Debug, Deserialize)]
pub struct AddForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    notes: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    search_term: Option<String>,
}

fn html_response(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

fn redirect_to_list() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/video_list"))
        .finish()
}

async fn home() -> Result<HttpResponse, Error> {
    Ok(html_response(html_generator::home_page(APP_NAME)?))
}

async fn add_form() -> Result<HttpResponse, Error> {
    Ok(html_response(html_generator::add_page(
        &FormView::default(),
        &[],
    )?))
}

async fn add_video(
    catalog: web::Data<AppCatalog>,
    form: web::Form<AddForm>,
) -> Result<HttpResponse, Error> {
    let form = form.into_inner();
    let new = NewVideo {
        name: form.name.clone(),
        url: form.url.clone(),
        notes: Some(form.notes.clone()),
    };

    let warning = match catalog.add_video(new).await {
        Ok(_) => return Ok(redirect_to_list()),
        Err(Error::InvalidUrl(_)) => Some(MSG_INVALID_URL),
        Err(Error::DuplicateVideo) => Some(MSG_DUPLICATE),
        Err(Error::InvalidInput(_)) => None,
        Err(e) => {
            // Store failures are surfaced as a warning as well; the user can
            // retry from the redisplayed form.
            error!("failed to save video: {e}");
            None
        }
    };

    let mut messages = Vec::new();
    if let Some(warning) = warning {
        messages.push(warning);
    }
    messages.push(MSG_CHECK_DATA);

    let view = FormView {
        name: form.name,
        url: form.url,
        notes: form.notes,
    };
    Ok(html_response(html_generator::add_page(&view, &messages)?))
}

async fn video_list(
    catalog: web::Data<AppCatalog>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, Error> {
    let term = query.search_term.as_deref();
    let videos = catalog.list_videos(term).await?;
    Ok(html_response(html_generator::video_list_page(
        &videos, term,
    )?))
}

async fn video_data(
    catalog: web::Data<AppCatalog>,
    path: web::Path<i64>,
) -> Result<HttpResponse, Error> {
    match catalog.video(path.into_inner()).await? {
        Some(video) => Ok(html_response(html_generator::video_page(&video)?)),
        None => Ok(not_found()),
    }
}

async fn delete_video(
    catalog: web::Data<AppCatalog>,
    path: web::Path<i64>,
) -> Result<HttpResponse, Error> {
    if catalog.delete_video(path.into_inner()).await? {
        Ok(redirect_to_list())
    } else {
        Ok(not_found())
    }
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body("<h1>Not found</h1>")
}
