//! HTTP endpoints for selector administration.
//!
//! GET    /selector          - paged listing (`pluginId`, `currentPage`, `pageSize`)
//! GET    /selector/{id}     - selector detail
//! POST   /selector          - create a selector
//! PUT    /selector/{id}     - update the selector addressed by the path
//! DELETE /selector/batch    - delete the selectors listed in the body
//!
//! Every response is `200 OK` with an envelope body; failures are only visible
//! through its `status` field.

use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, put, web};

use crate::repository::DieselRepository;
use crate::services::selector as selector_service;

#[get("/selector")]
pub async fn query_selectors(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    HttpResponse::Ok().json(selector_service::query_selectors(
        repo.get_ref(),
        req.query_string(),
    ))
}

#[get("/selector/{id}")]
pub async fn detail_selector(
    id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    HttpResponse::Ok().json(selector_service::detail_selector(repo.get_ref(), &id))
}

#[post("/selector")]
pub async fn create_selector(
    repo: web::Data<DieselRepository>,
    body: web::Bytes,
) -> impl Responder {
    HttpResponse::Ok().json(selector_service::create_selector(
        repo.get_ref(),
        body.as_ref(),
    ))
}

#[put("/selector/{id}")]
pub async fn update_selector(
    id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    body: web::Bytes,
) -> impl Responder {
    HttpResponse::Ok().json(selector_service::update_selector(
        repo.get_ref(),
        &id,
        body.as_ref(),
    ))
}

#[delete("/selector/batch")]
pub async fn delete_selectors(
    repo: web::Data<DieselRepository>,
    body: web::Bytes,
) -> impl Responder {
    HttpResponse::Ok().json(selector_service::delete_selectors(
        repo.get_ref(),
        body.as_ref(),
    ))
}

/// Registers every selector endpoint on the given service config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(query_selectors)
        .service(detail_selector)
        .service(create_selector)
        .service(update_selector)
        .service(delete_selectors);
}
