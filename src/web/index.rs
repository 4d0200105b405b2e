//! Service root

use actix_web::{get, HttpResponse, Responder};

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(view_index);
}

#[get("/")]
async fn view_index() -> impl Responder {
    let site = crate::app_config::get().site;
    HttpResponse::Ok().json(serde_json::json!({
        "name": site.name,
        "description": site.description,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
