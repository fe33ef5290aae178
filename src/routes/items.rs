use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Deserialize;

use crate::forms::items::{CreateItemForm, RecordPriceForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::items::{
    create_item as create_item_service, get_item_by_id as get_item_by_id_service,
    get_item_by_url as get_item_by_url_service, record_item_price as record_item_price_service,
};

#[derive(Deserialize)]
struct FindItemQuery {
    url: String,
}

#[post("/items")]
pub async fn create_item(
    form: web::Json<CreateItemForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match create_item_service(form.into_inner(), repo.get_ref()) {
        Ok(item) => HttpResponse::Created().json(item),
        Err(err) => error_response(err),
    }
}

#[get("/items")]
pub async fn find_item(
    params: web::Query<FindItemQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_item_by_url_service(&params.url, repo.get_ref()) {
        Ok(item) => HttpResponse::Ok().json(item),
        Err(err) => error_response(err),
    }
}

#[get("/items/{item_id}")]
pub async fn show_item(
    item_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_item_by_id_service(item_id.into_inner(), repo.get_ref()) {
        Ok(item) => HttpResponse::Ok().json(item),
        Err(err) => error_response(err),
    }
}

#[post("/items/{item_id}/prices")]
pub async fn record_price(
    item_id: web::Path<i32>,
    form: web::Json<RecordPriceForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match record_item_price_service(item_id.into_inner(), form.into_inner(), repo.get_ref()) {
        Ok(price) => HttpResponse::Created().json(price),
        Err(err) => error_response(err),
    }
}
