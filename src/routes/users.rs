use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Deserialize;

use crate::forms::users::{CreateUserForm, FollowItemForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::users::{
    create_user as create_user_service, follow_item as follow_item_service,
    get_user_by_email as get_user_by_email_service, get_user_by_id as get_user_by_id_service,
};

#[derive(Deserialize)]
struct FindUserQuery {
    email: String,
}

#[post("/users")]
pub async fn create_user(
    form: web::Json<CreateUserForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match create_user_service(form.into_inner(), repo.get_ref()) {
        Ok(user) => HttpResponse::Created().json(user),
        Err(err) => error_response(err),
    }
}

#[get("/users")]
pub async fn find_user(
    params: web::Query<FindUserQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_user_by_email_service(&params.email, repo.get_ref()) {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(err) => error_response(err),
    }
}

#[get("/users/{user_id}")]
pub async fn show_user(
    user_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_user_by_id_service(user_id.into_inner(), repo.get_ref()) {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(err) => error_response(err),
    }
}

#[post("/users/{user_id}/items")]
pub async fn follow_item(
    user_id: web::Path<i32>,
    form: web::Json<FollowItemForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match follow_item_service(user_id.into_inner(), form.into_inner(), repo.get_ref()) {
        Ok(entry) => HttpResponse::Created().json(entry),
        Err(err) => error_response(err),
    }
}
