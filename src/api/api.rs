use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse, Responder, Result};
use serde::Serialize;

use crate::error::TodoError;
use crate::models::todo::{TodoListResponse, TodoRequest, TodoResponse};
use crate::repository::database::SqliteTodoRepository;
use crate::service::todo_service::TodoService;

/// Concrete service type wired at process start.
pub type AppService = TodoService<SqliteTodoRepository>;

#[derive(Serialize)]
pub struct Response {
    pub message: String,
}

#[get("/todos")]
pub async fn get_todos(service: web::Data<AppService>) -> Result<HttpResponse, TodoError> {
    let todos = service.find_all()?;
    Ok(HttpResponse::Ok().json(TodoListResponse::from(todos)))
}

#[get("/todos/{id}")]
pub async fn get_todo_by_id(
    service: web::Data<AppService>,
    id: web::Path<i32>,
) -> Result<HttpResponse, TodoError> {
    let todo = service.find_by_id(id.into_inner())?;
    Ok(HttpResponse::Ok().json(TodoResponse::from(todo)))
}

#[post("/todos")]
pub async fn create_todo(
    service: web::Data<AppService>,
    request: web::Json<TodoRequest>,
) -> Result<HttpResponse, TodoError> {
    let todo = service.create(request.into_inner())?;
    Ok(HttpResponse::Ok().json(TodoResponse::from(todo)))
}

#[put("/todos/{id}")]
pub async fn update_todo_by_id(
    service: web::Data<AppService>,
    id: web::Path<i32>,
    request: web::Json<TodoRequest>,
) -> Result<HttpResponse, TodoError> {
    let todo = service.update(id.into_inner(), request.into_inner())?;
    Ok(HttpResponse::Ok().json(TodoResponse::from(todo)))
}

#[delete("/todos/{id}")]
pub async fn delete_todo_by_id(
    service: web::Data<AppService>,
    id: web::Path<i32>,
) -> Result<HttpResponse, TodoError> {
    service.delete(id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/health")]
pub async fn healthcheck() -> impl Responder {
    let response = Response {
        message: "Everything is working fine".to_string(),
    };
    HttpResponse::Ok().json(response)
}

pub async fn not_found() -> Result<HttpResponse> {
    let response = Response {
        message: "Resource not found".to_string(),
    };
    Ok(HttpResponse::NotFound().json(response))
}

/// Malformed or missing JSON bodies surface as HTTP 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err: actix_web::error::JsonPayloadError, _req: &HttpRequest| {
            TodoError::InvalidArgument(err.to_string()).into()
        })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .service(get_todos)
            .service(get_todo_by_id)
            .service(create_todo)
            .service(update_todo_by_id)
            .service(delete_todo_by_id),
    );
}
