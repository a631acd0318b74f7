use actix_web::{web, App, HttpServer};

use todo_rest_api::api;
use todo_rest_api::config::Config;
use todo_rest_api::repository::database::SqliteTodoRepository;
use todo_rest_api::service::todo_service::TodoService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = Config::from_env();
    let repository = SqliteTodoRepository::new(&config.database_url)
        .expect("Failed to initialize the database");
    let service = TodoService::new(repository);
    let app_data = web::Data::new(service);

    log::info!("starting server at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(app_data.clone())
            .configure(api::api::config)
            .service(api::api::healthcheck)
            .default_service(web::route().to(api::api::not_found))
            .wrap(actix_web::middleware::Logger::default())
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
