mod db;
mod errors;
mod handlers;
mod models;
mod repository;
mod utils;

use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::env;
use std::sync::Arc;

use handlers::AppState;
use repository::{EmployeeStore, PgEmployeeStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    let pool = db::init(&database_url)
        .await
        .expect("failed to connect to the database");

    let store: Arc<dyn EmployeeStore> = Arc::new(PgEmployeeStore::new(pool.clone()));

    info!("starting server at {bind_addr}");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(AppState {
                store: store.clone(),
            }))
            .configure(handlers::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    db::teardown(pool).await;
    Ok(())
}
