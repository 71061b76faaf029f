//! Management API for gateway selectors.
//!
//! The `data` feature exposes the access layer (`services`) together with the
//! repository contract it delegates to; `server` adds the Actix-web binding
//! and [`run`].

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "data")]
pub mod services;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_cors::Cors;
    use actix_web::{App, HttpServer, middleware, web};

    use crate::db::establish_connection_pool;
    use crate::models::config::ServerConfig;
    use crate::repository::DieselRepository;
    use crate::routes;

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        // Establish Diesel connection pool for the SQLite database.
        let pool = establish_connection_pool(
            &server_config.database_url,
            server_config.database_pool_size,
        )
        .map_err(|e| {
            std::io::Error::other(format!("Failed to establish database connection: {e}"))
        })?;

        let repo = DieselRepository::new(pool);

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!(
            "Starting selector admin on {}:{}",
            bind_address.0,
            bind_address.1
        );

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .configure(routes::selector::configure)
                .app_data(web::Data::new(repo.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
