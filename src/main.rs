use actix_cors::Cors;
use actix_web::{
    middleware::{Condition, Logger},
    web::{self, Data},
    App, HttpServer,
};
use log::{error, info};
use sqlx::postgres::PgPoolOptions;
use utoipa_rapidoc::RapiDoc;

use expedition_server::{
    apidocs, artifacts, auth, curators, db::Database, equipment, expeditions, leaders, locations,
    members, options,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    options::initialize_all();
    options::print_all();

    let db_url = options::db_conn_string();

    // database
    let pool = PgPoolOptions::new()
        .max_connections(*options::DB_POOL_MAX_CONNS)
        .connect(&db_url);

    let pool = match pool.await {
        Ok(pool) => {
            info!("Connected to database successfully!");
            pool
        }
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    if *options::DB_RUN_MIGRATIONS {
        if let Err(e) = sqlx::migrate!().run(&pool).await {
            error!("Failed to run database migrations: {}", e);
            std::process::exit(1);
        }
        info!("Database schema is up to date");
    }

    let db = Data::new(Database::with_pool(pool));

    // one session registry per process, handed to the auth gate through app data
    let sessions = Data::new(auth::SessionRegistry::new());

    let oapi = apidocs::setup_oapi();

    HttpServer::new(move || {
        App::new()
            .wrap(Condition::new(*options::HANDLE_CORS, Cors::permissive()))
            .wrap(Logger::new("%{r}a %r -> %s in %Dms").log_target("http"))
            .app_data(Data::clone(&db))
            .app_data(Data::clone(&sessions))
            .service(RapiDoc::with_openapi("/api-docs/openapi.json", oapi.clone()).path("/rapidoc"))
            .service(
                web::scope("/api")
                    .configure(auth::routes::configure_app)
                    .configure(locations::routes::configure_app)
                    .configure(expeditions::routes::configure_app)
                    .configure(leaders::routes::configure_app)
                    .configure(members::routes::configure_app)
                    .configure(curators::routes::configure_app)
                    .configure(artifacts::routes::configure_app)
                    .configure(equipment::routes::configure_app),
            )
    })
    .workers(*options::NUM_WEB_WORKERS)
    .bind(options::bind_addr())?
    .run()
    .await
}
