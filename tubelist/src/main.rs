use std::path::PathBuf;

use actix_web::{App, HttpServer, middleware::Logger, web};
use clap::Parser;
use log::info;

use tubelist::catalog::Catalog;
use tubelist::config::Config;
use tubelist::server;
use tubelist::storage::{StorageImpl, database};

#[derive(Debug, Parser)]
#[command(name = "tubelist", about = "A small web catalog for YouTube links")]
struct Args {
    /// Path to the config file, defaults to ./config.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Args::parse();
    let config = match Config::load(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            std::process::exit(1);
        }
    };

    let db_pool = match database::create_db_pool(&config.db_path).await {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Failed to open database {:?}: {e:#}", config.db_path);
            std::process::exit(1);
        }
    };

    let catalog = web::Data::new(Catalog::new(StorageImpl::new(db_pool)));

    info!("listening on http://{}", config.listen_addr);
    let bind_addr = config.listen_addr.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(catalog.clone())
            .configure(server::configure)
    })
    .bind(bind_addr.as_str())?
    .run()
    .await
}
