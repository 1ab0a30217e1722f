use actix_web::{App, HttpServer, middleware, web};
use clap::Parser;

use podium::app;
use podium::config::AppConfig;
use podium::models::presentation::lifecycle;
use podium::models::status::StatusStore;

/// Pilot your presentations with ease
#[derive(Parser, Debug)]
#[command(name = "podium", version)]
struct Args {
    /// Add a new presentation
    #[arg(short, long, value_name = "NAME")]
    new: Option<String>,

    /// Delete a presentation
    #[arg(short, long, value_name = "NAME")]
    delete: Option<String>,

    /// Run the HTTP server
    #[arg(short, long, overrides_with = "no_serve")]
    serve: bool,

    /// Do not run the HTTP server
    #[arg(long, overrides_with = "serve")]
    no_serve: bool,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenvy::dotenv();
    env_logger::init();

    let args = Args::parse();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error, {e}");
            std::process::exit(1);
        }
    };

    if let Some(name) = args.new.as_deref() {
        match lifecycle::create(&config, name) {
            Ok(images_path) => println!("{}", lifecycle::setup_instructions(&images_path)),
            Err(e) => {
                eprintln!("Error, {e}");
                std::process::exit(1);
            }
        }
    }

    if let Some(name) = args.delete.as_deref() {
        match lifecycle::delete(&config, name) {
            Ok(()) => println!("Presentation successfully deleted"),
            Err(e) => {
                eprintln!("Error, {e}");
                std::process::exit(1);
            }
        }
    }

    if !args.serve || args.no_serve {
        return Ok(());
    }

    if let Err(e) = config.require_auth_token() {
        eprintln!("Error, {e}");
        std::process::exit(1);
    }

    let secret_key = app::session_key(&config);
    let store = web::Data::new(StatusStore::from_config(&config));
    let (host, port) = config.bind_addr();
    let static_dir = config.static_dir.clone();
    let config = web::Data::new(config);

    log::info!("Starting server at http://{host}:{port}");

    HttpServer::new(move || {
        App::new()
            .wrap(app::session_middleware(secret_key.clone()))
            .wrap(app::security_headers())
            .wrap(middleware::Logger::default())
            .app_data(config.clone())
            .app_data(store.clone())
            .service(actix_files::Files::new("/static", &static_dir))
            .configure(app::routes)
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
