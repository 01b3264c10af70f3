use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use anyhow::Context;
use leasewise::config::Config;
use leasewise::core::telemetry;
use leasewise::middleware::{json_config, query_config, ErrorHandler, RateLimiter, RequestId};
use leasewise::modules::{
    self,
    vehicles::{KbbClient, NhtsaClient, VehicleCatalog, VehicleService, VehicleValuation},
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    telemetry::init_tracing(&config.app);
    config.validate().context("Configuration validation failed")?;

    tracing::info!("Starting Leasewise buy-vs-lease calculator");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let vehicle_service = web::Data::new(build_vehicle_service(&config)?);
    let rate_limiter = RateLimiter::new(config.security.rate_limit_per_minute)?;
    let cors_origin = config.security.cors_allowed_origin.clone();

    let bind_address = config.server.bind_address();
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(ErrorHandler)
            .wrap(rate_limiter.clone())
            .wrap(build_cors(cors_origin.as_deref()))
            .wrap(RequestId)
            .app_data(vehicle_service.clone())
            .app_data(json_config())
            .app_data(query_config())
            .configure(modules::configure)
            .route("/", web::get().to(index))
    });

    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    let server = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}

fn build_vehicle_service(config: &Config) -> anyhow::Result<VehicleService> {
    let upstream = &config.upstream;

    let catalog: Arc<dyn VehicleCatalog> = Arc::new(NhtsaClient::new(
        Some(upstream.catalog_base_url.clone()),
        upstream.timeout(),
    )?);

    let valuation: Option<Arc<dyn VehicleValuation>> = match &upstream.valuation.api_key {
        Some(api_key) => Some(Arc::new(KbbClient::new(
            api_key.clone(),
            Some(upstream.valuation.base_url.clone()),
            upstream.timeout(),
        )?)),
        None => {
            tracing::warn!("KBB_API_KEY not set; POST /api/vehicle-value is disabled");
            None
        }
    };

    Ok(VehicleService::new(catalog, valuation))
}

fn build_cors(allowed_origin: Option<&str>) -> Cors {
    match allowed_origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allow_any_method()
            .allow_any_header()
            .max_age(3600),
        None => Cors::permissive(),
    }
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "Leasewise buy-vs-lease calculator",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}
