use actix_web::{web, HttpResponse, Responder};
use std::collections::BTreeMap;

use crate::models::{HealthResponse, ServiceInfo};

pub const SERVICE_NAME: &str = "SwarmFill AI Services";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health_check));
}

/// Health check endpoint
///
/// GET /health
async fn health_check() -> impl Responder {
    let dependencies = BTreeMap::from([
        ("cors".to_string(), true),
        ("planning_routes".to_string(), true),
    ]);

    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        dependencies,
    })
}

/// Service description and endpoint map
///
/// GET /
async fn root() -> impl Responder {
    let endpoints = BTreeMap::from([
        ("health".to_string(), "/health".to_string()),
        ("warehouse_optimization".to_string(), "/api/warehouse".to_string()),
        ("truck_loading".to_string(), "/api/truck".to_string()),
        ("route_optimization".to_string(), "/api/route".to_string()),
        ("demand_prediction".to_string(), "/api/demand".to_string()),
    ]);

    HttpResponse::Ok().json(ServiceInfo {
        message: format!("{} API", SERVICE_NAME),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "Fully operational".to_string(),
        endpoints,
    })
}
