// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Dimensions, InventoryItem, Package, TimePeriod};
pub use requests::{
    from_payload, DemandForecastRequest, DemandPredictionRequest, LayoutAnalysisRequest,
    RealTimeUpdateRequest, RouteOptimizationRequest, TruckLoadingRequest,
    WarehouseOptimizationRequest,
};
pub use responses::{
    Bottleneck, DemandForecast, DemandPrediction, ErrorResponse, ForecastPoint, HealthResponse,
    LayoutAnalysis, LoadValidation, LoadingPlan, LoadingStep, PredictionRange, RealTimeUpdate,
    RouteOptimizationResult, RouteStop, ServiceInfo, Severity, WarehouseLayout, Zone,
};
