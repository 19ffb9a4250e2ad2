// Planning service exports
pub mod demand;
pub mod loading;
pub mod routing;
pub mod warehouse;

pub use demand::{forecast_demand, predict_demand};
pub use loading::{plan_loading, validate_load};
pub use routing::{plan_route, realtime_update};
pub use warehouse::{analyze_layout, optimize_layout};
