use crate::config::PlanningSettings;
use crate::core::{estimate_time, generate_unique_id, round_to, ContractError, Point};
use crate::models::{
    RealTimeUpdate, RealTimeUpdateRequest, RouteOptimizationRequest, RouteOptimizationResult,
    RouteStop,
};

/// Remaining distance assumed by a real-time update that does not name one
pub const DEFAULT_REMAINING_DISTANCE_KM: f64 = 50.0;

/// Build a route summary visiting the delivery points in the order given
///
/// Points are treated as planar kilometre coordinates. Stops are not
/// reordered; every leg is a straight line.
pub fn plan_route(
    request: &RouteOptimizationRequest,
    planning: &PlanningSettings,
) -> Result<RouteOptimizationResult, ContractError> {
    let avg_speed_kmh = request.avg_speed_kmh.unwrap_or(planning.avg_speed_kmh);

    let points: Vec<Point> = std::iter::once(request.start_location)
        .chain(request.delivery_points.iter().copied())
        .chain(std::iter::once(request.end_location))
        .collect();
    let last = points.len() - 1;

    let mut stops = Vec::with_capacity(points.len());
    let mut cumulative = 0.0;
    let mut previous: Option<Point> = None;

    for (i, point) in points.into_iter().enumerate() {
        let leg = previous.map(|p| p.distance_to(&point)).unwrap_or(0.0);
        cumulative += leg;

        stops.push(RouteStop {
            sequence: i + 1,
            location: point,
            leg_distance: round_to(leg, 2),
            cumulative_distance: round_to(cumulative, 2),
            estimated_arrival_minutes: estimate_time(cumulative, avg_speed_kmh)?,
            is_delivery: i > 0 && i < last,
        });
        previous = Some(point);
    }

    let fuel_consumption = round_to(cumulative * planning.fuel_litres_per_km, 1);

    Ok(RouteOptimizationResult {
        request_id: generate_unique_id(),
        optimized_route: stops,
        total_distance: round_to(cumulative, 2),
        estimated_time: estimate_time(cumulative, avg_speed_kmh)?,
        fuel_consumption,
        co2_emissions: round_to(fuel_consumption * planning.co2_kg_per_litre, 1),
        vehicle_capacity: request.vehicle_capacity,
        avg_speed_kmh,
    })
}

/// Recompute the ETA for the distance still to drive
pub fn realtime_update(
    request: &RealTimeUpdateRequest,
    planning: &PlanningSettings,
) -> Result<RealTimeUpdate, ContractError> {
    let remaining = request
        .remaining_distance_km
        .unwrap_or(DEFAULT_REMAINING_DISTANCE_KM);
    let avg_speed_kmh = request.avg_speed_kmh.unwrap_or(planning.avg_speed_kmh);
    let new_eta = estimate_time(remaining, avg_speed_kmh)?;

    let recommendations = if remaining <= 0.0 {
        vec!["Route complete, no further travel required".to_string()]
    } else {
        vec![
            format!("Remaining {:.1} km at {:.0} km/h", remaining, avg_speed_kmh),
            "Re-check traffic conditions before the next stop".to_string(),
        ]
    };

    Ok(RealTimeUpdate {
        route_updated: true,
        remaining_distance_km: remaining.max(0.0),
        new_eta,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(points: Vec<Point>) -> RouteOptimizationRequest {
        RouteOptimizationRequest {
            start_location: Point::new(0.0, 0.0),
            end_location: Point::new(6.0, 8.0),
            delivery_points: points,
            vehicle_capacity: 1000.0,
            avg_speed_kmh: None,
        }
    }

    #[test]
    fn test_plan_route_totals() {
        let req = request(vec![Point::new(3.0, 4.0)]);
        let result = plan_route(&req, &PlanningSettings::default()).unwrap();

        assert_eq!(result.optimized_route.len(), 3);
        assert_eq!(result.total_distance, 10.0);
        assert_eq!(result.estimated_time, 12.0);
        assert_eq!(result.fuel_consumption, 0.8);
        assert_eq!(result.co2_emissions, 1.8);

        let stops = &result.optimized_route;
        assert!(!stops[0].is_delivery);
        assert!(stops[1].is_delivery);
        assert!(!stops[2].is_delivery);
        assert_eq!(stops[1].leg_distance, 5.0);
        assert_eq!(stops[2].cumulative_distance, 10.0);
        assert_eq!(stops[0].estimated_arrival_minutes, 0.0);
    }

    #[test]
    fn test_plan_route_custom_speed() {
        let mut req = request(vec![]);
        req.avg_speed_kmh = Some(100.0);
        let result = plan_route(&req, &PlanningSettings::default()).unwrap();
        assert_eq!(result.estimated_time, 6.0);
        assert_eq!(result.avg_speed_kmh, 100.0);
    }

    #[test]
    fn test_realtime_update_defaults() {
        let update =
            realtime_update(&RealTimeUpdateRequest::default(), &PlanningSettings::default())
                .unwrap();
        assert_eq!(update.new_eta, 60.0);
        assert_eq!(update.remaining_distance_km, 50.0);
    }

    #[test]
    fn test_realtime_update_finished_route() {
        let req = RealTimeUpdateRequest {
            remaining_distance_km: Some(-3.0),
            avg_speed_kmh: None,
        };
        let update = realtime_update(&req, &PlanningSettings::default()).unwrap();
        assert_eq!(update.new_eta, 0.0);
        assert_eq!(update.remaining_distance_km, 0.0);
    }
}
