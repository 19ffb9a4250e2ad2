use crate::core::{generate_unique_id, round_to};
use crate::models::{LoadValidation, LoadingPlan, LoadingStep, Package, TruckLoadingRequest};

/// Packages heavier than this need loading equipment
const HEAVY_PACKAGE_KG: f64 = 25.0;

/// Utilization above which a load is flagged as close to the limit
const NEAR_LIMIT_PERCENT: f64 = 95.0;

/// Heaviest-first order; equal weights keep their input order
fn heaviest_first(packages: &[Package]) -> Vec<&Package> {
    let mut ordered: Vec<&Package> = packages.iter().collect();
    ordered.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    ordered
}

fn percent(part: f64, whole: f64) -> f64 {
    round_to(part / whole * 100.0, 2)
}

/// Volume share of the truck, or `None` if any package lacks dimensions
fn space_utilization<'a>(
    packages: impl IntoIterator<Item = &'a Package>,
    truck_volume: f64,
) -> Option<f64> {
    let volume = packages
        .into_iter()
        .map(Package::volume)
        .sum::<Option<f64>>()?;
    Some(percent(volume, truck_volume))
}

/// Plan a heaviest-first loading order within the weight limit
///
/// Packages that would push the load over `weight_limit` are deferred
/// instead of loaded; lighter packages later in the order may still fit.
pub fn plan_loading(request: &TruckLoadingRequest) -> LoadingPlan {
    let mut loading_sequence = Vec::with_capacity(request.packages.len());
    let mut loaded = Vec::with_capacity(request.packages.len());
    let mut deferred_packages = Vec::new();
    let mut total_weight = 0.0;

    for package in heaviest_first(&request.packages) {
        if total_weight + package.weight > request.weight_limit {
            deferred_packages.push(package.id.clone());
            continue;
        }

        total_weight += package.weight;
        loaded.push(package);
        loading_sequence.push(LoadingStep {
            step: loading_sequence.len() + 1,
            package_id: package.id.clone(),
            weight: package.weight,
            cumulative_weight: round_to(total_weight, 2),
            action: format!("Load package {}", package.id),
        });
    }

    let truck_volume = request.truck_dimensions.volume();
    let mut recommendations = vec![
        "Load heavy items first to maintain center of gravity".to_string(),
        "Secure all items with appropriate restraints".to_string(),
    ];
    if loaded.iter().any(|p| p.weight > HEAVY_PACKAGE_KG) {
        recommendations.push(format!(
            "Use loading equipment for packages over {}kg",
            HEAVY_PACKAGE_KG
        ));
    }
    if !deferred_packages.is_empty() {
        recommendations.push(format!(
            "Schedule {} deferred package(s) on another vehicle",
            deferred_packages.len()
        ));
    }

    LoadingPlan {
        request_id: generate_unique_id(),
        loading_sequence,
        deferred_packages,
        total_weight: round_to(total_weight, 2),
        weight_utilization: percent(total_weight, request.weight_limit),
        space_utilization: space_utilization(loaded.iter().copied(), truck_volume),
        truck_volume: round_to(truck_volume, 3),
        recommendations,
    }
}

/// Check whether the full set of packages fits the truck
pub fn validate_load(request: &TruckLoadingRequest) -> LoadValidation {
    let total_weight: f64 = request.packages.iter().map(|p| p.weight).sum();
    let weight_utilization = percent(total_weight, request.weight_limit);
    let space_utilization = space_utilization(&request.packages, request.truck_dimensions.volume());

    let mut warnings = Vec::new();
    if total_weight > request.weight_limit {
        warnings.push(format!(
            "Total weight {:.2}kg exceeds the limit of {:.2}kg",
            total_weight, request.weight_limit
        ));
    } else if weight_utilization > NEAR_LIMIT_PERCENT {
        warnings.push("Load is within 5% of the weight limit".to_string());
    }
    match space_utilization {
        Some(space) if space > 100.0 => {
            warnings.push(format!("Packages need {:.2}% of the truck volume", space))
        }
        None => warnings.push("Some packages have no dimensions; volume not checked".to_string()),
        _ => {}
    }

    LoadValidation {
        is_valid: total_weight <= request.weight_limit
            && space_utilization.map_or(true, |space| space <= 100.0),
        total_weight: round_to(total_weight, 2),
        weight_utilization,
        space_utilization,
        warnings,
        suggestions: vec![
            "Place heavier items at the bottom".to_string(),
            "Secure fragile items properly".to_string(),
            "Distribute weight evenly".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Dimensions;

    fn package(id: &str, weight: f64, side: Option<f64>) -> Package {
        Package {
            id: id.to_string(),
            weight,
            length: side,
            width: side,
            height: side,
        }
    }

    fn request(packages: Vec<Package>, weight_limit: f64) -> TruckLoadingRequest {
        TruckLoadingRequest {
            truck_dimensions: Dimensions { length: 4.0, width: 2.0, height: 2.0 },
            packages,
            weight_limit,
        }
    }

    #[test]
    fn test_heaviest_first_order() {
        let req = request(
            vec![
                package("a", 5.0, Some(1.0)),
                package("b", 30.0, Some(1.0)),
                package("c", 10.0, Some(1.0)),
            ],
            100.0,
        );
        let plan = plan_loading(&req);
        let order: Vec<&str> = plan
            .loading_sequence
            .iter()
            .map(|s| s.package_id.as_str())
            .collect();
        assert_eq!(order, vec!["b", "c", "a"]);
        assert_eq!(plan.total_weight, 45.0);
        assert_eq!(plan.weight_utilization, 45.0);
        assert_eq!(plan.space_utilization, Some(18.75));
        assert!(plan.deferred_packages.is_empty());
        assert!(plan.recommendations.iter().any(|r| r.contains("loading equipment")));
    }

    #[test]
    fn test_over_limit_packages_are_deferred() {
        let req = request(
            vec![package("a", 60.0, None), package("b", 50.0, None), package("c", 30.0, None)],
            100.0,
        );
        let plan = plan_loading(&req);
        assert_eq!(plan.deferred_packages, vec!["b".to_string()]);
        assert_eq!(plan.total_weight, 90.0);
        assert_eq!(plan.space_utilization, None);
    }

    #[test]
    fn test_validate_load_flags_overweight() {
        let req = request(
            vec![package("a", 80.0, Some(1.0)), package("b", 40.0, Some(1.0))],
            100.0,
        );
        let report = validate_load(&req);
        assert!(!report.is_valid);
        assert_eq!(report.weight_utilization, 120.0);
        assert!(report.warnings[0].contains("exceeds"));
    }

    #[test]
    fn test_validate_load_accepts_fitting_load() {
        let req = request(vec![package("a", 20.0, Some(1.0))], 100.0);
        let report = validate_load(&req);
        assert!(report.is_valid);
        assert!(report.warnings.is_empty());
    }
}
