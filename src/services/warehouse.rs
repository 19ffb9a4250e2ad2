use crate::core::{generate_unique_id, round_to, ContractError};
use crate::models::{
    Bottleneck, InventoryItem, LayoutAnalysis, LayoutAnalysisRequest, Severity, WarehouseLayout,
    WarehouseOptimizationRequest, Zone,
};

/// Zone name, percent of floor area and of ranked items, placement
const ZONE_PLAN: [(&str, usize, &str); 3] = [
    ("Fast-moving items", 30, "Near entrance"),
    ("Medium-moving items", 50, "Central area"),
    ("Slow-moving items", 20, "Back area"),
];

/// Floor utilization percentages that flag a crowded layout
const UTILIZATION_CRITICAL: f64 = 90.0;
const UTILIZATION_WARNING: f64 = 75.0;

/// SKUs one access point can serve before picking congests
const SKUS_PER_ACCESS_POINT: usize = 200;

/// Split inventory into turnover classes and size each zone by floor share
///
/// Items are ranked by descending turnover; the top 30% go to the fast
/// zone, the next 50% to the medium zone and the rest to the slow zone.
pub fn optimize_layout(
    request: &WarehouseOptimizationRequest,
) -> Result<WarehouseLayout, ContractError> {
    let total_units = total_units(&request.inventory_data)?;

    let floor_area = request.warehouse_dimensions.floor_area();

    let mut ranked: Vec<&InventoryItem> = request.inventory_data.iter().collect();
    ranked.sort_by(|a, b| b.turnover_rate.total_cmp(&a.turnover_rate));

    let total = ranked.len();
    let mut start = 0;
    let mut cumulative_percent = 0;
    let mut zones = Vec::with_capacity(ZONE_PLAN.len());

    for (i, (name, percent, location)) in ZONE_PLAN.iter().enumerate() {
        cumulative_percent += percent;
        let end = if i == ZONE_PLAN.len() - 1 {
            total
        } else {
            (total * cumulative_percent).div_ceil(100).min(total)
        };
        let share = *percent as f64 / 100.0;

        zones.push(Zone {
            name: name.to_string(),
            area_share: share,
            area: round_to(floor_area * share, 2),
            location: location.to_string(),
            skus: ranked[start..end].iter().map(|item| item.sku.clone()).collect(),
        });
        start = end;
    }

    Ok(WarehouseLayout {
        request_id: generate_unique_id(),
        floor_area: round_to(floor_area, 2),
        storage_volume: round_to(request.warehouse_dimensions.volume(), 2),
        zones,
        access_point_count: request.access_points.len(),
        total_units,
        recommendations: recommendations(request),
    })
}

fn total_units(items: &[InventoryItem]) -> Result<u64, ContractError> {
    items.iter().try_fold(0u64, |total, item| {
        total.checked_add(item.quantity).ok_or_else(|| {
            ContractError::invalid(format!(
                "total inventory quantity exceeds {} units",
                u64::MAX
            ))
        })
    })
}

fn recommendations(request: &WarehouseOptimizationRequest) -> Vec<String> {
    let mut out = vec!["Relocate fast-moving items closer to shipping area".to_string()];

    match request.access_points.len() {
        0 => out.push("Add at least one access point for receiving and shipping".to_string()),
        1 => out.push("Separate receiving and shipping with a second access point".to_string()),
        _ => out.push("Optimize picking routes between access points".to_string()),
    }

    if request.inventory_data.iter().all(|item| item.turnover_rate == 0.0) {
        out.push("Record turnover rates to enable ABC placement".to_string());
    }

    out
}

/// Score an existing layout and list its bottlenecks
///
/// The score starts at 100 and loses 25, 10 or 5 points per high,
/// medium or low severity bottleneck.
pub fn analyze_layout(request: &LayoutAnalysisRequest) -> LayoutAnalysis {
    let floor_area = request.warehouse_dimensions.floor_area();
    let utilization_rate = request
        .occupied_area
        .map(|occupied| round_to((occupied / floor_area * 100.0).min(100.0), 1));

    let mut bottlenecks = Vec::new();
    let mut recommendations = Vec::new();

    match request.access_points.len() {
        0 => {
            bottlenecks.push(bottleneck("Receiving", "No access points", Severity::High));
            recommendations.push("Add at least one access point for receiving and shipping");
        }
        1 => {
            bottlenecks.push(bottleneck(
                "Receiving",
                "Receiving and shipping share one access point",
                Severity::Medium,
            ));
            recommendations.push("Separate receiving and shipping with a second access point");
        }
        points if request.inventory_data.len() > points * SKUS_PER_ACCESS_POINT => {
            bottlenecks.push(bottleneck(
                "Picking",
                &format!("More than {} SKUs per access point", SKUS_PER_ACCESS_POINT),
                Severity::Low,
            ));
            recommendations.push("Optimize picking routes between access points");
        }
        _ => {}
    }

    if let Some(rate) = utilization_rate {
        let severity = if rate > UTILIZATION_CRITICAL {
            Some((Severity::High, UTILIZATION_CRITICAL))
        } else if rate > UTILIZATION_WARNING {
            Some((Severity::Medium, UTILIZATION_WARNING))
        } else {
            None
        };
        if let Some((severity, threshold)) = severity {
            bottlenecks.push(bottleneck(
                "Storage",
                &format!("Floor utilization above {}%", threshold),
                severity,
            ));
            recommendations.push("Move slow-moving stock to overflow or high-bay storage");
        }
    }

    let unrated = request
        .inventory_data
        .iter()
        .filter(|item| item.turnover_rate == 0.0)
        .count();
    if unrated > 0 {
        bottlenecks.push(bottleneck(
            "Picking",
            &format!("{} of {} items have no turnover rate", unrated, request.inventory_data.len()),
            Severity::Medium,
        ));
        recommendations.push("Record turnover rates to enable ABC placement");
    }

    if recommendations.is_empty() {
        recommendations.push("Relocate fast-moving items closer to shipping area");
    }

    let penalty: f64 = bottlenecks
        .iter()
        .map(|b| match b.severity {
            Severity::High => 25.0,
            Severity::Medium => 10.0,
            Severity::Low => 5.0,
        })
        .sum();

    LayoutAnalysis {
        request_id: generate_unique_id(),
        efficiency_score: (100.0 - penalty).max(0.0),
        floor_area: round_to(floor_area, 2),
        utilization_rate,
        bottlenecks,
        recommendations: recommendations.into_iter().map(str::to_string).collect(),
    }
}

fn bottleneck(area: &str, issue: &str, severity: Severity) -> Bottleneck {
    Bottleneck {
        area: area.to_string(),
        issue: issue.to_string(),
        severity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point;
    use crate::models::Dimensions;

    fn item(sku: &str, turnover_rate: f64) -> InventoryItem {
        InventoryItem {
            sku: sku.to_string(),
            quantity: 10,
            turnover_rate,
        }
    }

    #[test]
    fn test_zones_by_turnover() {
        let request = WarehouseOptimizationRequest {
            warehouse_dimensions: Dimensions { length: 100.0, width: 50.0, height: 10.0 },
            inventory_data: (0..10).map(|i| item(&format!("sku-{}", i), i as f64)).collect(),
            access_points: vec![Point::new(0.0, 0.0)],
        };
        let layout = optimize_layout(&request).unwrap();

        assert_eq!(layout.floor_area, 5000.0);
        assert_eq!(layout.storage_volume, 50000.0);
        assert_eq!(layout.total_units, 100);
        assert_eq!(layout.zones[0].area, 1500.0);
        assert_eq!(layout.zones[0].skus, vec!["sku-9", "sku-8", "sku-7"]);
        assert_eq!(layout.zones[1].skus.len(), 5);
        assert_eq!(layout.zones[2].skus, vec!["sku-1", "sku-0"]);
    }

    #[test]
    fn test_empty_inventory() {
        let request = WarehouseOptimizationRequest {
            warehouse_dimensions: Dimensions { length: 10.0, width: 10.0, height: 5.0 },
            inventory_data: vec![],
            access_points: vec![],
        };
        let layout = optimize_layout(&request).unwrap();
        assert!(layout.zones.iter().all(|z| z.skus.is_empty()));
        assert_eq!(layout.access_point_count, 0);
        assert_eq!(layout.recommendations.len(), 3);
    }

    #[test]
    fn test_total_units_overflow_rejected() {
        let mut big = item("bulk", 1.0);
        big.quantity = u64::MAX;
        let mut one = item("single", 2.0);
        one.quantity = 1;

        let request = WarehouseOptimizationRequest {
            warehouse_dimensions: Dimensions { length: 10.0, width: 10.0, height: 5.0 },
            inventory_data: vec![big, one],
            access_points: vec![],
        };
        let err = optimize_layout(&request).unwrap_err();
        assert!(matches!(err, ContractError::InvalidInput(_)));
    }

    fn analysis_request(access_points: usize, occupied_area: Option<f64>) -> LayoutAnalysisRequest {
        LayoutAnalysisRequest {
            warehouse_dimensions: Dimensions { length: 100.0, width: 50.0, height: 10.0 },
            inventory_data: vec![item("a", 4.0), item("b", 1.5)],
            access_points: (0..access_points).map(|i| Point::new(i as f64, 0.0)).collect(),
            occupied_area,
        }
    }

    #[test]
    fn test_analysis_without_bottlenecks() {
        let analysis = analyze_layout(&analysis_request(2, Some(2500.0)));
        assert_eq!(analysis.efficiency_score, 100.0);
        assert_eq!(analysis.utilization_rate, Some(50.0));
        assert!(analysis.bottlenecks.is_empty());
        assert_eq!(analysis.recommendations.len(), 1);
    }

    #[test]
    fn test_analysis_flags_crowded_single_entrance() {
        let analysis = analyze_layout(&analysis_request(1, Some(4750.0)));
        assert_eq!(analysis.utilization_rate, Some(95.0));
        assert_eq!(analysis.bottlenecks.len(), 2);
        assert_eq!(analysis.bottlenecks[0].severity, Severity::Medium);
        assert_eq!(analysis.bottlenecks[1].area, "Storage");
        assert_eq!(analysis.bottlenecks[1].severity, Severity::High);
        assert_eq!(analysis.efficiency_score, 65.0);
    }

    #[test]
    fn test_analysis_unknown_utilization_and_unrated_items() {
        let mut request = analysis_request(0, None);
        request.inventory_data.push(item("c", 0.0));
        let analysis = analyze_layout(&request);

        assert!(analysis.utilization_rate.is_none());
        assert_eq!(analysis.bottlenecks[0].severity, Severity::High);
        assert_eq!(analysis.bottlenecks[1].issue, "1 of 3 items have no turnover rate");
        assert_eq!(analysis.efficiency_score, 65.0);
    }
}
