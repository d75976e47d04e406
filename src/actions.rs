//! Recommended-action classification.
//!
//! A stateless 3-way classifier evaluated independently for every branch row.
//! The check order is significant: zero stock with zero demand must land in
//! `SufficientStock`, not `UrgentRestock`.

use serde::{Deserialize, Serialize};

/// Replenishment action recommended for one (product, branch) row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendedAction {
    /// No stock at the branch while demand is expected there.
    UrgentRestock,
    /// Some stock, but less than the estimated branch demand.
    MonitorRestock,
    /// Stock covers the estimated branch demand.
    SufficientStock,
}

impl RecommendedAction {
    /// Classify a branch row. First match wins, checked top to bottom.
    pub fn classify(stock: f64, estimated_demand: f64) -> Self {
        if stock == 0.0 && estimated_demand > 0.0 {
            RecommendedAction::UrgentRestock
        } else if stock < estimated_demand {
            RecommendedAction::MonitorRestock
        } else {
            RecommendedAction::SufficientStock
        }
    }

    /// Report label, as shown to the purchasing team.
    pub fn label(&self) -> &'static str {
        match self {
            RecommendedAction::UrgentRestock => "Reposición urgente",
            RecommendedAction::MonitorRestock => "Monitorear reposición",
            RecommendedAction::SufficientStock => "Stock suficiente",
        }
    }

    /// One-sentence explanation for the report row.
    pub fn explain(&self, sucursal: &str, estimated_demand: f64, shortfall: f64) -> String {
        match self {
            RecommendedAction::UrgentRestock => format!(
                "Sin stock en {} con una demanda estimada de {:.1} unidades; reponer {:.1} unidades de inmediato.",
                sucursal, estimated_demand, shortfall
            ),
            RecommendedAction::MonitorRestock => format!(
                "El stock de {} no cubre la demanda estimada de {:.1} unidades; faltan {:.1} unidades.",
                sucursal, estimated_demand, shortfall
            ),
            RecommendedAction::SufficientStock => format!(
                "El stock de {} cubre la demanda estimada de {:.1} unidades.",
                sucursal, estimated_demand
            ),
        }
    }
}
