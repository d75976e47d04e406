//! KPI summary over the stockout report table.
//!
//! The presentation layer renders headline figures and a product ranking on
//! top of the engine output; this module computes those figures and returns
//! them as a serializable struct. No rendering happens here.

use crate::actions::RecommendedAction;
use crate::error::{Result, StockoutError};
use crate::schema::*;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Headline figures for one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockoutSummary {
    /// Distinct products in the report.
    pub productos: usize,
    /// Lost units summed over all products.
    pub unidades_perdidas: f64,
    /// Lost revenue summed over all products.
    pub valor_perdido: f64,
    /// Branch rows flagged "Reposición urgente".
    pub reposiciones_urgentes: usize,
    /// Top products by total lost value, worst first.
    pub ranking: Vec<ProductLoss>,
}

/// One entry of the lost-value ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductLoss {
    pub idarticulo: i64,
    pub descripcion: String,
    pub unidades_perdidas: f64,
    pub valor_perdido: f64,
}

/// Summarize a stockout report table, keeping the `top_n` worst products.
pub fn summarize(report: &DataFrame, top_n: usize) -> Result<StockoutSummary> {
    // Every branch row of a product carries identical totals, so one row per
    // product is enough for the headline figures.
    let per_product = report
        .clone()
        .lazy()
        .group_by([col(COL_ID_ARTICULO), col(COL_DESCRIPCION)])
        .agg([
            col(COL_UNIDADES_PERDIDAS_TOTAL).first(),
            col(COL_VALOR_PERDIDO_TOTAL).first(),
        ])
        .sort(
            [COL_VALOR_PERDIDO_TOTAL],
            SortMultipleOptions::default().with_order_descending(true),
        )
        .collect()
        .map_err(|e| StockoutError::Report(format!("Failed to group report by product: {}", e)))?;

    let unidades_perdidas = per_product
        .column(COL_UNIDADES_PERDIDAS_TOTAL)
        .and_then(|s| s.f64())
        .map_err(|e| StockoutError::Report(format!("Failed to read lost units: {}", e)))?
        .sum()
        .unwrap_or(0.0);
    let valor_perdido = per_product
        .column(COL_VALOR_PERDIDO_TOTAL)
        .and_then(|s| s.f64())
        .map_err(|e| StockoutError::Report(format!("Failed to read lost value: {}", e)))?
        .sum()
        .unwrap_or(0.0);

    let reposiciones_urgentes = report
        .clone()
        .lazy()
        .filter(
            col(COL_ACCION_RECOMENDADA).eq(lit(RecommendedAction::UrgentRestock.label())),
        )
        .collect()
        .map_err(|e| StockoutError::Report(format!("Failed to count urgent rows: {}", e)))?
        .height();

    let limit = top_n.min(per_product.height());
    let ids = per_product
        .column(COL_ID_ARTICULO)
        .and_then(|s| s.cast(&DataType::Int64))
        .map_err(|e| StockoutError::Report(format!("Failed to read product ids: {}", e)))?;
    let ids = ids
        .i64()
        .map_err(|e| StockoutError::Report(format!("Failed to read product ids: {}", e)))?;
    let descripciones = per_product
        .column(COL_DESCRIPCION)
        .and_then(|s| s.str())
        .map_err(|e| StockoutError::Report(format!("Failed to read descriptions: {}", e)))?;
    let unidades = per_product
        .column(COL_UNIDADES_PERDIDAS_TOTAL)
        .and_then(|s| s.f64())
        .map_err(|e| StockoutError::Report(format!("Failed to read lost units: {}", e)))?;
    let valores = per_product
        .column(COL_VALOR_PERDIDO_TOTAL)
        .and_then(|s| s.f64())
        .map_err(|e| StockoutError::Report(format!("Failed to read lost value: {}", e)))?;

    let mut ranking = Vec::with_capacity(limit);
    for i in 0..limit {
        ranking.push(ProductLoss {
            idarticulo: ids.get(i).unwrap_or(0),
            descripcion: descripciones.get(i).unwrap_or("").to_string(),
            unidades_perdidas: unidades.get(i).unwrap_or(0.0),
            valor_perdido: valores.get(i).unwrap_or(0.0),
        });
    }

    Ok(StockoutSummary {
        productos: per_product.height(),
        unidades_perdidas,
        valor_perdido,
        reposiciones_urgentes,
        ranking,
    })
}
