//! Stockout-loss engine.
//!
//! Two transformations, executed in order:
//! 1. Per-branch expansion: one budget row per product becomes one row per
//!    (product, branch), with estimated branch demand, shortfall, lost value
//!    and a recommended action.
//! 2. Cross-branch aggregation: per-product totals of lost units and lost
//!    value, left-joined back onto every branch row.
//!
//! The engine is stateless: each call gets its own input table and returns a
//! fresh report table. Nothing is cached or persisted between calls.

use crate::actions::RecommendedAction;
use crate::branches::{default_branches, BranchSpec};
use crate::error::{Result, StockoutError};
use crate::schema::*;
use itertools::izip;
use polars::prelude::*;
use tracing::{debug, info};

/// Stockout analysis over a budget table, parameterized by a branch catalog.
pub struct StockoutEngine {
    branches: Vec<BranchSpec>,
}

impl StockoutEngine {
    pub fn new(branches: Vec<BranchSpec>) -> Self {
        Self { branches }
    }

    pub fn with_default_branches() -> Self {
        Self::new(default_branches())
    }

    /// Run both transformations and return the final report table.
    ///
    /// The input must carry the required budget columns (`idarticulo`,
    /// `descripcion`, `cnt_optima`, `precio_unitario`) plus the percentage
    /// and stock column of every cataloged branch; a missing column surfaces
    /// as an error from the dataframe layer. Null branch percentages and
    /// stock are treated as 0 — that is the only coercion performed.
    pub fn compute(&self, budget: &DataFrame) -> Result<DataFrame> {
        if self.branches.is_empty() {
            return Err(StockoutError::Catalog(
                "no branches configured".to_string(),
            ));
        }
        info!(
            "Computing stockout losses for {} products across {} branches",
            budget.height(),
            self.branches.len()
        );
        let expanded = self.expand_by_branch(budget)?;
        let report = attach_totals(&expanded)?;
        debug!("Stockout report ready: {} rows", report.height());
        Ok(report)
    }

    /// Per-branch expansion: one output row per (product, branch).
    ///
    /// Every cataloged branch is produced for every product, even when its
    /// percentage and stock are both absent. Rows are stable-sorted by
    /// product id so a product's branch rows stay together in catalog order;
    /// the ordering is presentational only.
    pub fn expand_by_branch(&self, budget: &DataFrame) -> Result<DataFrame> {
        let mut frames = Vec::with_capacity(self.branches.len());
        for branch in &self.branches {
            frames.push(expand_branch(budget, branch)?.lazy());
        }
        let expanded = concat(frames, UnionArgs::default())
            .map_err(|e| {
                StockoutError::Expansion(format!("Failed to concatenate branch frames: {}", e))
            })?
            .sort(
                [COL_ID_ARTICULO],
                SortMultipleOptions::default().with_maintain_order(true),
            )
            .collect()
            .map_err(|e| {
                StockoutError::Expansion(format!("Failed to collect expanded table: {}", e))
            })?;
        Ok(expanded)
    }
}

/// Compute the full stockout report for the fixed branch set.
///
/// This is the single operation the presentation layer calls before
/// rendering a report: budget table in, report table out.
pub fn compute_stockout_losses(budget: &DataFrame) -> Result<DataFrame> {
    StockoutEngine::with_default_branches().compute(budget)
}

/// Expand the budget table for a single branch.
fn expand_branch(budget: &DataFrame, branch: &BranchSpec) -> Result<DataFrame> {
    let mut df = budget
        .clone()
        .lazy()
        .with_columns([
            lit(branch.name.as_str()).alias(COL_SUCURSAL),
            col(&branch.pct_column)
                .cast(DataType::Float64)
                .fill_null(lit(0.0))
                .alias(COL_PORC_DISTRIBUCION),
            col(&branch.stock_column)
                .cast(DataType::Float64)
                .fill_null(lit(0.0))
                .alias(COL_STOCK_ACTUAL),
        ])
        .with_columns([(col(COL_CNT_OPTIMA).cast(DataType::Float64)
            * col(COL_PORC_DISTRIBUCION))
        .alias(COL_CNT_SUC_ESTIMADA)])
        .with_columns([
            // Shortfall is floored at 0: surplus at one branch never offsets
            // another branch's shortfall.
            when(col(COL_CNT_SUC_ESTIMADA).gt(col(COL_STOCK_ACTUAL)))
                .then(col(COL_CNT_SUC_ESTIMADA) - col(COL_STOCK_ACTUAL))
                .otherwise(lit(0.0))
                .alias(COL_UNIDADES_PERDIDAS),
        ])
        .with_columns([(col(COL_UNIDADES_PERDIDAS)
            * col(COL_PRECIO_UNITARIO).cast(DataType::Float64))
        .alias(COL_VALOR_PERDIDO)])
        .collect()
        .map_err(|e| {
            StockoutError::Expansion(format!("Failed to expand branch {}: {}", branch.name, e))
        })?;

    // Classification pass: one walk over the derived columns, applying the
    // plain classifier per row.
    let mut acciones: Vec<&'static str> = Vec::with_capacity(df.height());
    let mut explicaciones: Vec<String> = Vec::with_capacity(df.height());
    {
        let estimada = df
            .column(COL_CNT_SUC_ESTIMADA)
            .and_then(|s| s.f64())
            .map_err(|e| {
                StockoutError::Expansion(format!("Failed to read estimated demand: {}", e))
            })?;
        let stock = df
            .column(COL_STOCK_ACTUAL)
            .and_then(|s| s.f64())
            .map_err(|e| {
                StockoutError::Expansion(format!("Failed to read branch stock: {}", e))
            })?;
        let perdidas = df
            .column(COL_UNIDADES_PERDIDAS)
            .and_then(|s| s.f64())
            .map_err(|e| {
                StockoutError::Expansion(format!("Failed to read shortfall: {}", e))
            })?;
        for (demanda, stock_actual, faltante) in izip!(estimada, stock, perdidas) {
            let demanda = demanda.unwrap_or(0.0);
            let stock_actual = stock_actual.unwrap_or(0.0);
            let faltante = faltante.unwrap_or(0.0);
            let accion = RecommendedAction::classify(stock_actual, demanda);
            acciones.push(accion.label());
            explicaciones.push(accion.explain(&branch.name, demanda, faltante));
        }
    }
    df.with_column(Series::new(COL_ACCION_RECOMENDADA, acciones))
        .map_err(|e| {
            StockoutError::Expansion(format!("Failed to attach action column: {}", e))
        })?;
    df.with_column(Series::new(COL_EXPLICACION_ACCION, explicaciones))
        .map_err(|e| {
            StockoutError::Expansion(format!("Failed to attach explanation column: {}", e))
        })?;
    Ok(df)
}

/// Cross-branch aggregation: attach per-product loss totals to every row.
///
/// Groups by (`idarticulo`, `descripcion`) — the same product id under two
/// description spellings splits into two groups, matching the upstream
/// report's behavior.
pub fn attach_totals(expanded: &DataFrame) -> Result<DataFrame> {
    let totals = expanded
        .clone()
        .lazy()
        .group_by([col(COL_ID_ARTICULO), col(COL_DESCRIPCION)])
        .agg([
            col(COL_UNIDADES_PERDIDAS)
                .sum()
                .alias(COL_UNIDADES_PERDIDAS_TOTAL),
            col(COL_VALOR_PERDIDO).sum().alias(COL_VALOR_PERDIDO_TOTAL),
        ]);

    let on: Vec<Expr> = vec![col(COL_ID_ARTICULO), col(COL_DESCRIPCION)];
    let report = expanded
        .clone()
        .lazy()
        .join(totals, on.clone(), on, JoinArgs::new(JoinType::Left))
        .collect()
        .map_err(|e| {
            StockoutError::Aggregation(format!("Failed to attach product totals: {}", e))
        })?;
    Ok(report)
}
