//! Column names of the budget table and the stockout report.
//!
//! The upstream budget table keeps its warehouse column names (Spanish,
//! one row per product). Derived report columns are listed separately so the
//! expansion and aggregation steps agree on spelling.

/// Product identifier (grouping key, required).
pub const COL_ID_ARTICULO: &str = "idarticulo";
/// Product name (part of the grouping key, required).
pub const COL_DESCRIPCION: &str = "descripcion";
/// Forecast optimal quantity to sell across all branches (required).
pub const COL_CNT_OPTIMA: &str = "cnt_optima";
/// Unit sale price (required).
pub const COL_PRECIO_UNITARIO: &str = "precio_unitario";

// Derived per-branch columns.
pub const COL_SUCURSAL: &str = "sucursal";
pub const COL_PORC_DISTRIBUCION: &str = "porc_distribucion";
pub const COL_CNT_SUC_ESTIMADA: &str = "cnt_suc_estimada";
pub const COL_STOCK_ACTUAL: &str = "stock_actual";
pub const COL_UNIDADES_PERDIDAS: &str = "unidades_perdidas";
pub const COL_VALOR_PERDIDO: &str = "valor_perdido";
pub const COL_ACCION_RECOMENDADA: &str = "accion_recomendada";
pub const COL_EXPLICACION_ACCION: &str = "explicacion_accion";

// Per-product totals attached to every branch row.
pub const COL_UNIDADES_PERDIDAS_TOTAL: &str = "unidades_perdidas_TOTAL";
pub const COL_VALOR_PERDIDO_TOTAL: &str = "valor_perdido_TOTAL";
