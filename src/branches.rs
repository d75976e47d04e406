//! Branch catalog.
//!
//! The budget table encodes its per-branch fields through a fixed naming
//! pattern (one percentage column and one stock column per branch). The
//! catalog records that pattern as data so adding or removing a branch is a
//! configuration change, not a code change.

use crate::error::{Result, StockoutError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One retail branch and the budget-table columns that describe it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchSpec {
    /// Branch name as it appears in the `sucursal` report column.
    pub name: String,
    /// Column holding the branch's share of `cnt_optima` (nullable).
    pub pct_column: String,
    /// Column holding the branch's current on-hand stock (nullable).
    pub stock_column: String,
}

impl BranchSpec {
    pub fn new(name: &str, pct_column: &str, stock_column: &str) -> Self {
        Self {
            name: name.to_string(),
            pct_column: pct_column.to_string(),
            stock_column: stock_column.to_string(),
        }
    }
}

/// The four fixed branches of the chain, in report order.
pub fn default_branches() -> Vec<BranchSpec> {
    vec![
        BranchSpec::new("corrientes", "cor_porc", "stk_corrientes"),
        BranchSpec::new("hiper", "hip_porc", "stk_hiper"),
        BranchSpec::new("formosa", "for_porc", "stk_formosa"),
        BranchSpec::new("express", "exp_porc", "stk_express"),
    ]
}

/// Load a branch catalog from a JSON file (an array of `BranchSpec`).
pub fn load_branches(path: &Path) -> Result<Vec<BranchSpec>> {
    let raw = std::fs::read_to_string(path)?;
    let branches: Vec<BranchSpec> = serde_json::from_str(&raw)?;
    if branches.is_empty() {
        return Err(StockoutError::Catalog(format!(
            "Branch catalog is empty: {}",
            path.display()
        )));
    }
    Ok(branches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_four_branches_in_report_order() {
        let branches = default_branches();
        let names: Vec<&str> = branches.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["corrientes", "hiper", "formosa", "express"]);
    }

    #[test]
    fn catalog_round_trips_through_json() {
        let branches = default_branches();
        let json = serde_json::to_string(&branches).unwrap();
        let parsed: Vec<BranchSpec> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, branches);
    }

    #[test]
    fn catalog_loads_from_json_file() {
        let dir = std::env::temp_dir().join("stockout_engine_branches_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("branches.json");
        std::fs::write(&path, serde_json::to_string(&default_branches()).unwrap()).unwrap();

        let loaded = load_branches(&path).unwrap();
        assert_eq!(loaded, default_branches());
    }

    #[test]
    fn empty_catalog_file_is_an_error() {
        let dir = std::env::temp_dir().join("stockout_engine_branches_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("empty_branches.json");
        std::fs::write(&path, "[]").unwrap();

        assert!(load_branches(&path).is_err());
    }
}
