//! Stockout-loss and replenishment-estimation engine.
//!
//! Takes a per-product purchasing-budget table (demand forecast, per-branch
//! distribution percentages, per-branch stock, unit price) and produces a
//! per-product-per-branch report with estimated shortfall, lost value and a
//! recommended replenishment action, plus per-product totals.

pub mod actions;
pub mod branches;
pub mod error;
pub mod report;
pub mod schema;
pub mod stockout;
