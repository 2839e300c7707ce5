//! Core business logic - framework-agnostic costing and pricing.
//!
//! The engine modules (`sheet`, `cost`, `allocation`, `variable`, `pricing`,
//! `dashboard`, `report`) are pure functions over already-loaded values. The
//! repository modules (`ingredient`, `packaging`, `expense`, `recipe`,
//! `profile`) are async and scoped by an explicit owner id.

pub mod allocation;
pub mod cost;
pub mod dashboard;
pub mod expense;
pub mod ingredient;
pub mod packaging;
pub mod pricing;
pub mod profile;
pub mod recipe;
pub mod report;
pub mod sheet;
pub mod validation;
pub mod variable;
