//! Report aggregation.
//!
//! This module provides the report service that fetches each report kind
//! and reduces the raw records into the view models charts and tables
//! consume, plus the generation tracking that keeps stale range fetches
//! from overwriting newer ones.

pub mod aggregation;
mod dashboard_model;
mod generation;
mod reports_model;
mod reports_service;
mod reports_traits;

pub use dashboard_model::*;
pub use generation::{Generation, GenerationTracker};
pub use reports_model::{
    AnnualSummary, BudgetVsActualRow, CollectionRow, DelinquencyGroup, ExtraExpenseRow, Fine,
    FineLine, IncomeExpenseSummary, LedgerEntryType, MonthlyBalanceRecord, MonthlyCollection,
    Payment, ProviderExpenseRow, ReserveFundEntry, ReserveFundSnapshot, Resident, ResidentInfo,
};
pub use reports_service::*;
pub use reports_traits::*;
