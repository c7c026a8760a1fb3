use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::ReportsConfig;
use crate::errors::Result;
use crate::periods::{DateRange, MonthRange};

use super::reports_model::{
    AnnualSummary, BudgetVsActualRow, CollectionRow, DelinquencyGroup, ExtraExpenseRow,
    IncomeExpenseSummary, MonthlyBalanceRecord, MonthlyCollection, ProviderExpenseRow,
    ReserveFundSnapshot,
};

/// Boundaries for every report on the main dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRequest {
    pub months: MonthRange,
    pub income_expense: DateRange,
    pub collection: DateRange,
    pub provider_expenses: DateRange,
    pub extra_expenses: DateRange,
    pub year: i32,
}

impl DashboardRequest {
    /// Initial selection: the trailing `default_range_months` window for the
    /// balance chart and the income/expense split, year-to-date for the
    /// listings, and the current year for the annual reports.
    pub fn defaults(today: NaiveDate, config: &ReportsConfig) -> Result<Self> {
        let months = MonthRange::trailing(today, config.default_range_months);
        let year_to_date = DateRange::year_to_date(today);
        Ok(Self {
            months,
            income_expense: months.to_date_range()?,
            collection: year_to_date,
            provider_expenses: year_to_date,
            extra_expenses: year_to_date,
            year: today.year(),
        })
    }
}

/// Everything the main dashboard renders, fetched in one go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub monthly_balances: Vec<MonthlyBalanceRecord>,
    pub income_expense: IncomeExpenseSummary,
    pub delinquency: Vec<DelinquencyGroup>,
    pub collection: Vec<CollectionRow>,
    pub collection_by_month: Vec<MonthlyCollection>,
    pub budget_vs_actual: Vec<BudgetVsActualRow>,
    pub annual_summary: AnnualSummary,
    pub reserve_fund: ReserveFundSnapshot,
    pub provider_expenses: Vec<ProviderExpenseRow>,
    pub extra_expenses: Vec<ExtraExpenseRow>,
}
