use async_trait::async_trait;
use serde_json::Value;

use crate::errors::Result;
use crate::periods::{DateRange, MonthRange};

use super::dashboard_model::{DashboardRequest, DashboardSnapshot};
use super::reports_model::{
    AnnualSummary, BudgetVsActualRow, CollectionRow, DelinquencyGroup, ExtraExpenseRow,
    IncomeExpenseSummary, MonthlyBalanceRecord, Payment, ProviderExpenseRow, ReserveFundEntry,
    ReserveFundSnapshot,
};

/// One operation per report kind.
///
/// Every call is independent: nothing is cached between invocations and the
/// same inputs against the same API responses always produce the same output.
#[async_trait]
pub trait ReportServiceTrait: Send + Sync {
    /// One balance per month of `range`, in period order. Months are fetched
    /// concurrently; any failure fails the whole range.
    async fn monthly_balances(&self, range: &MonthRange) -> Result<Vec<MonthlyBalanceRecord>>;

    /// Payments received in `range`, as listed by `income-expense`.
    async fn payments(&self, range: &DateRange) -> Result<Vec<Payment>>;

    /// Payments as incomes, provider plus extra expenses as expenses.
    async fn income_expense_summary(&self, range: &DateRange) -> Result<IncomeExpenseSummary>;

    /// Fines grouped per resident in first-seen order.
    async fn delinquency_groups(&self) -> Result<Vec<DelinquencyGroup>>;

    async fn reserve_fund_entries(&self) -> Result<Vec<ReserveFundEntry>>;

    async fn reserve_fund_snapshot(&self) -> Result<ReserveFundSnapshot>;

    async fn provider_expenses(&self, range: &DateRange) -> Result<Vec<ProviderExpenseRow>>;

    async fn extra_expenses(&self, range: &DateRange) -> Result<Vec<ExtraExpenseRow>>;

    async fn collection(&self, range: &DateRange) -> Result<Vec<CollectionRow>>;

    async fn budget_vs_actual(&self, year: i32) -> Result<Vec<BudgetVsActualRow>>;

    async fn annual_summary(&self, year: i32) -> Result<AnnualSummary>;

    /// Raw reconciliation document; its shape is not interpreted here.
    async fn bank_reconciliation(&self) -> Result<Value>;

    /// All dashboard reports, fetched concurrently. Any failure fails the
    /// whole snapshot.
    async fn dashboard(&self, request: &DashboardRequest) -> Result<DashboardSnapshot>;
}
