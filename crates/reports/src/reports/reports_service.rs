use std::sync::Arc;

use async_trait::async_trait;
use futures::future::try_join_all;
use log::{debug, error};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ReportsConfig;
use crate::errors::{ReportError, Result};
use crate::fetcher::{HttpReportFetcher, QueryParams, ReportEndpoint, ReportFetcher};
use crate::periods::{DateRange, MonthRange};

use super::aggregation;
use super::dashboard_model::{DashboardRequest, DashboardSnapshot};
use super::reports_model::{
    AnnualSummary, BudgetVsActualRow, CollectionRow, DelinquencyGroup, DelinquencyResponse,
    ExtraExpenseRow, IncomeExpenseResponse, IncomeExpenseSummary, MonthlyBalanceRecord,
    MonthlyBalanceResponse, Payment, ProviderExpenseRecord, ProviderExpenseRow, ReserveFundEntry,
    ReserveFundSnapshot,
};
use super::reports_traits::ReportServiceTrait;

/// Report aggregator over an injected [`ReportFetcher`].
pub struct ReportService {
    fetcher: Arc<dyn ReportFetcher>,
}

impl ReportService {
    pub fn new(fetcher: Arc<dyn ReportFetcher>) -> Self {
        ReportService { fetcher }
    }

    /// Service backed by the HTTP fetcher described by `config`.
    pub fn from_config(config: &ReportsConfig) -> Result<Self> {
        let fetcher = HttpReportFetcher::new(config)?;
        Ok(Self::new(Arc::new(fetcher)))
    }

    /// Fetches `endpoint` and decodes the body into `T`.
    async fn fetch_as<T: DeserializeOwned>(
        &self,
        endpoint: ReportEndpoint,
        params: &QueryParams,
    ) -> Result<T> {
        let body = self.fetcher.fetch(endpoint, params).await?;
        serde_json::from_value(body).map_err(|e| {
            let err = ReportError::decode(endpoint, params, e);
            error!("{}", err);
            err
        })
    }
}

#[async_trait]
impl ReportServiceTrait for ReportService {
    async fn monthly_balances(&self, range: &MonthRange) -> Result<Vec<MonthlyBalanceRecord>> {
        let periods = range.periods();
        debug!(
            "Fetching monthly balances for {} periods ({} to {})",
            periods.len(),
            range.start,
            range.end
        );
        if periods.is_empty() {
            return Ok(Vec::new());
        }

        // try_join_all yields results in input order, whatever order the
        // requests complete in.
        let fetches = periods.into_iter().map(|period| async move {
            let response: MonthlyBalanceResponse = self
                .fetch_as(ReportEndpoint::MonthlyBalance, &period.params())
                .await?;
            Ok::<_, ReportError>(MonthlyBalanceRecord::from_response(period, response))
        });

        try_join_all(fetches).await
    }

    async fn payments(&self, range: &DateRange) -> Result<Vec<Payment>> {
        let response: IncomeExpenseResponse = self
            .fetch_as(ReportEndpoint::IncomeExpense, &range.params())
            .await?;
        debug!("Fetched {} payments", response.payments.len());
        Ok(response.payments)
    }

    async fn income_expense_summary(&self, range: &DateRange) -> Result<IncomeExpenseSummary> {
        let (payments, provider_expenses, extra_expenses) = futures::try_join!(
            self.payments(range),
            self.provider_expenses(range),
            self.extra_expenses(range),
        )?;
        aggregation::income_expense_summary(&payments, &provider_expenses, &extra_expenses)
    }

    async fn delinquency_groups(&self) -> Result<Vec<DelinquencyGroup>> {
        let response: DelinquencyResponse = self
            .fetch_as(ReportEndpoint::Delinquency, &QueryParams::new())
            .await?;
        aggregation::group_fines(&response.fines)
    }

    async fn reserve_fund_entries(&self) -> Result<Vec<ReserveFundEntry>> {
        self.fetch_as(ReportEndpoint::ReserveFund, &QueryParams::new())
            .await
    }

    async fn reserve_fund_snapshot(&self) -> Result<ReserveFundSnapshot> {
        let entries = self.reserve_fund_entries().await?;
        aggregation::reserve_fund_snapshot(&entries)
    }

    async fn provider_expenses(&self, range: &DateRange) -> Result<Vec<ProviderExpenseRow>> {
        let records: Vec<ProviderExpenseRecord> = self
            .fetch_as(ReportEndpoint::ProviderExpenses, &range.params())
            .await?;
        Ok(records.into_iter().map(ProviderExpenseRow::from).collect())
    }

    async fn extra_expenses(&self, range: &DateRange) -> Result<Vec<ExtraExpenseRow>> {
        self.fetch_as(ReportEndpoint::ExtraExpenses, &range.params())
            .await
    }

    async fn collection(&self, range: &DateRange) -> Result<Vec<CollectionRow>> {
        self.fetch_as(ReportEndpoint::Collection, &range.params())
            .await
    }

    async fn budget_vs_actual(&self, year: i32) -> Result<Vec<BudgetVsActualRow>> {
        let params = QueryParams::new().with("year", year);
        self.fetch_as(ReportEndpoint::BudgetVsActual, &params).await
    }

    async fn annual_summary(&self, year: i32) -> Result<AnnualSummary> {
        let params = QueryParams::new().with("year", year);
        self.fetch_as(ReportEndpoint::AnnualSummary, &params).await
    }

    async fn bank_reconciliation(&self) -> Result<Value> {
        self.fetcher
            .fetch(ReportEndpoint::BankReconciliation, &QueryParams::new())
            .await
    }

    async fn dashboard(&self, request: &DashboardRequest) -> Result<DashboardSnapshot> {
        debug!("Loading dashboard for {}", request.months);
        let (
            monthly_balances,
            income_expense,
            delinquency,
            collection,
            budget_vs_actual,
            annual_summary,
            reserve_fund,
            provider_expenses,
            extra_expenses,
        ) = futures::try_join!(
            self.monthly_balances(&request.months),
            self.income_expense_summary(&request.income_expense),
            self.delinquency_groups(),
            self.collection(&request.collection),
            self.budget_vs_actual(request.year),
            self.annual_summary(request.year),
            self.reserve_fund_snapshot(),
            self.provider_expenses(&request.provider_expenses),
            self.extra_expenses(&request.extra_expenses),
        )?;

        let collection_by_month = aggregation::collection_by_month(&collection)?;

        Ok(DashboardSnapshot {
            monthly_balances,
            income_expense,
            delinquency,
            collection,
            collection_by_month,
            budget_vs_actual,
            annual_summary,
            reserve_fund,
            provider_expenses,
            extra_expenses,
        })
    }
}
