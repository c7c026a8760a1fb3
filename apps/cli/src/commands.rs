use anyhow::Context;
use chrono::{Datelike, NaiveDate};
use condodash_reports::constants::DISPLAY_DECIMAL_PRECISION;
use condodash_reports::reports::aggregation;
use condodash_reports::{
    DashboardRequest, DateRange, MonthRange, ReportServiceTrait, ReportsConfig,
};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::cli::{Commands, DateArgs, MonthArgs, YearArgs};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IncomeExpenseOutput {
    range: DateRange,
    incomes: Decimal,
    expenses: Decimal,
    net: Decimal,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CollectionOutput<T: Serialize, M: Serialize> {
    range: DateRange,
    rows: T,
    by_month: M,
}

fn display(amount: Decimal) -> Decimal {
    amount.round_dp(DISPLAY_DECIMAL_PRECISION)
}

/// Month bounds with the trailing window filling whichever end is missing.
pub fn resolve_months(args: MonthArgs, today: NaiveDate, config: &ReportsConfig) -> MonthRange {
    let trailing = MonthRange::trailing(today, config.default_range_months);
    match (args.from, args.to) {
        (Some(from), Some(to)) => MonthRange::new(from, to),
        (Some(from), None) => MonthRange::new(from, trailing.end),
        (None, Some(to)) => {
            let start = to
                .checked_sub_months(config.default_range_months.max(1) - 1)
                .unwrap_or(to);
            MonthRange::new(start, to)
        }
        (None, None) => trailing,
    }
}

/// Date bounds defaulting to year-to-date.
pub fn resolve_dates(args: DateArgs, today: NaiveDate) -> anyhow::Result<DateRange> {
    let end = args.end.unwrap_or(today);
    let start = match args.start {
        Some(start) => start,
        None => DateRange::year_to_date(end).start(),
    };
    Ok(DateRange::new(start, end)?)
}

pub fn resolve_year(args: YearArgs, today: NaiveDate) -> i32 {
    args.year.unwrap_or_else(|| today.year())
}

/// Runs one report command and returns the JSON document to print.
pub async fn run(
    command: Commands,
    service: &dyn ReportServiceTrait,
    config: &ReportsConfig,
    today: NaiveDate,
) -> anyhow::Result<Value> {
    let value = match command {
        Commands::MonthlyBalance(args) => {
            let range = resolve_months(args, today, config);
            tracing::info!("Monthly balances for {}", range);
            let records = service
                .monthly_balances(&range)
                .await
                .context("Failed to load monthly balances")?;
            serde_json::to_value(records)?
        }
        Commands::IncomeExpense(args) => {
            let range = resolve_months(args, today, config).to_date_range()?;
            let summary = service
                .income_expense_summary(&range)
                .await
                .context("Failed to load income/expense summary")?;
            tracing::info!(
                "Incomes {} / expenses {}",
                display(summary.incomes),
                display(summary.expenses)
            );
            serde_json::to_value(IncomeExpenseOutput {
                range,
                incomes: summary.incomes,
                expenses: summary.expenses,
                net: summary.net().context("Net result overflowed")?,
            })?
        }
        Commands::Delinquency => {
            let groups = service
                .delinquency_groups()
                .await
                .context("Failed to load delinquency report")?;
            tracing::info!("{} residents with overdue fines", groups.len());
            serde_json::to_value(groups)?
        }
        Commands::ReserveFund => {
            let snapshot = service
                .reserve_fund_snapshot()
                .await
                .context("Failed to load reserve fund")?;
            tracing::info!(
                "Reserve fund net {} ({}%)",
                display(snapshot.net),
                snapshot.percentage
            );
            serde_json::to_value(snapshot)?
        }
        Commands::Collection(args) => {
            let range = resolve_dates(args, today)?;
            let rows = service
                .collection(&range)
                .await
                .context("Failed to load collection report")?;
            let by_month = aggregation::collection_by_month(&rows)?;
            serde_json::to_value(CollectionOutput {
                range,
                rows,
                by_month,
            })?
        }
        Commands::ProviderExpenses(args) => {
            let range = resolve_dates(args, today)?;
            let rows = service
                .provider_expenses(&range)
                .await
                .context("Failed to load provider expenses")?;
            tracing::info!(
                "Provider expenses total {}",
                display(aggregation::sum_provider_expenses(&rows)?)
            );
            serde_json::to_value(rows)?
        }
        Commands::ExtraExpenses(args) => {
            let range = resolve_dates(args, today)?;
            let rows = service
                .extra_expenses(&range)
                .await
                .context("Failed to load extra expenses")?;
            tracing::info!(
                "Extra expenses total {}",
                display(aggregation::sum_extra_expenses(&rows)?)
            );
            serde_json::to_value(rows)?
        }
        Commands::BudgetVsActual(args) => {
            let year = resolve_year(args, today);
            let rows = service
                .budget_vs_actual(year)
                .await
                .context("Failed to load budget vs actual")?;
            serde_json::to_value(rows)?
        }
        Commands::AnnualSummary(args) => {
            let year = resolve_year(args, today);
            let summary = service
                .annual_summary(year)
                .await
                .context("Failed to load annual summary")?;
            match summary.net() {
                Some(net) => tracing::info!("{} net {}", year, display(net)),
                None => tracing::warn!("{} net result overflowed", year),
            }
            serde_json::to_value(summary)?
        }
        Commands::BankReconciliation => service
            .bank_reconciliation()
            .await
            .context("Failed to load bank reconciliation")?,
        Commands::Dashboard => {
            let request = DashboardRequest::defaults(today, config)?;
            let snapshot = service
                .dashboard(&request)
                .await
                .context("Failed to load dashboard")?;
            tracing::info!(
                "Dashboard loaded: {} months, reserve fund at {}%",
                snapshot.monthly_balances.len(),
                snapshot.reserve_fund.percentage
            );
            serde_json::to_value(snapshot)?
        }
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use condodash_reports::Period;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn period(year: i32, month: u32) -> Period {
        Period::new(year, month).unwrap()
    }

    #[test]
    fn test_months_default_to_trailing_window() {
        let range = resolve_months(
            MonthArgs::default(),
            date(2025, 6, 18),
            &ReportsConfig::default(),
        );
        assert_eq!(range.start, period(2025, 1));
        assert_eq!(range.end, period(2025, 6));
    }

    #[test]
    fn test_months_fill_missing_start_from_window() {
        let args = MonthArgs {
            from: None,
            to: Some(period(2025, 2)),
        };
        let range = resolve_months(args, date(2025, 6, 18), &ReportsConfig::default());
        assert_eq!(range.start, period(2024, 9));
        assert_eq!(range.end, period(2025, 2));
    }

    #[test]
    fn test_months_fill_missing_end_with_current_month() {
        let args = MonthArgs {
            from: Some(period(2024, 11)),
            to: None,
        };
        let range = resolve_months(args, date(2025, 6, 18), &ReportsConfig::default());
        assert_eq!(range.end, period(2025, 6));
        assert_eq!(range.len(), 8);
    }

    #[test]
    fn test_dates_default_to_year_to_date() {
        let range = resolve_dates(DateArgs::default(), date(2025, 6, 18)).unwrap();
        assert_eq!(range.start(), date(2025, 1, 1));
        assert_eq!(range.end(), date(2025, 6, 18));
    }

    #[test]
    fn test_reversed_dates_are_rejected() {
        let args = DateArgs {
            start: Some(date(2025, 7, 1)),
            end: Some(date(2025, 6, 1)),
        };
        assert!(resolve_dates(args, date(2025, 6, 18)).is_err());
    }

    #[test]
    fn test_year_defaults_to_current() {
        assert_eq!(resolve_year(YearArgs::default(), date(2025, 6, 18)), 2025);
        assert_eq!(resolve_year(YearArgs { year: Some(2023) }, date(2025, 6, 18)), 2023);
    }
}
