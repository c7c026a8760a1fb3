use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use condodash_reports::Period;

#[derive(Parser)]
#[command(name = "condodash")]
#[command(about = "Property-management dashboard reports from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Month boundaries; omitted ends fall back to the configured trailing window.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct MonthArgs {
    /// First month (YYYY-MM)
    #[arg(long)]
    pub from: Option<Period>,

    /// Last month (YYYY-MM)
    #[arg(long)]
    pub to: Option<Period>,
}

/// Date boundaries; omitted ends fall back to year-to-date.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct DateArgs {
    /// First day (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Last day (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<NaiveDate>,
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct YearArgs {
    /// Calendar year, defaults to the current one
    #[arg(long)]
    pub year: Option<i32>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Balance per month, in month order
    MonthlyBalance(MonthArgs),

    /// Income versus expense totals for a month range
    IncomeExpense(MonthArgs),

    /// Overdue fines grouped per resident
    Delinquency,

    /// Reserve fund totals and health percentage
    ReserveFund,

    /// Collected payments, with per-month totals
    Collection(DateArgs),

    /// Expenses attributed to service providers
    ProviderExpenses(DateArgs),

    /// One-off expenses
    ExtraExpenses(DateArgs),

    /// Budget against actual spend per category
    BudgetVsActual(YearArgs),

    /// Yearly income and expense totals
    AnnualSummary(YearArgs),

    /// Raw bank reconciliation document
    BankReconciliation,

    /// Every dashboard report at once, using the default ranges
    Dashboard,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_month_bounds() {
        let cli = Cli::try_parse_from([
            "condodash",
            "monthly-balance",
            "--from",
            "2024-11",
            "--to",
            "2025-02",
        ])
        .unwrap();
        match cli.command {
            Commands::MonthlyBalance(args) => {
                assert_eq!(args.from, Some(Period::new(2024, 11).unwrap()));
                assert_eq!(args.to, Some(Period::new(2025, 2).unwrap()));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_invalid_month() {
        assert!(Cli::try_parse_from(["condodash", "monthly-balance", "--from", "2025-13"]).is_err());
    }

    #[test]
    fn test_parses_dates_and_year() {
        let cli =
            Cli::try_parse_from(["condodash", "collection", "--start", "2025-03-01"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Collection(DateArgs { start: Some(_), end: None })
        ));

        let cli = Cli::try_parse_from(["condodash", "annual-summary", "--year", "2024"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::AnnualSummary(YearArgs { year: Some(2024) })
        ));
    }
}
