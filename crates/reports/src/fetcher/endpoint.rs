//! Report endpoint identifiers and query parameters.

use std::fmt;

/// The report endpoints exposed by the property-management API.
///
/// Every endpoint lives under `/reports/<name>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportEndpoint {
    MonthlyBalance,
    IncomeExpense,
    Delinquency,
    Collection,
    BudgetVsActual,
    AnnualSummary,
    ReserveFund,
    ProviderExpenses,
    ExtraExpenses,
    BankReconciliation,
}

impl ReportEndpoint {
    /// Endpoint name as it appears in the URL.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MonthlyBalance => "monthly-balance",
            Self::IncomeExpense => "income-expense",
            Self::Delinquency => "delinquency",
            Self::Collection => "collection",
            Self::BudgetVsActual => "budget-vs-actual",
            Self::AnnualSummary => "annual-summary",
            Self::ReserveFund => "reserve-fund",
            Self::ProviderExpenses => "provider-expenses",
            Self::ExtraExpenses => "extra-expenses",
            Self::BankReconciliation => "bank-reconciliation",
        }
    }

    /// Path relative to the API base URL.
    pub fn path(&self) -> String {
        format!("reports/{}", self.name())
    }
}

impl fmt::Display for ReportEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered query parameters for a report call.
///
/// Insertion order is kept so that log lines and error messages read the
/// same way the request was built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &'static str, value: impl ToString) -> Self {
        self.0.push((key, value.to_string()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn as_slice(&self) -> &[(&'static str, String)] {
        &self.0
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("no params");
        }
        let joined = self
            .0
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        f.write_str(&joined)
    }
}
