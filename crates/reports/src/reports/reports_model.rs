//! Report records as the API sends them and as the presentation layer
//! consumes them.
//!
//! Wire types are `Deserialize` only and stay crate-private where the view
//! model differs; view models are `Serialize` with camelCase field names.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{ReportError, Result};
use crate::periods::Period;
use crate::utils::serde_utils::{
    amount_or_zero, id_string, null_as_default, optional_amount, optional_date,
};

// ============================================================================
// Monthly balance
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MonthlyBalanceResponse {
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub incomes: Decimal,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub expenses: Decimal,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub balance: Decimal,
}

/// Balance for one month, tagged with the period it was fetched for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBalanceRecord {
    pub period: Period,
    pub incomes: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

impl MonthlyBalanceRecord {
    pub(crate) fn from_response(period: Period, response: MonthlyBalanceResponse) -> Self {
        Self {
            period,
            incomes: response.incomes,
            expenses: response.expenses,
            balance: response.balance,
        }
    }
}

// ============================================================================
// Income / expense
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct IncomeExpenseResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub payments: Vec<Payment>,
}

/// A resident payment counted as income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub amount: Decimal,
    #[serde(default, deserialize_with = "optional_date")]
    pub payment_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeExpenseSummary {
    pub incomes: Decimal,
    pub expenses: Decimal,
}

impl IncomeExpenseSummary {
    /// `None` when the difference does not fit in a `Decimal`.
    pub fn net(&self) -> Option<Decimal> {
        self.incomes.checked_sub(self.expenses)
    }
}

// ============================================================================
// Delinquency
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DelinquencyResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub fines: Vec<Fine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

/// A single overdue fine, as listed by the `delinquency` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fine {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub resident: Resident,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentInfo {
    pub name: String,
    pub unit_number: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FineLine {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
}

/// All fines of one resident with their subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelinquencyGroup {
    pub resident_id: String,
    pub resident_info: ResidentInfo,
    pub fines: Vec<FineLine>,
    pub subtotal: Decimal,
}

impl DelinquencyGroup {
    pub(crate) fn open(resident: &Resident) -> Self {
        Self {
            resident_id: resident.id.clone(),
            resident_info: ResidentInfo {
                name: resident.name.clone(),
                unit_number: resident.unit_number.clone(),
                email: resident.email.clone(),
            },
            fines: Vec::new(),
            subtotal: Decimal::ZERO,
        }
    }

    pub(crate) fn push(&mut self, fine: &Fine) -> Result<()> {
        self.subtotal = self.subtotal.checked_add(fine.amount).ok_or_else(|| {
            ReportError::AmountOverflow(format!("fines of resident {}", self.resident_id))
        })?;
        self.fines.push(FineLine {
            id: fine.id.clone(),
            description: fine.description.clone(),
            amount: fine.amount,
        });
        Ok(())
    }
}

// ============================================================================
// Reserve fund
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LedgerEntryType {
    Income,
    Expense,
    /// Any tag the API adds later; counted in neither total.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveFundEntry {
    #[serde(rename = "type")]
    pub entry_type: LedgerEntryType,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub amount: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveFundSnapshot {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net: Decimal,
    /// Net over total movement, as a whole percentage. Zero when there is
    /// no movement at all.
    pub percentage: i32,
}

// ============================================================================
// Pass-through reports
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetVsActualRow {
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub budget: Decimal,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub actual: Decimal,
}

impl BudgetVsActualRow {
    /// Remaining budget; negative when overspent.
    pub fn variance(&self) -> Option<Decimal> {
        self.budget.checked_sub(self.actual)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualSummary {
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub incomes: Decimal,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub expenses: Decimal,
}

impl AnnualSummary {
    pub fn net(&self) -> Option<Decimal> {
        self.incomes.checked_sub(self.expenses)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRow {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "optional_date")]
    pub payment_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub amount: Decimal,
}

/// Collected amount for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCollection {
    pub period: Period,
    pub total: Decimal,
    pub payments: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraExpenseRow {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub concept: String,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub amount: Decimal,
    #[serde(default, deserialize_with = "optional_date")]
    pub date: Option<NaiveDate>,
}

// ============================================================================
// Provider expenses
// ============================================================================

/// The `provider-expenses` endpoint has been seen returning two shapes:
/// `{id, providerName, totalAmount}` and
/// `{id, provider: {legalName}, serviceCategory: {name}, netAmount, expenseDate}`.
/// Both decode into this record and are normalised into [`ProviderExpenseRow`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProviderExpenseRecord {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub provider: Option<ProviderInfo>,
    #[serde(default)]
    pub service_category: Option<ServiceCategory>,
    #[serde(default, deserialize_with = "optional_amount")]
    pub total_amount: Option<Decimal>,
    #[serde(default, deserialize_with = "optional_amount")]
    pub net_amount: Option<Decimal>,
    #[serde(default, deserialize_with = "optional_date")]
    pub expense_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProviderInfo {
    #[serde(default)]
    pub legal_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ServiceCategory {
    #[serde(default)]
    pub name: Option<String>,
}

/// An expenditure attributed to an external service provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderExpenseRow {
    pub id: String,
    pub provider_name: Option<String>,
    pub category: Option<String>,
    pub amount: Decimal,
    pub expense_date: Option<NaiveDate>,
}

impl From<ProviderExpenseRecord> for ProviderExpenseRow {
    fn from(record: ProviderExpenseRecord) -> Self {
        let (legal_name, trade_name) = match record.provider {
            Some(info) => (info.legal_name, info.name),
            None => (None, None),
        };
        Self {
            id: record.id,
            provider_name: record.provider_name.or(legal_name).or(trade_name),
            category: record.service_category.and_then(|c| c.name),
            amount: record
                .total_amount
                .or(record.net_amount)
                .unwrap_or(Decimal::ZERO),
            expense_date: record.expense_date,
        }
    }
}
