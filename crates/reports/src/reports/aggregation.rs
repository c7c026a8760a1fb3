//! Pure reductions from raw report records to view models.
//!
//! Nothing here performs I/O; the service fetches and decodes, then hands
//! the records to these functions. All sums are exact `Decimal` additions.

use std::collections::{BTreeMap, HashMap};

use log::debug;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use crate::errors::{ReportError, Result};
use crate::periods::Period;

use super::reports_model::{
    CollectionRow, DelinquencyGroup, ExtraExpenseRow, Fine, IncomeExpenseSummary,
    LedgerEntryType, MonthlyCollection, Payment, ProviderExpenseRow, ReserveFundEntry,
    ReserveFundSnapshot,
};

/// Adds `amounts`, failing instead of panicking when the total leaves the
/// `Decimal` range.
fn checked_total<I>(amounts: I, what: &str) -> Result<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
        .ok_or_else(|| ReportError::AmountOverflow(what.to_string()))
}

pub fn sum_payments(payments: &[Payment]) -> Result<Decimal> {
    checked_total(payments.iter().map(|p| p.amount), "payments")
}

pub fn sum_provider_expenses(rows: &[ProviderExpenseRow]) -> Result<Decimal> {
    checked_total(rows.iter().map(|r| r.amount), "provider expenses")
}

pub fn sum_extra_expenses(rows: &[ExtraExpenseRow]) -> Result<Decimal> {
    checked_total(rows.iter().map(|r| r.amount), "extra expenses")
}

/// Incomes are resident payments; expenses are provider plus extra expenses.
pub fn income_expense_summary(
    payments: &[Payment],
    provider_expenses: &[ProviderExpenseRow],
    extra_expenses: &[ExtraExpenseRow],
) -> Result<IncomeExpenseSummary> {
    let expenses = checked_total(
        [
            sum_provider_expenses(provider_expenses)?,
            sum_extra_expenses(extra_expenses)?,
        ],
        "expenses",
    )?;
    Ok(IncomeExpenseSummary {
        incomes: sum_payments(payments)?,
        expenses,
    })
}

/// Groups fines by resident id.
///
/// Every fine lands in exactly one group. Groups appear in the order their
/// resident was first seen, and fines keep their source order inside a group.
/// Resident details are taken from the first fine of each resident.
pub fn group_fines(fines: &[Fine]) -> Result<Vec<DelinquencyGroup>> {
    let mut groups: Vec<DelinquencyGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for fine in fines {
        let slot = *index.entry(fine.resident.id.as_str()).or_insert_with(|| {
            groups.push(DelinquencyGroup::open(&fine.resident));
            groups.len() - 1
        });
        groups[slot].push(fine)?;
    }

    debug!(
        "Grouped {} fines into {} delinquent residents",
        fines.len(),
        groups.len()
    );
    Ok(groups)
}

pub fn reserve_fund_snapshot(entries: &[ReserveFundEntry]) -> Result<ReserveFundSnapshot> {
    let total_income = checked_total(
        ledger_amounts(entries, LedgerEntryType::Income),
        "reserve fund income",
    )?;
    let total_expense = checked_total(
        ledger_amounts(entries, LedgerEntryType::Expense),
        "reserve fund expense",
    )?;
    let overflow = || ReportError::AmountOverflow("reserve fund".to_string());
    let net = total_income.checked_sub(total_expense).ok_or_else(overflow)?;
    let total = total_income.checked_add(total_expense).ok_or_else(overflow)?;

    Ok(ReserveFundSnapshot {
        total_income,
        total_expense,
        net,
        percentage: reserve_fund_percentage(net, total),
    })
}

fn ledger_amounts(
    entries: &[ReserveFundEntry],
    wanted: LedgerEntryType,
) -> impl Iterator<Item = Decimal> + '_ {
    entries
        .iter()
        .filter(move |e| e.entry_type == wanted)
        .map(|e| e.amount)
}

/// `round(net / total * 100)`, rounding halves up, and `0` for a
/// non-positive total.
pub fn reserve_fund_percentage(net: Decimal, total: Decimal) -> i32 {
    if total <= Decimal::ZERO {
        return 0;
    }
    net.checked_div(total)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .and_then(|pct| pct.checked_add(Decimal::new(5, 1)))
        .map(|pct| pct.floor())
        .and_then(|pct| pct.to_i32())
        .unwrap_or(0)
}

/// Totals collected per month, ascending. Rows without a payment date
/// cannot be placed and are left out.
pub fn collection_by_month(rows: &[CollectionRow]) -> Result<Vec<MonthlyCollection>> {
    let mut by_period: BTreeMap<Period, MonthlyCollection> = BTreeMap::new();
    for row in rows {
        let Some(date) = row.payment_date else {
            debug!("Collection row {} has no payment date, skipping", row.id);
            continue;
        };
        let period = Period::from_date(date);
        let bucket = by_period.entry(period).or_insert_with(|| MonthlyCollection {
            period,
            total: Decimal::ZERO,
            payments: 0,
        });
        bucket.total = bucket
            .total
            .checked_add(row.amount)
            .ok_or_else(|| ReportError::AmountOverflow(format!("collection for {}", period)))?;
        bucket.payments += 1;
    }
    Ok(by_period.into_values().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::reports_model::Resident;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn payment(amount: Decimal) -> Payment {
        Payment {
            amount,
            payment_date: None,
        }
    }

    fn fine(id: &str, resident: &str, amount: Decimal) -> Fine {
        Fine {
            id: id.to_string(),
            resident: Resident {
                id: resident.to_string(),
                name: format!("Resident {}", resident),
                unit_number: format!("{}-1", resident),
                email: format!("{}@example.com", resident.to_lowercase()),
            },
            description: format!("Fine {}", id),
            amount,
        }
    }

    fn entry(entry_type: LedgerEntryType, amount: Decimal) -> ReserveFundEntry {
        ReserveFundEntry { entry_type, amount }
    }

    fn provider(amount: Decimal) -> ProviderExpenseRow {
        ProviderExpenseRow {
            id: "p".to_string(),
            provider_name: None,
            category: None,
            amount,
            expense_date: None,
        }
    }

    fn extra(amount: Decimal) -> ExtraExpenseRow {
        ExtraExpenseRow {
            id: "e".to_string(),
            concept: "Pintura".to_string(),
            amount,
            date: None,
        }
    }

    #[test]
    fn test_income_expense_summary() {
        let summary = income_expense_summary(
            &[payment(dec!(100)), payment(dec!(50))],
            &[provider(dec!(30))],
            &[extra(dec!(20))],
        )
        .unwrap();
        assert_eq!(summary.incomes, dec!(150));
        assert_eq!(summary.expenses, dec!(50));
        assert_eq!(summary.net(), Some(dec!(100)));
    }

    #[test]
    fn test_sums_do_not_drift() {
        let payments: Vec<Payment> = (0..10).map(|_| payment(dec!(0.1))).collect();
        assert_eq!(sum_payments(&payments).unwrap(), dec!(1.0));
    }

    #[test]
    fn test_sums_report_overflow_instead_of_panicking() {
        let payments = vec![payment(Decimal::MAX), payment(Decimal::MAX)];
        assert!(matches!(
            sum_payments(&payments),
            Err(ReportError::AmountOverflow(_))
        ));

        let result = income_expense_summary(&[], &[provider(Decimal::MAX)], &[extra(dec!(1))]);
        assert!(matches!(result, Err(ReportError::AmountOverflow(_))));
    }

    #[test]
    fn test_group_fines_reports_overflow() {
        let fines = vec![fine("f1", "A", Decimal::MAX), fine("f2", "A", Decimal::MAX)];
        assert!(matches!(
            group_fines(&fines),
            Err(ReportError::AmountOverflow(_))
        ));
    }

    #[test]
    fn test_reserve_fund_reports_overflow() {
        let result = reserve_fund_snapshot(&[
            entry(LedgerEntryType::Income, Decimal::MAX),
            entry(LedgerEntryType::Expense, Decimal::MAX),
        ]);
        assert!(matches!(result, Err(ReportError::AmountOverflow(_))));
    }

    #[test]
    fn test_group_fines_preserves_first_seen_order() {
        let fines = vec![
            fine("f1", "B", dec!(5)),
            fine("f2", "A", dec!(40)),
            fine("f3", "B", dec!(7.5)),
            fine("f4", "A", dec!(10)),
        ];
        let groups = group_fines(&fines).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].resident_id, "B");
        assert_eq!(groups[1].resident_id, "A");
        assert_eq!(groups[0].subtotal, dec!(12.5));
        assert_eq!(groups[1].subtotal, dec!(50));

        let a_ids: Vec<&str> = groups[1].fines.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(a_ids, vec!["f2", "f4"]);
        assert_eq!(groups[1].resident_info.unit_number, "A-1");
    }

    #[test]
    fn test_group_fines_empty() {
        assert!(group_fines(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_reserve_fund_snapshot() {
        let snapshot = reserve_fund_snapshot(&[
            entry(LedgerEntryType::Income, dec!(1000)),
            entry(LedgerEntryType::Expense, dec!(400)),
        ])
        .unwrap();
        assert_eq!(snapshot.total_income, dec!(1000));
        assert_eq!(snapshot.total_expense, dec!(400));
        assert_eq!(snapshot.net, dec!(600));
        assert_eq!(snapshot.percentage, 43);
    }

    #[test]
    fn test_reserve_fund_empty_is_zero_percent() {
        let snapshot = reserve_fund_snapshot(&[]).unwrap();
        assert_eq!(snapshot.percentage, 0);
        assert_eq!(snapshot.net, Decimal::ZERO);
    }

    #[test]
    fn test_reserve_fund_ignores_unknown_types() {
        let snapshot = reserve_fund_snapshot(&[
            entry(LedgerEntryType::Income, dec!(100)),
            entry(LedgerEntryType::Other, dec!(900)),
        ])
        .unwrap();
        assert_eq!(snapshot.total_income, dec!(100));
        assert_eq!(snapshot.total_expense, Decimal::ZERO);
        assert_eq!(snapshot.percentage, 100);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(reserve_fund_percentage(dec!(1), dec!(8)), 13); // 12.5
        assert_eq!(reserve_fund_percentage(dec!(-1), dec!(40)), -2); // -2.5
        assert_eq!(reserve_fund_percentage(dec!(-300), dec!(500)), -60);
        assert_eq!(reserve_fund_percentage(dec!(5), dec!(0)), 0);
        assert_eq!(reserve_fund_percentage(Decimal::MAX, dec!(0.0001)), 0);
    }

    #[test]
    fn test_collection_by_month() {
        let row = |id: &str, d: u32, m: u32, amount: Decimal| CollectionRow {
            id: id.to_string(),
            payment_date: NaiveDate::from_ymd_opt(2025, m, d),
            amount,
        };
        let rows = vec![
            row("1", 20, 6, dec!(100)),
            row("2", 2, 5, dec!(80)),
            row("3", 1, 6, dec!(25.5)),
            CollectionRow {
                id: "4".to_string(),
                payment_date: None,
                amount: dec!(999),
            },
        ];
        let months = collection_by_month(&rows).unwrap();

        assert_eq!(months.len(), 2);
        assert_eq!(months[0].period, Period::new(2025, 5).unwrap());
        assert_eq!(months[0].total, dec!(80));
        assert_eq!(months[1].total, dec!(125.5));
        assert_eq!(months[1].payments, 2);
    }
}
