//! Property-based integration tests for period enumeration and report
//! aggregation.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use std::collections::HashSet;

use condodash_reports::reports::aggregation::{group_fines, reserve_fund_snapshot};
use condodash_reports::reports::{Fine, LedgerEntryType, Resident, ReserveFundEntry};
use condodash_reports::{enumerate_periods, MonthRange, Period};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

/// Generates a valid (year, month) pair.
fn arb_year_month() -> impl Strategy<Value = (i32, u32)> {
    (1990i32..2100, 1u32..=12)
}

/// Generates a non-negative amount with two decimal places.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generates a fine for one of a small pool of residents, so that residents
/// repeat often.
fn arb_fine() -> impl Strategy<Value = Fine> {
    (0u8..6, "[a-z]{4,12}", arb_amount()).prop_map(|(resident, description, amount)| {
        let resident_id = format!("r{}", resident);
        Fine {
            id: String::new(),
            resident: Resident {
                id: resident_id.clone(),
                name: format!("Resident {}", resident),
                unit_number: format!("U-{}", resident),
                email: format!("{}@example.com", resident_id),
            },
            description,
            amount,
        }
    })
}

/// Generates a list of fines with unique ids.
fn arb_fines(max_count: usize) -> impl Strategy<Value = Vec<Fine>> {
    proptest::collection::vec(arb_fine(), 0..=max_count).prop_map(|fines| {
        fines
            .into_iter()
            .enumerate()
            .map(|(i, mut fine)| {
                fine.id = format!("f{}", i);
                fine
            })
            .collect()
    })
}

/// Generates a reserve-fund ledger entry.
fn arb_ledger_entry() -> impl Strategy<Value = ReserveFundEntry> {
    (
        prop_oneof![
            Just(LedgerEntryType::Income),
            Just(LedgerEntryType::Expense),
            Just(LedgerEntryType::Other),
        ],
        arb_amount(),
    )
        .prop_map(|(entry_type, amount)| ReserveFundEntry { entry_type, amount })
}

fn month_index(year: i32, month: u32) -> i64 {
    i64::from(year) * 12 + i64::from(month) - 1
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Consecutive periods are exactly one calendar month apart, the sequence
    /// starts and ends on the requested boundaries, and its length is the
    /// month distance plus one.
    #[test]
    fn prop_enumeration_steps_one_month(
        (start_year, start_month) in arb_year_month(),
        (end_year, end_month) in arb_year_month(),
    ) {
        let periods = enumerate_periods(start_year, start_month, end_year, end_month).unwrap();
        let distance = month_index(end_year, end_month) - month_index(start_year, start_month);

        if distance < 0 {
            prop_assert!(periods.is_empty());
        } else {
            prop_assert_eq!(periods.len() as i64, distance + 1);
            let first = periods.first().unwrap();
            let last = periods.last().unwrap();
            prop_assert_eq!((first.year(), first.month()), (start_year, start_month));
            prop_assert_eq!((last.year(), last.month()), (end_year, end_month));

            for pair in periods.windows(2) {
                prop_assert_eq!(
                    month_index(pair[1].year(), pair[1].month())
                        - month_index(pair[0].year(), pair[0].month()),
                    1
                );
            }
        }
    }

    /// `MonthRange` reports the same length as the periods it enumerates.
    #[test]
    fn prop_month_range_len_matches_periods(
        (start_year, start_month) in arb_year_month(),
        (end_year, end_month) in arb_year_month(),
    ) {
        let range = MonthRange::new(
            Period::new(start_year, start_month).unwrap(),
            Period::new(end_year, end_month).unwrap(),
        );
        prop_assert_eq!(range.len(), range.periods().len());
        prop_assert_eq!(range.is_empty(), range.periods().is_empty());
    }

    /// Every fine lands in exactly one group, under its own resident, and
    /// each subtotal is the sum of that group's fines.
    #[test]
    fn prop_grouping_partitions_fines(fines in arb_fines(40)) {
        let groups = group_fines(&fines).unwrap();

        let grouped: usize = groups.iter().map(|g| g.fines.len()).sum();
        prop_assert_eq!(grouped, fines.len());

        let ids: HashSet<&str> = groups
            .iter()
            .flat_map(|g| g.fines.iter().map(|f| f.id.as_str()))
            .collect();
        prop_assert_eq!(ids.len(), fines.len());

        let residents: HashSet<&str> = groups.iter().map(|g| g.resident_id.as_str()).collect();
        prop_assert_eq!(residents.len(), groups.len());

        for group in &groups {
            let subtotal: Decimal = group.fines.iter().map(|f| f.amount).sum();
            prop_assert_eq!(group.subtotal, subtotal);
            for line in &group.fines {
                let source = fines.iter().find(|f| f.id == line.id).unwrap();
                prop_assert_eq!(&source.resident.id, &group.resident_id);
            }
        }

        let total: Decimal = fines.iter().map(|f| f.amount).sum();
        let subtotals: Decimal = groups.iter().map(|g| g.subtotal).sum();
        prop_assert_eq!(total, subtotals);
    }

    /// Groups appear in the order their resident first appears.
    #[test]
    fn prop_grouping_keeps_first_seen_order(fines in arb_fines(40)) {
        let groups = group_fines(&fines).unwrap();

        let mut expected: Vec<&str> = Vec::new();
        for fine in &fines {
            if !expected.contains(&fine.resident.id.as_str()) {
                expected.push(fine.resident.id.as_str());
            }
        }
        let actual: Vec<&str> = groups.iter().map(|g| g.resident_id.as_str()).collect();
        prop_assert_eq!(actual, expected);
    }

    /// With non-negative amounts the percentage stays within -100..=100,
    /// follows the sign of the net and is zero when nothing moved.
    #[test]
    fn prop_reserve_percentage_bounded(
        entries in proptest::collection::vec(arb_ledger_entry(), 0..30)
    ) {
        let snapshot = reserve_fund_snapshot(&entries).unwrap();

        prop_assert!((-100..=100).contains(&snapshot.percentage));
        prop_assert_eq!(snapshot.net, snapshot.total_income - snapshot.total_expense);

        if snapshot.total_income + snapshot.total_expense == Decimal::ZERO {
            prop_assert_eq!(snapshot.percentage, 0);
        }
        if snapshot.percentage > 0 {
            prop_assert!(snapshot.net > Decimal::ZERO);
        }
        if snapshot.percentage < 0 {
            prop_assert!(snapshot.net < Decimal::ZERO);
        }
    }
}
