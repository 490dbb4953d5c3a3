//! Annuity schedule computation.
//!
//! A loan with principal `P`, annual rate `R` (percent) and term `N`
//! (months) is repaid with a fixed monthly payment
//! `M = P * r * (1+r)^N / ((1+r)^N - 1)` where `r = R / 100 / 12`, or
//! `M = P / N` when the rate is zero. Each month the interest portion is
//! computed on the remaining balance and the rest of the payment goes
//! toward principal.
//!
//! The functions here are pure: no side effects, identical output for
//! identical input. Inputs are validated by the caller (`LoanService`);
//! the formula is undefined for a negative rate or a zero term.

use shared::{PaymentPeriod, ScheduleTotals};

/// Round a monetary value to two decimal places for display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the full amortization schedule for a loan.
///
/// Returns exactly `term_months` rows with 1-based period numbers. The
/// per-row monetary fields are rounded to two decimals, but the running
/// balance carried between periods stays unrounded - only the stored
/// `remaining_principal` is rounded (and clamped to zero). With short
/// terms and high rates a single payment can exceed the balance, letting
/// the internal remainder dip below zero before the clamp; that matches
/// the original formula and is left as is.
pub fn calculate_annuity_schedule(
    principal: f64,
    annual_rate: f64,
    term_months: u32,
) -> Vec<PaymentPeriod> {
    let monthly_rate = annual_rate / 100.0 / 12.0;

    let monthly_payment = if monthly_rate == 0.0 {
        principal / term_months as f64
    } else {
        let growth = (1.0 + monthly_rate).powi(term_months as i32);
        principal * monthly_rate * growth / (growth - 1.0)
    };

    let mut remaining = principal;
    let mut schedule = Vec::with_capacity(term_months as usize);

    for period in 1..=term_months {
        let interest = remaining * monthly_rate;
        let principal_payment = monthly_payment - interest;
        remaining -= principal_payment;

        schedule.push(PaymentPeriod {
            period,
            principal_payment: round2(principal_payment),
            interest: round2(interest),
            total_payment: round2(monthly_payment),
            remaining_principal: round2(remaining.max(0.0)),
        });
    }

    schedule
}

/// Sum the rounded per-row values of a schedule, the way the detail view
/// sums its columns.
pub fn schedule_totals(schedule: &[PaymentPeriod]) -> ScheduleTotals {
    let total_principal: f64 = schedule.iter().map(|row| row.principal_payment).sum();
    let total_interest: f64 = schedule.iter().map(|row| row.interest).sum();
    ScheduleTotals {
        total_principal,
        total_interest,
        total_payments: total_principal + total_interest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_has_one_row_per_month() {
        for term in [1u32, 7, 12, 360] {
            let schedule = calculate_annuity_schedule(5000.0, 4.5, term);
            assert_eq!(schedule.len(), term as usize);
            for (i, row) in schedule.iter().enumerate() {
                assert_eq!(row.period, i as u32 + 1);
            }
        }
    }

    #[test]
    fn test_zero_rate_is_pure_principal_amortization() {
        let schedule = calculate_annuity_schedule(1000.0, 0.0, 10);

        assert_eq!(schedule.len(), 10);
        for row in &schedule {
            assert_eq!(row.principal_payment, 100.00);
            assert_eq!(row.interest, 0.00);
            assert_eq!(row.total_payment, 100.00);
        }

        // Balance steps down by exactly 100.00 each month
        let remaining: Vec<f64> = schedule.iter().map(|r| r.remaining_principal).collect();
        assert_eq!(
            remaining,
            vec![900.0, 800.0, 700.0, 600.0, 500.0, 400.0, 300.0, 200.0, 100.0, 0.0]
        );
    }

    #[test]
    fn test_worked_example_1000_at_12_percent_over_12_months() {
        // r = 0.01, M = 1000 * 0.01 * 1.01^12 / (1.01^12 - 1) = 88.85
        let schedule = calculate_annuity_schedule(1000.0, 12.0, 12);

        let first = &schedule[0];
        assert_eq!(first.total_payment, 88.85);
        assert_eq!(first.interest, 10.00);
        assert_eq!(first.principal_payment, 78.85);
        assert_eq!(first.remaining_principal, 921.15);

        let last = &schedule[11];
        assert_eq!(last.remaining_principal, 0.00);
    }

    #[test]
    fn test_monthly_payment_is_constant() {
        let schedule = calculate_annuity_schedule(25000.0, 6.9, 48);
        let payment = schedule[0].total_payment;
        assert!(schedule.iter().all(|row| row.total_payment == payment));
    }

    #[test]
    fn test_principal_payments_sum_back_to_principal() {
        // Per-row rounding drifts by a few cents at most
        let schedule = calculate_annuity_schedule(1000.0, 12.0, 12);
        let total: f64 = schedule.iter().map(|r| r.principal_payment).sum();
        assert!((total - 1000.0).abs() < 0.05, "total principal was {}", total);
    }

    #[test]
    fn test_remaining_principal_is_non_increasing() {
        let schedule = calculate_annuity_schedule(15000.0, 8.25, 36);
        for pair in schedule.windows(2) {
            assert!(pair[1].remaining_principal <= pair[0].remaining_principal);
        }
    }

    #[test]
    fn test_remaining_principal_is_never_negative_after_clamp() {
        // One-month term at a high rate pays everything off in one go
        let schedule = calculate_annuity_schedule(100.0, 99.0, 1);
        assert_eq!(schedule.len(), 1);
        assert!(schedule.iter().all(|row| row.remaining_principal >= 0.0));
        assert_eq!(schedule[0].remaining_principal, 0.00);
    }

    #[test]
    fn test_schedule_is_deterministic() {
        let first = calculate_annuity_schedule(12345.67, 7.89, 60);
        let second = calculate_annuity_schedule(12345.67, 7.89, 60);
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_period_schedule() {
        let schedule = calculate_annuity_schedule(1200.0, 0.0, 1);
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0].period, 1);
        assert_eq!(schedule[0].total_payment, 1200.00);
        assert_eq!(schedule[0].remaining_principal, 0.00);
    }

    #[test]
    fn test_schedule_totals_sum_rounded_rows() {
        let schedule = calculate_annuity_schedule(1000.0, 12.0, 12);
        let totals = schedule_totals(&schedule);

        let expected_interest: f64 = schedule.iter().map(|r| r.interest).sum();
        assert_eq!(totals.total_interest, expected_interest);
        assert!((totals.total_principal - 1000.0).abs() < 0.05);
        assert_eq!(
            totals.total_payments,
            totals.total_principal + totals.total_interest
        );
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(10.006), 10.01);
        assert_eq!(round2(10.004), 10.0);
        assert_eq!(round2(88.84878868), 88.85);
    }
}
