// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Loan amortization.
//!
//! Fixed-payment amortization: a constant monthly installment covers the
//! interest accrued on the outstanding balance plus enough principal to reach
//! zero at term end.
//!
//! # Example
//!
//! ```
//! use fincalc_rs::{LoanTerms, compute_amortization};
//! use rust_decimal_macros::dec;
//!
//! let terms = LoanTerms {
//!     principal: dec!(1_200_000),
//!     annual_rate_percent: dec!(0),
//!     term_months: 12,
//! };
//! let result = compute_amortization(&terms).unwrap();
//! assert_eq!(result.monthly_payment, dec!(100_000));
//! assert_eq!(result.total_interest, dec!(0));
//! ```

use crate::base;
use crate::error::CalcError;
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

/// Input terms for a loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed.
    pub principal: Decimal,
    /// Annual interest rate as a percentage (`12` means 12% per year).
    pub annual_rate_percent: Decimal,
    /// Repayment term in months. Must be at least 1.
    pub term_months: u32,
}

/// Summary of an amortized loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationResult {
    /// Fixed monthly installment, rounded to minor units.
    pub monthly_payment: Decimal,
    /// `monthly_payment × term_months` (for a positive rate), or exactly the
    /// principal for an interest-free loan.
    pub total_payment: Decimal,
    /// `total_payment − principal`.
    pub total_interest: Decimal,
}

/// One row of a repayment schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Installment number, starting at 1.
    pub month: u32,
    /// Amount due this month (`interest + principal`).
    pub payment: Decimal,
    /// Interest accrued on the balance carried into this month.
    pub interest: Decimal,
    /// Principal repaid this month.
    pub principal: Decimal,
    /// Outstanding balance after this installment.
    pub balance: Decimal,
}

/// Computes the fixed monthly payment and totals for a loan.
///
/// Uses the standard amortization formula
/// `PMT = P · r(1+r)^n / ((1+r)^n − 1)` with the monthly rate
/// `r = annual_rate_percent / 100 / 12`. The payment is rounded half-even to
/// minor units and the totals are derived from the rounded payment, so
/// `total_payment == monthly_payment × term_months` holds exactly.
///
/// An interest-free loan (`annual_rate_percent == 0`) repays the principal in
/// equal installments: `total_payment` is exactly the principal and
/// `total_interest` is zero. When the principal does not divide evenly by the
/// term, the rounded installment times the term can differ from the principal
/// by under one minor unit per month.
///
/// # Errors
///
/// - [`CalcError::InvalidTerm`] - `term_months` is zero.
/// - [`CalcError::NegativePrincipal`] - `principal` is negative.
/// - [`CalcError::NegativeRate`] - `annual_rate_percent` is negative.
pub fn compute_amortization(terms: &LoanTerms) -> Result<AmortizationResult, CalcError> {
    base::check_terms(terms.principal, terms.annual_rate_percent, terms.term_months)?;

    let rate = base::monthly_rate(terms.annual_rate_percent);
    let months = Decimal::from(terms.term_months);

    if rate.is_zero() {
        return Ok(AmortizationResult {
            monthly_payment: base::round_money(terms.principal / months),
            total_payment: terms.principal,
            total_interest: Decimal::ZERO,
        });
    }

    let factor = (Decimal::ONE + rate).powu(u64::from(terms.term_months));
    let monthly_payment =
        base::round_money(terms.principal * rate * factor / (factor - Decimal::ONE));
    let total_payment = monthly_payment * months;

    Ok(AmortizationResult {
        monthly_payment,
        total_payment,
        total_interest: total_payment - terms.principal,
    })
}

/// Computes the month-by-month repayment schedule for a loan.
///
/// Each row accrues interest on the outstanding balance, rounds it to minor
/// units, and applies the remainder of the fixed installment to principal.
/// The final installment clears the balance exactly, absorbing the rounding
/// residual accumulated over the term, so its payment can differ from
/// [`AmortizationResult::monthly_payment`] by a few minor units.
///
/// # Errors
///
/// Same conditions as [`compute_amortization`].
pub fn amortization_schedule(terms: &LoanTerms) -> Result<Vec<ScheduleEntry>, CalcError> {
    let summary = compute_amortization(terms)?;
    let rate = base::monthly_rate(terms.annual_rate_percent);

    let mut balance = base::round_money(terms.principal);
    let mut schedule = Vec::with_capacity(terms.term_months as usize);

    for month in 1..=terms.term_months {
        let interest = base::round_money(balance * rate);
        let principal = if month == terms.term_months {
            balance
        } else {
            (summary.monthly_payment - interest).clamp(Decimal::ZERO, balance)
        };
        balance -= principal;
        schedule.push(ScheduleEntry {
            month,
            payment: interest + principal,
            interest,
            principal,
            balance,
        });
    }

    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn terms(principal: Decimal, rate: Decimal, months: u32) -> LoanTerms {
        LoanTerms {
            principal,
            annual_rate_percent: rate,
            term_months: months,
        }
    }

    #[test]
    fn zero_rate_splits_principal_evenly() {
        let result = compute_amortization(&terms(dec!(1_200_000), dec!(0), 12)).unwrap();
        assert_eq!(result.monthly_payment, dec!(100_000));
        assert_eq!(result.total_payment, dec!(1_200_000));
        assert_eq!(result.total_interest, Decimal::ZERO);
    }

    #[test]
    fn standard_amortization_matches_closed_form() {
        // 1,000,000 at 12% over 12 months: monthly rate 1%.
        let result = compute_amortization(&terms(dec!(1_000_000), dec!(12), 12)).unwrap();
        assert_eq!(result.monthly_payment, dec!(88848.79));
        assert_eq!(result.total_payment, dec!(1066185.48));
        assert_eq!(result.total_interest, dec!(66185.48));
    }

    #[test]
    fn totals_derive_from_rounded_payment() {
        let result = compute_amortization(&terms(dec!(350_000), dec!(9.5), 36)).unwrap();
        assert_eq!(
            result.total_payment,
            result.monthly_payment * Decimal::from(36)
        );
        assert_eq!(result.total_interest, result.total_payment - dec!(350_000));
    }

    #[test]
    fn zero_principal_costs_nothing() {
        let result = compute_amortization(&terms(Decimal::ZERO, dec!(12), 12)).unwrap();
        assert_eq!(result.monthly_payment, Decimal::ZERO);
        assert_eq!(result.total_payment, Decimal::ZERO);
        assert_eq!(result.total_interest, Decimal::ZERO);
    }

    #[test]
    fn zero_term_is_rejected() {
        let result = compute_amortization(&terms(dec!(1_000_000), dec!(5), 0));
        assert_eq!(result, Err(CalcError::InvalidTerm));
    }

    #[test]
    fn negative_inputs_are_rejected() {
        assert_eq!(
            compute_amortization(&terms(dec!(-1_000), dec!(5), 12)),
            Err(CalcError::NegativePrincipal)
        );
        assert_eq!(
            compute_amortization(&terms(dec!(1_000), dec!(-5), 12)),
            Err(CalcError::NegativeRate)
        );
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let input = terms(dec!(777_777.77), dec!(13.25), 48);
        assert_eq!(
            compute_amortization(&input).unwrap(),
            compute_amortization(&input).unwrap()
        );
    }

    #[test]
    fn schedule_has_one_row_per_month() {
        let schedule = amortization_schedule(&terms(dec!(1_000_000), dec!(12), 12)).unwrap();
        assert_eq!(schedule.len(), 12);
        assert_eq!(schedule[0].month, 1);
        assert_eq!(schedule[11].month, 12);
    }

    #[test]
    fn schedule_first_row_interest_is_one_percent_of_principal() {
        let schedule = amortization_schedule(&terms(dec!(1_000_000), dec!(12), 12)).unwrap();
        assert_eq!(schedule[0].interest, dec!(10000));
        assert_eq!(schedule[0].principal, dec!(78848.79));
        assert_eq!(schedule[0].balance, dec!(921151.21));
    }

    #[test]
    fn schedule_ends_at_exactly_zero() {
        let schedule = amortization_schedule(&terms(dec!(1_000_000), dec!(12), 12)).unwrap();
        assert_eq!(schedule.last().unwrap().balance, Decimal::ZERO);
    }

    #[test]
    fn schedule_balances_strictly_decrease() {
        let schedule = amortization_schedule(&terms(dec!(500_000), dec!(18), 24)).unwrap();
        let mut previous = dec!(500_000);
        for row in &schedule {
            assert!(row.balance < previous);
            previous = row.balance;
        }
    }

    #[test]
    fn schedule_rows_are_internally_consistent() {
        let schedule = amortization_schedule(&terms(dec!(250_000), dec!(7.75), 18)).unwrap();
        let mut balance = dec!(250_000);
        for row in &schedule {
            assert_eq!(row.payment, row.interest + row.principal);
            assert_eq!(row.balance, balance - row.principal);
            balance = row.balance;
        }
    }

    #[test]
    fn schedule_payments_sum_to_principal_plus_interest() {
        let input = terms(dec!(1_000_000), dec!(12), 12);
        let schedule = amortization_schedule(&input).unwrap();
        let paid: Decimal = schedule.iter().map(|row| row.payment).sum();
        let interest: Decimal = schedule.iter().map(|row| row.interest).sum();
        assert_eq!(paid, dec!(1_000_000) + interest);
    }

    #[test]
    fn zero_rate_schedule_has_no_interest() {
        let schedule = amortization_schedule(&terms(dec!(1_200_000), dec!(0), 12)).unwrap();
        assert!(schedule.iter().all(|row| row.interest.is_zero()));
        assert_eq!(schedule.last().unwrap().balance, Decimal::ZERO);
    }

    #[test]
    fn serializes_amounts_as_strings() {
        let result = compute_amortization(&terms(dec!(1_000_000), dec!(12), 12)).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["monthly_payment"].as_str().unwrap(), "88848.79");
    }
}
