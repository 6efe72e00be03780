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

//! Savings growth under monthly compounding.
//!
//! # Example
//!
//! ```
//! use fincalc_rs::{SavingsTerms, compute_savings_growth};
//! use rust_decimal_macros::dec;
//!
//! let terms = SavingsTerms {
//!     principal: dec!(500_000),
//!     annual_rate_percent: dec!(0),
//!     term_months: 24,
//! };
//! let result = compute_savings_growth(&terms).unwrap();
//! assert_eq!(result.future_value, dec!(500_000));
//! assert_eq!(result.interest_earned, dec!(0));
//! ```

use crate::base;
use crate::error::CalcError;
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

/// Input terms for a savings deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsTerms {
    /// Amount deposited.
    pub principal: Decimal,
    /// Annual interest rate as a percentage (`6` means 6% per year).
    pub annual_rate_percent: Decimal,
    /// Deposit term in months. Must be at least 1.
    pub term_months: u32,
}

/// Projected outcome of a savings deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsResult {
    /// Balance at term end, rounded to minor units.
    pub future_value: Decimal,
    /// `future_value − principal`. Never negative for a non-negative rate.
    pub interest_earned: Decimal,
}

/// One month of a savings growth schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthEntry {
    /// Month number, starting at 1.
    pub month: u32,
    /// Interest posted this month.
    pub interest: Decimal,
    /// Balance after posting.
    pub balance: Decimal,
}

/// Projects the future value of a deposit under monthly compounding.
///
/// `future_value = principal · (1+r)^n` with the monthly rate
/// `r = annual_rate_percent / 100 / 12`, rounded half-even to minor units.
///
/// # Errors
///
/// - [`CalcError::InvalidTerm`] - `term_months` is zero.
/// - [`CalcError::NegativePrincipal`] - `principal` is negative.
/// - [`CalcError::NegativeRate`] - `annual_rate_percent` is negative.
pub fn compute_savings_growth(terms: &SavingsTerms) -> Result<SavingsResult, CalcError> {
    base::check_terms(terms.principal, terms.annual_rate_percent, terms.term_months)?;

    let rate = base::monthly_rate(terms.annual_rate_percent);
    let factor = (Decimal::ONE + rate).powu(u64::from(terms.term_months));
    let future_value = base::round_money(terms.principal * factor);

    Ok(SavingsResult {
        future_value,
        interest_earned: future_value - terms.principal,
    })
}

/// Computes the month-by-month balance trajectory of a deposit.
///
/// Models posted interest: each month's interest is rounded to minor units
/// before it is added to the balance, the way a passbook shows it. The final
/// balance can therefore differ from the closed-form
/// [`compute_savings_growth`] projection by a few minor units over long
/// terms.
///
/// # Errors
///
/// Same conditions as [`compute_savings_growth`].
pub fn growth_schedule(terms: &SavingsTerms) -> Result<Vec<GrowthEntry>, CalcError> {
    base::check_terms(terms.principal, terms.annual_rate_percent, terms.term_months)?;

    let rate = base::monthly_rate(terms.annual_rate_percent);
    let mut balance = base::round_money(terms.principal);
    let mut schedule = Vec::with_capacity(terms.term_months as usize);

    for month in 1..=terms.term_months {
        let interest = base::round_money(balance * rate);
        balance += interest;
        schedule.push(GrowthEntry {
            month,
            interest,
            balance,
        });
    }

    Ok(schedule)
}
