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

//! Shared monetary arithmetic: rounding rule, rate conversion, input checks.

use crate::error::CalcError;
use rust_decimal::Decimal;

/// Decimal places kept for monetary results (minor currency units).
pub(crate) const MONEY_DP: u32 = 2;

/// Rounds a monetary amount to minor units.
///
/// `round_dp` uses banker's rounding (round half to even), so repeated
/// summation of rounded values carries no directional bias.
pub(crate) fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp(MONEY_DP)
}

/// Converts an annual percentage rate to a monthly rate.
///
/// A rate like `12` (12% per year) becomes `0.01` per month. Nominal
/// division by twelve, matching how the cooperative quotes its products.
pub(crate) fn monthly_rate(annual_rate_percent: Decimal) -> Decimal {
    annual_rate_percent / Decimal::ONE_HUNDRED / Decimal::from(12)
}

/// Validates the term inputs shared by the loan and savings calculators.
///
/// Negative amounts are rejected rather than clamped to zero: a silently
/// zeroed principal would project a zero-cost loan.
pub(crate) fn check_terms(
    principal: Decimal,
    annual_rate_percent: Decimal,
    term_months: u32,
) -> Result<(), CalcError> {
    if term_months < 1 {
        return Err(CalcError::InvalidTerm);
    }
    if principal < Decimal::ZERO {
        return Err(CalcError::NegativePrincipal);
    }
    if annual_rate_percent < Decimal::ZERO {
        return Err(CalcError::NegativeRate);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn round_money_keeps_two_decimal_places() {
        assert_eq!(round_money(dec!(123.456)), dec!(123.46));
        assert_eq!(round_money(dec!(123.454)), dec!(123.45));
    }

    #[test]
    fn round_money_uses_bankers_rounding() {
        // Half-even: ties round toward the even neighbour.
        assert_eq!(round_money(dec!(0.125)), dec!(0.12));
        assert_eq!(round_money(dec!(0.135)), dec!(0.14));
    }

    #[test]
    fn monthly_rate_divides_by_hundred_and_twelve() {
        assert_eq!(monthly_rate(dec!(12)), dec!(0.01));
        assert_eq!(monthly_rate(dec!(0)), Decimal::ZERO);
    }

    #[test]
    fn check_terms_rejects_zero_term() {
        assert_eq!(
            check_terms(dec!(100), dec!(5), 0),
            Err(CalcError::InvalidTerm)
        );
    }

    #[test]
    fn check_terms_rejects_negative_inputs() {
        assert_eq!(
            check_terms(dec!(-1), dec!(5), 12),
            Err(CalcError::NegativePrincipal)
        );
        assert_eq!(
            check_terms(dec!(100), dec!(-5), 12),
            Err(CalcError::NegativeRate)
        );
    }

    #[test]
    fn check_terms_accepts_zero_principal_and_rate() {
        assert_eq!(check_terms(Decimal::ZERO, Decimal::ZERO, 1), Ok(()));
    }
}
