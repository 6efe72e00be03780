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

//! Trial-balance and balance-sheet verification.
//!
//! Sums are exact decimal arithmetic and the verdict compares them exactly.
//! There is no epsilon: one minor unit off is unbalanced.
//!
//! # Example
//!
//! ```
//! use fincalc_rs::{LedgerLine, check_balance};
//! use rust_decimal_macros::dec;
//!
//! let lines = [
//!     LedgerLine { debit: dec!(6_500_000), credit: dec!(0) },
//!     LedgerLine { debit: dec!(0), credit: dec!(6_500_000) },
//! ];
//! let verdict = check_balance(&lines);
//! assert!(verdict.is_balanced);
//! assert_eq!(verdict.difference, dec!(0));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One ledger line carrying a debit and a credit amount.
///
/// Conventionally only one side is non-zero, but the checker sums whatever
/// it is given: a malformed line must surface as an unbalanced verdict, not
/// be silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerLine {
    pub debit: Decimal,
    pub credit: Decimal,
}

/// Outcome of a balance verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceVerdict {
    /// Sum of the debit side.
    pub total_debit: Decimal,
    /// Sum of the credit side.
    pub total_credit: Decimal,
    /// `total_debit == total_credit`, exact comparison.
    pub is_balanced: bool,
    /// `|total_debit − total_credit|`.
    pub difference: Decimal,
}

impl BalanceVerdict {
    fn from_totals(total_debit: Decimal, total_credit: Decimal) -> Self {
        Self {
            total_debit,
            total_credit,
            is_balanced: total_debit == total_credit,
            difference: (total_debit - total_credit).abs(),
        }
    }
}

/// Verifies that a set of ledger lines balances.
///
/// Empty input sums to zero on both sides and is trivially balanced.
pub fn check_balance(lines: &[LedgerLine]) -> BalanceVerdict {
    let total_debit = lines.iter().map(|line| line.debit).sum();
    let total_credit = lines.iter().map(|line| line.credit).sum();
    BalanceVerdict::from_totals(total_debit, total_credit)
}

/// Verifies the accounting equation `assets = liabilities + equity`.
///
/// Assets form the debit side; liabilities plus equity form the credit side.
pub fn check_balance_sheet(
    total_assets: Decimal,
    total_liabilities: Decimal,
    total_equity: Decimal,
) -> BalanceVerdict {
    BalanceVerdict::from_totals(total_assets, total_liabilities + total_equity)
}
