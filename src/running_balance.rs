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

//! Running balances for cashbook, bankbook, and ledger views.
//!
//! Input order is chronological order: the caller appends transactions in
//! the order they happened, and the accumulator never reorders,
//! deduplicates, or validates dates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single signed transaction amount.
///
/// Positive is an inflow (debit side of a cashbook), negative an outflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionEntry {
    pub amount: Decimal,
}

/// Computes the balance after each transaction.
///
/// `output[i] = starting_balance + Σ amounts[0..=i]`. The output has one
/// entry per input amount; empty input yields empty output. Balances may go
/// negative; overdraft policy belongs to the caller.
pub fn compute_running_balances(starting_balance: Decimal, amounts: &[Decimal]) -> Vec<Decimal> {
    let mut balance = starting_balance;
    amounts
        .iter()
        .map(|amount| {
            balance += *amount;
            balance
        })
        .collect()
}

/// [`compute_running_balances`] over entry records, the shape cashbook and
/// bankbook rows arrive in.
pub fn compute_entry_balances(
    starting_balance: Decimal,
    entries: &[TransactionEntry],
) -> Vec<Decimal> {
    let mut balance = starting_balance;
    entries
        .iter()
        .map(|entry| {
            balance += entry.amount;
            balance
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn accumulates_in_order() {
        let balances = compute_running_balances(
            Decimal::ZERO,
            &[dec!(10_000_000), dec!(-2_000_000), dec!(-1_000_000)],
        );
        assert_eq!(
            balances,
            vec![dec!(10_000_000), dec!(8_000_000), dec!(7_000_000)]
        );
    }

    #[test]
    fn starting_balance_offsets_every_entry() {
        let balances = compute_running_balances(dec!(500), &[dec!(100), dec!(-50)]);
        assert_eq!(balances, vec![dec!(600), dec!(550)]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(compute_running_balances(dec!(1_000), &[]).is_empty());
    }

    #[test]
    fn output_length_matches_input_length() {
        let amounts = vec![dec!(1); 17];
        assert_eq!(compute_running_balances(dec!(0), &amounts).len(), 17);
    }

    #[test]
    fn balances_may_go_negative() {
        let balances = compute_running_balances(dec!(100), &[dec!(-250)]);
        assert_eq!(balances, vec![dec!(-150)]);
    }

    #[test]
    fn order_is_preserved_not_sorted() {
        // A later large outflow must not be reordered before the inflow.
        let balances = compute_running_balances(dec!(0), &[dec!(-5), dec!(10)]);
        assert_eq!(balances, vec![dec!(-5), dec!(5)]);
    }

    #[test]
    fn entry_records_accumulate_identically() {
        let amounts = [dec!(10_000_000), dec!(-2_000_000), dec!(-1_000_000)];
        let entries: Vec<TransactionEntry> = amounts
            .iter()
            .map(|&amount| TransactionEntry { amount })
            .collect();
        assert_eq!(
            compute_entry_balances(Decimal::ZERO, &entries),
            compute_running_balances(Decimal::ZERO, &amounts)
        );
    }
}
