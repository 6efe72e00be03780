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

//! # fincalc
//!
//! This library provides the financial calculation core of a cooperative
//! back office: loan amortization, savings compound growth, trial-balance
//! and balance-sheet verification, and running-balance computation.
//!
//! ## Core Components
//!
//! - [`compute_amortization`] / [`amortization_schedule`]: fixed-payment loan math
//! - [`compute_savings_growth`] / [`growth_schedule`]: monthly-compounded savings projections
//! - [`check_balance`] / [`check_balance_sheet`]: exact debit/credit verification
//! - [`compute_running_balances`]: cumulative balances in chronological order
//! - [`CalcError`]: typed rejection of invalid inputs
//!
//! ## Example
//!
//! ```
//! use fincalc_rs::{LoanTerms, compute_amortization};
//! use rust_decimal_macros::dec;
//!
//! let terms = LoanTerms {
//!     principal: dec!(1_000_000),
//!     annual_rate_percent: dec!(12),
//!     term_months: 12,
//! };
//!
//! let result = compute_amortization(&terms).unwrap();
//! assert_eq!(result.monthly_payment, dec!(88848.79));
//! assert_eq!(result.total_interest, dec!(66185.48));
//! ```
//!
//! ## Numeric Representation
//!
//! Monetary amounts are [`rust_decimal::Decimal`] throughout. Balance checks
//! compare exactly; there is no floating-point epsilon anywhere. Results
//! round half-even to two decimal places (minor currency units).
//!
//! ## Purity
//!
//! Every operation is a pure, deterministic function of its inputs. There is
//! no shared state, no I/O, and no ordering dependency between calls, so the
//! calculators can be invoked concurrently without coordination.

mod base;
pub mod error;
mod ledger;
mod loan;
mod running_balance;
mod savings;

pub use error::CalcError;
pub use ledger::{BalanceVerdict, LedgerLine, check_balance, check_balance_sheet};
pub use loan::{AmortizationResult, LoanTerms, ScheduleEntry, amortization_schedule, compute_amortization};
pub use running_balance::{TransactionEntry, compute_entry_balances, compute_running_balances};
pub use savings::{GrowthEntry, SavingsResult, SavingsTerms, compute_savings_growth, growth_schedule};
