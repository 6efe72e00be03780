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

//! Error types for the calculators.

use thiserror::Error;

/// Calculation input errors.
///
/// All calculators are leaf computations: a rejected input fails the single
/// call immediately, with no retry and no partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Term is below one month (would divide by zero)
    #[error("term must be at least one month")]
    InvalidTerm,

    /// Principal amount is negative
    #[error("principal must not be negative")]
    NegativePrincipal,

    /// Annual interest rate is negative
    #[error("interest rate must not be negative")]
    NegativeRate,
}
