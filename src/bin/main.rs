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

use clap::{Parser, Subcommand};
use csv::{ReaderBuilder, Trim, Writer};
use fincalc_rs::{
    LedgerLine, LoanTerms, SavingsTerms, amortization_schedule, check_balance,
    compute_amortization, compute_running_balances, compute_savings_growth, growth_schedule,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;
use std::process;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Back-office financial calculators
///
/// Loan amortization, savings growth, trial-balance verification, and
/// running balances. Table-shaped commands stream CSV files and write CSV
/// to stdout.
#[derive(Parser, Debug)]
#[command(name = "fincalc")]
#[command(about = "Financial calculators for a cooperative back office", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the fixed monthly payment for a loan
    Amortize {
        /// Amount borrowed
        #[arg(long)]
        principal: Decimal,
        /// Annual interest rate in percent
        #[arg(long)]
        rate: Decimal,
        /// Term in months
        #[arg(long)]
        months: u32,
        /// Print the full repayment schedule instead of the summary
        #[arg(long)]
        schedule: bool,
    },
    /// Project the future value of a savings deposit
    Savings {
        /// Amount deposited
        #[arg(long)]
        principal: Decimal,
        /// Annual interest rate in percent
        #[arg(long)]
        rate: Decimal,
        /// Term in months
        #[arg(long)]
        months: u32,
        /// Print the month-by-month posting schedule instead of the summary
        #[arg(long)]
        schedule: bool,
    },
    /// Verify that a CSV of ledger lines balances
    ///
    /// Expected columns: debit,credit
    TrialBalance {
        /// Path to CSV file with ledger lines
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
    /// Compute running balances over a CSV of signed amounts
    ///
    /// Expected column: amount (positive = inflow, negative = outflow)
    RunningBalance {
        /// Opening balance before the first transaction
        #[arg(long, default_value = "0")]
        start: Decimal,
        /// Path to CSV file with transaction amounts
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(args.command) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<(), Box<dyn Error>> {
    let stdout = std::io::stdout();
    match command {
        Command::Amortize {
            principal,
            rate,
            months,
            schedule,
        } => {
            let terms = LoanTerms {
                principal,
                annual_rate_percent: rate,
                term_months: months,
            };
            let mut wtr = Writer::from_writer(stdout.lock());
            if schedule {
                for row in amortization_schedule(&terms)? {
                    wtr.serialize(row)?;
                }
            } else {
                wtr.serialize(compute_amortization(&terms)?)?;
            }
            wtr.flush()?;
        }
        Command::Savings {
            principal,
            rate,
            months,
            schedule,
        } => {
            let terms = SavingsTerms {
                principal,
                annual_rate_percent: rate,
                term_months: months,
            };
            let mut wtr = Writer::from_writer(stdout.lock());
            if schedule {
                for row in growth_schedule(&terms)? {
                    wtr.serialize(row)?;
                }
            } else {
                wtr.serialize(compute_savings_growth(&terms)?)?;
            }
            wtr.flush()?;
        }
        Command::TrialBalance { input } => {
            let file = File::open(&input)
                .map_err(|e| format!("opening '{}': {e}", input.display()))?;
            let verdict = check_balance(&read_ledger_lines(BufReader::new(file))?);
            let mut wtr = Writer::from_writer(stdout.lock());
            wtr.serialize(verdict)?;
            wtr.flush()?;
        }
        Command::RunningBalance { start, input } => {
            let file = File::open(&input)
                .map_err(|e| format!("opening '{}': {e}", input.display()))?;
            let amounts = read_amounts(BufReader::new(file))?;
            let balances = compute_running_balances(start, &amounts);
            let mut wtr = Writer::from_writer(stdout.lock());
            for (amount, balance) in amounts.iter().zip(&balances) {
                wtr.serialize(BalanceRow {
                    amount: *amount,
                    balance: *balance,
                })?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

/// Output row for the running-balance command.
#[derive(Debug, Serialize)]
struct BalanceRow {
    amount: Decimal,
    balance: Decimal,
}

/// Raw CSV record for a ledger line.
///
/// Fields: `debit, credit`. An empty side is read as zero; a side that is
/// present but unparseable fails the row, which is then skipped with a
/// warning rather than coerced to zero.
#[derive(Debug, Deserialize)]
struct LineRecord {
    debit: Option<Decimal>,
    credit: Option<Decimal>,
}

/// Raw CSV record for a signed transaction amount.
#[derive(Debug, Deserialize)]
struct AmountRecord {
    amount: Decimal,
}

/// Reads ledger lines from a CSV reader.
///
/// Streaming parse; malformed rows are skipped with a warning rather than
/// aborting the whole report.
///
/// # CSV Format
///
/// Expected columns: `debit, credit`
///
/// ```csv
/// debit,credit
/// 6500000,0
/// 0,6500000
/// ```
fn read_ledger_lines<R: Read>(reader: R) -> Result<Vec<LedgerLine>, csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let mut lines = Vec::new();
    for result in rdr.deserialize::<LineRecord>() {
        match result {
            Ok(record) => lines.push(LedgerLine {
                debit: record.debit.unwrap_or(Decimal::ZERO),
                credit: record.credit.unwrap_or(Decimal::ZERO),
            }),
            Err(e) => {
                warn!("skipping malformed ledger row: {e}");
                continue;
            }
        }
    }
    Ok(lines)
}

/// Reads signed transaction amounts from a CSV reader, preserving order.
///
/// # CSV Format
///
/// Expected column: `amount`
///
/// ```csv
/// amount
/// 10000000
/// -2000000
/// ```
fn read_amounts<R: Read>(reader: R) -> Result<Vec<Decimal>, csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .has_headers(true)
        .from_reader(reader);

    let mut amounts = Vec::new();
    for result in rdr.deserialize::<AmountRecord>() {
        match result {
            Ok(record) => amounts.push(record.amount),
            Err(e) => {
                warn!("skipping malformed amount row: {e}");
                continue;
            }
        }
    }
    Ok(amounts)
}
