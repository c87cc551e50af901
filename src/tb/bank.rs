use crate::report::{self, AccountReport, OpeningNotice};
use crate::{Account, Client, Money, Result};

use std::io::Write;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum InterestError {
    #[error("Compounding periods per year must be at least 1")]
    ZeroCompoundingPeriods,

    #[error("Compound interest on {0} at rate {1} did not produce a finite amount")]
    NotFinite(Money, f64),
}

/// Stateless bank operations over clients and accounts owned by the caller.
///
/// The bank keeps no registry: opening an account only writes a notice.
#[derive(Debug, Default, Clone, Copy)]
pub struct Bank;

impl Bank {
    pub fn new() -> Self {
        return Self;
    }

    pub fn open_account<W: Write>(
        &self,
        out: &mut W,
        client: &Client,
        initial_balance: Money,
    ) -> Result {
        let notice = OpeningNotice::new(client, initial_balance);

        log::debug!("Writing opening notice: {notice:?}");
        report::write_records(out, &[notice])?;

        return Ok(());
    }

    pub fn account_info<W: Write>(&self, out: &mut W, account: &Account) -> Result {
        let account_report = AccountReport::from(account);

        log::debug!("Writing account report: {account_report:?}");
        report::write_records(out, &[account_report])?;

        return Ok(());
    }

    /// Final amount after compound interest: `P * (1 + r/n)^(n*t)`.
    ///
    /// `rate` is the annual rate as a fraction, e.g. `0.05` for 5%.
    pub fn calculate_deposit(
        &self,
        principal: Money,
        rate: f64,
        periods_per_year: u32,
        years: u32,
    ) -> Result<Money> {
        if periods_per_year == 0 {
            Err(InterestError::ZeroCompoundingPeriods)?
        }

        let n = f64::from(periods_per_year);
        let exponent = n * f64::from(years);

        let amount = principal.0 * (1.0 + rate / n).powf(exponent);

        if !amount.is_finite() {
            Err(InterestError::NotFinite(principal, rate))?
        }

        log::debug!(
            "calculate_deposit({principal}, {rate}, {periods_per_year}, {years}) = {amount}"
        );

        return Ok(Money(amount));
    }
}
