mod account;
mod bank;
mod client;
pub mod ids;
mod money;
pub mod report;
mod result;

pub use account::{Account, AccountError};
pub use bank::{Bank, InterestError};
pub use client::Client;
pub use money::{Money, MoneyError};
pub use report::{AccountReport, OpeningNotice};
pub use result::Result;
