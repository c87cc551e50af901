use crate::ids::ClientId;
use crate::{Account, Client, Money, Result};

use std::io::Write;

use csv::Writer;

use serde::{Deserialize, Serialize};

/// Written when an account is opened for a client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OpeningNotice {
    pub client: String,
    pub id: ClientId,
    pub balance: Money,
}

impl OpeningNotice {
    pub fn new(client: &Client, initial_balance: Money) -> Self {
        return Self {
            client: client.name().to_string(),
            id: client.id(),
            balance: initial_balance,
        };
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AccountReport {
    pub client: String,
    pub id: ClientId,
    pub balance: Money,
}

impl From<&Account> for AccountReport {
    fn from(account: &Account) -> Self {
        return Self {
            client: account.name().to_string(),
            id: account.id(),
            balance: account.balance(),
        };
    }
}

/// Serializes `records` to `out` as CSV, header row first
pub fn write_records<W: Write, R: Serialize>(out: &mut W, records: &[R]) -> Result {
    let mut wtr = Writer::from_writer(out);

    for record in records.iter() {
        wtr.serialize(record)?;
    }

    wtr.flush()?;

    return Ok(());
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOME_CLIENT_ID: ClientId = ClientId(1001);
    const SOME_BALANCE: Money = Money(5000.0);

    #[test]
    fn account_report_from_account() {
        let account = Account::new("Ivanov", SOME_CLIENT_ID, SOME_BALANCE);

        assert_eq!(
            AccountReport::from(&account),
            AccountReport {
                client: "Ivanov".to_string(),
                id: SOME_CLIENT_ID,
                balance: SOME_BALANCE,
            }
        );
    }

    #[test]
    fn write_records_with_header() {
        let client = Client::new("Ivanov", SOME_CLIENT_ID);
        let notice = OpeningNotice::new(&client, Money(250.5));

        let mut out = vec![];
        write_records(&mut out, &[notice]).unwrap();

        let output = String::from_utf8(out).unwrap();
        let mut lines = output.lines();

        assert_eq!(lines.next(), Some("client,id,balance"));
        assert_eq!(lines.next(), Some("Ivanov,1001,250.5"));
        assert_eq!(lines.next(), None);
    }
}
