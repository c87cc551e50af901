mod config;

use tb::{ids::ClientId, Account, Bank, Client, Money, Result};

use std::io::{self, Write};

const CLIENT_NAME: &str = "Ivanov";
const CLIENT_ID: ClientId = ClientId(1001);
const INITIAL_BALANCE: Money = Money(5000.0);

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Opening account...");

    let bank = Bank::new();

    let client = Client::new(CLIENT_NAME, CLIENT_ID);
    let account = Account::for_client(client.clone(), INITIAL_BALANCE);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    bank.open_account(&mut out, &client, INITIAL_BALANCE)?;

    log::debug!("Account opened for client {}. Reporting account info...", client.id());

    bank.account_info(&mut out, &account)?;
    out.flush()?;

    log::debug!("Application finished successfully!");

    Ok(())
}
