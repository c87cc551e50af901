use crate::client::Client;
use crate::ids::ClientId;
use crate::Money;
use crate::Result;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AccountError {
    #[error("Invalid amount for client {0}: {1}")]
    InvalidAmount(ClientId, Money),

    #[error(
        "Insufficient funds: cannot withdraw {requested} from client {client} when balance is {balance}"
    )]
    InsufficientFunds {
        client: ClientId,
        balance: Money,
        requested: Money,
    },
}

/// A monetary balance held on behalf of a client
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    client: Client,
    balance: Money,
}

impl Account {
    /// Any initial balance is accepted, including a negative one.
    pub fn new(name: impl Into<String>, id: ClientId, initial_balance: Money) -> Self {
        return Self::for_client(Client::new(name, id), initial_balance);
    }

    pub fn for_client(client: Client, initial_balance: Money) -> Self {
        return Self {
            client,
            balance: initial_balance,
        };
    }

    pub fn client(&self) -> &Client {
        return &self.client;
    }

    pub fn name(&self) -> &str {
        return self.client.name();
    }

    pub fn id(&self) -> ClientId {
        return self.client.id();
    }

    pub fn balance(&self) -> Money {
        return self.balance;
    }

    pub fn deposit(&mut self, amount: Money) -> Result {
        self.check_amount(amount)?;

        log::debug!("Depositing {amount} for client {}", self.id());
        self.balance.add(&amount)?;

        return Ok(());
    }

    /// Withdraws `amount` if the balance covers it. On failure the balance is left unchanged.
    pub fn withdraw(&mut self, amount: Money) -> Result {
        self.check_amount(amount)?;

        if self.balance < amount {
            Err(AccountError::InsufficientFunds {
                client: self.id(),
                balance: self.balance,
                requested: amount,
            })?
        }

        log::debug!("Withdrawing {amount} for client {}", self.id());
        self.balance.sub(&amount)?;

        return Ok(());
    }

    fn check_amount(&self, amount: Money) -> Result {
        if amount.is_negative() || !amount.is_finite() {
            Err(AccountError::InvalidAmount(self.id(), amount))?
        }

        return Ok(());
    }
}
