use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use tillbook_core::{
    AccountNumber, AccountNumberGenerator, DEFAULT_PREFIX, LedgerError, LedgerResult,
};
use tillbook_customers::Customer;
use tillbook_notify::{Notification, NotificationSink, Operation};

use crate::account::Account;

/// The bank: exclusive owner of every account.
///
/// Accounts are keyed by their number; the bank holds the number generator
/// and the notification sink, and is the only place balances are mutated.
/// Mutating operations are addressed by [`AccountNumber`], which is the
/// handle [`Bank::open_account`] returns.
pub struct Bank {
    accounts: BTreeMap<AccountNumber, Account>,
    generator: AccountNumberGenerator,
    sink: Arc<dyn NotificationSink>,
}

impl Bank {
    /// Bank with the default `ACC` prefix.
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self::with_prefix(DEFAULT_PREFIX, sink)
    }

    pub fn with_prefix(prefix: impl Into<String>, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            accounts: BTreeMap::new(),
            generator: AccountNumberGenerator::new(prefix),
            sink,
        }
    }

    /// Open a new account for `customer`: fresh number, balance 0, open.
    pub fn open_account(&mut self, customer: &Customer) -> AccountNumber {
        let number = self.generator.next();
        let account = Account::new(number.clone(), customer);
        info!(account = %number, customer = customer.name(), "account opened");
        self.accounts.insert(number.clone(), account);
        number
    }

    /// Close the customer's account. Silently a no-op when the customer has
    /// no account.
    pub fn close_account(&mut self, customer: &Customer) {
        if let Some(account) = self.account_by_customer_mut(customer) {
            account.set_open(false);
            info!(account = %account.number(), "account closed");
        }
    }

    /// Reopen the customer's account. Silently a no-op when the customer has
    /// no account.
    pub fn reopen_account(&mut self, customer: &Customer) {
        if let Some(account) = self.account_by_customer_mut(customer) {
            account.set_open(true);
            info!(account = %account.number(), "account reopened");
        }
    }

    /// Deposit `amount` into the account addressed by `number`.
    ///
    /// A non-positive amount is a silent no-op after the closed check: no
    /// error, no balance change, no notification.
    pub fn deposit(&mut self, number: &AccountNumber, amount: i64) -> LedgerResult<()> {
        let account = Self::account_entry(&mut self.accounts, number)?;
        if account.deposit(amount)? {
            let notification = Self::notification(account, Operation::Deposit, amount, None);
            info!(account = %number, amount, balance = account.balance(), "deposit");
            self.sink.notify(&notification);
        } else {
            debug!(account = %number, amount, "deposit ignored: amount not positive");
        }
        Ok(())
    }

    /// Withdraw `amount` from the account addressed by `number`.
    pub fn withdraw(&mut self, number: &AccountNumber, amount: i64) -> LedgerResult<()> {
        let account = Self::account_entry(&mut self.accounts, number)?;
        account.withdraw(amount)?;
        let notification = Self::notification(account, Operation::Withdraw, amount, None);
        info!(account = %number, amount, balance = account.balance(), "withdrawal");
        self.sink.notify(&notification);
        Ok(())
    }

    /// Transfer `amount` from the account addressed by `number` to the
    /// account of the customer named `recipient_name`.
    ///
    /// Validation is identical to withdraw (closed check first, then the
    /// amount check). An unresolved recipient name is a silent no-op: no
    /// error, no balance change, no notification.
    pub fn transfer(
        &mut self,
        number: &AccountNumber,
        amount: i64,
        recipient_name: &str,
    ) -> LedgerResult<()> {
        Self::account_entry(&mut self.accounts, number)?.check_debit(amount)?;

        let Some(recipient_number) = self.number_by_customer_name(recipient_name) else {
            debug!(
                account = %number,
                recipient = recipient_name,
                "transfer skipped: no account for recipient"
            );
            return Ok(());
        };

        // Mutate both sides before reporting: when the recipient resolves to
        // the sender's own account the credit restores the balance, and the
        // notification must carry the resulting balance.
        Self::account_entry(&mut self.accounts, number)?.debit(amount);
        Self::account_entry(&mut self.accounts, &recipient_number)?.credit(amount);

        let sender = Self::account_entry(&mut self.accounts, number)?;
        let notification = Self::notification(
            sender,
            Operation::Transfer,
            amount,
            Some(recipient_name.to_string()),
        );
        let sender_balance = sender.balance();

        info!(
            account = %number,
            recipient = %recipient_number,
            amount,
            balance = sender_balance,
            "transfer"
        );
        self.sink.notify(&notification);
        Ok(())
    }

    /// Balance of the account addressed by `number`.
    pub fn balance(&self, number: &AccountNumber) -> LedgerResult<i64> {
        self.accounts
            .get(number)
            .map(Account::balance)
            .ok_or_else(|| LedgerError::UnknownAccount(number.clone()))
    }

    /// Sum of all balances, open and closed accounts both counted.
    pub fn total_balance(&self) -> i64 {
        self.accounts.values().map(Account::balance).sum()
    }

    /// Read-only view of the number → account mapping.
    pub fn accounts(&self) -> &BTreeMap<AccountNumber, Account> {
        &self.accounts
    }

    /// First account owned by `customer`, compared by customer identity.
    pub fn account_by_customer(&self, customer: &Customer) -> Option<&Account> {
        self.accounts
            .values()
            .find(|account| account.customer_id() == customer.id_typed())
    }

    /// First account whose customer name matches.
    ///
    /// Names are not unique; with duplicate names the account opened first
    /// wins.
    pub fn account_by_customer_name(&self, name: &str) -> Option<&Account> {
        self.accounts
            .values()
            .find(|account| account.customer_name() == name)
    }

    /// Look up an account by its literal number string.
    ///
    /// The configured prefix is validated before the lookup; a mismatched
    /// prefix yields `None` without touching the map.
    pub fn account_by_number(&self, number: &str) -> Option<&Account> {
        if !number.starts_with(self.generator.prefix()) {
            return None;
        }
        self.accounts.get(&AccountNumber::from(number))
    }

    fn account_by_customer_mut(&mut self, customer: &Customer) -> Option<&mut Account> {
        self.accounts
            .values_mut()
            .find(|account| account.customer_id() == customer.id_typed())
    }

    fn number_by_customer_name(&self, name: &str) -> Option<AccountNumber> {
        self.account_by_customer_name(name)
            .map(|account| account.number().clone())
    }

    fn account_entry<'a>(
        accounts: &'a mut BTreeMap<AccountNumber, Account>,
        number: &AccountNumber,
    ) -> LedgerResult<&'a mut Account> {
        accounts
            .get_mut(number)
            .ok_or_else(|| LedgerError::UnknownAccount(number.clone()))
    }

    fn notification(
        account: &Account,
        operation: Operation,
        amount: i64,
        counterparty: Option<String>,
    ) -> Notification {
        Notification {
            operation,
            account_number: account.number().clone(),
            customer_name: account.customer_name().to_string(),
            amount,
            balance: account.balance(),
            counterparty,
            occurred_at: Utc::now(),
        }
    }
}

impl core::fmt::Debug for Bank {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Bank")
            .field("accounts", &self.accounts)
            .field("generator", &self.generator)
            .finish_non_exhaustive()
    }
}
