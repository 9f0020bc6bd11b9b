//! Sample session: two customers, one bank, console notifications.

use std::sync::Arc;

use tillbook_customers::Customer;
use tillbook_ledger::Bank;
use tillbook_notify::ConsoleSink;

fn main() -> anyhow::Result<()> {
    tillbook_observability::init();

    let mut bank = Bank::new(Arc::new(ConsoleSink));

    let artem = Customer::new("Artem", "Example Str");
    let robert = Customer::new("Robert", "Example Str2");

    let account1 = bank.open_account(&artem);
    bank.open_account(&robert);

    bank.deposit(&account1, 23)?;
    bank.withdraw(&account1, 15)?;

    bank.transfer(&account1, 5, robert.name())?;

    bank.close_account(&artem);
    if bank.deposit(&account1, 100).is_err() {
        println!("Couldn't deposit on {}'s account.", artem.name());
    }
    bank.reopen_account(&artem);
    bank.deposit(&account1, 100)?;

    println!("Bank's total balance is: {}$", bank.total_balance());

    if let Some(account) = bank.account_by_number("ACC0000001") {
        println!("{account:?}");
    }

    Ok(())
}
