use std::fmt;
use std::sync::{Arc, RwLock};

use anyhow::Result;
use chrono::NaiveDate;

use crate::account::Account;
use crate::customer::Customer;
use crate::inspect::{opt_date, Inspect};
use crate::schedxaction::Schedxaction;
use crate::transaction::Transaction;
use crate::xml::{NodeId, XmlTree};

/// The content of one GnuCash book element.
///
/// Entity collections are built in document order; accounts are then ordered
/// by fully qualified name, once, and stay that way. The transaction date
/// range is folded during construction and never recomputed.
#[derive(Debug)]
pub struct Book {
    accounts: Vec<Account>,
    customers: Vec<Customer>,
    transactions: Vec<Transaction>,
    schedxactions: Vec<Schedxaction>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl Book {
    pub(crate) fn build(tree: &Arc<RwLock<XmlTree>>, book_node: NodeId) -> Result<Book> {
        let nodes = tree.read().unwrap();

        let customers = nodes
            .find_children(book_node, "gnc:GncCustomer")
            .into_iter()
            .map(|node| Customer::from_node(&nodes, node))
            .collect::<Result<Vec<_>>>()?;

        let mut accounts = nodes
            .find_children(book_node, "gnc:account")
            .into_iter()
            .map(|node| Account::from_node(&nodes, node))
            .collect::<Result<Vec<_>>>()?;

        let mut transactions = Vec::new();
        let mut start_date: Option<NaiveDate> = None;
        let mut end_date: Option<NaiveDate> = None;
        for node in nodes.find_children(book_node, "gnc:transaction") {
            let txn = Transaction::from_node(&nodes, node)?;
            let date = txn.date();
            start_date = Some(start_date.map_or(date, |d| d.min(date)));
            end_date = Some(end_date.map_or(date, |d| d.max(date)));
            transactions.push(txn);
        }

        let schedxactions = nodes
            .find_children(book_node, "gnc:schedxaction")
            .into_iter()
            .map(|node| Schedxaction::from_node(tree, &nodes, node))
            .collect::<Result<Vec<_>>>()?;

        drop(nodes);

        Self::finalize(&mut accounts);

        log::debug!(
            "built book: {} accounts, {} customers, {} transactions, {} schedxactions",
            accounts.len(),
            customers.len(),
            transactions.len(),
            schedxactions.len()
        );

        Ok(Book {
            accounts,
            customers,
            transactions,
            schedxactions,
            start_date,
            end_date,
        })
    }

    /// Runs once, after every collection is built: resolve each account's
    /// qualified name, then order the accounts by it. The ordering is
    /// established here and stays stable from then on.
    fn finalize(accounts: &mut [Account]) {
        let view: &[Account] = accounts;
        let full_names: Vec<String> = view
            .iter()
            .map(|account| account.resolve_full_name(view))
            .collect();
        for (account, full_name) in accounts.iter_mut().zip(full_names) {
            account.set_full_name(full_name);
        }
        accounts.sort_by(|a, b| a.full_name().cmp(b.full_name()));
    }

    /// Accounts, ordered ascending by fully qualified name.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Transactions in document order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn schedxactions(&self) -> &[Schedxaction] {
        &self.schedxactions
    }

    /// Date of the earliest transaction, if any exist.
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// Date of the latest transaction, if any exist.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Account with the given GUID, or `None`.
    pub fn find_account_by_id(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id() == id)
    }

    /// Account with the given fully qualified name
    /// (e.g. `Assets:Current Assets:Savings Account`), or `None`.
    pub fn find_account_by_full_name(&self, full_name: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.full_name() == full_name)
    }

    /// Customer with the given full name, or `None`.
    pub fn find_customer_by_full_name(&self, full_name: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.full_name() == full_name)
    }

    /// Scheduled transaction with the given full name, or `None`.
    pub fn find_schedxaction_by_full_name(&self, full_name: &str) -> Option<&Schedxaction> {
        self.schedxactions.iter().find(|s| s.full_name() == full_name)
    }
}

impl Inspect for Book {
    fn kind(&self) -> &'static str {
        "Book"
    }

    fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("start_date", opt_date(self.start_date)),
            ("end_date", opt_date(self.end_date)),
        ]
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
