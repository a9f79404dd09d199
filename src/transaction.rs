use std::fmt;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::date::parse_date;
use crate::inspect::Inspect;
use crate::xml::{NodeId, XmlTree};

/// A posted transaction.
///
/// The posted date is required: the book's date range is folded over it
/// during construction, so a transaction without one aborts the whole load.
/// Splits are not modeled.
#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
    id: String,
    date: NaiveDate,
    description: Option<String>,
}

impl Transaction {
    pub(crate) fn from_node(tree: &XmlTree, node: NodeId) -> Result<Transaction> {
        let id = tree
            .find_child(node, "trn:id")
            .map(|n| tree.text(n))
            .ok_or(anyhow!("transaction entry without a trn:id element"))?;
        let date = tree
            .find_path(node, &["trn:date-posted", "ts:date"])
            .map(|n| tree.text(n))
            .ok_or(anyhow!(format!(
                "transaction `{}' has no posted date",
                id
            )))?;
        let date = parse_date(&date)?;
        let description = tree.find_child(node, "trn:description").map(|n| tree.text(n));

        Ok(Transaction {
            id,
            date,
            description,
        })
    }

    /// GUID of the transaction.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Date the transaction was posted.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Inspect for Transaction {
    fn kind(&self) -> &'static str {
        "Transaction"
    }

    fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.clone()),
            ("date", crate::date::format_date(self.date)),
        ]
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
