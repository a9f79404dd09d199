use std::fmt;

use anyhow::{anyhow, Result};

use crate::inspect::Inspect;
use crate::xml::{NodeId, XmlTree};

/// A single account in the book.
///
/// Fields are read out of the account subtree at construction time. The
/// fully qualified name (`Assets:Current Assets:Savings Account`) is resolved
/// later by the book's finalize step, once every account is known.
#[derive(Clone, Debug, PartialEq)]
pub struct Account {
    id: String,
    name: String,
    account_type: String,
    description: Option<String>,
    parent_id: Option<String>,
    full_name: String,
}

impl Account {
    pub(crate) fn from_node(tree: &XmlTree, node: NodeId) -> Result<Account> {
        let id = tree
            .find_child(node, "act:id")
            .map(|n| tree.text(n))
            .ok_or(anyhow!("account entry without an act:id element"))?;
        let name = tree
            .find_child(node, "act:name")
            .map(|n| tree.text(n))
            .ok_or(anyhow!(format!(
                "account `{}' has no act:name element",
                id
            )))?;
        let account_type = tree
            .find_child(node, "act:type")
            .map(|n| tree.text(n))
            .unwrap_or_default();
        let description = tree.find_child(node, "act:description").map(|n| tree.text(n));
        let parent_id = tree
            .find_child(node, "act:parent")
            .map(|n| tree.text(n))
            .filter(|id| !id.is_empty());

        Ok(Account {
            id,
            full_name: name.clone(),
            name,
            account_type,
            description,
            parent_id,
        })
    }

    /// The account's own finalize step: resolve the fully qualified name by
    /// walking the parent chain. The `ROOT` account is not part of qualified
    /// names. The walk is bounded by the account count, so a malformed parent
    /// cycle yields the partial chain instead of spinning.
    pub(crate) fn resolve_full_name(&self, all: &[Account]) -> String {
        let mut segments = vec![self.name.as_str()];
        let mut parent_id = self.parent_id.as_deref();
        let mut steps = 0;

        while let Some(id) = parent_id {
            if steps >= all.len() {
                break;
            }
            steps += 1;
            match all.iter().find(|a| a.id == id) {
                Some(parent) if parent.account_type != "ROOT" => {
                    segments.push(parent.name.as_str());
                    parent_id = parent.parent_id.as_deref();
                }
                _ => break,
            }
        }

        segments.reverse();
        segments.join(":")
    }

    pub(crate) fn set_full_name(&mut self, full_name: String) {
        self.full_name = full_name;
    }

    /// GUID of the account. Stable for the lifetime of the document.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Unqualified account name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn account_type(&self) -> &str {
        &self.account_type
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    /// Fully qualified account name, ancestors joined with `:`.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }
}

impl Inspect for Account {
    fn kind(&self) -> &'static str {
        "Account"
    }

    fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.clone()),
            ("name", self.name.clone()),
            ("full_name", self.full_name.clone()),
        ]
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
