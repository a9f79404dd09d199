use std::fmt;

use anyhow::{anyhow, Result};

use crate::inspect::Inspect;
use crate::xml::{NodeId, XmlTree};

/// A customer record in the book.
#[derive(Clone, Debug, PartialEq)]
pub struct Customer {
    id: String,
    guid: Option<String>,
    name: String,
}

impl Customer {
    pub(crate) fn from_node(tree: &XmlTree, node: NodeId) -> Result<Customer> {
        let id = tree
            .find_child(node, "cust:id")
            .map(|n| tree.text(n))
            .ok_or(anyhow!("customer entry without a cust:id element"))?;
        let name = tree
            .find_child(node, "cust:name")
            .map(|n| tree.text(n))
            .ok_or(anyhow!(format!(
                "customer `{}' has no cust:name element",
                id
            )))?;
        let guid = tree.find_child(node, "cust:guid").map(|n| tree.text(n));

        Ok(Customer { id, guid, name })
    }

    /// Customer number, e.g. `000001`.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn guid(&self) -> Option<&str> {
        self.guid.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Customers have no hierarchy; the full name is the name itself.
    pub fn full_name(&self) -> &str {
        &self.name
    }
}

impl Inspect for Customer {
    fn kind(&self) -> &'static str {
        "Customer"
    }

    fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![("id", self.id.clone()), ("name", self.name.clone())]
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
