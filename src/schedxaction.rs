use std::fmt;
use std::sync::{Arc, RwLock};

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::date::{format_date, parse_date, IntoDate};
use crate::inspect::{opt_date, Inspect};
use crate::xml::{NodeId, XmlTree};

/// A scheduled (recurring) transaction.
///
/// Identity fields are read eagerly; the start and end dates stay live views
/// over the backing subtree, and the setters write straight back into it, so
/// a later [`Document::save`](crate::Document::save) picks the change up.
#[derive(Clone, Debug)]
pub struct Schedxaction {
    tree: Arc<RwLock<XmlTree>>,
    node: NodeId,
    id: String,
    name: String,
    enabled: bool,
    last: NaiveDate,
}

impl Schedxaction {
    pub(crate) fn from_node(
        tree: &Arc<RwLock<XmlTree>>,
        nodes: &XmlTree,
        node: NodeId,
    ) -> Result<Schedxaction> {
        let id = nodes
            .find_child(node, "sx:id")
            .map(|n| nodes.text(n))
            .ok_or(anyhow!("schedxaction entry without an sx:id element"))?;
        let name = nodes
            .find_child(node, "sx:name")
            .map(|n| nodes.text(n))
            .ok_or(anyhow!(format!(
                "schedxaction `{}' has no sx:name element",
                id
            )))?;
        let enabled = nodes
            .find_child(node, "sx:enabled")
            .map(|n| nodes.text(n) == "y")
            .unwrap_or(false);
        let last = nodes
            .find_path(node, &["sx:last", "gdate"])
            .map(|n| nodes.text(n))
            .ok_or(anyhow!(format!(
                "schedxaction `{}' has no sx:last date",
                id
            )))?;
        let last = parse_date(&last)?;

        Ok(Schedxaction {
            tree: Arc::clone(tree),
            node,
            id,
            name,
            enabled,
            last,
        })
    }

    /// GUID of the scheduled transaction.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scheduled transactions have no hierarchy; the full name is the name
    /// itself.
    pub fn full_name(&self) -> &str {
        &self.name
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Date of the last generated occurrence.
    pub fn last(&self) -> NaiveDate {
        self.last
    }

    /// Start date, read live from the backing `sx:start/gdate` element.
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.read_gdate("sx:start")
    }

    /// End date, read live from the backing `sx:end/gdate` element.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.read_gdate("sx:end")
    }

    /// Set the start date, overwriting the text of the backing
    /// `sx:start/gdate` element. Accepts a date or a `YYYY-MM-DD` string.
    /// Fails when the element is absent; nothing is created on demand.
    pub fn set_start_date<D: IntoDate>(&self, value: D) -> Result<()> {
        self.write_gdate("sx:start", value)
    }

    /// Set the end date, overwriting the text of the backing `sx:end/gdate`
    /// element. Accepts a date or a `YYYY-MM-DD` string. Fails when the
    /// element is absent; nothing is created on demand.
    pub fn set_end_date<D: IntoDate>(&self, value: D) -> Result<()> {
        self.write_gdate("sx:end", value)
    }

    fn read_gdate(&self, tag: &str) -> Option<NaiveDate> {
        let nodes = self.tree.read().unwrap();
        nodes
            .find_path(self.node, &[tag, "gdate"])
            .and_then(|n| parse_date(&nodes.text(n)).ok())
    }

    fn write_gdate<D: IntoDate>(&self, tag: &str, value: D) -> Result<()> {
        let date = value.into_date()?;
        let mut nodes = self.tree.write().unwrap();
        let gdate = nodes.find_path(self.node, &[tag, "gdate"]).ok_or(anyhow!(
            format!("schedxaction `{}' has no {} date to update", self.name, tag)
        ))?;
        nodes.set_text(gdate, &format_date(date));
        Ok(())
    }
}

impl Inspect for Schedxaction {
    fn kind(&self) -> &'static str {
        "Schedxaction"
    }

    fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.clone()),
            ("name", self.name.clone()),
            ("start_date", opt_date(self.start_date())),
            ("end_date", opt_date(self.end_date())),
        ]
    }
}

impl fmt::Display for Schedxaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
