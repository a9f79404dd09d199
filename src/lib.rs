//! gnucash - read and write GnuCash XML data files
//! ---
//!
//! A GnuCash data file is an XML document (often gzip-compressed) holding a
//! single book: accounts, customers, transactions, and scheduled
//! transactions. [`open`] sniffs the container format, parses the document
//! into an arena-backed tree, and builds a [`Book`] indexed by stable
//! identifiers, with the transaction date range and fully qualified account
//! names derived along the way.
//!
//! Entities stay views over the shared tree, so the one supported mutation
//! path (the scheduled-transaction date setters) writes straight back into
//! it and is picked up by [`Document::save`] - which reproduces an untouched
//! document byte for byte.
//!
//! Only the embedded XML dialect is handled; GnuCash's SQL-backed storage is
//! not.

/// Accounts and fully qualified account names, e.g.
/// `Assets:Current Assets:Savings Account`.
pub mod account;

/// The book aggregate: entity collections, the transaction date range, and
/// identifier lookups.
pub mod book;

mod customer;

/// Calendar-date text handling for the `YYYY-MM-DD` form used throughout
/// the GnuCash dialect.
pub mod date;

/// Opening and saving the on-disk document.
pub mod document;

/// Curated, cheap debug rendering for entities.
pub mod inspect;

mod schedxaction;
mod transaction;

/// The arena XML tree backing a document.
pub mod xml;

#[cfg(test)]
mod testdata;

pub use account::Account;
pub use book::Book;
pub use customer::Customer;
pub use date::IntoDate;
pub use document::{open, Document};
pub use inspect::Inspect;
pub use schedxaction::Schedxaction;
pub use transaction::Transaction;
