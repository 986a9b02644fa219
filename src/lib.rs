//! # pagedeck
//!
//! A library for managing an ordered collection of short text blocks
//! ("blocks") grouped into labeled sections ("pages"). Section labels are
//! plain strings of the form `"Page N"`; a section is nothing more than the
//! set of blocks sharing a label. The library's one structural guarantee is
//! that after every successful mutation the labels present in the store form
//! a dense, gap-free `Page 1 .. Page K` sequence in the canonical order.
//!
//! ## Architecture
//!
//! The crate is layered the same way top to bottom:
//!
//! - [`model`]: domain types ([`model::Block`], [`model::TextMode`]) and
//!   input normalization.
//! - [`order`]: page-number extraction and the canonical total order used
//!   both for listings and for resequencing.
//! - [`store`]: the [`store::BlockStore`] trait plus two backends, an
//!   in-memory store for tests and a JSON file store for the CLI.
//! - [`commands`]: one module per operation; this is where the business
//!   logic and the lion's share of the tests live.
//! - [`api`]: a thin facade ([`api::DeckApi`]) that owns the store, applies
//!   the per-operation deadline, and dispatches to commands.
//!
//! ## Resequencing
//!
//! Any mutation that can leave a gap or disorder in the label sequence
//! (adding a block under an arbitrary label, deleting a block, deleting a
//! section) is followed by a compaction pass: read the distinct labels, sort
//! them canonically, and bulk-rename every label whose position does not
//! match `Page {position}`. The pass is deliberately non-transactional and
//! idempotent: if it fails partway the store is left renumbered but
//! possibly sparse, and the next successful pass converges. See
//! [`commands::helpers::resequence`].

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod order;
pub mod store;
