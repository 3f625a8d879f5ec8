//! Inventory domain module: the stock-movement ledger.
//!
//! Every change to a product's stock is recorded as an append-only
//! [`StockMovement`]. This crate holds the rules for turning a movement request
//! into a new stock level (no IO, no HTTP, no storage).

pub mod movement;

pub use movement::{MovementKind, MovementOutcome, RecordMovement, StockMovement};
