//! Column-type dispatch and selection reconciliation for interactive data grids.
//!
//! The crate turns raw cell values into typed, validated cells according to a
//! column's configured kind, and reconciles raw selection events coming from a
//! rendering surface into a consistent row/column/cell selection that is
//! forwarded to a [`WidgetStateBridge`](bridge::WidgetStateBridge) exactly when
//! the user's intent changed.

pub mod bridge;
pub mod cell;
pub mod column;
pub mod config;
pub mod error;
pub mod overlay;
pub mod selection;

mod grid;

pub use grid::*;
