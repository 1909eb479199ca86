//! Overlap layout engine for resource-scheduling calendars.
//!
//! Positions the appointments of a multi-resource day view so that
//! items overlapping in time sit side by side (or indented) instead of
//! on top of each other, while free-standing items keep full width.
//! Rendering, gestures and state binding belong to the host UI.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Event`, `DisabledBlock`, `Resource`,
//!   `Interval`, `TimeSpan`, `Frame`, `ColumnSlot`, and the `overlaps` predicate
//! - **`layout`**: Overlap clustering, greedy column partitioning, stacked
//!   levels, pixel mapping, and the `compute_frames` entry point
//! - **`timescale`**: Minute ↔ pixel geometry, drag snapping, clock labels
//! - **`validation`**: Optional input checks (duplicate IDs, minute ranges, options)
//!
//! # Determinism
//!
//! Every layout call is a pure function of its inputs, including their
//! order: clustering is single-pass and order-sensitive.
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1
//! - Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs", Ch. 8 (Interval Graphs)

pub mod layout;
pub mod models;
pub mod timescale;
pub mod validation;
