//! proteodash-web — Web dashboard for the young/old donor proteomics dataset.
//! Provides:
//!   - Volcano plot of the limma differential expression results
//!   - Per-gene young vs old boxplots
//!   - Publication lookup via MyGene.info

pub mod cache;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
