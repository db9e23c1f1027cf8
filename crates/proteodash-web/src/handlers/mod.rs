//! HTTP handlers for all web routes.

pub mod dashboard;
pub mod volcano;
pub mod boxplot;
pub mod gene_info;
