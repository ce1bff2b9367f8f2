//! Priority Audit - Project intake scoring dashboard backend
//!
//! A project is rated on five value criteria and six risk criteria, each
//! Low/Medium/High. The totals are classified into a priority level with
//! narrative advice and chart series, served to a browser front-end and
//! exportable as a printable document.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
