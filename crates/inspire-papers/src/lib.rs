//! INSPIRE-HEP Publication Report
//!
//! Fetches an author's records from the INSPIRE-HEP literature API, projects
//! each one onto the Academia Sinica IOP report columns, and writes the rows
//! as `papers.json` and `papers.xlsx`.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use inspire_papers::{config::ReportSettings, report::generate_report, Config, InspireClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = InspireClient::new(Config::default())?;
//!     let outcome = generate_report(&client, &ReportSettings::default(), Path::new(".")).await?;
//!     println!("wrote {} rows", outcome.rows);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod formatters;
pub mod models;
pub mod report;

pub use client::InspireClient;
pub use config::Config;
pub use error::{ClientError, ExportError, RecordError};
