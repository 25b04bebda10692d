//! # flashlog - Crash-Safe CSV Logger for Flash Media
//!
//! flashlog records tabular rows into a single preformatted container on a
//! block-erasable non-volatile medium, such that a host computer opening
//! the medium as a file sees a human-readable table plus a downloadable CSV
//! of everything recorded. It is built for devices where writes can only
//! clear bits, erase is page-granular and wear-expensive, and power can
//! disappear between any two bytes.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use flashlog::{DataLog, SimNvm, TimeUnit};
//!
//! let nvm = Arc::new(SimNvm::new(4096, 32));
//! let log = DataLog::new(nvm);
//!
//! log.set_time_unit(TimeUnit::Seconds)?;
//! log.begin_row()?;
//! log.log("temperature", "21.5")?;
//! log.log("humidity", "40")?;
//! log.end_row()?;
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │      Public API (DataLog)           │
//! ├─────────────────────────────────────┤
//! │  Schema / Rows    │  Data Writer    │
//! ├───────────────────┼─────────────────┤
//! │  Journal Ring     │  Mount/Recovery │
//! ├─────────────────────────────────────┤
//! │  Write-Through Block Cache          │
//! ├─────────────────────────────────────┤
//! │  NVM Adapter (hardware or SimNvm)   │
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Medium Layout
//!
//! ```text
//! ┌──────────────┬──────────────┬─────────────┬──────────────────┬───────┐
//! │ header blob  │ metadata +   │ journal     │ CSV data region  │ spare │
//! │ (host HTML)  │ heading area │ ring        │                  │ page  │
//! └──────────────┴──────────────┴─────────────┴──────────────────┴───────┘
//! ```
//!
//! ## Durability Model
//!
//! Appends are crash-safe at row granularity: the journal ring pins the
//! durable end-of-data at cache-block granularity, a byte-scan at mount
//! recovers the finer tail, and the commit protocol never invalidates a
//! journal entry before its successor is durable. See [`logger`] for the
//! exact orderings.
//!
//! ## Module Overview
//!
//! - [`logger`]: the [`DataLog`] type (public API, mount/recovery, the
//!   append path)
//! - `journal`: circular ring of commit records
//! - `schema`: column ordering, field cleaning, timestamp rendering
//! - [`format`]: on-medium records and the fixed host viewer blob
//! - [`storage`]: NVM adapter contract, block cache, in-RAM simulator
//! - [`config`]: format and cache constants
//! - [`error`]: the caller-facing error kinds

pub mod config;
pub mod error;
pub mod format;
mod journal;
pub mod logger;
mod schema;
pub mod storage;

pub use error::{Error, Result};
pub use logger::{Clock, DataLog, DataLogBuilder, SystemClock};
pub use schema::TimeUnit;
pub use storage::{NvmDevice, SimNvm, VolumeConfig};
