//! # Payreg Architecture
//!
//! Payreg is a console payroll and attendance register backed by flat CSV
//! table files. The record-store layer is the library; the interactive menu
//! is a thin binary client wired up in `main.rs`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell (main.rs, args.rs, prompt.rs, render.rs)             │
//! │  - Menu loop, field prompts, table rendering                │
//! │  - The ONLY place that touches stdin/stdout                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - EmployeeStore, AttendanceStore                           │
//! │  - read-all / transform / rewrite-all per mutation          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (model.rs)                                           │
//! │  - Record types, field validators                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From the stores inward, code takes regular arguments and returns
//! `Result` values; keyed lookups report `Found`/`NotFound` as outcome
//! enums rather than errors. The one deliberate seam is employee deletion,
//! which takes a confirmation callback so the shell can ask the operator
//! per candidate row without the store knowing about terminals.
//!
//! ## Concurrency Model
//!
//! Single process, single writer, strictly sequential: every operation
//! re-reads its file from disk and fully owns the handle for its duration.
//! Concurrent external access to a table file is undefined behavior; no
//! locking is attempted.
//!
//! ## Module Overview
//!
//! - [`store`]: the two table stores and their shared file plumbing
//! - [`model`]: record types (`EmployeeRecord`, `AttendanceRecord`) and
//!   field validators
//! - [`config`]: table file locations ([`config::RegisterConfig`])
//! - [`error`]: error types

pub mod config;
pub mod error;
pub mod model;
pub mod store;
