//! Company Directory Service Library
//!
//! Core modules behind the `company-api` binary (`main.rs`).
//!
//! ## Modules
//! - **`company`**: The in-memory company/employee store, its pagination rules,
//!   and the axum handlers that expose it.
//! - **`app`**: Router assembly; wires every endpoint to a shared store handle.
//! - **`config`**: Command-line and environment configuration.
//! - **`error`**: The error taxonomy and its mapping to HTTP responses.
//! - **`logging`**: Tracing subscriber setup and per-request tracing middleware.

pub mod app;
pub mod company;
pub mod config;
pub mod error;
pub mod logging;

pub use app::build_router;
pub use company::store::CompanyStore;
pub use company::types::{Company, CompanyId, Employee, EmployeeId};
pub use config::Config;
pub use error::{ApiError, Result};
