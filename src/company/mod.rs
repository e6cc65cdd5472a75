//! Company Directory Module
//!
//! An in-memory, ordered store of companies and the employees they own,
//! exposed over a small REST API.
//!
//! ## Core Concepts
//! - **Ordering**: Companies and employees are kept in insertion order, which is
//!   also the order every listing returns.
//! - **Uniqueness**: Company names are unique among live companies at creation time.
//!   Deleting a company frees its name.
//! - **Pagination**: Listings can be cut into 1-based pages; windows past the end are
//!   clamped to whatever remains (see `pagination`).
//! - **Locking**: One read-write lock guards the collection so each mutation is a
//!   single atomic step.
//!
//! ## Submodules
//! - **`store`**: `CompanyStore`, the authoritative collection and its operations.
//! - **`pagination`**: Page window arithmetic and query parameters.
//! - **`handlers`**: Axum request handlers mapping HTTP calls onto the store.
//! - **`protocol`**: Route templates and inbound request bodies.
//! - **`types`**: `Company`, `Employee` and their identifiers.

pub mod handlers;
pub mod pagination;
pub mod protocol;
pub mod store;
pub mod types;
