//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! - **Thin adapters**: the repository only translates between Diesel rows
//!   and domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Async-safe pooling**: connections come from a shared `bb8` pool via
//!   `diesel-async`.
//!
//! # Example
//!
//! ```ignore
//! use documents_backend::outbound::persistence::{DbPool, DieselDocumentRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/documents")).await?;
//! let repo = DieselDocumentRepository::new(pool);
//! ```

mod diesel_document_repository;
mod models;
mod pool;
mod schema;

pub use diesel_document_repository::DieselDocumentRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
