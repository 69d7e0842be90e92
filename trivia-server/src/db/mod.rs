//! Storage layer - connection pool and the [`TriviaStore`] implementations
//!
//! Handlers only see `dyn TriviaStore`. `PgStore` backs production,
//! `MemoryStore` backs tests and database-less runs.
//!
//! The PostgreSQL schema is provisioned out of band:
//!
//! ```sql
//! CREATE TABLE categories (id SERIAL PRIMARY KEY, type TEXT NOT NULL);
//! CREATE TABLE questions (
//!     id SERIAL PRIMARY KEY,
//!     question TEXT NOT NULL,
//!     answer TEXT NOT NULL,
//!     category TEXT NOT NULL,
//!     difficulty INTEGER NOT NULL
//! );
//! ```
//!
//! Every column is `NOT NULL` because rows decode into non-optional fields;
//! a nullable column would turn a single bad row into a failed listing.

pub mod pool;
pub mod store;
pub mod postgres;
pub mod memory;

pub use pool::{create_pool, create_pool_with_options};
pub use store::{StoreError, TriviaStore};
pub use postgres::PgStore;
pub use memory::MemoryStore;
