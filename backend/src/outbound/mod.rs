//! Outbound adapters implementing the forum repository ports.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM.
//! - **memory**: an in-process store with the same integrity rules, for
//!   tests and local tooling.
//!
//! Adapters are thin translators between domain types and storage. The one
//! rule they own is the restricted account delete, which must be atomic with
//! the rows it inspects.

pub mod memory;
pub mod persistence;
