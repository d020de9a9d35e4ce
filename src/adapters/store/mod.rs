//! Record store adapter
//!
//! The backing store is a generic record-fetching service. This module holds
//! the [`RecordStore`] trait, the collection catalogue with each collection's
//! sort order, and the PostgREST implementation.

pub mod collection;
pub mod postgrest;
pub mod traits;

pub use collection::{Collection, SortDirection, SortKey};
pub use postgrest::PostgrestStore;
pub use traits::RecordStore;
