//! In-memory adapters.

mod project_store;

pub use project_store::InMemoryProjectStore;
