//! Static attack use case catalog: defined at load time, read-only after.

pub mod store;
pub mod types;

pub use store::{all, categories, find, search};
pub use types::UseCase;
