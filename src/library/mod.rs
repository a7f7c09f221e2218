pub mod client;
pub mod clients;
pub mod types;

pub use client::{BookSearch, SearchError};
pub use clients::{FixtureClient, PyxisClient};
pub use types::{Book, Category, SearchWindow};
