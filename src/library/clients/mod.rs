pub mod fixture;
pub mod pyxis;

pub use fixture::FixtureClient;
pub use pyxis::PyxisClient;
