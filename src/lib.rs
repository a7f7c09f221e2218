//! Stacks library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod library;
pub mod tui;

#[cfg(test)]
pub mod test_support;

#[derive(Clone, Debug, Default, ValueEnum)]
pub enum ClientKind {
    /// Live Konkuk University Library catalog
    #[default]
    Pyxis,
    /// Canned offline chart, no network required
    Fixture,
}

impl ClientKind {
    /// Config-file spelling of this client kind.
    pub fn as_config_str(&self) -> &'static str {
        match self {
            ClientKind::Pyxis => "pyxis",
            ClientKind::Fixture => "fixture",
        }
    }
}
