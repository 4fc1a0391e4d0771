//! Terminal rendering surface for the storefront.

pub mod terminal;

pub use terminal::TerminalView;
