//! Application state and key handling

pub mod state;

pub use state::App;
