pub mod context;
pub mod error;
pub mod json;
pub mod notifier;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
