//! UI layer for the admin dashboard: app shell, screens, and theme.

pub mod app;
pub mod help;
pub mod theme;

pub use app::AdminApp;
