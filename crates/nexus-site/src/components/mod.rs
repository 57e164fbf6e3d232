//! UI components for the site.

mod app;
mod earn;
mod home;
mod navbar;
mod shell;

pub use app::*;
pub use earn::*;
pub use home::*;
pub use navbar::*;
pub use shell::*;
