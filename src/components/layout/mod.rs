//! Page frame shared by every route.

mod app_shell;
mod footer;
mod header;

pub(crate) use app_shell::AppShell;
pub(crate) use footer::Footer;
pub(crate) use header::Header;
