//! Route paths and the table the router and header are built from.

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const CHANGE_PASSWORD: &str = "/change-password";
pub const FORGET_PASSWORD: &str = "/forget-password";
pub const RESULT: &str = "/result";

/// Where a successful login lands.
pub const AFTER_LOGIN: &str = RESULT;
/// Where logout sends the user.
pub const AFTER_LOGOUT: &str = LOGIN;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteId {
    Home,
    Login,
    ChangePassword,
    ForgetPassword,
    Result,
    NotFound,
}

impl RouteId {
    pub const ALL: [RouteId; 5] = [
        RouteId::Home,
        RouteId::Login,
        RouteId::ChangePassword,
        RouteId::ForgetPassword,
        RouteId::Result,
    ];

    /// `None` for the catch-all.
    pub fn path(self) -> Option<&'static str> {
        match self {
            RouteId::Home => Some(HOME),
            RouteId::Login => Some(LOGIN),
            RouteId::ChangePassword => Some(CHANGE_PASSWORD),
            RouteId::ForgetPassword => Some(FORGET_PASSWORD),
            RouteId::Result => Some(RESULT),
            RouteId::NotFound => None,
        }
    }

    /// Exact match on the pathname; a single trailing slash is ignored.
    pub fn resolve(pathname: &str) -> RouteId {
        let trimmed = match pathname.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => pathname,
        };
        Self::ALL
            .into_iter()
            .find(|route| route.path() == Some(trimmed))
            .unwrap_or(RouteId::NotFound)
    }
}
