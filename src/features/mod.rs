pub(crate) mod api_types;
pub(crate) mod auth;
pub(crate) mod forms;
pub(crate) mod result;
pub(crate) mod session;
