//! Exam result feature: fetches the signed-in student's result and models the
//! section-by-section view of it.

pub(crate) mod service;
pub(crate) mod state;
pub(crate) mod types;
