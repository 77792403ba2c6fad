pub(crate) mod announcements;
pub(crate) mod auth;
pub(crate) mod courses;
pub(crate) mod errors;
pub(crate) mod extract;
pub(crate) mod handlers;
pub(crate) mod router;
pub(crate) mod schedule;
pub(crate) mod tasks;
pub(crate) mod users;
