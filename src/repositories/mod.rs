//! Parameterized statements against the relational store, one module per table.
//! Nothing here spans more than one statement or opens a transaction.

pub(crate) mod announcements;
pub(crate) mod courses;
pub(crate) mod schedule;
pub(crate) mod tasks;
pub(crate) mod users;
pub(crate) mod verification_codes;
