#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod collate;
pub mod list;
pub mod locale;
pub mod present;
pub mod query;
pub mod route;
