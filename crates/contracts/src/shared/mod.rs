pub mod api;
pub mod csv;
pub mod form;
pub mod list;
pub mod metadata;
pub mod report;
pub mod routes;
