//! HTTP handlers for the list item endpoints.

pub mod lists;
