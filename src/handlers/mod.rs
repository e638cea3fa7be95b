//! HTTP handlers for tutorial CRUD.

pub mod tutorial;
