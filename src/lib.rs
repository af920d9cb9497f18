pub mod app;
pub mod domain;
pub mod infra;
pub mod render;
pub mod schedule;
