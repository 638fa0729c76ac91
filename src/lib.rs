pub mod controllers;
pub mod infra;
pub mod schemas;
