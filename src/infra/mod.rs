pub mod config;
pub mod cors;
pub mod db;
pub mod routes;
