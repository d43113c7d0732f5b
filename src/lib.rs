pub mod app;
pub mod auth;
pub mod config;
pub mod constants;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod repository;
