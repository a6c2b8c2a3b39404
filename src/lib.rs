pub mod admin;
pub mod api;
pub mod common;
pub mod config;
pub mod models;
pub mod services;
pub mod web;
