pub mod admin;
pub mod config;
pub mod db;
pub mod environment;
pub mod errors;
pub mod log;
pub mod manager;
pub mod normalization;
pub mod notify;
pub mod portfolio;
pub mod records;
pub mod session;
pub mod store;
