//! Integration tests for Rankly

mod config_integration;
mod resume_equivalence;
mod session_driver;
mod store_integration;
