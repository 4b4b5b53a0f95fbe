//! Integration tests for rbac-gate
//!
//! These tests drive the full actix application without mocking.

pub mod auth_flow_tests;
pub mod config_tests;
pub mod page_tests;
pub mod rbac_tests;
