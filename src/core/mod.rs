//! Core domain types served behind the gate
//!
//! This module contains the protected resources the access policy is
//! evaluated against.

pub mod pages;

pub use pages::{Page, PageCatalog};
