#![forbid(unsafe_code)]
//! Models and UI-free logic shared by the OJ Lab web console.
//!
//! Everything in here compiles and tests natively; the browser-only pieces
//! live in the `ojlab-web` crate.

pub mod auth;
pub mod models;
