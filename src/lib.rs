//! Mergington High School activities API.
//!
//! Lists extracurricular activities and manages sign-ups against an
//! in-memory roster that lives for the lifetime of the process.

pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod web;
