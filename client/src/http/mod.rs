//! HTTP layer for the JobDesk REST API
//!
//! [`ApiClient`] owns the reqwest client and the response policy; the
//! endpoint modules implement the `jb_core` gateway ports on top of it:
//! - `auth`: login, registration, password reset
//! - `jobs`: job board, job CRUD, categories and companies
//! - `profile`: the `/users/me` endpoints
//! - `applications`: submissions, listings, file downloads

mod applications;
mod auth;
mod client;
mod jobs;
mod profile;

pub use client::ApiClient;
