//! # Authentication Module
//!
//! Handles credential validation and JWT token issuance for the login
//! endpoint. The signing key is constructed once at startup and injected
//! into the issuer, so all tokens minted by one process share it.

pub mod jwt;
pub mod models;
pub mod signing_key;
pub mod validation;
