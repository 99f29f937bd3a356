//! # Order Intake Module
//!
//! One core validator shared by both delivery shapes: the synchronous HTTP
//! endpoint hands it a structured order, the queue worker hands it the raw
//! message text. The transports stay thin so validation lives in one place.

pub mod queue;
pub mod validator;
