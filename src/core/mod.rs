//! Signature checks and error types

pub mod error;
pub mod validator;
