//! Input validation

mod email;

pub use email::{validate_email, EmailError, ValidEmail};
