// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod cedula;
mod checksum;
mod error;
mod fields;
mod format_rules;
mod normalization;
mod observability;
mod secondary_validation;
mod str_utils;
mod validation;
mod validator;

// This is the public API of the cédula validation library
pub use cedula::Cedula;
pub use checksum::{check_letter, letter_position, LETTER_TABLE};
pub use error::InvalidReason;
pub use fields::CedulaFields;
pub use format_rules::{is_pattern_format_valid, CEDULA_PATTERN};
pub use normalization::{normalize_cedula, CEDULA_LENGTH};
pub use observability::{Labels, ValidationMetrics, NO_LABEL};
pub use secondary_validation::{NicaraguanCedulaChecksum, Validator};
pub use validation::validate;
pub use validator::CedulaValidator;
