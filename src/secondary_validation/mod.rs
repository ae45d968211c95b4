mod nicaraguan_cedula_checksum;

pub use crate::secondary_validation::nicaraguan_cedula_checksum::NicaraguanCedulaChecksum;

/// Second-pass check on a string that already matched a cédula-shaped pattern
/// such as [CEDULA_PATTERN](crate::CEDULA_PATTERN).
pub trait Validator: Send + Sync {
    fn is_valid_match(&self, regex_match: &str) -> bool;
}
