use crate::cedula::Cedula;
use crate::error::InvalidReason;
use crate::fields::CedulaFields;
use crate::normalization::normalize_cedula;
use crate::observability::{Labels, ValidationMetrics};
use crate::validation::validate_normalized;

/// Set-then-query validator holding one candidate at a time.
///
/// ```
/// use nic_cedula::CedulaValidator;
///
/// let mut validator = CedulaValidator::new();
/// validator.set_cedula("001-251075-0012S");
/// assert!(validator.is_valid());
/// assert_eq!(validator.calculate_letter(), Some('S'));
/// ```
///
/// Every query is a pure read of the stored candidate. A candidate that does
/// not normalize to 14 characters is dropped by [CedulaValidator::set_cedula],
/// after which accessors return `None` and every check returns `false`.
#[derive(Default)]
pub struct CedulaValidator {
    cedula: Option<String>,
    metrics: ValidationMetrics,
}

impl CedulaValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validator whose metrics carry the given labels.
    pub fn with_labels(labels: &Labels) -> Self {
        CedulaValidator {
            cedula: None,
            metrics: ValidationMetrics::new(labels),
        }
    }

    /// Replace the candidate. Accepts the number with or without hyphens, in any case.
    pub fn set_cedula(&mut self, cedula: &str) {
        self.cedula = normalize_cedula(cedula);
    }

    /// The normalized candidate, if it has the right length.
    pub fn cedula(&self) -> Option<&str> {
        self.cedula.as_deref()
    }

    fn fields(&self) -> Option<CedulaFields<'_>> {
        self.cedula.as_deref().and_then(CedulaFields::new)
    }

    pub fn prefix(&self) -> Option<&str> {
        self.fields().map(|f| f.prefix())
    }

    pub fn date(&self) -> Option<&str> {
        self.fields().map(|f| f.date())
    }

    /// Sequence number and check letter.
    pub fn suffix(&self) -> Option<&str> {
        self.fields().map(|f| f.suffix())
    }

    pub fn letter(&self) -> Option<char> {
        self.fields().map(|f| f.letter())
    }

    /// The candidate without its check letter.
    pub fn body(&self) -> Option<&str> {
        self.fields().map(|f| f.body())
    }

    pub fn is_valid(&self) -> bool {
        self.fields().is_some_and(|f| f.check().is_ok())
    }

    /// Structure of the whole candidate: prefix, date and suffix at once, no checksum.
    pub fn is_pattern_valid(&self) -> bool {
        self.fields().is_some_and(|f| f.is_pattern_valid())
    }

    pub fn is_prefix_valid(&self) -> bool {
        self.fields().is_some_and(|f| f.is_prefix_valid())
    }

    pub fn is_date_valid(&self) -> bool {
        self.fields().is_some_and(|f| f.is_date_valid())
    }

    pub fn is_suffix_valid(&self) -> bool {
        self.fields().is_some_and(|f| f.is_suffix_valid())
    }

    pub fn is_letter_valid(&self) -> bool {
        self.fields().is_some_and(|f| f.is_letter_valid())
    }

    /// `body mod 23`, or `None` when there is no candidate or its body is not numeric.
    pub fn letter_position(&self) -> Option<usize> {
        self.fields().and_then(|f| f.letter_position())
    }

    /// The check letter the candidate should end with.
    pub fn calculate_letter(&self) -> Option<char> {
        self.fields().and_then(|f| f.calculate_letter())
    }

    /// Same checks as [CedulaValidator::is_valid], reporting why the candidate
    /// was rejected. Outcomes are counted in the validator's metrics.
    pub fn validate(&self) -> Result<Cedula, InvalidReason> {
        let result = match &self.cedula {
            Some(normalized) => validate_normalized(normalized.clone()),
            None => Err(InvalidReason::MalformedLength),
        };
        self.metrics.record(&result);
        result
    }
}
