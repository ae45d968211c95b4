use crate::error::InvalidReason;
use metrics::{counter, Counter, IntoLabels, Label, SharedString};
use strum::IntoEnumIterator;

/// Key/value labels attached to every validation metric.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Labels(Vec<Label>);

pub const NO_LABEL: Labels = Labels(vec![]);

const REASON: &str = "reason";

impl Labels {
    pub fn new(
        labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Self {
        Labels(labels.iter().map(Label::from).collect())
    }

    /// Copy of these labels with one more key/value pair.
    pub fn with_label(
        &self,
        key: impl Into<SharedString>,
        value: impl Into<SharedString>,
    ) -> Labels {
        let mut labels = self.0.clone();
        labels.push(Label::new(key, value));
        Labels(labels)
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}

pub struct ValidationMetrics {
    pub validations: Counter,
    pub valid: Counter,
    invalid: Vec<(InvalidReason, Counter)>,
}

impl ValidationMetrics {
    pub fn new(labels: &Labels) -> Self {
        ValidationMetrics {
            validations: counter!("cedula.validations", labels.clone()),
            valid: counter!("cedula.valid", labels.clone()),
            invalid: InvalidReason::iter()
                .map(|reason| {
                    (
                        reason,
                        counter!(
                            "cedula.invalid",
                            labels.with_label(REASON, reason.as_str())
                        ),
                    )
                })
                .collect(),
        }
    }

    pub fn invalid(&self, reason: InvalidReason) -> Option<&Counter> {
        self.invalid
            .iter()
            .find(|(r, _)| *r == reason)
            .map(|(_, counter)| counter)
    }

    pub fn record<T>(&self, result: &Result<T, InvalidReason>) {
        self.validations.increment(1);
        match result {
            Ok(_) => self.valid.increment(1),
            Err(reason) => {
                if let Some(counter) = self.invalid(*reason) {
                    counter.increment(1);
                }
            }
        }
    }
}

impl Default for ValidationMetrics {
    fn default() -> Self {
        ValidationMetrics::new(&NO_LABEL)
    }
}
