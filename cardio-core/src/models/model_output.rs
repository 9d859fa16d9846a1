/// Raw output of one model invocation: joint probability and label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelOutput {
    /// Positive-class membership probability.
    pub probability: f64,
    /// Predicted class label (0 or 1).
    pub label: u8,
}
