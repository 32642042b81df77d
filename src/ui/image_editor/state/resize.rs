// SPDX-License-Identifier: MPL-2.0
//! Resize dialog state.

use crate::domain::editing::{DimensionError, ResizeDimensions};

/// Raw text of the width/height inputs plus the last validation error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResizeForm {
    pub width_input: String,
    pub height_input: String,
    pub error: Option<DimensionError>,
}

impl ResizeForm {
    /// Empty inputs, no error.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_width(&mut self, value: String) {
        self.width_input = value;
        self.error = None;
    }

    pub fn set_height(&mut self, value: String) {
        self.height_input = value;
        self.error = None;
    }

    /// Parses both inputs, remembering the error for inline display.
    pub fn validate(&mut self) -> Result<ResizeDimensions, DimensionError> {
        let parsed = ResizeDimensions::parse(&self.width_input, &self.height_input);
        self.error = parsed.err();
        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_positive_integers() {
        let mut form = ResizeForm::new();
        form.set_width("100".into());
        form.set_height(" 50 ".into());
        let dims = form.validate().expect("valid input");
        assert_eq!((dims.width(), dims.height()), (100, 50));
        assert!(form.error.is_none());
    }

    #[test]
    fn validate_keeps_error_for_display() {
        let mut form = ResizeForm::new();
        form.set_width("abc".into());
        form.set_height("10".into());
        assert_eq!(form.validate(), Err(DimensionError::NotAnInteger));
        assert_eq!(form.error, Some(DimensionError::NotAnInteger));
    }

    #[test]
    fn editing_an_input_clears_the_error() {
        let mut form = ResizeForm::new();
        form.set_width("0".into());
        form.set_height("10".into());
        assert_eq!(form.validate(), Err(DimensionError::NotPositive));

        form.set_width("5".into());
        assert!(form.error.is_none());
    }
}
