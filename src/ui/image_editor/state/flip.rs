// SPDX-License-Identifier: MPL-2.0
//! Flip dialog state.

use crate::domain::editing::FlipAxis;

/// Radio selection of the flip dialog. Vertical is preselected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipForm {
    pub selected: Option<FlipAxis>,
}

impl Default for FlipForm {
    fn default() -> Self {
        Self {
            selected: Some(FlipAxis::default()),
        }
    }
}
