// SPDX-License-Identifier: MPL-2.0
//! Modal dialog state for the editor.

pub mod flip;
pub mod resize;

pub use flip::FlipForm;
pub use resize::ResizeForm;

/// The dialog currently covering the editor, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Resize(ResizeForm),
    Flip(FlipForm),
}
