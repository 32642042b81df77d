// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`image_editor`] - Toolbar, preview and the resize/flip dialogs
//! - [`angle_dial`] - Circular control used to pick a rotation angle
//! - [`notifications`] - Toast notification system for user feedback
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod angle_dial;
pub mod design_tokens;
pub mod image_editor;
pub mod notifications;
pub mod theming;
