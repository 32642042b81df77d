// SPDX-License-Identifier: MPL-2.0
//! Editing session state, independent of any widget code.

pub mod session;

pub use session::{EditorSession, SaveOutcome, SessionOptions, TransformKind};
