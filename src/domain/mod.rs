// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core editing rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`editing`]: Image editing types ([`DialAngle`](editing::DialAngle),
//!   [`ResizeDimensions`](editing::ResizeDimensions), [`FlipAxis`](editing::FlipAxis))

pub mod editing;
