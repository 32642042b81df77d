// SPDX-License-Identifier: MPL-2.0
//! `iced_pivot` is a small image editor built with the Iced GUI framework.
//!
//! It loads one image, resizes, rotates (with the angle picked on a circular
//! dial) or flips it, previews the result and exports the latest transform.

#![doc(html_root_url = "https://docs.rs/iced_pivot/0.1.0")]

pub mod app;
pub mod domain;
pub mod editor;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

pub use app::config;
