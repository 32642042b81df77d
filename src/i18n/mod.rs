// SPDX-License-Identifier: MPL-2.0
//! Localization with Fluent.
//!
//! Translation files are embedded at build time from `assets/i18n/`. The
//! locale is picked from the `--lang` flag, then `settings.toml`, then the
//! OS, falling back to `en-US`.

pub mod fluent;
