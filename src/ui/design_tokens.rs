// SPDX-License-Identifier: MPL-2.0
//! Design tokens: the shared palette and size scales.
//!
//! Widgets pick values from here instead of hard-coding them, so spacing and
//! colors stay consistent across the toolbar, dialogs and toasts.
//!
//! ```
//! use iced_pivot::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let backdrop = Color {
//!     a: opacity::OVERLAY_MEDIUM,
//!     ..palette::BLACK
//! };
//! let padding = spacing::MD; // 16px
//! # let _ = (backdrop, padding);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Near-opaque surfaces such as the dial face.
    pub const SURFACE: f32 = 0.95;
}

/// 8px grid.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    pub const TOOLBAR_BUTTON_WIDTH: f32 = 140.0;
    pub const DIALOG_WIDTH: f32 = 320.0;
    pub const DIALOG_LABEL_WIDTH: f32 = 100.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

pub mod typography {
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(sizing::DIALOG_WIDTH > sizing::DIALOG_LABEL_WIDTH);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}
