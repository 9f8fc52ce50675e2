// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the toast and loading overlay views.
//!
//! - **Palette**: Base and severity colors
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale (4px grid)
//! - **Sizing**: Component sizes
//! - **Typography**: Font sizes
//! - **Radius**: Border radii
//! - **Shadow**: Shadow definitions

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    const fn rgb8(r: u8, g: u8, b: u8) -> Color {
        Color::from_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    /// Slate text used inside the loading card (`#334155`).
    pub const SLATE_700: Color = rgb8(0x33, 0x41, 0x55);

    // Severity colors
    /// `#10b981`
    pub const SUCCESS: Color = rgb8(0x10, 0xb9, 0x81);
    /// `#ef4444`
    pub const ERROR: Color = rgb8(0xef, 0x44, 0x44);
    /// `#f59e0b`
    pub const WARNING: Color = rgb8(0xf5, 0x9e, 0x0b);
    /// `#3b82f6`
    pub const INFO: Color = rgb8(0x3b, 0x82, 0xf6);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SHADOW: f32 = 0.15;
    /// Loading overlay backdrop.
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 10.0;
    pub const SM: f32 = 15.0;
    pub const MD: f32 = 20.0;
    pub const LG: f32 = 30.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const SPINNER: f32 = 48.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const LOADING_CARD_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const LOADING_MESSAGE: f32 = 18.0;
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    /// `0 4px 12px rgba(0,0,0,0.15)`
    pub const TOAST: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };
}

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::MD > spacing::SM);
    assert!(opacity::OVERLAY_STRONG > 0.0 && opacity::OVERLAY_STRONG < 1.0);
    assert!(typography::LOADING_MESSAGE > typography::BODY);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [palette::SUCCESS, palette::ERROR, palette::WARNING, palette::INFO];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn toast_shadow_is_translucent() {
        assert!(shadow::TOAST.color.a < opacity::OPAQUE);
    }
}
