//! 24-bit RGB colors and brightness transforms.
//!
//! Native widgets take colors as `0xRRGGBB` integers. [`Color`] wraps that
//! value and provides the two brightness helpers the button widget needs:
//! a plain channel multiply and the press-color variant that dims instead of
//! brightening when a channel is already saturated.

use std::fmt;

/// A 24-bit RGB color stored as `0xRRGGBB`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xffffff);
    /// The stock accent color used when nothing else is configured.
    pub const ORANGE: Color = Color(0xfc6950);

    /// Build a color from its channels.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Split into `(r, g, b)` channels. Bits above 24 are ignored.
    #[inline]
    pub const fn rgb(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        )
    }

    /// Scale each channel by `multiplier`, rounding and clamping to `[0, 255]`.
    ///
    /// `1.3` brightens by 30%, `0.7` dims by 30%.
    pub fn multiply(self, multiplier: f32) -> Color {
        let (r, g, b) = self.rgb();
        Color::from_rgb(
            scale_channel(r, multiplier),
            scale_channel(g, multiplier),
            scale_channel(b, multiplier),
        )
    }

    /// Derive a button press color from its normal color.
    ///
    /// If any channel is already 255 and `multiplier` would brighten, the
    /// color is divided by `multiplier` instead, so the pressed state still
    /// differs visibly from the normal one.
    pub fn press_variant(self, multiplier: f32) -> Color {
        let (r, g, b) = self.rgb();
        let saturated = r == u8::MAX || g == u8::MAX || b == u8::MAX;
        if saturated && multiplier > 1.0 {
            self.multiply(1.0 / multiplier)
        } else {
            self.multiply(multiplier)
        }
    }
}

fn scale_channel(channel: u8, multiplier: f32) -> u8 {
    (channel as f32 * multiplier).round().clamp(0.0, 255.0) as u8
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Color(value & 0xff_ffff)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

/// Formats as `0x` followed by six lowercase hex digits.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:06x}", self.0 & 0xff_ffff)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_roundtrip() {
        let c = Color::from_rgb(0xfc, 0x69, 0x50);
        assert_eq!(c, Color::ORANGE);
        assert_eq!(c.rgb(), (0xfc, 0x69, 0x50));
    }

    #[test]
    fn from_u32_masks_high_bits() {
        assert_eq!(Color::from(0xff12_3456), Color(0x123456));
    }

    #[test]
    fn display_pads_to_six_digits() {
        assert_eq!(Color(0x0000ff).to_string(), "0x0000ff");
        assert_eq!(Color::ORANGE.to_string(), "0xfc6950");
    }

    #[test]
    fn multiply_mid_gray() {
        // 0x80 * 1.3 = 166.4 -> 166 = 0xa6
        let c = Color(0x808080).multiply(1.3);
        assert_eq!(c, Color(0xa6a6a6));
        assert_eq!(c.to_string(), "0xa6a6a6");
    }

    #[test]
    fn multiply_clamps_at_255() {
        assert_eq!(Color::WHITE.multiply(1.3), Color::WHITE);
        assert_eq!(Color(0xf00000).multiply(2.0), Color(0xff0000));
    }

    #[test]
    fn multiply_dims() {
        // 200 * 0.5 = 100 = 0x64
        assert_eq!(Color(0xc8c8c8).multiply(0.5), Color(0x646464));
    }

    #[test]
    fn multiply_negative_clamps_to_zero() {
        assert_eq!(Color(0x808080).multiply(-1.0), Color::BLACK);
    }

    #[test]
    fn press_variant_brightens_unsaturated() {
        assert_eq!(Color(0x808080).press_variant(1.3), Color(0xa6a6a6));
    }

    #[test]
    fn press_variant_dims_saturated() {
        // 255 / 1.3 = 196.15 -> 196 = 0xc4
        assert_eq!(Color::WHITE.press_variant(1.3), Color(0xc4c4c4));
    }

    #[test]
    fn press_variant_single_saturated_channel() {
        // orange has r = 0xfc, not saturated
        let pressed = Color::ORANGE.press_variant(1.3);
        assert_eq!(pressed.rgb().0, 0xff);

        // 0xff0000 / 1.3 -> r = 196
        assert_eq!(Color(0xff0000).press_variant(1.3), Color(0xc40000));
    }

    #[test]
    fn press_variant_dimming_multiplier_is_not_inverted() {
        assert_eq!(Color::WHITE.press_variant(0.5), Color(0x808080));
    }
}
