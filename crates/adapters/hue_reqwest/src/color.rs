//! RGB to CIE 1931 xy conversion for the bridge's `xy` color mode.
//!
//! Only chromaticity is derived. Brightness is a separate light attribute and
//! a color change leaves it untouched.

use huebridge_domain::color::ColorRgba;

/// Chromaticity of the D65 white point, used when the color has no light at all.
const WHITE_POINT: [f32; 2] = [0.3127, 0.3290];

fn expand_gamma(channel: u8) -> f64 {
    let value = f64::from(channel) / 255.0;
    if value > 0.040_45 {
        ((value + 0.055) / 1.055).powf(2.4)
    } else {
        value / 12.92
    }
}

/// Convert an sRGB color to xy using the Wide RGB D65 matrix.
///
/// Alpha is ignored; callers always send opaque colors.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn rgb_to_xy(color: ColorRgba) -> [f32; 2] {
    let r = expand_gamma(color.r);
    let g = expand_gamma(color.g);
    let b = expand_gamma(color.b);

    let x = r * 0.664_511 + g * 0.154_324 + b * 0.162_028;
    let y = r * 0.283_881 + g * 0.668_433 + b * 0.047_685;
    let z = r * 0.000_088 + g * 0.072_310 + b * 0.986_039;

    let sum = x + y + z;
    if sum <= 0.0 {
        return WHITE_POINT;
    }

    [(x / sum) as f32, (y / sum) as f32]
}
