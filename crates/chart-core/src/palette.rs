// File: crates/chart-core/src/palette.rs
// Summary: Qualitative color palettes mapping category index -> color.

use palette::{Hsl, IntoColor, Srgb};
use skia_safe as skia;

use crate::error::{ChartError, Result};

const DEEP: &[u32] = &[
    0x4c72b0, 0xdd8452, 0x55a868, 0xc44e52, 0x8172b3, 0x937860, 0xda8bc3, 0x8c8c8c, 0xccb974, 0x64b5cd,
];
const MUTED: &[u32] = &[
    0x4878d0, 0xee854a, 0x6acc64, 0xd65f5f, 0x956cb4, 0x8c613c, 0xdc7ec0, 0x797979, 0xd5bb67, 0x82c6e2,
];
const PASTEL: &[u32] = &[
    0xa1c9f4, 0xffb482, 0x8de5a1, 0xff9f9b, 0xd0bbff, 0xdebb9b, 0xfab0e4, 0xcfcfcf, 0xfffea3, 0xb9f2f0,
];
const SET1: &[u32] = &[
    0xe41a1c, 0x377eb8, 0x4daf4a, 0x984ea3, 0xff7f00, 0xffff33, 0xa65628, 0xf781bf, 0x999999,
];
const SET2: &[u32] = &[0x66c2a5, 0xfc8d62, 0x8da0cb, 0xe78ac3, 0xa6d854, 0xffd92f, 0xe5c494, 0xb3b3b3];
const SET3: &[u32] = &[
    0x8dd3c7, 0xffffb3, 0xbebada, 0xfb8072, 0x80b1d3, 0xfdb462, 0xb3de69, 0xfccde5, 0xd9d9d9, 0xbc80bd,
    0xccebc5, 0xffed6f,
];
const DARK2: &[u32] = &[0x1b9e77, 0xd95f02, 0x7570b3, 0xe7298a, 0x66a61e, 0xe6ab02, 0xa6761d, 0x666666];
const TAB10: &[u32] = &[
    0x1f77b4, 0xff7f0e, 0x2ca02c, 0xd62728, 0x9467bd, 0x8c564b, 0xe377c2, 0x7f7f7f, 0xbcbd22, 0x17becf,
];

const NAMED: &[(&str, &[u32])] = &[
    ("deep", DEEP),
    ("muted", MUTED),
    ("pastel", PASTEL),
    ("Set1", SET1),
    ("Set2", SET2),
    ("Set3", SET3),
    ("Dark2", DARK2),
    ("tab10", TAB10),
];

/// Number of colors in the generated `hls` palette when looked up by name.
const HLS_DEFAULT: usize = 6;

fn rgb_hex(hex: u32) -> skia::Color {
    skia::Color::from_rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// An ordered list of colors; indices past the end wrap around.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub name: String,
    colors: Vec<skia::Color>,
}

impl Palette {
    pub fn new(name: impl Into<String>, colors: Vec<skia::Color>) -> Self {
        Self { name: name.into(), colors }
    }

    /// Look up a named palette. Names are case-insensitive.
    pub fn named(name: &str) -> Result<Self> {
        if name.eq_ignore_ascii_case("hls") {
            return Ok(Self::hls(HLS_DEFAULT));
        }
        NAMED
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(n, hex)| Self::new(*n, hex.iter().map(|&h| rgb_hex(h)).collect()))
            .ok_or_else(|| ChartError::unknown_style("palette", name))
    }

    /// `n` colors with evenly spaced hues (lightness 0.6, saturation 0.65).
    pub fn hls(n: usize) -> Self {
        let colors = (0..n)
            .map(|i| {
                let hue = ((i as f32 / n as f32) + 0.01).fract() * 360.0;
                let hsl = Hsl::new(hue, 0.65, 0.6);
                let rgb: Srgb = hsl.into_color();
                skia::Color::from_rgb(
                    (rgb.red.clamp(0.0, 1.0) * 255.0).round() as u8,
                    (rgb.green.clamp(0.0, 1.0) * 255.0).round() as u8,
                    (rgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
                )
            })
            .collect();
        Self::new("hls", colors)
    }

    pub fn len(&self) -> usize { self.colors.len() }
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }
    pub fn colors(&self) -> &[skia::Color] { &self.colors }

    /// Color for category `index`, cycling through the palette. An empty
    /// palette yields mid gray.
    pub fn color(&self, index: usize) -> skia::Color {
        if self.is_empty() {
            return skia::Color::from_rgb(128, 128, 128);
        }
        self.colors[index % self.colors.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new("deep", DEEP.iter().map(|&h| rgb_hex(h)).collect())
    }
}

/// Names accepted by [`Palette::named`].
pub fn names() -> Vec<&'static str> {
    NAMED.iter().map(|(n, _)| *n).chain(std::iter::once("hls")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set2_has_eight_distinct_colors() {
        let p = Palette::named("set2").unwrap();
        assert_eq!(p.name, "Set2");
        assert_eq!(p.len(), 8);
        assert_eq!(p.color(0), skia::Color::from_rgb(0x66, 0xc2, 0xa5));
        let mut seen = p.colors().to_vec();
        seen.dedup();
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn index_wraps() {
        let p = Palette::named("Dark2").unwrap();
        assert_eq!(p.color(8), p.color(0));
    }

    #[test]
    fn hls_spreads_hues() {
        let p = Palette::hls(4);
        assert_eq!(p.len(), 4);
        // First hue is just past red.
        let c = p.color(0);
        assert!(c.r() > c.g() && c.r() > c.b());
        assert_ne!(p.color(1), p.color(3));
    }

    #[test]
    fn unknown_palette() {
        assert!(Palette::named("rainbow-ish").is_err());
        assert!(names().contains(&"tab10"));
    }
}
