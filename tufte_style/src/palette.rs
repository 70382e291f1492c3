// Copyright 2025 the Tufte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors.
//!
//! The light preset reproduces print conventions: off-white paper, near-black
//! ink, two lighter grays for secondary and tertiary text, and a single red
//! reserved for the series the reader should look at first. These are
//! explicit literals, not grays derived from the ink color.

extern crate alloc;

use alloc::string::String;

use peniko::Color;
use peniko::color::Srgb;
use smallvec::SmallVec;

use crate::InvalidSpec;

/// Off-white paper.
pub const BACKGROUND: Color = Color::from_rgb8(0xff, 0xff, 0xf8);
/// Near-black ink for titles and data labels.
pub const TEXT: Color = Color::from_rgb8(0x11, 0x11, 0x11);
/// Subtitles, axis titles and value labels.
pub const TEXT_SECONDARY: Color = Color::from_rgb8(0x66, 0x66, 0x66);
/// Tick labels.
pub const TEXT_TERTIARY: Color = Color::from_rgb8(0x99, 0x99, 0x99);
/// Axis lines and annotation leaders.
pub const AXIS: Color = Color::from_rgb8(0xcc, 0xcc, 0xcc);
/// Muted ink for non-primary series.
pub const SERIES_DEFAULT: Color = Color::from_rgb8(0x66, 0x66, 0x66);
/// The one emphasis color.
pub const HIGHLIGHT: Color = Color::from_rgb8(0xe4, 0x1a, 0x1c);
/// Categorical colors for series that need distinct identities.
pub const CATEGORICAL: [Color; 4] = [
    Color::from_rgb8(0x4e, 0x79, 0xa7),
    Color::from_rgb8(0xf2, 0x8e, 0x2b),
    Color::from_rgb8(0xe1, 0x57, 0x59),
    Color::from_rgb8(0x76, 0xb7, 0xb2),
];

/// A resolved chart palette.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    /// Page and plot background.
    pub background: Color,
    /// Primary text (titles, peak labels, bar category labels).
    pub text: Color,
    /// Secondary text (subtitles, value labels).
    pub text_secondary: Color,
    /// Tertiary text (tick labels).
    pub text_tertiary: Color,
    /// Axis lines.
    pub axis: Color,
    /// Muted series ink (targets, non-primary bars).
    pub series_default: Color,
    /// Emphasis color for the primary series.
    pub highlight: Color,
    categorical: SmallVec<[Color; 4]>,
}

impl Palette {
    /// The light (print) preset.
    pub fn light() -> Self {
        Self {
            background: BACKGROUND,
            text: TEXT,
            text_secondary: TEXT_SECONDARY,
            text_tertiary: TEXT_TERTIARY,
            axis: AXIS,
            series_default: SERIES_DEFAULT,
            highlight: HIGHLIGHT,
            categorical: SmallVec::from_buf(CATEGORICAL),
        }
    }

    /// The dark-mode preset.
    ///
    /// Grays are inverted rather than reused, and the highlight shifts to a
    /// softer orange-red that holds contrast on a dark page.
    pub fn dark() -> Self {
        Self {
            background: Color::from_rgb8(0x15, 0x15, 0x15),
            text: Color::from_rgb8(0xdd, 0xdd, 0xdd),
            text_secondary: Color::from_rgb8(0x99, 0x99, 0x99),
            text_tertiary: Color::from_rgb8(0x66, 0x66, 0x66),
            axis: Color::from_rgb8(0x44, 0x44, 0x44),
            series_default: Color::from_rgb8(0x99, 0x99, 0x99),
            highlight: Color::from_rgb8(0xfc, 0x8d, 0x62),
            categorical: SmallVec::from_buf([
                Color::from_rgb8(0x6a, 0x9f, 0xd8),
                Color::from_rgb8(0xf2, 0xa8, 0x60),
                Color::from_rgb8(0xe8, 0x7a, 0x7c),
                Color::from_rgb8(0x8a, 0xcc, 0xc7),
            ]),
        }
    }

    /// Replaces the background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Replaces the highlight color.
    pub fn with_highlight(mut self, highlight: Color) -> Self {
        self.highlight = highlight;
        self
    }

    /// Replaces the muted series color.
    pub fn with_series_default(mut self, series_default: Color) -> Self {
        self.series_default = series_default;
        self
    }

    /// Replaces the categorical sequence.
    ///
    /// The sequence is cycled, so the last and first entries count as
    /// neighbors too. An empty sequence is allowed; [`Palette::categorical`]
    /// then falls back to the muted series color.
    pub fn with_categorical(
        mut self,
        colors: impl IntoIterator<Item = Color>,
    ) -> Result<Self, InvalidSpec> {
        let colors: SmallVec<[Color; 4]> = colors.into_iter().collect();
        let n = colors.len();
        if n > 1 {
            for i in 0..n {
                let j = (i + 1) % n;
                if colors[i] == colors[j] {
                    return Err(InvalidSpec::AdjacentDuplicateColor(i, j));
                }
            }
        }
        self.categorical = colors;
        Ok(self)
    }

    /// The categorical sequence.
    pub fn categorical_colors(&self) -> &[Color] {
        &self.categorical
    }

    /// The `index`-th categorical color, cycling through the sequence.
    pub fn categorical(&self, index: usize) -> Color {
        if self.categorical.is_empty() {
            return self.series_default;
        }
        self.categorical[index % self.categorical.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}

/// Parses a CSS color string (`#fffff8`, `#111`, `rgb(…)`, named colors).
pub fn parse_color(text: &str) -> Result<Color, InvalidSpec> {
    peniko::color::parse_color(text)
        .map(|c| c.to_alpha_color::<Srgb>())
        .map_err(|_| InvalidSpec::InvalidColor(String::from(text)))
}

/// Formats a color as lowercase CSS hex, `#rrggbb` or `#rrggbbaa` when translucent.
pub fn to_css_hex(color: Color) -> String {
    let c = color.to_rgba8();
    if c.a == 0xff {
        alloc::format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
    } else {
        alloc::format!("#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a)
    }
}
