// Copyright 2025 the Tufte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bundled style parameters.

use kurbo::Insets;
use smallvec::SmallVec;

use crate::{DomainPadding, FontSpec, Palette};

/// Every tunable the policy reads, in one value.
///
/// A theme is plain data: build one, adjust it with the `with_*` methods and
/// hand it to [`crate::StylePolicy::new`].
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    /// Colors.
    pub palette: Palette,
    /// Type setup.
    pub fonts: FontSpec,
    /// Absolute padding around the line chart value domain.
    pub domain_padding: DomainPadding,
    /// Stroke width of the primary series.
    pub primary_stroke_width: f64,
    /// Stroke width of secondary series.
    pub secondary_stroke_width: f64,
    /// Stroke width of target series.
    pub target_stroke_width: f64,
    /// Dash pattern of target series.
    pub target_dash: SmallVec<[f64; 4]>,
    /// Stroke width of axis lines and peak leaders.
    pub axis_stroke_width: f64,
    /// Gap between a line's last point and its end label.
    pub end_label_offset: f64,
    /// Gap between a peak point and its label baseline.
    pub peak_label_offset: f64,
    /// Gap between a bar's end and its value label.
    pub bar_label_offset: f64,
    /// Radius of the peak marker dot.
    pub peak_marker_radius: f64,
    /// Plot margins for line charts (right side reserves end labels).
    pub line_insets: Insets,
    /// Plot margins for bar charts (left side reserves category labels).
    pub bar_insets: Insets,
}

impl Theme {
    /// Off-white paper and near-black ink.
    pub fn light() -> Self {
        Self::from_palette(Palette::light())
    }

    /// Dark background with lightened ink and a softer highlight.
    pub fn dark() -> Self {
        Self::from_palette(Palette::dark())
    }

    fn from_palette(palette: Palette) -> Self {
        Self {
            palette,
            fonts: FontSpec::tufte(),
            domain_padding: DomainPadding::default(),
            primary_stroke_width: 2.0,
            secondary_stroke_width: 1.5,
            target_stroke_width: 1.0,
            target_dash: SmallVec::from_slice(&[4.0, 3.0]),
            axis_stroke_width: 0.5,
            end_label_offset: 8.0,
            peak_label_offset: 12.0,
            bar_label_offset: 6.0,
            peak_marker_radius: 3.0,
            line_insets: Insets::new(60.0, 80.0, 100.0, 50.0),
            bar_insets: Insets::new(100.0, 80.0, 80.0, 20.0),
        }
    }

    /// Replaces the palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Replaces the type setup.
    pub fn with_fonts(mut self, fonts: FontSpec) -> Self {
        self.fonts = fonts;
        self
    }

    /// Sets the value domain padding.
    pub fn with_domain_padding(mut self, padding: DomainPadding) -> Self {
        self.domain_padding = padding;
        self
    }

    /// Sets the primary, secondary and target stroke widths.
    pub fn with_stroke_widths(mut self, primary: f64, secondary: f64, target: f64) -> Self {
        self.primary_stroke_width = primary;
        self.secondary_stroke_width = secondary;
        self.target_stroke_width = target;
        self
    }

    /// Sets the target dash pattern.
    pub fn with_target_dash(mut self, dash: &[f64]) -> Self {
        self.target_dash = SmallVec::from_slice(dash);
        self
    }

    /// Sets the end, peak and bar label offsets.
    pub fn with_label_offsets(mut self, end: f64, peak: f64, bar: f64) -> Self {
        self.end_label_offset = end;
        self.peak_label_offset = peak;
        self.bar_label_offset = bar;
        self
    }

    /// Sets the plot insets for line and bar charts.
    pub fn with_insets(mut self, line: Insets, bar: Insets) -> Self {
        self.line_insets = line;
        self.bar_insets = bar;
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn presets_differ_only_in_palette() {
        let light = Theme::light();
        let dark = Theme::dark();
        assert_ne!(light.palette, dark.palette);
        assert_eq!(light.fonts, dark.fonts);
        assert_eq!(light.target_dash, dark.target_dash);
        assert_eq!(
            light.clone().with_palette(Palette::dark()),
            dark
        );
    }

    #[test]
    fn builders_override_fields() {
        let theme = Theme::default()
            .with_domain_padding(DomainPadding::new(0.0, 0.0))
            .with_target_dash(&[2.0, 2.0])
            .with_stroke_widths(3.0, 2.0, 0.5);
        assert_eq!(theme.domain_padding.apply((1.0, 2.0)), (1.0, 2.0));
        assert_eq!(theme.target_dash.as_slice(), &[2.0, 2.0]);
        assert_eq!(theme.primary_stroke_width, 3.0);
        assert_eq!(theme.target_stroke_width, 0.5);
    }
}
