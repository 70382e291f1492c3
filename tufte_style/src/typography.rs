// Copyright 2025 the Tufte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font assignment.
//!
//! Data and labels are set in a book serif; tick labels use the platform
//! sans-serif so they recede behind the data.

use tufte_text::{FontFamily, FontStack, TextStyle};

/// Book serif faces, most preferred first.
pub const SERIF_FAMILIES: [&str; 5] = [
    "ET Book",
    "Palatino Linotype",
    "Palatino",
    "Book Antiqua",
    "Georgia",
];

/// The resolved type setup for a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    /// Stack for titles, direct labels and annotations.
    pub serif: FontStack,
    /// Stack for axis tick labels.
    pub sans: FontStack,
    /// Size of direct labels and bar category labels.
    pub base_size: f64,
    /// Size of axis tick labels.
    pub tick_size: f64,
    /// Size of peak annotations.
    pub annotation_size: f64,
    /// Size of the chart title.
    pub title_size: f64,
    /// Size of the chart subtitle.
    pub subtitle_size: f64,
}

impl FontSpec {
    /// Serif data type at 13pt, sans ticks at 11pt.
    pub fn tufte() -> Self {
        Self {
            serif: FontStack::serif(SERIF_FAMILIES),
            sans: FontStack::new(
                [FontFamily::SystemUi, FontFamily::named("-apple-system")],
                FontFamily::SansSerif,
            )
            .with_family(FontFamily::SansSerif),
            base_size: 13.0,
            tick_size: 11.0,
            annotation_size: 12.0,
            title_size: 18.0,
            subtitle_size: 13.0,
        }
    }

    /// Sets the base size used for direct labels.
    pub fn with_base_size(mut self, base_size: f64) -> Self {
        self.base_size = base_size;
        self
    }

    /// Replaces the serif stack.
    pub fn with_serif(mut self, serif: FontStack) -> Self {
        self.serif = serif;
        self
    }

    /// Replaces the sans-serif stack.
    pub fn with_sans(mut self, sans: FontStack) -> Self {
        self.sans = sans;
        self
    }

    /// Direct labels: end labels, bar values, bar category names.
    pub fn label_style(&self) -> TextStyle {
        TextStyle::new(self.base_size).with_family(self.serif.clone())
    }

    /// Axis tick labels.
    pub fn tick_style(&self) -> TextStyle {
        TextStyle::new(self.tick_size).with_family(self.sans.clone())
    }

    /// Peak and other point annotations, set in italic.
    pub fn annotation_style(&self) -> TextStyle {
        TextStyle::new(self.annotation_size)
            .with_family(self.serif.clone())
            .italic()
    }

    /// Chart title. Normal weight; size alone carries the hierarchy.
    pub fn title_style(&self) -> TextStyle {
        TextStyle::new(self.title_size).with_family(self.serif.clone())
    }

    /// Chart subtitle.
    pub fn subtitle_style(&self) -> TextStyle {
        TextStyle::new(self.subtitle_size).with_family(self.serif.clone())
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::tufte()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use tufte_text::{FontStyle, FontWeight};

    use super::*;

    #[test]
    fn stacks_end_in_generic_families() {
        let fonts = FontSpec::tufte();
        assert_eq!(fonts.serif.generic(), &FontFamily::Serif);
        assert_eq!(fonts.sans.generic(), &FontFamily::SansSerif);
        assert_eq!(
            fonts.sans.to_css(),
            "system-ui, -apple-system, sans-serif"
        );
    }

    #[test]
    fn annotation_style_is_italic_serif() {
        let style = FontSpec::tufte().annotation_style();
        assert_eq!(style.font_style, FontStyle::Italic);
        assert_eq!(style.font_weight, FontWeight::NORMAL);
        assert_eq!(style.font_family.generic(), &FontFamily::Serif);
        assert_eq!(style.font_size, 12.0);
    }
}
