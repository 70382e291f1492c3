// Copyright 2025 the Tufte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font stacks, text styles and measurement hooks for Tufte chart presets.
//!
//! Chart descriptors name fonts the way print designers do: a preferred face
//! (`"ET Book"`, Palatino, …) followed by fallbacks, ending in a generic CSS
//! family. [`FontStack`] enforces that last part, so a descriptor always
//! resolves to *something* on the target renderer.
//!
//! Measurement is only needed to size the gutter that direct labels occupy.
//! Shaping stays downstream: renderers implement [`TextMeasurer`] with their
//! own engine, or use [`HeuristicTextMeasurer`].

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;

use smallvec::SmallVec;

/// A minimal text measurement interface.
///
/// `text` is treated as a single line; callers should split on `\n` if they
/// want multi-line layout.
pub trait TextMeasurer {
    /// Measure a single line of text.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// A single font family entry in a [`FontStack`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// The generic serif family (CSS `serif`).
    Serif,
    /// The generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// The generic monospace family (CSS `monospace`).
    Monospace,
    /// The platform UI family (CSS `system-ui`).
    SystemUi,
    /// A named face (e.g. `"ET Book"`, `"Palatino Linotype"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Creates a named family.
    pub fn named(name: &str) -> Self {
        Self::Named(Arc::from(name))
    }

    /// Returns `true` for CSS generic families, which every renderer can resolve.
    pub fn is_generic(&self) -> bool {
        !matches!(self, Self::Named(_))
    }

    /// Returns the family as it appears in a CSS `font-family` list.
    ///
    /// Names containing anything other than ASCII letters, digits and `-` are quoted.
    pub fn to_css(&self) -> String {
        match self {
            Self::Serif => String::from("serif"),
            Self::SansSerif => String::from("sans-serif"),
            Self::Monospace => String::from("monospace"),
            Self::SystemUi => String::from("system-ui"),
            Self::Named(name) => {
                let bare = name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
                if bare && !name.is_empty() {
                    String::from(&**name)
                } else {
                    let mut out = String::with_capacity(name.len() + 2);
                    out.push('"');
                    for c in name.chars() {
                        if c == '"' || c == '\\' {
                            out.push('\\');
                        }
                        out.push(c);
                    }
                    out.push('"');
                    out
                }
            }
        }
    }
}

/// An ordered font-family fallback list.
///
/// Always non-empty and always contains at least one generic family.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FontStack {
    families: SmallVec<[FontFamily; 6]>,
}

impl FontStack {
    /// Builds a stack from `families`.
    ///
    /// If no entry is generic, `fallback` is appended (or `sans-serif` when
    /// `fallback` is itself a named face).
    pub fn new(families: impl IntoIterator<Item = FontFamily>, fallback: FontFamily) -> Self {
        let mut families: SmallVec<[FontFamily; 6]> = families.into_iter().collect();
        if !families.iter().any(FontFamily::is_generic) {
            families.push(if fallback.is_generic() {
                fallback
            } else {
                FontFamily::SansSerif
            });
        }
        Self { families }
    }

    /// A stack of named faces ending in `serif`.
    pub fn serif<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(names.into_iter().map(FontFamily::named), FontFamily::Serif)
    }

    /// A stack of named faces ending in `sans-serif`.
    pub fn sans_serif<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(names.into_iter().map(FontFamily::named), FontFamily::SansSerif)
    }

    /// Appends a family after the existing entries.
    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.families.push(family);
        self
    }

    /// All families, most preferred first.
    pub fn families(&self) -> &[FontFamily] {
        &self.families
    }

    /// The most preferred family.
    pub fn primary(&self) -> &FontFamily {
        &self.families[0]
    }

    /// The last generic family in the stack.
    pub fn generic(&self) -> &FontFamily {
        self.families
            .iter()
            .rev()
            .find(|f| f.is_generic())
            .unwrap_or(&self.families[0])
    }

    /// Renders the stack as a CSS `font-family` value.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for (i, family) in self.families.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&family.to_css());
        }
        out
    }
}

impl Default for FontStack {
    fn default() -> Self {
        Self::new([FontFamily::SansSerif], FontFamily::SansSerif)
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// CSS-style font styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Normal style.
    Normal,
    /// Italic style.
    Italic,
    /// Oblique style.
    Oblique,
}

/// Horizontal text anchor relative to a label's position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the position (extends right).
    Start,
    /// Text is centered on the position.
    Middle,
    /// Text ends at the position (extends left).
    End,
}

/// Vertical text alignment relative to a label's position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The position is the vertical center of the text.
    Middle,
    /// The position is the alphabetic baseline; text sits above it.
    Alphabetic,
    /// The position is the top of the text; text hangs below it.
    Hanging,
}

/// Resolved typography for one piece of chart text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in points.
    pub font_size: f64,
    /// Font-family fallback list.
    pub font_family: FontStack,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub font_style: FontStyle,
}

impl TextStyle {
    /// Creates a normal-weight, upright sans-serif style at `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontStack::default(),
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
        }
    }

    /// Sets the font-family stack.
    #[must_use]
    pub fn with_family(mut self, font_family: FontStack) -> Self {
        self.font_family = font_family;
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_weight(mut self, font_weight: FontWeight) -> Self {
        self.font_weight = font_weight;
        self
    }

    /// Sets the font style.
    #[must_use]
    pub fn with_style(mut self, font_style: FontStyle) -> Self {
        self.font_style = font_style;
        self
    }

    /// Shorthand for `with_style(FontStyle::Italic)`.
    #[must_use]
    pub fn italic(self) -> Self {
        self.with_style(FontStyle::Italic)
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width (useful for horizontal layout).
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
    /// Additional line spacing beyond ascent+descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// A dependency-free text measurer.
///
/// Average glyph advance depends on the stack's generic family: about 0.5em
/// for serif text (book faces set narrow), 0.55em for sans-serif and UI faces,
/// 0.6em for monospace. Bold adds 0.05em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl HeuristicTextMeasurer {
    fn em_advance(style: &TextStyle) -> f64 {
        let base = match style.font_family.generic() {
            FontFamily::Serif => 0.5,
            FontFamily::Monospace => 0.6,
            FontFamily::SansSerif | FontFamily::SystemUi | FontFamily::Named(_) => 0.55,
        };
        if style.font_weight >= FontWeight::BOLD {
            base + 0.05
        } else {
            base
        }
    }
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let advance_width = Self::em_advance(style) * style.font_size * text.chars().count() as f64;
        TextMetrics {
            advance_width,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
            leading: 0.0,
        }
    }
}
