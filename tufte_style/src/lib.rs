// Copyright 2025 the Tufte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A Tufte-style presentation policy for charts.
//!
//! This crate does not draw. It maps *chart intent* to *render instructions*:
//! - A [`ChartSpec`] names the categories, the series and their roles, which
//!   peaks deserve a note, and how values read as text.
//! - A [`StylePolicy`] resolves it into a [`RenderDescriptor`]: colors, strokes,
//!   fonts, axes with the chartjunk removed, and direct labels in data space.
//!
//! Renderer adapters translate the descriptor into their library's options.
//!
//! ```
//! use tufte_style::{ChartSpec, SeriesSpec, StylePolicy};
//!
//! let chart = ChartSpec::line(["Jan", "Feb", "Mar"])
//!     .with_series(SeriesSpec::primary("Revenue", [4200.0, 4800.0, 5100.0]))
//!     .with_series(SeriesSpec::target("Target", [4000.0, 4500.0, 5000.0]));
//! let descriptor = StylePolicy::default().resolve(&chart).unwrap();
//! assert!(!descriptor.legend_visible());
//! assert_eq!(descriptor.annotations[1].text, "Target: 5,000");
//! ```

#![no_std]

extern crate alloc;

mod annotation;
mod axis;
mod chart_spec;
mod descriptor;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod palette;
mod policy;
#[cfg(test)]
mod policy_tests;
mod theme;
mod typography;
pub mod z_order;

pub use annotation::{Annotation, AnnotationKind, LabelPlacement, Marker, find_peak};
pub use axis::{AxisDescriptor, AxisOrient, AxisRole, DomainPadding, StrokeStyle, infer_domain};
pub use chart_spec::{ChartKind, ChartSpec, SeriesRole, SeriesSpec};
pub use descriptor::{Emphasis, RenderDescriptor, SeriesStyle, TitleDescriptor};
pub use error::InvalidSpec;
pub use format::{ValueFormatter, format_grouped};
pub use palette::{Palette, parse_color, to_css_hex};
pub use policy::StylePolicy;
pub use theme::Theme;
pub use typography::{FontSpec, SERIF_FAMILIES};

pub use tufte_text::{
    FontFamily, FontStack, FontStyle, FontWeight, HeuristicTextMeasurer, TextAnchor,
    TextBaseline, TextMeasurer, TextMetrics, TextStyle,
};

/// The default palette colors as constants.
pub mod colors {
    pub use crate::palette::{
        AXIS, BACKGROUND, CATEGORICAL, HIGHLIGHT, SERIES_DEFAULT, TEXT, TEXT_SECONDARY,
        TEXT_TERTIARY,
    };
}
