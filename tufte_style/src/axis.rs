// Copyright 2025 the Tufte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved axis styling.
//!
//! Axes keep only what reads data: tick labels, and on line charts a thin
//! line along the category axis. Gridlines and tick marks are never drawn.

extern crate alloc;

use alloc::string::String;

use peniko::Color;
use smallvec::SmallVec;
use tufte_text::TextStyle;

use crate::z_order;

/// A stroke color, width and optional dash pattern.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in points.
    pub width: f64,
    /// Alternating dash and gap lengths in points; empty for a solid line.
    pub dash: SmallVec<[f64; 4]>,
}

impl StrokeStyle {
    /// A solid stroke.
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: SmallVec::new(),
        }
    }

    /// A dashed stroke.
    pub fn dashed(color: Color, width: f64, dash: &[f64]) -> Self {
        Self {
            color,
            width,
            dash: SmallVec::from_slice(dash),
        }
    }

    /// Returns `true` if the stroke has a dash pattern.
    pub fn is_dashed(&self) -> bool {
        !self.dash.is_empty()
    }
}

/// Axis placement relative to the plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis above the plot area.
    Top,
    /// A horizontal axis below the plot area.
    Bottom,
    /// A vertical axis left of the plot area.
    Left,
    /// A vertical axis right of the plot area.
    Right,
}

impl AxisOrient {
    /// Returns `true` for top and bottom axes.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// What an axis encodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisRole {
    /// The ordered categories.
    Category,
    /// The numeric values.
    Value,
}

/// Fixed absolute padding applied to a value domain.
///
/// Absolute rather than proportional so that direct labels near the
/// extremes keep the same clearance whatever the data variance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DomainPadding {
    /// Subtracted from the data minimum.
    pub low: f64,
    /// Added to the data maximum.
    pub high: f64,
}

impl DomainPadding {
    /// Creates a padding.
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Pads `(min, max)`.
    pub fn apply(self, (min, max): (f64, f64)) -> (f64, f64) {
        (min - self.low, max + self.high)
    }
}

impl Default for DomainPadding {
    fn default() -> Self {
        Self::new(200.0, 400.0)
    }
}

/// A resolved axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisDescriptor {
    /// Placement.
    pub orient: AxisOrient,
    /// Encoded dimension.
    pub role: AxisRole,
    /// Whether the axis is drawn at all (tick labels included).
    pub visible: bool,
    /// Whether the axis line (border) is drawn.
    pub show_domain: bool,
    /// Whether gridlines are drawn. Always `false`.
    pub show_grid: bool,
    /// Whether tick marks are drawn. Always `false`.
    pub show_ticks: bool,
    /// Axis line stroke, used when `show_domain` is set.
    pub domain_stroke: StrokeStyle,
    /// Tick label typography.
    pub label_style: TextStyle,
    /// Tick label color.
    pub label_color: Color,
    /// Value domain for value axes; `None` for category axes.
    pub domain: Option<(f64, f64)>,
    /// Extent of the data along this axis, for range-frame axis lines.
    ///
    /// Category axes use index space, `(0, n - 1)`.
    pub range_frame: Option<(f64, f64)>,
    /// Optional axis title, such as `Revenue ($k)`.
    pub title: Option<String>,
    /// Axis title color.
    pub title_color: Color,
    /// Paint order hint for the axis line.
    pub z_index: i32,
}

impl AxisDescriptor {
    /// A visible category axis with no axis line.
    pub fn category(
        orient: AxisOrient,
        category_count: usize,
        label_style: TextStyle,
        label_color: Color,
        domain_stroke: StrokeStyle,
    ) -> Self {
        let last = category_count.saturating_sub(1) as f64;
        Self {
            orient,
            role: AxisRole::Category,
            visible: true,
            show_domain: false,
            show_grid: false,
            show_ticks: false,
            domain_stroke,
            label_style,
            label_color,
            domain: None,
            range_frame: Some((0.0, last)),
            title: None,
            title_color: label_color,
            z_index: z_order::AXIS_RULES,
        }
    }

    /// A visible value axis with no axis line.
    pub fn value(
        orient: AxisOrient,
        domain: Option<(f64, f64)>,
        label_style: TextStyle,
        label_color: Color,
        domain_stroke: StrokeStyle,
    ) -> Self {
        Self {
            orient,
            role: AxisRole::Value,
            visible: true,
            show_domain: false,
            show_grid: false,
            show_ticks: false,
            domain_stroke,
            label_style,
            label_color,
            domain,
            range_frame: domain,
            title: None,
            title_color: label_color,
            z_index: z_order::AXIS_RULES,
        }
    }

    /// Shows or hides the axis line.
    pub fn with_domain_line(mut self, show: bool) -> Self {
        self.show_domain = show;
        self
    }

    /// Shows or hides the whole axis.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Sets the axis title and its color.
    pub fn with_title(mut self, title: Option<String>, color: Color) -> Self {
        self.title = title;
        self.title_color = color;
        self
    }

    /// Sets the value domain, leaving the range frame alone.
    pub fn with_domain(mut self, domain: Option<(f64, f64)>) -> Self {
        self.domain = domain;
        self
    }
}

/// The `(min, max)` over all finite values of all `series`.
///
/// Returns `None` if there are no finite values.
pub fn infer_domain<'a>(series: impl IntoIterator<Item = &'a [f64]>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for values in series {
        for &v in values {
            if !v.is_finite() {
                continue;
            }
            min = min.min(v);
            max = max.max(v);
        }
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}
