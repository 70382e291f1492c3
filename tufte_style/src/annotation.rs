// Copyright 2025 the Tufte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Direct labels and point annotations.
//!
//! Every annotation is anchored in data space: `x` is the category index and
//! `y` the value. Offsets are in points and applied after the renderer maps
//! the anchor to the screen. The horizontal bar chart is the exception: its
//! renderer should read `value` along x and `index` along y.

extern crate alloc;

use alloc::string::String;

use kurbo::{Point, Vec2};
use peniko::Color;
use tufte_text::{TextAnchor, TextBaseline, TextStyle};

use crate::StrokeStyle;

/// What an annotation labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnnotationKind {
    /// A series name and last value, right of the line's last point.
    EndLabel,
    /// A maximum, above the point, with a marker dot.
    PeakLabel,
    /// A bar's value, right of the bar's end.
    BarLabel,
}

/// Where the text sits relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement {
    /// Horizontal alignment.
    pub anchor: TextAnchor,
    /// Vertical alignment.
    pub baseline: TextBaseline,
    /// Offset from the anchor, in points (y grows downward).
    pub offset: Vec2,
}

impl LabelPlacement {
    /// Text starting `dx` points right of the anchor, vertically centered.
    pub fn right_of(dx: f64) -> Self {
        Self {
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Middle,
            offset: Vec2::new(dx, 0.0),
        }
    }

    /// Text centered horizontally, its baseline `dy` points above the anchor.
    pub fn above(dy: f64) -> Self {
        Self {
            anchor: TextAnchor::Middle,
            baseline: TextBaseline::Alphabetic,
            offset: Vec2::new(0.0, -dy),
        }
    }
}

/// A dot drawn at the anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    /// Radius in points.
    pub radius: f64,
    /// Fill color.
    pub color: Color,
    /// Paint order hint for the dot and the leader.
    pub z_index: i32,
}

/// A resolved label.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    /// What is being labeled.
    pub kind: AnnotationKind,
    /// Index of the labeled series in the chart.
    pub series: usize,
    /// Category index of the labeled value.
    pub index: usize,
    /// The labeled value.
    pub value: f64,
    /// Formatted text.
    pub text: String,
    /// Text color.
    pub color: Color,
    /// Typography.
    pub font: TextStyle,
    /// Alignment and offset.
    pub placement: LabelPlacement,
    /// Optional marker dot at the anchor.
    pub marker: Option<Marker>,
    /// Optional leader from the anchor to the text.
    pub leader: Option<StrokeStyle>,
    /// Paint order hint.
    pub z_index: i32,
}

impl Annotation {
    /// The anchor in data space, `(index, value)`.
    pub fn data_position(&self) -> Point {
        Point::new(self.index as f64, self.value)
    }

    /// Returns `true` for annotations that carry a marker dot.
    pub fn has_marker(&self) -> bool {
        self.marker.is_some()
    }
}

/// Index of the maximum finite value.
///
/// Ties go to the earliest index. Returns `None` when no value is finite.
pub fn find_peak(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if !v.is_finite() {
            continue;
        }
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}
