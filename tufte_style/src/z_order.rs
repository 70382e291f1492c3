// Copyright 2025 the Tufte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint-order hints carried on resolved series and annotations.
//!
//! Muted ink goes down first so the primary series is never crossed by a
//! reference line. Adapters should sort by `(z_index, position in the list)`.

/// Axis lines.
pub const AXIS_RULES: i32 = -50;
/// Bar fills.
pub const SERIES_FILL: i32 = 0;
/// Reference and target lines.
pub const SERIES_STROKE: i32 = 10;
/// The primary series, above every other series.
pub const PRIMARY_SERIES: i32 = 20;
/// Peak leaders and marker dots.
pub const ANNOTATION_MARKS: i32 = 60;
/// Direct labels and annotation text.
pub const LABELS: i32 = 70;
/// Chart title and subtitle.
pub const TITLES: i32 = 80;
