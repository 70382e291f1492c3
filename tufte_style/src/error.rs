// Copyright 2025 the Tufte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The policy's single error type.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

/// A chart description (or a palette override) the policy refuses to style.
///
/// Malformed input is a programming error on the caller's side; nothing here
/// is transient or worth retrying.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidSpec {
    /// The chart has no categories.
    #[error("chart has no categories")]
    EmptyCategories,
    /// The chart has no series.
    #[error("chart has no series")]
    NoSeries,
    /// A series does not have exactly one value per category.
    #[error("series `{series}` has {actual} values but the chart has {expected} categories")]
    LengthMismatch {
        /// Offending series name.
        series: String,
        /// Number of categories.
        expected: usize,
        /// Number of values in the series.
        actual: usize,
    },
    /// An annotation request names a series name that several series share.
    #[error("annotation references series `{0}`, but more than one series has that name")]
    DuplicateSeries(String),
    /// An annotation request names a series the chart does not contain.
    #[error("annotation references unknown series `{0}`")]
    UnknownSeries(String),
    /// The emphasized category index of a bar chart is past the end of the category list.
    #[error("emphasized category {index} is out of range for {count} categories")]
    CategoryOutOfRange {
        /// Requested category index.
        index: usize,
        /// Number of categories.
        count: usize,
    },
    /// A color string could not be parsed.
    #[error("`{0}` is not a valid color")]
    InvalidColor(String),
    /// The categorical palette would place the same color next to itself.
    #[error("categorical palette repeats the same color at positions {0} and {1}")]
    AdjacentDuplicateColor(usize, usize),
}
