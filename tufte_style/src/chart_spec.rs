// Copyright 2025 the Tufte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative chart intent.
//!
//! A [`ChartSpec`] says *what* is being shown (categories, named series and
//! their roles, which extremum matters) and leaves *how* to [`crate::StylePolicy`].
//!
//! Input order is trusted. Bar charts are expected to arrive sorted the way
//! they should be read (typically descending by value); nothing here sorts.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::{InvalidSpec, ValueFormatter};

/// The kind of chart being styled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Series drawn as lines over ordered categories.
    Line,
    /// One bar per category, categories stacked top to bottom.
    HorizontalBar,
}

/// What a series is for. Drives color and stroke weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeriesRole {
    /// The series the chart is about: highlight color, heavier stroke.
    Primary,
    /// A reference series shown for comparison.
    Secondary,
    /// A target or baseline: muted, thin, dashed.
    Target,
}

/// One named series of values aligned to the chart's categories.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesSpec {
    /// Display name, used in direct labels and annotation requests.
    pub name: String,
    /// Role of the series.
    pub role: SeriesRole,
    /// One value per category, in category order.
    pub values: Vec<f64>,
}

impl SeriesSpec {
    /// Creates a series.
    pub fn new(name: impl Into<String>, role: SeriesRole, values: impl Into<Vec<f64>>) -> Self {
        Self {
            name: name.into(),
            role,
            values: values.into(),
        }
    }

    /// Creates a [`SeriesRole::Primary`] series.
    pub fn primary(name: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self::new(name, SeriesRole::Primary, values)
    }

    /// Creates a [`SeriesRole::Secondary`] series.
    pub fn secondary(name: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self::new(name, SeriesRole::Secondary, values)
    }

    /// Creates a [`SeriesRole::Target`] series.
    pub fn target(name: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self::new(name, SeriesRole::Target, values)
    }

    /// The last value, if any.
    pub fn last_value(&self) -> Option<f64> {
        self.values.last().copied()
    }
}

/// A chart description.
#[derive(Clone, Debug)]
pub struct ChartSpec {
    /// Line or horizontal bar.
    pub kind: ChartKind,
    /// Ordered category labels (the x-domain of a line chart, the rows of a bar chart).
    pub categories: Vec<String>,
    /// Series in draw order.
    pub series: Vec<SeriesSpec>,
    /// Label formatter; thousands grouping when `None`.
    pub formatter: Option<ValueFormatter>,
    /// Names of series whose maximum should be annotated.
    pub peak_annotations: Vec<String>,
    /// A single category to emphasize (bar charts only).
    pub emphasis: Option<usize>,
    /// Optional title.
    pub title: Option<String>,
    /// Optional subtitle, usually the takeaway sentence.
    pub subtitle: Option<String>,
    /// Optional value axis title, such as `Revenue ($k)`.
    ///
    /// Bar charts hide their value axis, so there the title is carried but not drawn.
    pub value_axis_title: Option<String>,
}

impl ChartSpec {
    /// Creates an empty chart of the given kind over `categories`.
    pub fn new<S: Into<String>>(kind: ChartKind, categories: impl IntoIterator<Item = S>) -> Self {
        Self {
            kind,
            categories: categories.into_iter().map(Into::into).collect(),
            series: Vec::new(),
            formatter: None,
            peak_annotations: Vec::new(),
            emphasis: None,
            title: None,
            subtitle: None,
            value_axis_title: None,
        }
    }

    /// Creates a line chart over `categories`.
    pub fn line<S: Into<String>>(categories: impl IntoIterator<Item = S>) -> Self {
        Self::new(ChartKind::Line, categories)
    }

    /// Creates a horizontal bar chart over `categories`.
    pub fn horizontal_bar<S: Into<String>>(categories: impl IntoIterator<Item = S>) -> Self {
        Self::new(ChartKind::HorizontalBar, categories)
    }

    /// Appends a series.
    pub fn with_series(mut self, series: SeriesSpec) -> Self {
        self.series.push(series);
        self
    }

    /// Sets the label formatter.
    pub fn with_formatter(mut self, formatter: ValueFormatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Requests a peak annotation on the named series.
    pub fn with_peak_annotation(mut self, series: impl Into<String>) -> Self {
        self.peak_annotations.push(series.into());
        self
    }

    /// Emphasizes one category (bar charts).
    pub fn with_emphasis(mut self, category: usize) -> Self {
        self.emphasis = Some(category);
        self
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Sets the value axis title.
    pub fn with_value_axis_title(mut self, title: impl Into<String>) -> Self {
        self.value_axis_title = Some(title.into());
        self
    }

    /// Index of the series called `name`.
    pub fn series_index(&self, name: &str) -> Option<usize> {
        self.series.iter().position(|s| s.name == name)
    }

    /// Formats `v` with the chart's formatter, or thousands grouping.
    pub fn format_value(&self, v: f64) -> String {
        match &self.formatter {
            Some(f) => f.format(v),
            None => crate::format::format_grouped(v),
        }
    }

    /// Checks the structural preconditions the policy relies on.
    pub fn validate(&self) -> Result<(), InvalidSpec> {
        self.check().map(|_| ())
    }

    /// Validates and resolves peak requests to series indices (deduplicated, in request order).
    pub(crate) fn check(&self) -> Result<SmallVec<[usize; 4]>, InvalidSpec> {
        let count = self.categories.len();
        if count == 0 {
            return Err(InvalidSpec::EmptyCategories);
        }
        if self.series.is_empty() {
            return Err(InvalidSpec::NoSeries);
        }

        // Name -> (first index, seen more than once).
        let mut by_name: HashMap<&str, (usize, bool)> = HashMap::with_capacity(self.series.len());
        for (i, s) in self.series.iter().enumerate() {
            if s.values.len() != count {
                return Err(InvalidSpec::LengthMismatch {
                    series: s.name.clone(),
                    expected: count,
                    actual: s.values.len(),
                });
            }
            by_name
                .entry(s.name.as_str())
                .and_modify(|(_, dup)| *dup = true)
                .or_insert((i, false));
        }

        // Line charts ignore emphasis, so only bar charts check its range.
        if self.kind == ChartKind::HorizontalBar
            && let Some(index) = self.emphasis
            && index >= count
        {
            return Err(InvalidSpec::CategoryOutOfRange { index, count });
        }

        let mut peaks = SmallVec::new();
        for name in &self.peak_annotations {
            let Some(&(i, dup)) = by_name.get(name.as_str()) else {
                return Err(InvalidSpec::UnknownSeries(name.clone()));
            };
            if dup {
                return Err(InvalidSpec::DuplicateSeries(name.clone()));
            }
            if !peaks.contains(&i) {
                peaks.push(i);
            }
        }
        Ok(peaks)
    }
}
