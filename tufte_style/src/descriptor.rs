// Copyright 2025 the Tufte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The renderer-neutral output of [`crate::StylePolicy::resolve`].

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Insets;
use peniko::Color;
use tufte_text::{TextAnchor, TextMeasurer, TextStyle};

use crate::{
    Annotation, AnnotationKind, AxisDescriptor, ChartKind, FontSpec, Palette, SeriesRole,
    StrokeStyle,
};

/// One category painted differently from the rest of its series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Emphasis {
    /// Category index.
    pub index: usize,
    /// Fill for that category.
    pub color: Color,
}

/// How one series is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesStyle {
    /// Series name.
    pub name: String,
    /// Series role.
    pub role: SeriesRole,
    /// Identity color, used for the stroke or fill and for its direct labels.
    pub color: Color,
    /// Line stroke; set for line charts.
    pub stroke: Option<StrokeStyle>,
    /// Bar fill; set for bar charts.
    pub fill: Option<Color>,
    /// Single emphasized category, if any.
    pub emphasis: Option<Emphasis>,
    /// Whether point markers are drawn along the line. Always `false`.
    pub show_markers: bool,
    /// Typography for this series' direct labels.
    pub label_font: TextStyle,
    /// Paint order hint.
    pub z_index: i32,
}

impl SeriesStyle {
    /// The fill for category `index`, honoring emphasis.
    pub fn fill_at(&self, index: usize) -> Option<Color> {
        match self.emphasis {
            Some(e) if e.index == index => Some(e.color),
            _ => self.fill,
        }
    }
}

/// Title block, left-aligned above the plot.
#[derive(Clone, Debug, PartialEq)]
pub struct TitleDescriptor {
    /// Title text.
    pub text: Option<String>,
    /// Subtitle text.
    pub subtitle: Option<String>,
    /// Title typography.
    pub style: TextStyle,
    /// Title color.
    pub color: Color,
    /// Subtitle typography.
    pub subtitle_style: TextStyle,
    /// Subtitle color.
    pub subtitle_color: Color,
    /// Horizontal alignment. Always [`TextAnchor::Start`].
    pub anchor: TextAnchor,
    /// Paint order hint.
    pub z_index: i32,
}

impl TitleDescriptor {
    /// Returns `true` if there is neither a title nor a subtitle.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.subtitle.is_none()
    }
}

/// Everything a renderer needs to draw a chart in the house style.
///
/// Series and annotations keep input order; [`crate::z_order`] hints say how
/// to layer them.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderDescriptor {
    /// The chart kind this was resolved for.
    pub kind: ChartKind,
    /// Page and plot background.
    pub background: Color,
    /// The palette in effect.
    pub palette: Palette,
    /// The type setup in effect.
    pub fonts: FontSpec,
    /// Title block.
    pub title: TitleDescriptor,
    /// One entry per input series, in input order.
    pub series: Vec<SeriesStyle>,
    /// The axis carrying categories.
    pub category_axis: AxisDescriptor,
    /// The axis carrying values.
    pub value_axis: AxisDescriptor,
    /// Whether a legend is drawn. Always `false`: series are labeled directly.
    pub show_legend: bool,
    /// Direct labels and point annotations.
    pub annotations: Vec<Annotation>,
    /// Margins between the canvas edge and the plot area, in points.
    pub plot_insets: Insets,
}

impl RenderDescriptor {
    /// Whether a legend should be drawn.
    pub fn legend_visible(&self) -> bool {
        self.show_legend
    }

    /// Whether any axis draws gridlines.
    pub fn gridlines_visible(&self) -> bool {
        self.category_axis.show_grid || self.value_axis.show_grid
    }

    /// The horizontal axis.
    pub fn x_axis(&self) -> &AxisDescriptor {
        if self.category_axis.orient.is_horizontal() {
            &self.category_axis
        } else {
            &self.value_axis
        }
    }

    /// The vertical axis.
    pub fn y_axis(&self) -> &AxisDescriptor {
        if self.category_axis.orient.is_horizontal() {
            &self.value_axis
        } else {
            &self.category_axis
        }
    }

    /// The style of the series called `name`.
    pub fn series_named(&self, name: &str) -> Option<&SeriesStyle> {
        self.series.iter().find(|s| s.name == name)
    }

    /// Annotations of one kind, in order.
    pub fn annotations_of(&self, kind: AnnotationKind) -> impl Iterator<Item = &Annotation> + '_ {
        self.annotations.iter().filter(move |a| a.kind == kind)
    }

    /// The widest right-side label (end or bar label), including its offset.
    ///
    /// Renderers that place direct labels outside the plot use this to widen
    /// the right inset so labels are not clipped.
    pub fn label_gutter(&self, measurer: &dyn TextMeasurer) -> f64 {
        self.annotations
            .iter()
            .filter(|a| matches!(a.kind, AnnotationKind::EndLabel | AnnotationKind::BarLabel))
            .map(|a| measurer.measure(&a.text, &a.font).advance_width + a.placement.offset.x)
            .fold(0.0, f64::max)
    }

    /// [`Self::plot_insets`] with the right side grown to fit [`Self::label_gutter`].
    pub fn fitted_insets(&self, measurer: &dyn TextMeasurer) -> Insets {
        let mut insets = self.plot_insets;
        insets.x1 = insets.x1.max(self.label_gutter(measurer));
        insets
    }
}
