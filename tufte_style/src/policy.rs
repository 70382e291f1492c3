// Copyright 2025 the Tufte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolving a [`ChartSpec`] into a [`RenderDescriptor`].

extern crate alloc;

use alloc::format;
use alloc::vec::Vec;

use tufte_text::TextAnchor;

use crate::axis::infer_domain;
use crate::{
    Annotation, AnnotationKind, AxisDescriptor, AxisOrient, ChartKind, ChartSpec, Emphasis,
    InvalidSpec, LabelPlacement, Marker, RenderDescriptor, SeriesRole, SeriesSpec, SeriesStyle,
    StrokeStyle, Theme, TitleDescriptor, find_peak, z_order,
};

/// Maps chart intent to house-style render instructions.
///
/// Resolution is a pure function of the theme and the chart: the same
/// inputs always produce equal descriptors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StylePolicy {
    theme: Theme,
}

impl StylePolicy {
    /// Creates a policy that styles with `theme`.
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// The theme in effect.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Resolves `chart`.
    ///
    /// Fails if the chart is structurally invalid; see [`ChartSpec::validate`].
    pub fn resolve(&self, chart: &ChartSpec) -> Result<RenderDescriptor, InvalidSpec> {
        let peaks = chart.check()?;
        let theme = &self.theme;

        if chart.kind == ChartKind::Line
            && let Some(index) = chart.emphasis
        {
            log::debug!("ignoring emphasis on category {index}: line charts do not emphasize categories");
        }

        let series = self.series_styles(chart);
        let (category_axis, value_axis) = self.axes(chart);

        let mut annotations = Vec::new();
        for (i, (input, style)) in chart.series.iter().zip(&series).enumerate() {
            match chart.kind {
                ChartKind::Line => {
                    if let Some(label) = self.end_label(chart, i, input, style) {
                        annotations.push(label);
                    }
                }
                ChartKind::HorizontalBar => {
                    annotations.extend(self.bar_labels(chart, i, input));
                }
            }
        }
        for &i in &peaks {
            if let Some(label) = self.peak_label(chart, i, &series[i]) {
                annotations.push(label);
            }
        }

        let palette = &theme.palette;
        let fonts = &theme.fonts;
        let title = TitleDescriptor {
            text: chart.title.clone(),
            subtitle: chart.subtitle.clone(),
            style: fonts.title_style(),
            color: palette.text,
            subtitle_style: fonts.subtitle_style(),
            subtitle_color: palette.text_secondary,
            anchor: TextAnchor::Start,
            z_index: z_order::TITLES,
        };

        let plot_insets = match chart.kind {
            ChartKind::Line => theme.line_insets,
            ChartKind::HorizontalBar => theme.bar_insets,
        };

        log::debug!(
            "resolved {:?} chart: {} categories, {} series, {} annotations",
            chart.kind,
            chart.categories.len(),
            series.len(),
            annotations.len()
        );

        Ok(RenderDescriptor {
            kind: chart.kind,
            background: palette.background,
            palette: palette.clone(),
            fonts: fonts.clone(),
            title,
            series,
            category_axis,
            value_axis,
            show_legend: false,
            annotations,
            plot_insets,
        })
    }

    fn series_styles(&self, chart: &ChartSpec) -> Vec<SeriesStyle> {
        let theme = &self.theme;
        let palette = &theme.palette;
        let label_font = theme.fonts.label_style();
        let mut secondary_ordinal = 0;

        chart.series
            .iter()
            .map(|s| {
                let mut style = SeriesStyle {
                    name: s.name.clone(),
                    role: s.role,
                    color: palette.series_default,
                    stroke: None,
                    fill: None,
                    emphasis: None,
                    show_markers: false,
                    label_font: label_font.clone(),
                    z_index: z_order::SERIES_STROKE,
                };
                match chart.kind {
                    ChartKind::Line => {
                        let (color, stroke) = match s.role {
                            SeriesRole::Primary => (
                                palette.highlight,
                                StrokeStyle::solid(palette.highlight, theme.primary_stroke_width),
                            ),
                            SeriesRole::Target => (
                                palette.series_default,
                                StrokeStyle::dashed(
                                    palette.series_default,
                                    theme.target_stroke_width,
                                    &theme.target_dash,
                                ),
                            ),
                            SeriesRole::Secondary => {
                                let color = palette.categorical(secondary_ordinal);
                                secondary_ordinal += 1;
                                (
                                    color,
                                    StrokeStyle::solid(color, theme.secondary_stroke_width),
                                )
                            }
                        };
                        style.color = color;
                        style.stroke = Some(stroke);
                        if s.role == SeriesRole::Primary {
                            style.z_index = z_order::PRIMARY_SERIES;
                        }
                    }
                    ChartKind::HorizontalBar => {
                        let fill = if s.role == SeriesRole::Primary {
                            palette.highlight
                        } else {
                            palette.series_default
                        };
                        style.color = fill;
                        style.fill = Some(fill);
                        style.z_index = z_order::SERIES_FILL;
                        if s.role != SeriesRole::Primary
                            && let Some(index) = chart.emphasis
                        {
                            style.emphasis = Some(Emphasis {
                                index,
                                color: palette.highlight,
                            });
                        }
                    }
                }
                style
            })
            .collect()
    }

    fn axes(&self, chart: &ChartSpec) -> (AxisDescriptor, AxisDescriptor) {
        let theme = &self.theme;
        let palette = &theme.palette;
        let fonts = &theme.fonts;
        let rule = StrokeStyle::solid(palette.axis, theme.axis_stroke_width);
        let extent = infer_domain(chart.series.iter().map(|s| s.values.as_slice()));
        let count = chart.categories.len();

        let (category, value) = match chart.kind {
            ChartKind::Line => {
                let category = AxisDescriptor::category(
                    AxisOrient::Bottom,
                    count,
                    fonts.tick_style(),
                    palette.text_tertiary,
                    rule.clone(),
                )
                .with_domain_line(true);
                let value = AxisDescriptor::value(
                    AxisOrient::Left,
                    extent,
                    fonts.tick_style(),
                    palette.text_tertiary,
                    rule,
                )
                .with_domain(extent.map(|e| theme.domain_padding.apply(e)));
                (category, value)
            }
            ChartKind::HorizontalBar => {
                let category = AxisDescriptor::category(
                    AxisOrient::Left,
                    count,
                    fonts.label_style(),
                    palette.text,
                    rule.clone(),
                );
                // Bars grow from zero.
                let value = AxisDescriptor::value(
                    AxisOrient::Bottom,
                    extent,
                    fonts.tick_style(),
                    palette.text_tertiary,
                    rule,
                )
                .with_domain(extent.map(|(lo, hi)| (lo.min(0.0), hi.max(0.0))))
                .with_visible(false);
                (category, value)
            }
        };
        let value = value.with_title(chart.value_axis_title.clone(), palette.text_secondary);
        (category, value)
    }

    fn end_label(
        &self,
        chart: &ChartSpec,
        series: usize,
        input: &SeriesSpec,
        style: &SeriesStyle,
    ) -> Option<Annotation> {
        let index = input.values.len().checked_sub(1)?;
        let value = input.values[index];
        if !value.is_finite() {
            log::debug!("no end label for {:?}: last value is {value}", input.name);
            return None;
        }
        Some(Annotation {
            kind: AnnotationKind::EndLabel,
            series,
            index,
            value,
            text: format!("{}: {}", input.name, chart.format_value(value)),
            color: style.color,
            font: style.label_font.clone(),
            placement: LabelPlacement::right_of(self.theme.end_label_offset),
            marker: None,
            leader: None,
            z_index: z_order::LABELS,
        })
    }

    fn bar_labels<'a>(
        &'a self,
        chart: &'a ChartSpec,
        series: usize,
        input: &'a SeriesSpec,
    ) -> impl Iterator<Item = Annotation> + 'a {
        let theme = &self.theme;
        input
            .values
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_finite())
            .map(move |(index, &value)| Annotation {
                kind: AnnotationKind::BarLabel,
                series,
                index,
                value,
                text: chart.format_value(value),
                color: theme.palette.text_secondary,
                font: theme.fonts.label_style(),
                placement: LabelPlacement::right_of(theme.bar_label_offset),
                marker: None,
                leader: None,
                z_index: z_order::LABELS,
            })
    }

    fn peak_label(&self, chart: &ChartSpec, series: usize, style: &SeriesStyle) -> Option<Annotation> {
        let input = &chart.series[series];
        let Some(index) = find_peak(&input.values) else {
            log::trace!("no peak for {:?}: no finite values", input.name);
            return None;
        };
        let value = input.values[index];
        let theme = &self.theme;
        log::trace!("peak of {:?} at category {index}: {value}", input.name);
        Some(Annotation {
            kind: AnnotationKind::PeakLabel,
            series,
            index,
            value,
            text: format!("Peak: {}", chart.format_value(value)),
            color: theme.palette.text,
            font: theme.fonts.annotation_style(),
            placement: LabelPlacement::above(theme.peak_label_offset),
            marker: Some(Marker {
                radius: theme.peak_marker_radius,
                color: style.color,
                z_index: z_order::ANNOTATION_MARKS,
            }),
            leader: Some(StrokeStyle::solid(
                theme.palette.axis,
                theme.axis_stroke_width,
            )),
            z_index: z_order::LABELS,
        })
    }
}
