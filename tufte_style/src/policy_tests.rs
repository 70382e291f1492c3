// Copyright 2025 the Tufte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate alloc;
extern crate std;

use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    AnnotationKind, AxisOrient, ChartKind, ChartSpec, HeuristicTextMeasurer, InvalidSpec,
    Palette, SeriesSpec, StylePolicy, Theme, ValueFormatter, colors, z_order,
};
use tufte_text::{FontFamily, FontStyle, TextAnchor, TextBaseline};

const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
const REVENUE: [f64; 6] = [4200.0, 4800.0, 5100.0, 4900.0, 5600.0, 6200.0];
const TARGET: [f64; 6] = [4000.0, 4200.0, 4400.0, 4600.0, 4800.0, 5000.0];
const PRODUCTS: [&str; 5] = ["Product A", "Product B", "Product C", "Product D", "Product E"];
const SALES: [f64; 5] = [42000.0, 38000.0, 27000.0, 19000.0, 12000.0];

fn revenue_chart() -> ChartSpec {
    ChartSpec::line(MONTHS)
        .with_series(SeriesSpec::primary("Revenue", REVENUE))
        .with_series(SeriesSpec::target("Target", TARGET))
        .with_peak_annotation("Revenue")
}

fn sales_chart() -> ChartSpec {
    ChartSpec::horizontal_bar(PRODUCTS)
        .with_series(SeriesSpec::secondary("Sales", SALES))
        .with_formatter(ValueFormatter::scaled("$", 1000.0, "k"))
}

fn texts(descriptor: &crate::RenderDescriptor, kind: AnnotationKind) -> Vec<String> {
    descriptor
        .annotations_of(kind)
        .map(|a| a.text.clone())
        .collect()
}

#[test]
fn resolution_is_deterministic() {
    let policy = StylePolicy::default();
    for chart in [revenue_chart(), sales_chart()] {
        let a = policy.resolve(&chart).unwrap();
        let b = policy.resolve(&chart).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn legend_and_gridlines_are_always_off() {
    let policy = StylePolicy::default();
    for chart in [revenue_chart(), sales_chart()] {
        let d = policy.resolve(&chart).unwrap();
        assert!(!d.legend_visible());
        assert!(!d.gridlines_visible());
        assert!(!d.category_axis.show_ticks);
        assert!(!d.value_axis.show_ticks);
        assert!(d.series.iter().all(|s| !s.show_markers));
    }
}

#[test]
fn primary_series_is_highlighted() {
    let d = StylePolicy::default().resolve(&revenue_chart()).unwrap();
    let revenue = d.series_named("Revenue").unwrap();
    assert_eq!(revenue.color, colors::HIGHLIGHT);
    let stroke = revenue.stroke.as_ref().unwrap();
    assert_eq!(stroke.width, 2.0);
    assert!(!stroke.is_dashed());
    assert_eq!(revenue.z_index, z_order::PRIMARY_SERIES);
}

#[test]
fn target_series_is_thin_dashed_and_muted() {
    let d = StylePolicy::default().resolve(&revenue_chart()).unwrap();
    let target = d.series_named("Target").unwrap();
    let stroke = target.stroke.as_ref().unwrap();
    assert_eq!(stroke.width, 1.0);
    assert_eq!(stroke.dash.as_slice(), &[4.0, 3.0]);
    assert_eq!(stroke.color, colors::SERIES_DEFAULT);
    assert!(target.z_index < d.series_named("Revenue").unwrap().z_index);

    let end_labels = texts(&d, AnnotationKind::EndLabel);
    assert_eq!(end_labels, ["Revenue: 6,200", "Target: 5,000"]);
    let label = d.annotations_of(AnnotationKind::EndLabel).nth(1).unwrap();
    assert_eq!(label.color, colors::SERIES_DEFAULT);
    assert_eq!(label.index, 5);
    assert_eq!(label.placement.anchor, TextAnchor::Start);
}

#[test]
fn secondary_series_cycle_categorical_colors() {
    let chart = ChartSpec::line(["A", "B"])
        .with_series(SeriesSpec::secondary("One", [1.0, 2.0]))
        .with_series(SeriesSpec::primary("Main", [1.0, 2.0]))
        .with_series(SeriesSpec::secondary("Two", [1.0, 2.0]));
    let d = StylePolicy::default().resolve(&chart).unwrap();
    assert_eq!(d.series[0].color, colors::CATEGORICAL[0]);
    assert_eq!(d.series[2].color, colors::CATEGORICAL[1]);
    assert_eq!(d.series[2].stroke.as_ref().unwrap().width, 1.5);
}

#[test]
fn peak_annotation_marks_the_maximum() {
    let d = StylePolicy::default().resolve(&revenue_chart()).unwrap();
    let peaks: Vec<_> = d.annotations_of(AnnotationKind::PeakLabel).collect();
    assert_eq!(peaks.len(), 1);
    let peak = peaks[0];
    assert_eq!(peak.index, 5);
    assert_eq!(peak.value, 6200.0);
    assert_eq!(peak.text, "Peak: 6,200");
    assert_eq!(peak.font.font_style, FontStyle::Italic);
    assert_eq!(peak.font.font_family.generic(), &FontFamily::Serif);
    assert_eq!(peak.placement.baseline, TextBaseline::Alphabetic);
    assert!(peak.placement.offset.y < 0.0);
    let marker = peak.marker.unwrap();
    assert_eq!(marker.radius, 3.0);
    assert_eq!(marker.color, colors::HIGHLIGHT);
    assert_eq!(peak.data_position(), kurbo::Point::new(5.0, 6200.0));
}

#[test]
fn peak_ties_resolve_to_the_lowest_index() {
    let chart = ChartSpec::line(["A", "B", "C"])
        .with_series(SeriesSpec::primary("S", [5.0, 5.0, 3.0]))
        .with_peak_annotation("S");
    let d = StylePolicy::default().resolve(&chart).unwrap();
    let peak = d.annotations_of(AnnotationKind::PeakLabel).next().unwrap();
    assert_eq!(peak.index, 0);
    assert_eq!(peak.text, "Peak: 5");
}

#[test]
fn non_finite_values_drop_labels_not_charts() {
    let chart = ChartSpec::line(["A", "B"])
        .with_series(SeriesSpec::primary("S", [f64::NAN, f64::NAN]))
        .with_peak_annotation("S");
    let d = StylePolicy::default().resolve(&chart).unwrap();
    assert!(d.annotations.is_empty());
    assert_eq!(d.value_axis.domain, None);
}

#[test]
fn mismatched_lengths_are_rejected() {
    let chart = ChartSpec::line(["A", "B"]).with_series(SeriesSpec::primary("S", [1.0, 2.0, 3.0]));
    assert!(matches!(
        StylePolicy::default().resolve(&chart),
        Err(InvalidSpec::LengthMismatch { expected: 2, actual: 3, .. })
    ));
}

#[test]
fn unknown_peak_series_is_rejected() {
    let chart = revenue_chart().with_peak_annotation("Cost");
    assert_eq!(
        StylePolicy::default().resolve(&chart),
        Err(InvalidSpec::UnknownSeries("Cost".into()))
    );
}

#[test]
fn line_value_domain_is_padded_and_range_frame_is_not() {
    let d = StylePolicy::default().resolve(&revenue_chart()).unwrap();
    let value = &d.value_axis;
    assert_eq!(value.orient, AxisOrient::Left);
    assert_eq!(value.domain, Some((3800.0, 6600.0)));
    assert_eq!(value.range_frame, Some((4000.0, 6200.0)));
    assert!(!value.show_domain);

    let category = &d.category_axis;
    assert_eq!(category.orient, AxisOrient::Bottom);
    assert!(category.show_domain);
    assert_eq!(category.domain_stroke.width, 0.5);
    assert_eq!(category.domain_stroke.color, colors::AXIS);
    assert_eq!(category.range_frame, Some((0.0, 5.0)));
    assert_eq!(category.label_color, colors::TEXT_TERTIARY);
    assert_eq!(category.label_style.font_size, 11.0);
}

#[test]
fn bar_labels_follow_input_order() {
    let d = StylePolicy::default().resolve(&sales_chart()).unwrap();
    assert_eq!(
        texts(&d, AnnotationKind::BarLabel),
        ["$42k", "$38k", "$27k", "$19k", "$12k"]
    );
    assert!(
        d.annotations_of(AnnotationKind::BarLabel)
            .all(|a| a.color == colors::TEXT_SECONDARY)
    );
    assert_eq!(texts(&d, AnnotationKind::EndLabel).len(), 0);
}

#[test]
fn bar_chart_hides_the_value_axis_and_axis_lines() {
    let d = StylePolicy::default().resolve(&sales_chart()).unwrap();
    assert_eq!(d.kind, ChartKind::HorizontalBar);
    assert!(!d.value_axis.visible);
    assert_eq!(d.value_axis.domain, Some((0.0, 42000.0)));
    assert!(!d.category_axis.show_domain);
    assert!(!d.value_axis.show_domain);
    assert_eq!(d.category_axis.orient, AxisOrient::Left);
    assert_eq!(d.x_axis().orient, AxisOrient::Bottom);
    assert_eq!(d.category_axis.label_color, colors::TEXT);

    let sales = &d.series[0];
    assert_eq!(sales.fill, Some(colors::SERIES_DEFAULT));
    assert!(sales.stroke.is_none());
}

#[test]
fn bar_emphasis_highlights_one_bar() {
    let d = StylePolicy::default()
        .resolve(&sales_chart().with_emphasis(0))
        .unwrap();
    let sales = &d.series[0];
    assert_eq!(sales.fill_at(0), Some(colors::HIGHLIGHT));
    assert_eq!(sales.fill_at(1), Some(colors::SERIES_DEFAULT));
}

#[test]
fn line_emphasis_is_ignored() {
    let policy = StylePolicy::default();
    let plain = policy.resolve(&revenue_chart()).unwrap();
    let emphasized = policy.resolve(&revenue_chart().with_emphasis(2)).unwrap();
    assert_eq!(plain, emphasized);
}

#[test]
fn titles_are_carried_left_aligned() {
    let chart = revenue_chart()
        .with_title("Monthly revenue")
        .with_subtitle("Revenue passed target in every month");
    let d = StylePolicy::default().resolve(&chart).unwrap();
    assert_eq!(d.title.text.as_deref(), Some("Monthly revenue"));
    assert_eq!(d.title.anchor, TextAnchor::Start);
    assert_eq!(d.title.style.font_size, 18.0);
    assert_eq!(d.title.subtitle_color, colors::TEXT_SECONDARY);
    assert!(
        StylePolicy::default()
            .resolve(&revenue_chart())
            .unwrap()
            .title
            .is_empty()
    );
}

#[test]
fn dark_theme_swaps_the_palette() {
    let d = StylePolicy::new(Theme::dark())
        .resolve(&revenue_chart())
        .unwrap();
    let dark = Palette::dark();
    assert_eq!(d.background, dark.background);
    assert_eq!(d.series_named("Revenue").unwrap().color, dark.highlight);
    assert_ne!(d.background, colors::BACKGROUND);
}

#[test]
fn label_gutter_fits_the_widest_end_label() {
    let d = StylePolicy::default().resolve(&revenue_chart()).unwrap();
    let measurer = HeuristicTextMeasurer;
    // "Revenue: 6,200" is 14 serif glyphs at 13pt, plus the 8pt offset.
    assert_eq!(d.label_gutter(&measurer), 0.5 * 13.0 * 14.0 + 8.0);
    assert_eq!(d.fitted_insets(&measurer).x1, 100.0);

    let wide = ChartSpec::line(["A"])
        .with_series(SeriesSpec::primary("A very long series name", [1_000_000.0]));
    let d = StylePolicy::default().resolve(&wide).unwrap();
    assert!(d.fitted_insets(&measurer).x1 > 100.0);
}

#[test]
fn primary_bar_series_is_highlighted_without_emphasis() {
    let chart = ChartSpec::horizontal_bar(PRODUCTS)
        .with_series(SeriesSpec::primary("Sales", SALES))
        .with_emphasis(2);
    let d = StylePolicy::default().resolve(&chart).unwrap();
    let sales = &d.series[0];
    assert_eq!(sales.fill, Some(colors::HIGHLIGHT));
    assert_eq!(sales.color, colors::HIGHLIGHT);
    assert_eq!(sales.emphasis, None);
    assert_eq!(sales.fill_at(2), Some(colors::HIGHLIGHT));
}

#[test]
fn value_axis_title_uses_secondary_text() {
    let d = StylePolicy::default()
        .resolve(&revenue_chart().with_value_axis_title("Revenue ($k)"))
        .unwrap();
    assert_eq!(d.value_axis.title.as_deref(), Some("Revenue ($k)"));
    assert_eq!(d.value_axis.title_color, colors::TEXT_SECONDARY);
    assert_eq!(d.category_axis.title, None);

    let untitled = StylePolicy::default().resolve(&revenue_chart()).unwrap();
    assert_eq!(untitled.value_axis.title, None);
}

#[test]
fn shared_series_names_resolve_without_peak_requests() {
    let chart = ChartSpec::line(["A", "B"])
        .with_series(SeriesSpec::secondary("Sales", [1.0, 2.0]))
        .with_series(SeriesSpec::secondary("Sales", [2.0, 1.0]));
    let d = StylePolicy::default().resolve(&chart).unwrap();
    assert_eq!(d.series.len(), 2);
    assert_eq!(texts(&d, AnnotationKind::EndLabel), ["Sales: 2", "Sales: 1"]);

    assert_eq!(
        StylePolicy::default().resolve(&chart.with_peak_annotation("Sales")),
        Err(InvalidSpec::DuplicateSeries("Sales".into()))
    );
}

#[test]
fn line_emphasis_out_of_range_is_still_ignored() {
    let chart = ChartSpec::line(["A", "B"])
        .with_series(SeriesSpec::primary("S", [1.0, 2.0]));
    let policy = StylePolicy::default();
    assert_eq!(
        policy.resolve(&chart.clone().with_emphasis(7)),
        policy.resolve(&chart)
    );
}
