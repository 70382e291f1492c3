// Copyright 2025 the Tufte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolves the reference charts and prints their descriptors.

use tufte_style::{
    AnnotationKind, AxisDescriptor, ChartSpec, HeuristicTextMeasurer, InvalidSpec, Palette,
    RenderDescriptor, SeriesSpec, StylePolicy, Theme, ValueFormatter, parse_color, to_css_hex,
};
use tufte_text::TextMeasurer;

fn revenue_chart() -> ChartSpec {
    ChartSpec::line(["Jan", "Feb", "Mar", "Apr", "May", "Jun"])
        .with_title("Monthly revenue")
        .with_subtitle("Revenue stayed above target all half-year")
        .with_series(SeriesSpec::primary(
            "Revenue",
            [4200.0, 4800.0, 5100.0, 4900.0, 5600.0, 6200.0],
        ))
        .with_series(SeriesSpec::target(
            "Target",
            [4000.0, 4200.0, 4400.0, 4600.0, 4800.0, 5000.0],
        ))
        .with_peak_annotation("Revenue")
        .with_value_axis_title("Revenue ($)")
}

fn sales_chart() -> ChartSpec {
    ChartSpec::horizontal_bar(["Product A", "Product B", "Product C", "Product D", "Product E"])
        .with_title("Sales by product")
        .with_series(SeriesSpec::secondary(
            "Sales",
            [42000.0, 38000.0, 27000.0, 19000.0, 12000.0],
        ))
        .with_formatter(ValueFormatter::scaled("$", 1000.0, "k"))
        .with_emphasis(0)
}

fn describe_axis(out: &mut String, name: &str, axis: &AxisDescriptor) {
    out.push_str(&format!(
        "  {name} axis: {:?}, visible={}, line={}",
        axis.orient, axis.visible, axis.show_domain
    ));
    if let Some(title) = &axis.title {
        out.push_str(&format!(", title {title:?} {}", to_css_hex(axis.title_color)));
    }
    if let Some((lo, hi)) = axis.domain {
        out.push_str(&format!(", domain=[{lo}, {hi}]"));
    }
    if let Some((lo, hi)) = axis.range_frame {
        out.push_str(&format!(", frame=[{lo}, {hi}]"));
    }
    out.push('\n');
}

fn describe(title: &str, d: &RenderDescriptor, measurer: &dyn TextMeasurer) -> String {
    let mut out = String::new();
    out.push_str(&format!("== {title} ({:?}) ==\n", d.kind));
    out.push_str(&format!("  background {}\n", to_css_hex(d.background)));
    if let Some(text) = &d.title.text {
        out.push_str(&format!("  title {text:?} in {}\n", d.title.style.font_family.to_css()));
    }
    if let Some(text) = &d.title.subtitle {
        out.push_str(&format!("  subtitle {text:?}\n"));
    }
    for s in &d.series {
        out.push_str(&format!("  series {:?} ({:?}) {}", s.name, s.role, to_css_hex(s.color)));
        if let Some(stroke) = &s.stroke {
            out.push_str(&format!(" stroke {}", stroke.width));
            if stroke.is_dashed() {
                out.push_str(&format!(" dash {:?}", stroke.dash.as_slice()));
            }
        }
        if let Some(e) = s.emphasis {
            out.push_str(&format!(" emphasis #{} {}", e.index, to_css_hex(e.color)));
        }
        out.push('\n');
    }
    describe_axis(&mut out, "category", &d.category_axis);
    describe_axis(&mut out, "value", &d.value_axis);
    for a in &d.annotations {
        out.push_str(&format!(
            "  {:?} {:?} at ({}, {}) {}",
            a.kind,
            a.text,
            a.index,
            a.value,
            to_css_hex(a.color)
        ));
        if a.kind == AnnotationKind::PeakLabel
            && let Some(marker) = a.marker
        {
            out.push_str(&format!(" marker r={}", marker.radius));
        }
        out.push('\n');
    }
    let insets = d.fitted_insets(measurer);
    out.push_str(&format!(
        "  legend={} gridlines={} insets l={} t={} r={} b={}\n",
        d.legend_visible(),
        d.gridlines_visible(),
        insets.x0,
        insets.y0,
        insets.x1,
        insets.y1
    ));
    out
}

fn main() -> Result<(), InvalidSpec> {
    env_logger::init();

    let measurer = HeuristicTextMeasurer;
    let light = StylePolicy::default();
    let dark = StylePolicy::new(Theme::dark());
    let teal = parse_color("#1b9e77")?;
    let custom = StylePolicy::new(
        Theme::light().with_palette(Palette::light().with_highlight(teal)),
    );

    let charts = [("revenue", revenue_chart()), ("sales", sales_chart())];
    let policies = [("light", &light), ("dark", &dark), ("teal highlight", &custom)];

    for (chart_name, chart) in &charts {
        for (theme_name, policy) in policies {
            let descriptor = policy.resolve(chart)?;
            log::info!(
                "{chart_name}/{theme_name}: {} annotations",
                descriptor.annotations.len()
            );
            print!(
                "{}",
                describe(&format!("{chart_name}, {theme_name}"), &descriptor, &measurer)
            );
        }
    }
    Ok(())
}
