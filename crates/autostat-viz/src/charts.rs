//! SVG rendering with plotters

use crate::error::render_error;
use crate::prepare::{density_overlay_data, grouped_points, grouped_values, padded_range};
use crate::{ChartOptions, Error, Result};
use plotters::prelude::*;
use polars::prelude::DataFrame;
use tracing::debug;

const CAPTION_FONT: (&str, u32) = ("sans-serif", 22);

/// Horizontal box plot of `value`, one box per `category`
pub fn box_plot(
    df: &DataFrame,
    category: &str,
    value: &str,
    title: &str,
    options: &ChartOptions,
) -> Result<String> {
    options.validate()?;
    let groups = grouped_values(df, category, value)?;
    let labels: Vec<String> = groups.iter().map(|g| g.label.clone()).collect();
    let range = padded_range(groups.iter().flat_map(|g| g.values.iter().copied()))
        .ok_or_else(|| Error::Data(format!("{value} has no values")))?;
    // Quartiles are computed in f32
    let range = range.start as f32..range.end as f32;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (options.width, options.height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, CAPTION_FONT)
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(90)
            .build_cartesian_2d(range, labels[..].into_segmented())
            .map_err(render_error)?;
        chart
            .configure_mesh()
            .x_desc(value)
            .y_desc(category)
            .disable_y_mesh()
            .draw()
            .map_err(render_error)?;

        let boxes = groups.iter().zip(&labels).enumerate().map(|(i, (group, label))| {
            let quartiles = Quartiles::new(&group.values[..]);
            Boxplot::new_horizontal(SegmentValue::CenterOf(label), &quartiles)
                .width(20)
                .whisker_width(0.5)
                .style(Palette99::pick(i))
        });
        chart.draw_series(boxes).map_err(render_error)?;
        root.present().map_err(render_error)?;
    }

    debug!(category, value, groups = labels.len(), "rendered box plot");
    Ok(svg)
}

/// Scatter of `y` against `x`, colored by `category`
pub fn scatter_plot(
    df: &DataFrame,
    x: &str,
    y: &str,
    category: &str,
    title: &str,
    options: &ChartOptions,
) -> Result<String> {
    options.validate()?;
    let groups = grouped_points(df, category, x, y)?;
    let points = || groups.iter().flat_map(|g| g.points.iter().copied());
    let x_range = padded_range(points().map(|p| p.0))
        .ok_or_else(|| Error::Data(format!("{x} has no values")))?;
    let y_range = padded_range(points().map(|p| p.1))
        .ok_or_else(|| Error::Data(format!("{y} has no values")))?;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (options.width, options.height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, CAPTION_FONT)
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, y_range)
            .map_err(render_error)?;
        chart
            .configure_mesh()
            .x_desc(x)
            .y_desc(y)
            .draw()
            .map_err(render_error)?;

        for (i, group) in groups.iter().enumerate() {
            let color = Palette99::pick(i);
            chart
                .draw_series(
                    group
                        .points
                        .iter()
                        .map(|&point| Circle::new(point, 4, color.filled())),
                )
                .map_err(render_error)?
                .label(group.label.as_str())
                .legend(move |(lx, ly)| Circle::new((lx + 10, ly), 4, Palette99::pick(i).filled()));
        }
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(render_error)?;
        root.present().map_err(render_error)?;
    }

    debug!(x, y, category, groups = groups.len(), "rendered scatter plot");
    Ok(svg)
}

/// Overlaid density curves of `value`, one per `category`
pub fn density_overlay(
    df: &DataFrame,
    category: &str,
    value: &str,
    title: &str,
    options: &ChartOptions,
) -> Result<String> {
    options.validate()?;
    let groups = grouped_values(df, category, value)?;
    let overlay = density_overlay_data(&groups, options.bins)?;
    let centers = overlay.centers();

    let first = overlay.edges[0];
    let last = overlay.edges[overlay.edges.len() - 1];
    let peak = overlay
        .series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0f64, f64::max);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (options.width, options.height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, CAPTION_FONT)
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(first..last, 0.0..peak * 1.1)
            .map_err(render_error)?;
        chart
            .configure_mesh()
            .x_desc(value)
            .y_desc("Density")
            .draw()
            .map_err(render_error)?;

        for (i, series) in overlay.series.iter().enumerate() {
            let color = Palette99::pick(i);
            let line: Vec<(f64, f64)> = centers
                .iter()
                .copied()
                .zip(series.values.iter().copied())
                .collect();
            chart
                .draw_series(LineSeries::new(line, color.stroke_width(2)))
                .map_err(render_error)?
                .label(series.label.as_str())
                .legend(move |(lx, ly)| {
                    PathElement::new(vec![(lx, ly), (lx + 20, ly)], Palette99::pick(i))
                });
        }
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(render_error)?;
        root.present().map_err(render_error)?;
    }

    debug!(category, value, bins = options.bins, "rendered density overlay");
    Ok(svg)
}
