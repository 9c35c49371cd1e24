//! Chart rendering with plotters.
//!
//! Every renderer reads a finished dataset and writes one PNG; none of them
//! mutate or extend the dataset itself.

use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tracing::info;

use tvforge_core::{Brand, Dataset, DisplayTechnology};

use crate::errors::ReportError;
use crate::stats::PriceSegment;

const CHART_SIZE: (u32, u32) = (1280, 720);

/// Render the full chart set into `dir` and return the paths written.
pub fn render_all_charts(dataset: &Dataset, dir: &Path) -> Result<Vec<PathBuf>, ReportError> {
    if dataset.is_empty() {
        return Err(ReportError::EmptyDataset("no records to chart".to_string()));
    }
    std::fs::create_dir_all(dir)?;

    let mut paths = Vec::new();
    for (name, renderer) in [
        ("price_by_brand.png", price_by_brand as ChartFn),
        ("screen_size_distribution.png", size_distribution),
        ("price_vs_quality.png", price_vs_quality),
        ("technology_by_segment.png", technology_by_segment),
    ] {
        let path = dir.join(name);
        renderer(dataset, &path)?;
        paths.push(path);
    }

    info!(charts = paths.len(), dir = %dir.display(), "charts rendered");
    Ok(paths)
}

type ChartFn = fn(&Dataset, &Path) -> Result<(), ReportError>;

/// Mean price per brand as a bar chart.
pub fn price_by_brand(dataset: &Dataset, path: &Path) -> Result<(), ReportError> {
    let names: Vec<&str> = Brand::ALL.iter().map(Brand::as_str).collect();
    let mut sums = vec![0.0; names.len()];
    let mut counts = vec![0u64; names.len()];
    for record in dataset.iter() {
        if let Some(idx) = Brand::ALL.iter().position(|brand| *brand == record.brand) {
            sums[idx] += record.price_usd;
            counts[idx] += 1;
        }
    }
    let means: Vec<f64> = sums
        .iter()
        .zip(&counts)
        .map(|(sum, count)| if *count > 0 { sum / *count as f64 } else { 0.0 })
        .collect();

    draw_bars(path, "Mean Price by Brand", "Price (USD)", &names, &means)
}

/// Record count per screen size as a bar chart.
pub fn size_distribution(dataset: &Dataset, path: &Path) -> Result<(), ReportError> {
    let sizes = tvforge_core::registry::SCREEN_SIZES_INCHES;
    let labels: Vec<String> = sizes.iter().map(|size| format!("{size}\"")).collect();
    let names: Vec<&str> = labels.iter().map(String::as_str).collect();

    let mut counts = vec![0.0; sizes.len()];
    for record in dataset.iter() {
        if let Some(idx) = sizes.iter().position(|size| *size == record.screen_size_inches) {
            counts[idx] += 1.0;
        }
    }

    draw_bars(
        path,
        "Screen Size Distribution",
        "Records",
        &names,
        &counts,
    )
}

/// Price against quality rating, one series (and color) per panel technology.
pub fn price_vs_quality(dataset: &Dataset, path: &Path) -> Result<(), ReportError> {
    if dataset.is_empty() {
        return Err(ReportError::EmptyDataset("no records to chart".to_string()));
    }
    let max_price = dataset
        .iter()
        .map(|record| record.price_usd)
        .fold(0.0, f64::max);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(to_chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Price vs Quality Rating", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_price * 1.05, 0.0..5.5)
        .map_err(to_chart_err)?;

    chart
        .configure_mesh()
        .x_desc("Price (USD)")
        .y_desc("Quality rating")
        .draw()
        .map_err(to_chart_err)?;

    for (idx, technology) in DisplayTechnology::ALL.iter().enumerate() {
        let color = Palette99::pick(idx);
        let points = dataset
            .iter()
            .filter(|record| record.display_technology == *technology)
            .map(|record| {
                Circle::new(
                    (record.price_usd, f64::from(record.quality_rating)),
                    4,
                    color.mix(0.7).filled(),
                )
            });
        chart
            .draw_series(points)
            .map_err(to_chart_err)?
            .label(technology.as_str())
            .legend(move |(x, y)| Circle::new((x, y), 4, color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(to_chart_err)?;

    root.present().map_err(to_chart_err)?;
    Ok(())
}

/// Record count per technology, stacked by price segment.
pub fn technology_by_segment(dataset: &Dataset, path: &Path) -> Result<(), ReportError> {
    let technologies = DisplayTechnology::ALL;
    let segments = PriceSegment::ALL;

    let mut counts = vec![[0u64; 4]; technologies.len()];
    for record in dataset.iter() {
        let Some(tech_idx) = technologies
            .iter()
            .position(|tech| *tech == record.display_technology)
        else {
            continue;
        };
        let Some(seg_idx) = segments
            .iter()
            .position(|segment| *segment == PriceSegment::of(record.price_usd))
        else {
            continue;
        };
        counts[tech_idx][seg_idx] += 1;
    }

    let y_max = counts
        .iter()
        .map(|row| row.iter().sum::<u64>())
        .max()
        .unwrap_or(0)
        .max(1) as f64;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(to_chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Display Technology by Price Segment", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d((0..technologies.len()).into_segmented(), 0.0..y_max * 1.05)
        .map_err(to_chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|segment| match segment {
            SegmentValue::Exact(idx) | SegmentValue::CenterOf(idx) => technologies
                .get(*idx)
                .map(|tech| tech.to_string())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .y_desc("Records")
        .draw()
        .map_err(to_chart_err)?;

    for (seg_idx, segment) in segments.iter().enumerate() {
        let color = Palette99::pick(seg_idx);
        let bars = counts.iter().enumerate().map(|(tech_idx, row)| {
            let base: u64 = row[..seg_idx].iter().sum();
            let top = base + row[seg_idx];
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(tech_idx), base as f64),
                    (SegmentValue::Exact(tech_idx + 1), top as f64),
                ],
                color.filled(),
            );
            bar.set_margin(0, 0, 6, 6);
            bar
        });
        chart
            .draw_series(bars)
            .map_err(to_chart_err)?
            .label(segment.as_str())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(to_chart_err)?;

    root.present().map_err(to_chart_err)?;
    Ok(())
}

fn draw_bars(
    path: &Path,
    caption: &str,
    y_desc: &str,
    names: &[&str],
    values: &[f64],
) -> Result<(), ReportError> {
    let y_max = values.iter().fold(0.0, |acc: f64, v| acc.max(*v)).max(1.0);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(to_chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d((0..names.len()).into_segmented(), 0.0..y_max * 1.05)
        .map_err(to_chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|segment| match segment {
            SegmentValue::Exact(idx) | SegmentValue::CenterOf(idx) => {
                names.get(*idx).map(|name| name.to_string()).unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        })
        .y_desc(y_desc)
        .draw()
        .map_err(to_chart_err)?;

    chart
        .draw_series(values.iter().enumerate().map(|(idx, value)| {
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(idx), 0.0),
                    (SegmentValue::Exact(idx + 1), *value),
                ],
                BLUE.filled(),
            );
            bar.set_margin(0, 0, 4, 4);
            bar
        }))
        .map_err(to_chart_err)?;

    root.present().map_err(to_chart_err)?;
    Ok(())
}

fn to_chart_err<E: std::fmt::Display>(err: E) -> ReportError {
    ReportError::Chart(err.to_string())
}
