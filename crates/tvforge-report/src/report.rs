use tvforge_core::Resolution;

use crate::stats::{DatasetSummary, PriceSegment};

/// Render a deterministic fixed-format text report from a dataset summary.
pub fn render_summary(summary: &DatasetSummary) -> String {
    let mut lines = Vec::new();

    lines.push("TELEVISION DATASET SUMMARY".to_string());
    lines.push("==========================".to_string());
    lines.push(String::new());
    lines.push(format!("Total records: {}", summary.total_records));
    lines.push(format!("Distinct brands: {}", summary.brand_count));
    lines.push(format!("Average price: ${:.2}", summary.avg_price));
    lines.push(format!("Median price: ${:.2}", summary.median_price));
    lines.push(format!("Minimum price: ${:.2}", summary.min_price));
    lines.push(format!("Maximum price: ${:.2}", summary.max_price));
    lines.push(format!(
        "Average quality rating: {:.2}/5",
        summary.avg_quality
    ));
    lines.push(String::new());

    lines.push("Screen size distribution:".to_string());
    for (size, count) in &summary.size_distribution {
        lines.push(format!(
            "  {size}\": {count} ({}%)",
            percentage(*count, summary.total_records)
        ));
    }
    lines.push(String::new());

    lines.push("Resolution distribution:".to_string());
    for resolution in Resolution::ALL {
        let count = summary
            .resolution_distribution
            .get(resolution.as_str())
            .copied()
            .unwrap_or(0);
        lines.push(format!(
            "  {resolution}: {count} ({}%)",
            percentage(count, summary.total_records)
        ));
    }
    lines.push(String::new());

    lines.push("Price segment distribution:".to_string());
    for segment in PriceSegment::ALL {
        let count = summary
            .segment_distribution
            .get(segment.as_str())
            .copied()
            .unwrap_or(0);
        lines.push(format!(
            "  {segment}: {count} ({}%)",
            percentage(count, summary.total_records)
        ));
    }
    lines.push(String::new());

    lines.join("\n")
}

fn percentage(count: u64, total: u64) -> String {
    if total == 0 {
        "0.0".to_string()
    } else {
        format!("{:.1}", count as f64 / total as f64 * 100.0)
    }
}
