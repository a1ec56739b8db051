//! Standalone interactive HTML graph document.

use std::io::{self, Write};

use impound_core::PlotDescriptor;
use serde_json::json;

/// Write the plot as a self-contained HTML page rendering the series
/// with plotly.js (loaded from its CDN).
///
/// The document embeds the series data as JSON, so the graph always
/// shows exactly the numbers the table export carries.
pub fn write_html<W: Write>(plot: &PlotDescriptor, mut out: W) -> io::Result<()> {
    let traces: Vec<serde_json::Value> = plot
        .series
        .values()
        .map(|s| {
            json!({
                "x": s.x,
                "y": s.y,
                "name": s.label,
                "mode": "lines+markers",
                "type": "scatter",
            })
        })
        .collect();
    let layout = json!({
        "title": { "text": plot.title },
        "xaxis": { "title": { "text": plot.x_label } },
    });
    let traces = serde_json::to_string(&traces).map_err(io::Error::other)?;
    let layout = serde_json::to_string(&layout).map_err(io::Error::other)?;

    write!(
        out,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\"/>\n\
         <title>{title}</title>\n\
         <script src=\"https://cdn.plot.ly/plotly-2.35.2.min.js\"></script>\n\
         </head>\n<body>\n<div id=\"graph\"></div>\n<script>\n\
         Plotly.newPlot(\"graph\", {traces}, {layout});\n\
         </script>\n</body>\n</html>\n",
        title = plot.title,
    )
}

/// The HTML document as an in-memory string.
pub fn html_string(plot: &PlotDescriptor) -> io::Result<String> {
    let mut buf = Vec::new();
    write_html(plot, &mut buf)?;
    String::from_utf8(buf).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use impound_core::{StageCurve, StageRecord};

    fn plot() -> PlotDescriptor {
        let mut curve = StageCurve::default();
        curve.push(StageRecord {
            area: 0.0,
            height: 2.0,
            volume: 0.0,
        });
        curve.push(StageRecord {
            area: 3.0,
            height: 3.0,
            volume: 1.5,
        });
        PlotDescriptor::from_curve(&curve)
    }

    #[test]
    fn document_embeds_both_series() {
        let html = html_string(&plot()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Plotly.newPlot"));
        assert!(html.contains("Area (m2)"));
        assert!(html.contains("Volume (m3)"));
        assert!(html.contains("[2.0,3.0]"));
    }

    #[test]
    fn layout_carries_title_and_axis() {
        let html = html_string(&plot()).unwrap();
        assert!(html.contains("Stage-storage curve"));
        assert!(html.contains("Height (m)"));
    }
}
