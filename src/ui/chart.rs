// src/ui/chart.rs

// Shared chart drawing: the screen draw func and the PDF exporter both
// funnel through draw_composition_chart with their own backend.

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::prelude::*;
use plotters_cairo::CairoBackend;

use cairo::{Context, PdfSurface};

use crate::chem::results::{ResultRow, ResultsTable};
use crate::model::elements;

/// Draws the composition bar chart to ANY backend (screen or PDF).
/// The Total row is left out; it is a sum, not a species.
pub fn draw_composition_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    table: &ResultsTable,
) -> Result<(), std::boxed::Box<dyn std::error::Error>>
where
    DB::ErrorType: 'static,
{
    let bars: Vec<&ResultRow> = table.rows.iter().filter(|r| r.label != "Total").collect();
    if bars.is_empty() {
        return Ok(());
    }

    let max_y = bars
        .iter()
        .map(|r| r.concentration_pct)
        .fold(0.0f64, f64::max);
    // Headroom for the bar labels
    let chart_max_y = if max_y > 0.0 { max_y * 1.2 } else { 1.0 };

    let mut chart = ChartBuilder::on(root)
        .caption("Sample Composition (wt%)", ("sans-serif", 20))
        .margin(20)
        .x_label_area_size(20)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..bars.len() as f64, 0.0..chart_max_y)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .y_desc("Concentration (%)")
        .axis_desc_style(("sans-serif", 16))
        .draw()?;

    for (i, row) in bars.iter().enumerate() {
        let x0 = i as f64 + 0.15;
        let x1 = i as f64 + 0.85;

        let (r, g, b) = if elements::atomic_number(&row.label) > 0 {
            elements::element_color(&row.label)
        } else {
            // Moisture / LOI rows are not species
            (0.60, 0.60, 0.60)
        };
        let color = RGBColor((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8);

        chart.draw_series(std::iter::once(Rectangle::new(
            [(x0, 0.0), (x1, row.concentration_pct)],
            color.filled(),
        )))?;

        chart.draw_series(std::iter::once(Text::new(
            row.converted.clone(),
            (i as f64 + 0.3, row.concentration_pct + chart_max_y * 0.04),
            ("sans-serif", 14).into_font(),
        )))?;
    }

    Ok(())
}

/// Renders the chart into a fresh PDF at `path`.
pub fn export_pdf(path: &str, table: &ResultsTable) -> Result<(), String> {
    let width = 800.0;
    let height = 600.0;

    // 1. Create PDF Surface
    let surface =
        PdfSurface::new(width, height, path).map_err(|e| format!("PDF surface: {}", e))?;

    // 2. Create Context
    let ctx = Context::new(&surface).map_err(|e| format!("Cairo context: {}", e))?;

    // 3. Create Plotters Backend
    {
        let backend = CairoBackend::new(&ctx, (width as u32, height as u32))
            .map_err(|e| format!("Cairo backend: {}", e))?;
        let root_area = backend.into_drawing_area();
        root_area.fill(&WHITE).map_err(|e| e.to_string())?;

        // 4. Draw
        draw_composition_chart(&root_area, table).map_err(|e| e.to_string())?;
    }

    // 5. Finish (ensure write)
    surface.finish();
    Ok(())
}
