// src/ui/results_view.rs

use gtk4::prelude::*;
use gtk4::{Label, Notebook, PolicyType, ScrolledWindow, TextView};

use std::cell::RefCell;
use std::rc::Rc;

use plotters::prelude::*;
use plotters::style::TextStyle;
use plotters_cairo::CairoBackend;

use crate::chem::results;
use crate::state::AppState;
use crate::ui::chart;
use crate::utils::report;

const EMPTY_HINT: &str = "Select elements and input concentrations to see results.";

/// The central results area: a text table tab and a chart tab, both fed
/// from the same computed table.
#[derive(Clone)]
pub struct ResultsPanel {
    widget: Notebook,
    text_view: TextView,
    chart_area: gtk4::DrawingArea,
    state: Rc<RefCell<AppState>>,
}

impl ResultsPanel {
    pub fn build(state: Rc<RefCell<AppState>>) -> Self {
        let notebook = Notebook::new();
        notebook.set_vexpand(true);

        // --- Tab 1: Text Table ---
        let text_view = TextView::builder()
            .editable(false)
            .cursor_visible(false)
            .monospace(true)
            .left_margin(10)
            .right_margin(10)
            .top_margin(10)
            .bottom_margin(10)
            .build();

        let scroll = ScrolledWindow::builder()
            .hscrollbar_policy(PolicyType::Automatic)
            .vscrollbar_policy(PolicyType::Automatic)
            .child(&text_view)
            .build();
        notebook.append_page(&scroll, Some(&Label::new(Some("Results"))));

        // --- Tab 2: Chart ---
        // Fully qualified to distinguish from the Plotters DrawingArea
        let chart_area = gtk4::DrawingArea::new();
        chart_area.set_hexpand(true);
        chart_area.set_vexpand(true);
        chart_area.set_content_height(320);

        let draw_state = state.clone();
        chart_area.set_draw_func(move |_, context, width, height| {
            // Recompute on every draw; the table is tiny
            let table = {
                let st = draw_state.borrow();
                results::compute(&st.selection, &st.sample).unwrap_or_default()
            };

            let backend = CairoBackend::new(context, (width as u32, height as u32)).unwrap();
            let root_area = backend.into_drawing_area();
            root_area.fill(&WHITE).unwrap();

            if table.is_empty() {
                let style = TextStyle::from(("sans-serif", 16).into_font()).color(&BLACK);
                root_area
                    .draw_text(
                        "No results to chart yet.",
                        &style,
                        (width / 2 - 90, height / 2),
                    )
                    .unwrap();
            } else {
                chart::draw_composition_chart(&root_area, &table).unwrap();
            }
        });
        notebook.append_page(&chart_area, Some(&Label::new(Some("Chart"))));

        let panel = Self {
            widget: notebook,
            text_view,
            chart_area,
            state,
        };
        panel.refresh();
        panel
    }

    pub fn widget(&self) -> &Notebook {
        &self.widget
    }

    /// Recomputes the table from current state and re-renders both tabs.
    /// Called after every input change.
    pub fn refresh(&self) {
        let text = {
            let st = self.state.borrow();
            match results::compute(&st.selection, &st.sample) {
                Ok(table) => {
                    // Only reachable through imports or programmatic use;
                    // the grid never offers unknown symbols.
                    for symbol in &table.skipped {
                        log::warn!("No conversion entry for '{}'; row skipped", symbol);
                    }
                    if table.is_empty() {
                        EMPTY_HINT.to_string()
                    } else {
                        report::results_summary(&table, st.config.decimals)
                    }
                }
                Err(e) => e.to_string(),
            }
        };

        self.text_view.buffer().set_text(&text);
        self.chart_area.queue_draw();
    }
}
