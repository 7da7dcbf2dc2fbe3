// src/ui/element_grid.rs

use gtk4::gdk;
use gtk4::prelude::*;
use gtk4::{Button, CssProvider, Frame, Grid, STYLE_PROVIDER_PRIORITY_APPLICATION};

use std::cell::RefCell;
use std::rc::Rc;

use crate::model::{elements, oxides};
use crate::panels::sidebar;
use crate::state::AppState;
use crate::ui::results_view::ResultsPanel;

/// Periodic-table width; the grid wraps after this many buttons.
const COLUMNS: i32 = 18;

/// Builds the clickable element grid. Clicking a button selects the
/// element and rebuilds the sidebar list.
pub fn build(
    state: Rc<RefCell<AppState>>,
    panel: &ResultsPanel,
    selected_list: &gtk4::Box,
) -> Frame {
    // --- INJECT CUSTOM CSS: one tinted class per element ---
    let mut css = String::new();
    for symbol in oxides::selectable_elements() {
        let (r, g, b) = elements::element_color(symbol);
        // Dark tints get white text
        let text = if 0.299 * r + 0.587 * g + 0.114 * b < 0.45 {
            "#ffffff"
        } else {
            "#1a1a1a"
        };
        css.push_str(&format!(
            "button.elem-{} {{ background-image: none; background-color: rgba({},{},{},0.85); color: {}; font-weight: bold; }}\n",
            symbol.to_lowercase(),
            (r * 255.0) as u8,
            (g * 255.0) as u8,
            (b * 255.0) as u8,
            text
        ));
    }

    let provider = CssProvider::new();
    provider.load_from_data(&css);
    if let Some(display) = gdk::Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }

    let grid = Grid::new();
    grid.set_row_spacing(4);
    grid.set_column_spacing(4);
    grid.set_margin_top(8);
    grid.set_margin_bottom(8);
    grid.set_margin_start(8);
    grid.set_margin_end(8);

    for (i, symbol) in oxides::selectable_elements().into_iter().enumerate() {
        let button = Button::with_label(symbol);
        button.add_css_class(&format!("elem-{}", symbol.to_lowercase()));

        if let Some(conv) = oxides::get_conversion(symbol) {
            button.set_tooltip_text(Some(&format!(
                "{} (Z={}): reported as {}, factor {}",
                symbol,
                elements::atomic_number(symbol),
                conv.oxide,
                conv.factor
            )));
        }

        let s = state.clone();
        let p = panel.clone();
        let list = selected_list.clone();
        button.connect_clicked(move |_| {
            {
                s.borrow_mut().selection.select(symbol);
            }
            sidebar::refresh_selected_list(&list, s.clone(), &p);
            p.refresh();
        });

        grid.attach(&button, (i as i32) % COLUMNS, (i as i32) / COLUMNS, 1, 1);
    }

    let frame = Frame::new(Some("Select Elements"));
    frame.set_child(Some(&grid));
    frame
}
