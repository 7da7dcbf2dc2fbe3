use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, FileChooserAction, FileChooserNative, FileFilter, ResponseType};
use std::cell::RefCell;
use std::rc::Rc;

use crate::chem::results;
use crate::io;
use crate::model::oxides;
use crate::model::selection::DisplayMode;
use crate::state::AppState;
use crate::ui::results_view::ResultsPanel;
use crate::ui::{chart, show_preferences_window};

/// Merges imported pairs into the session. Returns how many were
/// applied and which symbols had to be skipped.
fn apply_concentrations(
    state: &Rc<RefCell<AppState>>,
    pairs: Vec<(String, f64)>,
) -> (usize, Vec<String>) {
    let mut applied = 0;
    let mut skipped = Vec::new();

    let mut st = state.borrow_mut();
    for (symbol, concentration) in pairs {
        if !oxides::is_selectable(&symbol) {
            skipped.push(symbol);
            continue;
        }
        // Existing entries keep their display mode; new ones start Elemental
        st.selection.select(&symbol);
        let mode = st
            .selection
            .entry(&symbol)
            .map(|e| e.display_mode)
            .unwrap_or(DisplayMode::Elemental);
        st.selection.update(&symbol, concentration, mode);
        applied += 1;
    }
    (applied, skipped)
}

pub fn setup(
    app: &Application,
    window: &ApplicationWindow,
    state: Rc<RefCell<AppState>>,
    panel: &ResultsPanel,
    selected_list: &gtk4::Box, // <--- Sidebar list, rebuilt after imports
) {
    // --- IMPORT ACTION ---
    let import_action = gtk4::gio::SimpleAction::new("import", None);
    let win_weak = window.downgrade();
    let state_weak = Rc::downgrade(&state);
    let list_weak = selected_list.downgrade();
    let panel_i = panel.clone();

    import_action.connect_activate(move |_, _| {
        let win = match win_weak.upgrade() { Some(w) => w, None => return };

        let dialog = FileChooserNative::new(
            Some("Import Concentrations"),
            Some(&win),
            FileChooserAction::Open,
            Some("Import"),
            Some("Cancel"),
        );

        let filter_any = FileFilter::new();
        filter_any.set_name(Some("Instrument Exports"));
        filter_any.add_pattern("*.csv");
        filter_any.add_pattern("*.txt");
        filter_any.add_pattern("*.tsv");
        filter_any.add_pattern("*.dat");
        filter_any.add_pattern("*.xlsx");
        filter_any.add_pattern("*.xls");
        filter_any.add_pattern("*.ods");
        dialog.add_filter(&filter_any);

        let state_weak_inner = state_weak.clone();
        let list_inner = list_weak.clone();
        let panel_inner = panel_i.clone();

        dialog.connect_response(move |d, response| {
            if response == ResponseType::Accept {
                if let Some(file) = d.file() {
                    if let Some(path) = file.path() {
                        let path_str = path.to_string_lossy().to_string();

                        if let Some(st) = state_weak_inner.upgrade() {
                            match io::load_concentrations(&path_str) {
                                Ok(pairs) => {
                                    let (applied, skipped) = apply_concentrations(&st, pairs);
                                    log::info!(
                                        "Imported {} concentration(s) from {:?}",
                                        applied,
                                        path.file_name().unwrap_or_default()
                                    );
                                    for symbol in skipped {
                                        log::warn!("Skipped '{}': not a supported element", symbol);
                                    }

                                    // Rebuild sidebar rows, then the results
                                    if let Some(list) = list_inner.upgrade() {
                                        crate::panels::sidebar::refresh_selected_list(
                                            &list,
                                            st.clone(),
                                            &panel_inner,
                                        );
                                    }
                                    panel_inner.refresh();
                                }
                                Err(e) => log::error!("Import failed: {}", e),
                            }
                        }
                    }
                }
            }
            d.destroy();
        });
        dialog.show();
    });
    app.add_action(&import_action);

    // --- EXPORT CSV ACTION ---
    let export_action = gtk4::gio::SimpleAction::new("export_csv", None);
    let win_weak_e = window.downgrade();
    let state_weak_e = Rc::downgrade(&state);

    export_action.connect_activate(move |_, _| {
        let win = match win_weak_e.upgrade() { Some(w) => w, None => return };

        let dialog = FileChooserNative::new(
            Some("Export Results as CSV"),
            Some(&win),
            FileChooserAction::Save,
            Some("Export"),
            Some("Cancel"),
        );

        let filter_csv = FileFilter::new();
        filter_csv.set_name(Some("CSV File (*.csv)"));
        filter_csv.add_pattern("*.csv");
        dialog.add_filter(&filter_csv);
        dialog.set_current_name("ICP-OES_results.csv");

        let state_weak_inner = state_weak_e.clone();
        dialog.connect_response(move |d, response| {
            if response == ResponseType::Accept {
                if let Some(file) = d.file() {
                    if let Some(path) = file.path() {
                        let path_str = path.to_string_lossy().to_string();
                        if let Some(st) = state_weak_inner.upgrade() {
                            let s = st.borrow();
                            match results::compute(&s.selection, &s.sample) {
                                // An empty table still writes the header line
                                Ok(table) => match io::csv_export::write_csv(&path_str, &table) {
                                    Ok(()) => log::info!("Results exported to {}", path_str),
                                    Err(e) => log::error!("CSV export failed: {}", e),
                                },
                                Err(e) => log::error!("Cannot export: {}", e),
                            }
                        }
                    }
                }
            }
            d.destroy();
        });
        dialog.show();
    });
    app.add_action(&export_action);

    // --- EXPORT CHART ACTION ---
    let chart_action = gtk4::gio::SimpleAction::new("export_chart", None);
    let win_weak_c = window.downgrade();
    let state_weak_c = Rc::downgrade(&state);

    chart_action.connect_activate(move |_, _| {
        let win = match win_weak_c.upgrade() { Some(w) => w, None => return };

        let dialog = FileChooserNative::new(
            Some("Export Chart as PDF"),
            Some(&win),
            FileChooserAction::Save,
            Some("Export"),
            Some("Cancel"),
        );

        let filter_pdf = FileFilter::new();
        filter_pdf.set_name(Some("PDF Document (*.pdf)"));
        filter_pdf.add_pattern("*.pdf");
        dialog.add_filter(&filter_pdf);
        dialog.set_current_name("composition_chart.pdf");

        let state_weak_inner = state_weak_c.clone();
        dialog.connect_response(move |d, response| {
            if response == ResponseType::Accept {
                if let Some(file) = d.file() {
                    if let Some(path) = file.path() {
                        let path_str = path.to_string_lossy().to_string();
                        if let Some(st) = state_weak_inner.upgrade() {
                            let s = st.borrow();
                            match results::compute(&s.selection, &s.sample) {
                                Ok(table) if table.is_empty() => {
                                    log::warn!("No results to chart; nothing exported")
                                }
                                Ok(table) => match chart::export_pdf(&path_str, &table) {
                                    Ok(()) => log::info!("Chart exported to {}", path_str),
                                    Err(e) => log::error!("Chart export failed: {}", e),
                                },
                                Err(e) => log::error!("Cannot export: {}", e),
                            }
                        }
                    }
                }
            }
            d.destroy();
        });
        dialog.show();
    });
    app.add_action(&chart_action);

    // --- PREFERENCES ACTION ---
    let pref_action = gtk4::gio::SimpleAction::new("preferences", None);
    let win_weak_p = window.downgrade();
    let state_weak_p = Rc::downgrade(&state);
    let panel_p = panel.clone();

    pref_action.connect_activate(move |_, _| {
        if let Some(win) = win_weak_p.upgrade() {
            if let Some(st) = state_weak_p.upgrade() {
                show_preferences_window(&win, st, panel_p.clone());
            }
        }
    });
    app.add_action(&pref_action);

    // --- QUIT ACTION ---
    let quit_action = gtk4::gio::SimpleAction::new("quit", None);
    let win_weak_q = window.downgrade();

    quit_action.connect_activate(move |_, _| {
        if let Some(win) = win_weak_q.upgrade() {
            win.close();
        }
    });
    app.add_action(&quit_action);
}
