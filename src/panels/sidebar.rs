// src/panels/sidebar.rs

use gtk4::prelude::*;
use gtk4::{
  Align, Box as GtkBox, Button, DropDown, Expander, Frame, Label, Orientation, PolicyType,
  ScrolledWindow, SpinButton,
};

use crate::model::selection::DisplayMode;
use crate::state::AppState;
use crate::ui::results_view::ResultsPanel;
use std::cell::RefCell;
use std::rc::Rc;

/// Builds the sidebar and returns (The ScrolledWindow, The Selected-Element List Container Box)
pub fn build(state: Rc<RefCell<AppState>>, panel: &ResultsPanel) -> (ScrolledWindow, GtkBox) {
  // 1. Root Container (Scrollable)
  let scroll = ScrolledWindow::builder()
    .hscrollbar_policy(PolicyType::Never)
    .vscrollbar_policy(PolicyType::Automatic)
    .min_content_width(260)
    .build();

  let root_vbox = GtkBox::new(Orientation::Vertical, 10);
  root_vbox.set_margin_start(10);
  root_vbox.set_margin_end(10);
  root_vbox.set_margin_top(10);
  root_vbox.set_margin_bottom(10);
  scroll.set_child(Some(&root_vbox));

  // --- Helper for labeled numeric inputs ---
  let create_spin =
    |label: &str, max: f64, step: f64, val: f64, callback: Box<dyn Fn(f64)>| {
      let b = GtkBox::new(Orientation::Vertical, 2);
      b.append(&Label::builder().label(label).halign(Align::Start).build());

      let spin = SpinButton::with_range(0.0, max, step);
      spin.set_digits(2);
      spin.set_value(val);
      spin.set_hexpand(true);

      spin.connect_value_changed(move |sp| {
        callback(sp.value());
      });
      b.append(&spin);
      b
    };

  // ============================================================
  // SECTION 1: SAMPLE PREPARATION
  // ============================================================
  let prep_expander = Expander::new(Some("Sample Preparation"));
  prep_expander.set_expanded(true);

  let prep_box = GtkBox::new(Orientation::Vertical, 10);
  prep_box.set_margin_top(10);
  prep_box.set_margin_bottom(10);
  prep_box.set_margin_start(5);

  // Volume
  let s_vol = state.clone();
  let p_vol = panel.clone();
  prep_box.append(&create_spin(
    "Volume of sample solution (mL)",
    100000.0,
    0.1,
    state.borrow().sample.volume_ml,
    Box::new(move |v| {
      s_vol.borrow_mut().sample.volume_ml = v;
      p_vol.refresh();
    }),
  ));

  // Initial mass. Entered in grams, stored in mg.
  let s_mass = state.clone();
  let p_mass = panel.clone();
  prep_box.append(&create_spin(
    "Initial mass of sample (g)",
    100000.0,
    0.1,
    state.borrow().sample.initial_mass_mg / 1000.0,
    Box::new(move |v| {
      s_mass.borrow_mut().sample.initial_mass_mg = v * 1000.0;
      p_mass.refresh();
    }),
  ));

  prep_expander.set_child(Some(&prep_box));
  root_vbox.append(&prep_expander);

  // ============================================================
  // SECTION 2: SELECTED ELEMENTS
  // ============================================================
  let sel_expander = Expander::new(Some("Selected Elements"));
  sel_expander.set_expanded(true);

  let sel_box = GtkBox::new(Orientation::Vertical, 10);
  sel_box.set_margin_top(10);
  sel_box.set_margin_bottom(10);
  sel_box.set_margin_start(5);

  let list_container = GtkBox::new(Orientation::Vertical, 8);
  sel_box.append(&list_container);
  refresh_selected_list(&list_container, state.clone(), panel);

  sel_expander.set_child(Some(&sel_box));
  root_vbox.append(&sel_expander);

  // ============================================================
  // SECTION 3: ADDITIONAL DATA
  // ============================================================
  let extra_expander = Expander::new(Some("Additional Data"));
  extra_expander.set_expanded(true);

  let extra_box = GtkBox::new(Orientation::Vertical, 10);
  extra_box.set_margin_top(10);
  extra_box.set_margin_bottom(10);
  extra_box.set_margin_start(5);

  // Moisture
  let s_moist = state.clone();
  let p_moist = panel.clone();
  extra_box.append(&create_spin(
    "Moisture Content (%)",
    100.0,
    0.1,
    state.borrow().sample.moisture_pct,
    Box::new(move |v| {
      s_moist.borrow_mut().sample.moisture_pct = v;
      p_moist.refresh();
    }),
  ));

  // LOI
  let s_loi = state.clone();
  let p_loi = panel.clone();
  extra_box.append(&create_spin(
    "Loss on Ignition (LOI) (%)",
    100.0,
    0.1,
    state.borrow().sample.loi_pct,
    Box::new(move |v| {
      s_loi.borrow_mut().sample.loi_pct = v;
      p_loi.refresh();
    }),
  ));

  extra_expander.set_child(Some(&extra_box));
  root_vbox.append(&extra_expander);

  (scroll, list_container)
}

/// Public helper to rebuild the per-element editor rows dynamically.
/// Called after selections change (grid clicks, removals, imports).
pub fn refresh_selected_list(container: &GtkBox, state: Rc<RefCell<AppState>>, panel: &ResultsPanel) {
  while let Some(child) = container.first_child() {
    container.remove(&child);
  }

  // Snapshot before building widgets; the handlers borrow on their own.
  let entries: Vec<(String, f64, DisplayMode)> = state
    .borrow()
    .selection
    .iter()
    .map(|(symbol, e)| (symbol.to_string(), e.concentration, e.display_mode))
    .collect();

  if entries.is_empty() {
    let lbl = Label::new(Some("(Click an element above to add it)"));
    lbl.set_opacity(0.6);
    container.append(&lbl);
    return;
  }

  for (symbol, concentration, mode) in entries {
    let frame = Frame::new(Some(&symbol));
    let row = GtkBox::new(Orientation::Vertical, 6);
    row.set_margin_top(8);
    row.set_margin_bottom(8);
    row.set_margin_start(8);
    row.set_margin_end(8);

    // Concentration input
    let conc_box = GtkBox::new(Orientation::Horizontal, 8);
    conc_box.append(&Label::new(Some("Concentration (mg/mL)")));

    let spin = SpinButton::with_range(0.0, 100000.0, 0.01);
    spin.set_digits(2);
    spin.set_value(concentration);
    spin.set_hexpand(true);

    let s_c = state.clone();
    let p_c = panel.clone();
    let sym_c = symbol.clone();
    spin.connect_value_changed(move |sp| {
      {
        let mut st = s_c.borrow_mut();
        let mode = st
          .selection
          .entry(&sym_c)
          .map(|e| e.display_mode)
          .unwrap_or(DisplayMode::Elemental);
        st.selection.update(&sym_c, sp.value(), mode);
      }
      p_c.refresh();
    });
    conc_box.append(&spin);
    row.append(&conc_box);

    // Display mode + remove
    let mode_box = GtkBox::new(Orientation::Horizontal, 8);
    mode_box.append(&Label::new(Some("Display as")));

    let dropdown = DropDown::from_strings(&["Elemental", "Oxide"]);
    dropdown.set_selected(match mode {
      DisplayMode::Elemental => 0,
      DisplayMode::Oxide => 1,
    });
    dropdown.set_hexpand(true);

    let s_m = state.clone();
    let p_m = panel.clone();
    let sym_m = symbol.clone();
    dropdown.connect_selected_notify(move |d| {
      {
        let mut st = s_m.borrow_mut();
        let conc = st
          .selection
          .entry(&sym_m)
          .map(|e| e.concentration)
          .unwrap_or(0.0);
        let mode = match d.selected() {
          1 => DisplayMode::Oxide,
          _ => DisplayMode::Elemental,
        };
        st.selection.update(&sym_m, conc, mode);
      }
      p_m.refresh();
    });
    mode_box.append(&dropdown);

    let btn_remove = Button::with_label("Remove");
    let s_r = state.clone();
    let p_r = panel.clone();
    let sym_r = symbol.clone();
    let container_r = container.clone();
    btn_remove.connect_clicked(move |_| {
      {
        s_r.borrow_mut().selection.remove(&sym_r);
      }
      refresh_selected_list(&container_r, s_r.clone(), &p_r);
      p_r.refresh();
    });
    mode_box.append(&btn_remove);
    row.append(&mode_box);

    frame.set_child(Some(&row));
    container.append(&frame);
  }
}
