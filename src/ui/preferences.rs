// src/ui/preferences.rs

use crate::state::AppState;
use crate::ui::results_view::ResultsPanel;
use crate::utils::logger;
use gtk4::{self as gtk, prelude::*};
use std::cell::RefCell;
use std::rc::Rc;

pub fn show_preferences_window(
    parent: &gtk::ApplicationWindow,
    state: Rc<RefCell<AppState>>,
    panel: ResultsPanel,
) {
    let window = gtk::Window::builder()
        .title("Preferences")
        .transient_for(parent)
        .modal(true)
        .default_width(420)
        .default_height(220)
        .resizable(false)
        .build();

    let main_vbox = gtk::Box::new(gtk::Orientation::Vertical, 0);

    let vbox = gtk::Box::new(gtk::Orientation::Vertical, 15);
    vbox.set_vexpand(true);
    vbox.set_margin_top(20);
    vbox.set_margin_bottom(20);
    vbox.set_margin_start(20);
    vbox.set_margin_end(20);

    // 1. Display decimals
    let dec_label = gtk::Label::new(Some("Result Decimal Places:"));
    dec_label.set_halign(gtk::Align::Start);
    vbox.append(&dec_label);

    let dec_spin = gtk::SpinButton::with_range(0.0, 6.0, 1.0);
    dec_spin.set_value(state.borrow().config.decimals as f64);
    let s_dec = state.clone();
    let panel_dec = panel.clone();
    dec_spin.connect_value_changed(move |sp| {
        {
            let mut st = s_dec.borrow_mut();
            st.config.decimals = sp.value() as usize;
            st.save_config();
        }
        panel_dec.refresh();
    });
    vbox.append(&dec_spin);

    vbox.append(&gtk::Separator::new(gtk::Orientation::Horizontal));

    // 2. Verbose logging
    let check_verbose = gtk::CheckButton::with_label("Verbose Console Logging");
    check_verbose.set_active(state.borrow().config.verbose_logging);
    let s_verb = state.clone();
    check_verbose.connect_toggled(move |c| {
        {
            let mut st = s_verb.borrow_mut();
            st.config.verbose_logging = c.is_active();
            st.save_config();
        }
        logger::set_verbose(c.is_active());
    });
    vbox.append(&check_verbose);

    main_vbox.append(&vbox);

    // Footer
    let footer = gtk::Box::new(gtk::Orientation::Horizontal, 10);
    footer.set_margin_top(10);
    footer.set_margin_bottom(10);
    footer.set_margin_end(10);
    footer.set_halign(gtk::Align::End);

    let btn_close = gtk::Button::with_label("Close");
    let win_clone = window.clone();
    btn_close.connect_clicked(move |_| win_clone.close());
    footer.append(&btn_close);
    main_vbox.append(&footer);

    window.set_child(Some(&main_vbox));
    window.present();
}
