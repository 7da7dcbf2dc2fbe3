use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, Frame, Orientation, ScrolledWindow, TextView};
use gtk4::Box as GtkBox;
use gtk4::{Revealer, RevealerTransitionType};
use std::cell::RefCell;
use std::rc::Rc;

pub mod chem;
pub mod config;
pub mod io;
pub mod menu;
pub mod model;
pub mod panels;
pub mod state;
pub mod ui;
pub mod utils;

use state::AppState;
use ui::results_view::ResultsPanel;

fn main() {
    let app = Application::builder()
        .application_id("com.example.icpcalc")
        .build();

    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &Application) {
    let mut initial_state = AppState::new();
    let config_msg = initial_state.load_config();
    let verbose = initial_state.config.verbose_logging;
    let state = Rc::new(RefCell::new(initial_state));

    let window = ApplicationWindow::builder()
        .application(app)
        .title("ICP-OES Result Calculator")
        .default_width(1200)
        .default_height(800)
        .build();

    // 1. TOP LEVEL: Vertical Box (Menu on top, Main Content below)
    let root_vbox = GtkBox::new(Orientation::Vertical, 0);
    window.set_child(Some(&root_vbox));

    // 2. MAIN CONTENT: Horizontal Box (Sidebar | Right_Panel)
    let main_hbox = GtkBox::new(Orientation::Horizontal, 0);

    // --- Right Panel (Element Grid + Results + Console) ---
    let right_vbox = GtkBox::new(Orientation::Vertical, 0);
    right_vbox.set_hexpand(true); // Allow this to take remaining width

    // Console
    let info_frame = Frame::new(None);
    let console_view = TextView::builder()
        .editable(false).cursor_visible(false).monospace(true)
        .left_margin(10).right_margin(10).top_margin(10).bottom_margin(10)
        .build();
    let scroll_win = ScrolledWindow::builder()
        .min_content_height(120)
        .child(&console_view)
        .build();
    info_frame.set_child(Some(&scroll_win));

    // The logger writes into the console view from here on
    if let Err(e) = utils::logger::init(&console_view, verbose) {
        eprintln!("Logger init failed: {}", e);
    }
    log::info!("{}", config_msg);

    // Results area (text table + chart tabs)
    let results_panel = ResultsPanel::build(state.clone());

    // --- Left Panel (Sidebar) ---
    use panels::sidebar;
    let (sidebar_widget, selected_list) = sidebar::build(state.clone(), &results_panel);

    // Wrap sidebar in Revealer for animation
    let sidebar_revealer = Revealer::builder()
        .transition_type(RevealerTransitionType::SlideRight)
        .child(&sidebar_widget)
        .reveal_child(true) // Open by default
        .build();

    // Element grid rebuilds the sidebar list on every selection
    let grid_frame = ui::element_grid::build(state.clone(), &results_panel, &selected_list);

    right_vbox.append(&grid_frame);
    right_vbox.append(results_panel.widget());
    right_vbox.append(&info_frame);

    main_hbox.append(&sidebar_revealer);
    main_hbox.append(&right_vbox);

    // 3. Menu Bar
    let menu_bar =
        menu::build_menu_and_actions(app, &window, state.clone(), &results_panel, &selected_list);

    // 4. ACTION: Toggle Sidebar (F9)
    let toggle_action = gtk4::gio::SimpleAction::new("toggle_sidebar", None);
    let rev_weak = sidebar_revealer.downgrade();
    toggle_action.connect_activate(move |_, _| {
        if let Some(rev) = rev_weak.upgrade() {
            rev.set_reveal_child(!rev.reveals_child());
        }
    });
    app.add_action(&toggle_action);
    app.set_accels_for_action("app.toggle_sidebar", &["F9"]);

    // Assemble Root
    root_vbox.append(&menu_bar);
    root_vbox.append(&main_hbox);

    window.present();
}
