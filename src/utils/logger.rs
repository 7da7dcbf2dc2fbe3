// src/utils/logger.rs

use gtk4::prelude::*;
use gtk4::{glib, TextTagTable, TextView};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::sync::OnceLock;

static LOG_VIEW: OnceLock<glib::SendWeakRef<TextView>> = OnceLock::new();
static LOGGER: GtkLogger = GtkLogger;

struct GtkLogger;

fn ensure_tag(tag_table: &TextTagTable, name: &str, color: &str, bold: bool) {
  if tag_table.lookup(name).is_none() {
    let tag = gtk4::TextTag::new(Some(name));
    tag.set_property("foreground", color);
    if bold {
      tag.set_property("weight", 700);
    }
    tag_table.add(&tag);
  }
}

/// Routes the log crate into the console TextView. Debug lines only
/// show up when verbose logging is enabled.
pub fn init(view: &TextView, verbose: bool) -> Result<(), SetLoggerError> {
  let buffer = view.buffer();
  let tag_table = buffer.tag_table();

  ensure_tag(&tag_table, "error", "#ff4444", true); // Soft Red, bold
  ensure_tag(&tag_table, "warn", "#ffbb33", false); // Soft Orange
  ensure_tag(&tag_table, "info", "#33b5e5", false); // Soft Blue
  ensure_tag(&tag_table, "debug", "#aaaaaa", false); // Gray

  let _ = LOG_VIEW.set(view.downgrade().into());
  log::set_logger(&LOGGER).map(|()| log::set_max_level(level_for(verbose)))
}

/// Flips the max level at runtime; wired to the preferences toggle.
pub fn set_verbose(verbose: bool) {
  log::set_max_level(level_for(verbose));
}

fn level_for(verbose: bool) -> LevelFilter {
  if verbose {
    LevelFilter::Debug
  } else {
    LevelFilter::Info
  }
}

impl log::Log for GtkLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record: &Record) {
    if self.enabled(record.metadata()) {
      let (icon, tag_name) = match record.level() {
        Level::Error => ("🔴", "error"), // Red Circle
        Level::Warn => ("🟠", "warn"),   // Orange Circle
        Level::Info => ("🔵", "info"),   // Blue Circle
        Level::Debug => ("⚪", "debug"), // White/Gray Circle
        Level::Trace => ("▫️", "debug"), // Small dot
      };

      // Format: "🔴  Could not read file"
      let msg = format!("{}  {}\n", icon, record.args());

      glib::MainContext::default().spawn_local(async move {
        if let Some(weak_ref) = LOG_VIEW.get() {
          if let Some(view) = weak_ref.upgrade() {
            let buffer = view.buffer();
            let mut end = buffer.end_iter();

            buffer.insert_with_tags_by_name(&mut end, &msg, &[tag_name]);

            // Auto-scroll
            let mark = buffer.create_mark(None, &buffer.end_iter(), false);
            view.scroll_to_mark(&mark, 0.0, true, 0.0, 1.0);
            buffer.delete_mark(&mark);
          }
        }
      });
    }
  }

  fn flush(&self) {}
}
