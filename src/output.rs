//! Output Control Module
//!
//! Line-oriented, human-readable report rendering shared by both binaries:
//! - status glyphs (emoji by default, plain ASCII on request)
//! - colored status lines for SUCCESS / FAIL / WARNING / info
//! - section rules and summary rows

use colored::*;
use std::sync::atomic::{AtomicBool, Ordering};

/// Width of the `=` rule printed between report sections.
pub const RULE_WIDTH: usize = 60;

/// When true, all glyphs use plain ASCII instead of emoji.
static ASCII_MODE: AtomicBool = AtomicBool::new(false);

/// Initialize output modes from config (set once at startup).
pub fn init(ascii: bool, no_color: bool) {
    ASCII_MODE.store(ascii, Ordering::SeqCst);
    if no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }
}

#[inline]
pub fn is_ascii_mode() -> bool {
    ASCII_MODE.load(Ordering::SeqCst)
}

/// Status tag attached to a printed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Fail,
    Warning,
    Info,
}

pub struct Glyphs;

impl Glyphs {
    pub fn success() -> &'static str {
        if is_ascii_mode() {
            "[OK]"
        } else {
            "✅"
        }
    }
    pub fn fail() -> &'static str {
        if is_ascii_mode() {
            "[FAIL]"
        } else {
            "❌"
        }
    }
    pub fn warning() -> &'static str {
        if is_ascii_mode() {
            "[WARN]"
        } else {
            "⚠️ "
        }
    }
    pub fn info() -> &'static str {
        if is_ascii_mode() {
            "[..]"
        } else {
            "🔍"
        }
    }
    pub fn rocket() -> &'static str {
        if is_ascii_mode() {
            ">>"
        } else {
            "🚀"
        }
    }
    pub fn chart() -> &'static str {
        if is_ascii_mode() {
            "=="
        } else {
            "📊"
        }
    }
    pub fn party() -> &'static str {
        if is_ascii_mode() {
            "**"
        } else {
            "🎉"
        }
    }

    /// Glyph for a boolean outcome in the summary table.
    pub fn outcome(passed: bool) -> &'static str {
        if passed {
            Self::success()
        } else {
            Self::fail()
        }
    }
}

/// Render a status line without printing it.
pub fn format_status(message: &str, status: Status) -> String {
    match status {
        Status::Success => format!("{} {}", Glyphs::success(), message.green()),
        Status::Fail => format!("{} {}", Glyphs::fail(), message.red()),
        Status::Warning => format!("{} {}", Glyphs::warning(), message.yellow()),
        Status::Info => format!("{} {}", Glyphs::info(), message),
    }
}

pub fn print_status(message: &str, status: Status) {
    println!("{}", format_status(message, status));
}

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Blank line followed by a section rule.
pub fn print_section_break() {
    println!();
    println!("{}", rule().dimmed());
}

pub fn print_banner(message: &str) {
    println!("{} {}", Glyphs::rocket(), message.bold());
    println!("{}", rule().dimmed());
}

pub fn print_heading(message: &str) {
    println!("{} {}", Glyphs::chart(), message.bold());
    println!("{}", rule().dimmed());
}
