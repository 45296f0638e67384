use std::{cell::Cell, fmt::Display};

use crate::terminal::colors;
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "netmap::print";

/// Width of the keys in a device tree, dots included.
const TREE_KEY_WIDTH: usize = 8;

thread_local! {
    pub static GLOBAL_KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for &str {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for String {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn title(q_level: u8) {
    if q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ NETMAP v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.color(colors::get().primary).bold();
    let sep: ColoredString = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .color(colors::get().separator);

    print(&format!("{}{}{}", sep, text, sep));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let separator = colors::get().separator;
    let line: String = format!(
        "{}{}{}",
        "─".repeat(left).color(separator),
        formatted.to_uppercase().color(colors::get().primary),
        "─".repeat(right).color(separator)
    );

    print(&line);
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).color(colors::get().separator);
    print(&format!("{}", sep));
}

/// Sets the key column width used by [`aligned_line`].
pub fn set_key_width(keys: &[&str]) {
    let width = keys.iter().map(|key| key.len()).max().unwrap_or(0);
    GLOBAL_KEY_WIDTH.set(width);
}

pub fn aligned_line<V>(key: &str, value: V)
where
    V: Display + WithDefaultColor,
{
    let separator = colors::get().separator;
    let whitespace: String = ".".repeat((GLOBAL_KEY_WIDTH.get() + 1).saturating_sub(key.len()));
    let colon: String = format!("{}{}", whitespace.color(separator), ":".color(separator));
    let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
    print_status(format!("{}{} {}", key.color(colors::get().primary), colon, value));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::get().separator);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    print(&message);
}

pub fn tree_head(idx: usize, name: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::get().accent));
    let output: String = format!("{} {}", idx_str.color(colors::get().separator), name);
    print(&output);
}

pub fn as_tree_one_level(key_value_pair: Vec<(String, ColoredString)>) {
    let separator = colors::get().separator;
    for (i, (key, value)) in key_value_pair.iter().enumerate() {
        let last: bool = i + 1 == key_value_pair.len();
        let branch: ColoredString = if !last {
            "├─".color(separator)
        } else {
            "└─".color(separator)
        };
        let dots: String = ".".repeat(TREE_KEY_WIDTH.saturating_sub(key.len()));
        let output: String = format!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            dots.color(separator),
            ":".color(separator),
            value
        );
        print(&output);
    }
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}{}", space, msg, space));
}

pub fn no_results(hint: &str) {
    centerln(&format!("{}", "No devices found.".color(colors::get().error).bold()));
    centerln(&format!("{}", hint.color(colors::get().muted).italic()));
}

pub fn end_of_program() {
    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::get().separator)
    ));
}
