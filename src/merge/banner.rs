//! Banner formatting for merged file blocks.

use std::fmt::Write as _;
use std::path::Path;

pub const RULE_WIDTH: usize = 80;
pub const RULE_CHAR: char = '=';

/// The separator: a newline, the rule, a newline.
pub fn separator() -> String {
    let mut sep = String::with_capacity(RULE_WIDTH + 2);
    sep.push('\n');
    sep.extend(std::iter::repeat(RULE_CHAR).take(RULE_WIDTH));
    sep.push('\n');
    sep
}

/// Header written before a file's content.
pub fn banner(path: &Path) -> String {
    let sep = separator();
    let mut out = String::with_capacity(2 * sep.len() + 16 + path.as_os_str().len());
    out.push('\n');
    out.push_str(&sep);
    let _ = writeln!(out, "File: {}", path.display());
    out.push_str(&sep);
    out.push('\n');
    out
}

/// A complete block: banner, verbatim content, trailing newline.
pub fn render_block(path: &Path, content: &str) -> String {
    let mut block = banner(path);
    block.reserve(content.len() + 1);
    block.push_str(content);
    block.push('\n');
    block
}
