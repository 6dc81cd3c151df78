//! # 终端输出
//!
//! 统一的状态前缀、标题栏，以及晶格相关的输出行（计数、写出的文件）。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::{ColoredString, Colorize};
use std::path::Path;

const RULE_WIDTH: usize = 60;

fn status(tag: ColoredString, msg: &str) {
    println!("{} {}", tag, msg);
}

/// 错误写到 stderr
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

pub fn print_warning(msg: &str) {
    status("[WARN]".yellow().bold(), msg);
}

pub fn print_info(msg: &str) {
    status("[*]".blue().bold(), msg);
}

pub fn print_skip(msg: &str) {
    status("[SKIP]".dimmed(), msg);
}

pub fn print_done(msg: &str) {
    status("[DONE]".green().bold(), msg);
}

/// 格点、键和 Bravais 向量计数
pub fn print_counts(sites: usize, bonds: usize, vectors: usize) {
    status(
        "[*]".blue().bold(),
        &format!(
            "{} site(s), {} bond(s), {} Bravais vector(s)",
            sites.to_string().cyan(),
            bonds.to_string().cyan(),
            vectors.to_string().cyan()
        ),
    );
}

/// 写出文件，`kind` 为 "sites"、"bonds"、"plot" 等
pub fn print_written(kind: &str, path: &Path) {
    status("[OK]".green().bold(), &written_line(kind, path));
}

fn written_line(kind: &str, path: &Path) -> String {
    format!("{} {} {}", kind.dimmed(), "->".cyan(), path.display())
}

pub fn print_header(title: &str) {
    println!("\n{}", "═".repeat(RULE_WIDTH).dimmed());
    println!("  {}", title.bold());
    println!("{}\n", "═".repeat(RULE_WIDTH).dimmed());
}

pub fn print_separator() {
    println!("{}", "─".repeat(RULE_WIDTH).dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_written_line_plain() {
        colored::control::set_override(false);
        let line = written_line("bonds", Path::new("out/bonds.csv"));
        assert_eq!(line, "bonds -> out/bonds.csv");
    }
}
