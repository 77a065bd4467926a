// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));

    Styles::styled()
        .header(fg(colors::codes::HEADER))
        .usage(fg(colors::codes::HEADER))
        .literal(fg(colors::codes::LITERAL))
        .placeholder(fg(colors::codes::CONTEXT))
        .valid(fg(colors::codes::CONTEXT))
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_report}
  {build}       Build the dashboard dataset
  {taxonomy}    Show the client/project mapping

{header_setup}
  {init}        Write a starter configuration
  {schema}      Output JSON Schema for the dataset
  {completion}  Generate shell completions
",
        header_report = colors::header("Reporting:"),
        header_setup = colors::header("Setup:"),
        build = colors::literal("build"),
        taxonomy = colors::literal("taxonomy"),
        init = colors::literal("init"),
        schema = colors::literal("schema"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  projboard init                                   Write .projboard/config.toml
  projboard taxonomy --query                       Print the issue export query
  projboard build --issues <file> --entries <file>  Build dashboard.json",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
