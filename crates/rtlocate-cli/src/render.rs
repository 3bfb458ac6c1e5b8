use std::io::IsTerminal;
use std::path::PathBuf;

use anstyle::{AnsiColor, Effects, Style};
use rtlocate_core::DotnetEnvironmentInfo;
use rtlocate_resolver::{DllResolution, Selection};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum OutputStyle {
    Plain,
    Rich,
}

pub(crate) fn resolve_output_style(stdout_is_tty: bool, no_color: bool) -> OutputStyle {
    if stdout_is_tty && !no_color {
        OutputStyle::Rich
    } else {
        OutputStyle::Plain
    }
}

pub(crate) fn current_output_style() -> OutputStyle {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty());
    resolve_output_style(std::io::stdout().is_terminal(), no_color)
}

fn status_badge(status: &str) -> (&'static str, Style) {
    match status {
        "ok" => ("[OK]", Style::new().fg_color(Some(AnsiColor::Green.into()))),
        "warn" => ("[WARN]", Style::new().fg_color(Some(AnsiColor::Yellow.into()))),
        _ => ("[..]", Style::new().fg_color(Some(AnsiColor::BrightBlack.into()))),
    }
}

fn section_style() -> Style {
    Style::new()
        .fg_color(Some(AnsiColor::BrightBlue.into()))
        .effects(Effects::BOLD)
}

fn colorize(style: Style, text: &str) -> String {
    format!("{}{}{}", style.render(), text, style.render_reset())
}

pub(crate) fn render_status_line(style: OutputStyle, status: &str, message: &str) -> String {
    match style {
        OutputStyle::Plain => message.to_string(),
        OutputStyle::Rich => {
            let (badge, badge_style) = status_badge(status);
            format!("{} {message}", colorize(badge_style, badge))
        }
    }
}

fn render_section_header(style: OutputStyle, title: &str) -> String {
    match style {
        OutputStyle::Plain => format!("{title}:"),
        OutputStyle::Rich => colorize(section_style(), &format!("== {title} ==")),
    }
}

pub(crate) fn format_probe_lines(directories: &[PathBuf]) -> Vec<String> {
    directories
        .iter()
        .map(|dir| dir.display().to_string())
        .collect()
}

pub(crate) fn format_explain_lines(resolution: &DllResolution, style: OutputStyle) -> Vec<String> {
    let mut lines = vec![render_status_line(
        style,
        "step",
        &format!("roll-forward: {}", resolution.roll_forward),
    )];

    for framework in &resolution.frameworks {
        let requested = format!("{} {}", framework.desired.name, framework.desired.version);
        let line = match &framework.selection {
            Selection::Framework(installed) => render_status_line(
                style,
                "ok",
                &format!(
                    "{requested} -> {} ({})",
                    installed.version,
                    installed.install_dir().display()
                ),
            ),
            Selection::Absent => render_status_line(
                style,
                "warn",
                &format!("{requested} -> absent (assuming self-contained)"),
            ),
        };
        lines.push(line);
    }

    lines.push(render_section_header(style, "probe order"));
    lines.extend(
        format_probe_lines(&resolution.probe_directories)
            .into_iter()
            .map(|dir| format!("  {dir}")),
    );
    lines
}

pub(crate) fn format_info_lines(info: &DotnetEnvironmentInfo, style: OutputStyle) -> Vec<String> {
    let mut lines = vec![render_status_line(
        style,
        "step",
        &format!("host: {} (commit {})", info.host_version, info.commit_hash),
    )];

    lines.push(render_section_header(style, "sdks"));
    if info.sdks.is_empty() {
        lines.push("  (none)".to_string());
    }
    for sdk in &info.sdks {
        lines.push(format!("  {} [{}]", sdk.version, sdk.path.display()));
    }

    lines.push(render_section_header(style, "frameworks"));
    if info.frameworks.is_empty() {
        lines.push("  (none)".to_string());
    }
    for framework in &info.frameworks {
        lines.push(format!(
            "  {} {} [{}]",
            framework.name,
            framework.version,
            framework.path.display()
        ));
    }

    lines
}
