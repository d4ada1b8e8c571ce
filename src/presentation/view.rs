// Terminal rendering of a session snapshot
use crate::application::session::SessionState;
use crate::presentation::theme::Theme;
use std::fmt::Write;

pub fn format_languages(state: &SessionState, theme: &Theme) -> String {
    let mut output = String::new();

    if state.languages.is_empty() {
        writeln!(output, "  Loading languages...").ok();
        return output;
    }

    writeln!(output, "{}", (theme.title)("Supported languages")).ok();
    writeln!(output, "  {}", (theme.line)(&"⸺".repeat(20))).ok();
    for language in &state.languages {
        writeln!(
            output,
            "  {:<8} {}",
            (theme.code)(&language.id),
            (theme.name)(&language.name)
        )
        .ok();
    }

    output
}

pub fn format_translation(text: &str, state: &SessionState, theme: &Theme) -> String {
    let mut output = String::new();

    writeln!(output, "{}", (theme.title)("Original")).ok();
    writeln!(output, "  {}", text).ok();
    writeln!(output, "{}", (theme.title)("Translated")).ok();
    writeln!(output, "  {}", (theme.result)(&state.translated_text)).ok();

    output
}

/// Alert box for a surfaced error; empty when nothing is raised.
pub fn format_alert(state: &SessionState, theme: &Theme) -> String {
    if !state.has_error {
        return String::new();
    }
    format!("{} {}\n", (theme.alert)("✘ Error:"), state.error_message)
}
