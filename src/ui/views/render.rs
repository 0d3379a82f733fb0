use njk::RunEvent;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// One line (newline included) describing `event`
pub fn render_event(event: &RunEvent, supports_color: bool, supports_unicode: bool) -> String {
    let arrow = if supports_unicode { "→" } else { "->" };

    match event {
        RunEvent::RenderStarted { files, mode } => format!(
            "{} {} {} file(s)\n",
            Icon::Progress.colored(supports_color, supports_unicode),
            capitalize(mode),
            files
        ),
        RunEvent::FileWritten { source, output } => format!(
            "{} {} {} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            source,
            arrow,
            ColoredText::dim(output.as_str()).render(supports_color)
        ),
        RunEvent::FileFailed { source, message } => format!(
            "{} {}: {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            source,
            ColoredText::error(message.as_str()).render(supports_color)
        ),
        RunEvent::RenderComplete { written, errors } => {
            if *errors > 0 {
                format!(
                    "{} Done: {} written, {}\n",
                    Icon::Warning.colored(supports_color, supports_unicode),
                    written,
                    ColoredText::error(format!("{errors} failed")).render(supports_color)
                )
            } else {
                format!(
                    "{} Done: {}\n",
                    Icon::Success.colored(supports_color, supports_unicode),
                    ColoredText::success(format!("{written} written")).render(supports_color)
                )
            }
        }
        RunEvent::WatchStarted {
            root,
            templates,
            layouts,
            ..
        } => format!(
            "{} Watching {} ({} templates, {} layouts)\n",
            Icon::Watch.colored(supports_color, supports_unicode),
            root,
            templates,
            layouts
        ),
        RunEvent::FileAdded { path, role } => format!(
            "{} Added {}: {}\n",
            Icon::Add.colored(supports_color, supports_unicode),
            role,
            path
        ),
        RunEvent::FileChanged { path, role } => format!(
            "{} Changed {}: {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            role,
            path
        ),
        RunEvent::Error { message } => format!(
            "{} Error: {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            message
        ),
        RunEvent::Shutdown => format!(
            "{} Watch stopped.\n",
            Icon::Watch.colored(supports_color, supports_unicode)
        ),
    }
}

/// Whether the line for `event` belongs on stderr
pub fn is_error_event(event: &RunEvent) -> bool {
    matches!(event, RunEvent::FileFailed { .. } | RunEvent::Error { .. })
}

/// Non-fatal configuration warning line
pub fn render_warning(message: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}\n",
        Icon::Warning.colored(supports_color, supports_unicode),
        ColoredText::warning(message).render(supports_color)
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
