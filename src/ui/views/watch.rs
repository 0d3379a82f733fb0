use njk::RunEvent;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::render::render_event;

pub fn render_watch_header(
    root: &str,
    pattern: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = ColoredText::info("njk watch").bold().render(supports_color);
    format!(
        "{} {}\nRoot: {}\nPattern: {}\nHint: Press Ctrl+C to stop\n\n",
        Icon::Watch.colored(supports_color, supports_unicode),
        title,
        root,
        pattern
    )
}

pub fn render_watch_event(
    timestamp: &str,
    event: &RunEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = format!("[{}]", timestamp);
    let line = render_event(event, supports_color, supports_unicode);

    match event {
        RunEvent::Shutdown => format!("\n{} {}", prefix, line),
        _ => format!("{} {}", prefix, line),
    }
}
