use crate::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, cli_color: Option<ColorWhen>) -> Self {
        Self::from_caps(json, cli_color, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        cli_color: Option<ColorWhen>,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => caps.supports_color && !caps.is_ci,
        };

        Self {
            json,
            color: color && !json,
            unicode: caps.supports_unicode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(supports_color: bool, is_ci: bool) -> TerminalCapabilities {
        TerminalCapabilities {
            supports_color,
            supports_unicode: true,
            is_ci,
        }
    }

    #[test]
    fn auto_follows_terminal() {
        assert!(UiContext::from_caps(false, None, caps(true, false)).color);
        assert!(!UiContext::from_caps(false, None, caps(true, true)).color);
    }

    #[test]
    fn explicit_color_wins() {
        let ctx = UiContext::from_caps(false, Some(ColorWhen::Always), caps(false, true));
        assert!(ctx.color);
        let ctx = UiContext::from_caps(false, Some(ColorWhen::Never), caps(true, false));
        assert!(!ctx.color);
    }

    #[test]
    fn json_output_is_never_colored() {
        let ctx = UiContext::from_caps(true, Some(ColorWhen::Always), caps(true, false));
        assert!(!ctx.color);
    }
}
