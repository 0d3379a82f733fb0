//! Mode value object - what the engine produces for each template
//!
//! - `Render`: final markup, one output file per template
//! - `Precompile`: a script unit per template, optionally bundled

/// Output mode of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Render templates to markup
    Render,
    /// Precompile templates to script units
    #[default]
    Precompile,
}

impl Mode {
    /// Select the mode from the `--render` flag; its absence means precompile
    pub fn from_render_flag(render: bool) -> Self {
        if render {
            Mode::Render
        } else {
            Mode::Precompile
        }
    }

    pub fn is_render(&self) -> bool {
        matches!(self, Mode::Render)
    }

    /// Extension used for outputs when none is given explicitly
    pub fn default_extension(&self) -> &'static str {
        match self {
            Mode::Render => "html",
            Mode::Precompile => "js",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Render => write!(f, "render"),
            Mode::Precompile => write!(f, "precompile"),
        }
    }
}
