//! Theme system for human-mode output.

use console::Style;

/// Visual theme for glowctl human-mode output.
///
/// Centralizes colors and styles for consistent rendering.
#[derive(Debug, Clone)]
pub struct GlowTheme {
    // Brand colors
    pub accent: Style,
    pub success: Style,
    pub error: Style,
    pub warning: Style,
    pub muted: Style,

    // Component styles
    pub header: Style,
    pub label: Style,
    pub value: Style,
    pub current: Style,
    pub light_on: Style,
    pub light_off: Style,
}

impl Default for GlowTheme {
    fn default() -> Self {
        Self {
            accent: Style::new().cyan(),
            success: Style::new().green().bold(),
            error: Style::new().red().bold(),
            warning: Style::new().yellow().bold(),
            muted: Style::new().dim(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold(),
            current: Style::new().green().bold(),
            light_on: Style::new().yellow().bold(),
            light_off: Style::new().dim(),
        }
    }
}
