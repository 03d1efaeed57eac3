//! Fixed brightness and temperature presets offered by the pickers.

use serde::Serialize;

/// A selectable preset value with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub value: i64,
    pub label: &'static str,
}

impl Preset {
    const fn new(value: i64, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Which preset table a picker shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetKind {
    Brightness,
    Temperature,
}

impl PresetKind {
    /// The preset table for this kind.
    pub const fn presets(self) -> &'static [Preset] {
        match self {
            Self::Brightness => BRIGHTNESS_PRESETS,
            Self::Temperature => TEMPERATURE_PRESETS,
        }
    }

    /// Unit suffix appended to values ("%" or "K").
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Brightness => "%",
            Self::Temperature => "K",
        }
    }

    /// Lower-case name used in output and JSON.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Brightness => "brightness",
            Self::Temperature => "temperature",
        }
    }

    /// Full display title for a preset, e.g. "50% - Medium".
    pub fn title(self, preset: &Preset) -> String {
        format!("{}{} - {}", preset.value, self.unit(), preset.label)
    }
}

/// Ten brightness steps, 10% apart.
pub const BRIGHTNESS_PRESETS: &[Preset] = &[
    Preset::new(10, "Very Dim"),
    Preset::new(20, "Dim"),
    Preset::new(30, "Low"),
    Preset::new(40, "Medium Low"),
    Preset::new(50, "Medium"),
    Preset::new(60, "Medium High"),
    Preset::new(70, "Bright"),
    Preset::new(80, "Very Bright"),
    Preset::new(90, "Near Maximum"),
    Preset::new(100, "Maximum"),
];

/// 2700K to 6500K in 100K steps.
pub const TEMPERATURE_PRESETS: &[Preset] = &[
    Preset::new(2700, "Warm Candlelight"),
    Preset::new(2800, "Warm"),
    Preset::new(2900, "Warm"),
    Preset::new(3000, "Warm White"),
    Preset::new(3100, "Warm White"),
    Preset::new(3200, "Studio Warm"),
    Preset::new(3300, "Studio Warm"),
    Preset::new(3400, "Neutral Warm"),
    Preset::new(3500, "Neutral Warm"),
    Preset::new(3600, "Neutral"),
    Preset::new(3700, "Neutral"),
    Preset::new(3800, "Neutral"),
    Preset::new(3900, "Neutral"),
    Preset::new(4000, "Cool White"),
    Preset::new(4100, "Cool White"),
    Preset::new(4200, "Cool White"),
    Preset::new(4300, "Cool White"),
    Preset::new(4400, "Cool White"),
    Preset::new(4500, "Daylight"),
    Preset::new(4600, "Daylight"),
    Preset::new(4700, "Daylight"),
    Preset::new(4800, "Daylight"),
    Preset::new(4900, "Daylight"),
    Preset::new(5000, "Bright Daylight"),
    Preset::new(5100, "Bright Daylight"),
    Preset::new(5200, "Bright Daylight"),
    Preset::new(5300, "Bright Daylight"),
    Preset::new(5400, "Bright Daylight"),
    Preset::new(5500, "Mid-Day Sun"),
    Preset::new(5600, "Mid-Day Sun"),
    Preset::new(5700, "Mid-Day Sun"),
    Preset::new(5800, "Mid-Day Sun"),
    Preset::new(5900, "Mid-Day Sun"),
    Preset::new(6000, "Cool Daylight"),
    Preset::new(6100, "Cool Daylight"),
    Preset::new(6200, "Cool Daylight"),
    Preset::new(6300, "Cool Daylight"),
    Preset::new(6400, "Cool Daylight"),
    Preset::new(6500, "Overcast Sky"),
];
