//! Device status as reported by `litra devices --json`.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GlowError, Result};

/// Name shown when the tool does not report one.
pub const DEFAULT_DEVICE_NAME: &str = "Litra Glow";

/// Current state of the attached light.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceStatus {
    pub name: String,
    pub serial: Option<String>,
    pub is_on: bool,
    /// Brightness in percent, mapped onto the 10-100 preset scale.
    pub brightness: Option<i64>,
    /// Color temperature in Kelvin.
    pub temperature: Option<i64>,
}

/// One element of the tool's device array. Every field decodes on its own:
/// a missing or mistyped value becomes `None` instead of failing the record.
#[derive(Debug, Deserialize)]
struct ReportedDevice {
    #[serde(default, deserialize_with = "lenient")]
    device_type_display: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    serial_number: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    is_on: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    brightness_in_lumen: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    minimum_brightness_in_lumen: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    maximum_brightness_in_lumen: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    temperature_in_kelvin: Option<f64>,
}

fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl From<ReportedDevice> for DeviceStatus {
    fn from(device: ReportedDevice) -> Self {
        let brightness = match (
            device.brightness_in_lumen,
            device.minimum_brightness_in_lumen,
            device.maximum_brightness_in_lumen,
        ) {
            (Some(lumen), Some(min), Some(max)) => brightness_percentage(lumen, min, max),
            _ => None,
        };

        Self {
            name: device
                .device_type_display
                .unwrap_or_else(|| DEFAULT_DEVICE_NAME.to_string()),
            serial: device.serial_number,
            is_on: device.is_on.unwrap_or(false),
            brightness,
            temperature: device.temperature_in_kelvin.and_then(to_integer),
        }
    }
}

/// Decode the output of `devices --json`.
///
/// Returns `Ok(None)` for an empty array and [`GlowError::ParseFailure`]
/// when the text is not a JSON array whose first element is an object.
pub fn parse_devices_json(stdout: &str) -> Result<Option<DeviceStatus>> {
    let value: Value =
        serde_json::from_str(stdout).map_err(|e| GlowError::ParseFailure(e.to_string()))?;

    let Value::Array(devices) = value else {
        return Err(GlowError::ParseFailure(
            "expected a JSON array of devices".to_string(),
        ));
    };

    let Some(first) = devices.into_iter().next() else {
        return Ok(None);
    };

    if !first.is_object() {
        return Err(GlowError::ParseFailure(
            "device entry is not a JSON object".to_string(),
        ));
    }

    let reported: ReportedDevice =
        serde_json::from_value(first).map_err(|e| GlowError::ParseFailure(e.to_string()))?;
    Ok(Some(reported.into()))
}

/// Round half up, so `-2.5` becomes `-2` and `2.5` becomes `3`.
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

#[allow(clippy::cast_possible_truncation)]
fn to_integer(x: f64) -> Option<i64> {
    let rounded = round_half_up(x);
    rounded.is_finite().then_some(rounded as i64)
}

/// Map a lumen reading onto the 10-100% scale and snap it to the nearest 10.
///
/// The result is not clamped: readings outside `[min, max]` map outside
/// `[10, 100]`. Returns `None` when the mapping is undefined (`min == max`).
pub fn brightness_percentage(lumen: f64, min: f64, max: f64) -> Option<i64> {
    let percentage = round_half_up(((lumen - min) / (max - min)) * 90.0 + 10.0);
    to_integer(round_half_up(percentage / 10.0) * 10.0)
}
