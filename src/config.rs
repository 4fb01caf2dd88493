use log::LevelFilter;
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

pub const DEFAULT_SMOOTHING_FACTOR: f64 = 0.15;
pub const DEFAULT_MAGNETIC_STRENGTH: f64 = 0.25;
pub const DEFAULT_TILT_X_DEG: f64 = 8.0;
pub const DEFAULT_TILT_Y_DEG: f64 = 10.0;
pub const DEFAULT_TILT_PERSPECTIVE_PX: f64 = 900.0;
pub const DEFAULT_CAROUSEL_INTERVAL_MS: u32 = 5_000;
pub const DEFAULT_PALETTE_EXIT_MS: u32 = 200;
pub const DEFAULT_SLIDE_EXIT_MS: u32 = 350;
pub const DEFAULT_REVEAL_STAGGER_MS: u32 = 80;
pub const DEFAULT_PALETTE_TOGGLE_KEY: &str = "k";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

const SMOOTHING_FACTOR_BOUNDS: (f64, f64) = (0.01, 1.0);
const MAGNETIC_STRENGTH_BOUNDS: (f64, f64) = (0.0, 1.0);
const TILT_DEG_BOUNDS: (f64, f64) = (0.0, 45.0);
const TILT_PERSPECTIVE_PX_BOUNDS: (f64, f64) = (100.0, 5_000.0);
const CAROUSEL_INTERVAL_MS_BOUNDS: (u32, u32) = (250, 120_000);
const PALETTE_EXIT_MS_BOUNDS: (u32, u32) = (0, 2_000);
const SLIDE_EXIT_MS_BOUNDS: (u32, u32) = (0, 2_000);
const REVEAL_STAGGER_MS_BOUNDS: (u32, u32) = (0, 1_000);

/// Tunables for every motion effect on the page.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionConfig {
    pub smoothing_factor: f64,
    pub magnetic_strength: f64,
    pub tilt_x_deg: f64,
    pub tilt_y_deg: f64,
    pub tilt_perspective_px: f64,
    pub carousel_interval_ms: u32,
    pub palette_exit_ms: u32,
    pub slide_exit_ms: u32,
    pub reveal_stagger_ms: u32,
    pub palette_toggle_key: String,
    pub log_level: LevelFilter,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            smoothing_factor: DEFAULT_SMOOTHING_FACTOR,
            magnetic_strength: DEFAULT_MAGNETIC_STRENGTH,
            tilt_x_deg: DEFAULT_TILT_X_DEG,
            tilt_y_deg: DEFAULT_TILT_Y_DEG,
            tilt_perspective_px: DEFAULT_TILT_PERSPECTIVE_PX,
            carousel_interval_ms: DEFAULT_CAROUSEL_INTERVAL_MS,
            palette_exit_ms: DEFAULT_PALETTE_EXIT_MS,
            slide_exit_ms: DEFAULT_SLIDE_EXIT_MS,
            reveal_stagger_ms: DEFAULT_REVEAL_STAGGER_MS,
            palette_toggle_key: DEFAULT_PALETTE_TOGGLE_KEY.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

/// Each field is kept as raw JSON so one wrong-typed value only loses itself.
#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct MotionOverrides {
    smoothing_factor: Option<Value>,
    magnetic_strength: Option<Value>,
    tilt_x_deg: Option<Value>,
    tilt_y_deg: Option<Value>,
    tilt_perspective_px: Option<Value>,
    carousel_interval_ms: Option<Value>,
    palette_exit_ms: Option<Value>,
    slide_exit_ms: Option<Value>,
    reveal_stagger_ms: Option<Value>,
    palette_toggle_key: Option<Value>,
    log_level: Option<Value>,
}

impl MotionConfig {
    /// Builds a config from the JSON held in the mount node's `data-motion`
    /// attribute. Out-of-range or malformed values keep their defaults.
    pub fn from_overrides(raw: Option<&str>) -> Self {
        let raw = raw.map(str::trim).filter(|value| !value.is_empty());
        let overrides = match raw {
            Some(raw) => serde_json::from_str::<MotionOverrides>(raw).unwrap_or_else(|err| {
                log::warn!("ignoring malformed motion config: {err}");
                MotionOverrides::default()
            }),
            None => MotionOverrides::default(),
        };

        Self::with_overrides(overrides)
    }

    fn with_overrides(overrides: MotionOverrides) -> Self {
        let defaults = Self::default();

        Self {
            smoothing_factor: f64_with_bounds(
                overrides.smoothing_factor,
                defaults.smoothing_factor,
                SMOOTHING_FACTOR_BOUNDS,
            ),
            magnetic_strength: f64_with_bounds(
                overrides.magnetic_strength,
                defaults.magnetic_strength,
                MAGNETIC_STRENGTH_BOUNDS,
            ),
            tilt_x_deg: f64_with_bounds(
                overrides.tilt_x_deg,
                defaults.tilt_x_deg,
                TILT_DEG_BOUNDS,
            ),
            tilt_y_deg: f64_with_bounds(
                overrides.tilt_y_deg,
                defaults.tilt_y_deg,
                TILT_DEG_BOUNDS,
            ),
            tilt_perspective_px: f64_with_bounds(
                overrides.tilt_perspective_px,
                defaults.tilt_perspective_px,
                TILT_PERSPECTIVE_PX_BOUNDS,
            ),
            carousel_interval_ms: u32_with_bounds(
                overrides.carousel_interval_ms,
                defaults.carousel_interval_ms,
                CAROUSEL_INTERVAL_MS_BOUNDS,
            ),
            palette_exit_ms: u32_with_bounds(
                overrides.palette_exit_ms,
                defaults.palette_exit_ms,
                PALETTE_EXIT_MS_BOUNDS,
            ),
            slide_exit_ms: u32_with_bounds(
                overrides.slide_exit_ms,
                defaults.slide_exit_ms,
                SLIDE_EXIT_MS_BOUNDS,
            ),
            reveal_stagger_ms: u32_with_bounds(
                overrides.reveal_stagger_ms,
                defaults.reveal_stagger_ms,
                REVEAL_STAGGER_MS_BOUNDS,
            ),
            palette_toggle_key: non_empty_string(overrides.palette_toggle_key)
                .unwrap_or(defaults.palette_toggle_key),
            log_level: non_empty_string(overrides.log_level)
                .and_then(|value| LevelFilter::from_str(&value).ok())
                .unwrap_or(defaults.log_level),
        }
    }
}

fn f64_with_bounds(value: Option<Value>, default: f64, bounds: (f64, f64)) -> f64 {
    value
        .and_then(|value| value.as_f64())
        .filter(|value| value.is_finite() && (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn u32_with_bounds(value: Option<Value>, default: u32, bounds: (u32, u32)) -> u32 {
    value
        .and_then(|value| value.as_u64())
        .and_then(|value| u32::try_from(value).ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn non_empty_string(value: Option<Value>) -> Option<String> {
    value
        .as_ref()
        .and_then(Value::as_str)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
