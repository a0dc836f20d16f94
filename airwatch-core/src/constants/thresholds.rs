//! Classification Breakpoints
//!
//! Band edges follow the dashboard's original conditional chains exactly:
//! temperature and humidity bands are closed on the comfortable side,
//! air-quality bands are half-open `[lower, upper)`.

// ===== TEMPERATURE BANDS (°C) =====

/// Readings strictly below this are "Cool".
pub const TEMP_COOL_BELOW_C: f64 = 18.0;

/// Upper edge (inclusive) of the "Comfortable" band.
pub const TEMP_COMFORTABLE_MAX_C: f64 = 24.0;

/// Upper edge (inclusive) of the "Warm" band; anything above is "Hot".
pub const TEMP_WARM_MAX_C: f64 = 28.0;

// ===== HUMIDITY BANDS (%RH) =====

/// Readings strictly below this are "Dry".
pub const HUMIDITY_DRY_BELOW_PCT: f64 = 30.0;

/// Upper edge (inclusive) of the "Comfortable" band.
pub const HUMIDITY_COMFORTABLE_MAX_PCT: f64 = 50.0;

/// Upper edge (inclusive) of "Slightly Humid"; anything above is "Very Humid".
pub const HUMIDITY_SLIGHTLY_HUMID_MAX_PCT: f64 = 70.0;

// ===== AIR QUALITY BANDS (index) =====

/// Exclusive upper bounds of the air-quality bands, in table order.
///
/// Excellent `< 100`, Good `< 200`, Moderate `< 300`,
/// Unhealthy for Sensitive Groups `< 400`, Unhealthy `< 500`,
/// Hazardous otherwise.
pub const AIR_QUALITY_BANDS: [u32; 5] = [100, 200, 300, 400, 500];

// ===== AGGREGATE CONCERN LIMITS =====

/// Temperature below this raises a concern ("too cold").
pub const TEMP_CONCERN_BELOW_C: f64 = 16.0;

/// Temperature above this raises a concern ("too hot").
pub const TEMP_CONCERN_ABOVE_C: f64 = 28.0;

/// Humidity below this raises a concern ("too dry").
pub const HUMIDITY_CONCERN_BELOW_PCT: f64 = 20.0;

/// Humidity above this raises a concern ("too humid").
pub const HUMIDITY_CONCERN_ABOVE_PCT: f64 = 70.0;

/// Air quality at or above this raises a concern.
pub const AIR_QUALITY_CONCERN_AT: u32 = 300;
