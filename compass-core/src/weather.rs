//! Current weather as reported by the caller.

/// Broad sky condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WeatherCondition {
    /// Clear skies.
    #[default]
    Sunny,
    /// Overcast but dry.
    Cloudy,
    /// Rain; weather-sensitive places are deferred.
    Rainy,
}

/// Weather snapshot for the planned day.
///
/// # Examples
/// ```
/// use compass_core::{WeatherCondition, WeatherState};
///
/// let weather = WeatherState::new(WeatherCondition::Rainy, 14.0);
/// assert!(weather.is_rainy());
/// assert!(!WeatherState::default().is_rainy());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeatherState {
    /// Sky condition.
    pub condition: WeatherCondition,
    /// Air temperature in degrees Celsius.
    #[cfg_attr(feature = "serde", serde(default))]
    pub temperature_c: f32,
}

impl Default for WeatherState {
    fn default() -> Self {
        Self::new(WeatherCondition::Sunny, 22.0)
    }
}

impl WeatherState {
    /// Construct a weather snapshot.
    pub const fn new(condition: WeatherCondition, temperature_c: f32) -> Self {
        Self {
            condition,
            temperature_c,
        }
    }

    /// Whether it is raining.
    pub fn is_rainy(&self) -> bool {
        self.condition == WeatherCondition::Rainy
    }

    /// Whether plans should be adapted to the weather at all.
    pub fn is_adverse(&self) -> bool {
        self.condition != WeatherCondition::Sunny
    }
}
