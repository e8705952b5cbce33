use crate::error::{Result, SettingsError};

/// Default recursion depth for secondary rays.
pub const MAX_CALC_COLOR_LEVEL: u32 = 10;

/// Default minimum attenuation worth tracing.
pub const MIN_CALC_COLOR_K: f64 = 0.001;

/// Bounds on the recursive shading.
///
/// Recursion stops at `max_level` levels, or earlier along any branch whose
/// accumulated attenuation falls below `min_k` on every channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracerSettings {
    max_level: u32,
    min_k: f64,
}

impl Default for TracerSettings {
    fn default() -> Self {
        Self {
            max_level: MAX_CALC_COLOR_LEVEL,
            min_k: MIN_CALC_COLOR_K,
        }
    }
}

impl TracerSettings {
    /// Creates validated settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_level` is zero or `min_k` is not in `(0, 1)`.
    pub fn new(max_level: u32, min_k: f64) -> Result<Self> {
        Self::default().with_max_level(max_level)?.with_min_k(min_k)
    }

    /// Sets the recursion depth.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_level` is zero.
    pub fn with_max_level(mut self, max_level: u32) -> Result<Self> {
        if max_level == 0 {
            return Err(
                SettingsError::InvalidParameters("max_level must be at least 1".into()).into(),
            );
        }
        self.max_level = max_level;
        Ok(self)
    }

    /// Sets the minimum attenuation.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_k` is not in `(0, 1)`.
    pub fn with_min_k(mut self, min_k: f64) -> Result<Self> {
        if !(min_k > 0.0 && min_k < 1.0) {
            return Err(SettingsError::InvalidParameters(format!(
                "min_k must be in (0, 1), got {min_k}"
            ))
            .into());
        }
        self.min_k = min_k;
        Ok(self)
    }

    /// Recursion depth.
    #[must_use]
    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    /// Minimum attenuation.
    #[must_use]
    pub fn min_k(&self) -> f64 {
        self.min_k
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = TracerSettings::default();
        assert_eq!(s.max_level(), 10);
        assert!((s.min_k() - 0.001).abs() < f64::EPSILON);
    }

    #[test]
    fn valid_settings() {
        let s = TracerSettings::new(3, 0.01).unwrap();
        assert_eq!(s.max_level(), 3);
        assert!((s.min_k() - 0.01).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_settings() {
        assert!(TracerSettings::new(0, 0.001).is_err());
        assert!(TracerSettings::new(10, 0.0).is_err());
        assert!(TracerSettings::new(10, 1.0).is_err());
        assert!(TracerSettings::new(10, f64::NAN).is_err());
    }
}
