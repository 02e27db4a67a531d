// ABOUTME: Coefficients for the per-workout calorie and distance formulas
// ABOUTME: Groups step lengths and formula multipliers by workout kind

//! Physiological constants used by the calorie models.

/// Step and stroke lengths
pub mod step_length {
    /// Length of one running or walking step in meters
    pub const STEP_M: f64 = 0.65;

    /// Length of one swimming stroke in meters
    pub const STROKE_M: f64 = 1.38;
}

/// Running calorie formula coefficients
pub mod running {
    /// Multiplier applied to mean speed
    pub const MEAN_SPEED_MULTIPLIER: f64 = 18.0;

    /// Shift added after the speed multiplier
    pub const MEAN_SPEED_SHIFT: f64 = 1.79;
}

/// Sports walking calorie formula coefficients
pub mod walking {
    /// Weight coefficient
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;

    /// Coefficient for the squared speed over height term
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    /// Converts km/h to m/s (rounded, as the formula was calibrated with it)
    pub const KMH_IN_MSEC: f64 = 0.278;
}

/// Swimming calorie formula coefficients
pub mod swimming {
    /// Shift added to mean speed
    pub const MEAN_SPEED_SHIFT: f64 = 1.1;

    /// Multiplier applied after the shift
    pub const SPEED_MULTIPLIER: f64 = 2.0;
}
