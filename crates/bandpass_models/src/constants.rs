//! Physical constants (SI, CODATA 2018).

/// Planck constant [J s].
pub const H: f64 = 6.626_070_15e-34;

/// Speed of light in vacuum [m s⁻¹].
pub const C: f64 = 2.997_924_58e8;

/// Boltzmann constant [J K⁻¹].
pub const K_B: f64 = 1.380_649e-23;

/// CMB monopole temperature [K].
pub const T_CMB: f64 = 2.7255;
