mod estimator;

pub use estimator::{SQUARE_METERS_PER_HECTARE, covered_area_m2, estimate_area, round_hectares};
