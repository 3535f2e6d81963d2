// Form rules - single source of truth for the input form and its help text

pub const DESCRIPTION_MIN_LENGTH: usize = 5;

pub const PEOPLE_MIN: f64 = 1.0;
pub const PEOPLE_MAX: f64 = 11.0;

// Notice shown when any field fails validation
pub const INVALID_INPUT_NOTICE: &str = "Invalid input";
