mod stats;
mod validation;

pub use stats::{
    calculate_stats,
    compute_all_stats,
    compute_hp,
    compute_stat,
    default_evs,
    default_ivs,
    nature_modifier,
};
pub use validation::{
    MAX_EV,
    MAX_EV_TOTAL,
    MAX_IV,
    ValidationFailure,
    ValidationReport,
    validate_evs,
    validate_ivs,
};
