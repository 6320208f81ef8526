//! Ability score resolution: generation-method validation and racial
//! modifier application

mod generation;
mod racial;

pub use generation::{
    baseline_scores, point_buy_cost, roll_scores, validate, POINT_BUY_BUDGET, POINT_BUY_MAX,
    POINT_BUY_MIN, STANDARD_ARRAY,
};
pub use racial::{apply_racial_asi, resolve_race_profile, validate_flexible_choice, RaceProfile};

pub(crate) use racial::flexible_grant;
