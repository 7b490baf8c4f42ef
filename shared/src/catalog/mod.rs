//! Static reference data, loaded once and never mutated

pub mod location;
pub mod msp;

pub use location::{list_districts, list_states, list_tehsils, list_villages, location_exists};
pub use msp::{all_msp_records, find_msp, format_msp, msp_by_season};
