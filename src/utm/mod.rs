mod compose;
mod params;
mod validation;

pub use compose::{apply_params, compose};
pub use params::{ParameterSet, UtmKey};
pub use validation::{parse_base_url, valid_url};
