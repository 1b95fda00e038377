//! Application-level configuration constants.

pub use pokedex::defaults::{APP_TITLE, CATALOG_URL};

// Search box
pub const SEARCH_PLACEHOLDER: &str = "Search Pokemon";

// Status and navigation text
pub const LOADING_MESSAGE: &str = "Loading pokemon...";
pub const NOT_FOUND_MESSAGE: &str = "Sorry, no pokemon found :(";
pub const BACK_HOME_LABEL: &str = "Back to Home";
pub const PREVIOUS_LABEL: &str = "Previous";
pub const NEXT_LABEL: &str = "Next";
