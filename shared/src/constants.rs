pub const TRANSITION_DELAY_MS: u32 = 200;
pub const SUBMIT_DELAY_MS: u32 = 1500;

pub const OPACITY_HIDDEN: f32 = 0.0;
pub const OPACITY_SHOWN: f32 = 1.0;

pub static PANEL_LOGIN: &'static str = "login";
pub static PANEL_REGISTER: &'static str = "register";

pub static BUSY_LOGIN: &'static str = "Signing in...";
pub static BUSY_REGISTER: &'static str = "Creating account...";

pub static NOTICE_LOGIN_OK: &'static str = "Login Successful! (Redirecting to Dashboard...)";
pub static NOTICE_INVALID_SELECTION: &'static str = "Please select a valid Country and State.";
pub static NOTICE_PASSWORD_MISMATCH: &'static str = "Passwords do not match";

pub static LOOKUP_ROOT: &'static str = "https://countriesnow.space/api/v0.1/countries";
pub static LOOKUP_COUNTRIES: &'static str = "iso";
pub static LOOKUP_STATES: &'static str = "states";

pub static REGION_NONE_VALUE: &'static str = "N/A";
pub static REGION_NONE_TEXT: &'static str = "No states found / Not applicable";
pub static PLACEHOLDER_COUNTRY: &'static str = "Select Country...";
pub static PLACEHOLDER_REGION: &'static str = "Select State";
pub static PLACEHOLDER_LOADING: &'static str = "Loading...";
