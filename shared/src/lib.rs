pub mod constants;
pub mod errors;
pub mod forms;
pub mod lookup;
pub mod notices;
pub mod submission;
pub mod transition;
pub mod types;
pub mod utils;
