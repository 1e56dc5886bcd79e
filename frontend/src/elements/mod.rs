pub mod app_login;
pub mod app_register;
pub mod app_root;
pub mod submit_button;
