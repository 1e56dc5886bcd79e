use crate::connect_lookup::load_countries;
use crate::elements::app_root::app_root;
use crate::panels::init_panels;

mod elements;
mod utils;
mod constants;
mod state;
mod dialog;
mod panels;
mod connect_fetch;
mod connect_lookup;

pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    dominator::append_dom(&dominator::body(), app_root());
    if let Err(err) = init_panels() {
        log::error!("auth panels not mounted: {err}");
    }
    load_countries();
}
