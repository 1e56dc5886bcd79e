use std::cell::RefCell;

use futures_signals::signal::Mutable;
use futures_signals::signal_vec::MutableVec;
use gloo_timers::callback::Timeout;
use once_cell::sync::Lazy;

use shared::lookup::{RegionLookup, RegionSelect, SelectOption};
use shared::transition::ViewController;
use shared::types::Panel;

use crate::constants::{LABEL_LOGIN, LABEL_REGISTER};
use crate::elements::submit_button::FormButton;
use crate::utils::location_panel;

thread_local! {
    pub static VIEW: RefCell<ViewController> = RefCell::new(ViewController::new(location_panel()));
    pub static TRANSITION_TIMER: RefCell<Option<Timeout>> = RefCell::new(None);
}

pub static ACTIVE_PANEL: Lazy<Mutable<Panel>> = Lazy::new(|| Mutable::new(location_panel()));

pub static LOGIN_BUTTON: Lazy<FormButton> = Lazy::new(|| FormButton::new(LABEL_LOGIN));

pub static REGISTER_BUTTON: Lazy<FormButton> = Lazy::new(|| FormButton::new(LABEL_REGISTER));

pub static COUNTRIES: Lazy<MutableVec<SelectOption>> = Lazy::new(|| {
    MutableVec::new()
});

pub static REGION: Lazy<Mutable<RegionSelect>> = Lazy::new(|| Mutable::new(RegionSelect::default()));

pub static REGION_LOOKUP: Lazy<Mutable<RegionLookup>> = Lazy::new(|| Mutable::new(RegionLookup::default()));
