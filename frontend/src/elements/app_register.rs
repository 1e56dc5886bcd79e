use dominator::{Dom, events, html};
use futures_signals::signal::SignalExt;
use futures_signals::signal_vec::SignalVecExt;
use wasm_bindgen_futures::spawn_local;

use shared::constants::PLACEHOLDER_COUNTRY;
use shared::forms;
use shared::lookup::{RegionSelect, SelectOption};
use shared::types::{Panel, RegistrationFields};

use crate::connect_lookup::load_regions;
use crate::constants::{FIELD_COUNTRY, FIELD_EMAIL, FIELD_FIRST_NAME, FIELD_LAST_NAME, FIELD_PASS, FIELD_PASS_CONFIRM, FIELD_REGION, ID_REGISTER_BOX, PROP_DISABLED, PROP_ID, PROP_NAME, PROP_SELECTED, PROP_TITLE, PROP_VALUE, TAG_DIV, TAG_FORM, TAG_OPTION, TAG_SELECT};
use crate::dialog::dialogs::DialogNotices;
use crate::elements::app_login::{css_class, input, simulated_work, switch_link};
use crate::elements::submit_button::ensure_submit_control;
use crate::panels::show_panel;
use crate::state::{COUNTRIES, REGION, REGISTER_BUTTON};
use crate::utils::get_input_value;

pub fn register_page() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("box"))
        .attr(PROP_ID, ID_REGISTER_BOX)
        .children([
            html!("h2", {
                .class(css_class("title"))
                .text("Create your account")
            }),
            html!(TAG_FORM, {
                .class(css_class("form"))
                .children([
                    html!(TAG_DIV, {
                        .class(css_class("row"))
                        .children([
                            input("text", FIELD_FIRST_NAME, "First Name", "First Name"),
                            input("text", FIELD_LAST_NAME, "Last Name", "Last Name"),
                        ])
                    }),
                    input("email", FIELD_EMAIL, "Email Address", "name@company.com"),
                    html!(TAG_DIV, {
                        .class(css_class("row"))
                        .children([country_select(), region_select()])
                    }),
                    input("password", FIELD_PASS, "Password", "Password"),
                    input("password", FIELD_PASS_CONFIRM, "Confirm Password", "Confirm Password"),
                    REGISTER_BUTTON.render(),
                ])
                .event_with_options(&dominator::EventOptions::preventable(), handle_register)
            }),
            switch_link("Already have an account? ", "Sign in", Panel::Login),
        ])
    })
}

fn placeholder_option(text: &str, selected: bool) -> Dom {
    html!(TAG_OPTION, {
        .attr(PROP_VALUE, "")
        .prop(PROP_SELECTED, selected)
        .text(text)
    })
}

fn option(item: &SelectOption, selected: bool) -> Dom {
    html!(TAG_OPTION, {
        .attr(PROP_VALUE, &item.value)
        .prop(PROP_SELECTED, selected)
        .text(&item.text)
    })
}

fn country_select() -> Dom {
    html!(TAG_SELECT, {
        .class(css_class("select"))
        .attr(PROP_NAME, FIELD_COUNTRY)
        .attr(PROP_TITLE, "Country")
        .child(placeholder_option(PLACEHOLDER_COUNTRY, true))
        .children_signal_vec(COUNTRIES.signal_vec_cloned().map(|item| option(&item, false)))
        .event(|_: events::Change| {
            load_regions(&get_input_value(FIELD_COUNTRY));
        })
    })
}

fn region_options(select: &RegionSelect) -> Vec<Dom> {
    let mut list = vec![placeholder_option(select.placeholder(), select.selected().is_none())];
    list.extend(select.options().iter()
        .map(|item| option(item, select.selected() == Some(item.value.as_str()))));
    list
}

fn region_select() -> Dom {
    html!(TAG_SELECT, {
        .class(css_class("select"))
        .attr(PROP_NAME, FIELD_REGION)
        .attr(PROP_TITLE, "State")
        .prop_signal(PROP_DISABLED, REGION.signal_ref(|select| !select.is_enabled()))
        .children_signal_vec(REGION.signal_ref(region_options).to_signal_vec())
    })
}

fn read_fields() -> RegistrationFields {
    RegistrationFields {
        first_name: get_input_value(FIELD_FIRST_NAME).trim().to_string(),
        last_name: get_input_value(FIELD_LAST_NAME).trim().to_string(),
        email: get_input_value(FIELD_EMAIL).trim().to_string(),
        country: get_input_value(FIELD_COUNTRY),
        region: get_input_value(FIELD_REGION),
        password: get_input_value(FIELD_PASS),
        confirm_password: get_input_value(FIELD_PASS_CONFIRM),
    }
}

fn handle_register(ev: events::Submit) {
    ev.prevent_default();
    if let Err(err) = ensure_submit_control(ev.target()) {
        log::error!("register form: {err}");
        return;
    }

    let fields = read_fields();
    spawn_local(async move {
        let outcome = forms::register(
            &*REGISTER_BUTTON,
            &DialogNotices,
            &fields,
            |fields| {
                log::info!("registering {} in {}, {}", fields.email, fields.country, fields.region);
                simulated_work()
            },
            || show_panel(Panel::Login),
        ).await;
        if let Err(err) = outcome {
            log::warn!("registration not submitted: {err}");
        }
    });
}
