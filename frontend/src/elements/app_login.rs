use dominator::{Dom, events, html};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use shared::constants::SUBMIT_DELAY_MS;
use shared::forms;
use shared::types::{LoginFields, Panel};

use crate::constants::{FIELD_LOGIN_EMAIL, FIELD_LOGIN_PASS, ID_LOGIN_BOX, PROP_HREF, PROP_ID, PROP_NAME, PROP_PLACEHOLDER, PROP_TITLE, PROP_TYPE, TAG_DIV, TAG_FORM, TAG_INPUT, TAG_LINK};
use crate::dialog::dialogs::DialogNotices;
use crate::elements::submit_button::ensure_submit_control;
use crate::panels::show_panel;
use crate::state::LOGIN_BUTTON;
use crate::utils::get_input_value;

pub(crate) fn css_class(label: &str) -> String {
    format!("app-login__{label}")
}

pub fn login_page() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("box"))
        .attr(PROP_ID, ID_LOGIN_BOX)
        .children([
            html!("h2", {
                .class(css_class("title"))
                .text("Welcome back")
            }),
            html!(TAG_FORM, {
                .class(css_class("form"))
                .children([
                    input("email", FIELD_LOGIN_EMAIL, "Email Address", "name@company.com"),
                    input("password", FIELD_LOGIN_PASS, "Password", "••••••••"),
                    LOGIN_BUTTON.render(),
                ])
                .event_with_options(&dominator::EventOptions::preventable(), handle_login)
            }),
            switch_link("Don't have an account? ", "Create one", Panel::Register),
        ])
    })
}

pub(crate) fn input(kind: &str, name: &str, title: &str, placeholder: &str) -> Dom {
    html!(TAG_INPUT, {
        .class(css_class("input"))
        .attr(PROP_TYPE, kind)
        .attr(PROP_TITLE, title)
        .attr(PROP_PLACEHOLDER, placeholder)
        .attr(PROP_NAME, name)
    })
}

pub(crate) fn switch_link(text: &str, link: &str, target: Panel) -> Dom {
    html!("p", {
        .class(css_class("switch"))
        .text(text)
        .child(html!(TAG_LINK, {
            .attr(PROP_HREF, &format!("#{target}"))
            .text(link)
            .event_with_options(&dominator::EventOptions::preventable(), move |ev: events::Click| {
                ev.prevent_default();
                show_panel(target);
            })
        }))
    })
}

pub(crate) async fn simulated_work() -> Result<(), String> {
    TimeoutFuture::new(SUBMIT_DELAY_MS).await;
    Ok(())
}

fn handle_login(ev: events::Submit) {
    ev.prevent_default();
    if let Err(err) = ensure_submit_control(ev.target()) {
        log::error!("login form: {err}");
        return;
    }

    let fields = LoginFields {
        email: get_input_value(FIELD_LOGIN_EMAIL).trim().to_string(),
        password: get_input_value(FIELD_LOGIN_PASS),
    };
    log::info!("login for {}", fields.email);

    spawn_local(async move {
        if let Err(err) = forms::login(&*LOGIN_BUTTON, &DialogNotices, simulated_work()).await {
            log::warn!("login not submitted: {err}");
        }
    });
}
