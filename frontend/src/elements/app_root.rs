use dominator::{Dom, html};
use futures_signals::signal::SignalExt;

use crate::constants::TAG_DIV;
use crate::dialog::dialogs::dialogs;
use crate::elements::app_login::login_page;
use crate::elements::app_register::register_page;
use crate::state::ACTIVE_PANEL;
use crate::utils::{panel_title, set_title};

pub fn app_root() -> Dom {
    html!(TAG_DIV, {
        .class("app-root")
        .future(ACTIVE_PANEL.signal().for_each(|panel| {
            set_title(panel_title(panel));
            async {}
        }))
        .child(html!(TAG_DIV, {
            .class("app-root__auth")
            .children([login_page(), register_page()])
        }))
        .child_signal(dialogs())
    })
}
