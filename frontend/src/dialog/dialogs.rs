use dominator::{Dom, events, html};
use futures_signals::signal::{Signal, SignalExt};
use futures_signals::signal_vec::{MutableVec, SignalVecExt};
use once_cell::sync::Lazy;

use shared::notices::{Notice, NoticeLevel, NoticeSink};

use crate::constants::{PROP_ROLE, TAG_BUTTON, TAG_DIV};

pub static DIALOGS: Lazy<MutableVec<Notice>> = Lazy::new(|| {
    MutableVec::new()
});

pub struct DialogNotices;

impl NoticeSink for DialogNotices {
    fn notify(&self, notice: Notice) {
        log::info!("notice: {}", notice.text);
        DIALOGS.lock_mut().push_cloned(notice);
    }
}

fn css_class(label: &str) -> String {
    format!("dialogs__{label}")
}

pub fn dialogs() -> impl Signal<Item=Option<Dom>> {
    DIALOGS.signal_vec_cloned().to_signal_cloned().map(current_element)
}

fn current_element(list: Vec<Notice>) -> Option<Dom> {
    list.first().map(dialog_alert)
}

fn dialog_alert(data: &Notice) -> Dom {
    let level = match data.level {
        NoticeLevel::Info => "info",
        NoticeLevel::Error => "error",
    };
    html!(TAG_DIV, {
        .class(css_class("back"))
        .child(html!(TAG_DIV, {
            .class(css_class("container"))
            .class(css_class(level))
            .attr(PROP_ROLE, "alertdialog")
            .children([
                html!(TAG_DIV,{
                    .class(css_class("body"))
                    .text(&data.text)
                }),
                html!(TAG_DIV,{
                    .class(css_class("footer"))
                    .child(html!(TAG_BUTTON, {
                        .text("Ok")
                        .attr("aria-label", "confirm")
                        .event(|_: events::Click|{
                            dialog_close();
                        })
                    }))
                }),
            ])
        }))
    })
}

fn dialog_close() {
    let mut list = DIALOGS.lock_mut();
    if !list.is_empty() {
        list.remove(0);
    }
}
