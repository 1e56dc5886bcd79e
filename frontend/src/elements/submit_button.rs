use dominator::{Dom, html};
use futures_signals::signal::{Mutable, SignalExt};
use web_sys::EventTarget;

use shared::errors::SubmitError;
use shared::submission::{require_control, SubmissionState, SubmitControl};

use crate::constants::{PROP_DISABLED, PROP_ROLE, PROP_TYPE, SELECTOR_SUBMIT, TAG_BUTTON, TAG_SPAN};
use crate::utils::get_element_from_target;

fn css_class(label: &str) -> String {
    format!("submit-button__{label}")
}

#[derive(Debug, Default)]
pub struct FormButton {
    label: Mutable<String>,
    disabled: Mutable<bool>,
    state: Mutable<SubmissionState>,
}

impl FormButton {
    pub fn new(label: &str) -> Self {
        Self {
            label: Mutable::new(label.to_string()),
            ..Self::default()
        }
    }

    pub fn render(&'static self) -> Dom {
        html!(TAG_BUTTON, {
            .class(css_class("button"))
            .attr(PROP_TYPE, "submit")
            .prop_signal(PROP_DISABLED, self.disabled.signal())
            .child_signal(self.state.signal_ref(SubmissionState::is_busy).map(|busy| if busy { Some(spinner()) } else { None }))
            .text_signal(self.label.signal_cloned())
        })
    }
}

fn spinner() -> Dom {
    html!(TAG_SPAN, {
        .class(css_class("spinner"))
        .attr(PROP_ROLE, "status")
        .attr("aria-hidden", "true")
    })
}

impl SubmitControl for FormButton {
    fn label(&self) -> String {
        self.label.get_cloned()
    }

    fn set_label(&self, label: &str) {
        self.label.set_neq(label.to_string());
    }

    fn set_disabled(&self, disabled: bool) {
        self.disabled.set_neq(disabled);
    }

    fn state(&self) -> SubmissionState {
        self.state.get_cloned()
    }

    fn set_state(&self, state: SubmissionState) {
        self.state.set(state);
    }
}

/// Presence check only; the button's state lives in its `FormButton`.
pub fn ensure_submit_control(target: Option<EventTarget>) -> Result<(), SubmitError> {
    let control = get_element_from_target(target)
        .and_then(|form| form.query_selector(SELECTOR_SUBMIT).ok().flatten());
    require_control(control).map(|_| ())
}
