use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;

use shared::errors::ViewError;
use shared::transition::{PanelSurface, Ticket};
use shared::types::Panel;
use shared::utils::panel_index;

use crate::constants::{CLASS_HIDDEN, STYLE_OPACITY};
use crate::state::{ACTIVE_PANEL, TRANSITION_TIMER, VIEW};
use crate::utils::{get_html_element, panel_element_id, query_selector};

struct DomPanels {
    elements: [Option<HtmlElement>; 2],
}

impl DomPanels {
    fn lookup() -> Self {
        let mut elements = [None, None];
        for panel in Panel::ALL {
            elements[panel_index(&panel)] = get_html_element(query_selector(&format!("#{}", panel_element_id(panel))));
        }
        Self { elements }
    }

    fn element(&self, panel: Panel) -> Option<&HtmlElement> {
        self.elements[panel_index(&panel)].as_ref()
    }
}

impl PanelSurface for DomPanels {
    fn contains(&self, panel: Panel) -> bool {
        self.element(panel).is_some()
    }

    fn set_opacity(&mut self, panel: Panel, opacity: f32) {
        if let Some(elem) = self.element(panel) {
            if let Err(err) = elem.style().set_property(STYLE_OPACITY, &opacity.to_string()) {
                log::error!("set opacity on {panel}: {:?}", err);
            }
        }
    }

    fn set_hidden(&mut self, panel: Panel, hidden: bool) {
        if let Some(elem) = self.element(panel) {
            if let Err(err) = elem.class_list().toggle_with_force(CLASS_HIDDEN, hidden) {
                log::error!("toggle {CLASS_HIDDEN} on {panel}: {:?}", err);
            }
            elem.set_hidden(hidden);
        }
    }

    fn reflow(&mut self, panel: Panel) {
        if let Some(elem) = self.element(panel) {
            // reading layout flushes pending style changes
            let _ = elem.offset_width();
        }
    }
}

pub fn init_panels() -> Result<(), ViewError> {
    let panel = VIEW.with(|view| {
        let view = view.borrow();
        view.render(&mut DomPanels::lookup()).map(|_| view.visible())
    })?;
    ACTIVE_PANEL.set_neq(panel);
    Ok(())
}

pub fn switch_view(target: Panel) -> Result<(), ViewError> {
    let (ticket, delay) = VIEW.with(|view| {
        let mut view = view.borrow_mut();
        view.begin(&mut DomPanels::lookup(), target).map(|ticket| (ticket, view.delay_ms()))
    })?;
    log::debug!("switch to {target} in {delay}ms");

    let timeout = Timeout::new(delay, move || finish_switch(ticket));
    // replacing the stored timer drops, and so cancels, the previous one
    TRANSITION_TIMER.with(|timer| timer.replace(Some(timeout)));
    Ok(())
}

fn finish_switch(ticket: Ticket) {
    let done = VIEW.with(|view| view.borrow_mut().complete(&mut DomPanels::lookup(), ticket));
    match done {
        Ok(true) => ACTIVE_PANEL.set_neq(ticket.target()),
        Ok(false) => {}
        Err(err) => log::error!("switch to {} failed: {err}", ticket.target()),
    }
}

pub fn show_panel(target: Panel) {
    if let Err(err) = switch_view(target) {
        log::error!("switch_view({target}): {err}");
    }
}
