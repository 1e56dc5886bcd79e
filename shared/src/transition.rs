use crate::constants::{OPACITY_HIDDEN, OPACITY_SHOWN, TRANSITION_DELAY_MS};
use crate::errors::ViewError;
use crate::types::Panel;

pub trait PanelSurface {
    fn contains(&self, panel: Panel) -> bool;
    fn set_opacity(&mut self, panel: Panel, opacity: f32);
    fn set_hidden(&mut self, panel: Panel, hidden: bool);
    fn reflow(&mut self, panel: Panel);
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    target: Panel,
}

impl Ticket {
    pub fn target(&self) -> Panel {
        self.target
    }
}

#[derive(Debug, Clone)]
pub struct ViewController {
    visible: Panel,
    generation: u64,
    pending: Option<Panel>,
    delay_ms: u32,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(Panel::Login)
    }
}

impl ViewController {
    pub fn new(initial: Panel) -> Self {
        Self::with_delay(initial, TRANSITION_DELAY_MS)
    }

    pub fn with_delay(initial: Panel, delay_ms: u32) -> Self {
        Self {
            visible: initial,
            generation: 0,
            pending: None,
            delay_ms,
        }
    }

    pub fn visible(&self) -> Panel {
        self.visible
    }

    pub fn pending(&self) -> Option<Panel> {
        self.pending
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn render<S: PanelSurface>(&self, surface: &mut S) -> Result<(), ViewError> {
        check_anchors(surface)?;
        for panel in Panel::ALL {
            let shown = panel == self.visible;
            surface.set_hidden(panel, !shown);
            surface.set_opacity(panel, if shown { OPACITY_SHOWN } else { OPACITY_HIDDEN });
        }
        Ok(())
    }

    pub fn begin<S: PanelSurface>(&mut self, surface: &mut S, target: Panel) -> Result<Ticket, ViewError> {
        check_anchors(surface)?;

        self.generation = self.generation.wrapping_add(1);
        if self.pending.replace(target).is_some() {
            log::debug!("transition superseded by {target}");
        }
        surface.set_opacity(target.other(), OPACITY_HIDDEN);

        Ok(Ticket {
            generation: self.generation,
            target,
        })
    }

    /// `Ok(false)` for a superseded ticket.
    pub fn complete<S: PanelSurface>(&mut self, surface: &mut S, ticket: Ticket) -> Result<bool, ViewError> {
        if ticket.generation != self.generation || self.pending != Some(ticket.target) {
            log::debug!("stale transition to {} ignored", ticket.target);
            return Ok(false);
        }
        if let Err(err) = check_anchors(surface) {
            // the faded panel comes back, the switch is dropped
            self.pending = None;
            if surface.contains(self.visible) {
                surface.set_opacity(self.visible, OPACITY_SHOWN);
            }
            return Err(err);
        }

        let target = ticket.target;
        surface.set_hidden(target.other(), true);
        surface.set_hidden(target, false);
        surface.reflow(target);
        surface.set_opacity(target, OPACITY_SHOWN);

        self.visible = target;
        self.pending = None;
        Ok(true)
    }
}

fn check_anchors<S: PanelSurface>(surface: &S) -> Result<(), ViewError> {
    match Panel::ALL.into_iter().find(|panel| !surface.contains(*panel)) {
        Some(panel) => Err(ViewError::MissingElement(panel)),
        None => Ok(()),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::utils::panel_index;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Opacity(Panel, f32),
        Hidden(Panel, bool),
        Reflow(Panel),
    }

    #[derive(Debug, Default)]
    pub struct FakeSurface {
        pub present: [bool; 2],
        pub hidden: [bool; 2],
        pub opacity: [f32; 2],
        pub ops: Vec<Op>,
    }

    impl FakeSurface {
        pub fn initial() -> Self {
            Self {
                present: [true, true],
                hidden: [false, true],
                opacity: [1.0, 0.0],
                ops: vec![],
            }
        }

        pub fn without(panel: Panel) -> Self {
            let mut surface = Self::initial();
            surface.present[panel_index(&panel)] = false;
            surface
        }

        pub fn is_visible(&self, panel: Panel) -> bool {
            let ind = panel_index(&panel);
            !self.hidden[ind] && self.opacity[ind] > 0.0
        }

        pub fn visible_panels(&self) -> Vec<Panel> {
            Panel::ALL.into_iter().filter(|p| self.is_visible(*p)).collect()
        }
    }

    impl PanelSurface for FakeSurface {
        fn contains(&self, panel: Panel) -> bool {
            self.present[panel_index(&panel)]
        }
        fn set_opacity(&mut self, panel: Panel, opacity: f32) {
            self.opacity[panel_index(&panel)] = opacity;
            self.ops.push(Op::Opacity(panel, opacity));
        }
        fn set_hidden(&mut self, panel: Panel, hidden: bool) {
            self.hidden[panel_index(&panel)] = hidden;
            self.ops.push(Op::Hidden(panel, hidden));
        }
        fn reflow(&mut self, panel: Panel) {
            self.ops.push(Op::Reflow(panel));
        }
    }

    fn switch(controller: &mut ViewController, surface: &mut FakeSurface, target: Panel) {
        let ticket = controller.begin(surface, target).unwrap();
        assert!(controller.complete(surface, ticket).unwrap());
    }

    #[test]
    fn switch_to_register_from_initial_state() {
        let mut surface = FakeSurface::initial();
        let mut controller = ViewController::default();

        let ticket = controller.begin(&mut surface, Panel::Register).unwrap();
        // faded but still in layout until the delay elapses
        assert_eq!(surface.opacity, [0.0, 0.0]);
        assert_eq!(surface.hidden, [false, true]);
        assert_eq!(controller.pending(), Some(Panel::Register));

        assert!(controller.complete(&mut surface, ticket).unwrap());
        assert_eq!(surface.hidden, [true, false]);
        assert_eq!(surface.visible_panels(), vec![Panel::Register]);
        assert_eq!(controller.visible(), Panel::Register);
        assert_eq!(controller.pending(), None);
    }

    #[test]
    fn completion_reflows_before_fading_in() {
        let mut surface = FakeSurface::initial();
        let mut controller = ViewController::default();
        switch(&mut controller, &mut surface, Panel::Register);

        assert_eq!(surface.ops, vec![
            Op::Opacity(Panel::Login, 0.0),
            Op::Hidden(Panel::Login, true),
            Op::Hidden(Panel::Register, false),
            Op::Reflow(Panel::Register),
            Op::Opacity(Panel::Register, 1.0),
        ]);
    }

    #[test]
    fn exactly_one_panel_visible_after_any_switch() {
        for start in Panel::ALL {
            for target in Panel::ALL {
                let mut surface = FakeSurface::initial();
                let mut controller = ViewController::new(start);
                controller.render(&mut surface).unwrap();
                switch(&mut controller, &mut surface, target);
                assert_eq!(surface.visible_panels(), vec![target]);
                assert_eq!(controller.visible(), target);
            }
        }
    }

    #[test]
    fn missing_panel_mutates_nothing() {
        for panel in Panel::ALL {
            let mut surface = FakeSurface::without(panel);
            let mut controller = ViewController::default();
            assert_eq!(
                controller.begin(&mut surface, Panel::Register),
                Err(ViewError::MissingElement(panel))
            );
            assert!(surface.ops.is_empty());
            assert_eq!(controller.pending(), None);
            assert_eq!(controller.visible(), Panel::Login);
        }
    }

    #[test]
    fn anchor_removed_before_completion_restores_faded_panel() {
        let mut surface = FakeSurface::initial();
        let mut controller = ViewController::default();
        let ticket = controller.begin(&mut surface, Panel::Register).unwrap();
        surface.present[1] = false;

        assert_eq!(
            controller.complete(&mut surface, ticket),
            Err(ViewError::MissingElement(Panel::Register))
        );
        assert_eq!(surface.visible_panels(), vec![Panel::Login]);
        assert_eq!(surface.ops.last(), Some(&Op::Opacity(Panel::Login, 1.0)));
        assert_eq!(controller.visible(), Panel::Login);
        assert_eq!(controller.pending(), None);
        assert!(!controller.complete(&mut surface, ticket).unwrap());
    }

    #[test]
    fn latest_request_wins() {
        let mut surface = FakeSurface::initial();
        let mut controller = ViewController::default();

        let first = controller.begin(&mut surface, Panel::Register).unwrap();
        let second = controller.begin(&mut surface, Panel::Login).unwrap();

        // timers fire in scheduling order
        assert!(!controller.complete(&mut surface, first).unwrap());
        assert!(controller.complete(&mut surface, second).unwrap());
        assert_eq!(surface.visible_panels(), vec![Panel::Login]);
        assert_eq!(controller.visible(), Panel::Login);
    }

    #[test]
    fn stale_ticket_after_newer_completion_is_ignored() {
        let mut surface = FakeSurface::initial();
        let mut controller = ViewController::default();

        let first = controller.begin(&mut surface, Panel::Register).unwrap();
        let second = controller.begin(&mut surface, Panel::Register).unwrap();
        assert!(controller.complete(&mut surface, second).unwrap());
        let ops = surface.ops.len();

        assert!(!controller.complete(&mut surface, first).unwrap());
        assert_eq!(surface.ops.len(), ops);
        assert_eq!(surface.visible_panels(), vec![Panel::Register]);
    }

    #[test]
    fn render_projects_state() {
        let mut surface = FakeSurface::initial();
        let controller = ViewController::new(Panel::Register);
        controller.render(&mut surface).unwrap();
        assert_eq!(surface.visible_panels(), vec![Panel::Register]);
        assert_eq!(surface.hidden, [true, false]);
    }

    #[test]
    fn delay_defaults_to_constant() {
        assert_eq!(ViewController::default().delay_ms(), TRANSITION_DELAY_MS);
        assert_eq!(ViewController::with_delay(Panel::Login, 5).delay_ms(), 5);
    }
}
