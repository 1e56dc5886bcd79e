use std::future::Future;

use crate::errors::SubmitError;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Busy {
        original_label: String,
    },
}

impl SubmissionState {
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmissionState::Busy { .. })
    }
}

/// Implementors keep their state behind interior mutability.
pub trait SubmitControl {
    fn label(&self) -> String;
    fn set_label(&self, label: &str);
    fn set_disabled(&self, disabled: bool);
    fn state(&self) -> SubmissionState;
    fn set_state(&self, state: SubmissionState);
}

/// Restores the control when dropped.
#[must_use]
pub struct BusyGuard<'a, C: SubmitControl + ?Sized> {
    control: &'a C,
}

impl<C: SubmitControl + ?Sized> Drop for BusyGuard<'_, C> {
    fn drop(&mut self) {
        leave_busy(self.control);
    }
}

pub fn require_control<T>(control: Option<T>) -> Result<T, SubmitError> {
    control.ok_or(SubmitError::MissingControl)
}

pub fn enter_busy<'a, C>(control: &'a C, busy_label: &str) -> Result<BusyGuard<'a, C>, SubmitError>
    where C: SubmitControl + ?Sized
{
    if control.state().is_busy() {
        return Err(SubmitError::Busy);
    }
    let original_label = control.label();
    control.set_state(SubmissionState::Busy { original_label });
    control.set_label(busy_label);
    control.set_disabled(true);
    Ok(BusyGuard { control })
}

pub fn leave_busy<C: SubmitControl + ?Sized>(control: &C) {
    if let SubmissionState::Busy { original_label } = control.state() {
        control.set_label(&original_label);
        control.set_disabled(false);
        control.set_state(SubmissionState::Idle);
    }
}

/// The outer `Result` is about the control, the inner one is the outcome of the work.
pub async fn submit<C, W, T, E>(control: &C, busy_label: &str, work: W) -> Result<Result<T, E>, SubmitError>
    where
        C: SubmitControl + ?Sized,
        W: Future<Output = Result<T, E>>,
{
    let _guard = enter_busy(control, busy_label)?;
    Ok(work.await)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::{Cell, RefCell};

    use futures::executor::block_on;
    use futures::future::{pending, FutureExt};

    use super::*;

    #[derive(Debug)]
    pub struct FakeControl {
        pub label: RefCell<String>,
        pub disabled: Cell<bool>,
        pub state: RefCell<SubmissionState>,
        pub labels: RefCell<Vec<String>>,
    }

    impl FakeControl {
        pub fn new(label: &str) -> Self {
            Self {
                label: RefCell::new(label.to_string()),
                disabled: Cell::new(false),
                state: RefCell::new(SubmissionState::Idle),
                labels: RefCell::new(vec![]),
            }
        }

        pub fn is_idle_with(&self, label: &str) -> bool {
            *self.label.borrow() == label && !self.disabled.get() && !self.state().is_busy()
        }
    }

    impl SubmitControl for FakeControl {
        fn label(&self) -> String {
            self.label.borrow().clone()
        }
        fn set_label(&self, label: &str) {
            self.labels.borrow_mut().push(label.to_string());
            *self.label.borrow_mut() = label.to_string();
        }
        fn set_disabled(&self, disabled: bool) {
            self.disabled.set(disabled);
        }
        fn state(&self) -> SubmissionState {
            self.state.borrow().clone()
        }
        fn set_state(&self, state: SubmissionState) {
            *self.state.borrow_mut() = state;
        }
    }

    #[test]
    fn busy_while_work_runs() {
        let control = FakeControl::new("Sign In");
        let outcome = block_on(submit(&control, "Signing in...", async {
            assert_eq!(control.label(), "Signing in...");
            assert!(control.disabled.get());
            assert_eq!(control.state(), SubmissionState::Busy { original_label: "Sign In".to_string() });
            Ok::<_, ()>(7)
        }));
        assert_eq!(outcome, Ok(Ok(7)));
        assert!(control.is_idle_with("Sign In"));
        assert_eq!(*control.labels.borrow(), vec!["Signing in...", "Sign In"]);
    }

    #[test]
    fn restored_after_failure() {
        let control = FakeControl::new("Sign In");
        let outcome = block_on(submit(&control, "Signing in...", async { Err::<(), _>("offline") }));
        assert_eq!(outcome, Ok(Err("offline")));
        assert!(control.is_idle_with("Sign In"));
    }

    #[test]
    fn restored_when_work_is_abandoned() {
        let control = FakeControl::new("Sign In");
        let mut fut = Box::pin(submit(&control, "Signing in...", pending::<Result<(), ()>>()));
        assert!(fut.as_mut().now_or_never().is_none());
        assert!(control.disabled.get());

        drop(fut);
        assert!(control.is_idle_with("Sign In"));
    }

    #[test]
    fn second_submit_while_busy_is_rejected() {
        let control = FakeControl::new("Sign In");
        let guard = enter_busy(&control, "Signing in...").unwrap();

        let outcome = block_on(submit(&control, "again", async { Ok::<_, ()>(()) }));
        assert_eq!(outcome, Err(SubmitError::Busy));
        assert_eq!(control.label(), "Signing in...");
        assert!(control.disabled.get());

        drop(guard);
        assert!(control.is_idle_with("Sign In"));
    }

    #[test]
    fn absent_control_is_reported() {
        assert_eq!(require_control(None::<FakeControl>).err(), Some(SubmitError::MissingControl));
        let control = require_control(Some(FakeControl::new("Sign In"))).unwrap();
        assert!(control.is_idle_with("Sign In"));
    }

    #[test]
    fn leave_busy_on_idle_control_is_noop() {
        let control = FakeControl::new("Sign In");
        leave_busy(&control);
        assert!(control.labels.borrow().is_empty());
        assert!(control.is_idle_with("Sign In"));
    }
}
