use std::cell::Cell;
use std::rc::Rc;

use futures::future::FutureExt;
use log::{debug, info, warn};
use yew::functional::UseReducerDispatcher;

use super::form::ContactForm;
use super::state::{FormAction, FormState};
use super::timer::Timer;
use super::validation::{validate, ValidationError};
use crate::config::Timings;

/// Where the controller sends its view updates.
pub trait FormSink: Clone + 'static {
    fn send(&self, action: FormAction);
}

impl FormSink for UseReducerDispatcher<FormState> {
    fn send(&self, action: FormAction) {
        self.dispatch(action);
    }
}

/// What happens to a submit that arrives while another attempt is still waiting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReentryPolicy {
    /// Drop the new submit.
    #[default]
    Ignore,
    /// Start a new attempt; the older one's result is discarded when it lands.
    Allow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Rejected(ValidationError),
    Ignored,
}

/// Keeps the submit button busy for as long as it is alive.
///
/// Dropping the last guard clears the busy state, so every exit path of an
/// attempt restores the button, unwinding included.
struct BusyGuard<S: FormSink> {
    sink: S,
    in_flight: Rc<Cell<u32>>,
}

impl<S: FormSink> BusyGuard<S> {
    fn engage(sink: S, in_flight: Rc<Cell<u32>>) -> Self {
        in_flight.set(in_flight.get() + 1);
        sink.send(FormAction::SetBusy(true));
        Self { sink, in_flight }
    }
}

impl<S: FormSink> Drop for BusyGuard<S> {
    fn drop(&mut self) {
        let remaining = self.in_flight.get().saturating_sub(1);
        self.in_flight.set(remaining);
        if remaining == 0 {
            self.sink.send(FormAction::SetBusy(false));
        }
    }
}

/// Runs contact form submissions: validation, the simulated send and the
/// status message that follows.
#[derive(Clone)]
pub struct FormSubmissionController<T, S> {
    timer: T,
    sink: S,
    timings: Timings,
    policy: ReentryPolicy,
    last_attempt: Rc<Cell<u64>>,
    in_flight: Rc<Cell<u32>>,
}

impl<T: Timer, S: FormSink> FormSubmissionController<T, S> {
    pub fn new(timer: T, sink: S, timings: Timings) -> Self {
        Self {
            timer,
            sink,
            timings,
            policy: ReentryPolicy::default(),
            last_attempt: Rc::new(Cell::new(0)),
            in_flight: Rc::new(Cell::new(0)),
        }
    }

    pub fn with_policy(mut self, policy: ReentryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get() > 0
    }

    /// Handles one submit of the form. The caller has already suppressed the
    /// browser's own submit.
    pub async fn handle_submit(&self, form: ContactForm) -> SubmitOutcome {
        if self.policy == ReentryPolicy::Ignore && self.is_in_flight() {
            warn!(
                "Ignoring contact form submit, attempt {} is still in flight",
                self.last_attempt.get()
            );
            return SubmitOutcome::Ignored;
        }

        let attempt = self.last_attempt.get() + 1;
        self.last_attempt.set(attempt);

        let _busy = BusyGuard::engage(self.sink.clone(), self.in_flight.clone());
        self.sink.send(FormAction::Begin { attempt });
        debug!("Contact form attempt {} started", attempt);

        let outcome = match validate(&form) {
            Err(error) => {
                warn!("Contact form attempt {} rejected: {}", attempt, error);
                self.sink.send(FormAction::Rejected { attempt, error });
                SubmitOutcome::Rejected(error)
            }
            Ok(()) => {
                self.sink.send(FormAction::Submitting { attempt });
                match serde_json::to_string(&form) {
                    Ok(payload) => debug!("Simulating submission of {}", payload),
                    Err(e) => debug!("Could not serialize contact form: {}", e),
                }

                self.timer.sleep(self.timings.submit_delay_ms).await;

                self.sink.send(FormAction::Accepted { attempt });
                info!("Contact form attempt {} sent", attempt);
                self.schedule(self.timings.auto_hide_ms, FormAction::Hide { attempt });
                SubmitOutcome::Sent
            }
        };

        self.schedule(self.timings.reveal_delay_ms, FormAction::Reveal { attempt });
        outcome
    }

    fn schedule(&self, millis: u32, action: FormAction) {
        let sleep = self.timer.sleep(millis);
        let sink = self.sink.clone();
        self.timer.spawn(
            async move {
                sleep.await;
                sink.send(action);
            }
            .boxed_local(),
        );
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use futures::channel::oneshot;
    use futures::executor::{LocalPool, LocalSpawner};
    use futures::future::LocalBoxFuture;
    use futures::task::LocalSpawnExt;

    use super::*;
    use crate::contact::form::Field;
    use crate::contact::state::{MessageKind, SubmissionStatus};

    /// Timer whose clock only moves when a test advances it.
    #[derive(Clone)]
    struct ManualTimer {
        spawner: LocalSpawner,
        clock: Rc<RefCell<ManualClock>>,
    }

    #[derive(Default)]
    struct ManualClock {
        now: u64,
        pending: Vec<(u64, oneshot::Sender<()>)>,
    }

    impl Timer for ManualTimer {
        fn sleep(&self, millis: u32) -> LocalBoxFuture<'static, ()> {
            let (tx, rx) = oneshot::channel();
            let mut clock = self.clock.borrow_mut();
            let deadline = clock.now + u64::from(millis);
            clock.pending.push((deadline, tx));
            async move {
                let _ = rx.await;
            }
            .boxed_local()
        }

        fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
            self.spawner.spawn_local(task).unwrap();
        }
    }

    impl ManualTimer {
        /// Fires the earliest timers due by `limit`. Returns false when none are.
        fn fire_next(&self, limit: u64) -> bool {
            let mut clock = self.clock.borrow_mut();
            let Some(next) = clock.pending.iter().map(|(at, _)| *at).filter(|at| *at <= limit).min() else {
                return false;
            };
            clock.now = next;
            let (due, rest): (Vec<_>, Vec<_>) = clock.pending.drain(..).partition(|(at, _)| *at <= next);
            clock.pending = rest;
            drop(clock);
            for (_, tx) in due {
                let _ = tx.send(());
            }
            true
        }
    }

    #[derive(Clone, Default)]
    struct RecordingSink {
        state: Rc<RefCell<FormState>>,
        actions: Rc<RefCell<Vec<FormAction>>>,
    }

    impl FormSink for RecordingSink {
        fn send(&self, action: FormAction) {
            self.actions.borrow_mut().push(action.clone());
            self.state.borrow_mut().apply(action);
        }
    }

    struct Harness {
        pool: LocalPool,
        timer: ManualTimer,
        sink: RecordingSink,
        controller: FormSubmissionController<ManualTimer, RecordingSink>,
    }

    impl Harness {
        fn new(policy: ReentryPolicy) -> Self {
            let pool = LocalPool::new();
            let timer = ManualTimer {
                spawner: pool.spawner(),
                clock: Rc::default(),
            };
            let sink = RecordingSink::default();
            let controller =
                FormSubmissionController::new(timer.clone(), sink.clone(), Timings::default()).with_policy(policy);
            Self { pool, timer, sink, controller }
        }

        fn fill(&self, pairs: &[(Field, &str)]) {
            for (field, value) in pairs {
                self.sink.send(FormAction::Edit(*field, value.to_string()));
            }
        }

        fn submit_current(&mut self) -> Rc<RefCell<Option<SubmitOutcome>>> {
            let form = self.state().fields;
            self.submit(form)
        }

        fn submit(&mut self, form: ContactForm) -> Rc<RefCell<Option<SubmitOutcome>>> {
            let result = Rc::new(RefCell::new(None));
            let slot = result.clone();
            let controller = self.controller.clone();
            self.pool
                .spawner()
                .spawn_local(async move {
                    let outcome = controller.handle_submit(form).await;
                    *slot.borrow_mut() = Some(outcome);
                })
                .unwrap();
            self.pool.run_until_stalled();
            result
        }

        fn advance(&mut self, millis: u64) {
            let target = self.timer.clock.borrow().now + millis;
            loop {
                self.pool.run_until_stalled();
                if !self.timer.fire_next(target) {
                    break;
                }
            }
            self.timer.clock.borrow_mut().now = target;
        }

        fn state(&self) -> FormState {
            self.sink.state.borrow().clone()
        }

        fn actions(&self) -> Vec<FormAction> {
            self.sink.actions.borrow().clone()
        }
    }

    fn nika() -> [(Field, &'static str); 5] {
        [
            (Field::Name, "Nika"),
            (Field::Email, "nika@example.com"),
            (Field::Phone, "591 90 24 79"),
            (Field::Subject, "Hi"),
            (Field::Message, "Hello"),
        ]
    }

    #[test]
    fn valid_submission_succeeds_after_delay() {
        let mut h = Harness::new(ReentryPolicy::Ignore);
        h.fill(&nika());
        let outcome = h.submit_current();

        assert!(h.state().busy);
        assert_eq!(h.state().status, SubmissionStatus::Submitting);
        assert_eq!(*outcome.borrow(), None);

        h.advance(1_499);
        assert_eq!(h.state().status, SubmissionStatus::Submitting);
        assert!(h.state().busy);

        h.advance(1);
        let state = h.state();
        assert_eq!(state.status, SubmissionStatus::Success);
        assert!(!state.busy);
        assert!(state.fields.is_empty());
        let message = state.message.unwrap();
        assert_eq!(message.kind, MessageKind::Success);
        assert!(message.text.contains("591902479"));
        assert_eq!(*outcome.borrow(), Some(SubmitOutcome::Sent));
    }

    #[test]
    fn message_fades_in_after_reveal_delay() {
        let mut h = Harness::new(ReentryPolicy::Ignore);
        h.fill(&nika());
        h.submit_current();
        h.advance(1_500);
        assert!(!h.state().revealed);
        h.advance(10);
        assert!(h.state().revealed);
    }

    #[test]
    fn blank_name_fails_immediately() {
        let mut h = Harness::new(ReentryPolicy::Ignore);
        let outcome = h.submit(ContactForm::from_pairs([
            ("name", ""),
            ("email", "x@x.com"),
            ("subject", "s"),
            ("message", "m"),
        ]));

        let state = h.state();
        assert_eq!(state.status, SubmissionStatus::Failed);
        assert_eq!(state.message.unwrap().text, "გთხოვთ შეავსოთ ყველა სავალდებულო ველი");
        assert!(!state.busy);
        assert_eq!(*outcome.borrow(), Some(SubmitOutcome::Rejected(ValidationError::MissingField)));
    }

    #[test]
    fn bad_email_fails_immediately() {
        let mut h = Harness::new(ReentryPolicy::Ignore);
        h.fill(&[
            (Field::Name, "A"),
            (Field::Email, "not-an-email"),
            (Field::Subject, "s"),
            (Field::Message, "m"),
        ]);
        let outcome = h.submit_current();

        let state = h.state();
        assert_eq!(state.status, SubmissionStatus::Failed);
        assert_eq!(state.message.unwrap().text, "გთხოვთ შეიყვანოთ სწორი ელ-ფოსტის მისამართი");
        assert_eq!(state.fields.email, "not-an-email");
        assert_eq!(*outcome.borrow(), Some(SubmitOutcome::Rejected(ValidationError::InvalidEmail)));
    }

    #[test]
    fn busy_brackets_every_rejected_attempt() {
        let mut h = Harness::new(ReentryPolicy::Ignore);
        h.submit(ContactForm::default());

        let actions = h.actions();
        assert_eq!(actions.first(), Some(&FormAction::SetBusy(true)));
        assert_eq!(actions.last(), Some(&FormAction::SetBusy(false)));
        let rejected = actions
            .iter()
            .position(|a| matches!(a, FormAction::Rejected { .. }))
            .unwrap();
        assert_eq!(actions[rejected - 1], FormAction::Begin { attempt: 1 });
    }

    #[test]
    fn success_message_hides_after_eight_seconds() {
        let mut h = Harness::new(ReentryPolicy::Ignore);
        h.fill(&nika());
        h.submit_current();
        h.advance(1_500);

        h.advance(7_999);
        assert_eq!(h.state().status, SubmissionStatus::Success);
        assert!(h.state().message_visible());

        h.advance(1);
        assert_eq!(h.state().status, SubmissionStatus::Idle);
        assert!(!h.state().message_visible());
    }

    #[test]
    fn rejection_is_not_auto_hidden() {
        let mut h = Harness::new(ReentryPolicy::Ignore);
        h.submit(ContactForm::default());
        h.advance(60_000);
        assert_eq!(h.state().status, SubmissionStatus::Failed);
        assert!(h.state().revealed);
    }

    #[test]
    fn newer_attempt_supersedes_pending_auto_hide() {
        let mut h = Harness::new(ReentryPolicy::Ignore);
        h.fill(&nika());
        h.submit_current();
        h.advance(1_500);
        h.advance(3_000);

        h.submit(ContactForm::default());
        assert_eq!(h.state().status, SubmissionStatus::Failed);

        h.advance(5_000);
        assert_eq!(h.state().status, SubmissionStatus::Failed);
        assert!(h.state().message_visible());
    }

    #[test]
    fn second_submit_in_flight_is_ignored() {
        let mut h = Harness::new(ReentryPolicy::Ignore);
        h.fill(&nika());
        let first = h.submit_current();
        h.advance(500);
        let second = h.submit_current();

        assert_eq!(*second.borrow(), Some(SubmitOutcome::Ignored));
        assert_eq!(h.state().attempt, 1);

        h.advance(1_000);
        assert_eq!(*first.borrow(), Some(SubmitOutcome::Sent));
        let begins = h
            .actions()
            .iter()
            .filter(|a| matches!(a, FormAction::Begin { .. }))
            .count();
        assert_eq!(begins, 1);

        let third = h.submit(ContactForm::default());
        assert_eq!(*third.borrow(), Some(SubmitOutcome::Rejected(ValidationError::MissingField)));
    }

    #[test]
    fn allowed_resubmit_supersedes_and_keeps_busy_until_all_done() {
        let mut h = Harness::new(ReentryPolicy::Allow);
        let form = ContactForm::from_pairs([
            ("name", "Nika"),
            ("email", "nika@example.com"),
            ("subject", "Hi"),
            ("message", "Hello"),
        ]);
        let first = h.submit(form.clone());
        h.advance(500);
        let second = h.submit(form);
        assert_eq!(h.state().attempt, 2);

        h.advance(1_000);
        assert_eq!(*first.borrow(), Some(SubmitOutcome::Sent));
        assert_eq!(h.state().status, SubmissionStatus::Submitting);
        assert!(h.state().busy);

        h.advance(500);
        assert_eq!(*second.borrow(), Some(SubmitOutcome::Sent));
        assert_eq!(h.state().status, SubmissionStatus::Success);
        assert!(!h.state().busy);
    }

    #[test]
    fn busy_is_cleared_when_an_attempt_unwinds() {
        let sink = RecordingSink::default();
        let in_flight = Rc::new(Cell::new(0));
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _busy = BusyGuard::engage(sink.clone(), in_flight.clone());
            assert!(sink.state.borrow().busy);
            panic!("simulated failure");
        }));

        assert!(result.is_err());
        assert!(!sink.state.borrow().busy);
        assert_eq!(in_flight.get(), 0);
    }
}
