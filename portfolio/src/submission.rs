use std::{rc::Rc, time::Duration};

use tracing::{debug, info};

use crate::debounce::Timer;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Completed,
    // the load fired with nothing in flight, e.g. the frame's own initial load
    Ignored,
}

// SubmissionView
//
// the status line and the form it reports on
pub trait SubmissionView {
    fn show_status(&self, text: &str);

    fn clear_status(&self);

    fn reset_form(&self);
}

// SubmissionTracker
//
// the form posts into a hidden frame, and the frame's load event is the only sign
// the post finished.  that frame also loads once on its own when the page comes
// up, so completion only counts while a submission is actually in flight
pub struct SubmissionTracker<V: SubmissionView + 'static, Tm: Timer> {
    state: SubmissionState,
    view: Rc<V>,
    timer: Tm,
    clear_delay: Duration,
    clear_pending: Option<Tm::Handle>,
    sending_message: String,
    success_message: String,
}

impl<V: SubmissionView + 'static, Tm: Timer> SubmissionTracker<V, Tm> {
    pub fn new(
        view: Rc<V>,
        timer: Tm,
        clear_delay: Duration,
        sending_message: &str,
        success_message: &str,
    ) -> Self {
        SubmissionTracker {
            state: SubmissionState::Idle,
            view,
            timer,
            clear_delay,
            clear_pending: None,
            sending_message: sending_message.to_owned(),
            success_message: success_message.to_owned(),
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn on_submit(&mut self) {
        // a clear left over from the previous submission would wipe the new
        // sending message
        self.cancel_clear();

        debug!("contact form submitted");
        self.state = SubmissionState::Submitting;
        self.view.show_status(&self.sending_message);
    }

    pub fn on_frame_load(&mut self) -> LoadOutcome {
        if self.state != SubmissionState::Submitting {
            debug!("ignoring frame load with no submission in flight");
            return LoadOutcome::Ignored;
        }

        info!("contact form submission completed");
        self.state = SubmissionState::Idle;
        self.view.show_status(&self.success_message);
        self.view.reset_form();

        self.cancel_clear();
        let view = self.view.clone();
        self.clear_pending = Some(
            self.timer
                .start(self.clear_delay, Box::new(move || view.clear_status())),
        );

        LoadOutcome::Completed
    }

    pub fn cancel_clear(&mut self) {
        if let Some(handle) = self.clear_pending.take() {
            self.timer.clear(handle);
        }
    }
}
