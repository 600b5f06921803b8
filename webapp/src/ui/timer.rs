use std::time::Duration;

use gloo_timers::callback::Timeout;

use portfolio::debounce::Timer;

// gloo timeouts cancel themselves when dropped, so holding the handle is what
// keeps a timer alive and clearing it is just letting go
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTimer;

impl Timer for GlooTimer {
    type Handle = Timeout;

    fn start(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, callback)
    }

    fn clear(&self, handle: Timeout) {
        drop(handle);
    }
}
