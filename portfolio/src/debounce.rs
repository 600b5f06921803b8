use std::{cell::Cell, rc::Rc, time::Duration};

// Timer
//
// one-shot timers on the event loop.  the webapp backs this with gloo Timeouts;
// tests use a virtual clock so bursts can be replayed deterministically
pub trait Timer {
    type Handle;

    fn start(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle;

    // clearing a handle that already fired is a no-op
    fn clear(&self, handle: Self::Handle);
}

// Debouncer
//
// trailing-edge debounce: every schedule() clears the pending timer and starts a
// new one, so a burst of calls shorter than the delay runs the action once, with
// the arguments of the last call
pub struct Debouncer<T: 'static, Tm: Timer> {
    timer: Tm,
    delay: Duration,
    action: Rc<dyn Fn(T)>,
    pending: Option<Tm::Handle>,
    armed: Rc<Cell<bool>>,
}

impl<T: 'static, Tm: Timer> Debouncer<T, Tm> {
    pub fn new(timer: Tm, delay: Duration, action: impl Fn(T) + 'static) -> Self {
        Debouncer {
            timer,
            delay,
            action: Rc::new(action),
            pending: None,
            armed: Rc::new(Cell::new(false)),
        }
    }

    pub fn schedule(&mut self, args: T) {
        self.cancel();

        let action = self.action.clone();
        let armed = self.armed.clone();

        armed.set(true);
        self.pending = Some(self.timer.start(
            self.delay,
            Box::new(move || {
                armed.set(false);
                action(args);
            }),
        ));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.timer.clear(handle);
        }
        self.armed.set(false);
    }

    #[cfg(test)]
    pub(crate) fn is_pending(&self) -> bool {
        self.armed.get()
    }
}

// virtual clock for tests
//
// callbacks only run from advance(), in deadline order, so a test can interleave
// schedules and time passing however it likes
#[cfg(test)]
pub(crate) mod manual {
    use std::{cell::RefCell, rc::Rc, time::Duration};

    use super::Timer;

    struct Entry {
        id: u64,
        deadline: Duration,
        callback: Option<Box<dyn FnOnce()>>,
    }

    #[derive(Default)]
    struct Clock {
        now: Duration,
        next_id: u64,
        entries: Vec<Entry>,
    }

    #[derive(Clone, Default)]
    pub(crate) struct ManualTimer {
        clock: Rc<RefCell<Clock>>,
    }

    impl ManualTimer {
        pub(crate) fn new() -> Self {
            ManualTimer::default()
        }

        pub(crate) fn pending(&self) -> usize {
            self.clock.borrow().entries.len()
        }

        pub(crate) fn advance(&self, by: Duration) {
            let target = self.clock.borrow().now + by;

            loop {
                // pull the next due callback out before running it, since it may
                // start or clear timers itself
                let due = {
                    let mut clock = self.clock.borrow_mut();
                    let next = clock
                        .entries
                        .iter()
                        .enumerate()
                        .filter(|(_, e)| e.deadline <= target)
                        .min_by_key(|(_, e)| (e.deadline, e.id))
                        .map(|(i, _)| i);

                    match next {
                        Some(i) => {
                            let mut entry = clock.entries.remove(i);
                            clock.now = entry.deadline;
                            entry.callback.take()
                        }
                        None => {
                            clock.now = target;
                            None
                        }
                    }
                };

                match due {
                    Some(callback) => callback(),
                    None => break,
                }
            }
        }
    }

    impl Timer for ManualTimer {
        type Handle = u64;

        fn start(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> u64 {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let deadline = clock.now + delay;
            clock.entries.push(Entry {
                id,
                deadline,
                callback: Some(callback),
            });
            id
        }

        fn clear(&self, handle: u64) {
            self.clock.borrow_mut().entries.retain(|e| e.id != handle);
        }
    }
}
