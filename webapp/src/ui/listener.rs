use tracing::warn;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Event, EventTarget};

// Listener
//
// an attached event listener that remembers enough to take itself off again.
// the closure has to outlive the registration, so it lives here rather than
// being forgotten
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn attach<F>(target: &EventTarget, event: &'static str, handler: F) -> Option<Listener>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

        match target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(Listener {
                target: target.clone(),
                event,
                callback,
            }),
            Err(err) => {
                warn!("failed to attach {event} listener: {err:?}");
                None
            }
        }
    }

    pub fn detach(self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn!("failed to remove {} listener: {err:?}", self.event);
        }
    }
}
