use js_sys::Array;
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

// Observer
//
// an IntersectionObserver plus the closure it calls back into.  entries are
// handed over one at a time along with the observer itself, so a handler can
// unobserve its own target
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observer {
    // None if the browser has no IntersectionObserver or rejects the options
    pub fn new<F>(root_margin: &str, threshold: f64, mut handler: F) -> Option<Observer>
    where
        F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                match entry.dyn_into::<IntersectionObserverEntry>() {
                    Ok(entry) => handler(&entry, &observer),
                    Err(_) => warn!("intersection callback got a non-entry value"),
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(root_margin);
        options.set_threshold(&JsValue::from_f64(threshold));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => Some(Observer {
                observer,
                _callback: callback,
            }),
            Err(err) => {
                warn!("intersection observer unavailable: {err:?}");
                None
            }
        }
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    pub fn disconnect(self) {
        self.observer.disconnect();
    }
}
