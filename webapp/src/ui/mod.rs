use std::{cell::RefCell, rc::Rc};

use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlFormElement, KeyboardEvent};

use portfolio::{
    classes,
    config::UiConfig,
    debounce::Debouncer,
    ids,
    menu::{MenuController, MenuKey},
    scroll::{Registration, RevealAction, RevealSet, ScrollCoordinator},
    storage::Preferences,
    submission::SubmissionTracker,
    theme::ThemeController,
};

use crate::common::storage::LocalStore;

mod dom;
mod listener;
mod observer;
mod timer;

use dom::{DocumentRoot, FormDom, MenuDom};
use listener::Listener;
use observer::Observer;
use timer::GlooTimer;

const REVEAL_KEY_ATTRIBUTE: &str = "data-reveal";

type SharedTheme = Rc<RefCell<ThemeController<LocalStore, DocumentRoot>>>;
type SharedTracker = Rc<RefCell<SubmissionTracker<FormDom, GlooTimer>>>;

// everything attached to the live document, held so it can all be taken off
// again
#[derive(Default)]
struct Bindings {
    listeners: Vec<Listener>,
    observers: Vec<Observer>,
    scroll: Option<Rc<RefCell<Debouncer<f64, GlooTimer>>>>,
    submission: Option<SharedTracker>,
}

impl Bindings {
    fn listen<F>(&mut self, target: &web_sys::EventTarget, event: &'static str, handler: F)
    where
        F: FnMut(Event) + 'static,
    {
        if let Some(listener) = Listener::attach(target, event, handler) {
            self.listeners.push(listener);
        }
    }
}

// UiContext
//
// the single owner of every piece of page interaction state.  created once when
// the app mounts; the theme is applied right away so it lands before the first
// paint, and the rest is bound to the document once it has rendered.  teardown
// removes every listener and observer, so an unmount/remount starts clean
pub struct UiContext {
    config: UiConfig,
    theme: SharedTheme,
    bindings: Option<Bindings>,
}

impl UiContext {
    pub fn new(config: &UiConfig) -> Self {
        let prefs = Preferences::new(LocalStore, &config.storage_prefix);
        let mut theme = ThemeController::new(prefs, DocumentRoot::new(), &config.theme_key);
        let initial = theme.init(dom::prefers_dark());
        debug!("initial theme {initial}");

        UiContext {
            config: config.clone(),
            theme: Rc::new(RefCell::new(theme)),
            bindings: None,
        }
    }

    pub fn bind(&mut self) {
        if self.bindings.is_some() {
            return;
        }

        let Some(document) = dom::document() else {
            warn!("no document to bind to");
            return;
        };

        let mut bindings = Bindings::default();

        bind_theme_toggle(&mut bindings, &self.theme);
        bind_menu(&mut bindings, &document);
        bind_scroll(&mut bindings, &self.config);
        bind_reveal(&mut bindings, &self.config);
        bind_submission(&mut bindings, &self.config);

        info!(
            "portfolio loaded: {} listeners, {} observers",
            bindings.listeners.len(),
            bindings.observers.len()
        );
        self.bindings = Some(bindings);
    }

    pub fn teardown(&mut self) {
        let Some(bindings) = self.bindings.take() else {
            return;
        };

        for listener in bindings.listeners {
            listener.detach();
        }
        for observer in bindings.observers {
            observer.disconnect();
        }
        if let Some(scroll) = bindings.scroll {
            scroll.borrow_mut().cancel();
        }
        if let Some(submission) = bindings.submission {
            submission.borrow_mut().cancel_clear();
        }

        debug!("ui context torn down");
    }
}

fn bind_theme_toggle(bindings: &mut Bindings, theme: &SharedTheme) {
    let Some(toggle) = dom::by_id(ids::THEME_TOGGLE) else {
        return;
    };

    let theme = theme.clone();
    bindings.listen(&toggle, "click", move |_| {
        let next = theme.borrow_mut().toggle();
        debug!("theme toggled to {next}");
    });
}

fn bind_menu(bindings: &mut Bindings, document: &web_sys::Document) {
    let panel = dom::by_id(ids::NAV_MENU);
    let toggle = dom::by_id(ids::NAV_TOGGLE);

    let menu = Rc::new(RefCell::new(MenuController::new(MenuDom {
        toggle: toggle.clone(),
        panel: panel.clone(),
    })));

    if let Some(toggle) = &toggle {
        let menu = menu.clone();
        bindings.listen(toggle, "click", move |_| {
            menu.borrow_mut().toggle();
        });
    }

    for link in dom::query_document(ids::NAV_LINKS) {
        let menu = menu.clone();
        bindings.listen(&link, "click", move |_| menu.borrow_mut().on_link_click());
    }

    {
        let menu = menu.clone();
        bindings.listen(document, "keydown", move |event: Event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if MenuKey::from_dom(&key.key(), key.shift_key()) == MenuKey::Escape {
                menu.borrow_mut().on_escape();
            }
        });
    }

    // tab containment only listens on the panel itself, so tabbing elsewhere on
    // the page is never intercepted
    if let Some(panel) = panel {
        let root = panel.clone();
        bindings.listen(&panel, "keydown", move |event: Event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let key = MenuKey::from_dom(&key.key(), key.shift_key());

            let focusables = dom::query_within(&root, ids::MENU_FOCUSABLE);
            let focused = dom::document()
                .and_then(|d| d.active_element())
                .and_then(|active| focusables.iter().position(|f| *f == active));

            if let Some(next) = menu.borrow().trap_focus(key, focused, focusables.len()) {
                event.prevent_default();
                dom::focus(&focusables[next]);
            }
        });
    }
}

fn bind_scroll(bindings: &mut Bindings, config: &UiConfig) {
    let sections = dom::query_document(ids::SECTIONS);
    let links = Rc::new(dom::query_document(ids::NAV_LINKS));

    let coordinator = Rc::new(RefCell::new(ScrollCoordinator::new(
        config,
        sections.iter().map(Element::id),
    )));

    // anchors: jump under the header instead of the browser's default jump
    let smooth = !dom::prefers_reduced_motion();
    for anchor in dom::query_document(ids::ANCHOR_LINKS) {
        let coordinator = coordinator.clone();
        let target_anchor = anchor.clone();
        bindings.listen(&anchor, "click", move |event: Event| {
            event.prevent_default();

            let href = target_anchor.get_attribute("href").unwrap_or_default();
            let target = href
                .strip_prefix('#')
                .filter(|id| !id.is_empty())
                .and_then(dom::by_id);

            match coordinator.borrow().scroll_target(target.as_ref().map(dom::document_top)) {
                Some(top) => dom::scroll_to(top, smooth),
                None => debug!("anchor {href} has no target"),
            }
        });
    }

    // active section from the observer, outside the debounce
    let observer = {
        let coordinator = coordinator.clone();
        let links = links.clone();
        Observer::new(&config.section_root_margin, 0.0, move |entry, _| {
            let id = entry.target().id();
            let highlight = coordinator
                .borrow_mut()
                .on_section_intersection(&id, entry.is_intersecting());
            if let Some(highlight) = highlight {
                dom::apply_highlight(&links, &highlight);
            }
        })
    };
    match observer {
        Some(observer) => {
            for section in &sections {
                observer.observe(section);
            }
            coordinator.borrow_mut().set_observing(true);
            bindings.observers.push(observer);
        }
        None => coordinator.borrow_mut().set_observing(false),
    }

    // threshold toggles, and the position fallback, behind the debounce
    let nav = dom::by_id(ids::NAV);
    let back_to_top = dom::by_id(ids::BACK_TO_TOP);
    let debounced = Rc::new(RefCell::new(Debouncer::new(
        GlooTimer,
        config.debounce_delay(),
        move |scroll_y: f64| {
            let frame = coordinator.borrow().on_scroll(scroll_y);
            if let Some(nav) = &nav {
                dom::set_class(nav, classes::SCROLLED, frame.navbar_shadow);
            }
            if let Some(back_to_top) = &back_to_top {
                dom::set_class(back_to_top, classes::VISIBLE, frame.back_to_top);
            }

            let mut coordinator = coordinator.borrow_mut();
            if coordinator.needs_position_fallback() {
                let boxes: Vec<_> = sections.iter().map(dom::section_box).collect();
                if let Some(highlight) = coordinator.highlight_by_position(scroll_y, &boxes) {
                    dom::apply_highlight(&links, &highlight);
                }
            }
        },
    )));

    if let Some(window) = dom::window() {
        let debounced = debounced.clone();
        bindings.listen(&window, "scroll", move |_| {
            debounced.borrow_mut().schedule(dom::scroll_y());
        });
    }

    // a reload can land mid-page, so settle the toggles once up front
    debounced.borrow_mut().schedule(dom::scroll_y());
    bindings.scroll = Some(debounced);
}

fn bind_reveal(bindings: &mut Bindings, config: &UiConfig) {
    let items = dom::query_document(&config.reveal_selector);
    if items.is_empty() {
        return;
    }

    let reduced = dom::prefers_reduced_motion();
    let reveal = Rc::new(RefCell::new(RevealSet::<u32>::new(reduced)));

    let observer = if reduced {
        None
    } else {
        let reveal = reveal.clone();
        Observer::new(
            &config.reveal_root_margin,
            config.reveal_threshold,
            move |entry, observer| {
                let target = entry.target();
                let Some(key) = target
                    .get_attribute(REVEAL_KEY_ATTRIBUTE)
                    .and_then(|k| k.parse::<u32>().ok())
                else {
                    return;
                };

                if reveal.borrow_mut().on_intersection(&key, entry.is_intersecting())
                    == RevealAction::Reveal
                {
                    dom::set_class(&target, classes::REVEALED, true);
                    observer.unobserve(&target);
                }
            },
        )
    };

    // without an observer nothing would ever reveal them, so leave them in their
    // final state
    let Some(observer) = observer else {
        debug!("reveal animations skipped for {} items", items.len());
        return;
    };

    for (key, item) in (0u32..).zip(items.iter()) {
        if reveal.borrow_mut().register(key) != Registration::Observe {
            continue;
        }

        // the observer finds items by this key; without it the item stays visible
        if let Err(err) = item.set_attribute(REVEAL_KEY_ATTRIBUTE, &key.to_string()) {
            warn!("could not tag reveal item {key}: {err:?}");
            continue;
        }
        dom::set_class(item, classes::REVEAL_PENDING, true);
        observer.observe(item);
    }

    bindings.observers.push(observer);
}

fn bind_submission(bindings: &mut Bindings, config: &UiConfig) {
    let form = dom::by_id(ids::CONTACT_FORM).and_then(|f| f.dyn_into::<HtmlFormElement>().ok());
    let frame = dom::by_id(ids::HIDDEN_FRAME);

    let (Some(form), Some(frame)) = (form, frame) else {
        debug!("no contact form or completion frame; submission tracking off");
        return;
    };

    let view = Rc::new(FormDom {
        form: Some(form.clone()),
        status: dom::by_id(ids::FORM_STATUS),
    });
    let tracker: SharedTracker = Rc::new(RefCell::new(SubmissionTracker::new(
        view,
        GlooTimer,
        config.status_clear_delay(),
        &config.sending_message,
        &config.success_message,
    )));

    {
        let tracker = tracker.clone();
        bindings.listen(&form, "submit", move |_| tracker.borrow_mut().on_submit());
    }
    {
        let tracker = tracker.clone();
        bindings.listen(&frame, "load", move |_| {
            tracker.borrow_mut().on_frame_load();
        });
    }

    bindings.submission = Some(tracker);
}
