use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, NodeList, ScrollBehavior, ScrollToOptions,
    Window,
};

use portfolio::{
    menu::{MenuMirrors, MenuView},
    scroll::{Highlight, SectionBox, link_targets},
    submission::SubmissionView,
    theme::{Theme, ThemeRoot},
};

const THEME_ATTRIBUTE: &str = "data-theme";

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn by_id(id: &str) -> Option<Element> {
    let element = document()?.get_element_by_id(id);
    if element.is_none() {
        debug!("no element #{id}");
    }
    element
}

fn collect(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_document(selector: &str) -> Vec<Element> {
    match document().map(|d| d.query_selector_all(selector)) {
        Some(Ok(list)) => collect(list),
        Some(Err(err)) => {
            warn!("bad selector {selector}: {err:?}");
            Vec::new()
        }
        None => Vec::new(),
    }
}

pub fn query_within(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => collect(list),
        Err(err) => {
            warn!("bad selector {selector}: {err:?}");
            Vec::new()
        }
    }
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        warn!("failed to set class {class}: {err:?}");
    }
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .is_some_and(|m| m.matches())
}

pub fn prefers_dark() -> bool {
    media_matches("(prefers-color-scheme: dark)")
}

pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

// top edge relative to the document rather than the viewport
pub fn document_top(element: &Element) -> f64 {
    element.get_bounding_client_rect().top() + scroll_y()
}

pub fn section_box(element: &Element) -> SectionBox {
    let rect = element.get_bounding_client_rect();
    SectionBox::new(&element.id(), rect.top() + scroll_y(), rect.height())
}

pub fn scroll_to(top: f64, smooth: bool) {
    let Some(window) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Auto
    });
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn focus(element: &Element) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.focus();
    }
}

// move the active indicator onto the links for the highlighted section and off
// every other one; with no current section it comes off all of them
pub fn apply_highlight(links: &[Element], highlight: &Highlight) {
    for link in links {
        let on = highlight.current.as_deref().is_some_and(|current| {
            link.get_attribute("href")
                .is_some_and(|href| link_targets(&href, current))
        });
        set_class(link, portfolio::classes::ACTIVE, on);
    }
}

// DocumentRoot
//
// the <html> element's data-theme attribute
pub struct DocumentRoot {
    element: Option<Element>,
}

impl DocumentRoot {
    pub fn new() -> Self {
        DocumentRoot {
            element: document().and_then(|d| d.document_element()),
        }
    }
}

impl ThemeRoot for DocumentRoot {
    fn theme(&self) -> Option<Theme> {
        self.element
            .as_ref()?
            .get_attribute(THEME_ATTRIBUTE)?
            .parse()
            .ok()
    }

    fn set_theme(&mut self, theme: Theme) {
        if let Some(element) = &self.element {
            if let Err(err) = element.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
                warn!("failed to set theme attribute: {err:?}");
            }
        }
    }
}

// MenuDom
//
// the hamburger toggle and the panel it opens; either may be missing
pub struct MenuDom {
    pub toggle: Option<Element>,
    pub panel: Option<Element>,
}

impl MenuView for MenuDom {
    fn render(&mut self, mirrors: MenuMirrors) {
        use portfolio::classes::ACTIVE;

        if let Some(toggle) = &self.toggle {
            set_class(toggle, ACTIVE, mirrors.toggle_active);
            let _ = toggle.set_attribute("aria-expanded", if mirrors.expanded { "true" } else { "false" });
        }
        if let Some(panel) = &self.panel {
            set_class(panel, ACTIVE, mirrors.panel_active);
        }
    }
}

// FormDom
//
// the contact form and its status line
pub struct FormDom {
    pub form: Option<HtmlFormElement>,
    pub status: Option<Element>,
}

impl SubmissionView for FormDom {
    fn show_status(&self, text: &str) {
        if let Some(status) = &self.status {
            status.set_text_content(Some(text));
        }
    }

    fn clear_status(&self) {
        if let Some(status) = &self.status {
            status.set_text_content(Some(""));
        }
    }

    fn reset_form(&self) {
        if let Some(form) = &self.form {
            form.reset();
        }
    }
}
