use tracing::debug;

use crate::config::UiConfig;

mod margin;
mod reveal;
mod sections;

pub use margin::{MarginLength, RootMargin};
pub use reveal::{Registration, RevealAction, RevealSet, RevealState};
pub use sections::{
    ActiveSection, Highlight, SectionBox, SectionRegistry, active_by_position,
    intersecting_at, link_targets,
};

pub fn navbar_shadow(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

pub fn back_to_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

// where an anchor jump should land so the target is not hidden under the header;
// a missing target means there is nowhere to go
pub fn scroll_target(target_top: Option<f64>, header_offset: f64) -> Option<f64> {
    target_top.map(|top| top - header_offset)
}

// the result of one debounced scroll computation
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollFrame {
    pub scroll_y: f64,
    pub navbar_shadow: bool,
    pub back_to_top: bool,
}

// ScrollCoordinator
//
// owns everything derived from the scroll position.  the threshold toggles come
// from the debounced scroll handler; highlighting comes straight from the
// section observer, and only falls back to position math when there is no
// observer to drive it
pub struct ScrollCoordinator {
    navbar_threshold: f64,
    back_to_top_threshold: f64,
    header_offset: f64,
    probe_offset: f64,
    registry: SectionRegistry,
    active: ActiveSection,
    observing: bool,
}

impl ScrollCoordinator {
    pub fn new<I, S>(config: &UiConfig, section_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScrollCoordinator {
            navbar_threshold: config.navbar_shadow_threshold,
            back_to_top_threshold: config.back_to_top_threshold,
            header_offset: config.header_offset,
            probe_offset: config.section_probe_offset,
            registry: SectionRegistry::new(section_ids),
            active: ActiveSection::default(),
            observing: false,
        }
    }

    pub fn set_observing(&mut self, observing: bool) {
        debug!("section observation {}", if observing { "on" } else { "off" });
        self.observing = observing;
    }

    pub fn on_scroll(&self, scroll_y: f64) -> ScrollFrame {
        ScrollFrame {
            scroll_y,
            navbar_shadow: navbar_shadow(scroll_y, self.navbar_threshold),
            back_to_top: back_to_top_visible(scroll_y, self.back_to_top_threshold),
        }
    }

    pub fn needs_position_fallback(&self) -> bool {
        !self.observing
    }

    // outside every section's probe interval nothing is highlighted
    pub fn highlight_by_position(&mut self, scroll_y: f64, boxes: &[SectionBox]) -> Option<Highlight> {
        match active_by_position(scroll_y, boxes, self.probe_offset) {
            Some(id) => self.active.set(id),
            None => self.active.clear(),
        }
    }

    pub fn on_section_intersection(&mut self, id: &str, intersecting: bool) -> Option<Highlight> {
        if !self.registry.record(id, intersecting) {
            return None;
        }

        self.active.report(id, intersecting)
    }

    pub fn scroll_target(&self, target_top: Option<f64>) -> Option<f64> {
        scroll_target(target_top, self.header_offset)
    }

    #[cfg(test)]
    pub(crate) fn active(&self) -> Option<&str> {
        self.active.current()
    }
}
