use tracing::debug;

use super::RootMargin;

// document geometry of one navigable section, sampled when needed
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    pub fn new(id: &str, top: f64, height: f64) -> Self {
        SectionBox {
            id: id.to_owned(),
            top,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct SectionEntry {
    pub id: String,
    pub intersecting: bool,
}

// SectionRegistry
//
// the navigable sections in document order, with the last intersection state the
// observer reported for each.  several may be flagged at once while the page
// moves; the registry only records, it does not pick a winner
#[derive(Clone, Debug, Default)]
pub struct SectionRegistry {
    entries: Vec<SectionEntry>,
}

impl SectionRegistry {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SectionRegistry {
            entries: ids
                .into_iter()
                .map(|id| SectionEntry {
                    id: id.into(),
                    intersecting: false,
                })
                .collect(),
        }
    }

    // returns false for ids that were never registered
    pub fn record(&mut self, id: &str, intersecting: bool) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.intersecting = intersecting;
                true
            }
            None => {
                debug!("intersection report for unregistered section {id}");
                false
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    #[cfg(test)]
    pub(crate) fn intersecting(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| e.intersecting)
            .map(|e| e.id.as_str())
    }
}

// which sections overlap the margin-adjusted viewport band; this is what the
// observer would report for a page held still at scroll_y
pub fn intersecting_at<'a>(
    boxes: &'a [SectionBox],
    scroll_y: f64,
    viewport_height: f64,
    margin: &RootMargin,
) -> Vec<&'a str> {
    let (band_top, band_bottom) = margin.vertical_band(scroll_y, viewport_height);

    boxes
        .iter()
        .filter(|b| b.top < band_bottom && b.bottom() > band_top)
        .map(|b| b.id.as_str())
        .collect()
}

// position fallback
//
// the section whose probe interval holds the scroll offset.  the interval starts
// probe_offset above the section and is as tall as the section, exclusive at the
// top and inclusive at the bottom; later sections win where intervals touch
pub fn active_by_position<'a>(
    scroll_y: f64,
    boxes: &'a [SectionBox],
    probe_offset: f64,
) -> Option<&'a str> {
    boxes
        .iter()
        .rev()
        .find(|b| {
            let start = b.top - probe_offset;
            scroll_y > start && scroll_y <= start + b.height
        })
        .map(|b| b.id.as_str())
}

// a change of highlighted section; current is None when the indicator comes off
// every link
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub previous: Option<String>,
    pub current: Option<String>,
}

// ActiveSection
//
// last reported intersecting section wins.  callbacks can arrive out of order
// relative to the scroll position, so during a fast scroll the highlight may sit
// on the wrong section for a frame; no ordering or ratio is consulted
#[derive(Clone, Debug, Default)]
pub struct ActiveSection {
    current: Option<String>,
}

impl ActiveSection {
    #[cfg(test)]
    pub(crate) fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    // a section leaving the band does not clear the highlight; only another
    // section entering it moves it
    pub fn report(&mut self, id: &str, intersecting: bool) -> Option<Highlight> {
        if !intersecting {
            return None;
        }

        self.set(id)
    }

    pub fn set(&mut self, id: &str) -> Option<Highlight> {
        if self.current.as_deref() == Some(id) {
            return None;
        }

        let previous = self.current.replace(id.to_owned());
        Some(Highlight {
            previous,
            current: Some(id.to_owned()),
        })
    }

    pub fn clear(&mut self) -> Option<Highlight> {
        let previous = self.current.take()?;
        Some(Highlight {
            previous: Some(previous),
            current: None,
        })
    }
}

// whether a nav link pointing at href should carry the active indicator
pub fn link_targets(href: &str, section_id: &str) -> bool {
    href.strip_prefix('#') == Some(section_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBox> {
        vec![
            SectionBox::new("home", 0.0, 800.0),
            SectionBox::new("about", 800.0, 800.0),
            SectionBox::new("projects", 1600.0, 800.0),
        ]
    }

    #[test]
    fn band_picks_the_section_near_the_top() {
        let margin: RootMargin = "-20% 0px -70% 0px".parse().unwrap();
        let boxes = page();

        assert_eq!(intersecting_at(&boxes, 850.0, 600.0, &margin), vec!["about"]);
        assert_eq!(intersecting_at(&boxes, 0.0, 600.0, &margin), vec!["home"]);
    }

    #[test]
    fn wide_band_sees_several_sections() {
        let margin: RootMargin = "0px".parse().unwrap();
        let boxes = page();

        assert_eq!(
            intersecting_at(&boxes, 700.0, 1000.0, &margin),
            vec!["home", "about", "projects"]
        );
    }

    #[test]
    fn last_report_wins_even_out_of_order() {
        let mut active = ActiveSection::default();

        active.report("projects", true);
        let hl = active.report("about", true).unwrap();

        assert_eq!(hl.previous.as_deref(), Some("projects"));
        assert_eq!(active.current(), Some("about"));
    }

    #[test]
    fn leaving_does_not_clear() {
        let mut active = ActiveSection::default();

        active.report("about", true);

        assert_eq!(active.report("about", false), None);
        assert_eq!(active.current(), Some("about"));
    }

    #[test]
    fn clearing_reports_once() {
        let mut active = ActiveSection::default();

        assert_eq!(active.clear(), None);

        active.set("about");
        let hl = active.clear().unwrap();

        assert_eq!(hl.previous.as_deref(), Some("about"));
        assert_eq!(hl.current, None);
        assert_eq!(active.current(), None);
        assert_eq!(active.clear(), None);
    }

    #[test]
    fn repeated_report_is_not_a_change() {
        let mut active = ActiveSection::default();

        assert!(active.report("home", true).is_some());
        assert!(active.report("home", true).is_none());
    }

    #[test]
    fn registry_tracks_flags_per_section() {
        let mut registry = SectionRegistry::new(["home", "about", "projects"]);

        assert!(registry.record("about", true));
        assert!(registry.record("projects", true));
        assert!(registry.record("about", false));
        assert!(!registry.record("blog", true));

        assert_eq!(registry.intersecting().collect::<Vec<_>>(), vec!["projects"]);
        assert!(registry.contains("home"));
        assert!(!registry.contains("blog"));
    }

    #[test]
    fn position_fallback_uses_probe_interval() {
        let boxes = page();

        assert_eq!(active_by_position(0.0, &boxes, 100.0), Some("home"));
        assert_eq!(active_by_position(699.0, &boxes, 100.0), Some("home"));
        assert_eq!(active_by_position(701.0, &boxes, 100.0), Some("about"));
        assert_eq!(active_by_position(1550.0, &boxes, 100.0), Some("projects"));
        assert_eq!(active_by_position(3000.0, &boxes, 100.0), None);
    }

    #[test]
    fn links_match_by_fragment() {
        assert!(link_targets("#about", "about"));
        assert!(!link_targets("#about-me", "about"));
        assert!(!link_targets("about", "about"));
    }
}
