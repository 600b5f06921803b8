use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

// MenuMirrors
//
// the three places the menu state shows up in the document: the toggle's active
// style, the panel's active style, and the toggle's aria-expanded flag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuMirrors {
    pub toggle_active: bool,
    pub panel_active: bool,
    pub expanded: bool,
}

impl From<MenuState> for MenuMirrors {
    fn from(state: MenuState) -> Self {
        let open = state.is_open();
        MenuMirrors {
            toggle_active: open,
            panel_active: open,
            expanded: open,
        }
    }
}

// MenuView
//
// receives all three mirrors in one call so there is never a moment where only
// some of them have been updated
pub trait MenuView {
    fn render(&mut self, mirrors: MenuMirrors);
}

// keys the menu cares about, already decoded from whatever the platform reports
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuKey {
    Escape,
    Tab { shift: bool },
    Other,
}

impl MenuKey {
    pub fn from_dom(key: &str, shift: bool) -> MenuKey {
        match key {
            "Escape" | "Esc" => MenuKey::Escape,
            "Tab" => MenuKey::Tab { shift },
            _ => MenuKey::Other,
        }
    }
}

pub struct MenuController<V: MenuView> {
    state: MenuState,
    view: V,
}

impl<V: MenuView> MenuController<V> {
    pub fn new(mut view: V) -> Self {
        view.render(MenuState::Closed.into());

        MenuController {
            state: MenuState::Closed,
            view,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> MenuState {
        self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn transition(&mut self, next: MenuState) {
        debug!("menu {:?} -> {:?}", self.state, next);
        self.state = next;
        self.view.render(next.into());
    }

    pub fn toggle(&mut self) -> MenuState {
        let next = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        self.transition(next);
        next
    }

    // idempotent; rendering closed over closed is harmless and keeps the mirrors
    // honest if something else touched them
    pub fn close(&mut self) {
        self.transition(MenuState::Closed);
    }

    pub fn on_link_click(&mut self) {
        self.close();
    }

    // returns true if the key was consumed
    pub fn on_escape(&mut self) -> bool {
        if self.state.is_open() {
            self.close();
            true
        } else {
            false
        }
    }

    // focus containment while open
    //
    // given the position of the focused element among the menu's focusable
    // elements, returns the index focus should wrap to, or None to let the key
    // through untouched
    pub fn trap_focus(&self, key: MenuKey, focused: Option<usize>, count: usize) -> Option<usize> {
        if !self.state.is_open() {
            return None;
        }

        match key {
            MenuKey::Tab { shift } => wrap_focus(shift, focused, count),
            _ => None,
        }
    }
}

pub fn wrap_focus(shift: bool, focused: Option<usize>, count: usize) -> Option<usize> {
    let last = count.checked_sub(1)?;
    let focused = focused?;

    match (shift, focused) {
        (true, 0) => Some(last),
        (false, i) if i == last => Some(0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorded {
        renders: Vec<MenuMirrors>,
    }

    impl MenuView for Recorded {
        fn render(&mut self, mirrors: MenuMirrors) {
            self.renders.push(mirrors);
        }
    }

    fn closed() -> MenuMirrors {
        MenuState::Closed.into()
    }

    #[test]
    fn starts_closed_with_closed_mirrors() {
        let menu = MenuController::new(Recorded::default());

        assert_eq!(menu.state(), MenuState::Closed);
        assert_eq!(menu.view().renders, vec![closed()]);
    }

    #[test]
    fn link_click_round_trip_restores_mirrors() {
        let mut menu = MenuController::new(Recorded::default());
        let before = *menu.view().renders.last().unwrap();

        menu.toggle();
        assert_eq!(
            *menu.view().renders.last().unwrap(),
            MenuMirrors {
                toggle_active: true,
                panel_active: true,
                expanded: true
            }
        );

        menu.on_link_click();
        assert_eq!(*menu.view().renders.last().unwrap(), before);
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn toggle_flips_both_ways() {
        let mut menu = MenuController::new(Recorded::default());

        assert_eq!(menu.toggle(), MenuState::Open);
        assert_eq!(menu.toggle(), MenuState::Closed);
    }

    #[test]
    fn close_is_idempotent() {
        let mut menu = MenuController::new(Recorded::default());

        menu.close();
        menu.close();

        assert_eq!(menu.state(), MenuState::Closed);
        assert!(menu.view().renders.iter().all(|m| *m == closed()));
    }

    #[test]
    fn escape_only_consumed_while_open() {
        let mut menu = MenuController::new(Recorded::default());

        assert!(!menu.on_escape());

        menu.toggle();
        assert!(menu.on_escape());
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn tab_wraps_last_to_first_and_back() {
        let mut menu = MenuController::new(Recorded::default());
        menu.toggle();

        let tab = MenuKey::Tab { shift: false };
        let shift_tab = MenuKey::Tab { shift: true };

        assert_eq!(menu.trap_focus(tab, Some(3), 4), Some(0));
        assert_eq!(menu.trap_focus(shift_tab, Some(0), 4), Some(3));
        assert_eq!(menu.trap_focus(tab, Some(1), 4), None);
        assert_eq!(menu.trap_focus(shift_tab, Some(2), 4), None);
    }

    #[test]
    fn no_trap_while_closed() {
        let menu = MenuController::new(Recorded::default());

        assert_eq!(menu.trap_focus(MenuKey::Tab { shift: false }, Some(3), 4), None);
        assert_eq!(menu.trap_focus(MenuKey::Tab { shift: true }, Some(0), 4), None);
    }

    #[test]
    fn focus_outside_menu_or_empty_menu_passes_through() {
        assert_eq!(wrap_focus(false, None, 4), None);
        assert_eq!(wrap_focus(false, Some(0), 0), None);
    }

    #[test]
    fn single_element_wraps_onto_itself() {
        assert_eq!(wrap_focus(false, Some(0), 1), Some(0));
        assert_eq!(wrap_focus(true, Some(0), 1), Some(0));
    }

    #[test]
    fn keys_decode_from_dom_names() {
        assert_eq!(MenuKey::from_dom("Escape", false), MenuKey::Escape);
        assert_eq!(MenuKey::from_dom("Tab", true), MenuKey::Tab { shift: true });
        assert_eq!(MenuKey::from_dom("a", false), MenuKey::Other);
    }
}
