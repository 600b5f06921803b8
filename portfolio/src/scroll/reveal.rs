use std::{collections::HashMap, hash::Hash};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

// what the caller should do with an item it just registered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Registration {
    // put it in its pre-transition state and start observing it
    Observe,
    // already in its final state; no class, no observation
    Final,
}

// what the caller should do after an intersection report
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    // add the transition class and stop observing
    Reveal,
    Ignore,
}

// RevealSet
//
// one-shot fade-ins.  an item moves from pending to revealed at most once and
// never goes back; with reduced motion every item starts out revealed
#[derive(Debug)]
pub struct RevealSet<K: Eq + Hash> {
    items: HashMap<K, RevealState>,
    reduced_motion: bool,
}

impl<K: Eq + Hash> RevealSet<K> {
    pub fn new(reduced_motion: bool) -> Self {
        RevealSet {
            items: HashMap::new(),
            reduced_motion,
        }
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn register(&mut self, key: K) -> Registration {
        if self.reduced_motion {
            self.items.insert(key, RevealState::Revealed);
            return Registration::Final;
        }

        match self.items.entry(key).or_insert(RevealState::Pending) {
            RevealState::Pending => Registration::Observe,
            RevealState::Revealed => Registration::Final,
        }
    }

    pub fn on_intersection(&mut self, key: &K, intersecting: bool) -> RevealAction {
        if !intersecting {
            return RevealAction::Ignore;
        }

        match self.items.get_mut(key) {
            Some(state) if *state == RevealState::Pending => {
                *state = RevealState::Revealed;
                RevealAction::Reveal
            }
            _ => RevealAction::Ignore,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self, key: &K) -> Option<RevealState> {
        self.items.get(key).copied()
    }

    #[cfg(test)]
    pub(crate) fn pending(&self) -> usize {
        self.items
            .values()
            .filter(|s| **s == RevealState::Pending)
            .count()
    }
}
