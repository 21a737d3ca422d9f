use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::model::PopupId;

/// Popups the user has marked as "Going".
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct GoingSet(BTreeSet<PopupId>);

impl GoingSet {
    /// Flips membership of `id` and returns whether it is now a member.
    pub fn toggle(&mut self, id: &PopupId) -> bool {
        if self.0.remove(id) {
            false
        } else {
            self.0.insert(id.clone());
            true
        }
    }

    pub fn has(&self, id: &PopupId) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PopupId> {
        self.0.iter()
    }

    /// Forgets popups that are not in `catalog`. Returns how many were dropped.
    pub fn retain_in(&mut self, catalog: &Catalog) -> usize {
        let before = self.0.len();
        self.0.retain(|id| catalog.contains(id));
        before - self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn toggle_flips_membership() {
        let mut set = GoingSet::default();
        let id = PopupId::new("9");

        assert!(set.toggle(&id));
        assert!(set.has(&id));
        assert_eq!(set.len(), 1);

        assert!(!set.toggle(&id));
        assert!(!set.has(&id));
        assert!(set.is_empty());
    }

    #[test]
    fn members_iterate_in_id_order() {
        let mut set = GoingSet::default();
        for id in ["b", "a", "c"] {
            set.toggle(&PopupId::new(id));
        }
        let ids: Vec<&str> = set.iter().map(PopupId::as_str).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn retain_in_drops_unlisted_popups() {
        let mut set = GoingSet::default();
        set.toggle(&PopupId::new("3"));
        set.toggle(&PopupId::new("gone"));

        assert_eq!(set.retain_in(&Catalog::seed()), 1);
        let ids: Vec<&str> = set.iter().map(PopupId::as_str).collect();
        assert_eq!(ids, ["3"]);

        assert_eq!(set.retain_in(&Catalog::empty()), 1);
        assert!(set.is_empty());
    }

    proptest! {
        #[test]
        fn toggle_twice_is_identity(
            members in proptest::collection::btree_set("[a-z0-9]{1,4}", 0..16),
            id in "[a-z0-9]{1,4}",
        ) {
            let mut set = GoingSet(members.into_iter().map(PopupId).collect());
            let before = set.clone();
            let id = PopupId::new(id);

            set.toggle(&id);
            set.toggle(&id);
            prop_assert_eq!(set, before);
        }
    }
}
