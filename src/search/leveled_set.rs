use std::collections::{BTreeSet, HashSet};

use crate::diagram::{canonical_key, CanonicalKey, PlanarDiagram};

/// How a [`LeveledSet`] decides that a diagram is already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Membership {
    /// Structural equality, node ids included.
    Structural,
    /// Equality of [`canonical_key`], so relabelled copies count as one.
    Key,
}

#[derive(Debug, Clone)]
enum Seen {
    Structural(HashSet<PlanarDiagram>),
    Key(BTreeSet<CanonicalKey>),
}

/// An append-only sequence of deduplicated levels of diagrams.
///
/// Each diagram is stored once, in the level that was open when it was first added. Searches
/// open a level per round and compare sets grown from different inputs with
/// [`LeveledSet::intersects`].
#[derive(Debug, Clone)]
pub struct LeveledSet {
    levels: Vec<Vec<PlanarDiagram>>,
    seen: Seen,
}

impl LeveledSet {
    pub fn new(membership: Membership) -> Self {
        let seen = match membership {
            Membership::Structural => Seen::Structural(HashSet::new()),
            Membership::Key => Seen::Key(BTreeSet::new()),
        };
        LeveledSet {
            levels: Vec::new(),
            seen,
        }
    }

    pub fn membership(&self) -> Membership {
        match self.seen {
            Seen::Structural(_) => Membership::Structural,
            Seen::Key(_) => Membership::Key,
        }
    }

    /// Open a new, empty level; later additions go there.
    pub fn new_level(&mut self) {
        self.levels.push(Vec::new());
    }

    /// Add `d` to the last level unless it is already present. Returns whether it was added.
    pub fn add(&mut self, d: PlanarDiagram) -> bool {
        let inserted = match &mut self.seen {
            Seen::Structural(seen) => seen.insert(d.clone()),
            Seen::Key(seen) => seen.insert(canonical_key(&d)),
        };
        if inserted {
            if self.levels.is_empty() {
                self.new_level();
            }
            if let Some(level) = self.levels.last_mut() {
                level.push(d);
            }
        }
        inserted
    }

    /// Add every diagram in `diagrams`, returning how many were new.
    pub fn extend(&mut self, diagrams: impl IntoIterator<Item = PlanarDiagram>) -> usize {
        let mut added = 0;
        for d in diagrams {
            if self.add(d) {
                added += 1;
            }
        }
        added
    }

    pub fn contains(&self, d: &PlanarDiagram) -> bool {
        match &self.seen {
            Seen::Structural(seen) => seen.contains(d),
            Seen::Key(seen) => seen.contains(&canonical_key(d)),
        }
    }

    pub fn levels(&self) -> &[Vec<PlanarDiagram>] {
        &self.levels
    }

    pub fn level(&self, i: usize) -> Option<&[PlanarDiagram]> {
        self.levels.get(i).map(Vec::as_slice)
    }

    pub fn last_level(&self) -> Option<&[PlanarDiagram]> {
        self.levels.last().map(Vec::as_slice)
    }

    /// All diagrams, level by level.
    pub fn iter(&self) -> impl Iterator<Item = &PlanarDiagram> {
        self.levels.iter().flatten()
    }

    /// Whether some diagram lies in both sets.
    pub fn intersects(&self, other: &LeveledSet) -> bool {
        match (&self.seen, &other.seen) {
            (Seen::Key(a), Seen::Key(b)) => {
                let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
                small.iter().any(|k| large.contains(k))
            }
            _ => self.iter().any(|d| other.contains(d)),
        }
    }

    pub fn len(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.iter().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::NodeId;

    fn relabelled_unknot(id: usize) -> PlanarDiagram {
        let mut d = PlanarDiagram::unknot();
        d.relabel_nodes(&[(NodeId(0), NodeId(id))].into()).unwrap();
        d
    }

    #[test]
    fn test_membership() {
        let mut structural = LeveledSet::new(Membership::Structural);
        let mut keyed = LeveledSet::new(Membership::Key);
        for set in [&mut structural, &mut keyed] {
            assert!(set.is_empty());
            assert!(set.add(PlanarDiagram::unknot()));
            assert!(!set.add(PlanarDiagram::unknot()));
            set.new_level();
        }
        assert!(structural.add(relabelled_unknot(5)));
        assert!(!keyed.add(relabelled_unknot(5)));
        assert!(keyed.contains(&relabelled_unknot(7)));
        assert!(!structural.contains(&relabelled_unknot(7)));

        assert_eq!(structural.len(), 2);
        assert_eq!(structural.levels().len(), 2);
        assert_eq!(structural.level(1).map(<[_]>::len), Some(1));
        assert_eq!(keyed.len(), 1);
        assert_eq!(keyed.last_level(), Some(&[][..]));
        assert!(structural.intersects(&keyed));
        assert!(keyed.intersects(&structural));
    }

    #[test]
    fn test_extend_counts_new_diagrams() {
        let mut set = LeveledSet::new(Membership::Key);
        let added = set.extend([
            PlanarDiagram::unknot(),
            relabelled_unknot(3),
            PlanarDiagram::new(),
        ]);
        assert_eq!(added, 2);
        assert_eq!(set.iter().count(), 2);
        let mut other = LeveledSet::new(Membership::Key);
        other.add(PlanarDiagram::new());
        assert!(set.intersects(&other));
        assert_eq!(set.membership(), Membership::Key);
    }
}
