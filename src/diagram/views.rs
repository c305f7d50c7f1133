use super::node::{Endpoint, NodeId};

/// An arc: an unordered pair of twin endpoints, stored with the smaller endpoint first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Arc {
    first: Endpoint,
    second: Endpoint,
}

impl Arc {
    pub fn new(a: Endpoint, b: Endpoint) -> Self {
        if a <= b {
            Arc {
                first: a,
                second: b,
            }
        } else {
            Arc {
                first: b,
                second: a,
            }
        }
    }

    pub fn endpoints(&self) -> [Endpoint; 2] {
        [self.first, self.second]
    }

    pub fn first(&self) -> Endpoint {
        self.first
    }

    pub fn second(&self) -> Endpoint {
        self.second
    }

    pub fn contains(&self, e: Endpoint) -> bool {
        self.first == e || self.second == e
    }

    /// The opposite end of the arc, if `e` is one of its ends.
    pub fn other(&self, e: Endpoint) -> Option<Endpoint> {
        if e == self.first {
            Some(self.second)
        } else if e == self.second {
            Some(self.first)
        } else {
            None
        }
    }

    pub fn is_loop(&self) -> bool {
        self.first.node == self.second.node
    }
}

/// A face: the cyclic sequence of endpoints met when walking its boundary.
///
/// The face holding endpoint `(n, p)` contains the corner between positions `p` and `p + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Face(pub(crate) Vec<Endpoint>);

impl Face {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Endpoint> {
        self.0.iter()
    }

    pub fn contains(&self, e: &Endpoint) -> bool {
        self.0.contains(e)
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.0.iter().map(|e| e.node)
    }
}

impl<'a> IntoIterator for &'a Face {
    type Item = &'a Endpoint;
    type IntoIter = core::slice::Iter<'a, Endpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
