/// Disjoint-set union over `0..n` with union by size.
///
/// Merges are recorded so a caller can roll back to an earlier snapshot, which the flype finder
/// uses to test several candidate cuts against one base partition.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    history: Vec<HistoryEntry>,
    components: usize,
}

#[derive(Debug, Clone)]
enum HistoryEntry {
    Noop,
    Merge {
        root: usize,
        parent: usize,
        size_parent: usize,
    },
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            history: Vec::new(),
            components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn components(&self) -> usize {
        self.components
    }

    pub fn find(&self, x: usize) -> usize {
        let mut node = x;
        while self.parent[node] != node {
            node = self.parent[node];
        }
        node
    }

    pub fn same(&self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Merge the classes of `x` and `y`, returning `true` if they were distinct.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            self.history.push(HistoryEntry::Noop);
            return false;
        }

        let (root, parent) = if self.size[root_x] >= self.size[root_y] {
            (root_y, root_x)
        } else {
            (root_x, root_y)
        };

        self.history.push(HistoryEntry::Merge {
            root,
            parent,
            size_parent: self.size[parent],
        });

        self.parent[root] = parent;
        self.size[parent] += self.size[root];
        self.components -= 1;
        true
    }

    pub fn snapshot(&self) -> usize {
        self.history.len()
    }

    pub fn rollback(&mut self, snapshot: usize) {
        while self.history.len() > snapshot {
            match self.history.pop() {
                Some(HistoryEntry::Merge {
                    root,
                    parent,
                    size_parent,
                }) => {
                    self.parent[root] = root;
                    self.size[parent] = size_parent;
                    self.components += 1;
                }
                Some(HistoryEntry::Noop) | None => {}
            }
        }
    }

    /// Group `0..n` by class, classes ordered by their smallest member.
    pub fn classes(&self) -> Vec<Vec<usize>> {
        let mut index: Vec<Option<usize>> = vec![None; self.len()];
        let mut classes: Vec<Vec<usize>> = Vec::new();
        for x in 0..self.len() {
            let root = self.find(x);
            match index[root] {
                Some(i) => classes[i].push(x),
                None => {
                    index[root] = Some(classes.len());
                    classes.push(vec![x]);
                }
            }
        }
        classes
    }
}
