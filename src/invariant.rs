//! The Kauffman bracket, computed by state sum, and a unit-normalised fingerprint of it.
//!
//! Used as a knot invariant when checking that moves do not change the knot type.
use core::ops::{Add, Mul};
use std::collections::BTreeMap;

use num_traits::{One, Zero};

use crate::diagram::{Endpoint, NodeKind, Orientation, PlanarDiagram};
use crate::union_find::UnionFind;

/// A Laurent polynomial in `A` with integer coefficients.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Laurent {
    coefficients: BTreeMap<i64, i64>,
}

impl Laurent {
    pub fn monomial(coefficient: i64, exponent: i64) -> Self {
        let mut p = Laurent::zero();
        if coefficient != 0 {
            p.coefficients.insert(exponent, coefficient);
        }
        p
    }

    /// The loop value `-A^2 - A^-2`.
    pub fn delta() -> Self {
        Laurent::monomial(-1, 2) + Laurent::monomial(-1, -2)
    }

    pub fn coefficient(&self, exponent: i64) -> i64 {
        self.coefficients.get(&exponent).copied().unwrap_or(0)
    }

    pub fn min_exponent(&self) -> Option<i64> {
        self.coefficients.keys().next().copied()
    }

    pub fn max_exponent(&self) -> Option<i64> {
        self.coefficients.keys().next_back().copied()
    }

    pub fn pow(&self, n: usize) -> Self {
        (0..n).fold(Laurent::one(), |acc, _| acc * self.clone())
    }
}

impl Add for Laurent {
    type Output = Laurent;

    fn add(mut self, rhs: Laurent) -> Laurent {
        for (e, c) in rhs.coefficients {
            let entry = self.coefficients.entry(e).or_insert(0);
            *entry += c;
            if *entry == 0 {
                self.coefficients.remove(&e);
            }
        }
        self
    }
}

impl Mul for Laurent {
    type Output = Laurent;

    fn mul(self, rhs: Laurent) -> Laurent {
        let mut out = Laurent::zero();
        for (&e1, &c1) in &self.coefficients {
            for (&e2, &c2) in &rhs.coefficients {
                out = out + Laurent::monomial(c1 * c2, e1 + e2);
            }
        }
        out
    }
}

impl Zero for Laurent {
    fn zero() -> Self {
        Laurent {
            coefficients: BTreeMap::new(),
        }
    }

    fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }
}

impl One for Laurent {
    fn one() -> Self {
        Laurent::monomial(1, 0)
    }
}

/// The Kauffman bracket `<D>`, defined when every vertex has degree 2.
///
/// The A-smoothing of a crossing joins positions 0-1 and 2-3, the B-smoothing 1-2 and 3-0.
/// Virtual crossings and degree-2 vertices pass strands straight through.
pub fn bracket_polynomial<M: Orientation>(d: &PlanarDiagram<M>) -> Option<Laurent> {
    if d.nodes().any(|n| n.is_vertex() && n.degree() != 2) {
        return None;
    }

    let endpoints = d.endpoints();
    let index: BTreeMap<Endpoint, usize> =
        endpoints.iter().enumerate().map(|(i, &e)| (e, i)).collect();
    let join = |uf: &mut UnionFind, a: Endpoint, b: Endpoint| {
        if let (Some(&i), Some(&j)) = (index.get(&a), index.get(&b)) {
            uf.union(i, j);
        }
    };

    let mut base = UnionFind::new(endpoints.len());
    for arc in d.arcs() {
        let [a, b] = arc.endpoints();
        join(&mut base, a, b);
    }
    for node in d.nodes() {
        let id = node.id();
        match node.kind() {
            NodeKind::Vertex => join(&mut base, Endpoint::new(id, 0), Endpoint::new(id, 1)),
            NodeKind::VirtualCrossing => {
                join(&mut base, Endpoint::new(id, 0), Endpoint::new(id, 2));
                join(&mut base, Endpoint::new(id, 1), Endpoint::new(id, 3));
            }
            NodeKind::Crossing => {}
        }
    }

    let crossings = d.crossings();
    let n = crossings.len();
    let delta = Laurent::delta();
    let mut bracket = Laurent::zero();
    let snapshot = base.snapshot();
    for state in 0u64..(1u64 << n) {
        base.rollback(snapshot);
        let mut a_count = 0i64;
        for (i, &c) in crossings.iter().enumerate() {
            let e = |p: usize| Endpoint::new(c, p);
            if state >> i & 1 == 1 {
                a_count += 1;
                join(&mut base, e(0), e(1));
                join(&mut base, e(2), e(3));
            } else {
                join(&mut base, e(1), e(2));
                join(&mut base, e(3), e(0));
            }
        }
        let loops = base.components();
        let b_count = n as i64 - a_count;
        let term = Laurent::monomial(1, a_count - b_count) * delta.pow(loops.saturating_sub(1));
        bracket = bracket + term;
    }
    Some(bracket)
}

/// The bracket up to units `±A^k`: coefficients from the lowest exponent up, leading one positive.
pub fn fingerprint<M: Orientation>(d: &PlanarDiagram<M>) -> Option<Vec<i64>> {
    let bracket = bracket_polynomial(d)?;
    let (Some(lo), Some(hi)) = (bracket.min_exponent(), bracket.max_exponent()) else {
        return Some(Vec::new());
    };
    let mut coefficients: Vec<i64> = (lo..=hi).map(|e| bracket.coefficient(e)).collect();
    if coefficients[0] < 0 {
        coefficients.iter_mut().for_each(|c| *c = -*c);
    }
    Some(coefficients)
}
