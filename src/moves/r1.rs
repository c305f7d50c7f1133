//! Reidemeister I: removing and adding kinks.
use std::collections::BTreeSet;

use crate::diagram::{Endpoint, Framing, NodeKind, PlanarDiagram};
use crate::error::{precondition, DiagramResult};
use crate::moves::splice::{opposite, splice};
use crate::moves::{MoveKind, ReidemeisterMove, SearchConfig, Sign};
use crate::topology::{kink_sign, kinks};

/// Remove the kink at a crossing endpoint `(c, p)` joined to `(c, p + 1)`.
///
/// The two outer neighbours are joined. A crossing carrying two kinks becomes a disjoint unknot.
/// Framing drops by the kink's sign.
pub struct RemoveKink;

impl ReidemeisterMove for RemoveKink {
    type Location = Endpoint;
    const KIND: MoveKind = MoveKind::R1;
    const NAME: &'static str = "R1 remove";

    fn find(d: &PlanarDiagram, _config: &SearchConfig) -> Vec<Endpoint> {
        kinks(d)
    }

    fn rewrite(d: &mut PlanarDiagram, location: &Endpoint) -> DiagramResult<()> {
        let sign = kink_sign(d, *location)?;
        splice(d, &BTreeSet::from([location.node]), opposite)?;
        d.shift_framing(-Framing::from_integer(sign));
        Ok(())
    }
}

/// Add a kink of the given sign on the arc leaving an endpoint.
///
/// Framing rises by the kink's sign.
pub struct AddKink;

impl ReidemeisterMove for AddKink {
    type Location = (Endpoint, Sign);
    const KIND: MoveKind = MoveKind::R1;
    const NAME: &'static str = "R1 add";

    fn find(d: &PlanarDiagram, _config: &SearchConfig) -> Vec<(Endpoint, Sign)> {
        d.endpoints()
            .iter()
            .flat_map(|&e| Sign::BOTH.map(|s| (e, s)))
            .collect()
    }

    fn rewrite(d: &mut PlanarDiagram, location: &(Endpoint, Sign)) -> DiagramResult<()> {
        let (e, sign) = *location;
        let t = d.twin(e)?;
        if t == e {
            return precondition(format!("{e} is its own twin"));
        }
        let c = d.insert_node(NodeKind::Crossing, 4)?;
        let x = |p: usize| Endpoint::new(c, p);
        match sign {
            Sign::Positive => {
                d.connect(x(0), x(1))?;
                d.connect(x(2), e)?;
                d.connect(x(3), t)?;
            }
            Sign::Negative => {
                d.connect(x(1), x(2))?;
                d.connect(x(3), e)?;
                d.connect(x(0), t)?;
            }
        }
        d.shift_framing(Framing::from_integer(sign.value()));
        Ok(())
    }
}
