use knot_diagrams::diagram::{from_pd_code, Endpoint, PlanarDiagram};

pub const TREFOIL: [[usize; 4]; 3] = [[0, 1, 2, 3], [4, 5, 3, 2], [5, 4, 1, 0]];
pub const FIGURE_EIGHT: [[usize; 4]; 4] = [[4, 2, 5, 1], [8, 6, 1, 5], [6, 3, 7, 4], [2, 7, 3, 8]];

/// An unknot with five crossings that only needs decreasing moves.
pub const REDUCIBLE_UNKNOT: [[usize; 4]; 5] = [
    [8, 10, 7, 1],
    [7, 2, 6, 1],
    [5, 3, 6, 2],
    [4, 9, 5, 10],
    [4, 8, 3, 9],
];

pub fn trefoil() -> PlanarDiagram {
    from_pd_code(&TREFOIL).unwrap()
}

pub fn figure_eight() -> PlanarDiagram {
    from_pd_code(&FIGURE_EIGHT).unwrap()
}

pub fn five_two() -> PlanarDiagram {
    from_pd_code(&[[1, 5, 2, 4], [3, 9, 4, 8], [5, 1, 6, 10], [7, 3, 8, 2], [9, 7, 10, 6]]).unwrap()
}

/// Two trivalent vertices joined by three edges.
pub fn theta() -> PlanarDiagram {
    let mut d = PlanarDiagram::new();
    d.add_vertex(0, 3).unwrap();
    d.add_vertex(1, 3).unwrap();
    for p in 0..3 {
        d.connect(Endpoint::new(0, p), Endpoint::new(1, 2 - p)).unwrap();
    }
    d
}
