//! Sample inputs shared by unit, integration, and CLI tests.
//!
//! `tinyG` is a 13-vertex graph with three components: `{0..=6}`, `{7, 8}`, and
//! `{9, 10, 11, 12}`. `tinyUF` is a stream of eleven pairs over ten elements
//! that leaves two components.

/// Number of vertices in `tinyG`.
pub const TINY_G_VERTICES: usize = 13;

/// Edges of `tinyG` in file order.
pub const TINY_G_EDGES: &[(usize, usize)] = &[
    (0, 5),
    (4, 3),
    (0, 1),
    (9, 12),
    (6, 4),
    (5, 4),
    (0, 2),
    (11, 12),
    (9, 10),
    (0, 6),
    (7, 8),
    (9, 11),
    (5, 3),
];

/// `tinyG` in the line-oriented graph format: vertex count, declared edge
/// count, then one `v w` pair per line.
pub const TINY_G_TEXT: &str = "13
13
0 5
4 3
0 1
9 12
6 4
5 4
0 2
11 12
9 10
0 6
7 8
9 11
5 3
";

/// Number of elements in `tinyUF`.
pub const TINY_UF_ELEMENTS: usize = 10;

/// Pairs of `tinyUF` in file order.
pub const TINY_UF_PAIRS: &[(usize, usize)] = &[
    (4, 3),
    (3, 8),
    (6, 5),
    (9, 4),
    (2, 1),
    (8, 9),
    (5, 0),
    (7, 2),
    (6, 1),
    (1, 0),
    (6, 7),
];

/// `tinyUF` in the line-oriented pair format: element count, then one `p q`
/// pair per line.
pub const TINY_UF_TEXT: &str = "10
4 3
3 8
6 5
9 4
2 1
8 9
5 0
7 2
6 1
1 0
6 7
";
