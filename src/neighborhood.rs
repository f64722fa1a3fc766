/// Describes which adjacent cells are counted when the field is updated.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Neighborhood {
    /// The 4 orthogonally adjacent cells.
    VonNeumann,
    /// The 8 orthogonally and diagonally adjacent cells.
    Moore,
}
