use rankify::{ColumnKey, Direction};

/// Active column and its direction. Starts as `(state, asc)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub column: ColumnKey,
    pub direction: Direction,
}

impl SortState {
    pub fn new(column: ColumnKey, direction: Direction) -> Self {
        Self { column, direction }
    }

    /// State after a header activation on `clicked`: same column flips,
    /// another column starts ascending.
    pub fn next(self, clicked: ColumnKey) -> Self {
        if clicked == self.column {
            Self::new(self.column, self.direction.flip())
        } else {
            Self::new(clicked, Direction::Asc)
        }
    }
}
