//! Square-grid coordinate helpers shared by grid games.

use rand::seq::SliceRandom;
use rand::Rng;

/// A position on the grid. Identity is by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The cell shifted by `(dx, dy)`. May fall outside the grid.
    pub fn offset(self, (dx, dy): (i16, i16)) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// True when the two cells differ by exactly one unit along exactly one axis.
    pub fn is_orthogonal_neighbor(self, other: Cell) -> bool {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        dx + dy == 1
    }
}

/// Whether `cell` lies on a `size` x `size` grid.
pub fn in_bounds(cell: Cell, size: i16) -> bool {
    cell.x >= 0 && cell.y >= 0 && cell.x < size && cell.y < size
}

/// Iterate every cell of a `size` x `size` grid in row-major order.
pub fn all_cells(size: i16) -> impl Iterator<Item = Cell> {
    (0..size).flat_map(move |y| (0..size).map(move |x| Cell::new(x, y)))
}

/// Pick a cell uniformly among those for which `is_occupied` is false.
///
/// Returns `None` when the grid is full.
pub fn random_free_cell<R, F>(size: i16, is_occupied: F, rng: &mut R) -> Option<Cell>
where
    R: Rng,
    F: Fn(Cell) -> bool,
{
    let free: Vec<Cell> = all_cells(size).filter(|&c| !is_occupied(c)).collect();
    free.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_in_bounds_edges() {
        assert!(in_bounds(Cell::new(0, 0), 12));
        assert!(in_bounds(Cell::new(11, 11), 12));
        assert!(!in_bounds(Cell::new(-1, 0), 12));
        assert!(!in_bounds(Cell::new(0, -1), 12));
        assert!(!in_bounds(Cell::new(12, 0), 12));
        assert!(!in_bounds(Cell::new(0, 12), 12));
    }

    #[test]
    fn test_offset_and_neighbors() {
        let c = Cell::new(5, 5);
        assert_eq!(c.offset((0, -1)), Cell::new(5, 4));
        assert!(c.is_orthogonal_neighbor(Cell::new(5, 6)));
        assert!(c.is_orthogonal_neighbor(Cell::new(4, 5)));
        assert!(!c.is_orthogonal_neighbor(Cell::new(6, 6)));
        assert!(!c.is_orthogonal_neighbor(c));
        assert!(!c.is_orthogonal_neighbor(Cell::new(5, 7)));
    }

    #[test]
    fn test_all_cells_count() {
        assert_eq!(all_cells(12).count(), 144);
        assert_eq!(all_cells(0).count(), 0);
    }

    #[test]
    fn test_random_free_cell_avoids_occupied() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let occupied = [Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)];
        for _ in 0..200 {
            let cell = random_free_cell(3, |c| occupied.contains(&c), &mut rng)
                .expect("grid has free cells");
            assert!(!occupied.contains(&cell));
            assert!(in_bounds(cell, 3));
        }
    }

    #[test]
    fn test_random_free_cell_last_slot() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let cell = random_free_cell(2, |c| c != Cell::new(1, 1), &mut rng);
        assert_eq!(cell, Some(Cell::new(1, 1)));
    }

    #[test]
    fn test_random_free_cell_full_grid() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(random_free_cell(4, |_| true, &mut rng), None);
    }
}
