use crate::bit_row::BitRow;
use crate::neighborhood::Neighborhood;
use crate::step;

/// Game of Life field on a torus: one packed [`BitRow`] per grid row, plus
/// the generation counter. The neighborhood is fixed at construction.
///
/// All invalid uses (zero dimensions, out-of-range coordinates) are
/// programming errors and panic; there is no recoverable error surface.
pub struct ConwayField {
    rows: Vec<BitRow>,
    width: usize,
    height: usize,
    neighborhood: Neighborhood,
    time: usize,
}

impl ConwayField {
    /// Creates a field filled with dead cells, at generation 0.
    pub fn blank(width: usize, height: usize, neighborhood: Neighborhood) -> Self {
        assert!(width >= 1 && height >= 1);
        Self {
            rows: (0..height).map(|_| BitRow::zero(width)).collect(),
            width,
            height,
            neighborhood,
            time: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn neighborhood(&self) -> Neighborhood {
        self.neighborhood
    }

    /// Number of generations computed since creation or the last `clear`.
    pub fn time(&self) -> usize {
        self.time
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        assert!(x < self.width && y < self.height);
        self.rows[y].get(x)
    }

    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        assert!(x < self.width && y < self.height);
        self.rows[y].set(x, value);
    }

    /// Snapshot of the whole field in row-major order.
    pub fn get_cells(&self) -> Vec<bool> {
        let mut cells = Vec::with_capacity(self.width * self.height);
        for row in &self.rows {
            for x in 0..self.width {
                cells.push(row.get(x));
            }
        }
        cells
    }

    /// Overwrites the whole field from a row-major snapshot.
    pub fn set_cells(&mut self, states: &[bool]) {
        assert_eq!(states.len(), self.width * self.height);
        for (y, row_states) in states.chunks_exact(self.width).enumerate() {
            for (x, &state) in row_states.iter().enumerate() {
                self.rows[y].set(x, state);
            }
        }
    }

    /// Kills every cell and resets the generation counter. The row storage
    /// is reused, not reallocated.
    pub fn clear(&mut self) {
        self.time = 0;
        for row in &mut self.rows {
            row.clear();
        }
    }

    /// Replaces every row with uniformly random cells. Reproducible when a
    /// seed is given, entropy-seeded otherwise. Leaves the generation
    /// counter alone.
    pub fn randomize(&mut self, seed: Option<u64>) {
        use rand::SeedableRng;

        let mut rng = match seed {
            Some(x) => rand_chacha::ChaCha8Rng::seed_from_u64(x),
            None => rand_chacha::ChaCha8Rng::from_entropy(),
        };
        for row in &mut self.rows {
            *row = BitRow::random(self.width, &mut rng);
        }
    }

    /// Puts the R-pentomino at the origin. The five cells fit any field of
    /// at least 3x3.
    pub fn put_r_pentomino(&mut self) {
        assert!(self.width >= 3 && self.height >= 3);
        for (x, y) in [(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)] {
            self.set(x, y, true);
        }
    }

    /// Advances the simulation by `iters_cnt` generations. Each step
    /// computes a complete fresh row set from the committed one before
    /// anything becomes visible, then bumps the counter by exactly 1.
    pub fn update(&mut self, iters_cnt: usize) {
        for _ in 0..iters_cnt {
            self.rows = step::next_generation(self);
            self.time += 1;
        }
    }

    pub(crate) fn rows(&self) -> &[BitRow] {
        &self.rows
    }
}
