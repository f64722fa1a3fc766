//! Next-generation computation.
//!
//! Both paths read only the committed generation and build a brand-new row
//! set, so no cell ever observes a half-updated field. The rule is the same
//! for both neighborhoods: a live cell with 2 or 3 live neighbours survives,
//! a dead cell with exactly 3 is born, everything else is dead.

use crate::bit_row::BitRow;
use crate::field::ConwayField;
use crate::neighborhood::Neighborhood;

pub(crate) fn next_generation(field: &ConwayField) -> Vec<BitRow> {
    match field.neighborhood() {
        Neighborhood::VonNeumann => von_neumann(field),
        Neighborhood::Moore => moore(field.rows()),
    }
}

/// Scalar reference path: per-cell orthogonal neighbour count.
fn von_neumann(field: &ConwayField) -> Vec<BitRow> {
    let (width, height) = (field.width(), field.height());
    let mut rows = Vec::with_capacity(height);
    for y in 0..height {
        let mut row = BitRow::zero(width);
        for x in 0..width {
            let neibs = count_orthogonal(field, x, y);
            let alive = if field.get(x, y) {
                neibs == 2 || neibs == 3
            } else {
                neibs == 3
            };
            row.set(x, alive);
        }
        rows.push(row);
    }
    rows
}

fn count_orthogonal(field: &ConwayField, x: usize, y: usize) -> usize {
    let (width, height) = (field.width(), field.height());
    let x1 = if x == 0 { width - 1 } else { x - 1 };
    let x2 = if x == width - 1 { 0 } else { x + 1 };
    let y1 = if y == 0 { height - 1 } else { y - 1 };
    let y2 = if y == height - 1 { 0 } else { y + 1 };
    field.get(x, y1) as usize
        + field.get(x1, y) as usize
        + field.get(x2, y) as usize
        + field.get(x, y2) as usize
}

/// Bit-parallel path: whole rows at a time, never looping over columns.
/// Row 0 and the last row use the wraparound rows as their vertical
/// neighbours, so the torus needs no special-cased edge formula.
fn moore(rows: &[BitRow]) -> Vec<BitRow> {
    let last = rows.len() - 1;
    (0..rows.len())
        .map(|y| {
            let prev = &rows[if y == 0 { last } else { y - 1 }];
            let next = &rows[if y == last { 0 } else { y + 1 }];
            next_row(&rows[y], prev, next)
        })
        .collect()
}

/// Copy of `row` shifted one cell towards higher x, with the discarded bit
/// patched back in at index 0. The masking shift plus the seam patch is what
/// turns the topology-agnostic row into a one-step rotation around the torus.
fn wrap_left(row: &BitRow) -> BitRow {
    let mut out = row.clone();
    out.shift_left(1);
    out.set(0, row.get(row.count() - 1));
    out
}

/// Mirror image of [`wrap_left`]: bit x takes the state of cell x + 1.
fn wrap_right(row: &BitRow) -> BitRow {
    let mut out = row.clone();
    out.shift_right(1);
    out.set(row.count() - 1, row.get(0));
    out
}

/// Computes one row of the next generation from the row itself and its two
/// vertical neighbours in wraparound order.
///
/// The eight neighbour planes (one per Moore offset) are summed per bit
/// position with a carry-save adder tree, keeping the count as bit-planes
/// the whole way: four half-adders, one combine per half, one final
/// combine. Only the "exactly 2" and "exactly 3" outcomes are ever
/// distinguished, so the full 4-bit count is never materialized.
fn next_row(line: &BitRow, prev: &BitRow, next: &BitRow) -> BitRow {
    // a..h: bit x of each plane holds one of the eight neighbours of cell x.
    let mut a = wrap_right(prev); // north-east
    let b = prev.clone(); // north
    let mut c = wrap_left(prev); // north-west
    let d = wrap_right(line); // east
    let mut e = wrap_left(line); // west
    let f = wrap_right(next); // south-east
    let mut g = next.clone(); // south
    let h = wrap_left(next); // south-west

    // Half-adder level: each pair collapses to a sum plane (in place) and a
    // carry plane.
    let xab = &a & &b;
    a ^= &b;
    let xcd = &c & &d;
    c ^= &d;
    let xef = &e & &f;
    e ^= &f;
    let xgh = &g & &h;
    g ^= &h;

    // Per-half combine: a 3-bit partial sum for planes a..d and e..h. The
    // plain AND is the whole bit-2 carry here: a sum plane being 1 forces
    // its half-adder's carry to 0, so the cross term is identically zero.
    let carry_ac = &a & &c;
    a ^= &c;
    let b = &(&xab ^ &xcd) ^ &carry_ac;
    let c = &xab & &xcd;

    let carry_eg = &e & &g;
    e ^= &g;
    let f = &(&xef ^ &xgh) ^ &carry_eg;
    let g = &xef & &xgh;

    // Final combine of the two partial sums. The carry out of bit 2 is
    // dropped: it only fires at a full count of 8, which cannot read as
    // 2 or 3 below.
    let carry0 = &a & &e;
    a ^= &e;
    let mut carry1 = &b & &f;
    let mut b = &b ^ &f;
    carry1 |= &(&b & &carry0);
    b ^= &carry0;
    let c = &(&c ^ &g) ^ &carry1;

    // count == 2 is bits 010, count == 3 is bits 011.
    let not_c = !&c;
    let two_or_three = &not_c & &b;
    let three = &two_or_three & &a;
    let not_a = !&a;
    let two = &two_or_three & &not_a;

    let born = &!line & &three;
    let kept = line & &(&two | &three);
    &born | &kept
}
