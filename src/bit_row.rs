use rand::Rng;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

type Word = u64;

const WORD_BITS: usize = Word::BITS as usize;

/// Fixed-length vector of single-bit cells packed into machine words.
///
/// Bit `i` lives at bit `i % 64` of word `i / 64`. Bits past `count` in the
/// last word are kept zero by every operation that could set them, so
/// equality and the word-wise operators never see garbage and adjacent rows
/// can never alias through the tail.
///
/// The shifts are masking shifts, not rotations: bits pushed past either end
/// are discarded and the vacated end is zero-filled. The row knows nothing
/// about grid topology; wraparound is reconstructed by the caller patching
/// the seam bit explicitly.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BitRow {
    words: Vec<Word>,
    count: usize,
}

impl BitRow {
    /// Creates an all-dead row of `count` cells.
    pub fn zero(count: usize) -> Self {
        assert!(count >= 1);
        Self {
            words: vec![0; count.div_ceil(WORD_BITS)],
            count,
        }
    }

    /// Creates a row whose cells are each alive with probability 1/2,
    /// filling whole backing words from the RNG rather than drawing per bit.
    pub fn random(count: usize, rng: &mut impl Rng) -> Self {
        let mut row = Self::zero(count);
        for word in row.words.iter_mut() {
            *word = rng.gen();
        }
        row.mask_tail();
        row
    }

    /// Number of cells in the row.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.count);
        self.words[index / WORD_BITS] >> (index % WORD_BITS) & 1 != 0
    }

    pub fn set(&mut self, index: usize, value: bool) {
        assert!(index < self.count);
        let mask = 1 << (index % WORD_BITS);
        if value {
            self.words[index / WORD_BITS] |= mask;
        } else {
            self.words[index / WORD_BITS] &= !mask;
        }
    }

    /// Kills every cell; `count` is unchanged.
    pub fn clear(&mut self) {
        for word in self.words.iter_mut() {
            *word = 0;
        }
    }

    /// Moves every bit towards higher indices by `amount`, zero-filling from
    /// index 0; bits pushed past `count` are discarded.
    pub fn shift_left(&mut self, amount: usize) {
        assert!(amount >= 1 && amount <= WORD_BITS);
        let last = self.words.len() - 1;
        if amount == WORD_BITS {
            for i in (1..=last).rev() {
                self.words[i] = self.words[i - 1];
            }
            self.words[0] = 0;
        } else {
            for i in (1..=last).rev() {
                self.words[i] = self.words[i] << amount | self.words[i - 1] >> (WORD_BITS - amount);
            }
            self.words[0] <<= amount;
        }
        self.mask_tail();
    }

    /// Moves every bit towards lower indices by `amount`, zero-filling from
    /// the top; bits pushed past index 0 are discarded.
    pub fn shift_right(&mut self, amount: usize) {
        assert!(amount >= 1 && amount <= WORD_BITS);
        let last = self.words.len() - 1;
        if amount == WORD_BITS {
            for i in 0..last {
                self.words[i] = self.words[i + 1];
            }
            self.words[last] = 0;
        } else {
            for i in 0..last {
                self.words[i] = self.words[i] >> amount | self.words[i + 1] << (WORD_BITS - amount);
            }
            self.words[last] >>= amount;
        }
    }

    /// Zeroes the unused bits of the last word.
    fn mask_tail(&mut self) {
        let used = self.count % WORD_BITS;
        if used != 0 {
            let last = self.words.len() - 1;
            self.words[last] &= !0 >> (WORD_BITS - used);
        }
    }
}

impl BitAndAssign<&BitRow> for BitRow {
    fn bitand_assign(&mut self, rhs: &BitRow) {
        assert_eq!(self.count, rhs.count);
        for (word, other) in self.words.iter_mut().zip(&rhs.words) {
            *word &= other;
        }
    }
}

impl BitOrAssign<&BitRow> for BitRow {
    fn bitor_assign(&mut self, rhs: &BitRow) {
        assert_eq!(self.count, rhs.count);
        for (word, other) in self.words.iter_mut().zip(&rhs.words) {
            *word |= other;
        }
    }
}

impl BitXorAssign<&BitRow> for BitRow {
    fn bitxor_assign(&mut self, rhs: &BitRow) {
        assert_eq!(self.count, rhs.count);
        for (word, other) in self.words.iter_mut().zip(&rhs.words) {
            *word ^= other;
        }
    }
}

impl BitAnd for &BitRow {
    type Output = BitRow;

    fn bitand(self, rhs: &BitRow) -> BitRow {
        let mut out = self.clone();
        out &= rhs;
        out
    }
}

impl BitOr for &BitRow {
    type Output = BitRow;

    fn bitor(self, rhs: &BitRow) -> BitRow {
        let mut out = self.clone();
        out |= rhs;
        out
    }
}

impl BitXor for &BitRow {
    type Output = BitRow;

    fn bitxor(self, rhs: &BitRow) -> BitRow {
        let mut out = self.clone();
        out ^= rhs;
        out
    }
}

impl Not for &BitRow {
    type Output = BitRow;

    fn not(self) -> BitRow {
        let mut out = BitRow {
            words: self.words.iter().map(|word| !word).collect(),
            count: self.count,
        };
        out.mask_tail();
        out
    }
}
