//! Minimal nucleotide impact over ranges of a DNA sequence.
//!
//! ```
//! use genomic_range_query::Genome;
//!
//! let genome: Genome = "CAGCCTA".parse().unwrap();
//! assert_eq!(genome.min_impact(2..=4), 2);
//! assert_eq!(genome.min_impact(5..=5), 4);
//! assert_eq!(genome.min_impact(0..=6), 1);
//! ```

use std::ops::RangeInclusive;
use std::str::FromStr;

const NUCLEOTIDES: [char; 4] = ['A', 'C', 'G', 'T'];

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("invalid nucleotide {found:?} at position {position}")]
pub struct InvalidNucleotide {
    pub found: char,
    pub position: usize,
}

pub struct Genome {
    // prefix[i][k]: occurrences of NUCLEOTIDES[k] in the first `i` letters.
    prefix: Vec<[usize; 4]>,
}

impl FromStr for Genome {
    type Err = InvalidNucleotide;
    fn from_str(s: &str) -> Result<Self, InvalidNucleotide> {
        let mut prefix = vec![[0; 4]];
        let mut count = [0; 4];
        for (position, found) in s.chars().enumerate() {
            let k = NUCLEOTIDES
                .iter()
                .position(|&c| c == found)
                .ok_or(InvalidNucleotide { found, position })?;
            count[k] += 1;
            prefix.push(count);
        }
        Ok(Self { prefix })
    }
}

impl Genome {
    pub fn len(&self) -> usize { self.prefix.len() - 1 }
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Impact factors are A = 1, C = 2, G = 3, T = 4.
    ///
    /// # Panics
    /// Panics if `range` is empty or out of bounds.
    pub fn min_impact(&self, range: RangeInclusive<usize>) -> u8 {
        let (start, end) = range.into_inner();
        assert!(start <= end, "empty range {start}..={end}");
        assert!(end < self.len(), "{end} out of bounds for {}", self.len());
        let (lo, hi) = (&self.prefix[start], &self.prefix[end + 1]);
        (0..4).find(|&k| hi[k] > lo[k]).map_or(4, |k| k as u8 + 1)
    }
}

#[test]
fn sanity_check() {
    let genome: Genome = "CAGCCTA".parse().unwrap();
    assert_eq!(genome.len(), 7);
    let answers: Vec<_> = [(2, 4), (5, 5), (0, 6)]
        .into_iter()
        .map(|(p, q)| genome.min_impact(p..=q))
        .collect();
    assert_eq!(answers, [2, 4, 1]);

    let empty: Genome = "".parse().unwrap();
    assert!(empty.is_empty());
}

#[test]
fn invalid() {
    assert_eq!(
        "ACGU".parse::<Genome>().err(),
        Some(InvalidNucleotide { found: 'U', position: 3 })
    );
    assert_eq!(
        "acgt".parse::<Genome>().err().map(|e| e.to_string()),
        Some("invalid nucleotide 'a' at position 0".to_owned())
    );
}

#[cfg(test)]
mod tests {
    use rand::{seq::SliceRandom, Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    use super::*;

    #[test]
    fn random() {
        let mut rng = ChaCha20Rng::seed_from_u64(0x646e_615f_7175_6572);
        for _ in 0..100 {
            let len = rng.gen_range(1..50);
            let s: String = (0..len)
                .map(|_| *NUCLEOTIDES.choose(&mut rng).unwrap())
                .collect();
            let genome: Genome = s.parse().unwrap();
            for _ in 0..20 {
                let p = rng.gen_range(0..len);
                let q = rng.gen_range(p..len);
                let expected = s[p..=q]
                    .chars()
                    .map(|c| NUCLEOTIDES.iter().position(|&n| n == c).unwrap())
                    .min()
                    .unwrap() as u8
                    + 1;
                assert_eq!(genome.min_impact(p..=q), expected, "{s} {p} {q}");
            }
        }
    }
}
