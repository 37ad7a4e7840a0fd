//! k-permutations of `0..n` in lexicographic order.
//!
//! Uses the index/cycle bookkeeping scheme, so each step costs O(k) and no
//! permutation is materialised until it is yielded.

#[derive(Debug, Clone)]
pub struct Permutations {
    indices: Vec<usize>,
    cycles: Vec<usize>,
    k: usize,
    first: bool,
    done: bool,
}

impl Permutations {
    pub fn new(n: usize, k: usize) -> Self {
        let done = k > n;
        let cycles = if done {
            Vec::new()
        } else {
            (0..k).map(|i| n - i).collect()
        };

        Self {
            indices: (0..n).collect(),
            cycles,
            k,
            first: true,
            done,
        }
    }

    /// `n! / (n - k)!`, or zero when `k > n`. Saturates at `usize::MAX`.
    pub fn count_for(n: usize, k: usize) -> usize {
        if k > n {
            return 0;
        }
        ((n - k + 1)..=n).fold(1usize, |acc, x| acc.saturating_mul(x))
    }

    fn current(&self) -> Vec<usize> {
        self.indices[..self.k].to_vec()
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        if self.first {
            self.first = false;
            return Some(self.current());
        }

        let n = self.indices.len();
        for i in (0..self.k).rev() {
            self.cycles[i] -= 1;
            if self.cycles[i] == 0 {
                // 把位置 i 的元素移到尾端，重置該層計數
                self.indices[i..].rotate_left(1);
                self.cycles[i] = n - i;
            } else {
                let j = n - self.cycles[i];
                self.indices.swap(i, j);
                return Some(self.current());
            }
        }

        self.done = true;
        None
    }
}
