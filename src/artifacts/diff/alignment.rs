use derive_new::new;

/// One step of an alignment between two sequences.
///
/// `Match` carries the shared unit, `Delete` a unit present only on the
/// left side, `Insert` a unit present only on the right side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlignOp<T> {
    Match { value: T },
    Delete { value: T },
    Insert { value: T },
}

/// Greedy Myers alignment over two slices of comparable units.
///
/// This is the single sequence-alignment routine used by the differencer,
/// invoked once over lines and once over sub-line tokens. Equal units are
/// matched as early as possible on both sides (diagonal snakes are consumed
/// greedily), which fixes one deterministic alignment among the possible
/// longest common subsequences and keeps changed regions contiguous.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Alignment<'a, T> {
    left: &'a [T],
    right: &'a [T],
}

impl<'a, T: Eq + Clone> Alignment<'a, T> {
    /// Computes the ordered edit script transforming `left` into `right`.
    pub fn script(&self) -> Vec<AlignOp<T>> {
        if self.left.is_empty() && self.right.is_empty() {
            return Vec::new();
        }

        let mut script = Vec::new();
        for (prev_x, prev_y, x, y) in self.backtrack() {
            if x == prev_x {
                // only y advanced: a right-only unit
                if prev_y < self.right.len() as isize {
                    script.push(AlignOp::Insert {
                        value: self.right[prev_y as usize].clone(),
                    });
                }
            } else if y == prev_y {
                // only x advanced: a left-only unit
                if prev_x < self.left.len() as isize {
                    script.push(AlignOp::Delete {
                        value: self.left[prev_x as usize].clone(),
                    });
                }
            } else {
                // diagonal: both sides agree on this unit
                if prev_x < self.left.len() as isize {
                    script.push(AlignOp::Match {
                        value: self.left[prev_x as usize].clone(),
                    });
                }
            }
        }

        script.reverse();
        script
    }

    /// Runs the forward pass, recording the furthest-reaching x for every
    /// diagonal k at each edit distance d. The trace stops as soon as the
    /// bottom-right corner is reached.
    fn furthest_reaching(&self) -> Vec<Vec<isize>> {
        let (n, m) = (self.left.len() as isize, self.right.len() as isize);
        let offset = (n + m) as usize;

        let mut v = vec![0isize; 2 * offset + 1];
        let mut trace = Vec::new();

        for d in 0..=(n + m) {
            trace.push(v.clone());

            for k in (-d..=d).step_by(2) {
                let idx = (offset as isize + k) as usize;

                let mut x = if k == -d {
                    // reachable only from k+1: an insertion
                    v[idx + 1]
                } else if k == d {
                    // reachable only from k-1: a deletion
                    v[idx - 1] + 1
                } else {
                    let x_del = v[idx - 1] + 1;
                    let x_ins = v[idx + 1];
                    if x_del > x_ins { x_del } else { x_ins }
                };

                let mut y = x - k;
                while x < n && y < m && self.left[x as usize] == self.right[y as usize] {
                    x += 1;
                    y += 1;
                }

                v[idx] = x;

                if x >= n && y >= m {
                    return trace;
                }
            }
        }

        trace
    }

    /// Walks the trace backwards from the bottom-right corner, yielding
    /// `(prev_x, prev_y, x, y)` moves in reverse order.
    fn backtrack(&self) -> Vec<(isize, isize, isize, isize)> {
        let (mut x, mut y) = (self.left.len() as isize, self.right.len() as isize);
        let offset = (x + y) as usize;
        let mut moves = Vec::new();

        let trace = self.furthest_reaching();

        for (d, v) in trace.iter().enumerate().rev() {
            let k = x - y;

            let prev_k = if k == -(d as isize) {
                k + 1
            } else if k == (d as isize) {
                k - 1
            } else {
                let k_del = k - 1;
                let k_ins = k + 1;
                if v[(offset as isize + k_del) as usize] + 1 > v[(offset as isize + k_ins) as usize]
                {
                    k_del
                } else {
                    k_ins
                }
            };

            let prev_x = v[(offset as isize + prev_k) as usize];
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                moves.push((x - 1, y - 1, x, y));
                x -= 1;
                y -= 1;
            }

            if d > 0 {
                moves.push((prev_x, prev_y, x, y));
            }

            (x, y) = (prev_x, prev_y);
        }

        moves
    }
}
