//! Myers diff
//!
//! Shortest-edit-script line diff, the default [`LineDiff`] implementation.
//! The algorithm runs in three phases: forward pass recording the furthest
//! x per diagonal (`compute_shortest_edit`), backtrack from the end point
//! through the recorded trace, and translation of the path into an edit
//! script. The edit script is then coalesced into spans.

use crate::artifacts::diff::line_diff::{LineDiff, Span, SpanKind};
use derive_new::new;

/// A single line-level edit
#[derive(Debug, Clone, PartialEq, Eq)]
enum Edit<T> {
    Delete { value: T },
    Insert { value: T },
    Equal { value: T },
}

/// Myers shortest-edit-script computation over two sequences
#[derive(Debug, Clone, PartialEq, Eq, new)]
struct EditScript<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<T: Eq + Clone> EditScript<'_, T> {
    /// Forward pass: for each edit distance d, record the furthest reachable
    /// x per diagonal k. The returned trace is what backtracking walks.
    fn compute_shortest_edit(&self) -> Vec<Vec<isize>> {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        let offset = (n + m) as usize;

        let mut v = vec![0; 2 * offset + 1];
        v[offset] = 0; // v[0] = 0

        let mut trace = Vec::new();

        for d in 0..=(n + m) {
            trace.push(v.clone());

            for k in (-d..=d).step_by(2) {
                let idx = (offset as isize + k) as usize;

                let mut x = if k == -d {
                    // we could have only come from k+1, thus an insertion
                    v[idx + 1]
                } else if k == d {
                    // we could have only come from k-1, thus a deletion
                    v[idx - 1] + 1
                } else {
                    // we could have come from either k-1 (deletion) or k+1 (insertion)
                    let x_del = v[idx - 1] + 1;
                    let x_ins = v[idx + 1];
                    if x_del > x_ins { x_del } else { x_ins }
                };

                let mut y = x - k;
                while x < n && y < m && self.a[x as usize] == self.b[y as usize] {
                    // snake
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

    fn backtrack(&self) -> Vec<(isize, isize, isize, isize)> {
        let (mut x, mut y) = (self.a.len() as isize, self.b.len() as isize);
        let offset = (x + y) as usize;
        let mut edit_path = Vec::new();

        let trace = self.compute_shortest_edit();

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
                edit_path.push((x - 1, y - 1, x, y));
                x -= 1;
                y -= 1;
            }

            if d > 0 {
                edit_path.push((prev_x, prev_y, x, y));
            }

            (x, y) = (prev_x, prev_y);
        }

        edit_path
    }

    fn diff(&self) -> Vec<Edit<T>> {
        // two empty sequences have nothing to align
        if self.a.is_empty() && self.b.is_empty() {
            return Vec::new();
        }

        let mut diff = Vec::new();

        let path = self.backtrack();

        for (prev_x, prev_y, x, y) in path {
            if x == prev_x {
                // Insert: only y increased
                if prev_y < self.b.len() as isize {
                    diff.push(Edit::Insert {
                        value: self.b[prev_y as usize].clone(),
                    });
                }
            } else if y == prev_y {
                // Delete: only x increased
                if prev_x < self.a.len() as isize {
                    diff.push(Edit::Delete {
                        value: self.a[prev_x as usize].clone(),
                    });
                }
            } else {
                // Equal: both increased (diagonal move)
                if prev_x < self.a.len() as isize {
                    diff.push(Edit::Equal {
                        value: self.a[prev_x as usize].clone(),
                    });
                }
            }
        }

        diff.reverse();
        diff
    }
}

/// Default line diff implementation
///
/// Splits both texts into terminator-keeping lines, computes the Myers edit
/// script and coalesces consecutive same-kind edits into spans.
#[derive(Debug, Clone, Copy, Default)]
pub struct MyersDiff;

impl LineDiff for MyersDiff {
    fn diff_lines(&self, before: &str, after: &str) -> Vec<Span> {
        let a = before.split_inclusive('\n').collect::<Vec<_>>();
        let b = after.split_inclusive('\n').collect::<Vec<_>>();

        coalesce(EditScript::new(&a, &b).diff())
    }
}

/// Merge consecutive edits of the same kind into single spans
fn coalesce(edits: Vec<Edit<&str>>) -> Vec<Span> {
    let mut runs: Vec<(SpanKind, String)> = Vec::new();

    for edit in edits {
        let (kind, value) = match edit {
            Edit::Insert { value } => (SpanKind::Added, value),
            Edit::Delete { value } => (SpanKind::Removed, value),
            Edit::Equal { value } => (SpanKind::Unchanged, value),
        };

        match runs.last_mut() {
            Some((last_kind, text)) if *last_kind == kind => text.push_str(value),
            _ => runs.push((kind, value.to_string())),
        }
    }

    runs.into_iter()
        .map(|(kind, text)| Span::new(kind, text))
        .collect()
}
