use std::cmp::Ordering;

use log::debug;

/// Three-way classification of two snapshots of a collection.
///
/// `removed` holds elements present only in the source snapshot, `added`
/// those present only in the target snapshot, and `existed` the matched
/// pairs (source side, target side) so callers can inspect field changes
/// within a match.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchList<T> {
    pub removed: Vec<T>,
    pub added: Vec<T>,
    pub existed: Vec<(T, T)>,
}

impl<T> MatchList<T> {
    pub fn new() -> Self {
        MatchList {
            removed: Vec::new(),
            added: Vec::new(),
            existed: Vec::new(),
        }
    }

    /// True when every element matched up across both snapshots.
    pub fn is_unchanged(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }
}

impl<T> Default for MatchList<T> {
    fn default() -> Self {
        MatchList::new()
    }
}

/// Classifies every element of `source` and `target` into removed, added,
/// or existed, pairing up elements the comparator considers `Equal`.
///
/// The comparator defines matching identity, not full value equality: two
/// elements comparing `Equal` are the same logical entity even when other
/// fields differ, and the pair lands in `existed` with both sides retained.
/// It must impose a consistent total order over the compared elements; with
/// an inconsistent comparator the classification is unspecified, though the
/// call still returns.
///
/// An absent collection is passed as an empty slice; absent and empty
/// behave identically. Output buckets are ordered ascending by the
/// comparator rather than by input order, and the relative order of
/// elements the comparator considers equal is unspecified. The input
/// slices are never modified.
///
/// Runs in `O(n log n + m log m)`: both inputs are copied, sorted by the
/// comparator, and merged in a single two-cursor pass.
pub fn reconcile<T, F>(source: &[T], target: &[T], cmp: F) -> MatchList<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut results = MatchList::new();

    // Degenerate snapshots skip the sort and keep their original order.
    if source.is_empty() {
        results.added.extend(target.iter().cloned());
        return results;
    }
    if target.is_empty() {
        results.removed.extend(source.iter().cloned());
        return results;
    }

    // Working copies; the caller's slices stay untouched.
    let mut src = source.to_vec();
    let mut dst = target.to_vec();
    src.sort_by(|a, b| cmp(a, b));
    dst.sort_by(|a, b| cmp(a, b));

    debug!(
        "Merging {} source against {} target elements.",
        src.len(),
        dst.len()
    );

    let mut src_iter = src.into_iter();
    let mut dst_iter = dst.into_iter();
    let mut src_cur = src_iter.next();
    let mut dst_cur = dst_iter.next();

    // Two-cursor merge over the sorted copies. An exhausted side holds
    // None; element values play no part in the exhaustion test.
    loop {
        match (src_cur.take(), dst_cur.take()) {
            (None, None) => break,

            // Target exhausted; the rest of the source was removed.
            (Some(s), None) => {
                results.removed.push(s);
                src_cur = src_iter.next();
            }

            // Source exhausted; the rest of the target was added.
            (None, Some(d)) => {
                results.added.push(d);
                dst_cur = dst_iter.next();
            }

            (Some(s), Some(d)) => match cmp(&s, &d) {
                // Key missing on the target side.
                Ordering::Less => {
                    results.removed.push(s);
                    src_cur = src_iter.next();
                    dst_cur = Some(d);
                }

                // Key missing on the source side.
                Ordering::Greater => {
                    results.added.push(d);
                    src_cur = Some(s);
                    dst_cur = dst_iter.next();
                }

                // Present in both snapshots.
                Ordering::Equal => {
                    results.existed.push((s, d));
                    src_cur = src_iter.next();
                    dst_cur = dst_iter.next();
                }
            },
        }
    }

    results
}
