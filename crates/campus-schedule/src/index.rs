//! `TemporalIndex`: an unbalanced binary search tree of activities ordered by
//! `(TimeKey, ActivityId)`.
//!
//! # Ordering
//!
//! A new activity descends left while `(key, id)` is strictly smaller than the
//! node it is compared against, and right otherwise.  Every key in a left
//! subtree is therefore ≤ every key in the matching right subtree, which is
//! the precondition that makes the expiry merge below valid.
//!
//! # Shape
//!
//! No rebalancing is ever done.  Insertion order decides the shape, and the
//! shape is observable through [`TemporalIndex::snapshot_pre_order`], so
//! inserting already-sorted activities produces a right-leaning chain of
//! depth `n`.  Every traversal here uses an explicit stack instead of
//! recursion so that such chains cannot overflow the call stack.
//!
//! # Expiry
//!
//! [`TemporalIndex::remove_expired`] cleans both subtrees first, then tests
//! the node itself.  An expired node is replaced by its cleaned left subtree
//! with the cleaned right subtree grafted onto the left subtree's rightmost
//! node:
//!
//! ```text
//!        N (expired)            L
//!       / \                    / \
//!      L   R        ==>       …   …
//!     / \                          \
//!    …   …                          R
//! ```

use log::debug;

use campus_core::{Activity, TimeKey};

use crate::ScheduleResult;

type Link = Option<Box<TreeNode>>;

// ── TreeNode ──────────────────────────────────────────────────────────────────

struct TreeNode {
    /// Cached `activity.time_key()`, computed once on insert.
    key:      TimeKey,
    activity: Activity,
    left:     Link,
    right:    Link,
}

impl TreeNode {
    fn leaf(key: TimeKey, activity: Activity) -> Box<Self> {
        Box::new(Self { key, activity, left: None, right: None })
    }

    /// `true` if an entry with `(key, activity)` belongs in this node's left
    /// subtree.
    #[inline]
    fn goes_left(&self, key: TimeKey, activity: &Activity) -> bool {
        (key, activity.id) < (self.key, self.activity.id)
    }
}

// ── TemporalIndex ─────────────────────────────────────────────────────────────

/// Ordered multiset of activities keyed by start time, then id.
///
/// Duplicate ids are accepted; identical `(key, id)` pairs are kept in
/// insertion order.
#[derive(Default)]
pub struct TemporalIndex {
    root: Link,
    len:  usize,
}

impl TemporalIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index by inserting `activities` in order.
    pub fn from_activities<I>(activities: I) -> ScheduleResult<Self>
    where
        I: IntoIterator<Item = Activity>,
    {
        let mut index = Self::new();
        for activity in activities {
            index.insert(activity)?;
        }
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&TreeNode, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        deepest
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Insert `activity` at its ordered position.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::InvalidTimeFormat`](crate::ScheduleError::InvalidTimeFormat)
    /// if `start_time` does not parse.  The index is left untouched.
    pub fn insert(&mut self, activity: Activity) -> ScheduleResult<()> {
        let key = activity.time_key()?;

        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if node.goes_left(key, &activity) {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(TreeNode::leaf(key, activity));
        self.len += 1;
        Ok(())
    }

    /// Remove every activity whose start time is strictly before `cutoff`.
    ///
    /// Returns the number of activities removed.  Survivors keep their
    /// relative order.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::InvalidTimeFormat`](crate::ScheduleError::InvalidTimeFormat)
    /// if `cutoff` does not parse.  The index is left untouched.
    pub fn remove_expired(&mut self, cutoff: &str) -> ScheduleResult<usize> {
        let cutoff_key = TimeKey::parse(cutoff)?;
        let (root, removed) = prune(self.root.take(), cutoff_key);
        self.root = root;
        self.len -= removed;
        debug!("expired {removed} activities before {cutoff_key}; {} remain", self.len);
        Ok(removed)
    }

    /// Drop every stored activity.  Idempotent.
    pub fn clear(&mut self) {
        // Detach children before each node drops so teardown never recurses.
        let mut stack: Vec<Box<TreeNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Replace the contents with `activities`, inserted in the given order.
    ///
    /// Not atomic: if an activity fails to parse, the ones before it stay
    /// inserted and the rest are not attempted.
    pub fn reload<I>(&mut self, activities: I) -> ScheduleResult<()>
    where
        I: IntoIterator<Item = Activity>,
    {
        self.clear();
        for activity in activities {
            self.insert(activity)?;
        }
        Ok(())
    }

    // ── Views ─────────────────────────────────────────────────────────────

    /// Borrowing in-order iterator, ascending by `(time, id)`.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// All activities ascending by `(time, id)`.
    pub fn ordered_sequence(&self) -> Vec<Activity> {
        self.iter().cloned().collect()
    }

    /// All activities in tree pre-order (node, left subtree, right subtree).
    ///
    /// This exposes the tree's shape rather than time order.  Re-inserting
    /// the snapshot in sequence into an empty index rebuilds the same shape.
    pub fn snapshot_pre_order(&self) -> Vec<Activity> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&TreeNode> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(node.activity.clone());
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        out
    }
}

impl Drop for TemporalIndex {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'a> IntoIterator for &'a TemporalIndex {
    type Item = &'a Activity;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

// ── Iter ──────────────────────────────────────────────────────────────────────

/// In-order iterator returned by [`TemporalIndex::iter`].
pub struct Iter<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iter<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a TreeNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Activity;

    fn next(&mut self) -> Option<&'a Activity> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.activity)
    }
}

// ── Expiry internals ──────────────────────────────────────────────────────────

/// One pending unit of work in the post-order prune.
enum Step {
    /// Detach the children of this subtree and schedule them.
    Visit(Link),
    /// Both children are cleaned and sit on the result stack; decide the node.
    Decide(Box<TreeNode>),
}

/// Post-order removal of every node with `key < cutoff`, driven by an
/// explicit work stack.  Returns the new subtree root and the removal count.
fn prune(root: Link, cutoff: TimeKey) -> (Link, usize) {
    let mut work = vec![Step::Visit(root)];
    let mut cleaned: Vec<Link> = Vec::new();
    let mut removed = 0;

    while let Some(step) = work.pop() {
        match step {
            Step::Visit(None) => cleaned.push(None),
            Step::Visit(Some(mut node)) => {
                let left = node.left.take();
                let right = node.right.take();
                work.push(Step::Decide(node));
                work.push(Step::Visit(right));
                work.push(Step::Visit(left));
            }
            Step::Decide(mut node) => {
                let right = cleaned.pop().flatten();
                let left = cleaned.pop().flatten();
                if node.key < cutoff {
                    removed += 1;
                    cleaned.push(graft(left, right));
                } else {
                    node.left = left;
                    node.right = right;
                    cleaned.push(Some(node));
                }
            }
        }
    }

    debug_assert_eq!(cleaned.len(), 1, "prune must leave exactly one root");
    (cleaned.pop().flatten(), removed)
}

/// Hang `right` off the rightmost node of `left`.
///
/// Valid only when every key in `left` is ≤ every key in `right`.  During
/// expiry the cleaned `left` is always empty, since its keys never exceed the
/// expired node's, but the merge stays general.
fn graft(left: Link, right: Link) -> Link {
    let Some(mut left) = left else {
        return right;
    };
    if right.is_some() {
        let mut slot = &mut left.right;
        while let Some(node) = slot {
            slot = &mut node.right;
        }
        *slot = right;
    }
    Some(left)
}

#[cfg(test)]
mod graft_tests {
    use campus_core::Activity;

    use super::*;

    fn node(id: i32, minute: i64) -> Box<TreeNode> {
        let start = format!("2024-01-01 10:{minute:02}");
        let activity = Activity::new(id, "", "", start.as_str(), "");
        TreeNode::leaf(TimeKey(202_401_011_000 + minute), activity)
    }

    fn pre_order_ids(link: &Link) -> Vec<i32> {
        let mut out = Vec::new();
        let mut stack: Vec<&TreeNode> = link.as_deref().into_iter().collect();
        while let Some(n) = stack.pop() {
            out.push(n.activity.id.0);
            stack.extend(n.right.as_deref());
            stack.extend(n.left.as_deref());
        }
        out
    }

    #[test]
    fn empty_sides() {
        assert!(graft(None, None).is_none());
        assert_eq!(pre_order_ids(&graft(None, Some(node(1, 0)))), vec![1]);
        assert_eq!(pre_order_ids(&graft(Some(node(1, 0)), None)), vec![1]);
    }

    #[test]
    fn right_hangs_off_rightmost_of_left() {
        //   2          5
        //  / \    +   /
        // 1   3       4
        let mut left = node(2, 2);
        left.left = Some(node(1, 1));
        left.right = Some(node(3, 3));
        let mut right = node(5, 5);
        right.left = Some(node(4, 4));

        let merged = graft(Some(left), Some(right));
        assert_eq!(pre_order_ids(&merged), vec![2, 1, 3, 5, 4]);

        let three = merged.as_ref().and_then(|n| n.right.as_ref()).unwrap();
        assert_eq!(three.right.as_ref().map(|n| n.activity.id.0), Some(5));
    }
}
