use crate::avl_tree::node::Node;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

/// Returns the height of a subtree, where an absent subtree has height -1 and
/// a leaf has height 0.
pub fn height<T>(tree: &Tree<T>) -> isize {
    match tree {
        None => -1,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

/// Recomputes the height at the root of `tree` and restores the balance
/// invariant there, assuming both subtrees are themselves balanced and their
/// heights differ by at most two. A straight-line heavy subtree takes one
/// single rotation; a zig-zag heavy subtree takes a double rotation, applied
/// as a rotation on the heavy child followed by a rotation on the node. Ties
/// in the heavy child (only possible after a removal) take the single
/// rotation.
fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance() < 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance() > 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// precondition: there exists a minimum node in the tree
//
// Rebalances every level it descended through, since removing the minimum can
// shrink heights along the whole path.
fn remove_min<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    let descend = match tree {
        Some(ref node) => node.left.is_some(),
        None => unreachable!(),
    };

    if descend {
        let min = match tree {
            Some(ref mut node) => remove_min(&mut node.left),
            None => unreachable!(),
        };
        balance(tree);
        min
    } else {
        match tree.take() {
            Some(mut node) => {
                *tree = node.right.take();
                node
            },
            None => unreachable!(),
        }
    }
}

fn combine_subtrees<T>(left_tree: Tree<T>, mut right_tree: Tree<T>) -> Tree<T> {
    let mut new_root = remove_min(&mut right_tree);
    new_root.left = left_tree;
    new_root.right = right_tree;
    Some(new_root)
}

/// Inserts a key into the subtree, rebalancing every ancestor of the new node
/// on the way back up. Returns `false` without touching the tree if the key
/// is already present.
pub fn insert<T>(tree: &mut Tree<T>, key: T) -> bool
where
    T: Ord,
{
    let inserted = match tree {
        Some(ref mut node) => match key.cmp(&node.key) {
            Ordering::Less => insert(&mut node.left, key),
            Ordering::Greater => insert(&mut node.right, key),
            Ordering::Equal => return false,
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return true;
        },
    };

    balance(tree);
    inserted
}

/// Removes a key from the subtree and returns it, rebalancing every level on
/// the way back up. A node with two children is replaced by the minimum of
/// its right subtree. Returns `None` without touching the tree if the key is
/// absent.
pub fn remove<T>(tree: &mut Tree<T>, key: &T) -> Option<T>
where
    T: Ord,
{
    let removed = match tree.take() {
        Some(mut node) => match key.cmp(&node.key) {
            Ordering::Less => {
                let removed = remove(&mut node.left, key);
                *tree = Some(node);
                removed
            },
            Ordering::Greater => {
                let removed = remove(&mut node.right, key);
                *tree = Some(node);
                removed
            },
            Ordering::Equal => {
                let unboxed_node = *node;
                let Node { key, left, right, .. } = unboxed_node;
                match (left, right) {
                    (None, right) => *tree = right,
                    (left, None) => *tree = left,
                    (left, right) => *tree = combine_subtrees(left, right),
                }
                Some(key)
            },
        },
        None => return None,
    };

    balance(tree);
    removed
}

pub fn contains<T>(tree: &Tree<T>, key: &T) -> bool
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        match key.cmp(&node.key) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return true,
        }
    }
    false
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

#[cfg(test)]
mod tests {
    use super::{contains, height, insert, min, remove, Tree};

    // Walks the whole subtree checking the balance invariant and the height
    // cache at every node.
    fn assert_invariants<T>(tree: &Tree<T>) -> isize {
        match tree {
            None => -1,
            Some(ref node) => {
                let left = assert_invariants(&node.left);
                let right = assert_invariants(&node.right);
                assert!((left - right).abs() <= 1, "balance invariant violated");
                assert_eq!(node.height, left.max(right) + 1, "stale height cache");
                node.height
            },
        }
    }

    #[test]
    fn test_single_rotation_left_heavy() {
        let mut tree: Tree<u32> = None;
        for key in [3, 2, 1] {
            assert!(insert(&mut tree, key));
            assert_invariants(&tree);
        }
        assert_eq!(height(&tree), 1);
        assert_eq!(tree.as_ref().map(|node| &node.key), Some(&2));
    }

    #[test]
    fn test_single_rotation_right_heavy() {
        let mut tree: Tree<u32> = None;
        for key in [1, 2, 3] {
            assert!(insert(&mut tree, key));
            assert_invariants(&tree);
        }
        assert_eq!(height(&tree), 1);
        assert_eq!(tree.as_ref().map(|node| &node.key), Some(&2));
    }

    #[test]
    fn test_double_rotation_left_right() {
        let mut tree: Tree<u32> = None;
        for key in [3, 1, 2] {
            assert!(insert(&mut tree, key));
            assert_invariants(&tree);
        }
        assert_eq!(height(&tree), 1);
        assert_eq!(tree.as_ref().map(|node| &node.key), Some(&2));
    }

    #[test]
    fn test_double_rotation_right_left() {
        let mut tree: Tree<u32> = None;
        for key in [1, 3, 2] {
            assert!(insert(&mut tree, key));
            assert_invariants(&tree);
        }
        assert_eq!(height(&tree), 1);
        assert_eq!(tree.as_ref().map(|node| &node.key), Some(&2));
    }

    #[test]
    fn test_insert_duplicate_leaves_tree_unchanged() {
        let mut tree: Tree<u32> = None;
        for key in [2, 1, 3] {
            insert(&mut tree, key);
        }
        assert!(!insert(&mut tree, 1));
        assert_invariants(&tree);
        assert_eq!(height(&tree), 1);
    }

    #[test]
    fn test_remove_two_children_uses_right_minimum() {
        let mut tree: Tree<u32> = None;
        for key in [4, 2, 6, 1, 3, 5, 7] {
            insert(&mut tree, key);
        }

        assert_eq!(remove(&mut tree, &4), Some(4));
        assert_invariants(&tree);
        assert_eq!(tree.as_ref().map(|node| &node.key), Some(&5));
        assert!(!contains(&tree, &4));
    }

    #[test]
    fn test_remove_rebalances_every_ancestor() {
        // Fibonacci-shaped tree: the worst case for deletion, where removing
        // one leaf forces rotations on the entire root path.
        let mut tree: Tree<u32> = None;
        for key in [8, 5, 11, 3, 7, 10, 12, 2, 4, 6, 9, 1] {
            insert(&mut tree, key);
        }
        assert_invariants(&tree);

        assert_eq!(remove(&mut tree, &12), Some(12));
        assert_invariants(&tree);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut tree: Tree<u32> = None;
        for key in [2, 1, 3] {
            insert(&mut tree, key);
        }
        assert_eq!(remove(&mut tree, &9), None);
        assert_invariants(&tree);
        assert_eq!(height(&tree), 1);
    }

    #[test]
    fn test_min_descends_all_left() {
        let mut tree: Tree<u32> = None;
        for key in [5, 3, 8, 1] {
            insert(&mut tree, key);
        }
        assert_eq!(min(&tree), Some(&1));
    }
}
