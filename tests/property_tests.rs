//! Property-based tests for the containers, checked against std models.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::collections::{BTreeSet, HashMap as StdHashMap, VecDeque};

use classic_collections::{
    AnyDeque, AnyList, BinaryHeap, BinarySearchTree, CircularDoublyLinkedList,
    CircularLinkedList, CollectionError, Deque, DoublyLinkedList, HashMap, Max, SinglyLinkedList,
};

// =============================================================================
// GENERATORS
// =============================================================================

#[derive(Debug, Clone)]
enum ListOp {
    Add(i32),
    InsertBefore(i32, usize),
    InsertAfter(i32, usize),
    Remove(usize),
    Clear,
}

fn list_ops_strategy() -> impl Strategy<Value = Vec<ListOp>> {
    prop::collection::vec(
        prop_oneof![
            4 => any::<i32>().prop_map(ListOp::Add),
            2 => (any::<i32>(), 0..24usize).prop_map(|(v, i)| ListOp::InsertBefore(v, i)),
            2 => (any::<i32>(), 0..24usize).prop_map(|(v, i)| ListOp::InsertAfter(v, i)),
            2 => (0..24usize).prop_map(ListOp::Remove),
            1 => Just(ListOp::Clear),
        ],
        0..200,
    )
}

#[derive(Debug, Clone)]
enum MapOp {
    Set(String, u8),
    Delete(String),
}

fn key_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::char::range('a', 'f'), 1..4)
        .prop_map(|chars| chars.into_iter().collect())
}

fn map_ops_strategy() -> impl Strategy<Value = Vec<MapOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => (key_strategy(), any::<u8>()).prop_map(|(k, v)| MapOp::Set(k, v)),
            1 => key_strategy().prop_map(MapOp::Delete),
        ],
        0..300,
    )
}

// =============================================================================
// LIST MODEL CHECK
// =============================================================================

/// Replays `ops` on a fresh list and on a `Vec`, returning both for any
/// layout-specific checks the caller wants to add.
fn check_list_against_vec<L>(ops: &[ListOp]) -> Result<(L, Vec<i32>), TestCaseError>
where
    L: AnyList<i32> + Default,
    for<'a> &'a L: IntoIterator<Item = &'a i32>,
{
    let mut list = L::default();
    let mut model: Vec<i32> = Vec::new();

    for op in ops {
        let len = model.len();
        match *op {
            ListOp::Add(v) => {
                list.add(v);
                model.push(v);
            }
            ListOp::InsertBefore(v, i) => {
                let result = list.insert_before(v, i);
                if i < len {
                    prop_assert_eq!(result, Ok(()));
                    model.insert(i, v);
                } else {
                    prop_assert_eq!(result, Err(CollectionError::OutOfRange { index: i, len }));
                }
            }
            ListOp::InsertAfter(v, i) => {
                let result = list.insert_after(v, i);
                if i < len {
                    prop_assert_eq!(result, Ok(()));
                    model.insert(i + 1, v);
                } else {
                    prop_assert_eq!(result, Err(CollectionError::OutOfRange { index: i, len }));
                }
            }
            ListOp::Remove(i) => {
                let result = list.remove(i);
                if i < len {
                    prop_assert_eq!(result, Ok(model.remove(i)));
                } else {
                    prop_assert!(result.is_err());
                }
            }
            ListOp::Clear => {
                list.clear();
                model.clear();
            }
        }
        prop_assert_eq!(list.len(), model.len());
    }

    for (i, expected) in model.iter().enumerate() {
        prop_assert_eq!(list.get(i), Some(expected));
        prop_assert_eq!(list.index_of(expected), model.iter().position(|v| v == expected));
    }
    prop_assert_eq!(list.get(model.len()), None);
    prop_assert_eq!(list.is_empty(), model.is_empty());

    let walked: Vec<i32> = (&list).into_iter().copied().collect();
    prop_assert_eq!(&walked, &model);
    Ok((list, model))
}

/// Drains `iter` from the front and back in turn, so both cursors must meet
/// without skipping or repeating an element.
fn alternate_ends<I: DoubleEndedIterator<Item = i32>>(mut iter: I) -> Vec<i32> {
    let mut out = Vec::new();
    loop {
        match iter.next() {
            Some(v) => out.push(v),
            None => break,
        }
        match iter.next_back() {
            Some(v) => out.push(v),
            None => break,
        }
    }
    out
}

proptest! {
    #[test]
    fn prop_singly_matches_vec(ops in list_ops_strategy()) {
        check_list_against_vec::<SinglyLinkedList<i32>>(&ops)?;
    }

    #[test]
    fn prop_doubly_matches_vec(ops in list_ops_strategy()) {
        let (list, model) = check_list_against_vec::<DoublyLinkedList<i32>>(&ops)?;
        prop_assert!(list.iter_rev().eq(model.iter().rev()));
        prop_assert_eq!(
            alternate_ends(list.iter().copied()),
            alternate_ends(model.iter().copied())
        );
    }

    #[test]
    fn prop_circular_matches_vec(ops in list_ops_strategy()) {
        check_list_against_vec::<CircularLinkedList<i32>>(&ops)?;
    }

    #[test]
    fn prop_circular_doubly_matches_vec(ops in list_ops_strategy()) {
        let (list, model) = check_list_against_vec::<CircularDoublyLinkedList<i32>>(&ops)?;
        prop_assert!(list.iter_rev().eq(model.iter().rev()));
        prop_assert_eq!(
            alternate_ends(list.iter().copied()),
            alternate_ends(model.iter().copied())
        );
    }

    #[test]
    fn prop_doubly_reverse_is_mirror(values in prop::collection::vec(any::<i16>(), 0..100)) {
        let list: DoublyLinkedList<i16> = values.iter().copied().collect();
        let forward: Vec<_> = list.iter().copied().collect();
        let mut backward: Vec<_> = list.iter_rev().copied().collect();
        backward.reverse();
        prop_assert_eq!(&forward, &values);
        prop_assert_eq!(backward, values);
    }

    #[test]
    fn prop_circular_cycle_wraps(values in prop::collection::vec(any::<u8>(), 1..20), laps in 1..4usize) {
        let list: CircularDoublyLinkedList<u8> = values.iter().copied().collect();
        let walked: Vec<u8> = list.cycle().take(values.len() * laps).copied().collect();
        let expected: Vec<u8> = values.iter().copied().cycle().take(values.len() * laps).collect();
        prop_assert_eq!(walked, expected);
    }
}

// =============================================================================
// BINARY SEARCH TREE
// =============================================================================

proptest! {
    #[test]
    fn prop_bst_iter_is_sorted_set(
        values in prop::collection::vec(0..500i32, 0..200),
        removals in prop::collection::vec(0..500i32, 0..100),
    ) {
        let mut tree = BinarySearchTree::new();
        let mut model = BTreeSet::new();
        for &v in &values {
            prop_assert_eq!(tree.add(v), model.insert(v));
        }
        for v in &removals {
            prop_assert_eq!(tree.delete(v), model.remove(v));
        }

        let in_order: Vec<i32> = tree.iter().copied().collect();
        let expected: Vec<i32> = model.iter().copied().collect();
        prop_assert_eq!(in_order, expected);
        prop_assert_eq!(tree.len(), model.len());
        prop_assert_eq!(tree.min(), model.first());
        prop_assert_eq!(tree.max(), model.last());
        for v in 0..500 {
            prop_assert_eq!(tree.has(&v), model.contains(&v));
        }
    }
}

// =============================================================================
// BINARY HEAP
// =============================================================================

proptest! {
    #[test]
    fn prop_heap_polls_in_order(values in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut heap = BinaryHeap::new();
        for &v in &values {
            heap.add(v);
        }
        prop_assert_eq!(heap.len(), values.len());

        let mut sorted = values.clone();
        sorted.sort();
        let mut polled = Vec::with_capacity(values.len());
        while let Ok(v) = heap.poll() {
            polled.push(v);
        }
        prop_assert_eq!(polled, sorted);
        prop_assert_eq!(heap.peek(), Err(CollectionError::Empty));
    }

    #[test]
    fn prop_heap_max_matches_std(values in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut heap: BinaryHeap<i32, Max> = BinaryHeap::with_comparator(Max);
        heap.extend(values.iter().copied());
        let std_heap: std::collections::BinaryHeap<i32> = values.iter().copied().collect();

        prop_assert_eq!(heap.peek().ok(), std_heap.peek());
        let mut expected = std_heap.into_sorted_vec();
        expected.reverse();
        prop_assert_eq!(heap.into_sorted_vec(), expected);
    }
}

// =============================================================================
// HASH MAP
// =============================================================================

proptest! {
    #[test]
    fn prop_hash_map_matches_std(ops in map_ops_strategy()) {
        let mut map = HashMap::new();
        let mut model: StdHashMap<String, u8> = StdHashMap::new();

        for op in &ops {
            match op {
                MapOp::Set(k, v) => {
                    prop_assert_eq!(map.set(k, *v), Ok(model.insert(k.clone(), *v)));
                }
                MapOp::Delete(k) => {
                    prop_assert_eq!(map.delete(k), Ok(model.remove(k).is_some()));
                }
            }
        }

        prop_assert_eq!(map.len(), model.len());
        prop_assert_eq!(map.iter().count(), model.len());
        for (k, v) in &model {
            prop_assert_eq!(map.get(k), Ok(Some(v)));
            prop_assert_eq!(map.has(k), Ok(true));
        }
        for (k, v) in map.iter() {
            prop_assert_eq!(model.get(k), Some(v));
        }
    }
}

// =============================================================================
// TRIE
// =============================================================================

proptest! {
    #[test]
    fn prop_trie_membership(words in prop::collection::vec("[a-zA-Z]{1,8}", 0..50)) {
        use classic_collections::Trie;

        let trie: Trie = words.iter().collect();
        let unique: BTreeSet<String> = words.iter().map(|w| w.to_lowercase()).collect();

        prop_assert_eq!(trie.len(), unique.len());
        for word in &unique {
            prop_assert!(trie.includes(word));
            for end in 0..=word.len() {
                prop_assert!(trie.is_prefix(&word[..end]));
            }
        }
        let listed: BTreeSet<String> = trie.words().collect();
        prop_assert_eq!(listed, unique);
    }
}

// =============================================================================
// DEQUE
// =============================================================================

proptest! {
    #[test]
    fn prop_deque_matches_vec_deque(ops in prop::collection::vec(0..5u8, 0..200)) {
        let mut ours = Deque::new();
        let mut model = VecDeque::new();
        for (i, op) in ops.iter().enumerate() {
            let v = i as i32;
            match *op {
                0 => {
                    AnyDeque::push_back(&mut ours, v);
                    model.push_back(v);
                }
                1 => {
                    AnyDeque::push_front(&mut ours, v);
                    model.push_front(v);
                }
                2 => {
                    prop_assert_eq!(AnyDeque::pop_back(&mut ours), model.pop_back());
                }
                3 => {
                    prop_assert_eq!(AnyDeque::pop_front(&mut ours), model.pop_front());
                }
                _ => {
                    prop_assert_eq!(AnyDeque::front(&ours), model.front());
                    prop_assert_eq!(AnyDeque::back(&ours), model.back());
                }
            }
            prop_assert_eq!(AnyDeque::len(&ours), model.len());
        }
        prop_assert!(ours.iter().eq(model.iter()));
    }
}
