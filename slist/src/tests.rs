use crate::{LinkedList, ListError};
use collection_traits::{HasLength, SeqOperation};
use itertools::Itertools;
use rstest::rstest;

fn contents(list: &LinkedList<i32>) -> Vec<i32> {
    list.iter().copied().collect_vec()
}

fn next_of<T>(list: &LinkedList<T>, steps: usize) -> Option<&T> {
    let mut cur = list.first?;
    for _ in 0..steps {
        cur = list.arena.get(cur).next?;
    }
    Some(&list.arena.get(cur).value)
}

/// Walking `len - 1` links from the head must land on the cached tail.
fn assert_links<T>(list: &LinkedList<T>) {
    let Some(mut cur) = list.first else {
        assert_eq!(list.len, 0);
        assert!(list.last.is_none());
        return;
    };
    for _ in 1..list.len {
        cur = list.arena.get(cur).next.unwrap();
    }
    assert_eq!(Some(cur), list.last);
    assert!(list.arena.get(cur).next.is_none());
}

#[test]
fn new_list_should_be_empty() {
    let list = LinkedList::<i32>::new();

    assert!(list.first.is_none());
    assert!(list.last.is_none());
    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
}

#[test]
fn push_front_should_update_head() {
    let mut list = LinkedList::new();

    list.push_front(42);
    assert_eq!(list.front(), Some(&42));
    assert_eq!(list.back(), Some(&42));
    assert_eq!(list.first, list.last);
    assert_eq!(list.len(), 1);

    list.push_front(45);
    assert_eq!(list.front(), Some(&45));
    assert_eq!(list.back(), Some(&42));
    assert_eq!(list.len(), 2);
    assert_eq!(list.arena.get(list.first.unwrap()).next, list.last);
    assert_links(&list);
}

#[test]
fn push_back_should_update_tail() {
    let mut list = LinkedList::new();

    list.push_back(42);
    assert_eq!(list.front(), Some(&42));
    assert_eq!(list.back(), Some(&42));
    assert_eq!(list.len(), 1);

    list.push_back(45);
    assert_eq!(list.front(), Some(&42));
    assert_eq!(list.back(), Some(&45));
    assert_eq!(list.len(), 2);
    assert_eq!(list.arena.get(list.first.unwrap()).next, list.last);
    assert_links(&list);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(7)]
fn push_back_should_count_elements(#[case] n: i32) {
    let mut list = LinkedList::new();
    for i in 0..n {
        list.push_back(i);
    }

    assert_eq!(list.len(), n as usize);
    assert_eq!(list.front(), (n > 0).then_some(&0));
    assert_eq!(list.back(), (n > 0).then_some(&(n - 1)));
}

#[test]
fn at_should_index_from_both_ends() {
    let mut list = LinkedList::new();
    assert_eq!(list.at(0), Err(ListError::OutOfBounds { index: 0, len: 0 }));

    list.extend([1, 2, 3]);

    assert_eq!(list.at(0), Ok(&1));
    assert_eq!(list.at(1), Ok(&2));
    assert_eq!(list.at(2), Ok(&3));
    assert_eq!(list.at(3), Err(ListError::OutOfBounds { index: 3, len: 3 }));

    assert_eq!(list.at(-1), Ok(&3));
    assert_eq!(list.at(-2), Ok(&2));
    assert_eq!(list.at(-3), Ok(&1));
    assert_eq!(
        list.at(-4),
        Err(ListError::OutOfBounds { index: -4, len: 3 })
    );
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(6)]
fn negative_at_should_mirror_positive(#[case] len: i32) {
    let list: LinkedList<i32> = (0..len).collect();
    let size = len as isize;

    assert_eq!(list.at(-1), list.at(size - 1));
    assert_eq!(list.at(-size), list.at(0));
    assert!(list.at(-(size + 1)).is_err());
}

#[test]
fn remove_should_relink_nodes() {
    let mut list = LinkedList::new();
    assert_eq!(
        list.remove(0),
        Err(ListError::OutOfBounds { index: 0, len: 0 })
    );

    list.extend([1, 2, 3, 4]);

    assert_eq!(list.remove(1), Ok(2));
    assert_eq!(contents(&list), vec![1, 3, 4]);
    assert_eq!(list.back(), Some(&4));
    assert_links(&list);

    assert_eq!(list.remove(0), Ok(1));
    assert_eq!(contents(&list), vec![3, 4]);
    assert_links(&list);

    assert_eq!(list.remove(1), Ok(4));
    assert_eq!(contents(&list), vec![3]);
    assert_eq!(list.first, list.last);
    assert_links(&list);

    assert_eq!(list.remove(0), Ok(3));
    assert!(list.first.is_none());
    assert!(list.last.is_none());
    assert_eq!(list.len(), 0);
}

#[test]
fn remove_should_fail_out_of_bounds() {
    let mut list: LinkedList<i32> = [1, 2].into_iter().collect();
    let before = list.clone();

    assert_eq!(
        list.remove(2),
        Err(ListError::OutOfBounds { index: 2, len: 2 })
    );
    assert_eq!(list, before);
}

#[test]
fn pop_back_should_drain_from_tail() {
    let mut list = LinkedList::<i32>::new();
    assert_eq!(list.pop_back(), Err(ListError::EmptyContainer));

    list.extend([1, 2, 3, 4]);
    for expected in (1..=4).rev() {
        assert_eq!(list.pop_back(), Ok(expected));
        assert_eq!(list.len(), expected as usize - 1);
        assert_links(&list);
    }
    assert_eq!(list.pop_back(), Err(ListError::EmptyContainer));
}

#[test]
fn pop_front_should_drain_from_head() {
    let mut list = LinkedList::<i32>::new();
    assert_eq!(list.pop_front(), Err(ListError::EmptyContainer));

    list.extend([1, 2, 3, 4]);
    for expected in 1..=4 {
        assert_eq!(list.pop_front(), Ok(expected));
        assert_eq!(list.len(), 4 - expected as usize);
        assert_links(&list);
    }
}

#[test]
fn front_and_back_should_be_none_when_empty() {
    let mut list = LinkedList::new();
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);

    list.extend([1, 2, 3, 4]);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&4));
}

#[test]
fn insert_should_place_element() {
    let mut list = LinkedList::new();

    assert_eq!(list.insert(0, 4), Ok(()));
    assert_eq!(list.first, list.last);
    assert_eq!(list.len(), 1);

    assert_eq!(list.insert(0, 5), Ok(()));
    assert_eq!(contents(&list), vec![5, 4]);

    assert_eq!(list.insert(1, 6), Ok(()));
    assert_eq!(contents(&list), vec![5, 6, 4]);
    assert_eq!(list.back(), Some(&4));

    assert_eq!(list.insert(3, 7), Ok(()));
    assert_eq!(contents(&list), vec![5, 6, 4, 7]);
    assert_eq!(list.back(), Some(&7));

    assert_eq!(
        list.insert(5, 8),
        Err(ListError::OutOfBounds { index: 5, len: 4 })
    );

    assert_eq!(list.insert(-1, 8), Ok(()));
    assert_eq!(contents(&list), vec![5, 6, 4, 8, 7]);
    assert_eq!(next_of(&list, 3), Some(&8));
    assert_eq!(list.back(), Some(&7));
    assert_links(&list);
}

#[rstest]
#[case(0, 1)]
#[case(0, -1)]
#[case(3, 4)]
#[case(3, -4)]
#[case(3, isize::MIN)]
fn insert_should_fail_out_of_bounds(#[case] len: i32, #[case] index: isize) {
    let mut list: LinkedList<i32> = (0..len).collect();
    let before = list.clone();

    assert_eq!(
        list.insert(index, 42),
        Err(ListError::OutOfBounds {
            index,
            len: len as usize
        })
    );
    assert_eq!(list, before);
}

#[test]
fn remove_item_should_drop_first_match() {
    let mut list: LinkedList<i32> = [1, 2, 3].into_iter().collect();

    assert!(!list.remove_item(&4));
    assert!(list.remove_item(&1));
    assert!(list.remove_item(&3));

    assert_eq!(list.front(), Some(&2));
    assert_eq!(list.first, list.last);
    assert_links(&list);
}

#[test]
fn remove_item_should_update_tail() {
    let mut list: LinkedList<i32> = [1, 2, 3, 2].into_iter().collect();

    assert!(list.remove_item(&2));
    assert_eq!(contents(&list), vec![1, 3, 2]);

    assert!(list.remove_item(&2));
    assert_eq!(list.back(), Some(&3));

    list.push_back(4);
    assert_eq!(contents(&list), vec![1, 3, 4]);
    assert_links(&list);
}

#[test]
fn reverse_should_flip_links() {
    let mut list = LinkedList::new();

    list.reverse();
    assert!(list.first.is_none());
    assert!(list.last.is_none());

    list.push_back(1);
    list.reverse();
    assert_eq!(contents(&list), vec![1]);
    assert_eq!(list.first, list.last);

    list.push_back(2);
    list.reverse();
    assert_eq!(contents(&list), vec![2, 1]);
    assert_eq!(list.back(), Some(&1));

    list.push_back(3);
    list.reverse();
    assert_eq!(contents(&list), vec![3, 1, 2]);
    assert_eq!(list.front(), Some(&3));
    assert_eq!(list.back(), Some(&2));
    assert_links(&list);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
#[case(9)]
fn reverse_should_be_involution(#[case] len: i32) {
    let original: LinkedList<i32> = (0..len).collect();
    let mut list = original.clone();

    list.reverse();
    assert_eq!(contents(&list), (0..len).rev().collect_vec());
    assert_links(&list);

    list.reverse();
    assert_eq!(list, original);
    assert_links(&list);
}

#[test]
fn removed_nodes_should_be_reused() {
    let mut list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
    assert_eq!(list.arena.slot_count(), 3);

    list.remove(1).unwrap();
    list.push_front(0);
    assert_eq!(list.arena.slot_count(), 3);
    assert_eq!(contents(&list), vec![0, 1, 3]);

    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.arena.slot_count(), 0);
    assert_links(&list);
}

#[test]
fn should_replay_operations() {
    let mut list = LinkedList::new();
    let ops = [
        SeqOperation::Push(1),
        SeqOperation::Push(2),
        SeqOperation::Insert(0, 0),
        SeqOperation::Insert(-1, 5),
        SeqOperation::Delete(1),
        SeqOperation::RemoveItem(7),
        SeqOperation::Push(3),
        SeqOperation::Pop,
    ];

    SeqOperation::apply_all(ops, &mut list).unwrap();
    assert_eq!(contents(&list), vec![0, 5, 2]);
    assert_eq!(HasLength::len(&list), 3);

    assert_eq!(
        SeqOperation::Delete(3).apply(&mut list),
        Err(ListError::OutOfBounds { index: 3, len: 3 })
    );
}

#[test]
fn should_collect_and_format() {
    let list: LinkedList<i32> = (1..=3).collect();

    assert_eq!(format!("{:?}", list), "[1, 2, 3]");
    assert_eq!(list.iter().len(), 3);
    assert_eq!(list.find(&3), Some(2));
    assert!(!list.contains(&4));
    assert_eq!(list.into_iter().collect_vec(), vec![1, 2, 3]);
}
