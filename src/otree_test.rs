use arbitrary::{self, unstructured::Unstructured, Arbitrary};
use rand::{prelude::random, rngs::SmallRng, Rng, SeedableRng};

use super::*;

use std::collections::BTreeSet;

#[test]
fn test_otree() {
    let seed: u64 = random();
    println!("test_otree {}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut index: OTree<u8> = OTree::new();
    let mut btset: BTreeSet<u8> = BTreeSet::new();

    let mut counts = [0_usize; 7];

    for _i in 0..100_000 {
        let bytes = rng.gen::<[u8; 32]>();
        let mut uns = Unstructured::new(&bytes);

        let op: Op<u8> = uns.arbitrary().unwrap();
        match op {
            Op::Len => {
                counts[0] += 1;
                assert_eq!(index.len(), btset.len());
            }
            Op::IsEmpty => {
                counts[1] += 1;
                assert_eq!(index.is_empty(), btset.is_empty());
            }
            Op::Insert(key) => {
                counts[2] += 1;
                assert_eq!(index.insert(key).is_some(), btset.insert(key), "for key {}", key);
            }
            Op::Remove(key) => {
                counts[3] += 1;
                match (index.remove(&key), btset.remove(&key)) {
                    (None, false) => (),
                    (Some(k), true) => assert_eq!(k, key),
                    (a, b) => panic!("remove key {} mismatch {:?} {}", key, a, b),
                }
            }
            Op::Contains(key) => {
                counts[4] += 1;
                assert_eq!(index.contains(&key), btset.contains(&key), "for key {}", key);
            }
            Op::Validate => {
                counts[5] += 1;
                index.validate().unwrap();
            }
            Op::Iter => {
                counts[6] += 1;
                let a: Vec<u8> = index.iter().copied().collect();
                let b: Vec<u8> = btset.iter().copied().collect();
                assert_eq!(a, b);
            }
        }
    }

    let a: Vec<u8> = index.iter().copied().collect();
    let b: Vec<u8> = btset.iter().copied().collect();
    assert_eq!(a, b);
    index.validate().unwrap();

    println!("counts {:?} len:{}/{}", counts, index.len(), btset.len());
}

#[test]
fn test_insert_duplicate() {
    let mut index: OTree<u64> = OTree::new();
    assert!(index.insert(10).is_some());
    assert!(index.insert(10).is_none());
    assert_eq!(index.len(), 1);
    index.validate().unwrap();
}

#[test]
fn test_iter() {
    let mut index: OTree<u64> = OTree::new();
    for key in vec![50, 30, 70, 20, 40, 60, 80] {
        index.insert(key);
    }
    let keys: Vec<u64> = index.iter().copied().collect();
    assert_eq!(keys, vec![20, 30, 40, 50, 60, 70, 80]);

    let index: OTree<u64> = OTree::new();
    assert_eq!(index.iter().next(), None);
}

#[test]
fn test_remove() {
    let mut index: OTree<u64> = OTree::new();
    for key in vec![50, 30, 70, 20, 40, 60, 80] {
        index.insert(key);
    }

    // leaf
    assert_eq!(index.remove(&20), Some(20));
    // single child
    assert_eq!(index.remove(&30), Some(30));
    // two children, at the root
    assert_eq!(index.remove(&50), Some(50));
    // missing
    assert_eq!(index.remove(&50), None);

    assert_eq!(index.len(), 4);
    index.validate().unwrap();

    let keys: Vec<u64> = index.iter().copied().collect();
    assert_eq!(keys, vec![40, 60, 70, 80]);
}

#[test]
fn test_rotate() {
    let mut index: OTree<u64> = OTree::new();
    for key in vec![20, 10, 30] {
        index.insert(key);
    }
    assert_eq!(index.n_rotations(), 0);

    let root = index.root().unwrap();
    assert_eq!(*index.key(root).unwrap(), 20);

    index.rotate_left(root).unwrap();
    assert_eq!(index.n_rotations(), 1);

    let root = index.root().unwrap();
    assert_eq!(*index.key(root).unwrap(), 30);
    let keys: Vec<u64> = index.iter().copied().collect();
    assert_eq!(keys, vec![10, 20, 30]);
    index.validate().unwrap();

    index.rotate_right(root).unwrap();
    assert_eq!(*index.key(index.root().unwrap()).unwrap(), 20);
    let keys: Vec<u64> = index.iter().copied().collect();
    assert_eq!(keys, vec![10, 20, 30]);
    index.validate().unwrap();

    // rotating a vertex without the needed child is a no-op.
    let root = index.root().unwrap();
    let left = index.left(root).unwrap().unwrap();
    index.rotate_left(left).unwrap();
    assert_eq!(index.n_rotations(), 2);
    index.validate().unwrap();

    // a handle this tree never issued is rejected.
    match index.rotate_left(VertexId(99)) {
        Err(Error::InvalidVertex(_, _)) => (),
        res => panic!("unexpected {:?}", res),
    }
}

#[test]
fn test_handles() {
    let mut index: OTree<u64> = OTree::new();
    let root = index.insert(20).unwrap();
    let left = index.insert(10).unwrap();
    let right = index.insert(30).unwrap();

    assert_eq!(index.root(), Some(root));
    assert_eq!(index.parent(root).unwrap(), None);
    assert_eq!(index.left(root).unwrap(), Some(left));
    assert_eq!(index.right(root).unwrap(), Some(right));
    assert_eq!(index.parent(left).unwrap(), Some(root));
    assert_eq!(*index.key(left).unwrap(), 10);

    // handles die with their vertex.
    index.remove(&10);
    match index.key(left) {
        Err(Error::InvalidVertex(_, _)) => (),
        res => panic!("unexpected {:?}", res),
    }
}

#[test]
fn test_slot_reuse() {
    let mut index: OTree<u64> = OTree::new();
    for key in vec![20, 10, 30] {
        index.insert(key);
    }
    assert_eq!(index.slots.len(), 3);

    index.remove(&10);
    index.remove(&30);
    index.insert(40);
    index.insert(50);
    assert_eq!(index.slots.len(), 3);

    index.insert(60);
    assert_eq!(index.slots.len(), 4);
    index.validate().unwrap();
}

#[derive(Debug, Arbitrary)]
enum Op<K> {
    Len,
    IsEmpty,
    Insert(K),
    Remove(K),
    Contains(K),
    Validate,
    Iter,
}
