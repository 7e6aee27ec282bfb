use super::*;

extern crate std;
use std::vec::Vec;

fn drain<const N: usize>(rb: &mut RingBuffer<u16, N>) -> Vec<u16> {
    let mut out = Vec::new();
    while let Some(v) = rb.pop() {
        out.push(v);
    }
    out
}

#[test]
fn pop_empty() {
    let mut rb = RingBuffer::<u8, 4>::new();
    assert_eq!(rb.pop(), None);
    assert_eq!(rb.len(), 0);
    assert!(rb.is_empty());

    rb.push(3);
    assert_eq!(rb.pop(), Some(3));
    assert_eq!(rb.pop(), None);
    assert_eq!(rb.pop(), None);
    assert!(rb.is_empty());
}

#[test]
fn fifo_order() {
    let mut rb = RingBuffer::<u16, 8>::new();
    for i in 0..8 {
        assert_eq!(rb.push(i), None);
    }
    assert!(rb.is_full());
    assert_eq!(rb.evicted(), 0);
    assert_eq!(drain(&mut rb), (0..8).collect::<Vec<_>>());
}

#[test]
fn interleaved_push_pop_wraps() {
    let mut rb = RingBuffer::<u16, 3>::new();
    let mut out = Vec::new();
    for i in 0..10 {
        assert_eq!(rb.push(i), None);
        if i % 2 == 1 {
            out.push(rb.pop().unwrap());
            out.push(rb.pop().unwrap());
        }
    }
    assert!(rb.is_empty());
    assert_eq!(out, (0..10).collect::<Vec<_>>());
    assert_eq!(rb.evicted(), 0);
}

#[test]
fn pushing_faster_than_popping_evicts() {
    let mut rb = RingBuffer::<u16, 3>::new();
    let mut out = Vec::new();
    for i in 0..10 {
        rb.push(i);
        if i % 2 == 1 {
            out.push(rb.pop().unwrap());
        }
    }
    out.extend(drain(&mut rb));
    assert_eq!(out, [0, 1, 3, 5, 7, 8, 9]);
    assert_eq!(rb.evicted(), 3);
}

#[test]
fn overflow_evicts_oldest() {
    let mut rb = RingBuffer::<u16, 4>::new();
    for i in 0..4 {
        rb.push(i);
    }
    assert_eq!(rb.push(4), Some(0));
    assert_eq!(rb.push(5), Some(1));
    assert_eq!(rb.len(), 4);
    assert_eq!(rb.evicted(), 2);
    assert_eq!(drain(&mut rb), [2, 3, 4, 5]);
}

#[test]
fn full_capacity_plus_one() {
    let mut rb = RingBuffer::<u16, 1024>::new();
    for i in 0..1024 {
        rb.push(i);
    }
    assert_eq!(rb.push(1024), Some(0));

    let mut seen = Vec::new();
    for _ in 0..1024 {
        let v = rb.pop().unwrap();
        assert_ne!(v, 0);
        seen.push(v);
    }
    assert_eq!(seen, (1..=1024).collect::<Vec<_>>());
    assert_eq!(rb.pop(), None);
}

#[test]
fn evicted_survives_drain() {
    let mut rb = RingBuffer::<u16, 2>::default();
    assert_eq!(rb.capacity(), 2);
    rb.push(1);
    rb.push(2);
    assert_eq!(rb.push(3), Some(1));
    assert_eq!(drain(&mut rb), [2, 3]);
    assert!(rb.is_empty());
    assert_eq!(rb.evicted(), 1);
}
