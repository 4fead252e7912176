use super::*;
use pretty_assertions::assert_eq;

fn id(raw: u32) -> NodeId {
    NodeId::new(raw)
}

#[test]
fn test_unblocked_class_is_ready_after_scan() {
    let mut s = Scheduler::default();
    s.add_inherit(id(1), Lookup::new(id(100)));
    s.finish_scan(id(1));
    assert_eq!(s.pop_ready(), Some(id(1)));
    assert_eq!(s.pop_ready(), None);
}

#[test]
fn test_chain_drains_in_dependency_order() {
    // a inherits b inherits c; scanned in source order a, b, c.
    let (a, b, c) = (id(1), id(2), id(3));
    let mut s = Scheduler::default();
    s.add_dependency(a, b);
    s.finish_scan(a);
    s.add_dependency(b, c);
    s.finish_scan(b);
    s.finish_scan(c);

    let mut order = Vec::new();
    while let Some(class) = s.pop_ready() {
        order.push(class);
        s.complete(class);
    }
    assert_eq!(order, vec![c, b, a]);
    assert!(s.clear().is_empty());
}

#[test]
fn test_ready_queue_is_lifo() {
    let mut s = Scheduler::default();
    s.finish_scan(id(1));
    s.finish_scan(id(2));
    assert_eq!(s.pop_ready(), Some(id(2)));
    assert_eq!(s.pop_ready(), Some(id(1)));
}

#[test]
fn test_class_waits_for_every_blocker() {
    let (d, b1, b2) = (id(1), id(2), id(3));
    let mut s = Scheduler::default();
    s.add_dependency(d, b1);
    s.add_dependency(d, b2);
    s.finish_scan(d);
    s.finish_scan(b1);
    s.finish_scan(b2);
    assert_eq!(s.get(d).map(|p| p.rc), Some(2));

    assert_eq!(s.pop_ready(), Some(b2));
    assert_eq!(s.complete(b2), 0);
    assert_eq!(s.pop_ready(), Some(b1));
    assert_eq!(s.complete(b1), 1);
    assert_eq!(s.pop_ready(), Some(d));
}

#[test]
fn test_cycle_is_stranded() {
    let (a, b) = (id(1), id(2));
    let mut s = Scheduler::default();
    s.add_dependency(a, b);
    s.finish_scan(a);
    s.add_dependency(b, a);
    s.finish_scan(b);

    assert_eq!(s.pop_ready(), None);
    assert_eq!(s.clear(), vec![a, b]);
    assert!(s.is_empty());
}

#[test]
fn test_take_inherit_preserves_order() {
    let mut s = Scheduler::default();
    s.add_inherit(id(1), Lookup::new(id(10)));
    s.add_inherit(id(1), Lookup::new(id(11)));
    let taken: Vec<_> = s.take_inherit(id(1)).into_iter().map(|l| l.def).collect();
    assert_eq!(taken, vec![Some(id(10)), Some(id(11))]);
    assert!(s.take_inherit(id(1)).is_empty());
    assert!(s.take_inherit(id(99)).is_empty());
}
