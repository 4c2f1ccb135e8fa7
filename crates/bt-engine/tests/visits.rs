use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use bt_core::{Status, TickContext};
use bt_engine::{CompositeKind, Task, Tree};

#[derive(Debug, Default)]
struct World {
    log: Vec<&'static str>,
}

fn ctx(tick: u64) -> TickContext {
    TickContext {
        tick,
        dt_seconds: 0.1,
    }
}

fn step(name: &'static str, status: Status) -> Task<impl FnMut(&TickContext, &mut World) -> Status> {
    Task::new(move |_ctx: &TickContext, world: &mut World| {
        world.log.push(name);
        status
    })
}

#[test]
fn children_execute_only_as_the_stream_is_pulled() {
    // The log lives outside the world so it stays readable while the
    // stream holds the world borrow.
    let log: Rc<RefCell<Vec<&'static str>>> = Rc::default();
    let observed = |name: &'static str, log: &Rc<RefCell<Vec<&'static str>>>| {
        let log = Rc::clone(log);
        Task::new(move |_ctx: &TickContext, _world: &mut World| {
            log.borrow_mut().push(name);
            Status::Success
        })
    };

    let mut tree = Tree::new();
    let a = tree.leaf("a", observed("a", &log));
    let b = tree.leaf("b", observed("b", &log));
    let root = tree
        .composite("root", CompositeKind::Sequence, vec![a, b])
        .unwrap();

    let mut world = World::default();
    let first = ctx(0);
    let mut run = tree.tick(root, &first, &mut world);

    // The composite is yielded before any child has executed.
    assert_eq!(run.next(), Some(root));
    assert!(log.borrow().is_empty());

    assert_eq!(run.next(), Some(a));
    assert_eq!(*log.borrow(), vec!["a"]);

    assert_eq!(run.next(), Some(b));
    assert_eq!(run.next(), None);
    assert_eq!(*log.borrow(), vec!["a", "b"]);
}

#[test]
fn nested_composites_yield_depth_first_pre_order() {
    let mut tree = Tree::new();
    let x = tree.leaf("x", step("x", Status::Success));
    let y = tree.leaf("y", step("y", Status::Success));
    let inner = tree
        .composite("inner", CompositeKind::Sequence, vec![x, y])
        .unwrap();
    let z = tree.leaf("z", step("z", Status::Success));
    let root = tree
        .composite("root", CompositeKind::Sequence, vec![inner, z])
        .unwrap();

    let mut world = World::default();
    let visited: Vec<_> = tree.tick(root, &ctx(0), &mut world).collect();

    assert_eq!(visited, vec![root, inner, x, y, z]);
    assert_eq!(world.log, vec!["x", "y", "z"]);
    assert_eq!(tree.status(root), Status::Success);
    assert_eq!(tree.status(inner), Status::Success);
}

#[test]
fn a_running_inner_composite_pauses_the_outer_one() {
    let mut tree = Tree::new();
    let x = tree.leaf("x", step("x", Status::Success));
    let y = tree.leaf("y", step("y", Status::Running));
    let inner = tree
        .composite("inner", CompositeKind::Sequence, vec![x, y])
        .unwrap();
    let z = tree.leaf("z", step("z", Status::Success));
    let root = tree
        .composite("root", CompositeKind::Sequence, vec![inner, z])
        .unwrap();

    let mut world = World::default();
    let visited: Vec<_> = tree.tick(root, &ctx(0), &mut world).collect();

    assert_eq!(visited, vec![root, inner, x, y]);
    assert_eq!(tree.status(root), Status::Running);
    assert_eq!(tree.status(inner), Status::Running);
    assert_eq!(tree.resume_index(root), Some(0));
    assert_eq!(tree.resume_index(inner), Some(1));
}

#[test]
fn no_child_before_the_start_index_and_no_duplicates() {
    let mut tree = Tree::new();
    let a = tree.leaf("a", step("a", Status::Success));
    let b = tree.leaf("b", step("b", Status::Running));
    let c = tree.leaf("c", step("c", Status::Success));
    let root = tree
        .composite("root", CompositeKind::Sequence, vec![a, b, c])
        .unwrap();

    let mut world = World::default();
    let _ = tree.tick(root, &ctx(0), &mut world).finish();
    assert_eq!(tree.resume_index(root), Some(1));

    let visited: Vec<_> = tree.tick(root, &ctx(1), &mut world).collect();
    // Nothing before the resumed start index, and nothing twice.
    assert!(!visited.contains(&a));
    let unique: BTreeSet<_> = visited.iter().copied().collect();
    assert_eq!(unique.len(), visited.len());
}

#[test]
fn an_empty_composite_child_is_silent_but_counts_as_success() {
    let mut tree = Tree::new();
    let hollow = tree
        .composite("hollow", CompositeKind::Sequence, vec![])
        .unwrap();
    let a = tree.leaf("a", step("a", Status::Success));
    let root = tree
        .composite("root", CompositeKind::Sequence, vec![hollow, a])
        .unwrap();

    let mut world = World::default();
    let visited: Vec<_> = tree.tick(root, &ctx(0), &mut world).collect();

    assert_eq!(visited, vec![root, a]);
    assert_eq!(tree.status(hollow), Status::Success);
    assert_eq!(tree.status(root), Status::Success);
}

#[test]
fn dropping_the_stream_abandons_the_rest_of_the_traversal() {
    let mut tree = Tree::new();
    let a = tree.leaf("a", step("a", Status::Success));
    let b = tree.leaf("b", step("b", Status::Success));
    let root = tree
        .composite("root", CompositeKind::Sequence, vec![a, b])
        .unwrap();

    let mut world = World::default();
    {
        let first = ctx(0);
        let mut run = tree.tick(root, &first, &mut world);
        assert_eq!(run.next(), Some(root));
        assert_eq!(run.next(), Some(a));
    }

    // b never executed; the composite never settled.
    assert_eq!(world.log, vec!["a"]);
    assert_eq!(tree.status(root), Status::Invalid);
}

#[test]
#[should_panic(expected = "unknown node id")]
fn ticking_a_foreign_id_is_fatal() {
    let mut donor: Tree<World> = Tree::new();
    let _ = donor.leaf("d0", step("d0", Status::Success));
    let stray = donor.leaf("d1", step("d1", Status::Success));

    let mut tree: Tree<World> = Tree::new();
    let _ = tree.leaf("only", step("only", Status::Success));

    let mut world = World::default();
    let _ = tree.tick(stray, &ctx(0), &mut world);
}
