//! Property-based tests for traversal invariants.
//!
//! Random small graphs over a fixed vocabulary of node and predicate IRIs
//! (plus a few literals) are checked against equality, expansion and
//! search properties.

use std::sync::Arc;

use proptest::{
    collection::vec,
    prelude::{any, prop_assert, prop_assert_eq, prop_assume, Strategy},
    proptest,
    test_runner::Config as ProptestConfig,
};
use rdf_pathfinder::{
    neighbors, shortest, DirectionFilter, Error, MemoryStore, Node, Quad, Term, TraversalOptions,
};

const NODE_COUNT: usize = 8;
const PREDICATE_COUNT: usize = 3;
const PROP_CASES: u32 = 128;

fn node_term(i: usize) -> Term {
    Term::named_node(format!("http://example.org/n{i}"))
}

fn predicate_term(i: usize) -> Term {
    Term::named_node(format!("http://example.org/p{i}"))
}

/// Objects are literals when the index runs past the node range.
fn object_term(i: usize) -> Term {
    if i < NODE_COUNT {
        node_term(i)
    } else {
        Term::literal(format!("lit{}", i - NODE_COUNT))
    }
}

fn quad_strategy() -> impl Strategy<Value = Quad> {
    (0..NODE_COUNT, 0..PREDICATE_COUNT, 0..NODE_COUNT + 2)
        .prop_map(|(s, p, o)| Quad::triple(node_term(s), predicate_term(p), object_term(o)))
}

fn store_strategy() -> impl Strategy<Value = Arc<MemoryStore>> {
    vec(quad_strategy(), 0..24).prop_map(|quads| Arc::new(MemoryStore::from_quads(quads)))
}

fn direction_strategy() -> impl Strategy<Value = DirectionFilter> {
    (0..3u8).prop_map(|d| match d {
        0 => DirectionFilter::Forward,
        1 => DirectionFilter::Reverse,
        _ => DirectionFilter::Both,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROP_CASES))]

    #[test]
    fn node_equality_is_reflexive_and_symmetric(store in store_strategy(), i in 0..NODE_COUNT, j in 0..NODE_COUNT) {
        let twin = Arc::new(MemoryStore::from_quads(store.quads()));
        let a = Node::new(store.clone(), node_term(i));
        let b = Node::new(twin, node_term(j));

        prop_assert!(a == a.clone());
        prop_assert_eq!(a == b, b == a);
        prop_assert_eq!(a == b, i == j);
    }

    #[test]
    fn both_directions_cover_forward_and_reverse(store in store_strategy(), i in 0..NODE_COUNT, follow in any::<bool>()) {
        let node = Node::new(store, node_term(i));
        let base = TraversalOptions::new().with_follow_literals(follow);

        let forward = neighbors(&node, &base.clone().with_direction(DirectionFilter::Forward)).unwrap();
        let reverse = neighbors(&node, &base.clone().with_direction(DirectionFilter::Reverse)).unwrap();
        let both = neighbors(&node, &base.with_direction(DirectionFilter::Both)).unwrap();

        for edge in forward.iter().chain(reverse.iter()) {
            prop_assert!(both.contains(edge));
        }
        prop_assert_eq!(both.len(), forward.len() + reverse.len());
    }

    #[test]
    fn literals_only_with_follow_literals(store in store_strategy(), i in 0..NODE_COUNT) {
        let node = Node::new(store, node_term(i));

        let edges = neighbors(&node, &TraversalOptions::default()).unwrap();
        prop_assert!(edges.iter().all(|e| !e.end_term().is_literal()));

        let with_literals = neighbors(&node, &TraversalOptions::new().with_follow_literals(true)).unwrap();
        prop_assert!(edges.iter().all(|e| with_literals.contains(e)));
    }

    #[test]
    fn both_predicate_lists_always_rejected(store in store_strategy(), i in 0..NODE_COUNT, j in 0..NODE_COUNT, direction in direction_strategy()) {
        let opts = TraversalOptions::new()
            .with_direction(direction)
            .with_predicate_blacklist([predicate_term(0)])
            .with_predicate_whitelist([predicate_term(1)]);
        let a = Node::new(store.clone(), node_term(i));
        let b = Node::new(store, node_term(j));

        prop_assert!(matches!(neighbors(&a, &opts), Err(Error::InvalidArgument(_))));
        prop_assert!(matches!(shortest(&a, &b, &opts), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn cutoff_bounds_path_length(store in store_strategy(), i in 0..NODE_COUNT, j in 0..NODE_COUNT, cutoff in 0usize..4, direction in direction_strategy()) {
        let a = Node::new(store.clone(), node_term(i));
        let b = Node::new(store, node_term(j));
        let unbounded = TraversalOptions::new().with_direction(direction);
        let bounded = unbounded.clone().with_cutoff(cutoff);

        let full = shortest(&a, &b, &unbounded).unwrap();
        let cut = shortest(&a, &b, &bounded).unwrap();

        if let Some(path) = &cut {
            prop_assert!(path.len() <= cutoff);
        }
        match &full {
            Some(path) if i != j => {
                prop_assert_eq!(cut.is_some(), path.len() <= cutoff);
            }
            Some(_) => {
                prop_assert!(cut.is_some());
            }
            None => {
                prop_assert!(cut.is_none());
            }
        }
    }

    #[test]
    fn found_path_connects_start_to_end(store in store_strategy(), i in 0..NODE_COUNT, j in 0..NODE_COUNT, direction in direction_strategy()) {
        prop_assume!(i != j);
        let a = Node::new(store.clone(), node_term(i));
        let b = Node::new(store, node_term(j));

        if let Some(path) = shortest(&a, &b, &TraversalOptions::new().with_direction(direction)).unwrap() {
            let (first, last) = (path.start().unwrap(), path.end().unwrap());
            prop_assert_eq!(first.term(), a.term());
            prop_assert_eq!(last.term(), b.term());
            let nodes = path.nodes();
            for (k, edge) in path.edges().iter().enumerate() {
                prop_assert_eq!(&edge.start(), &nodes[k]);
                prop_assert_eq!(&edge.end(), &nodes[k + 1]);
            }
        }
    }
}
