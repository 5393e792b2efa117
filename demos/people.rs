//! Find how a person is connected to a job title.
//!
//! Builds a small people graph in memory, blocks `rdf:type` so the search
//! can't hop through the shared `schema:Person` class, follows literals
//! because the target is one, and prints the path.
//!
//! ```text
//! RUST_LOG=rdf_pathfinder=debug cargo run --example people
//! ```

use std::sync::Arc;

use rdf_pathfinder::{shortest, MemoryStore, Node, Quad, Term, TermStore, TraversalOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DATA: &str = "http://localhost:8080/data/";
const SCHEMA: &str = "http://schema.org/";
const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

fn person(slug: &str) -> Term {
    Term::named_node(format!("{DATA}person/{slug}"))
}

fn schema(name: &str) -> Term {
    Term::named_node(format!("{SCHEMA}{name}"))
}

fn people() -> MemoryStore {
    let rdf_type = Term::named_node(RDF_TYPE);
    let mut quads = Vec::new();

    for slug in ["mary-cooper", "sheldon-cooper", "leonard-hofstadter", "stuart-bloom"] {
        quads.push(Quad::triple(person(slug), rdf_type.clone(), schema("Person")));
    }
    quads.extend([
        Quad::triple(person("mary-cooper"), schema("children"), person("sheldon-cooper")),
        Quad::triple(person("sheldon-cooper"), schema("knows"), person("leonard-hofstadter")),
        Quad::triple(person("leonard-hofstadter"), schema("knows"), person("stuart-bloom")),
        Quad::triple(person("stuart-bloom"), schema("jobTitle"), Term::literal("comic book store owner")),
        Quad::triple(person("mary-cooper"), schema("name"), Term::literal("Mary Cooper")),
    ]);

    MemoryStore::from_quads(quads)
}

fn main() -> rdf_pathfinder::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = Arc::new(people());
    tracing::info!(statements = store.len(), "loaded people graph");

    let mary = Node::new(store.clone(), person("mary-cooper"));
    let owner = Node::new(store, Term::literal("comic book store owner"));

    let options = TraversalOptions::new()
        .with_predicate_blacklist([Term::named_node(RDF_TYPE)])
        .with_follow_literals(true);

    match shortest(&mary, &owner, &options)? {
        Some(path) => println!("{path}"),
        None => println!("no path found"),
    }
    Ok(())
}
