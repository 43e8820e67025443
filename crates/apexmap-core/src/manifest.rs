//! Manifest loading: deserialization, eager validation, graph construction
//!
//! Loading is all-or-nothing. Every validation pass runs before a
//! [`TopicGraph`] is handed out; on any failure the caller gets a
//! [`ValidationError`] and no graph, so readers never observe a partially
//! loaded manifest.

use crate::error::ValidationError;
use crate::graph::TopicGraph;
use crate::model::{Difficulty, EdgeKind, ManifestInfo, Topic};
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Raw mirror of the manifest document. Difficulty stays a string here so
/// an unknown value surfaces as its own validation subkind rather than a
/// generic parse failure.
#[derive(Debug, Deserialize)]
struct ManifestFile {
    name: String,
    description: String,
    version: String,
    default_doc: String,
    topics: Vec<TopicRecord>,
    #[serde(rename = "totalSnippets", default)]
    total_snippets: u64,
}

#[derive(Debug, Deserialize)]
struct TopicRecord {
    name: String,
    file: String,
    #[serde(default)]
    related: Vec<String>,
    #[serde(default)]
    prerequisites: Vec<String>,
    #[serde(default)]
    leads_to: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
    difficulty: String,
    #[serde(default)]
    use_cases: Vec<String>,
}

impl TopicGraph {
    /// Load and validate a manifest from a file on disk.
    pub fn load_path(path: &Path) -> Result<Self, ValidationError> {
        tracing::debug!("loading manifest from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::load_str(&json)
    }

    /// Load and validate a manifest from its serialized JSON form.
    pub fn load_str(json: &str) -> Result<Self, ValidationError> {
        let raw: ManifestFile = serde_json::from_str(json)?;
        build(raw)
    }
}

fn build(raw: ManifestFile) -> Result<TopicGraph, ValidationError> {
    let ManifestFile {
        name,
        description,
        version,
        default_doc,
        topics,
        total_snippets,
    } = raw;

    let mut inner: StableDiGraph<Topic, EdgeKind> = StableDiGraph::new();
    let mut by_name: HashMap<String, NodeIndex> = HashMap::new();
    let mut by_file: HashMap<String, NodeIndex> = HashMap::new();
    let mut order: Vec<NodeIndex> = Vec::with_capacity(topics.len());

    // Pass 1: difficulty + uniqueness, nodes inserted in manifest order.
    for record in topics {
        let difficulty = Difficulty::from_str(&record.difficulty).ok_or_else(|| {
            ValidationError::InvalidDifficulty {
                topic: record.name.clone(),
                value: record.difficulty.clone(),
            }
        })?;
        let topic = Topic {
            name: record.name,
            file: record.file,
            related: record.related,
            prerequisites: record.prerequisites,
            leads_to: record.leads_to,
            tags: record.tags,
            difficulty,
            use_cases: record.use_cases,
        };
        let idx = inner.add_node(topic);
        let topic = &inner[idx];
        if by_name.insert(topic.name.clone(), idx).is_some() {
            return Err(ValidationError::DuplicateName {
                name: topic.name.clone(),
            });
        }
        if let Some(prev) = by_file.insert(topic.file.clone(), idx) {
            return Err(ValidationError::DuplicateFile {
                file: topic.file.clone(),
                first: inner[prev].name.clone(),
                second: topic.name.clone(),
            });
        }
        order.push(idx);
    }

    // Pass 2: referential integrity; edge list built while the graph is
    // borrowed, inserted afterwards.
    let mut edges: Vec<(NodeIndex, NodeIndex, EdgeKind)> = Vec::new();
    for &idx in &order {
        let topic = &inner[idx];
        for target in &topic.prerequisites {
            let target_idx = resolve(&by_name, &topic.name, EdgeKind::Prerequisite, target)?;
            // Edge points prerequisite -> dependent.
            edges.push((target_idx, idx, EdgeKind::Prerequisite));
        }
        for target in &topic.leads_to {
            let target_idx = resolve(&by_name, &topic.name, EdgeKind::LeadsTo, target)?;
            edges.push((idx, target_idx, EdgeKind::LeadsTo));
        }
        for target in &topic.related {
            let target_idx = resolve(&by_name, &topic.name, EdgeKind::Related, target)?;
            edges.push((idx, target_idx, EdgeKind::Related));
        }
    }
    for (source, target, kind) in edges {
        inner.add_edge(source, target, kind);
    }

    // Pass 3: the dependency ordering (prerequisites together with their
    // leads_to mirror) must be acyclic.
    if let Some(cycle) = find_cycle(&inner, &order) {
        return Err(ValidationError::CycleDetected { cycle });
    }

    let info = ManifestInfo {
        name,
        description,
        version,
        default_doc,
        total_snippets,
    };
    tracing::info!(
        "loaded manifest `{}`: {} topics, {} edges",
        info.name,
        order.len(),
        inner.edge_count()
    );

    Ok(TopicGraph {
        inner,
        by_name,
        by_file,
        order,
        info,
    })
}

fn resolve(
    by_name: &HashMap<String, NodeIndex>,
    topic: &str,
    kind: EdgeKind,
    target: &str,
) -> Result<NodeIndex, ValidationError> {
    by_name
        .get(target)
        .copied()
        .ok_or_else(|| ValidationError::DanglingReference {
            topic: topic.to_string(),
            field: kind.field(),
            target: target.to_string(),
        })
}

#[derive(Clone, Copy, PartialEq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Three-color depth-first search over Prerequisite and LeadsTo edges.
/// Related edges are advisory and excluded. Returns the first cycle found
/// as a closed name list (first name repeated last).
fn find_cycle(graph: &StableDiGraph<Topic, EdgeKind>, order: &[NodeIndex]) -> Option<Vec<String>> {
    let mut colors: HashMap<NodeIndex, Color> =
        order.iter().map(|&idx| (idx, Color::White)).collect();
    let mut stack: Vec<NodeIndex> = Vec::new();
    for &start in order {
        if colors[&start] == Color::White {
            if let Some(cycle) = visit(graph, start, &mut colors, &mut stack) {
                return Some(cycle);
            }
        }
    }
    None
}

fn visit(
    graph: &StableDiGraph<Topic, EdgeKind>,
    idx: NodeIndex,
    colors: &mut HashMap<NodeIndex, Color>,
    stack: &mut Vec<NodeIndex>,
) -> Option<Vec<String>> {
    colors.insert(idx, Color::Gray);
    stack.push(idx);
    for edge in graph.edges_directed(idx, Direction::Outgoing) {
        if *edge.weight() == EdgeKind::Related {
            continue;
        }
        let next = edge.target();
        match colors[&next] {
            Color::White => {
                if let Some(cycle) = visit(graph, next, colors, stack) {
                    return Some(cycle);
                }
            }
            Color::Gray => {
                // `next` is on the stack; everything from its position
                // onwards is the cycle.
                let pos = stack.iter().position(|&node| node == next).unwrap_or(0);
                let mut cycle: Vec<String> =
                    stack[pos..].iter().map(|&node| graph[node].name.clone()).collect();
                cycle.push(graph[next].name.clone());
                return Some(cycle);
            }
            Color::Black => {}
        }
    }
    stack.pop();
    colors.insert(idx, Color::Black);
    None
}
