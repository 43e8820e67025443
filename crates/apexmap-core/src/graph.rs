//! Topic graph wrapper using petgraph::StableDiGraph with name/file indexes

use crate::error::NotFoundError;
use crate::model::{EdgeKind, ManifestInfo, Topic};
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::{HashMap, HashSet};

/// The topic graph — a validated, read-only view of one manifest.
///
/// Built once by [`TopicGraph::load_str`] / [`TopicGraph::load_path`] and
/// never mutated afterwards, so queries take `&self` and are safe to call
/// from any number of concurrent readers.
///
/// Declaration-ordered traversals (`related`, `prerequisites_closure`, …)
/// walk the name lists stored on each [`Topic`]; petgraph's adjacency
/// iteration runs in reverse insertion order, which would scramble them.
/// Reverse lookups and the load-time cycle check walk the petgraph edges.
pub struct TopicGraph {
    pub(crate) inner: StableDiGraph<Topic, EdgeKind>,
    pub(crate) by_name: HashMap<String, NodeIndex>,
    pub(crate) by_file: HashMap<String, NodeIndex>,
    /// Node indices in manifest order.
    pub(crate) order: Vec<NodeIndex>,
    pub(crate) info: ManifestInfo,
}

impl std::fmt::Debug for TopicGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TopicGraph")
            .field("manifest", &self.info.name)
            .field("topic_count", &self.inner.node_count())
            .field("edge_count", &self.inner.edge_count())
            .finish()
    }
}

impl TopicGraph {
    /// Manifest-level metadata.
    pub fn info(&self) -> &ManifestInfo {
        &self.info
    }

    /// Total number of topics.
    pub fn topic_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Total number of edges across all three kinds.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Look up a topic by its unique name (case-sensitive).
    pub fn get_by_name(&self, name: &str) -> Result<&Topic, NotFoundError> {
        self.by_name
            .get(name)
            .map(|&idx| &self.inner[idx])
            .ok_or_else(|| NotFoundError::Name(name.to_string()))
    }

    /// Look up the topic owning a documentation file.
    pub fn get_by_file(&self, file: &str) -> Result<&Topic, NotFoundError> {
        self.by_file
            .get(file)
            .map(|&idx| &self.inner[idx])
            .ok_or_else(|| NotFoundError::File(file.to_string()))
    }

    /// All topics, in manifest order.
    pub fn list_all(&self) -> Vec<&Topic> {
        self.order.iter().map(|&idx| &self.inner[idx]).collect()
    }

    /// Topics matching an arbitrary predicate, manifest order preserved.
    /// An empty result is a valid outcome, not an error.
    pub fn filter<P>(&self, mut predicate: P) -> Vec<&Topic>
    where
        P: FnMut(&Topic) -> bool,
    {
        self.order
            .iter()
            .map(|&idx| &self.inner[idx])
            .filter(|topic| predicate(topic))
            .collect()
    }

    /// The full transitive set of prerequisites, dependencies before
    /// dependents, deduplicated, excluding the queried topic itself.
    ///
    /// Depth-first post-order over the declared prerequisite lists, so
    /// siblings keep their manifest declaration order. Load-time
    /// validation guarantees the walk terminates.
    pub fn prerequisites_closure(&self, name: &str) -> Result<Vec<&Topic>, NotFoundError> {
        let start = self.index_of(name)?;
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        self.collect_prerequisites(start, &mut seen, &mut out);
        Ok(out)
    }

    /// A valid learning order ending at the requested topic: the
    /// prerequisite closure followed by the topic itself.
    pub fn recommended_path(&self, name: &str) -> Result<Vec<&Topic>, NotFoundError> {
        let start = self.index_of(name)?;
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        self.collect_prerequisites(start, &mut seen, &mut out);
        out.push(&self.inner[start]);
        Ok(out)
    }

    /// Direct (non-transitive) prerequisites, declaration order.
    pub fn prerequisites(&self, name: &str) -> Result<Vec<&Topic>, NotFoundError> {
        let idx = self.index_of(name)?;
        Ok(self.resolve_list(&self.inner[idx].prerequisites))
    }

    /// Suggested next topics, declaration order.
    pub fn leads_to(&self, name: &str) -> Result<Vec<&Topic>, NotFoundError> {
        let idx = self.index_of(name)?;
        Ok(self.resolve_list(&self.inner[idx].leads_to))
    }

    /// Cross-references exactly as declared, in declaration order. No
    /// symmetry is implied: A listing B does not make B list A.
    pub fn related(&self, name: &str) -> Result<Vec<&Topic>, NotFoundError> {
        let idx = self.index_of(name)?;
        Ok(self.resolve_list(&self.inner[idx].related))
    }

    /// Topics that list the given topic as a prerequisite, manifest
    /// order. Answered from the reverse direction of the stored edges.
    pub fn dependents(&self, name: &str) -> Result<Vec<&Topic>, NotFoundError> {
        let idx = self.index_of(name)?;
        let targets: HashSet<NodeIndex> = self
            .inner
            .edges_directed(idx, Direction::Outgoing)
            .filter(|edge| *edge.weight() == EdgeKind::Prerequisite)
            .map(|edge| edge.target())
            .collect();
        Ok(self
            .order
            .iter()
            .filter(|idx| targets.contains(*idx))
            .map(|&idx| &self.inner[idx])
            .collect())
    }

    fn index_of(&self, name: &str) -> Result<NodeIndex, NotFoundError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| NotFoundError::Name(name.to_string()))
    }

    /// Post-order walk over declared prerequisite lists. Marks nodes
    /// before descending so diamonds resolve to a single emission.
    fn collect_prerequisites<'a>(
        &'a self,
        idx: NodeIndex,
        seen: &mut HashSet<NodeIndex>,
        out: &mut Vec<&'a Topic>,
    ) {
        // Iterating the stored list (not petgraph adjacency) keeps the
        // manifest's declaration order among siblings.
        for name in &self.inner[idx].prerequisites {
            let prereq = self.by_name[name];
            if seen.insert(prereq) {
                self.collect_prerequisites(prereq, seen, out);
                out.push(&self.inner[prereq]);
            }
        }
    }

    fn resolve_list<'a>(&'a self, names: &'a [String]) -> Vec<&'a Topic> {
        // Targets were checked at load time; the index cannot miss here.
        names.iter().map(|name| &self.inner[self.by_name[name]]).collect()
    }
}
