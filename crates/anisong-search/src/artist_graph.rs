//! Artist membership graph and seed expansion.
//!
//! Nodes are artist instances, `(artist_id, line_up_id)`. Each edge points from
//! a member instance to the group line-up it belongs to and carries the
//! member's role in that line-up:
//!
//! ```text
//!   (1, -1) --vocalist--> (10, 0) --vocalist--> (20, 0)
//!   (2, -1) --vocalist--> (10, 0)
//! ```
//!
//! Upward expansion follows edges forward (member → group), downward
//! expansion follows them backward (group → member). The storage layer does
//! not guarantee the graph is acyclic, so traversal is an explicit worklist
//! with a visited set per direction.

use std::collections::{HashMap, HashSet, VecDeque};

use anisong_core::entities::{Artist, ArtistInstance, Credit, MembershipEdge, NO_LINE_UP, Song};
use anisong_core::enums::{CreditRole, GroupGranularity};
use rustworkx_core::petgraph::Direction;
use rustworkx_core::petgraph::graph::{DiGraph, NodeIndex};
use rustworkx_core::petgraph::visit::EdgeRef;

/// Directed membership graph built from `link_artist_line_up` rows.
#[derive(Debug, Default)]
pub struct ArtistGraph {
    graph: DiGraph<ArtistInstance, CreditRole>,
    id_to_index: HashMap<ArtistInstance, NodeIndex>,
    /// Every node of an artist, for expanding the no-line-up sentinel.
    by_artist: HashMap<i64, Vec<NodeIndex>>,
}

impl ArtistGraph {
    #[must_use]
    pub fn from_edges(edges: &[MembershipEdge]) -> Self {
        let mut this = Self::default();
        for edge in edges {
            let member = this.node(edge.member);
            let group = this.node(edge.group);
            this.graph.add_edge(member, group, edge.role);
        }
        this
    }

    fn node(&mut self, instance: ArtistInstance) -> NodeIndex {
        if let Some(&idx) = self.id_to_index.get(&instance) {
            return idx;
        }
        let idx = self.graph.add_node(instance);
        self.id_to_index.insert(instance, idx);
        self.by_artist.entry(instance.artist_id).or_default().push(idx);
        idx
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Expand seed artists into the set of instances a credit may match.
    ///
    /// Seeds contribute every one of their line-ups plus [`NO_LINE_UP`]. Only
    /// edges whose member role is in `roles` are followed; an empty `roles`
    /// follows every edge. Instances found upward keep expanding upward only,
    /// and likewise downward.
    #[must_use]
    pub fn resolve(
        &self,
        seeds: &[Artist],
        granularity: GroupGranularity,
        roles: &[CreditRole],
    ) -> ResolvedArtists {
        let follows = |role: &CreditRole| roles.is_empty() || roles.contains(role);

        let mut resolved = ResolvedArtists::default();
        let mut seed_instances = Vec::new();
        for artist in seeds {
            seed_instances.push(ArtistInstance::new(artist.id, NO_LINE_UP));
            seed_instances.extend(
                artist
                    .line_ups
                    .iter()
                    .map(|&line_up| ArtistInstance::new(artist.id, line_up)),
            );
        }
        for &instance in &seed_instances {
            resolved.insert(instance);
        }

        if granularity.expands_upward() {
            let reached = self.walk(&seed_instances, Direction::Outgoing, &follows);
            tracing::debug!(count = reached.len(), "upward expansion");
            for instance in reached {
                resolved.insert(instance);
            }
        }
        if granularity.expands_downward() {
            let reached = self.walk(&seed_instances, Direction::Incoming, &follows);
            tracing::debug!(count = reached.len(), "downward expansion");
            for instance in reached {
                resolved.insert(instance);
            }
        }

        resolved
    }

    /// Breadth-first walk in one direction from `start`, returning every instance seen.
    fn walk(
        &self,
        start: &[ArtistInstance],
        direction: Direction,
        follows: &impl Fn(&CreditRole) -> bool,
    ) -> HashSet<ArtistInstance> {
        let mut visited: HashSet<ArtistInstance> = start.iter().copied().collect();
        let mut queue: VecDeque<ArtistInstance> = start.iter().copied().collect();

        while let Some(instance) = queue.pop_front() {
            for idx in self.adjacent_nodes(instance, direction) {
                for edge in self.graph.edges_directed(idx, direction) {
                    if !follows(edge.weight()) {
                        continue;
                    }
                    let next = match direction {
                        Direction::Outgoing => self.graph[edge.target()],
                        Direction::Incoming => self.graph[edge.source()],
                    };
                    if visited.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        visited
    }

    /// Nodes whose edges stand for `instance` when walking in `direction`.
    ///
    /// Upward, a specific line-up also inherits the memberships recorded
    /// without a line-up. Downward, the sentinel stands for every line-up.
    fn adjacent_nodes(&self, instance: ArtistInstance, direction: Direction) -> Vec<NodeIndex> {
        let mut nodes = Vec::new();
        if let Some(&idx) = self.id_to_index.get(&instance) {
            nodes.push(idx);
        }
        match direction {
            Direction::Outgoing if instance.line_up_id != NO_LINE_UP => {
                let sentinel = ArtistInstance::new(instance.artist_id, NO_LINE_UP);
                nodes.extend(self.id_to_index.get(&sentinel).copied());
            }
            Direction::Incoming if instance.line_up_id == NO_LINE_UP => {
                for &idx in self.by_artist.get(&instance.artist_id).into_iter().flatten() {
                    if !nodes.contains(&idx) {
                        nodes.push(idx);
                    }
                }
            }
            _ => {}
        }
        nodes
    }
}

/// Artist instances a search resolved to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedArtists {
    instances: HashSet<ArtistInstance>,
    artist_ids: HashSet<i64>,
}

impl ResolvedArtists {
    fn insert(&mut self, instance: ArtistInstance) {
        self.artist_ids.insert(instance.artist_id);
        self.instances.insert(instance);
    }

    #[must_use]
    pub const fn instances(&self) -> &HashSet<ArtistInstance> {
        &self.instances
    }

    /// Distinct artist ids, ascending.
    #[must_use]
    pub fn artist_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.artist_ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// A credit matches its exact instance; a credit without a line-up
    /// matches any resolved instance of that artist.
    #[must_use]
    pub fn contains_credit(&self, credit: &Credit) -> bool {
        self.instances
            .contains(&ArtistInstance::new(credit.artist_id, credit.line_up_id))
            || (credit.line_up_id == NO_LINE_UP && self.artist_ids.contains(&credit.artist_id))
    }

    /// Whether `song` credits a resolved instance in one of `roles` with at
    /// most `max_other_artists` other distinct artists in that same role.
    /// `None` disables the bound.
    #[must_use]
    pub fn credits_song(
        &self,
        song: &Song,
        roles: &[CreditRole],
        max_other_artists: Option<u32>,
    ) -> bool {
        roles.iter().any(|&role| {
            let mut credited = false;
            let mut others = HashSet::new();
            for credit in song.credits_in(role) {
                if self.contains_credit(credit) {
                    credited = true;
                } else if !self.artist_ids.contains(&credit.artist_id) {
                    others.insert(credit.artist_id);
                }
            }
            credited
                && max_other_artists
                    .is_none_or(|max| others.len() <= usize::try_from(max).unwrap_or(usize::MAX))
        })
    }
}
