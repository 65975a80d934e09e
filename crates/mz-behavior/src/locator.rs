//! Nearest-target search over typed entity sets.
//!
//! Candidates the agent would move *toward* (pills, power pills, vulnerable
//! ghosts) must pass [`SafetyOracle::is_path_safe`]; active ghosts are only
//! measured, never approached, so they skip that check.  Survivors are
//! ranked by path distance from the attacker; unreachable ones are dropped.
//!
//! Ties keep the first candidate in iteration order (ghost-table order for
//! ghosts, pill-index order for pills).  That order is arbitrary and not a
//! spatial rule.

use mz_core::NodeId;

use crate::{AgentConfig, GameSnapshot, SafetyOracle};

/// The four entity sets the agent tracks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Active (non-vulnerable) ghosts.
    Ghost,
    /// Vulnerable ghosts.
    EdibleGhost,
    Pill,
    PowerPill,
}

impl EntityKind {
    /// Whether a candidate of this kind must have a safe first step.
    #[inline]
    pub fn needs_safe_path(self) -> bool {
        !matches!(self, EntityKind::Ghost)
    }

    /// Nodes holding an entity of this kind in `snap`.
    pub fn candidates(self, snap: &GameSnapshot<'_>) -> Vec<NodeId> {
        match self {
            EntityKind::Ghost => snap
                .hostiles
                .iter()
                .filter(|h| !h.vulnerable)
                .map(|h| h.node)
                .collect(),
            EntityKind::EdibleGhost => snap
                .hostiles
                .iter()
                .filter(|h| h.vulnerable)
                .map(|h| h.node)
                .collect(),
            EntityKind::Pill      => snap.remaining_pills().collect(),
            EntityKind::PowerPill => snap.remaining_power_pills().collect(),
        }
    }
}

/// A located entity and its path distance from the attacker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Closest {
    pub node:     NodeId,
    pub distance: u32,
}

/// Closest entity of `kind`, or `None` if no candidate survives filtering.
pub fn find_closest(
    kind:   EntityKind,
    snap:   &GameSnapshot<'_>,
    safety: &SafetyOracle<'_, '_>,
) -> Option<Closest> {
    let mut best: Option<Closest> = None;

    for node in kind.candidates(snap) {
        if kind.needs_safe_path() && !safety.is_path_safe(node) {
            tracing::trace!(?kind, %node, "candidate rejected: unsafe first step");
            continue;
        }
        let Some(distance) = snap.maze.path_distance(snap.attacker, node) else {
            continue;
        };
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(Closest { node, distance });
        }
    }

    best
}

/// Nearest node in `nodes` by path distance from `from`, unfiltered.
///
/// Used by the baseline controllers, which have no safety policy.
pub fn nearest_by_path(
    snap:  &GameSnapshot<'_>,
    from:  NodeId,
    nodes: impl IntoIterator<Item = NodeId>,
) -> Option<Closest> {
    let mut best: Option<Closest> = None;
    for node in nodes {
        let Some(distance) = snap.maze.path_distance(from, node) else { continue };
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(Closest { node, distance });
        }
    }
    best
}

// ── ClosestEntities ───────────────────────────────────────────────────────────

/// The per-tick closest-entity cache.
///
/// Rebuilt from scratch every tick by [`locate`](Self::locate); never
/// updated incrementally, so pills eaten or ghosts moved since the last
/// tick can never leave a stale entry behind.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClosestEntities {
    pub pill:         Option<Closest>,
    pub power_pill:   Option<Closest>,
    pub edible_ghost: Option<Closest>,
    pub ghost:        Option<Closest>,
}

impl ClosestEntities {
    /// Run all four lookups against `snap`.
    pub fn locate(snap: &GameSnapshot<'_>, config: &AgentConfig) -> Self {
        let safety = SafetyOracle::new(snap, config.safety_margin);
        Self {
            pill:         find_closest(EntityKind::Pill, snap, &safety),
            power_pill:   find_closest(EntityKind::PowerPill, snap, &safety),
            edible_ghost: find_closest(EntityKind::EdibleGhost, snap, &safety),
            ghost:        find_closest(EntityKind::Ghost, snap, &safety),
        }
    }

    /// Cached result for `kind`.
    pub fn get(&self, kind: EntityKind) -> Option<Closest> {
        match kind {
            EntityKind::Pill        => self.pill,
            EntityKind::PowerPill   => self.power_pill,
            EntityKind::EdibleGhost => self.edible_ghost,
            EntityKind::Ghost       => self.ghost,
        }
    }

    /// Node of the cached result for `kind`.
    #[inline]
    pub fn node(&self, kind: EntityKind) -> Option<NodeId> {
        self.get(kind).map(|c| c.node)
    }
}
