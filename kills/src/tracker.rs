use {
    bevy::prelude::*,
    combat_components::{Layer, LayerMask},
};

/// How deaths are matched against the objective.
#[derive(Reflect, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TargetMode {
    /// Count any death on the layers selected by the mask.
    #[default]
    Layer,
    /// Count only deaths of the explicitly listed entities.
    List,
}

/// What one death amounted to, from the tracker's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathOutcome {
    /// Wrong layer, not in the list, tracker not armed, or already done counting.
    Ignored,
    /// A tracked death; more are still needed.
    Counted,
    /// A tracked death, and it was the last one needed.
    LastDeath,
}

/// Session-scoped kill objective.
///
/// Owned and armed by the session flow (see [`crate::initialize_tracker`]); deaths are
/// fed in one at a time through [`KillTracker::register_death`], so when several
/// combatants die in the same frame their outcomes land in arrival order. Once the
/// threshold is reached the tracker stays exhausted; later deaths change nothing.
#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct KillTracker {
    pub mode: TargetMode,
    /// Explicit targets, List mode only. Membership is fixed at configuration time.
    pub targets: Vec<Entity>,
    /// Layers whose deaths count, Layer mode only.
    pub target_mask: LayerMask,
    /// In Layer mode, compute the threshold by counting matching live combatants at init.
    pub auto_threshold: bool,
    pub death_threshold: u32,
    pub remaining_deaths: u32,
    active: bool,
}

impl Default for KillTracker {
    fn default() -> Self {
        Self {
            mode: TargetMode::default(),
            targets: Vec::new(),
            target_mask: LayerMask::default(),
            auto_threshold: true,
            death_threshold: 0,
            remaining_deaths: 0,
            active: false,
        }
    }
}

impl KillTracker {
    /// Resets the counters and arms the tracker. Calling this again simply starts the
    /// count over with the new threshold; no notifications are emitted from here.
    ///
    /// A threshold of zero lands in the exhausted state immediately: nothing needs
    /// to die, and nothing will ever be reported.
    pub fn initialize(&mut self, threshold: u32) {
        self.death_threshold = threshold;
        self.remaining_deaths = threshold;
        self.active = true;
    }

    /// Stops event handling, for session teardown. Deaths arriving while inactive
    /// are ignored rather than counted against a stale objective.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// All required deaths have happened (or none were required to begin with).
    pub fn exhausted(&self) -> bool {
        self.remaining_deaths == 0
    }

    fn qualifies(&self, entity: Entity, layer: Layer) -> bool {
        match self.mode {
            TargetMode::Layer => self.target_mask.contains(layer),
            TargetMode::List => self.targets.contains(&entity),
        }
    }

    /// Feeds one death into the tracker and reports what it amounted to.
    pub fn register_death(&mut self, entity: Entity, layer: Layer) -> DeathOutcome {
        if !self.active || self.exhausted() {
            return DeathOutcome::Ignored;
        }
        if !self.qualifies(entity, layer) {
            return DeathOutcome::Ignored;
        }

        self.remaining_deaths -= 1;
        if self.remaining_deaths == 0 {
            DeathOutcome::LastDeath
        } else {
            DeathOutcome::Counted
        }
    }
}
