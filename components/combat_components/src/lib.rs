use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Coarse combat classification. Most filtering in the game (who attacks whom,
/// whose deaths count toward the objective) happens at this granularity.
#[derive(
    Component, Reflect, Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[reflect(Component, Default)]
pub enum Layer {
    Players,
    #[default]
    Enemies,
    Neutral,
}

impl Layer {
    pub const fn bit(self) -> u8 {
        match self {
            Layer::Players => 1 << 0,
            Layer::Enemies => 1 << 1,
            Layer::Neutral => 1 << 2,
        }
    }

    /// Whether entities on this layer engage entities on `other`.
    /// Neutral never attacks and is never attacked.
    pub fn hostile_to(self, other: Layer) -> bool {
        self != other && self != Layer::Neutral && other != Layer::Neutral
    }
}

/// Bit mask over [`Layer`], for configuration that applies to several layers at once.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerMask(pub u8);

impl LayerMask {
    pub const NONE: LayerMask = LayerMask(0);
    pub const PLAYERS: LayerMask = LayerMask(Layer::Players.bit());
    pub const ENEMIES: LayerMask = LayerMask(Layer::Enemies.bit());

    pub fn contains(self, layer: Layer) -> bool {
        self.0 & layer.bit() != 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::ENEMIES
    }
}

impl From<Layer> for LayerMask {
    fn from(layer: Layer) -> Self {
        LayerMask(layer.bit())
    }
}

#[derive(Component, Reflect, Default, Debug, Clone)]
#[reflect(Component)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }
}

#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct Dead;

#[derive(Component, Reflect, Default, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct MovementSpeed(pub f32);

/// Direction of the most recent hit taken. Read when the character collapses.
#[derive(Component, Reflect, Default, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct LastImpact(pub Vec2);

#[derive(Component, Reflect, Default, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct Damage(pub f32);

#[derive(Component, Reflect, Default, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct AttackRange(pub f32);

#[derive(Component, Reflect, Default, Debug, Clone)]
#[reflect(Component)]
pub struct AttackSpeed {
    pub timer: Timer,
}

impl AttackSpeed {
    pub fn from_secs(secs: f32) -> Self {
        Self {
            timer: Timer::from_seconds(secs, TimerMode::Repeating),
        }
    }
}

#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct Projectile;

#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component, Default)]
pub struct ProjectileTarget(pub Entity);

impl Default for ProjectileTarget {
    fn default() -> Self {
        Self(Entity::PLACEHOLDER)
    }
}

#[derive(Component, Reflect, Default, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct ProjectileSpeed(pub f32);

#[derive(Component, Reflect, Default, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct ProjectileDamage(pub f32);
