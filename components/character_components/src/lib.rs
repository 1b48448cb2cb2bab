use bevy::prelude::*;

/// Marker for player- and AI-driven characters, as opposed to projectiles and scenery.
#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct Character;

/// Current combat focus of a character. Cleared when the target dies or leaves range.
#[derive(Component, Reflect, Default, Debug)]
#[reflect(Component)]
pub struct AiBrain {
    pub target: Option<Entity>,
    /// Position of the current target, refreshed during acquisition.
    pub target_position: Option<Vec2>,
}

/// Where aim directions are computed from.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub enum AimOrigin {
    #[default]
    BodyCenter,
    Muzzle,
}

/// Direction the weapon currently points. Steered by the aiming systems,
/// read when deciding whether a shot may go out.
#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component, Default)]
pub struct WeaponAim {
    pub direction: Vec2,
}

impl Default for WeaponAim {
    fn default() -> Self {
        Self { direction: Vec2::X }
    }
}

/// Degrees-per-second cap applied when steering [`WeaponAim`].
#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component, Default)]
pub struct AimRotationSpeed(pub f32);

impl Default for AimRotationSpeed {
    fn default() -> Self {
        Self(360.0)
    }
}

/// Offset from the body center to the projectile spawn point, in local space.
#[derive(Component, Reflect, Default, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct MuzzleOffset(pub Vec2);

#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Most recent movement direction, fed to movement-based aiming.
#[derive(Component, Reflect, Default, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct MoveDirection(pub Vec2);

/// Present while a character stands inside a fishing zone.
#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct NearWater;

/// Fishing ability stub: the cast prompt timing configuration. The QTE input
/// sequence itself lives with whatever input layer the game is embedded in.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component, Default)]
pub struct FishingAbility {
    pub permitted: bool,
    pub max_qte_time: f32,
    pub input_delay: f32,
}

impl Default for FishingAbility {
    fn default() -> Self {
        Self {
            permitted: true,
            max_qte_time: 4.0,
            input_delay: 0.35,
        }
    }
}

/// Configures what collapses with this character when it dies.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component, Default)]
pub struct CollapseOnDeath {
    /// Auxiliary entities (status bars, weapon sprites) hidden while dead.
    pub hide_on_death: Vec<Entity>,
    /// Scale applied to the last impact direction when shoving the corpse.
    pub force_multiplier: f32,
}

impl Default for CollapseOnDeath {
    fn default() -> Self {
        Self {
            hide_on_death: Vec::new(),
            force_multiplier: 140.0,
        }
    }
}
