// Damage classification and the small actor capability traits

/// Who an actor's touch damage applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DamageKind {
    /// Hurts player-aligned actors
    HurtsPlayers,
    /// Hurts enemy-aligned actors
    HurtsEnemies,
    /// Hurts nobody
    #[default]
    Harmless,
}

impl DamageKind {
    pub fn hurts_players(&self) -> bool {
        matches!(self, Self::HurtsPlayers)
    }

    pub fn hurts_enemies(&self) -> bool {
        matches!(self, Self::HurtsEnemies)
    }

    pub fn is_harmless(&self) -> bool {
        matches!(self, Self::Harmless)
    }
}

/// Liveness capability. The base behavior is "always alive"; actor kinds
/// with a death condition override it, and the roster drops anything that
/// reports dead.
pub trait Alive {
    fn is_alive(&self) -> bool {
        true
    }
}

/// Touch-damage capability, read by combat systems outside this crate
pub trait Damaging {
    fn damage_kind(&self) -> DamageKind;
    fn damage(&self) -> u32;
}
