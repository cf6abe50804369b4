//! Team affiliation. Hostility is symmetric and neutral parties are never
//! hostile to anyone, which gates both damage and AI target acquisition.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Faction {
    Marine,
    Demon,
    Neutral,
}

impl Faction {
    /// Parse the faction string from an actor definition. Unknown names
    /// fall back to neutral with a warning rather than failing the spawn.
    pub fn parse(s: &str) -> Self {
        match s {
            "MARINE" => Faction::Marine,
            "DEMON" => Faction::Demon,
            "NEUTRAL" => Faction::Neutral,
            other => {
                log::warn!("unknown faction {:?}; treating as NEUTRAL", other);
                Faction::Neutral
            }
        }
    }
}

#[inline]
pub fn are_hostile(a: Faction, b: Faction) -> bool {
    a != b && a != Faction::Neutral && b != Faction::Neutral
}
