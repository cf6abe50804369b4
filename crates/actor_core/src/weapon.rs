//! Per-actor weapon state: the shared definition plus a refire clock.

use std::sync::Arc;

use data_runtime::WeaponDef;

#[derive(Debug, Clone)]
pub struct Weapon {
    pub def: Arc<WeaponDef>,
    cooldown_s: f32,
}

impl Weapon {
    /// New weapons start ready to fire.
    pub fn new(def: Arc<WeaponDef>) -> Self {
        Self { def, cooldown_s: 0.0 }
    }

    pub fn tick(&mut self, dt: f32) {
        if self.cooldown_s > 0.0 {
            self.cooldown_s = (self.cooldown_s - dt).max(0.0);
        }
    }

    #[inline]
    pub fn ready(&self) -> bool {
        self.cooldown_s <= 0.0
    }

    /// Mark the weapon as just fired.
    pub fn reset_cooldown(&mut self) {
        self.cooldown_s = self.def.refire_time;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pistol() -> Arc<WeaponDef> {
        Arc::new(
            toml::from_str(
                r#"
                name = "Pistol"
                refire_time = 0.5
                ray_count = 1
                "#,
            )
            .unwrap(),
        )
    }

    #[test]
    fn starts_ready_and_paces_refire() {
        let mut w = Weapon::new(pistol());
        assert!(w.ready());
        w.reset_cooldown();
        assert!(!w.ready());
        w.tick(0.25);
        assert!(!w.ready());
        w.tick(0.25);
        assert!(w.ready());
    }
}
