//! Log-backed presenter for headless and terminal runs.
//!
//! Writes the HUD through the `log` facade whenever a line other than the
//! weapon-energy readout changes, plus notable gameplay events.

use district_core::events::SimEvent;
use district_core::state::{GameStateSnapshot, HudView};
use district_sim::driver::Presenter;

#[derive(Debug, Default)]
pub struct LogPresenter {
    last_hud: Option<HudView>,
    frames: u64,
    hud_updates: u64,
}

impl LogPresenter {
    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Number of times the HUD was written out.
    pub fn hud_updates(&self) -> u64 {
        self.hud_updates
    }
}

fn log_events(events: &[SimEvent]) {
    for event in events {
        match event {
            SimEvent::PhaseChanged { phase } => log::info!("phase: {phase:?}"),
            SimEvent::EnemyDefeated { enemy } => log::info!("drone {} down", enemy.0),
            SimEvent::EnemyHit { enemy, health_left } => {
                log::debug!("drone {} hit ({health_left} left)", enemy.0)
            }
            SimEvent::ShotFired { ammo_left } => log::trace!("shot, energy {ammo_left:.1}"),
            SimEvent::PlayerDefeated => log::warn!("player down"),
            SimEvent::ObjectiveChanged { .. } | SimEvent::CampaignComplete => {}
        }
    }
}

/// HUD lines that matter to a reader, energy excluded.
fn headline_changed(previous: Option<&HudView>, current: &HudView) -> bool {
    previous.map_or(true, |prev| {
        prev.status != current.status
            || prev.mission != current.mission
            || prev.objective != current.objective
            || prev.banner != current.banner
    })
}

impl Presenter for LogPresenter {
    fn present(&mut self, snapshot: &GameStateSnapshot) {
        self.frames += 1;
        log_events(&snapshot.events);

        let hud = &snapshot.hud;
        if headline_changed(self.last_hud.as_ref(), hud) {
            self.hud_updates += 1;
            log::info!("{} | {} | {}", hud.status, hud.ammo, hud.mission);
            log::info!("{}", hud.objective);
            if let Some(banner) = &hud.banner {
                log::warn!("{banner}");
            }
        }
        self.last_hud = Some(hud.clone());
    }

    fn objective_changed(&mut self, hud: &HudView) {
        log::info!("objective updated: {} / {}", hud.mission, hud.objective);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(ammo: &str, mission: &str) -> GameStateSnapshot {
        GameStateSnapshot {
            hud: HudView {
                status: "Status: alive".into(),
                ammo: ammo.into(),
                mission: mission.into(),
                objective: "Objective: test".into(),
                banner: None,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_energy_changes_do_not_relog_hud() {
        let mut presenter = LogPresenter::default();
        presenter.present(&snapshot("Weapon energy: 100", "Mission: A"));
        presenter.present(&snapshot("Weapon energy: 99", "Mission: A"));
        presenter.present(&snapshot("Weapon energy: 98", "Mission: A"));
        assert_eq!(presenter.frames(), 3);
        assert_eq!(presenter.hud_updates(), 1);
    }

    #[test]
    fn test_mission_change_relogs_hud() {
        let mut presenter = LogPresenter::default();
        presenter.present(&snapshot("Weapon energy: 100", "Mission: A"));
        presenter.present(&snapshot("Weapon energy: 100", "Mission: B"));
        assert_eq!(presenter.hud_updates(), 2);
    }

    #[test]
    fn test_banner_counts_as_headline() {
        let mut defeated = snapshot("Weapon energy: 100", "Mission: A");
        defeated.hud.banner = Some("down".into());
        assert!(headline_changed(
            Some(&snapshot("Weapon energy: 100", "Mission: A").hud),
            &defeated.hud
        ));
        assert!(headline_changed(None, &defeated.hud));
    }
}
