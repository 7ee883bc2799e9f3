#[cfg(test)]
mod tests {
    use glam::Vec3;

    use district_core::enums::EnemyBehavior;

    use crate::fsm::{evaluate, PursuitContext};
    use crate::profiles::PursuitProfile;

    const EPS: f32 = 1e-4;

    fn make_context(enemy: Vec3, player: Vec3, dt: f32) -> PursuitContext {
        PursuitContext {
            position: enemy,
            player_position: player,
            distance: enemy.distance(player),
            dt,
        }
    }

    #[test]
    fn test_idle_outside_aggro_radius() {
        let profile = PursuitProfile::default();
        let enemy = Vec3::new(0.0, 1.0, -41.0);
        let update = evaluate(&make_context(enemy, Vec3::new(0.0, 1.0, 0.0), 1.0), &profile);
        assert_eq!(update.behavior, EnemyBehavior::Idle);
        assert_eq!(update.new_position, enemy);
        assert_eq!(update.contact_damage, 0.0);
    }

    #[test]
    fn test_pursues_inside_aggro_radius() {
        let profile = PursuitProfile::default();
        let enemy = Vec3::new(0.0, 1.0, -20.0);
        let player = Vec3::new(0.0, 1.0, 0.0);
        let update = evaluate(&make_context(enemy, player, 0.5), &profile);
        assert_eq!(update.behavior, EnemyBehavior::Pursuing);
        // 2.2 units/s for half a second toward +z.
        assert!((update.new_position.z - (-20.0 + 1.1)).abs() < EPS);
        assert_eq!(update.contact_damage, 0.0);
    }

    #[test]
    fn test_closing_speed_is_independent_of_distance() {
        let profile = PursuitProfile::default();
        let player = Vec3::ZERO;
        for start in [Vec3::new(30.0, 0.0, 0.0), Vec3::new(3.0, 4.0, 0.0)] {
            let update = evaluate(&make_context(start, player, 0.1), &profile);
            let moved = start.distance(update.new_position);
            assert!((moved - 0.22).abs() < EPS, "moved {moved}");
        }
    }

    #[test]
    fn test_pursuit_moves_in_three_dimensions() {
        let profile = PursuitProfile::default();
        let enemy = Vec3::new(0.0, 1.0, 0.0);
        let player = Vec3::new(0.0, 11.0, 0.0);
        let update = evaluate(&make_context(enemy, player, 1.0), &profile);
        assert!((update.new_position.y - 3.2).abs() < EPS);
    }

    #[test]
    fn test_contact_damage_inside_melee_radius() {
        let profile = PursuitProfile::default();
        let enemy = Vec3::new(1.0, 0.0, 0.0);
        let update = evaluate(&make_context(enemy, Vec3::ZERO, 1.0), &profile);
        assert_eq!(update.behavior, EnemyBehavior::Attacking);
        assert!((update.contact_damage - 12.0).abs() < EPS);
    }

    #[test]
    fn test_contact_damage_scales_with_dt() {
        let profile = PursuitProfile::default();
        let enemy = Vec3::new(0.5, 0.0, 0.0);
        let update = evaluate(&make_context(enemy, Vec3::ZERO, 0.25), &profile);
        assert!((update.contact_damage - 3.0).abs() < EPS);
    }

    #[test]
    fn test_melee_radius_is_strict() {
        let profile = PursuitProfile::default();
        let enemy = Vec3::new(1.7, 0.0, 0.0);
        let update = evaluate(&make_context(enemy, Vec3::ZERO, 1.0), &profile);
        assert_eq!(update.contact_damage, 0.0);
        assert_eq!(update.behavior, EnemyBehavior::Pursuing);
    }

    #[test]
    fn test_never_overshoots_player() {
        let profile = PursuitProfile::default();
        let enemy = Vec3::new(0.5, 0.0, 0.0);
        let update = evaluate(&make_context(enemy, Vec3::ZERO, 1.0), &profile);
        assert!(update.new_position.length() < EPS);
    }

    #[test]
    fn test_coincident_enemy_stays_put() {
        let profile = PursuitProfile::default();
        let update = evaluate(&make_context(Vec3::ONE, Vec3::ONE, 1.0), &profile);
        assert_eq!(update.new_position, Vec3::ONE);
        assert!(update.new_position.is_finite());
        assert_eq!(update.behavior, EnemyBehavior::Attacking);
    }

    #[test]
    fn test_zero_dt_is_inert() {
        let profile = PursuitProfile::default();
        let enemy = Vec3::new(1.0, 0.0, 0.0);
        let update = evaluate(&make_context(enemy, Vec3::ZERO, 0.0), &profile);
        assert_eq!(update.new_position, enemy);
        assert_eq!(update.contact_damage, 0.0);
    }
}
