//! Projectile vs player hit detection and off-screen culling

use super::aabb::Aabb;
use super::state::Projectile;

/// Outcome of one collision/cull pass
#[derive(Debug, Clone, Default)]
pub struct CollisionReport {
    /// Projectiles that hit the player, removed from the active list
    pub hits: Vec<Projectile>,
    /// Number of projectiles dropped for leaving the level
    pub culled: usize,
}

impl CollisionReport {
    #[inline]
    pub fn any_hit(&self) -> bool {
        !self.hits.is_empty()
    }
}

/// Test every projectile against the player box once
///
/// Each projectile is kept, reported as a hit, or culled; never more than one
/// of these, so nothing is removed twice. Hits take precedence over culling.
pub fn check(projectiles: &mut Vec<Projectile>, player: &Aabb) -> CollisionReport {
    let mut report = CollisionReport::default();
    let mut kept = Vec::with_capacity(projectiles.len());

    for p in projectiles.drain(..) {
        if p.bounds().intersects(player) {
            report.hits.push(p);
        } else if p.is_off_screen() {
            report.culled += 1;
        } else {
            kept.push(p);
        }
    }

    *projectiles = kept;
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn projectile(id: u32, x: f32, y: f32) -> Projectile {
        Projectile {
            id,
            pos: Vec2::new(x, y),
            vel: Vec2::new(0.0, -7.0),
            size: Vec2::new(9.0, 54.0),
        }
    }

    fn player_box() -> Aabb {
        Aabb::from_center(Vec2::new(800.0, 400.0), Vec2::splat(32.0))
    }

    #[test]
    fn test_hit_is_removed_and_reported() {
        let mut list = vec![projectile(1, 800.0, 420.0), projectile(2, 100.0, 420.0)];
        let report = check(&mut list, &player_box());
        assert!(report.any_hit());
        assert_eq!(report.hits.len(), 1);
        assert_eq!(report.hits[0].id, 1);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, 2);
    }

    #[test]
    fn test_multiple_hits_all_reported() {
        let mut list = vec![
            projectile(1, 795.0, 400.0),
            projectile(2, 805.0, 410.0),
            projectile(3, 810.0, 380.0),
        ];
        let report = check(&mut list, &player_box());
        assert_eq!(report.hits.len(), 3);
        assert!(list.is_empty());
    }

    #[test]
    fn test_near_miss() {
        // Projectile bottom edge exactly touching the player top
        let mut list = vec![projectile(1, 800.0, 416.0 + 27.0)];
        let report = check(&mut list, &player_box());
        assert!(!report.any_hit());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_cull_off_screen() {
        let mut list = vec![projectile(1, 100.0, -30.0), projectile(2, 100.0, 10.0)];
        let report = check(&mut list, &player_box());
        assert_eq!(report.culled, 1);
        assert!(!report.any_hit());
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, 2);
    }

    #[test]
    fn test_hit_below_screen_counted_once() {
        // Player far below the level with a projectile overlapping it off screen
        let player = Aabb::from_center(Vec2::new(100.0, -80.0), Vec2::splat(32.0));
        let mut list = vec![projectile(1, 100.0, -60.0)];
        let report = check(&mut list, &player);
        assert_eq!(report.hits.len(), 1);
        assert_eq!(report.culled, 0);
        assert!(list.is_empty());
    }
}
