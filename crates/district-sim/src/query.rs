//! World query collaborator: geometric questions the simulation asks but
//! does not answer itself.
//!
//! The simulation decides *when* to cast a hit-scan ray and what a hit means;
//! a `WorldQuery` decides *whether* the ray touches an entity. Hosts with real
//! collision geometry supply their own implementation.

use glam::Vec3;

use district_core::components::EnemyId;

/// A hit-scan ray. `direction` is unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub max_distance: f32,
}

/// A candidate the ray may hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub id: EnemyId,
    pub position: Vec3,
}

pub trait WorldQuery {
    /// Nearest candidate intersected by `ray` within its range, if any.
    fn nearest_hit(&self, ray: &Ray, candidates: &[Target]) -> Option<EnemyId>;

    /// Distance between two points.
    fn distance(&self, a: Vec3, b: Vec3) -> f32 {
        a.distance(b)
    }
}

/// Treats every candidate as a sphere of `radius` around its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphereQuery {
    pub radius: f32,
}

impl BoundingSphereQuery {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    /// Entry distance of `ray` into the sphere at `center`, if it enters
    /// within range. A ray starting inside the sphere enters at zero.
    pub fn entry_distance(&self, ray: &Ray, center: Vec3) -> Option<f32> {
        let to_center = center - ray.origin;
        let along = to_center.dot(ray.direction);
        let miss_sq = to_center.length_squared() - along * along;
        let radius_sq = self.radius * self.radius;
        if miss_sq > radius_sq {
            return None;
        }

        let half_chord = (radius_sq - miss_sq).sqrt();
        let exit = along + half_chord;
        if exit < 0.0 {
            return None; // Behind the origin
        }
        let entry = (along - half_chord).max(0.0);
        (entry <= ray.max_distance).then_some(entry)
    }
}

impl WorldQuery for BoundingSphereQuery {
    fn nearest_hit(&self, ray: &Ray, candidates: &[Target]) -> Option<EnemyId> {
        candidates
            .iter()
            .filter_map(|target| {
                self.entry_distance(ray, target.position)
                    .map(|distance| (distance, target.id))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, id)| id)
    }
}
