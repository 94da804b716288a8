use phys_bridge::bodies::{DefaultMotionState, MotionState, RigidBody, SoftBody};
use phys_bridge::math::{Transform, Vector3};
use phys_bridge::shapes::Sphere;
use phys_bridge::{Body, BridgeConfig, CollisionObject, NormalMerge, PrimitiveType};
use glam::{Mat4, Vec2, Vec3};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use approx::assert_relative_eq;

fn rigid_sphere_at(origin: Vector3) -> RigidBody {
    RigidBody::new(
        1.0,
        Some(Box::new(DefaultMotionState::new(Transform::from_origin(origin)))),
        Arc::new(Sphere::new(1.0)),
    )
    .expect("valid body")
}

fn flat_quad() -> SoftBody {
    let nodes = [
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(1.0, 1.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
    ];
    SoftBody::from_tri_mesh(&nodes, &[0, 1, 2, 0, 2, 3]).expect("valid mesh")
}

/// Two triangles meeting at a right angle; the shared edge uses separate
/// nodes at identical positions
fn folded_pair() -> SoftBody {
    let nodes = [
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    ];
    SoftBody::from_tri_mesh(&nodes, &[0, 1, 2, 3, 4, 5]).expect("valid mesh")
}

/// Three faces in the coordinate planes meeting at the origin, no nodes shared
fn corner_fan() -> SoftBody {
    let nodes = [
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(1.0, 0.0, 0.0),
    ];
    SoftBody::from_tri_mesh(&nodes, &[0, 1, 2, 3, 4, 5, 6, 7, 8]).expect("valid mesh")
}

#[derive(Debug)]
struct CountingMotionState {
    transform: Transform,
    drops: Arc<AtomicUsize>,
}

impl MotionState for CountingMotionState {
    fn get_world_transform(&self) -> Transform {
        self.transform
    }

    fn set_world_transform(&mut self, center_of_mass: Transform) {
        self.transform = center_of_mass;
    }
}

impl Drop for CountingMotionState {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_empty_object() {
    let object = CollisionObject::new();
    assert!(!object.is_rigid_body());
    assert!(!object.is_soft_body());
    assert!(!object.is_mesh_body());
    assert!(!object.is_primitive_body());
    assert!(object.body().is_none());
    assert_eq!(object.get_scale(), Vec3::ONE);
    assert_eq!(object.get_center_position(), Vec3::ZERO);
    assert_eq!(object.get_transform_matrix(), Mat4::IDENTITY);
}

#[test]
fn test_variant_queries() {
    let mut object = CollisionObject::new();
    object.set_rigid_body(rigid_sphere_at(Vector3::zero()));
    assert!(object.is_rigid_body());
    assert!(!object.is_soft_body());
    assert!(object.rigid_body().is_some());
    assert!(object.soft_body().is_none());

    object.set_soft_body(flat_quad());
    assert!(object.is_soft_body());
    assert!(!object.is_rigid_body());
    assert!(matches!(object.body(), Some(Body::Soft(_))));

    let taken = object.take_body();
    assert!(matches!(taken, Some(Body::Soft(_))));
    assert!(!object.is_soft_body());
}

#[test]
fn test_mesh_and_primitive_flags_are_independent() {
    let mut object = CollisionObject::new();

    object.set_primitive_type(PrimitiveType::Sphere);
    assert!(object.is_primitive_body());
    assert!(!object.is_mesh_body());

    object.set_indices(vec![0, 1, 2]);
    assert!(object.is_primitive_body());
    assert!(object.is_mesh_body());

    object.set_primitive_type(PrimitiveType::None);
    assert!(!object.is_primitive_body());
    assert!(object.is_mesh_body());
}

#[test]
fn test_center_position() {
    let mut object = CollisionObject::new();
    object.set_rigid_body(rigid_sphere_at(Vector3::new(4.0, -2.0, 1.0)));
    assert_eq!(object.get_center_position(), Vec3::new(4.0, -2.0, 1.0));

    object.set_soft_body(flat_quad());
    assert_eq!(object.get_center_position(), Vec3::new(0.5, 0.5, 0.0));
}

#[test]
fn test_transform_matrix_applies_scale() {
    let mut object = CollisionObject::new();
    object.set_rigid_body(rigid_sphere_at(Vector3::zero()));
    object.set_scale(Vec3::new(2.0, 1.0, 1.0));
    assert_eq!(object.get_transform_matrix(), Mat4::from_scale(Vec3::new(2.0, 1.0, 1.0)));

    let mut moved = CollisionObject::new();
    moved.set_rigid_body(rigid_sphere_at(Vector3::new(1.0, 2.0, 3.0)));
    let unscaled = moved.get_transform_matrix();
    moved.set_scale(Vec3::new(2.0, 3.0, 4.0));
    let scaled = moved.get_transform_matrix();

    assert_eq!(scaled.w_axis, unscaled.w_axis);
    assert_eq!(scaled.w_axis, glam::Vec4::new(1.0, 2.0, 3.0, 1.0));
    assert_eq!(scaled.x_axis.x, 2.0);
    assert_eq!(scaled.z_axis.z, 4.0);
}

#[test]
fn test_transform_matrix_reads_motion_state() {
    let mut body = rigid_sphere_at(Vector3::zero());
    body.get_motion_state_mut()
        .expect("has a motion state")
        .set_world_transform(Transform::from_origin(Vector3::new(0.0, 7.0, 0.0)));

    let mut object = CollisionObject::new();
    object.set_rigid_body(body);

    // Motion state wins over the center-of-mass transform for rendering
    let matrix = object.get_transform_matrix();
    assert_eq!(matrix.w_axis.y, 7.0);
    assert_eq!(object.get_center_position(), Vec3::ZERO);
}

#[test]
fn test_update_skips_rigid_bodies() {
    let mut object = CollisionObject::new();
    object.set_rigid_body(rigid_sphere_at(Vector3::zero()));
    object.set_positions(vec![Vec3::X]);
    object.update();
    assert_eq!(object.get_positions(), &[Vec3::X]);
    assert!(object.get_normals().is_empty());
}

#[test]
fn test_update_rebuilds_unindexed_positions() {
    let mut object = CollisionObject::new();
    object.set_soft_body(flat_quad());
    object.set_tex_coords(vec![Vec2::ZERO; 6]);
    object.update();

    let positions = object.get_positions();
    assert_eq!(positions.len(), 3 * 2);
    assert_eq!(positions[0], Vec3::new(0.0, 0.0, 0.0));
    assert_eq!(positions[2], Vec3::new(1.0, 1.0, 0.0));
    assert_eq!(positions[3], Vec3::new(0.0, 0.0, 0.0));
    assert_eq!(positions[5], Vec3::new(0.0, 1.0, 0.0));

    // Every corner of a flat quad gets the negated face normal
    assert_eq!(object.get_normals().len(), 6);
    for normal in object.get_normals() {
        assert_eq!(*normal, Vec3::new(0.0, 0.0, -1.0));
    }

    // Left alone
    assert_eq!(object.get_tex_coords().len(), 6);
    assert!(object.get_indices().is_empty());
}

#[test]
fn test_update_merges_coincident_positions() {
    let mut object = CollisionObject::new();
    object.set_soft_body(folded_pair());
    object.update();

    let normals = object.get_normals();
    // Corner at the origin is shared by both faces through equal positions
    assert_relative_eq!(normals[0].x, -0.5);
    assert_relative_eq!(normals[0].y, 0.0);
    assert_relative_eq!(normals[0].z, -0.5);
    assert_eq!(normals[3], normals[0]);

    // Corners owned by one face keep that face's normal
    assert_eq!(normals[1], Vec3::new(0.0, 0.0, -1.0));
    assert_eq!(normals[5], Vec3::new(-1.0, 0.0, 0.0));
}

#[test]
fn test_update_merges_three_faces_at_a_corner() {
    let mut object = CollisionObject::new();
    object.set_soft_body(corner_fan());
    object.update();

    // Face normals are +Z, +X and +Y; the origin is on all three
    let normals = object.get_normals();
    assert_eq!(normals.len(), 9);
    for corner in [0, 3, 6] {
        assert_relative_eq!(normals[corner].x, -1.0 / 3.0);
        assert_relative_eq!(normals[corner].y, -1.0 / 3.0);
        assert_relative_eq!(normals[corner].z, -1.0 / 3.0);
    }

    // (1, 0, 0) lies on the +Z and +Y faces only
    assert_relative_eq!(normals[1].x, 0.0);
    assert_relative_eq!(normals[1].y, -0.5);
    assert_relative_eq!(normals[1].z, -0.5);
    assert_eq!(normals[8], normals[1]);

    // (0, 1, 0) lies on the +Z and +X faces only
    assert_relative_eq!(normals[2].x, -0.5);
    assert_relative_eq!(normals[2].y, 0.0);
    assert_relative_eq!(normals[2].z, -0.5);
    assert_eq!(normals[4], normals[2]);
}

#[test]
fn test_update_shared_node_policy() {
    let config = BridgeConfig {
        normal_merge: NormalMerge::SharedNode,
        negate_soft_normals: false,
        ..BridgeConfig::default()
    };
    let mut object = CollisionObject::with_config(config);
    object.set_soft_body(folded_pair());
    object.update();

    // Distinct nodes are not merged even though they coincide
    let normals = object.get_normals();
    assert_eq!(normals[0], Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(normals[3], Vec3::new(1.0, 0.0, 0.0));

    // On a shared-node mesh both policies agree
    let mut shared = CollisionObject::with_config(object.get_config().clone());
    shared.set_soft_body(flat_quad());
    shared.update();
    assert_eq!(shared.get_normals()[0], Vec3::new(0.0, 0.0, 1.0));
}

#[test]
fn test_update_tracks_deformation() {
    let mut object = CollisionObject::new();
    object.set_soft_body(flat_quad());
    object.update();

    let soft = object.soft_body_mut().expect("soft body attached");
    soft.set_node_position(2, Vector3::new(1.0, 1.0, 2.0)).expect("node exists");
    soft.update_normals();
    soft.update_bounds();
    object.update();

    assert_eq!(object.get_positions()[2], Vec3::new(1.0, 1.0, 2.0));
    assert_eq!(object.get_positions()[4], Vec3::new(1.0, 1.0, 2.0));
    assert_relative_eq!(object.get_center_position().z, 1.0);
    assert!(object.get_normals()[2] != Vec3::new(0.0, 0.0, -1.0));
}

#[test]
fn test_drop_releases_motion_state_once() {
    let drops = Arc::new(AtomicUsize::new(0));
    let state = CountingMotionState {
        transform: Transform::identity(),
        drops: drops.clone(),
    };
    let body = RigidBody::new(1.0, Some(Box::new(state)), Arc::new(Sphere::new(1.0)))
        .expect("valid body");

    let mut object = CollisionObject::new();
    object.set_rigid_body(body);
    assert_eq!(drops.load(Ordering::SeqCst), 0);

    drop(object);
    assert_eq!(drops.load(Ordering::SeqCst), 1);
}

#[test]
fn test_replacing_body_releases_previous() {
    let drops = Arc::new(AtomicUsize::new(0));
    let state = CountingMotionState {
        transform: Transform::identity(),
        drops: drops.clone(),
    };
    let body = RigidBody::new(1.0, Some(Box::new(state)), Arc::new(Sphere::new(1.0)))
        .expect("valid body");

    let mut object = CollisionObject::new();
    object.set_rigid_body(body);
    object.set_soft_body(flat_quad());
    assert_eq!(drops.load(Ordering::SeqCst), 1);
}
