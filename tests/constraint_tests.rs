use phys_bridge::bodies::{DefaultMotionState, RigidBody, SoftBody};
use phys_bridge::constraints::Point2PointConstraint;
use phys_bridge::error::PhysicsError;
use phys_bridge::geometry::Ray;
use phys_bridge::math::{Transform, Vector3};
use phys_bridge::shapes::Sphere;
use phys_bridge::{CollisionObject, Constraint};
use glam::Vec3;
use std::sync::Arc;

fn rigid_object_at(origin: Vector3) -> CollisionObject {
    let body = RigidBody::new(
        1.0,
        Some(Box::new(DefaultMotionState::new(Transform::from_origin(origin)))),
        Arc::new(Sphere::new(1.0)),
    )
    .expect("valid body");
    let mut object = CollisionObject::new();
    object.set_rigid_body(body);
    object
}

#[test]
fn test_new_constraint_is_unset() {
    let constraint = Constraint::new();
    assert!(!constraint.is_active());
    assert_eq!(constraint.get_distance(), f32::MAX);
    assert_eq!(constraint.get_position(), Vec3::splat(f32::MAX));
    assert!(constraint.point_to_point().is_none());
}

#[test]
fn test_update_without_handle_fails() {
    let mut constraint = Constraint::new();
    let ray = Ray::new(Vec3::ZERO, Vec3::Z);
    let result = constraint.update(&ray);
    assert!(matches!(result, Err(PhysicsError::ResourceNotFound(_))));
}

#[test]
fn test_grab_and_drag() {
    let object = rigid_object_at(Vector3::zero());
    let pick = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -2.0));

    let mut constraint = Constraint::new();
    constraint
        .grab(&object, Vec3::new(0.0, 0.0, 1.0), &pick)
        .expect("rigid body can be grabbed");

    assert!(constraint.is_active());
    assert_eq!(constraint.get_distance(), 9.0);
    assert_eq!(constraint.get_position(), Vec3::new(0.0, 0.0, 1.0));

    let p2p = constraint.point_to_point().expect("attached");
    assert_eq!(p2p.get_pivot_in_a(), Vector3::new(0.0, 0.0, 1.0));

    // Direction length does not matter, only the stored distance
    let drag = Ray::new(Vec3::new(1.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -5.0));
    constraint.update(&drag).expect("attached");

    assert_eq!(constraint.get_position(), Vec3::new(1.0, 0.0, 1.0));
    let p2p = constraint.point_to_point().expect("attached");
    assert_eq!(p2p.get_pivot_in_b(), Vector3::new(1.0, 0.0, 1.0));
}

#[test]
fn test_grab_pivot_is_local_to_body() {
    let object = rigid_object_at(Vector3::new(5.0, 0.0, 0.0));
    let pick = Ray::new(Vec3::new(5.0, 10.0, 0.0), Vec3::NEG_Y);

    let mut constraint = Constraint::new();
    constraint
        .grab(&object, Vec3::new(5.0, 1.0, 0.0), &pick)
        .expect("rigid body can be grabbed");

    let p2p = constraint.point_to_point().expect("attached");
    assert_eq!(p2p.get_pivot_in_a(), Vector3::new(0.0, 1.0, 0.0));
    assert_eq!(constraint.get_distance(), 9.0);
}

#[test]
fn test_grab_rejects_non_rigid_objects() {
    let pick = Ray::new(Vec3::ZERO, Vec3::Z);
    let mut constraint = Constraint::new();

    let empty = CollisionObject::new();
    let result = constraint.grab(&empty, Vec3::Z, &pick);
    assert!(matches!(result, Err(PhysicsError::InvalidParameter(_))));

    let mut soft = CollisionObject::new();
    soft.set_soft_body(SoftBody::new(&[Vector3::zero()]));
    assert!(constraint.grab(&soft, Vec3::Z, &pick).is_err());
    assert!(!constraint.is_active());
}

#[test]
fn test_grab_rejects_static_bodies() {
    let body = RigidBody::new(
        0.0,
        Some(Box::new(DefaultMotionState::new(Transform::identity()))),
        Arc::new(Sphere::new(1.0)),
    )
    .expect("valid body");
    let mut object = CollisionObject::new();
    object.set_rigid_body(body);

    let pick = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
    let mut constraint = Constraint::new();
    let result = constraint.grab(&object, Vec3::new(0.0, 0.0, 1.0), &pick);
    assert!(matches!(result, Err(PhysicsError::InvalidParameter(_))));
    assert!(!constraint.is_active());
    assert_eq!(constraint.get_distance(), f32::MAX);
}

#[test]
fn test_attach_and_set_distance() {
    let mut constraint = Constraint::new();
    let p2p = Point2PointConstraint::with_pivots(Vector3::zero(), Vector3::new(0.0, 2.0, 0.0));
    constraint.attach(p2p, 2.0);
    assert_eq!(constraint.get_position(), Vec3::new(0.0, 2.0, 0.0));

    constraint.set_distance(4.0);
    constraint.update(&Ray::new(Vec3::ZERO, Vec3::Y)).expect("attached");
    assert_eq!(constraint.get_position(), Vec3::new(0.0, 4.0, 0.0));

    let pivot = constraint
        .point_to_point_mut()
        .expect("attached")
        .get_pivot_in_b();
    assert_eq!(pivot, Vector3::new(0.0, 4.0, 0.0));
}

#[test]
fn test_reset() {
    let object = rigid_object_at(Vector3::zero());
    let pick = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);

    let mut constraint = Constraint::new();
    constraint
        .grab(&object, Vec3::new(0.0, 0.0, 1.0), &pick)
        .expect("rigid body can be grabbed");
    constraint.reset();

    assert!(!constraint.is_active());
    assert_eq!(constraint.get_position(), Vec3::ZERO);
    assert_eq!(constraint.get_distance(), f32::MAX);
    assert!(constraint.update(&pick).is_err());
}

#[test]
fn test_ray_helpers() {
    let ray = Ray::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(0.0, 3.0, 0.0));
    assert_eq!(ray.point_at(2.0), Vec3::new(1.0, 7.0, 1.0));
    assert_eq!(ray.point_at_distance(2.0), Vec3::new(1.0, 3.0, 1.0));
    assert_eq!(ray.normalized_direction(), Vec3::Y);

    let degenerate = Ray::new(Vec3::ZERO, Vec3::ZERO);
    assert_eq!(degenerate.point_at_distance(5.0), Vec3::ZERO);
}
