use phys_bridge::convert::{
    from_physics_quaternion, from_physics_transform, from_physics_vector3, to_physics_quaternion,
    to_physics_transform, to_physics_vector3,
};
use phys_bridge::math::{Quaternion, Transform, Vector3};
use phys_bridge::{ToPhysics, ToRender};
use glam::{Mat4, Quat, Vec3};
use rand::Rng;
use std::f32::consts::PI;
use approx::assert_relative_eq;

#[test]
fn test_vector_round_trip_is_exact() {
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let v = Vec3::new(
            rng.gen_range(-1.0e6..1.0e6),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0e-6..1.0e-6),
        );
        assert_eq!(from_physics_vector3(to_physics_vector3(v)), v);

        let p = Vector3::new(v.z, v.x, v.y);
        assert_eq!(to_physics_vector3(from_physics_vector3(p)), p);
    }

    // Extremes survive as well
    let extremes = Vec3::new(f32::MAX, f32::MIN_POSITIVE, -0.0);
    assert_eq!(from_physics_vector3(to_physics_vector3(extremes)), extremes);
}

#[test]
fn test_quaternion_round_trip_is_exact() {
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        // Not normalized on purpose; conversion must not touch the components
        let q = Quat::from_xyzw(
            rng.gen_range(-2.0..2.0),
            rng.gen_range(-2.0..2.0),
            rng.gen_range(-2.0..2.0),
            rng.gen_range(-2.0..2.0),
        );
        assert_eq!(from_physics_quaternion(to_physics_quaternion(q)), q);
    }
}

#[test]
fn test_quaternion_component_order() {
    let q = to_physics_quaternion(Quat::from_xyzw(0.1, 0.2, 0.3, 0.9));
    assert_eq!(q, Quaternion::new(0.9, 0.1, 0.2, 0.3));

    let back = from_physics_quaternion(Quaternion::identity());
    assert_eq!(back, Quat::IDENTITY);
}

#[test]
fn test_quaternion_rotation_agrees() {
    let render = Quat::from_axis_angle(Vec3::new(1.0, 2.0, -0.5).normalize(), 0.7);
    let physics = to_physics_quaternion(render);

    let v = Vec3::new(0.3, -1.2, 4.0);
    let expected = render * v;
    let actual = physics.rotate_vector(to_physics_vector3(v));
    assert_relative_eq!(actual.x, expected.x, epsilon = 1e-5);
    assert_relative_eq!(actual.y, expected.y, epsilon = 1e-5);
    assert_relative_eq!(actual.z, expected.z, epsilon = 1e-5);
}

#[test]
fn test_transform_round_trip() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let axis = Vec3::new(rng.gen_range(-1.0..1.0), 1.0, rng.gen_range(-1.0..1.0)).normalize();
        let m = Mat4::from_rotation_translation(
            Quat::from_axis_angle(axis, rng.gen_range(-PI..PI)),
            Vec3::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0), 0.0),
        );
        assert_eq!(from_physics_transform(&to_physics_transform(&m)), m);
    }
}

#[test]
fn test_transform_maps_points_alike() {
    let m = Mat4::from_rotation_translation(Quat::from_rotation_z(PI / 2.0), Vec3::new(1.0, 2.0, 3.0));
    let t = to_physics_transform(&m);

    assert_eq!(t.origin, Vector3::new(1.0, 2.0, 3.0));

    let p = Vec3::new(1.0, 0.0, 0.0);
    let expected = m.transform_point3(p);
    let actual = t.transform_point(to_physics_vector3(p));
    assert_relative_eq!(actual.x, expected.x, epsilon = 1e-6);
    assert_relative_eq!(actual.y, expected.y, epsilon = 1e-6);
    assert_relative_eq!(actual.z, expected.z, epsilon = 1e-6);

    let identity = from_physics_transform(&Transform::identity());
    assert_eq!(identity, Mat4::IDENTITY);
}

#[test]
fn test_extension_traits() {
    let v = Vec3::new(1.0, -2.0, 3.5);
    assert_eq!(v.to_physics().to_render(), v);

    let q = Quat::from_rotation_y(1.0);
    assert_eq!(q.to_physics().to_render(), q);

    let m = Mat4::from_translation(Vec3::new(4.0, 5.0, 6.0));
    assert_eq!(m.to_physics().origin, Vector3::new(4.0, 5.0, 6.0));
    assert_eq!(m.to_physics().to_render(), m);
}
