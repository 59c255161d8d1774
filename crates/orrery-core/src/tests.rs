use crate::coordinates::*;
use nalgebra::Vector3;

#[test]
fn test_cartesian_to_spherical_roundtrip() {
    let positions = [
        CartesianPosition::new(1.0, 0.0, 0.0),
        CartesianPosition::new(0.0, 1.0, 0.0),
        CartesianPosition::new(0.0, 0.0, 1.0),
        CartesianPosition::new(1.0, 1.0, 1.0),
        CartesianPosition::new(35.0, 0.0, 0.0),
        CartesianPosition::new(-20.0, 5.2, -0.1),
    ];

    for pos in positions {
        let spherical = pos.to_spherical();
        let back = spherical.to_cartesian();

        let tolerance = pos.magnitude() * 1e-10; // Relative tolerance
        assert!((pos.x - back.x).abs() < tolerance, "x mismatch");
        assert!((pos.y - back.y).abs() < tolerance, "y mismatch");
        assert!((pos.z - back.z).abs() < tolerance, "z mismatch");
    }
}

#[test]
fn test_origin_to_spherical() {
    let origin = CartesianPosition::new(0.0, 0.0, 0.0);
    let spherical = origin.to_spherical();
    assert_eq!(spherical.r, 0.0);
    assert_eq!(spherical.phi, 0.0);
}

#[test]
fn test_vector_interop() {
    let v = Vector3::new(3.0, -4.0, 12.0);
    let pos = CartesianPosition::from_vector(v);
    assert_eq!(pos.to_vector(), v);
    assert!((pos.magnitude() - 13.0).abs() < 1e-12);
}
