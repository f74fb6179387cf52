use arbor_math::*;

#[test]
fn vector_components() {
    let v = Vector3::new(1.0, 2.0, 3.0);
    assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
    assert_eq!(Vector3::from_array([1.0, 2.0, 3.0]), v);
    assert_eq!(Vector4::default(), Vector4::new(0.0, 0.0, 0.0, 0.0));
}

#[test]
fn vector_display() {
    assert_eq!(Vector2::new(1.0, 2.5).to_string(), "Vector(1, 2.5)");
    assert_eq!(Vector4::new(0.0, -1.0, 2.0, 3.0).to_string(), "Vector(0, -1, 2, 3)");
}

#[test]
fn colors_convert_to_vectors() {
    let c = Color3::new(0.25, 0.5, 1.0);
    let v: Vector3 = c.into();
    assert_eq!(v, Vector3::new(0.25, 0.5, 1.0));
    assert_eq!(Color3::from(v), c);

    let c = Color4::new(0.1, 0.2, 0.3, 1.0);
    assert_eq!(Color4::from(Vector4::from(c)), c);
}

#[test]
fn quaternion_order() {
    let q = Quaternion::from_array([1.0, 2.0, 3.0, 4.0]);
    assert_eq!(q.vector, Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(q.scalar, 4.0);
    assert_eq!(q.to_array(), [1.0, 2.0, 3.0, 4.0]);
    assert_eq!(Quaternion::default(), Quaternion::IDENTITY);
    assert_eq!(q.to_string(), "Quaternion({1, 2, 3}, 4)");
}

#[test]
fn matrix_column_major() {
    let m = Matrix3::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    assert_eq!(m.columns[0], [1.0, 2.0, 3.0]);
    assert_eq!(m.get(1, 0), 4.0);
    assert_eq!(m.row(0), [1.0, 4.0, 7.0]);
    assert_eq!(m.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    assert_eq!(m.to_string(), "Matrix(1, 4, 7; 2, 5, 8; 3, 6, 9)");
}

#[test]
fn matrix_identity_default() {
    let m = Matrix4::default();
    for col in 0..4 {
        for row in 0..4 {
            let expected = if col == row { 1.0 } else { 0.0 };
            assert_eq!(m.get(col, row), expected);
        }
    }
    assert_eq!(Matrix4::from_array(m.to_array()), m);
}

#[test]
fn radians() {
    let r = Rad::from_degrees(180.0);
    assert!((r.0 - std::f32::consts::PI).abs() < 1e-6);
    assert!((r.to_degrees() - 180.0).abs() < 1e-4);
    assert_eq!(Rad(1.5).to_string(), "Rad(1.5)");
}
