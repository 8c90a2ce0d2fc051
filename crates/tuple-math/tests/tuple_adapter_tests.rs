// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Every input shape (vector, array, tuple, slice, custom struct) and every
//! output sink (array, vector, tuple, slice, callback) reaches the same
//! canonical operation.

#![allow(missing_docs)]
use tuple_math::{Components, ComponentsMut, TupleError, Vec2, Vec3, Vec4};

/// A caller-owned vector type that is not part of the crate.
#[derive(Debug, Default, PartialEq)]
struct Pixel {
    u: f32,
    v: f32,
}

impl Components<2> for Pixel {
    fn components(&self) -> [f32; 2] {
        [self.u, self.v]
    }
}

impl ComponentsMut<2> for Pixel {
    fn set_components(&mut self, [u, v]: [f32; 2]) {
        self.u = u;
        self.v = v;
    }
}

#[test]
fn every_input_shape_reaches_the_same_add() {
    let expected = [4.0, 6.0];
    let b = Vec2::new(3.0, 4.0);

    assert_eq!(Vec2::new(1.0, 2.0).add(b).to_array(), expected);
    assert_eq!(Vec2::from([1.0, 2.0]).add(b).to_array(), expected);
    assert_eq!(Vec2::from((1.0, 2.0)).add(b).to_array(), expected);
    assert_eq!(
        Vec2::from_components(&Pixel { u: 1.0, v: 2.0 }).add(b).to_array(),
        expected
    );
    assert_eq!(
        Vec2::from_slice(&[1.0, 2.0, 99.0]).unwrap().add(b).to_array(),
        expected
    );
}

#[test]
fn every_sink_receives_the_same_result() {
    let r = Vec2::new(4.0, 6.0);

    let mut arr = [0.0_f32; 2];
    r.write_to(&mut arr);
    assert_eq!(arr, [4.0, 6.0]);

    let mut pair = (0.0_f32, 0.0_f32);
    r.write_to(&mut pair);
    assert_eq!(pair, (4.0, 6.0));

    let mut pixel = Pixel::default();
    r.write_to(&mut pixel);
    assert_eq!(pixel, Pixel { u: 4.0, v: 6.0 });

    let mut vec = Vec2::ZERO;
    r.write_to(&mut vec);
    assert_eq!(vec, r);

    let mut buf = [9.0_f32; 3];
    r.write_to_slice(&mut buf).unwrap();
    assert_eq!(buf, [4.0, 6.0, 9.0]);

    let sum = r.map_into(|x, y| x + y);
    assert_eq!(sum, 10.0);

    let as_tuple: (f32, f32) = r.into();
    let as_array: [f32; 2] = r.into();
    assert_eq!(as_tuple, (4.0, 6.0));
    assert_eq!(as_array, [4.0, 6.0]);
}

#[test]
fn short_slices_are_rejected() {
    assert_eq!(
        Vec2::from_slice(&[1.0]),
        Err(TupleError::SliceTooShort {
            expected: 2,
            actual: 1
        })
    );
    assert_eq!(
        Vec3::from_slice(&[1.0, 2.0]),
        Err(TupleError::SliceTooShort {
            expected: 3,
            actual: 2
        })
    );
    let mut buf = [0.0_f32; 3];
    assert_eq!(
        Vec4::ONE.write_to_slice(&mut buf),
        Err(TupleError::SliceTooShort {
            expected: 4,
            actual: 3
        })
    );
    assert_eq!(buf, [0.0; 3], "failed write leaves the buffer untouched");
}

#[test]
fn flat_buffers_cast_to_vectors() {
    let flat = [1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0];
    let v2 = Vec2::cast_slice(&flat).unwrap();
    assert_eq!(v2, &[
        Vec2::new(1.0, 2.0),
        Vec2::new(3.0, 4.0),
        Vec2::new(5.0, 6.0)
    ]);
    let v3 = Vec3::cast_slice(&flat).unwrap();
    assert_eq!(v3, &[Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)]);

    assert!(matches!(Vec4::cast_slice(&flat), Err(TupleError::Cast(_))));
}

#[test]
fn cast_errors_chain_to_the_bytemuck_source() {
    use std::error::Error as _;

    let flat = [1.0_f32, 2.0, 3.0];
    let err = Vec2::cast_slice(&flat).unwrap_err();
    assert_eq!(
        err,
        TupleError::Cast(bytemuck::PodCastError::OutputSliceWouldHaveSlop)
    );
    assert!(err.to_string().starts_with("cast error:"), "{err}");
    let source = err.source().expect("cast errors carry their cause");
    assert!(source.is::<bytemuck::PodCastError>());

    let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(err);
    assert!(boxed.source().is_some());
}

#[test]
fn mutable_cast_updates_the_flat_buffer() {
    let mut flat = [3.0_f32, 4.0, 0.0, 0.0, 0.0, 5.0];
    for v in Vec2::cast_slice_mut(&mut flat).unwrap() {
        *v = v.normalize();
    }
    assert_eq!(flat[2..4], [0.0, 0.0]);
    assert_eq!(flat[4..6], [0.0, 1.0]);
    assert!((flat[0] - 0.6).abs() < 1e-6);
    assert!((flat[1] - 0.8).abs() < 1e-6);
}

#[test]
fn three_and_four_component_adapters() {
    let v3 = Vec3::from_components(&(1.0_f32, 2.0_f32, 3.0_f32));
    let mut out3 = (0.0_f32, 0.0_f32, 0.0_f32);
    v3.scale(2.0).write_to(&mut out3);
    assert_eq!(out3, (2.0, 4.0, 6.0));
    assert_eq!(v3.map_into(|x, y, z| x * y * z), 6.0);

    let v4 = Vec4::from_components(&[1.0_f32, 2.0, 3.0, 4.0]);
    let mut out4 = [0.0_f32; 4];
    v4.add(Vec4::ONE).write_to(&mut out4);
    assert_eq!(out4, [2.0, 3.0, 4.0, 5.0]);
    assert_eq!(Vec4::from((1.0, 2.0, 3.0, 4.0)), v4);
    assert_eq!(v4.map_into(|x, y, z, w| x + y + z + w), 10.0);
}
