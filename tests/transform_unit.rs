//! Property tests for the transform library.
//!
//! Each transform is checked against the invariants it must hold for
//! every input: shape preservation, value range and its defining rule.

use intensity_lab::image::{create_image, BrightnessGrid};
use intensity_lab::transform::{binary, gamma, logarithmic, negative, solarize, Transform};

/// Every brightness value once, in a 16x16 grid.
fn full_range() -> BrightnessGrid {
    BrightnessGrid::from_vec(16, 16, (0..=255).collect()).unwrap()
}

fn test_images() -> Vec<BrightnessGrid> {
    vec![
        full_range(),
        create_image(40, 20).unwrap(),
        create_image(13, 7).unwrap(),
        BrightnessGrid::new(5, 3).unwrap(),
        BrightnessGrid::filled(3, 5, 255).unwrap(),
        BrightnessGrid::filled(1, 1, 1).unwrap(),
    ]
}

// ==================== Shape ====================

#[test]
fn test_all_transforms_preserve_shape() {
    for img in test_images() {
        for t in Transform::standard_set(128, 2.2) {
            let out = t.apply(&img).unwrap();
            assert_eq!(out.shape(), img.shape(), "{} changed the shape", t.name());
            assert_eq!(out.len(), img.len());
        }
    }
}

#[test]
fn test_input_is_not_mutated() {
    let img = create_image(40, 20).unwrap();
    let copy = img.clone();
    for t in Transform::standard_set(50, 0.4) {
        let _ = t.apply(&img).unwrap();
    }
    assert_eq!(img, copy);
}

// ==================== Binary ====================

#[test]
fn test_binary_only_black_and_white() {
    for img in test_images() {
        for threshold in [0, 1, 127, 128, 254, 255] {
            let out = binary(&img, threshold);
            assert!(out.pixels().iter().all(|&v| v == 0 || v == 255));
        }
    }
}

#[test]
fn test_binary_threshold_255_is_black() {
    let out = binary(&full_range(), 255);
    assert!(out.pixels().iter().all(|&v| v == 0));
}

// ==================== Negative ====================

#[test]
fn test_negative_is_involution() {
    for img in test_images() {
        assert_eq!(negative(&negative(&img)), img);
    }
}

#[test]
fn test_negative_pixelwise() {
    let img = full_range();
    let out = negative(&img);
    for (a, b) in img.pixels().iter().zip(out.pixels()) {
        assert_eq!(u16::from(*a) + u16::from(*b), 255);
    }
}

// ==================== Logarithmic ====================

#[test]
fn test_logarithmic_all_zero_stays_zero() {
    for (w, h) in [(1, 1), (40, 20), (7, 3)] {
        let img = BrightnessGrid::new(w, h).unwrap();
        let out = logarithmic(&img);
        assert!(out.pixels().iter().all(|&v| v == 0));
    }
}

#[test]
fn test_logarithmic_is_monotonic_and_brightens() {
    let img = full_range();
    let out = logarithmic(&img);
    let px = out.pixels();
    for i in 1..px.len() {
        assert!(px[i] >= px[i - 1], "not monotonic at {}", i);
        assert!(px[i] >= img.pixels()[i], "darkened value {}", i);
    }
    assert_eq!(px[0], 0);
    assert_eq!(px[255], 255);
}

#[test]
fn test_logarithmic_on_test_image() {
    let img = create_image(40, 20).unwrap();
    let out = logarithmic(&img);
    // max is 200, so c = 255 / ln(201)
    assert_eq!(out.get(32, 2), 255); // bright 200
    assert_eq!(out.get(5, 2), 189); // dark 50
    assert_eq!(out.get(20, 2), 234); // mid 128
    assert_eq!(out.get(10, 5), 241); // stripe 150
    assert_eq!(out.get(0, 0), 0);
}

// ==================== Gamma ====================

#[test]
fn test_gamma_one_is_identity_within_rounding() {
    for img in test_images() {
        let out = gamma(&img, 1.0).unwrap();
        for (a, b) in img.pixels().iter().zip(out.pixels()) {
            assert!((i16::from(*a) - i16::from(*b)).abs() <= 1);
        }
    }
}

#[test]
fn test_gamma_fixes_endpoints() {
    for g in [0.1, 0.45, 1.0, 2.2, 10.0] {
        let out = gamma(&full_range(), g).unwrap();
        assert_eq!(out.pixels()[0], 0);
        assert_eq!(out.pixels()[255], 255);
    }
}

#[test]
fn test_gamma_direction() {
    let img = full_range();
    let brighter = gamma(&img, 2.2).unwrap();
    let darker = gamma(&img, 0.5).unwrap();
    for i in 0..256 {
        assert!(brighter.pixels()[i] >= img.pixels()[i]);
        assert!(darker.pixels()[i] <= img.pixels()[i]);
    }
}

#[test]
fn test_gamma_rejects_non_positive() {
    assert!(gamma(&full_range(), 0.0).is_err());
    assert!(gamma(&full_range(), -2.2).is_err());
}

// ==================== Solarize ====================

#[test]
fn test_solarize_rule() {
    let img = full_range();
    for t in [0, 64, 128, 200, 255] {
        let out = solarize(&img, t);
        for (&v, &o) in img.pixels().iter().zip(out.pixels()) {
            if v <= t {
                assert_eq!(o, v);
            } else {
                assert_eq!(o, 255 - v);
            }
        }
    }
}

#[test]
fn test_solarize_never_exceeds_threshold_mirror() {
    // Above the threshold values fold down, so the output peaks at the threshold
    let out = solarize(&full_range(), 128);
    assert_eq!(out.max(), 128);
}
