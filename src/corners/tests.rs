use super::*;
use crate::core::{CornerType, Space, SpaceMetadata};
use glam::DVec2;

/// Space ohne Spots mit vorgegebener (vorzeichenbehafteter) Krümmung.
fn space(index: usize, signed_curvature: f64) -> Space {
    Space {
        id: index as u64,
        index,
        position: DVec2::new(index as f64, 0.0),
        spots: Vec::new(),
        metadata: SpaceMetadata {
            curvature: signed_curvature.abs(),
            signed_curvature,
            heading: index as f64 * 0.1,
            ..SpaceMetadata::default()
        },
    }
}

fn spaces_from(curvatures: &[f64]) -> Vec<Space> {
    curvatures
        .iter()
        .enumerate()
        .map(|(i, &k)| space(i, k))
        .collect()
}

/// Deterministische Pseudo-Zufallskrümmungen (LCG), auch mit Vorzeichenwechsel.
fn pseudo_random_curvatures(count: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let unit = (state >> 11) as f64 / (1u64 << 53) as f64;
            (unit - 0.3) * 0.1
        })
        .collect()
}

// ── Abstand ──

#[test]
fn test_circular_distance_wraps() {
    assert_eq!(circular_distance(0, 9, 10), 1);
    assert_eq!(circular_distance(2, 7, 10), 5);
    assert_eq!(circular_distance(4, 4, 10), 0);
}

#[test]
fn test_no_two_corners_closer_than_spacing() {
    let config = CornerHeuristicConfig::default();
    for seed in 1..=20u64 {
        let spaces = spaces_from(&pseudo_random_curvatures(60, seed));
        for spacing in [0usize, 1, 3, 7, 15] {
            let corners = auto_suggest_corners(&spaces, 0.01, spacing, &config);
            for (i, a) in corners.iter().enumerate() {
                for b in &corners[i + 1..] {
                    let d = circular_distance(a.space_index, b.space_index, spaces.len());
                    assert!(
                        d >= spacing,
                        "Seed {seed}, Abstand {spacing}: Kurven {} und {} zu nah",
                        a.space_index,
                        b.space_index
                    );
                }
            }
        }
    }
}

#[test]
fn test_spacing_respects_wraparound() {
    let mut curvatures = vec![0.0; 20];
    curvatures[0] = 0.05;
    curvatures[19] = 0.06;
    let corners = auto_suggest_corners(
        &spaces_from(&curvatures),
        0.01,
        3,
        &CornerHeuristicConfig::default(),
    );
    assert_eq!(corners.len(), 1);
    assert_eq!(corners[0].space_index, 19);
}

// ── Auswahl ──

#[test]
fn test_threshold_is_strict() {
    let spaces = spaces_from(&[0.01, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.02]);
    let corners = auto_suggest_corners(&spaces, 0.01, 2, &CornerHeuristicConfig::default());
    assert_eq!(corners.len(), 1);
    assert_eq!(corners[0].space_index, 7);
}

#[test]
fn test_greedy_prefers_highest_curvature() {
    let spaces = spaces_from(&[0.0, 0.05, 0.06, 0.05, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    let corners = auto_suggest_corners(&spaces, 0.01, 3, &CornerHeuristicConfig::default());
    assert_eq!(corners.len(), 1);
    assert_eq!(corners[0].space_index, 2);
}

#[test]
fn test_corners_are_sorted_and_numbered() {
    let spaces = spaces_from(&pseudo_random_curvatures(80, 7));
    let corners = auto_suggest_corners(&spaces, 0.01, 4, &CornerHeuristicConfig::default());
    assert!(!corners.is_empty());
    for (i, corner) in corners.iter().enumerate() {
        assert_eq!(corner.id, i as u64);
        assert!(corner.is_auto_suggested);
        assert!((1..=6).contains(&corner.speed_limit));
        if i > 0 {
            assert!(corners[i - 1].space_index < corner.space_index);
        }
    }
}

#[test]
fn test_empty_spaces_yield_no_corners() {
    assert!(auto_suggest_corners(&[], 0.0, 1, &CornerHeuristicConfig::default()).is_empty());
}

// ── Abgeleitete Attribute ──

#[test]
fn test_derived_attributes() {
    let spaces = spaces_from(&[0.0, 0.0, 0.05, 0.0, 0.0, 0.0]);
    let corner = derive_corner(0, 2, &spaces, &CornerHeuristicConfig::default())
        .expect("Kurve erwartet");
    assert_eq!(corner.corner_type, CornerType::Slow);
    assert_eq!(corner.speed_limit, 2);
    assert!((corner.radius - 20.0).abs() < 1e-9);
    assert!((corner.entry_angle - 0.1_f64.to_degrees()).abs() < 1e-9);
    assert!((corner.exit_angle - 0.3_f64.to_degrees()).abs() < 1e-9);
    assert_eq!(corner.suggested_gear, 1);
    assert_eq!(corner.heat_penalty, 2);
}

#[test]
fn test_derive_corner_out_of_range_is_none() {
    let spaces = spaces_from(&[0.0, 0.02]);
    assert!(derive_corner(0, 5, &spaces, &CornerHeuristicConfig::default()).is_none());
}

#[test]
fn test_injected_config_changes_speed_limit() {
    let spaces = spaces_from(&[0.0, 0.0, 0.05, 0.0, 0.0, 0.0]);
    let config = CornerHeuristicConfig {
        slow_speed: SpeedFormula {
            base: 6.0,
            slope: 0.0,
            min: 1,
        },
        ..CornerHeuristicConfig::default()
    };
    let corners = auto_suggest_corners(&spaces, 0.01, 2, &config);
    assert_eq!(corners[0].speed_limit, 6);
}

// ── Innenseite ──

#[test]
fn test_inner_side_follows_turn_direction() {
    let left = spaces_from(&[0.02; 12]);
    let right = spaces_from(&[-0.02; 12]);
    let config = CornerHeuristicConfig::default();

    let left_corners = auto_suggest_corners(&left, 0.01, 4, &config);
    let right_corners = auto_suggest_corners(&right, 0.01, 4, &config);
    assert_eq!(left_corners.len(), 3);
    assert!(left_corners.iter().all(|c| c.inner_side == InnerSide::Left));
    assert!(right_corners.iter().all(|c| c.inner_side == InnerSide::Right));
}

#[test]
fn test_inner_side_uses_arc_to_next_corner() {
    // Kurve bei 1 (links), danach lange Rechtskurve bis zur Kurve bei 6
    let spaces = spaces_from(&[0.0, 0.03, -0.015, -0.015, -0.015, 0.0, -0.04, 0.0]);
    let corners = auto_suggest_corners(&spaces, 0.01, 3, &CornerHeuristicConfig::default());
    let indices: Vec<usize> = corners.iter().map(|c| c.space_index).collect();
    assert_eq!(indices, vec![1, 6]);
    // 0.03 − 3·0.015 < 0 → rechts innen
    assert_eq!(corners[0].inner_side, InnerSide::Right);
    // 6 → 1 über den Umlauf: −0.04 + 0 + 0 < 0
    assert_eq!(corners[1].inner_side, InnerSide::Right);
}

#[test]
fn test_insert_corner_replaces_slot() {
    let spaces = spaces_from(&pseudo_random_curvatures(40, 3));
    let config = CornerHeuristicConfig::default();
    let corners = auto_suggest_corners(&spaces, 0.01, 5, &config);
    let slot = corners[0].space_index;

    let mut manual = derive_corner(99, slot, &spaces, &config).expect("Kurve erwartet");
    manual.is_auto_suggested = false;
    manual.speed_limit = 1;

    let updated = insert_corner(&corners, manual, &spaces);
    assert_eq!(updated.len(), corners.len());
    let replaced = updated
        .iter()
        .find(|c| c.space_index == slot)
        .expect("Kurve erwartet");
    assert!(!replaced.is_auto_suggested);
    assert_eq!(replaced.speed_limit, 1);
    for (i, c) in updated.iter().enumerate() {
        assert_eq!(c.id, i as u64);
    }
}

#[test]
fn test_insert_corner_into_free_slot_sorts() {
    let spaces = spaces_from(&[0.0, 0.05, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    let config = CornerHeuristicConfig::default();
    let corners = auto_suggest_corners(&spaces, 0.01, 2, &config);
    let extra = derive_corner(7, 6, &spaces, &config).expect("Kurve erwartet");

    let updated = insert_corner(&corners, extra, &spaces);
    let indices: Vec<usize> = updated.iter().map(|c| c.space_index).collect();
    assert_eq!(indices, vec![1, 6]);
}
