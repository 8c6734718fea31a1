//! ShapeDeformer: sums mode displacements into a deformed sphere mesh.

mod generate;
mod operations;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::{DeformationMode, ModeKind};
    use crate::preset::Preset;
    use spheroid_common::MeshError;

    fn radius(p: [f64; 3]) -> f64 {
        (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt()
    }

    fn flat(base_radius: f64) -> ShapeDeformer {
        let mut d = ShapeDeformer::new(base_radius);
        d.zero_all();
        d
    }

    #[test]
    fn default_mode_set_matches_stock_layout() {
        let d = ShapeDeformer::default();
        let names: Vec<&str> = d.modes().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            ["Lobes", "Waves", "Stripes", "Pinch", "Ripple", "Twisted", "Noise"]
        );
        assert_eq!(
            d.modes()[0].kind,
            ModeKind::Harmonic {
                theta_freq: 3.0,
                phi_freq: 2.0
            }
        );
        assert_eq!(
            d.modes()[1].kind,
            ModeKind::Harmonic {
                theta_freq: 5.0,
                phi_freq: 3.0
            }
        );
        assert_eq!(
            d.modes()[2].kind,
            ModeKind::Harmonic {
                theta_freq: 7.0,
                phi_freq: 1.0
            }
        );
        assert_eq!(
            d.modes()[3].kind,
            ModeKind::CosineHarmonic {
                theta_freq: 4.0,
                phi_freq: 4.0
            }
        );
        assert_eq!(
            d.modes()[4].kind,
            ModeKind::Harmonic {
                theta_freq: 0.0,
                phi_freq: 3.0
            }
        );
        assert_eq!(d.modes()[5].kind, ModeKind::MixedHarmonic);
        assert_eq!(d.modes()[6].kind, ModeKind::Noise { scale: 1.0 });
        assert_eq!(d.modes()[6].default_amplitude, 0.0);
        assert_eq!(d.base_radius(), DEFAULT_BASE_RADIUS);
    }

    #[test]
    fn zero_amplitudes_produce_a_sphere() {
        let d = flat(150.0);
        let mesh = d.generate_mesh(16, 8).unwrap();
        for p in mesh.points() {
            assert!((radius(*p) - 150.0).abs() < 1e-9);
        }
    }

    #[test]
    fn small_grid_sphere_scenario() {
        let d = flat(200.0);
        let mesh = d.generate_mesh(4, 2).unwrap();
        assert_eq!(mesh.rows(), 3);
        assert_eq!(mesh.cols(), 5);
        assert_eq!(mesh.len(), 15);
        for p in mesh.points() {
            let r2 = p[0] * p[0] + p[1] * p[1] + p[2] * p[2];
            assert!((r2 - 200.0 * 200.0).abs() < 1e-6);
        }
    }

    #[test]
    fn poles_repeat_across_row_and_seam_is_unwelded() {
        let d = ShapeDeformer::default();
        let mesh = d.generate_mesh(6, 4).unwrap();
        let north = mesh.point(0, 0).unwrap();
        for i in 1..mesh.cols() {
            let p = mesh.point(0, i).unwrap();
            for k in 0..3 {
                assert!((p[k] - north[k]).abs() < 1e-9);
            }
        }
        // Seam column is computed separately at theta = 2π.
        let first = mesh.point(2, 0).unwrap();
        let last = mesh.point(2, 6).unwrap();
        for k in 0..3 {
            assert!((first[k] - last[k]).abs() < 1e-6);
        }
    }

    #[test]
    fn mesh_reflects_amplitude() {
        let mut d = ShapeDeformer::empty(100.0);
        d.add_mode(DeformationMode::harmonic("H", "", 1.0, 1.0, 10.0));
        let p = d.surface_point(std::f64::consts::FRAC_PI_2, std::f64::consts::FRAC_PI_2);
        assert!((radius(p) - 110.0).abs() < 1e-9);
    }

    #[test]
    fn generate_mesh_rejects_zero_resolution() {
        let d = ShapeDeformer::default();
        assert_eq!(
            d.generate_mesh(0, 3),
            Err(MeshError::InvalidResolution { theta: 0, phi: 3 })
        );
        assert!(d.generate_mesh(3, 0).is_err());
    }

    #[test]
    fn generate_mesh_into_reuses_buffer() {
        let d = ShapeDeformer::default();
        let mut mesh = d.generate_mesh(8, 8).unwrap();
        d.generate_mesh_into(&mut mesh, 4, 2).unwrap();
        assert_eq!(mesh, d.generate_mesh(4, 2).unwrap());
    }

    #[test]
    fn generation_is_deterministic() {
        let d = ShapeDeformer::default();
        assert_eq!(d.generate_mesh(12, 6).unwrap(), d.generate_mesh(12, 6).unwrap());
    }

    #[test]
    fn add_and_remove_shift_indices() {
        let mut d = ShapeDeformer::default();
        let idx = d.add_mode(DeformationMode::noise("Extra", "", 2.0, 1.0));
        assert_eq!(idx, 7);
        assert!(d.remove_mode(0));
        assert_eq!(d.mode(0).unwrap().name, "Waves");
        assert_eq!(d.mode(6).unwrap().name, "Extra");
        assert!(!d.remove_mode(7));
        assert_eq!(d.mode_count(), 7);
    }

    #[test]
    fn set_amplitude_out_of_range_is_noop() {
        let mut d = ShapeDeformer::default();
        let before = d.amplitudes();
        assert!(!d.set_amplitude(99, 5.0));
        assert_eq!(d.amplitudes(), before);
        assert!(d.set_amplitude(3, 75.0));
        // No internal clamping.
        assert_eq!(d.amplitude(3), Some(75.0));
    }

    #[test]
    fn apply_preset_then_current_preset() {
        let mut d = ShapeDeformer::default();
        d.set_amplitude(5, 33.0);
        d.set_amplitude(6, 44.0);
        d.apply_preset(&Preset::new("short", vec![1.0, 2.0, 3.0, 4.0, 5.0]));
        let current = d.current_preset("snapshot");
        assert_eq!(current.name, "snapshot");
        assert_eq!(&current.amplitudes[..5], &[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(current.amplitudes[5], 33.0);
        assert_eq!(current.amplitudes[6], 44.0);
    }

    #[test]
    fn apply_longer_preset_ignores_extra_values() {
        let mut d = ShapeDeformer::empty(1.0);
        d.add_mode(DeformationMode::mixed_harmonic("M", "", 0.0));
        d.apply_preset(&Preset::new("long", vec![9.0, 8.0, 7.0]));
        assert_eq!(d.amplitudes(), vec![9.0]);
    }

    #[test]
    fn reset_all_and_zero_all() {
        let mut d = ShapeDeformer::default();
        let defaults: Vec<f64> = d.modes().iter().map(|m| m.default_amplitude).collect();
        for i in 0..d.mode_count() {
            d.set_amplitude(i, 42.0);
        }
        d.reset_all();
        assert_eq!(d.amplitudes(), defaults);
        d.zero_all();
        assert!(d.amplitudes().iter().all(|&a| a == 0.0));
    }

    #[test]
    fn mode_info_in_index_order() {
        let d = ShapeDeformer::default();
        let info = d.mode_info();
        assert_eq!(info.len(), 7);
        assert_eq!(info[3].name, "Pinch");
        assert_eq!(info[0].amplitude, info[0].default_amplitude);
    }
}
