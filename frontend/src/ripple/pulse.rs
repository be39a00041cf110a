use super::animation::Keyframes;
use super::grid::{CellCoord, GridDims};
use crate::config::RippleConfig;

/// Shape of the radiating pulse: how fast peak opacity falls off and duration grows with distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseShape {
    pub falloff: f64,
    pub duration_per_unit: f64,
    pub min_duration: f64,
}

impl Default for PulseShape {
    fn default() -> Self {
        Self { falloff: 0.1, duration_per_unit: 0.15, min_duration: 0.2 }
    }
}

impl From<&RippleConfig> for PulseShape {
    fn from(config: &RippleConfig) -> Self {
        Self {
            falloff: config.pulse_falloff,
            duration_per_unit: config.pulse_duration_per_unit,
            min_duration: config.pulse_min_duration,
        }
    }
}

/// Timing of one cell's pulse for a given click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    pub peak: f64,
    pub duration: f64,
}

impl Pulse {
    pub fn keyframes(&self) -> Keyframes {
        Keyframes::three(0.0, self.peak, 0.0)
    }
}

impl PulseShape {
    pub fn pulse_at(&self, distance: f64) -> Pulse {
        Pulse {
            peak: (1.0 - self.falloff * distance).max(0.0),
            duration: (self.duration_per_unit * distance).max(self.min_duration),
        }
    }

    pub fn pulse_for(&self, origin: CellCoord, cell: CellCoord) -> Pulse {
        self.pulse_at(origin.distance_to(cell))
    }
}

/// Every cell's pulse for one click, in arena order.
pub fn plan_ripple(dims: GridDims, origin: CellCoord, shape: &PulseShape) -> impl Iterator<Item = (usize, Pulse)> + '_ {
    dims.cells()
        .enumerate()
        .map(move |(index, cell)| (index, shape.pulse_for(origin, cell)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn click_at_corner_matches_known_cells() {
        let shape = PulseShape::default();
        let origin = CellCoord::new(0, 0);

        let at_origin = shape.pulse_for(origin, origin);
        assert!(close(at_origin.duration, 0.2));
        assert!(close(at_origin.peak, 1.0));

        let five_away = shape.pulse_for(origin, CellCoord::new(3, 4));
        assert!(close(five_away.duration, 0.75));
        assert!(close(five_away.peak, 0.5));

        let far = shape.pulse_for(origin, CellCoord::new(30, 20));
        assert_eq!(far.peak, 0.0);
        assert!(close(far.duration, 0.15 * origin.distance_to(CellCoord::new(30, 20))));
    }

    #[test]
    fn every_origin_gives_bounded_monotone_pulses() {
        let dims = GridDims::new(47, 30);
        let shape = PulseShape::default();
        for origin in [CellCoord::new(0, 0), CellCoord::new(23, 15), CellCoord::new(46, 29), CellCoord::new(10, 0)] {
            let mut pulses: Vec<(f64, Pulse)> = plan_ripple(dims, origin, &shape)
                .map(|(index, p)| (origin.distance_to(dims.coord_of(index).unwrap()), p))
                .collect();
            assert_eq!(pulses.len(), dims.len());
            for (distance, p) in &pulses {
                assert!(p.duration >= 0.2);
                assert!(p.peak <= 1.0 && p.peak >= 0.0);
                if *distance >= 10.0 {
                    assert!(p.peak <= 0.0);
                }
            }
            pulses.sort_by(|a, b| a.0.total_cmp(&b.0));
            for pair in pulses.windows(2) {
                assert!(pair[1].1.peak <= pair[0].1.peak);
                assert!(pair[1].1.duration >= pair[0].1.duration);
            }
        }
    }

    #[test]
    fn plan_is_in_arena_order() {
        let dims = GridDims::new(4, 3);
        let origin = CellCoord::new(1, 1);
        let shape = PulseShape::default();
        for (index, pulse) in plan_ripple(dims, origin, &shape) {
            let cell = dims.coord_of(index).unwrap();
            assert_eq!(pulse, shape.pulse_for(origin, cell));
        }
    }

    #[test]
    fn shape_follows_config() {
        let config = RippleConfig { pulse_falloff: 0.25, pulse_min_duration: 0.5, ..RippleConfig::default() };
        let shape = PulseShape::from(&config);
        let pulse = shape.pulse_at(2.0);
        assert!(close(pulse.peak, 0.5));
        assert!(close(pulse.duration, 0.5));
        assert_eq!(pulse.keyframes().values(), &[0.0, 0.5, 0.0]);
    }
}
