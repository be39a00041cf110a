use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    EaseInOut,
    /// Overshoots slightly past the target before settling.
    BackOut,
}

impl Easing {
    pub fn apply(self, p: f64) -> f64 {
        let p = p.clamp(0.0, 1.0);
        match self {
            Easing::EaseInOut => -((PI * p).cos() - 1.0) / 2.0,
            Easing::BackOut => {
                const C1: f64 = 1.70158;
                const C3: f64 = C1 + 1.0;
                let q = p - 1.0;
                1.0 + C3 * q * q * q + C1 * q * q
            }
        }
    }
}

/// Up to three evenly spaced opacity keyframes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframes {
    values: [f64; 3],
    count: usize,
}

impl Keyframes {
    pub fn three(a: f64, b: f64, c: f64) -> Self {
        Self { values: [a, b, c], count: 3 }
    }

    pub fn two(from: f64, to: f64) -> Self {
        Self { values: [from, to, to], count: 2 }
    }

    pub fn last(&self) -> f64 {
        self.values[self.count - 1]
    }

    #[cfg(test)]
    pub fn values(&self) -> &[f64] {
        &self.values[..self.count]
    }

    /// Value at overall progress `p`, easing applied per segment.
    pub fn at(&self, p: f64, easing: Easing) -> f64 {
        let segments = (self.count - 1) as f64;
        let pos = p.clamp(0.0, 1.0) * segments;
        let seg = (pos.floor() as usize).min(self.count - 2);
        let local = pos - seg as f64;
        let (a, b) = (self.values[seg], self.values[seg + 1]);
        a + (b - a) * easing.apply(local)
    }
}

/// One running opacity animation. Times are in seconds on the frame clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub keyframes: Keyframes,
    pub start: f64,
    pub duration: f64,
    pub easing: Easing,
}

impl Track {
    pub fn new(keyframes: Keyframes, start: f64, duration: f64, easing: Easing) -> Self {
        Self { keyframes, start, duration, easing }
    }

    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now: f64) -> f64 {
        self.keyframes.at(self.progress(now), self.easing)
    }

    pub fn is_finished(&self, now: f64) -> bool {
        now >= self.start + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn easings_hit_their_endpoints() {
        for easing in [Easing::EaseInOut, Easing::BackOut] {
            assert!(close(easing.apply(0.0), 0.0), "{:?}", easing);
            assert!(close(easing.apply(1.0), 1.0), "{:?}", easing);
        }
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100).map(|i| Easing::BackOut.apply(i as f64 / 100.0)).fold(0.0, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn three_keyframes_pass_through_the_middle() {
        // Ease-in-out is symmetric, so each segment's midpoint is the halfway value.
        let kf = Keyframes::three(0.0, 0.8, 0.0);
        assert!(close(kf.at(0.0, Easing::EaseInOut), 0.0));
        assert!(close(kf.at(0.25, Easing::EaseInOut), 0.4));
        assert!(close(kf.at(0.5, Easing::EaseInOut), 0.8));
        assert!(close(kf.at(0.75, Easing::EaseInOut), 0.4));
        assert!(close(kf.at(1.0, Easing::EaseInOut), 0.0));
    }

    #[test]
    fn two_keyframes_interpolate_once() {
        let kf = Keyframes::two(0.5, 0.0);
        assert_eq!(kf.values(), &[0.5, 0.0]);
        assert!(close(kf.at(0.5, Easing::EaseInOut), 0.25));
        assert_eq!(kf.last(), 0.0);
    }

    #[test]
    fn track_clamps_outside_its_window() {
        let track = Track::new(Keyframes::three(0.0, 1.0, 0.5), 10.0, 0.5, Easing::BackOut);
        assert_eq!(track.sample(9.0), 0.0);
        assert!(close(track.sample(10.25), 1.0));
        assert!(close(track.sample(11.0), 0.5));
        assert!(!track.is_finished(10.4));
        assert!(track.is_finished(10.5));
    }
}
