use super::animation::{Easing, Keyframes, Track};
use super::grid::{CellCoord, GridDims};
use super::pulse::{plan_ripple, PulseShape};
use crate::config::RippleConfig;

const HOVER_FLASH: [f64; 3] = [0.0, 1.0, 0.5];

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct CellState {
    opacity: f64,
    pulse: Option<Track>,
    hover: Option<Track>,
    /// Pointer is still on the cell; once the flash ends its last value is a floor under the pulse.
    held: bool,
}

impl CellState {
    fn is_animating(&self, now: f64) -> bool {
        self.pulse.is_some() || self.hover.map_or(false, |h| !h.is_finished(now))
    }
}

/// Arena of per-cell animation state for one mounted grid.
///
/// A click plans the whole ripple in one batch; `tick` then advances every track in a single
/// pass and records which cells changed so only those get repainted. While a hover flash or
/// fade is running it wins over the pulse on the same cell; a held hover only sets a floor.
#[derive(Debug, Clone)]
pub struct RippleField {
    dims: GridDims,
    shape: PulseShape,
    hover_duration: f64,
    cells: Vec<CellState>,
    origin: Option<CellCoord>,
    hovered: Option<usize>,
    dirty: Vec<usize>,
    halted: bool,
}

impl RippleField {
    pub fn new(dims: GridDims, shape: PulseShape, hover_duration: f64) -> Self {
        Self {
            dims,
            shape,
            hover_duration,
            cells: vec![CellState::default(); dims.len()],
            origin: None,
            hovered: None,
            dirty: Vec::with_capacity(dims.len()),
            halted: false,
        }
    }

    pub fn from_config(config: &RippleConfig) -> Self {
        Self::new(
            GridDims::new(config.rows, config.cols),
            PulseShape::from(config),
            config.hover_duration,
        )
    }

    pub fn origin(&self) -> Option<CellCoord> {
        self.origin
    }

    pub fn opacity_at(&self, index: usize) -> f64 {
        self.cells.get(index).map_or(0.0, |c| c.opacity)
    }

    /// Cells whose opacity changed during the last `tick`.
    pub fn dirty(&self) -> &[usize] {
        &self.dirty
    }

    /// Starts a ripple from `origin`, replacing the previous origin. Returns false if ignored.
    pub fn click(&mut self, origin: CellCoord, now: f64) -> bool {
        if self.halted || !self.dims.contains(origin) {
            return false;
        }
        self.origin = Some(origin);
        for (index, pulse) in plan_ripple(self.dims, origin, &self.shape) {
            self.cells[index].pulse = Some(Track::new(pulse.keyframes(), now, pulse.duration, Easing::EaseInOut));
        }
        true
    }

    /// Starts the hover flash on `cell`, releasing any previously hovered cell.
    pub fn hover_enter(&mut self, cell: CellCoord, now: f64) -> bool {
        if self.halted {
            return false;
        }
        let Some(index) = self.dims.index_of(cell) else {
            return false;
        };
        if self.hovered == Some(index) {
            return false;
        }
        self.hover_leave(now);
        let [a, b, c] = HOVER_FLASH;
        let state = &mut self.cells[index];
        state.hover = Some(Track::new(Keyframes::three(a, b, c), now, self.hover_duration, Easing::BackOut));
        state.held = true;
        self.hovered = Some(index);
        true
    }

    /// Pointer moved over `cell`, or over something inside the grid that is not a cell.
    /// Returns whether anything changed.
    pub fn hover_at(&mut self, cell: Option<CellCoord>, now: f64) -> bool {
        match cell {
            Some(cell) => self.hover_enter(cell, now),
            None => !self.halted && self.hover_leave(now),
        }
    }

    /// Releases the hovered cell; it eases from wherever it is back to transparent.
    /// Returns false when nothing was hovered.
    pub fn hover_leave(&mut self, now: f64) -> bool {
        let Some(index) = self.hovered.take() else {
            return false;
        };
        let state = &mut self.cells[index];
        state.held = false;
        state.hover = Some(Track::new(Keyframes::two(state.opacity, 0.0), now, self.hover_duration, Easing::BackOut));
        true
    }

    /// Advances every track to `now`. Returns whether another frame is needed.
    pub fn tick(&mut self, now: f64) -> bool {
        self.dirty.clear();
        if self.halted {
            return false;
        }
        let mut active = false;
        for (index, state) in self.cells.iter_mut().enumerate() {
            let pulse_value = match state.pulse {
                Some(track) if track.is_finished(now) => {
                    state.pulse = None;
                    track.keyframes.last()
                }
                Some(track) => track.sample(now),
                None => 0.0,
            };
            let value = match state.hover {
                Some(track) if !track.is_finished(now) => track.sample(now),
                Some(track) if state.held => pulse_value.max(track.keyframes.last()),
                Some(_) => {
                    state.hover = None;
                    pulse_value
                }
                None => pulse_value,
            };
            let value = value.clamp(0.0, 1.0);
            if value != state.opacity {
                state.opacity = value;
                self.dirty.push(index);
            }
            active |= state.is_animating(now);
        }
        active
    }

    /// Stops everything for good; later input and ticks are ignored.
    pub fn halt(&mut self) {
        self.halted = true;
        self.origin = None;
        self.hovered = None;
        self.dirty.clear();
        for state in &mut self.cells {
            *state = CellState::default();
        }
    }
}

#[cfg(test)]
impl RippleField {
    fn dims(&self) -> GridDims {
        self.dims
    }

    fn hovered(&self) -> Option<CellCoord> {
        self.hovered.and_then(|i| self.dims.coord_of(i))
    }

    fn opacity(&self, cell: CellCoord) -> Option<f64> {
        self.dims.index_of(cell).map(|i| self.cells[i].opacity)
    }

    fn is_halted(&self) -> bool {
        self.halted
    }

    fn is_active(&self, now: f64) -> bool {
        !self.halted && self.cells.iter().any(|c| c.is_animating(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> RippleField {
        RippleField::from_config(&RippleConfig::default())
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn starts_transparent_and_idle() {
        let mut field = field();
        assert_eq!(field.dims(), GridDims::new(47, 30));
        assert!(!field.is_active(0.0));
        assert!(!field.tick(0.0));
        assert!(field.dirty().is_empty());
        assert!(field.dims().cells().all(|c| field.opacity(c) == Some(0.0)));
    }

    #[test]
    fn click_peaks_at_half_duration() {
        let mut field = field();
        assert!(field.click(CellCoord::new(0, 0), 0.0));
        assert_eq!(field.origin(), Some(CellCoord::new(0, 0)));

        assert!(field.tick(0.1));
        assert!(close(field.opacity(CellCoord::new(0, 0)).unwrap(), 1.0));

        assert!(field.tick(0.375));
        assert!(close(field.opacity(CellCoord::new(3, 4)).unwrap(), 0.5));
        assert_eq!(field.opacity(CellCoord::new(30, 20)), Some(0.0));
    }

    #[test]
    fn far_cells_never_repaint() {
        let mut field = field();
        field.click(CellCoord::new(0, 0), 0.0);
        let far = field.dims().index_of(CellCoord::new(30, 20)).unwrap();
        for step in 0..200 {
            field.tick(step as f64 * 0.05);
            assert!(!field.dirty().contains(&far));
        }
    }

    #[test]
    fn ripple_settles_back_to_zero() {
        let mut field = field();
        field.click(CellCoord::new(23, 15), 0.0);
        field.tick(0.3);
        assert!(!field.dirty().is_empty());
        assert!(!field.tick(100.0));
        assert!(field.dims().cells().all(|c| field.opacity(c) == Some(0.0)));
        assert!(!field.is_active(100.0));
    }

    #[test]
    fn new_click_replaces_origin_and_restarts() {
        let mut field = field();
        field.click(CellCoord::new(0, 0), 0.0);
        field.tick(0.1);
        field.click(CellCoord::new(46, 29), 0.15);
        assert_eq!(field.origin(), Some(CellCoord::new(46, 29)));
        field.tick(0.15);
        // Restarted tracks sit on their first keyframe.
        assert_eq!(field.opacity(CellCoord::new(0, 0)), Some(0.0));
        field.tick(0.25);
        assert!(close(field.opacity(CellCoord::new(46, 29)).unwrap(), 1.0));
    }

    #[test]
    fn out_of_bounds_click_is_ignored() {
        let mut field = field();
        assert!(!field.click(CellCoord::new(47, 0), 0.0));
        assert_eq!(field.origin(), None);
        assert!(!field.is_active(0.0));
    }

    #[test]
    fn hover_flashes_then_holds_then_fades() {
        let mut field = field();
        let cell = CellCoord::new(5, 5);
        assert!(field.hover_enter(cell, 0.0));
        assert_eq!(field.hovered(), Some(cell));

        field.tick(0.25);
        assert!(close(field.opacity(cell).unwrap(), 1.0));

        // Held at the last keyframe with no more frames needed.
        assert!(!field.tick(2.0));
        assert!(close(field.opacity(cell).unwrap(), 0.5));

        assert!(field.hover_leave(2.0));
        assert_eq!(field.hovered(), None);
        assert!(!field.hover_leave(2.0));
        assert!(field.tick(2.1));
        assert!(!field.tick(3.0));
        assert_eq!(field.opacity(cell), Some(0.0));
    }

    #[test]
    fn entering_another_cell_releases_the_previous_one() {
        let mut field = field();
        let first = CellCoord::new(1, 1);
        let second = CellCoord::new(1, 2);
        field.hover_enter(first, 0.0);
        field.tick(1.0);
        field.hover_enter(second, 1.0);
        assert_eq!(field.hovered(), Some(second));
        field.tick(2.0);
        assert_eq!(field.opacity(first), Some(0.0));
        assert!(close(field.opacity(second).unwrap(), 0.5));
        assert!(!field.hover_enter(second, 2.0));
    }

    #[test]
    fn pointer_off_any_cell_releases_the_hold() {
        let mut field = field();
        let cell = CellCoord::new(4, 4);
        assert!(field.hover_at(Some(cell), 0.0));
        field.tick(1.0);
        assert!(close(field.opacity(cell).unwrap(), 0.5));

        // Gap between cells: no coordinates, but the held cell must fade.
        assert!(field.hover_at(None, 1.0));
        assert_eq!(field.hovered(), None);
        assert!(!field.tick(2.0));
        assert_eq!(field.opacity(cell), Some(0.0));
        assert!(!field.hover_at(None, 2.0));
    }

    #[test]
    fn hover_wins_over_pulse_while_alive() {
        let mut field = field();
        let cell = CellCoord::new(0, 3);
        field.click(CellCoord::new(0, 0), 0.0);
        field.hover_enter(cell, 0.0);
        // Pulse for distance 3 peaks at 0.7 at t=0.225; the hover flash shows instead.
        field.tick(0.225);
        let shown = field.opacity(cell).unwrap();
        assert!(!close(shown, 0.7));
        field.tick(1.0);
        assert!(close(field.opacity(cell).unwrap(), 0.5));
    }

    #[test]
    fn click_on_held_cell_still_peaks() {
        let mut field = field();
        let cell = CellCoord::new(10, 10);
        field.hover_enter(cell, 0.0);
        field.tick(1.0);
        assert!(close(field.opacity(cell).unwrap(), 0.5));

        assert!(field.click(cell, 1.0));
        let mut peak: f64 = 0.0;
        for step in 0..=20 {
            field.tick(1.0 + step as f64 * 0.01);
            peak = peak.max(field.opacity(cell).unwrap());
        }
        assert!(peak > 0.99, "peak was {}", peak);

        // Pulse over, the held value shows again.
        field.tick(2.0);
        assert!(close(field.opacity(cell).unwrap(), 0.5));
    }

    #[test]
    fn held_cell_never_dips_below_its_hold() {
        let mut field = field();
        let cell = CellCoord::new(0, 1);
        field.hover_enter(cell, 0.0);
        field.tick(1.0);
        field.click(CellCoord::new(0, 0), 1.0);
        for step in 0..=40 {
            field.tick(1.0 + step as f64 * 0.01);
            assert!(field.opacity(cell).unwrap() >= 0.5);
        }
    }

    #[test]
    fn halt_stops_all_updates() {
        let mut field = field();
        field.click(CellCoord::new(10, 10), 0.0);
        field.hover_enter(CellCoord::new(2, 2), 0.0);
        field.tick(0.1);
        field.halt();
        assert!(field.is_halted());
        assert!(!field.tick(0.2));
        assert!(field.dirty().is_empty());
        assert!(!field.click(CellCoord::new(0, 0), 0.3));
        assert!(!field.hover_enter(CellCoord::new(0, 0), 0.3));
        assert!(!field.tick(0.4));
        assert!(field.dirty().is_empty());
    }
}
