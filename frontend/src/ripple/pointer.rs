/// Pointer offset relative to the container's top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

/// The parts of a `DOMRect` the tracker needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
}

impl From<&web_sys::DomRect> for ContainerRect {
    fn from(rect: &web_sys::DomRect) -> Self {
        Self { left: rect.left(), top: rect.top() }
    }
}

/// Holds the last known pointer position. Leaving the container keeps it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    position: PointerPosition,
}

impl PointerTracker {
    pub fn position(&self) -> PointerPosition {
        self.position
    }

    /// Skips the update when the container has no rect yet.
    pub fn track(&mut self, client_x: f64, client_y: f64, rect: Option<ContainerRect>) -> Option<PointerPosition> {
        let rect = rect?;
        self.position = PointerPosition { x: client_x - rect.left, y: client_y - rect.top };
        Some(self.position)
    }
}

/// Circular window, centered on the pointer, through which the highlight layer shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealMask {
    pub diameter: f64,
}

impl RevealMask {
    pub fn new(diameter: f64) -> Self {
        Self { diameter }
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    /// Top-left corner of the mask image so that its center lands on the pointer.
    pub fn origin(&self, pointer: PointerPosition) -> (f64, f64) {
        (pointer.x - self.radius(), pointer.y - self.radius())
    }

    /// Inline style for the mask layer.
    pub fn style(&self, pointer: PointerPosition) -> String {
        let (x, y) = self.origin(pointer);
        let gradient = format!("radial-gradient({}px circle at center, white, transparent)", self.radius());
        format!(
            "mask-image: {g}; -webkit-mask-image: {g}; \
             mask-position: {x}px {y}px; -webkit-mask-position: {x}px {y}px; \
             mask-size: {d}px; -webkit-mask-size: {d}px; \
             mask-repeat: no-repeat; -webkit-mask-repeat: no-repeat; pointer-events: none;",
            g = gradient,
            x = x,
            y = y,
            d = self.diameter,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_is_client_minus_rect() {
        let mut tracker = PointerTracker::default();
        let rect = Some(ContainerRect { left: 40.0, top: 120.5 });
        let pos = tracker.track(290.0, 420.5, rect).unwrap();
        assert_eq!(pos, PointerPosition { x: 250.0, y: 300.0 });
        assert_eq!(tracker.position(), pos);
    }

    #[test]
    fn repeated_move_does_not_drift() {
        let mut tracker = PointerTracker::default();
        let rect = Some(ContainerRect { left: 13.25, top: 7.75 });
        let first = tracker.track(100.0, 200.0, rect);
        let second = tracker.track(100.0, 200.0, rect);
        assert_eq!(first, second);
    }

    #[test]
    fn missing_rect_keeps_previous_position() {
        let mut tracker = PointerTracker::default();
        tracker.track(10.0, 10.0, Some(ContainerRect { left: 0.0, top: 0.0 }));
        assert_eq!(tracker.track(500.0, 500.0, None), None);
        assert_eq!(tracker.position(), PointerPosition { x: 10.0, y: 10.0 });
    }

    #[test]
    fn mask_image_is_centered_on_pointer() {
        let mask = RevealMask::new(400.0);
        let pointer = PointerPosition { x: 250.0, y: 300.0 };
        assert_eq!(mask.radius(), 200.0);
        // Image top-left plus half the image size lands back on the pointer.
        let (x, y) = mask.origin(pointer);
        assert_eq!((x + mask.diameter / 2.0, y + mask.diameter / 2.0), (250.0, 300.0));
    }

    #[test]
    fn mask_follows_the_pointer_near_the_corner() {
        let style = RevealMask::new(400.0).style(PointerPosition { x: 10.0, y: 0.0 });
        assert!(style.contains("mask-position: -190px -200px;"));
        assert!(style.contains("-webkit-mask-position: -190px -200px;"));
        assert!(style.contains("pointer-events: none;"));
    }

    #[test]
    fn mask_style_places_the_circle() {
        let style = RevealMask::new(400.0).style(PointerPosition { x: 250.0, y: 300.0 });
        assert!(style.contains("radial-gradient(200px circle at center, white, transparent)"));
        assert!(style.contains("mask-position: 50px 100px;"));
        assert!(style.contains("-webkit-mask-size: 400px;"));
        assert!(style.contains("mask-repeat: no-repeat;"));
    }
}
