use crate::config::MotionConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// A measured element box in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl BoundingBox {
    /// Returns `None` for boxes that cannot be used for pointer math, which is
    /// what a detached element reports.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Option<Self> {
        let finite = [left, top, width, height].iter().all(|value| value.is_finite());
        if !finite || width <= 0.0 || height <= 0.0 {
            return None;
        }

        Some(Self {
            left,
            top,
            width,
            height,
        })
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Pointer position relative to the box centre, each axis in `[-0.5, 0.5]`.
    pub fn normalized(&self, pointer: Point) -> Point {
        let px = (pointer.x - self.left) / self.width - 0.5;
        let py = (pointer.y - self.top) / self.height - 0.5;
        Point::new(px.clamp(-0.5, 0.5), py.clamp(-0.5, 0.5))
    }
}

/// Exponentially smoothed follower for the cursor dot.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    position: Point,
    target: Point,
    smoothing: f64,
}

impl PointerTracker {
    pub fn new(start: Point, smoothing: f64) -> Self {
        let smoothing = if smoothing.is_finite() {
            smoothing.clamp(f64::EPSILON, 1.0)
        } else {
            1.0
        };

        Self {
            position: start,
            target: start,
            smoothing,
        }
    }

    pub fn centered_in(viewport_width: f64, viewport_height: f64, smoothing: f64) -> Self {
        Self::new(
            Point::new(viewport_width / 2.0, viewport_height / 2.0),
            smoothing,
        )
    }

    pub fn set_target(&mut self, target: Point) {
        self.target = target;
    }

    /// Advances one animation frame and returns the new position.
    pub fn step(&mut self) -> Point {
        self.position.x += (self.target.x - self.position.x) * self.smoothing;
        self.position.y += (self.target.y - self.position.y) * self.smoothing;
        self.position
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn target(&self) -> Point {
        self.target
    }

    pub fn distance_to_target(&self) -> f64 {
        self.position.distance_to(self.target)
    }

    pub fn to_css(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px)",
            self.position.x, self.position.y
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub const NEUTRAL: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    fn new(rotate_x: f64, rotate_y: f64) -> Self {
        // Adding zero folds -0.0 into 0.0 so the neutral tilt prints "0.00".
        Self {
            rotate_x: rotate_x + 0.0,
            rotate_y: rotate_y + 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HoverTransform {
    Translate(Point),
    Rotate(Tilt),
}

impl HoverTransform {
    pub fn to_css(&self, perspective_px: f64) -> String {
        match self {
            Self::Translate(offset) if *offset == Point::ZERO => "none".to_string(),
            Self::Translate(offset) => format!("translate({}px, {}px)", offset.x, offset.y),
            Self::Rotate(tilt) => format!(
                "perspective({perspective_px}px) rotateX({:.2}deg) rotateY({:.2}deg)",
                tilt.rotate_x, tilt.rotate_y
            ),
        }
    }
}

/// How an element reacts to the pointer hovering over it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HoverMode {
    Magnetic { strength: f64 },
    /// Degrees of rotation per unit of normalised pointer offset.
    Tilt { x_deg: f64, y_deg: f64 },
}

impl HoverMode {
    pub fn magnetic(config: &MotionConfig) -> Self {
        Self::Magnetic {
            strength: config.magnetic_strength,
        }
    }

    pub fn tilt(config: &MotionConfig) -> Self {
        Self::Tilt {
            x_deg: config.tilt_x_deg,
            y_deg: config.tilt_y_deg,
        }
    }

    /// Transform for a pointer-move event. `None` means the element could not
    /// be measured and the previous transform should stay in place.
    pub fn on_move(&self, pointer: Point, bounds: Option<BoundingBox>) -> Option<HoverTransform> {
        let Some(bounds) = bounds else {
            log::trace!("skipping hover update for an unmeasured element");
            return None;
        };

        let transform = match *self {
            Self::Magnetic { strength } => {
                let center = bounds.center();
                HoverTransform::Translate(Point::new(
                    (pointer.x - center.x) * strength,
                    (pointer.y - center.y) * strength,
                ))
            }
            Self::Tilt { x_deg, y_deg } => {
                let normalized = bounds.normalized(pointer);
                HoverTransform::Rotate(Tilt::new(-normalized.y * x_deg, normalized.x * y_deg))
            }
        };

        Some(transform)
    }

    pub fn neutral(&self) -> HoverTransform {
        match self {
            Self::Magnetic { .. } => HoverTransform::Translate(Point::ZERO),
            Self::Tilt { .. } => HoverTransform::Rotate(Tilt::NEUTRAL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square() -> Option<BoundingBox> {
        BoundingBox::new(0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn tilt_matches_reference_scenario() {
        let mode = HoverMode::tilt(&MotionConfig::default());
        let transform = mode
            .on_move(Point::new(75.0, 25.0), square())
            .expect("box is measurable");

        let HoverTransform::Rotate(tilt) = transform else {
            panic!("tilt mode must rotate");
        };
        assert!((tilt.rotate_x - 2.0).abs() < 1e-9);
        assert!((tilt.rotate_y - 2.5).abs() < 1e-9);
        assert_eq!(
            transform.to_css(900.0),
            "perspective(900px) rotateX(2.00deg) rotateY(2.50deg)"
        );
    }

    #[test]
    fn neutral_tilt_prints_positive_zero() {
        let mode = HoverMode::tilt(&MotionConfig::default());
        let centered = mode
            .on_move(Point::new(50.0, 50.0), square())
            .expect("box is measurable");

        assert_eq!(
            centered.to_css(900.0),
            "perspective(900px) rotateX(0.00deg) rotateY(0.00deg)"
        );
        assert_eq!(mode.neutral(), HoverTransform::Rotate(Tilt::NEUTRAL));
    }

    #[test]
    fn magnetic_offset_scales_distance_from_center() {
        let mode = HoverMode::magnetic(&MotionConfig::default());
        let transform = mode.on_move(Point::new(90.0, 10.0), BoundingBox::new(20.0, 0.0, 40.0, 20.0));

        assert_eq!(
            transform,
            Some(HoverTransform::Translate(Point::new(12.5, 0.0)))
        );
        assert_eq!(
            transform.map(|value| value.to_css(900.0)).as_deref(),
            Some("translate(12.5px, 0px)")
        );
    }

    #[test]
    fn magnetic_neutral_renders_none() {
        let mode = HoverMode::Magnetic { strength: 0.4 };
        assert_eq!(mode.neutral().to_css(900.0), "none");
    }

    #[test]
    fn unmeasurable_box_skips_update() {
        assert!(BoundingBox::new(0.0, 0.0, 0.0, 10.0).is_none());
        assert!(BoundingBox::new(0.0, f64::NAN, 10.0, 10.0).is_none());

        let mode = HoverMode::tilt(&MotionConfig::default());
        assert_eq!(mode.on_move(Point::new(5.0, 5.0), None), None);
    }

    #[test]
    fn tracker_moves_fifteen_percent_per_frame() {
        let mut tracker = PointerTracker::new(Point::ZERO, 0.15);
        tracker.set_target(Point::new(100.0, -100.0));

        let position = tracker.step();
        assert!((position.x - 15.0).abs() < 1e-9);
        assert!((position.y + 15.0).abs() < 1e-9);
        assert_eq!(tracker.to_css(), "translate(15.00px, -15.00px)");
    }

    #[test]
    fn tracker_starts_at_viewport_center() {
        let tracker = PointerTracker::centered_in(1280.0, 720.0, 0.15);
        assert_eq!(tracker.position(), Point::new(640.0, 360.0));
        assert_eq!(tracker.target(), tracker.position());
    }

    #[test]
    fn invalid_smoothing_snaps_to_target() {
        let mut tracker = PointerTracker::new(Point::ZERO, f64::NAN);
        tracker.set_target(Point::new(3.0, 4.0));
        assert_eq!(tracker.step(), Point::new(3.0, 4.0));
    }

    proptest! {
        #[test]
        fn tracker_distance_never_grows(
            start_x in -2000.0f64..2000.0,
            start_y in -2000.0f64..2000.0,
            target_x in -2000.0f64..2000.0,
            target_y in -2000.0f64..2000.0,
            smoothing in 0.01f64..=1.0,
            frames in 1usize..200,
        ) {
            let mut tracker = PointerTracker::new(Point::new(start_x, start_y), smoothing);
            tracker.set_target(Point::new(target_x, target_y));

            let mut previous = tracker.distance_to_target();
            for _ in 0..frames {
                tracker.step();
                let current = tracker.distance_to_target();
                prop_assert!(current <= previous + 1e-9);
                previous = current;
            }
        }

        #[test]
        fn tilt_stays_within_limits(
            left in -500.0f64..500.0,
            top in -500.0f64..500.0,
            width in 1.0f64..1000.0,
            height in 1.0f64..1000.0,
            fx in 0.0f64..=1.0,
            fy in 0.0f64..=1.0,
        ) {
            let bounds = BoundingBox::new(left, top, width, height);
            let pointer = Point::new(left + fx * width, top + fy * height);
            let mode = HoverMode::tilt(&MotionConfig::default());

            let Some(HoverTransform::Rotate(tilt)) = mode.on_move(pointer, bounds) else {
                panic!("measurable box must produce a rotation");
            };
            prop_assert!((-8.0..=8.0).contains(&tilt.rotate_x));
            prop_assert!((-10.0..=10.0).contains(&tilt.rotate_y));
        }
    }
}
