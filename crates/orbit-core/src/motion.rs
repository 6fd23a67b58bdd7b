// Circular and elliptical motion about a host-chosen center

use crate::{
    fixed::{from_fixed, to_fixed},
    host::{FX, FY, RandomSource, Registers},
};
use serde::{Deserialize, Serialize};

/// Status returned by every tick
pub const STATUS_OK: i32 = 0;

/// Exclusive bound requested from the host for a random starting angle
const RANDOM_ANGLE_BOUND: i32 = 360;

/// Angle magnitude in degrees past which a tick wraps
const WRAP_DEGREES: f32 = 360.0;

/// Motion parameters as they cross the host boundary, in fixed point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotionParams {
    /// Horizontal radius
    pub radius: i32,
    /// Degrees added to the angle on every tick
    pub speed: i32,
    /// Starting angle in degrees; negative requests a random start
    #[serde(default)]
    pub angle: i32,
    /// Vertical radius; zero reuses `radius`
    #[serde(default)]
    pub radius2: i32,
    /// Static rotation of the whole ellipse in degrees; zero disables it
    #[serde(default)]
    pub angle2: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Working state of a [`MotionEngine`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    pub radius: f32,
    pub speed: f32,
    pub angle: f32,
    pub radius2: f32,
    pub angle2: f32,
    pub center: Point,
}

/// Drives a point around an ellipse, one tick per animation frame.
///
/// An engine only exists once it has been initialized, so there is no way to
/// tick before the center and parameters are known. The host is expected to
/// call [`MotionEngine::tick`] once per frame.
#[derive(Debug, Clone)]
pub struct MotionEngine {
    state: MotionState,
}

impl MotionEngine {
    /// Set up motion around whatever position the host currently holds in
    /// `FX`/`FY`.
    pub fn initialize<R, G>(params: MotionParams, registers: &mut R, random: &mut G) -> Self
    where
        R: Registers + ?Sized,
        G: RandomSource + ?Sized,
    {
        let radius = from_fixed(params.radius);
        let speed = from_fixed(params.speed);
        let mut angle = from_fixed(params.angle);
        let mut radius2 = from_fixed(params.radius2);
        let angle2 = from_fixed(params.angle2);

        if radius2 == 0.0 {
            radius2 = radius;
        }
        if angle < 0.0 {
            angle = random.random_in_range(RANDOM_ANGLE_BOUND) as f32;
        }

        let center = Point {
            x: from_fixed(registers.get_register(FX)),
            y: from_fixed(registers.get_register(FY)),
        };

        Self {
            state: MotionState {
                radius,
                speed,
                angle,
                radius2,
                angle2,
                center,
            },
        }
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    /// Advance one frame and publish the new position to `FX`/`FY`
    pub fn tick<R: Registers + ?Sized>(&mut self, registers: &mut R) -> i32 {
        self.advance();

        let position = self.position();
        registers.set_register(FX, to_fixed(position.x));
        registers.set_register(FY, to_fixed(position.y));

        STATUS_OK
    }

    /// Position on the ellipse for the current angle
    pub fn position(&self) -> Point {
        let s = &self.state;
        let cos = cos_deg(s.angle);
        let sin = sin_deg(s.angle);

        if s.angle2 == 0.0 {
            return Point {
                x: s.center.x + s.radius * cos,
                y: s.center.y + s.radius2 * sin,
            };
        }

        let cos2 = cos_deg(s.angle2);
        let sin2 = sin_deg(s.angle2);
        Point {
            x: s.center.x + s.radius * cos * cos2 - s.radius2 * sin * sin2,
            y: s.center.y + s.radius2 * sin * cos2 + s.radius * cos * sin2,
        }
    }

    // A single wrap step; speeds beyond a full turn per tick are not folded back
    fn advance(&mut self) {
        let s = &mut self.state;
        s.angle += s.speed;

        if s.angle < -WRAP_DEGREES {
            s.angle += WRAP_DEGREES;
        } else if s.angle > WRAP_DEGREES {
            s.angle -= WRAP_DEGREES;
        }
    }
}

fn radians(degrees: f32) -> f64 {
    f64::from(degrees) * std::f64::consts::PI / 180.0
}

fn cos_deg(degrees: f32) -> f32 {
    radians(degrees).cos() as f32
}

fn sin_deg(degrees: f32) -> f32 {
    radians(degrees).sin() as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockHost, MockRandom};

    fn params(radius: i32, speed: i32, angle: i32, radius2: i32, angle2: i32) -> MotionParams {
        MotionParams {
            radius,
            speed,
            angle,
            radius2,
            angle2,
        }
    }

    fn start(params: MotionParams, host: &mut MockHost) -> MotionEngine {
        MotionEngine::initialize(params, host, &mut MockRandom::default())
    }

    #[test]
    fn zero_radius2_defaults_to_radius() {
        let mut host = MockHost::default();
        let engine = start(params(5000, 100, 0, 0, 0), &mut host);

        let s = engine.state();
        assert_eq!(s.radius, 0.5);
        assert_eq!(s.radius2, 0.5);
        assert_eq!(s.angle, 0.0);
    }

    #[test]
    fn explicit_radius2_is_kept() {
        let mut host = MockHost::default();
        let engine = start(params(50000, 0, 0, 20000, 0), &mut host);
        assert_eq!(engine.state().radius, 5.0);
        assert_eq!(engine.state().radius2, 2.0);
    }

    #[test]
    fn negative_angle_requests_random_start() {
        let mut host = MockHost::default();
        let mut random = MockRandom::returning(123);

        let engine =
            MotionEngine::initialize(params(10000, 0, -10000, 0, 0), &mut host, &mut random);

        assert_eq!(engine.state().angle, 123.0);
        assert_eq!(random.calls, vec![360]);
    }

    #[test]
    fn non_negative_angle_skips_random() {
        let mut host = MockHost::default();
        let mut random = MockRandom::default();

        let engine =
            MotionEngine::initialize(params(10000, 0, 450_000, 0, 0), &mut host, &mut random);

        assert_eq!(engine.state().angle, 45.0);
        assert!(random.calls.is_empty());
    }

    #[test]
    fn center_is_read_from_registers() {
        let mut host = MockHost::at(1_000_000, -505_000);
        let engine = start(params(10000, 0, 0, 0, 0), &mut host);
        assert_eq!(engine.state().center, Point { x: 100.0, y: -50.5 });
        assert!(host.writes.is_empty());
    }

    #[test]
    fn first_tick_from_origin() {
        let mut host = MockHost::at(0, 0);
        let mut engine = start(params(50000, 10000, 0, 0, 0), &mut host);

        assert_eq!(engine.tick(&mut host), STATUS_OK);
        assert_eq!(engine.state().angle, 1.0);
        assert_eq!(host.writes, vec![(FX, 49992), (FY, 872)]);
    }

    #[test]
    fn tick_orbits_the_center() {
        let mut host = MockHost::at(100_000, 200_000);
        let mut engine = start(params(20000, 900_000, 0, 0, 0), &mut host);

        engine.tick(&mut host);
        assert_eq!(host.position(), (100_000, 220_000));

        engine.tick(&mut host);
        assert_eq!(host.position(), (80_000, 200_000));

        engine.tick(&mut host);
        assert_eq!(host.position(), (100_000, 180_000));
    }

    #[test]
    fn wraps_above_full_turn() {
        let mut host = MockHost::default();
        let mut engine = start(params(10000, 200_000, 3_500_000, 0, 0), &mut host);
        engine.tick(&mut host);
        assert_eq!(engine.state().angle, 10.0);
    }

    #[test]
    fn wraps_below_full_turn() {
        let mut host = MockHost::default();
        let mut engine = start(params(10000, -2_000_000, 0, 0, 0), &mut host);

        engine.tick(&mut host);
        assert_eq!(engine.state().angle, -200.0);

        engine.tick(&mut host);
        assert_eq!(engine.state().angle, -40.0);
    }

    #[test]
    fn wrap_is_a_single_step() {
        let mut host = MockHost::default();
        let mut engine = start(params(10000, 8_000_000, 0, 0, 0), &mut host);
        engine.tick(&mut host);
        assert_eq!(engine.state().angle, 440.0);
    }

    #[test]
    fn rotated_quarter_turn() {
        let mut host = MockHost::at(0, 0);
        let mut engine = start(params(10000, 0, 900_000, 10000, 900_000), &mut host);

        let p = engine.position();
        assert!((p.x - -1.0).abs() < 1e-4, "x = {}", p.x);
        assert!(p.y.abs() < 1e-4, "y = {}", p.y);

        engine.tick(&mut host);
        assert_eq!(host.position(), (-10000, 0));
    }

    #[test]
    fn rotated_ellipse_matches_closed_form() {
        let mut host = MockHost::at(20000, -30000);
        let engine = start(params(30000, 0, 300_000, 10000, 450_000), &mut host);

        let (a, b) = (30f64.to_radians(), 45f64.to_radians());
        let x = 2.0 + 3.0 * a.cos() * b.cos() - 1.0 * a.sin() * b.sin();
        let y = -3.0 + 1.0 * a.sin() * b.cos() + 3.0 * a.cos() * b.sin();

        let p = engine.position();
        assert!((f64::from(p.x) - x).abs() < 1e-4);
        assert!((f64::from(p.y) - y).abs() < 1e-4);
    }

    #[test]
    fn unrotated_mode_holds_for_every_tick() {
        let mut host = MockHost::at(0, 0);
        let mut engine = start(params(40000, 135_000, 0, 10000, 0), &mut host);

        for _ in 0..64 {
            engine.tick(&mut host);
            let s = *engine.state();
            assert_eq!(s.angle2, 0.0);

            let expected = Point {
                x: s.radius * cos_deg(s.angle),
                y: s.radius2 * sin_deg(s.angle),
            };
            assert_eq!(engine.position(), expected);
            assert_eq!(host.position(), (to_fixed(expected.x), to_fixed(expected.y)));
        }
    }

    #[test]
    fn secondary_rotation_is_static() {
        let mut host = MockHost::default();
        let mut engine = start(params(10000, 70_000, 0, 0, 150_000), &mut host);
        for _ in 0..100 {
            engine.tick(&mut host);
            assert_eq!(engine.state().angle2, 15.0);
        }
    }

    #[test]
    fn angle_stays_within_a_turn() {
        bolero::check!()
            .with_type::<(i32, i32, u16)>()
            .for_each(|&(speed, angle, random)| {
                let mut host = MockHost::default();
                let mut source = MockRandom::returning(i32::from(random % 360));

                let speed = speed % 3_600_001;
                let angle = angle % 3_600_001;
                let mut engine = MotionEngine::initialize(
                    params(10000, speed, angle, 0, 0),
                    &mut host,
                    &mut source,
                );

                for _ in 0..16 {
                    engine.tick(&mut host);
                    let angle = engine.state().angle;
                    assert!((-360.0..=360.0).contains(&angle), "angle = {angle}");
                }
            });
    }
}
