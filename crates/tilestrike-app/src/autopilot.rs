//! Scripted stand-in for a human player.
//!
//! Turns toward the nearest live mob, closes in when it is far, backs off
//! when it is close, and fires once roughly on target.

use tilestrike_core::commands::InputIntent;
use tilestrike_core::state::FrameSnapshot;
use tilestrike_core::types::{facing_of, wrap_degrees};

/// Degrees of aim error at which the turn input saturates.
const TURN_GAIN_DEG: f32 = 15.0;
/// Fire when the aim error is below this many degrees.
const FIRE_CONE_DEG: f32 = 8.0;
const ENGAGE_RANGE: f32 = 600.0;
const CLOSE_IN_RANGE: f32 = 300.0;
const BACK_OFF_RANGE: f32 = 120.0;

/// Signed shortest turn from `from` to `to`, in (-180, 180].
pub fn angle_between(from: f32, to: f32) -> f32 {
    let diff = wrap_degrees(to - from);
    if diff > 180.0 {
        diff - 360.0
    } else {
        diff
    }
}

/// Pick the intent for the next step from the last frame.
pub fn drive(frame: &FrameSnapshot) -> InputIntent {
    let me = frame.player.position;
    let nearest = frame
        .mobs
        .iter()
        .filter(|m| m.health > 0)
        .min_by(|a, b| {
            a.position
                .distance_squared(me)
                .total_cmp(&b.position.distance_squared(me))
        });
    let Some(mob) = nearest else {
        return InputIntent::idle();
    };

    let to_mob = mob.position - me;
    let distance = to_mob.length();
    let error = angle_between(frame.player.rotation, facing_of(to_mob));
    let on_target = error.abs() < FIRE_CONE_DEG;

    let throttle = if distance < BACK_OFF_RANGE {
        -1.0
    } else if distance > CLOSE_IN_RANGE && on_target {
        0.6
    } else {
        0.0
    };

    InputIntent {
        turn: (error / TURN_GAIN_DEG).clamp(-1.0, 1.0),
        throttle,
        fire: on_target && distance < ENGAGE_RANGE,
    }
}
