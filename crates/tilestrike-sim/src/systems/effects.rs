//! Cosmetic timers: player tints and item bobbing.
//!
//! Nothing here affects collision. Item hit boxes stay at the spawn point
//! while the drawn position bobs.

use hecs::World;

use tilestrike_core::components::{Item, Player, TintTimer};
use tilestrike_core::constants::{TINT_ALPHA_STEP, TINT_REPEATS};
use tilestrike_core::enums::TintKind;
use tilestrike_core::tuning::Tuning;
use tilestrike_core::types::ease_in_out_sine;

/// Alpha values of one pass through the tint ramp: 0, 25, ... 250.
fn ramp_len() -> usize {
    (0..255u32).step_by(TINT_ALPHA_STEP as usize).count()
}

/// Number of frames a tint lasts.
pub fn tint_frames() -> usize {
    ramp_len() * TINT_REPEATS
}

/// Alpha shown for `timer`'s current frame.
pub fn tint_alpha(timer: &TintTimer) -> u8 {
    let index = timer.frame % ramp_len();
    (index * TINT_ALPHA_STEP as usize).min(u8::MAX as usize) as u8
}

pub fn start_tint(kind: TintKind) -> TintTimer {
    TintTimer { kind, frame: 0 }
}

/// Step a tint forward one frame, clearing it once the ramp is spent.
fn tick_tint(slot: &mut Option<TintTimer>) {
    if let Some(timer) = slot {
        timer.frame += 1;
        if timer.frame >= tint_frames() {
            *slot = None;
        }
    }
}

/// Vertical draw offset for an item at its current bob phase.
pub fn bob_offset(item: &Item, tuning: &Tuning) -> f32 {
    tuning.bob_range * (ease_in_out_sine(item.bob_step / tuning.bob_range) - 0.5) * item.bob_dir
}

pub fn run(world: &mut World, tuning: &Tuning) {
    for (_entity, player) in world.query_mut::<&mut Player>() {
        tick_tint(&mut player.damage_tint);
        tick_tint(&mut player.heal_tint);
    }

    for (_entity, item) in world.query_mut::<&mut Item>() {
        item.bob_step += tuning.bob_speed;
        if item.bob_step > tuning.bob_range {
            item.bob_step = 0.0;
            item.bob_dir = -item.bob_dir;
        }
    }
}
