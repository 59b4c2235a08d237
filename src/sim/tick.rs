//! Per-frame simulation step
//!
//! Order within a frame: player physics, moving platforms and obstacles,
//! collision resolution, then level progression.

use super::collision::resolve_collisions;
use super::kinematics::advance_level;
use super::state::{DeathCause, GameEvent, GameState, HeldInput, Player};
use crate::planar_distance;
use crate::tuning::Tuning;

/// Apply gravity, held input and jump, then integrate the player position.
///
/// Returns true when a jump fired this frame. The jump flag is consumed only
/// when it fires.
pub fn advance_player(
    player: &mut Player,
    input: &mut HeldInput,
    gravity: f32,
    tuning: &Tuning,
    dt: f32,
) -> bool {
    player.velocity.y += gravity * dt;

    if input.left {
        player.velocity.x = -player.move_speed;
    } else if input.right {
        player.velocity.x = player.move_speed;
    } else {
        // Per-frame decay, not scaled by dt
        player.velocity.x *= tuning.friction;
    }

    let jumped = input.jump && player.on_ground;
    if jumped {
        player.velocity.y = player.jump_force;
        player.on_ground = false;
        input.jump = false;
    }

    player.position.x += player.velocity.x * dt;
    player.position.y += player.velocity.y * dt;

    player.position.x = player
        .position
        .x
        .clamp(-tuning.world_half_width, tuning.world_half_width);

    jumped
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, dt: f32) {
    state.events.clear();
    if !state.player.alive {
        return;
    }
    let Some(dt) = state.tuning.sanitize_dt(dt) else {
        log::debug!("Skipping frame with invalid delta {}", dt);
        return;
    };
    let Some(level) = state.levels.get_mut(state.level_index) else {
        return;
    };

    state.game_time += dt;
    let was_on_ground = state.player.on_ground;

    if advance_player(
        &mut state.player,
        &mut state.input,
        level.gravity,
        &state.tuning,
        dt,
    ) {
        state.events.push(GameEvent::Jumped);
    }

    advance_level(&mut level.platforms, &mut level.obstacles, dt);

    let contact = resolve_collisions(&mut state.player, &level.platforms, &level.obstacles);
    if contact.landed && !was_on_ground {
        state.events.push(GameEvent::Landed);
    }
    if let Some(cause) = contact.death {
        kill_player(state, cause);
        return;
    }

    check_progression(state);
}

/// Goal proximity advances the level; dropping below the void kills the player.
fn check_progression(state: &mut GameState) {
    let Some(end) = state.current_level().map(|l| l.end_position) else {
        return;
    };

    if planar_distance(state.player.position, end) < state.tuning.goal_radius {
        state.next_level();
    }

    if state.player.position.y < state.tuning.void_y {
        kill_player(state, DeathCause::FellOffWorld);
    }
}

fn kill_player(state: &mut GameState, cause: DeathCause) {
    state.player.alive = false;
    state.events.push(GameEvent::PlayerDied { cause });
    log::debug!(
        "Player died on level {} at ({:.2}, {:.2}): {:?}",
        state.current_level_number(),
        state.player.position.x,
        state.player.position.y,
        cause
    );
}
