use crate::model::game_state::{round2, GameState, TimestampMs};

/// Calls inside this window are no-ops, so any number of overlapping UI
/// timers can poll the decay functions without double-counting.
pub const DECAY_DEBOUNCE_MS: i64 = 60 * 1000;

const SIX_HOURS_MS: f64 = 6.0 * 60.0 * 60.0 * 1000.0;
const EIGHT_HOURS_MS: f64 = 8.0 * 60.0 * 60.0 * 1000.0;

/// Happiness per millisecond: a full bar drains in 6 hours of neglect.
pub const HAPPINESS_DECAY_PER_MS: f64 = 100.0 / SIX_HOURS_MS;

/// Energy per millisecond while mining: a full bar drains in 8 hours.
pub const MINING_DECAY_PER_MS: f64 = 100.0 / EIGHT_HOURS_MS;

/// Lazy happiness decay. Computed from elapsed wall-clock time at call
/// time, so a single call after days away applies one large step.
pub fn update_happiness(state: &mut GameState, now: TimestampMs) {
    let elapsed = now - state.last_happiness_update;
    if elapsed < DECAY_DEBOUNCE_MS {
        return;
    }

    if state.happiness > 0.0 {
        let decayed = state.happiness - HAPPINESS_DECAY_PER_MS * elapsed as f64;
        state.happiness = round2(decayed.max(0.0));
    }
    state.last_happiness_update = now;
}

/// Lazy energy decay, active only while mining. Draining to zero force-stops
/// the mining flag so the host's reward timer has nothing left to pay out.
pub fn update_mining_energy(state: &mut GameState, now: TimestampMs) {
    if !state.is_mining {
        return;
    }

    let elapsed = now - state.last_energy_update;
    if elapsed < DECAY_DEBOUNCE_MS {
        return;
    }

    if state.energy > 0.0 {
        let decayed = round2((state.energy - MINING_DECAY_PER_MS * elapsed as f64).max(0.0));
        if decayed <= 0.0 {
            state.energy = 0.0;
            state.is_mining = false;
        } else {
            state.energy = decayed;
        }
    } else {
        state.is_mining = false;
    }
    state.last_energy_update = now;
}
