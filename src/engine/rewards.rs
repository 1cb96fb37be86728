use rand::Rng;

/// Chance that a pet tap pays out a small coin bonus.
pub const PET_BONUS_CHANCE: f64 = 0.4;

/// Coin bonus for petting: 40% of taps pay a uniform 1..=5 coins. Rolling
/// is host policy (the UI decides when to call this); the distribution is
/// engine contract.
pub fn roll_pet_bonus<R: Rng + ?Sized>(rng: &mut R) -> Option<u32> {
    if rng.gen::<f64>() < PET_BONUS_CHANCE {
        Some(rng.gen_range(1..=5))
    } else {
        None
    }
}

/// Payout for one mining tick: uniform 1..=3 coins scaled by the upgrade
/// level. The host fires ticks every `5000 / mining_speed` ms.
pub fn roll_mining_reward<R: Rng + ?Sized>(rng: &mut R, mining_speed: u32) -> u32 {
    rng.gen_range(1..=3u32) * mining_speed
}

/// Tick cadence for the host's mining timer, in milliseconds.
pub fn mining_tick_interval_ms(mining_speed: u32) -> u64 {
    5000 / u64::from(mining_speed.max(1))
}
