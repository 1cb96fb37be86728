use crate::engine::{calendar, decay};
use crate::model::action::{ActionOutcome, GameAction};
use crate::model::catalog::{self, ShopItem};
use crate::model::game_state::{
    clamp_stat, Accessory, GameState, InventoryItem, ItemKind, RewardKind, Scene, TimestampMs,
};

/// Apply one transition to the state, returning the outcome. A rejected
/// action leaves the state exactly as it was.
pub fn apply_action(state: &mut GameState, action: GameAction, now: TimestampMs) -> ActionOutcome {
    match action {
        GameAction::Feed => feed(state, now),
        GameAction::Play => play(state, now),
        GameAction::Pet => pet(state, now),

        GameAction::EarnCoins { amount } => {
            state.coins = state.coins.saturating_add(amount);
            ActionOutcome::Applied
        }

        GameAction::AddAiCredits { amount } => {
            state.ai_credits = state.ai_credits.saturating_add(amount);
            state.last_active = now;
            ActionOutcome::Applied
        }

        GameAction::UseAiCredit => {
            if state.ai_credits == 0 {
                return ActionOutcome::rejected("Out of AI credits");
            }
            state.ai_credits -= 1;
            state.last_active = now;
            ActionOutcome::Applied
        }

        GameAction::Buy { item } => buy(state, item, now),
        GameAction::UseInventoryItem { item_id } => use_inventory_item(state, &item_id, now),
        GameAction::EquipAccessory { accessory_id } => equip_accessory(state, &accessory_id, now),

        GameAction::UnequipAccessory { kind } => {
            for acc in state.accessories.iter_mut().filter(|a| a.kind == kind) {
                acc.equipped = false;
            }
            state.last_active = now;
            ActionOutcome::Applied
        }

        GameAction::UpgradeMiningSpeed => upgrade_mining_speed(state, now),
        GameAction::ClaimDailyReward => claim_daily_reward(state, now),

        GameAction::StartMining => {
            if state.energy < 20.0 {
                return ActionOutcome::rejected("Too tired to mine (needs 20 energy)");
            }
            state.is_mining = true;
            state.last_energy_update = now;
            state.last_active = now;
            ActionOutcome::Applied
        }

        GameAction::StopMining => {
            state.is_mining = false;
            state.last_active = now;
            ActionOutcome::Applied
        }

        GameAction::SetScene { scene } => {
            if !state.unlocked_scenes.is_unlocked(scene) {
                return ActionOutcome::rejected(format!("{} is still locked", scene.label()));
            }
            state.current_scene = scene;
            state.last_active = now;
            ActionOutcome::Applied
        }

        GameAction::UnlockScene { scene, cost } => unlock_scene(state, scene, cost, now),

        GameAction::UpdateHappiness => {
            decay::update_happiness(state, now);
            ActionOutcome::Applied
        }

        GameAction::UpdateMiningEnergy => {
            decay::update_mining_energy(state, now);
            ActionOutcome::Applied
        }

        GameAction::UpdateLastActive => {
            state.last_active = now;
            ActionOutcome::Applied
        }

        GameAction::ResetStats => {
            *state = GameState::new(now);
            ActionOutcome::Applied
        }
    }
}

/// Convenience for the AI chat gate: callers get a plain bool and must not
/// treat `false` as success.
pub fn use_ai_credit(state: &mut GameState, now: TimestampMs) -> bool {
    apply_action(state, GameAction::UseAiCredit, now).is_applied()
}

fn feed(state: &mut GameState, now: TimestampMs) -> ActionOutcome {
    // Allowance resets lazily on the first feed after local midnight.
    let new_day = calendar::is_prior_day(state.feeding.last_allowance_date, now);
    let available = if new_day {
        state.feeding.daily_allowance
    } else {
        state.feeding.remaining_allowance
    };

    if available == 0 {
        return ActionOutcome::rejected("No feeds left today");
    }

    if new_day {
        state.feeding.last_allowance_date = now;
    }
    state.feeding.remaining_allowance = available - 1;

    state.energy = clamp_stat(state.energy + 20.0);
    state.happiness = clamp_stat(state.happiness + 5.0);
    state.last_fed = now;
    state.last_active = now;
    state.last_happiness_update = now;
    // While mining, the energy-decay clock keeps running through the feed so
    // decay accounting stays continuous.
    if !state.is_mining {
        state.last_energy_update = now;
    }

    ActionOutcome::Applied
}

fn play(state: &mut GameState, now: TimestampMs) -> ActionOutcome {
    state.happiness = clamp_stat(state.happiness + 15.0);
    state.energy = clamp_stat(state.energy - 10.0);
    state.last_played = now;
    state.last_active = now;
    state.last_happiness_update = now;
    ActionOutcome::Applied
}

fn pet(state: &mut GameState, now: TimestampMs) -> ActionOutcome {
    state.happiness = clamp_stat(state.happiness + 5.0);
    state.last_active = now;
    state.last_happiness_update = now;
    ActionOutcome::Applied
}

fn buy(state: &mut GameState, item: ShopItem, now: TimestampMs) -> ActionOutcome {
    if state.coins < item.cost() {
        return ActionOutcome::rejected(format!("Not enough coins for {}", item.name()));
    }

    state.coins -= item.cost();

    match item {
        ShopItem::CreditPack { credits, .. } => {
            state.ai_credits = state.ai_credits.saturating_add(credits);
        }

        ShopItem::Accessory { id, name, description, kind, .. } => {
            state.accessories.push(Accessory {
                id,
                name,
                description,
                kind,
                equipped: false,
            });
        }

        ShopItem::Food { id, name, description, energy_boost, happiness_boost, .. } => {
            stack_item(state, InventoryItem {
                id,
                name,
                description,
                kind: ItemKind::Food,
                energy_boost,
                happiness_boost,
                quantity: 1,
            });
        }

        ShopItem::Toy { id, name, description, happiness_boost, .. } => {
            stack_item(state, InventoryItem {
                id,
                name,
                description,
                kind: ItemKind::Toy,
                energy_boost: 0,
                happiness_boost,
                quantity: 1,
            });
        }
    }

    state.last_active = now;
    ActionOutcome::Applied
}

fn stack_item(state: &mut GameState, item: InventoryItem) {
    match state.inventory.iter_mut().find(|i| i.id == item.id) {
        Some(existing) => existing.quantity += item.quantity,
        None => state.inventory.push(item),
    }
}

fn use_inventory_item(state: &mut GameState, item_id: &str, now: TimestampMs) -> ActionOutcome {
    let Some(index) = state.inventory.iter().position(|i| i.id == item_id) else {
        return ActionOutcome::rejected(format!("No '{item_id}' in the inventory"));
    };
    if state.inventory[index].quantity == 0 {
        return ActionOutcome::rejected(format!("No '{item_id}' left"));
    }

    let item = state.inventory[index].clone();

    state.happiness = clamp_stat(state.happiness + item.happiness_boost as f64);
    state.energy = clamp_stat(state.energy + item.energy_boost as f64);

    state.inventory[index].quantity -= 1;
    if state.inventory[index].quantity == 0 {
        state.inventory.remove(index);
    }

    state.last_active = now;
    // Only a happiness boost resets the happiness-decay clock; an energy-only
    // snack must not push the decay window forward.
    if item.happiness_boost > 0 {
        state.last_happiness_update = now;
    }
    if item.kind == ItemKind::Food {
        state.last_fed = now;
    }

    ActionOutcome::Applied
}

fn equip_accessory(state: &mut GameState, accessory_id: &str, now: TimestampMs) -> ActionOutcome {
    let Some(kind) = state
        .accessories
        .iter()
        .find(|a| a.id == accessory_id)
        .map(|a| a.kind)
    else {
        return ActionOutcome::rejected(format!("Accessory '{accessory_id}' is not owned"));
    };

    // One accessory per slot: equipping swaps out whatever held the slot.
    for acc in state.accessories.iter_mut().filter(|a| a.kind == kind) {
        acc.equipped = acc.id == accessory_id;
    }

    state.last_active = now;
    ActionOutcome::Applied
}

fn upgrade_mining_speed(state: &mut GameState, now: TimestampMs) -> ActionOutcome {
    if state.mining_speed >= 5 {
        return ActionOutcome::rejected("Mining speed is already maxed out");
    }
    if state.coins < state.mining_upgrade_cost {
        return ActionOutcome::rejected("Not enough coins for the upgrade");
    }

    state.coins -= state.mining_upgrade_cost;
    state.mining_speed += 1;
    state.mining_upgrade_cost *= 2;
    state.last_active = now;
    ActionOutcome::Applied
}

fn unlock_scene(state: &mut GameState, scene: Scene, cost: u32, now: TimestampMs) -> ActionOutcome {
    if state.unlocked_scenes.is_unlocked(scene) {
        return ActionOutcome::rejected(format!("{} is already unlocked", scene.label()));
    }
    if state.coins < cost {
        return ActionOutcome::rejected(format!("Not enough coins to unlock {}", scene.label()));
    }

    state.coins -= cost;
    state.unlocked_scenes.unlock(scene);
    state.last_active = now;
    ActionOutcome::Applied
}

fn claim_daily_reward(state: &mut GameState, now: TimestampMs) -> ActionOutcome {
    let last_claim = state.daily_rewards.last_claim_date;
    if calendar::is_same_day(last_claim, now) {
        return ActionOutcome::rejected("Today's reward is already claimed");
    }

    // Consecutive-day claims extend the streak; any gap restarts it at 1.
    let streak = if calendar::was_yesterday(last_claim, now) {
        state.daily_rewards.current_streak + 1
    } else {
        1
    };
    state.daily_rewards.current_streak = streak;
    state.daily_rewards.max_streak = state.daily_rewards.max_streak.max(streak);

    // The streak wraps through the 7-day calendar indefinitely.
    let day = ((streak - 1) % 7) + 1;

    let granted = state
        .daily_rewards
        .rewards
        .iter_mut()
        .find(|r| r.day == day)
        .map(|slot| {
            slot.claimed = true;
            slot.reward.clone()
        });

    match granted {
        Some(RewardKind::Coins { amount }) => {
            state.coins = state.coins.saturating_add(amount);
        }
        Some(RewardKind::Item { item_id, quantity }) => {
            grant_reward_item(state, &item_id, quantity);
        }
        None => {}
    }

    // Completing the cycle resets the calendar's claimed flags; the streak
    // itself keeps counting.
    if day == 7 {
        for slot in &mut state.daily_rewards.rewards {
            slot.claimed = false;
        }
    }

    state.daily_rewards.last_claim_date = calendar::day_start_ms(now);
    state.last_active = now;
    ActionOutcome::Applied
}

fn grant_reward_item(state: &mut GameState, item_id: &str, quantity: u32) {
    if let Some(existing) = state.inventory.iter_mut().find(|i| i.id == item_id) {
        existing.quantity += quantity;
        return;
    }
    if let Some(mut item) = catalog::reward_item(item_id) {
        item.quantity = quantity;
        state.inventory.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calendar::test_clock::{noon, DAY_MS, HOUR_MS};
    use crate::model::game_state::AccessoryKind;

    fn shop_item(id: &str) -> ShopItem {
        catalog::shop_items()
            .into_iter()
            .find(|i| i.id() == id)
            .unwrap()
    }

    fn hat(id: &str) -> Accessory {
        Accessory {
            id: id.into(),
            name: format!("hat {id}"),
            description: String::new(),
            kind: AccessoryKind::Hat,
            equipped: false,
        }
    }

    #[test]
    fn feed_consumes_allowance_and_boosts_stats() {
        let now = noon(2026, 6, 15);
        let mut s = GameState::new(now);
        s.energy = 70.0;
        s.happiness = 50.0;

        assert!(apply_action(&mut s, GameAction::Feed, now).is_applied());

        assert_eq!(s.energy, 90.0);
        assert_eq!(s.happiness, 55.0);
        assert_eq!(s.feeding.remaining_allowance, 2);
        assert_eq!(s.last_fed, now);
        assert_eq!(s.last_happiness_update, now);
    }

    #[test]
    fn feed_is_denied_once_allowance_runs_out() {
        let now = noon(2026, 6, 15);
        let mut s = GameState::new(now);
        s.feeding.remaining_allowance = 0;

        let before = s.clone();
        let outcome = apply_action(&mut s, GameAction::Feed, now);

        assert!(!outcome.is_applied());
        assert_eq!(s, before);
    }

    #[test]
    fn feed_allowance_rolls_over_on_a_new_day() {
        let yesterday = noon(2026, 6, 14);
        let now = noon(2026, 6, 15);
        let mut s = GameState::new(yesterday);
        s.feeding.remaining_allowance = 0;
        s.energy = 10.0;

        assert!(apply_action(&mut s, GameAction::Feed, now).is_applied());

        assert_eq!(s.feeding.remaining_allowance, s.feeding.daily_allowance - 1);
        assert_eq!(s.feeding.last_allowance_date, now);
        assert_eq!(s.energy, 30.0);
    }

    #[test]
    fn feed_while_mining_keeps_the_energy_decay_clock() {
        let now = noon(2026, 6, 15);
        let earlier = now - 2 * HOUR_MS;
        let mut s = GameState::new(earlier);
        s.is_mining = true;

        assert!(apply_action(&mut s, GameAction::Feed, now).is_applied());

        assert_eq!(s.last_energy_update, earlier);
        assert_eq!(s.last_happiness_update, now);
    }

    #[test]
    fn play_trades_energy_for_happiness() {
        let now = noon(2026, 6, 15);
        let mut s = GameState::new(now);
        s.happiness = 95.0;
        s.energy = 5.0;

        assert!(apply_action(&mut s, GameAction::Play, now).is_applied());

        assert_eq!(s.happiness, 100.0); // clamped
        assert_eq!(s.energy, 0.0); // clamped
        assert_eq!(s.last_played, now);
    }

    #[test]
    fn pet_bumps_happiness_only() {
        let now = noon(2026, 6, 15);
        let mut s = GameState::new(now);
        s.happiness = 70.0;
        let energy = s.energy;

        assert!(apply_action(&mut s, GameAction::Pet, now).is_applied());

        assert_eq!(s.happiness, 75.0);
        assert_eq!(s.energy, energy);
    }

    #[test]
    fn buy_rejects_without_enough_coins_and_changes_nothing() {
        let now = noon(2026, 6, 15);
        let mut s = GameState::new(now);
        s.coins = 10;

        let before = s.clone();
        let outcome = apply_action(
            &mut s,
            GameAction::Buy { item: shop_item("1") }, // costs 50
            now,
        );

        assert!(!outcome.is_applied());
        assert_eq!(s, before);
    }

    #[test]
    fn buying_food_twice_stacks_one_inventory_entry() {
        let now = noon(2026, 6, 15);
        let mut s = GameState::new(now);
        s.coins = 500;

        apply_action(&mut s, GameAction::Buy { item: shop_item("5") }, now);
        apply_action(&mut s, GameAction::Buy { item: shop_item("5") }, now);

        assert_eq!(s.coins, 500 - 2 * 30);
        assert_eq!(s.inventory.len(), 1);
        assert_eq!(s.inventory[0].quantity, 2);
        assert_eq!(s.inventory[0].kind, ItemKind::Food);
    }

    #[test]
    fn buying_a_credit_pack_adds_credits() {
        let now = noon(2026, 6, 15);
        let mut s = GameState::new(now);
        s.coins = 100;

        apply_action(&mut s, GameAction::Buy { item: shop_item("c1") }, now);

        assert_eq!(s.coins, 50);
        assert_eq!(s.ai_credits, 10); // 5 starting + 5 from the pack
        assert!(s.inventory.is_empty());
    }

    #[test]
    fn buying_an_accessory_adds_it_unequipped() {
        let now = noon(2026, 6, 15);
        let mut s = GameState::new(now);
        s.coins = 200;

        apply_action(&mut s, GameAction::Buy { item: shop_item("3") }, now);

        assert_eq!(s.accessories.len(), 1);
        assert!(!s.accessories[0].equipped);
        assert_eq!(s.accessories[0].kind, AccessoryKind::Hat);
    }

    #[test]
    fn using_an_item_applies_boosts_and_decrements() {
        let now = noon(2026, 6, 15);
        let mut s = GameState::new(now);
        s.coins = 200;
        s.energy = 50.0;
        s.happiness = 50.0;
        apply_action(&mut s, GameAction::Buy { item: shop_item("1") }, now); // +40 energy +10 happiness, qty 1
        apply_action(&mut s, GameAction::Buy { item: shop_item("1") }, now);

        let later = now + HOUR_MS;
        assert!(apply_action(
            &mut s,
            GameAction::UseInventoryItem { item_id: "1".into() },
            later
        )
        .is_applied());

        assert_eq!(s.energy, 90.0);
        assert_eq!(s.happiness, 60.0);
        assert_eq!(s.inventory[0].quantity, 1);
        assert_eq!(s.last_fed, later);
        assert_eq!(s.last_happiness_update, later);
    }

    #[test]
    fn using_the_last_item_removes_the_entry() {
        let now = noon(2026, 6, 15);
        let mut s = GameState::new(now);
        s.coins = 100;
        apply_action(&mut s, GameAction::Buy { item: shop_item("5") }, now);

        apply_action(&mut s, GameAction::UseInventoryItem { item_id: "5".into() }, now);

        assert!(s.inventory.is_empty());
    }

    #[test]
    fn energy_only_item_leaves_the_happiness_clock_alone() {
        let now = noon(2026, 6, 15);
        let earlier = now - 2 * HOUR_MS;
        let mut s = GameState::new(earlier);
        s.coins = 100;
        apply_action(&mut s, GameAction::Buy { item: shop_item("5") }, earlier); // energy only

        apply_action(&mut s, GameAction::UseInventoryItem { item_id: "5".into() }, now);

        assert_eq!(s.last_happiness_update, earlier);
        assert_eq!(s.last_fed, now); // still food, so the fed mark moves
    }

    #[test]
    fn using_a_missing_item_is_rejected() {
        let now = noon(2026, 6, 15);
        let mut s = GameState::new(now);
        let before = s.clone();

        let outcome = apply_action(
            &mut s,
            GameAction::UseInventoryItem { item_id: "nope".into() },
            now,
        );

        assert!(!outcome.is_applied());
        assert_eq!(s, before);
    }

    #[test]
    fn equipping_swaps_within_the_slot_only() {
        let now = noon(2026, 6, 15);
        let mut s = GameState::new(now);
        let mut a = hat("a");
        a.equipped = true;
        s.accessories.push(a);
        s.accessories.push(hat("b"));
        s.accessories.push(Accessory {
            id: "c".into(),
            name: "shades".into(),
            description: String::new(),
            kind: AccessoryKind::Glasses,
            equipped: true,
        });

        assert!(apply_action(
            &mut s,
            GameAction::EquipAccessory { accessory_id: "b".into() },
            now
        )
        .is_applied());

        assert!(!s.accessory("a").unwrap().equipped);
        assert!(s.accessory("b").unwrap().equipped);
        // other slot untouched
        assert!(s.accessory("c").unwrap().equipped);
    }

    #[test]
    fn equipping_an_unowned_accessory_is_rejected() {
        let now = noon(2026, 6, 15);
        let mut s = GameState::new(now);
        let before = s.clone();

        let outcome = apply_action(
            &mut s,
            GameAction::EquipAccessory { accessory_id: "ghost".into() },
            now,
        );

        assert!(!outcome.is_applied());
        assert_eq!(s, before);
    }

    #[test]
    fn unequip_clears_the_whole_slot() {
        let now = noon(2026, 6, 15);
        let mut s = GameState::new(now);
        let mut a = hat("a");
        a.equipped = true;
        s.accessories.push(a);
        s.accessories.push(hat("b"));

        apply_action(&mut s, GameAction::UnequipAccessory { kind: AccessoryKind::Hat }, now);

        assert!(s.equipped(AccessoryKind::Hat).is_none());
    }

    #[test]
    fn upgrade_doubles_cost_and_caps_at_five() {
        let now = noon(2026, 6, 15);
        let mut s = GameState::new(now);
        s.coins = 100_000;

        assert!(apply_action(&mut s, GameAction::UpgradeMiningSpeed, now).is_applied());
        assert_eq!(s.mining_speed, 2);
        assert_eq!(s.mining_upgrade_cost, 200);

        for _ in 0..3 {
            assert!(apply_action(&mut s, GameAction::UpgradeMiningSpeed, now).is_applied());
        }
        assert_eq!(s.mining_speed, 5);
        assert_eq!(s.mining_upgrade_cost, 1600);

        // capped regardless of coin balance
        let before = s.clone();
        assert!(!apply_action(&mut s, GameAction::UpgradeMiningSpeed, now).is_applied());
        assert_eq!(s, before);
    }

    #[test]
    fn upgrade_rejects_when_short_on_coins() {
        let now = noon(2026, 6, 15);
        let mut s = GameState::new(now);
        s.coins = 99;

        let before = s.clone();
        assert!(!apply_action(&mut s, GameAction::UpgradeMiningSpeed, now).is_applied());
        assert_eq!(s, before);
    }

    #[test]
    fn start_mining_needs_twenty_energy() {
        let now = noon(2026, 6, 15);
        let mut s = GameState::new(now);
        s.energy = 19.0;

        assert!(!apply_action(&mut s, GameAction::StartMining, now).is_applied());
        assert!(!s.is_mining);

        s.energy = 20.0;
        assert!(apply_action(&mut s, GameAction::StartMining, now).is_applied());
        assert!(s.is_mining);
        assert_eq!(s.last_energy_update, now);
    }

    #[test]
    fn stop_mining_always_applies() {
        let now = noon(2026, 6, 15);
        let mut s = GameState::new(now);
        s.is_mining = true;

        assert!(apply_action(&mut s, GameAction::StopMining, now).is_applied());
        assert!(!s.is_mining);
    }

    #[test]
    fn set_scene_rejects_locked_scenes() {
        let now = noon(2026, 6, 15);
        let mut s = GameState::new(now);

        assert!(!apply_action(&mut s, GameAction::SetScene { scene: Scene::City }, now).is_applied());
        assert_eq!(s.current_scene, Scene::Warehouse);
    }

    #[test]
    fn unlock_then_set_scene() {
        let now = noon(2026, 6, 15);
        let mut s = GameState::new(now);
        s.coins = 250;

        assert!(apply_action(
            &mut s,
            GameAction::UnlockScene { scene: Scene::Park, cost: 200 },
            now
        )
        .is_applied());
        assert_eq!(s.coins, 50);
        assert!(s.unlocked_scenes.park);

        assert!(apply_action(&mut s, GameAction::SetScene { scene: Scene::Park }, now).is_applied());
        assert_eq!(s.current_scene, Scene::Park);
    }

    #[test]
    fn unlocking_twice_is_rejected() {
        let now = noon(2026, 6, 15);
        let mut s = GameState::new(now);
        s.coins = 1000;
        apply_action(&mut s, GameAction::UnlockScene { scene: Scene::Park, cost: 200 }, now);

        let before = s.clone();
        assert!(!apply_action(
            &mut s,
            GameAction::UnlockScene { scene: Scene::Park, cost: 200 },
            now
        )
        .is_applied());
        assert_eq!(s, before);
    }

    #[test]
    fn ai_credit_gate_returns_false_when_empty() {
        let now = noon(2026, 6, 15);
        let mut s = GameState::new(now);
        s.ai_credits = 1;

        assert!(use_ai_credit(&mut s, now));
        assert_eq!(s.ai_credits, 0);
        assert!(!use_ai_credit(&mut s, now));
        assert_eq!(s.ai_credits, 0);
    }

    #[test]
    fn earn_and_add_credit_actions_accumulate() {
        let now = noon(2026, 6, 15);
        let mut s = GameState::new(now);

        assert!(apply_action(&mut s, GameAction::EarnCoins { amount: 40 }, now).is_applied());
        assert!(apply_action(&mut s, GameAction::AddAiCredits { amount: 10 }, now).is_applied());

        assert_eq!(s.coins, 140);
        assert_eq!(s.ai_credits, 15);
    }

    #[test]
    fn update_last_active_touches_only_the_timestamp() {
        let now = noon(2026, 6, 15);
        let earlier = now - 3 * HOUR_MS;
        let mut s = GameState::new(earlier);

        let mut expected = s.clone();
        expected.last_active = now;

        assert!(apply_action(&mut s, GameAction::UpdateLastActive, now).is_applied());
        assert_eq!(s, expected);
    }

    #[test]
    fn streak_continues_on_consecutive_days() {
        let now = noon(2026, 6, 15);
        let mut s = GameState::new(now);
        s.daily_rewards.last_claim_date = noon(2026, 6, 14);
        s.daily_rewards.current_streak = 3;
        s.daily_rewards.max_streak = 3;
        let coins = s.coins;

        assert!(apply_action(&mut s, GameAction::ClaimDailyReward, now).is_applied());

        assert_eq!(s.daily_rewards.current_streak, 4);
        assert_eq!(s.daily_rewards.max_streak, 4);
        // day 4 of the calendar pays 150 coins
        assert_eq!(s.coins, coins + 150);
        assert!(s.daily_rewards.rewards[3].claimed);
    }

    #[test]
    fn streak_breaks_after_a_gap() {
        let now = noon(2026, 6, 15);
        let mut s = GameState::new(now);
        s.daily_rewards.last_claim_date = noon(2026, 6, 12); // 3 days ago
        s.daily_rewards.current_streak = 5;
        s.daily_rewards.max_streak = 5;

        assert!(apply_action(&mut s, GameAction::ClaimDailyReward, now).is_applied());

        assert_eq!(s.daily_rewards.current_streak, 1);
        assert_eq!(s.daily_rewards.max_streak, 5);
    }

    #[test]
    fn claiming_twice_in_one_day_is_rejected() {
        let now = noon(2026, 6, 15);
        let mut s = GameState::new(now);

        assert!(apply_action(&mut s, GameAction::ClaimDailyReward, now).is_applied());
        let before = s.clone();

        let outcome = apply_action(&mut s, GameAction::ClaimDailyReward, now + HOUR_MS);
        assert!(!outcome.is_applied());
        assert_eq!(s, before);
    }

    #[test]
    fn item_reward_day_grants_inventory() {
        let now = noon(2026, 6, 15);
        let mut s = GameState::new(now);
        s.daily_rewards.last_claim_date = noon(2026, 6, 14);
        s.daily_rewards.current_streak = 2; // next claim is day 3: premium_food

        apply_action(&mut s, GameAction::ClaimDailyReward, now);

        let item = s.inventory_item("premium_food").unwrap();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.kind, ItemKind::Food);
        assert_eq!(item.energy_boost, 40);
    }

    #[test]
    fn day_seven_claim_resets_the_calendar_flags() {
        let mut s = GameState::new(noon(2026, 6, 1));
        // Claim seven consecutive days.
        for offset in 0..7 {
            let day = noon(2026, 6, 8 + offset);
            assert!(apply_action(&mut s, GameAction::ClaimDailyReward, day).is_applied());
        }

        assert_eq!(s.daily_rewards.current_streak, 7);
        // The cycle completed, so every claimed flag is back to false.
        assert!(s.daily_rewards.rewards.iter().all(|r| !r.claimed));

        // The eighth day wraps to calendar day 1 and keeps the streak going.
        assert!(apply_action(&mut s, GameAction::ClaimDailyReward, noon(2026, 6, 15)).is_applied());
        assert_eq!(s.daily_rewards.current_streak, 8);
        assert!(s.daily_rewards.rewards[0].claimed);
    }

    #[test]
    fn reset_restores_documented_defaults() {
        let now = noon(2026, 6, 15);
        let mut s = GameState::new(now - 10 * DAY_MS);
        s.coins = 9999;
        s.mining_speed = 4;
        s.accessories.push(hat("a"));
        s.unlocked_scenes.city = true;

        apply_action(&mut s, GameAction::ResetStats, now);

        assert_eq!(s, GameState::new(now));
    }

    #[test]
    fn stat_ranges_hold_across_a_burst_of_actions() {
        let mut now = noon(2026, 6, 15);
        let mut s = GameState::new(now);
        s.coins = 150;

        let actions = [
            GameAction::Play,
            GameAction::Play,
            GameAction::Feed,
            GameAction::Pet,
            GameAction::StartMining,
            GameAction::UpdateMiningEnergy,
            GameAction::Buy { item: shop_item("5") },
            GameAction::UseInventoryItem { item_id: "5".into() },
            GameAction::Play,
            GameAction::Play,
            GameAction::Play,
            GameAction::Play,
            GameAction::UpdateHappiness,
            GameAction::UseAiCredit,
            GameAction::ClaimDailyReward,
        ];

        for action in actions {
            now += 90_000;
            let _ = apply_action(&mut s, action, now);
            assert!((0.0..=100.0).contains(&s.happiness), "happiness out of range");
            assert!((0.0..=100.0).contains(&s.energy), "energy out of range");
            assert!(s.mining_speed >= 1 && s.mining_speed <= 5);
        }
    }
}
