use eframe::egui;

use crate::engine::{calendar, engine, image_client};
use crate::model::action::GameAction;
use crate::model::catalog::{self, ShopItem};
use crate::model::game_state::{AccessoryKind, GameState, RewardKind, Scene};
use crate::ui::app::{format_number, PetApp, RightTab};

pub fn draw_right_panel(ctx: &egui::Context, app: &mut PetApp) {
    egui::SidePanel::right("right")
        .resizable(true)
        .default_width(340.0)
        .min_width(260.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut app.ui.right_tab, RightTab::Shop, "Shop");
                ui.selectable_value(&mut app.ui.right_tab, RightTab::Inventory, "Items");
                ui.selectable_value(&mut app.ui.right_tab, RightTab::Accessories, "Looks");
                ui.selectable_value(&mut app.ui.right_tab, RightTab::Rewards, "Rewards");
                ui.selectable_value(&mut app.ui.right_tab, RightTab::Locations, "Places");
            });

            ui.separator();

            let Some(snapshot) = app.ui.snapshot.clone() else {
                ui.label("Loading…");
                return;
            };

            egui::ScrollArea::vertical().show(ui, |ui| match app.ui.right_tab {
                RightTab::Shop => draw_shop(ui, app, &snapshot),
                RightTab::Inventory => draw_inventory(ui, app, &snapshot),
                RightTab::Accessories => draw_accessories(ui, app, &snapshot),
                RightTab::Rewards => draw_rewards(ui, app, &snapshot),
                RightTab::Locations => draw_locations(ui, app, &snapshot),
            });
        });
}

/* =========================
   Shop
   ========================= */

fn draw_shop(ui: &mut egui::Ui, app: &mut PetApp, snapshot: &GameState) {
    ui.heading("Shop");
    ui.label(format!("🪙 {}", format_number(snapshot.coins)));

    let shop = app.ui.shop.clone();
    for item in &shop {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                if let Some(tex) = app.ui.art.get(item.id()) {
                    ui.add(egui::Image::new(tex).fit_to_exact_size(egui::vec2(40.0, 40.0)));
                }
                ui.vertical(|ui| {
                    ui.strong(item.name());
                    ui.small(item.description());
                    ui.small(item.category_label());
                });
            });

            ui.horizontal(|ui| {
                let affordable = snapshot.coins >= item.cost();
                let buy = ui.add_enabled(
                    affordable,
                    egui::Button::new(format!("Buy — {}", format_number(item.cost()))),
                );
                if buy.clicked() {
                    app.send(GameAction::Buy { item: item.clone() });
                }

                if ui.small_button("🎨").on_hover_text("Generate art").clicked() {
                    request_art(ui.ctx(), app, item);
                }
            });
        });
    }
}

fn request_art(ctx: &egui::Context, app: &mut PetApp, item: &ShopItem) {
    if app.ui.art.contains_key(item.id()) {
        return;
    }
    match image_client::cached_art(item.id(), &image_client::item_prompt(item)) {
        Ok(img) => {
            let tex = ctx.load_texture(item.id().to_string(), img, Default::default());
            app.ui.art.insert(item.id().to_string(), tex);
        }
        Err(err) => app.toast(format!("No art today: {err}")),
    }
}

fn request_scene_art(ctx: &egui::Context, app: &mut PetApp, scene: Scene) {
    let key = scene_art_key(scene);
    if app.ui.art.contains_key(&key) {
        return;
    }
    match image_client::cached_art(&key, &image_client::scene_prompt(scene)) {
        Ok(img) => {
            let tex = ctx.load_texture(key.clone(), img, Default::default());
            app.ui.art.insert(key, tex);
        }
        Err(err) => app.toast(format!("No art today: {err}")),
    }
}

pub fn scene_art_key(scene: Scene) -> String {
    format!("scene-{}", scene.label().to_lowercase())
}

/* =========================
   Inventory
   ========================= */

fn draw_inventory(ui: &mut egui::Ui, app: &mut PetApp, snapshot: &GameState) {
    ui.heading("Inventory");

    if snapshot.inventory.is_empty() {
        ui.label("Nothing here yet — visit the shop.");
        return;
    }

    for item in &snapshot.inventory {
        ui.group(|ui| {
            ui.strong(format!("{} ×{}", item.name, item.quantity));
            ui.small(&item.description);

            let mut boosts = Vec::new();
            if item.energy_boost > 0 {
                boosts.push(format!("+{} energy", item.energy_boost));
            }
            if item.happiness_boost > 0 {
                boosts.push(format!("+{} happiness", item.happiness_boost));
            }
            if !boosts.is_empty() {
                ui.small(boosts.join(", "));
            }

            if ui.button("Use").clicked() {
                app.send(GameAction::UseInventoryItem {
                    item_id: item.id.clone(),
                });
            }
        });
    }
}

/* =========================
   Accessories
   ========================= */

fn draw_accessories(ui: &mut egui::Ui, app: &mut PetApp, snapshot: &GameState) {
    ui.heading("Accessories");

    if snapshot.accessories.is_empty() {
        ui.label("No accessories owned yet.");
        return;
    }

    for kind in [AccessoryKind::Hat, AccessoryKind::Glasses, AccessoryKind::Collar] {
        let owned: Vec<_> = snapshot
            .accessories
            .iter()
            .filter(|a| a.kind == kind)
            .collect();
        if owned.is_empty() {
            continue;
        }

        ui.collapsing(kind.label(), |ui| {
            for acc in owned {
                ui.horizontal(|ui| {
                    ui.label(&acc.name);
                    if acc.equipped {
                        if ui.small_button("Unequip").clicked() {
                            app.send(GameAction::UnequipAccessory { kind });
                        }
                    } else if ui.small_button("Equip").clicked() {
                        app.send(GameAction::EquipAccessory {
                            accessory_id: acc.id.clone(),
                        });
                    }
                });
            }
        });
    }
}

/* =========================
   Daily rewards
   ========================= */

fn draw_rewards(ui: &mut egui::Ui, app: &mut PetApp, snapshot: &GameState) {
    ui.heading("Daily Rewards");

    let rewards = &snapshot.daily_rewards;
    ui.label(format!(
        "Streak: {} (best {})",
        rewards.current_streak, rewards.max_streak
    ));

    for slot in &rewards.rewards {
        let what = match &slot.reward {
            RewardKind::Coins { amount } => format!("{amount} coins"),
            RewardKind::Item { item_id, quantity } => {
                let name = catalog::reward_item(item_id)
                    .map(|i| i.name)
                    .unwrap_or_else(|| item_id.clone());
                format!("{quantity}× {name}")
            }
        };
        let mark = if slot.claimed { "✔" } else { "·" };
        ui.label(format!("{mark} Day {} — {what}", slot.day));
    }

    let claimable = !calendar::is_same_day(rewards.last_claim_date, engine::now_ms());
    ui.add_space(6.0);
    if ui
        .add_enabled(claimable, egui::Button::new("Claim today's reward"))
        .clicked()
    {
        app.send(GameAction::ClaimDailyReward);
    }
    if !claimable {
        ui.small("Come back tomorrow!");
    }
}

/* =========================
   Locations
   ========================= */

fn draw_locations(ui: &mut egui::Ui, app: &mut PetApp, snapshot: &GameState) {
    ui.heading("Locations");

    for scene in Scene::ALL {
        ui.group(|ui| {
            ui.strong(scene.label());

            if snapshot.unlocked_scenes.is_unlocked(scene) {
                ui.horizontal(|ui| {
                    if scene == snapshot.current_scene {
                        ui.label("Currently here");
                    } else if ui.button("Go here").clicked() {
                        app.send(GameAction::SetScene { scene });
                    }
                    if ui.small_button("🎨").on_hover_text("Generate backdrop").clicked() {
                        request_scene_art(ui.ctx(), app, scene);
                    }
                });
            } else {
                let cost = catalog::scene_unlock_cost(scene);
                let unlock = ui.add_enabled(
                    snapshot.coins >= cost,
                    egui::Button::new(format!("Unlock — {}", format_number(cost))),
                );
                if unlock.clicked() {
                    app.send(GameAction::UnlockScene { scene, cost });
                }
            }
        });
    }
}
