use eframe::egui;

use crate::model::action::GameAction;
use crate::model::mood::PetMood;
use crate::ui::app::{format_number, PetApp};
use crate::ui::settings_io;

pub fn draw_left_panel(ctx: &egui::Context, app: &mut PetApp) {
    egui::SidePanel::left("left")
        .resizable(false)
        .default_width(200.0)
        .show(ctx, |ui| {
            let Some(snapshot) = app.ui.snapshot.clone() else {
                ui.label("Loading…");
                return;
            };

            ui.heading("HashPals");
            ui.separator();

            ui.horizontal(|ui| {
                ui.colored_label(app.settings.color("coins"), "🪙");
                ui.label(format_number(snapshot.coins));
                ui.colored_label(app.settings.color("credits"), "💬");
                ui.label(snapshot.ai_credits.to_string());
            });

            stat_bar(ui, app, "happiness", "Happiness", snapshot.happiness);
            stat_bar(ui, app, "energy", "Energy", snapshot.energy);
            ui.label(format!(
                "Mood: {}",
                PetMood::of(snapshot.happiness, snapshot.energy).label()
            ));

            ui.separator();

            /* -------- Care -------- */

            let feeds_left = snapshot.feeding.remaining_allowance;
            if ui.button(format!("🍖 Feed ({feeds_left} left)")).clicked() {
                app.send(GameAction::Feed);
            }
            if ui.button("🎾 Play").clicked() {
                app.send(GameAction::Play);
            }
            if ui.button("✋ Pet").clicked() {
                app.pet_tap();
            }

            ui.separator();

            /* -------- Mining -------- */

            ui.label(format!("Mining x{}", snapshot.mining_speed));
            if snapshot.is_mining {
                if ui.button("⛔ Stop mining").clicked() {
                    app.send(GameAction::StopMining);
                }
            } else if ui.button("⛏ Start mining").clicked() {
                app.send(GameAction::StartMining);
            }

            if snapshot.mining_speed < 5 {
                let label = format!(
                    "⬆ Upgrade ({} coins)",
                    format_number(snapshot.mining_upgrade_cost)
                );
                if ui.button(label).clicked() {
                    app.send(GameAction::UpgradeMiningSpeed);
                }
            } else {
                ui.label("Mining speed maxed");
            }

            ui.separator();

            /* -------- Options -------- */

            ui.collapsing("Options", |ui| {
                ui.label("UI Scale");
                let slider = ui.add(egui::Slider::new(&mut app.settings.ui_scale, 0.75..=2.0));
                if slider.changed() {
                    settings_io::save_settings(&app.settings);
                }

                ui.label("Bar colors");
                for key in ["happiness", "energy", "coins", "credits"] {
                    ui.horizontal(|ui| {
                        let mut color = app.settings.color(key);
                        if ui.color_edit_button_srgba(&mut color).changed() {
                            app.settings.set_color(key, color);
                            settings_io::save_settings(&app.settings);
                        }
                        ui.label(key);
                    });
                }

                if ui.button("Reset pet").clicked() {
                    app.send(GameAction::ResetStats);
                }
            });
        });
}

fn stat_bar(ui: &mut egui::Ui, app: &PetApp, key: &str, label: &str, value: f64) {
    ui.label(label);
    ui.add(
        egui::ProgressBar::new((value / 100.0) as f32)
            .fill(app.settings.color(key))
            .text(format!("{value:.0}")),
    );
}
