use eframe::egui;

use crate::model::mood::PetMood;
use crate::ui::app::PetApp;

pub fn draw_center_panel(ctx: &egui::Context, app: &mut PetApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let Some(snapshot) = app.ui.snapshot.clone() else {
            ui.centered_and_justified(|ui| {
                ui.label("Waking up your pet…");
            });
            return;
        };

        ui.vertical_centered(|ui| {
            ui.heading(snapshot.current_scene.label());

            let scene_key = super::right_panel::scene_art_key(snapshot.current_scene);
            if let Some(tex) = app.ui.art.get(&scene_key) {
                ui.add(egui::Image::new(tex).fit_to_exact_size(egui::vec2(360.0, 200.0)));
            }
            ui.add_space(24.0);

            if let Some((text, _)) = app.ui.pet_says.clone() {
                ui.group(|ui| {
                    ui.label(format!("💬 {text}"));
                });
                ui.add_space(8.0);
            }

            let mood = PetMood::of(snapshot.happiness, snapshot.energy);

            // Tapping the pet is the same as the Pet button.
            let face = egui::RichText::new(mood.face()).size(64.0);
            if ui
                .add(egui::Label::new(face).sense(egui::Sense::click()))
                .on_hover_text("Pet!")
                .clicked()
            {
                app.pet_tap();
            }

            ui.label(mood.label());

            let talk_label = format!("💬 Talk ({} credits)", snapshot.ai_credits);
            if ui.button(talk_label).clicked() {
                app.talk();
            }

            if snapshot.is_mining {
                ui.add_space(8.0);
                ui.label(format!("⛏ mining x{}…", snapshot.mining_speed));
            }

            let equipped: Vec<String> = snapshot
                .accessories
                .iter()
                .filter(|a| a.equipped)
                .map(|a| a.name.clone())
                .collect();
            if !equipped.is_empty() {
                ui.add_space(8.0);
                ui.label(format!("Wearing: {}", equipped.join(", ")));
            }
        });

        /* -------- Toasts -------- */

        ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
            for toast in app.ui.toasts.iter().rev() {
                ui.label(&toast.text);
            }
        });
    });
}
