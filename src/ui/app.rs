use eframe::egui;
use std::collections::HashMap;
use std::sync::mpsc::{self, Sender};
use std::time::{Duration, Instant};

use crate::engine::engine::Engine;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::engine::rewards;
use crate::engine::save_io::JsonFileStore;
use crate::model::action::GameAction;
use crate::model::catalog::{self, ShopItem};
use crate::model::game_state::GameState;
use crate::ui::settings::UiSettings;
use crate::ui::settings_io;

/// Polling cadence for the two lazy decay functions.
const DECAY_POLL: Duration = Duration::from_secs(30);

const TOAST_LIFETIME: Duration = Duration::from_secs(4);

const SPEECH_LIFETIME: Duration = Duration::from_secs(10);

/* =========================
   Tabs
   ========================= */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RightTab {
    Shop,
    Inventory,
    Accessories,
    Rewards,
    Locations,
}

impl Default for RightTab {
    fn default() -> Self {
        RightTab::Shop
    }
}

/* =========================
   UI State
   ========================= */

pub struct Toast {
    pub text: String,
    pub at: Instant,
}

pub struct UiState {
    /// Last snapshot the engine broadcast. None until the first response.
    pub snapshot: Option<GameState>,
    pub toasts: Vec<Toast>,

    pub right_tab: RightTab,
    pub shop: Vec<ShopItem>,

    /// Speech bubble above the pet, cleared after a while.
    pub pet_says: Option<(String, Instant)>,

    /// Generated art, keyed by item id / scene name.
    pub art: HashMap<String, egui::TextureHandle>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            snapshot: None,
            toasts: Vec::new(),
            right_tab: RightTab::default(),
            shop: catalog::shop_items(),
            pet_says: None,
            art: HashMap::new(),
        }
    }
}

/* =========================
   App
   ========================= */

pub struct PetApp {
    pub ui: UiState,
    pub settings: UiSettings,

    cmd_tx: Sender<EngineCommand>,
    resp_rx: mpsc::Receiver<EngineResponse>,

    /// None until the first poll, so decay runs immediately on launch.
    last_decay_poll: Option<Instant>,
    last_mining_tick: Instant,
}

impl PetApp {
    pub fn new() -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        std::thread::spawn(move || {
            let store = Box::new(JsonFileStore::in_data_dir());
            let mut engine = Engine::new(cmd_rx, resp_tx, store);
            engine.run();
        });

        let app = Self {
            ui: UiState::default(),
            settings: settings_io::load_settings(),
            cmd_tx,
            resp_rx,
            last_decay_poll: None,
            last_mining_tick: Instant::now(),
        };
        // Mark the session start on whatever record the engine hydrated.
        app.send(GameAction::UpdateLastActive);
        app
    }

    pub fn send(&self, action: GameAction) {
        let _ = self.cmd_tx.send(EngineCommand::Apply(action));
    }

    fn drain_responses(&mut self) {
        while let Ok(resp) = self.resp_rx.try_recv() {
            match resp {
                EngineResponse::StateChanged { snapshot } => {
                    self.ui.snapshot = Some(snapshot);
                }
                EngineResponse::ActionRejected { reason, .. } => {
                    self.ui.toasts.push(Toast {
                        text: reason,
                        at: Instant::now(),
                    });
                }
                EngineResponse::PetSaid { text } => {
                    self.ui.pet_says = Some((text, Instant::now()));
                }
            }
        }
    }

    /// Ask the pet to say something. Costs one AI credit; the reply arrives
    /// as a `PetSaid` response once the engine is done talking to the model.
    pub fn talk(&mut self) {
        let _ = self.cmd_tx.send(EngineCommand::Chat);
        self.ui.pet_says = Some(("…".into(), Instant::now()));
    }

    /// Decay is lazy: the engine computes it from elapsed wall-clock time,
    /// this host only has to keep asking. Runs once immediately at launch
    /// to catch up after the app was closed.
    fn poll_decay(&mut self) {
        let due = self
            .last_decay_poll
            .map_or(true, |t| t.elapsed() >= DECAY_POLL);
        if !due {
            return;
        }
        self.send(GameAction::UpdateHappiness);
        self.send(GameAction::UpdateMiningEnergy);
        self.last_decay_poll = Some(Instant::now());
    }

    /// The single mining reward timer this host owns.
    fn poll_mining_tick(&mut self) {
        let Some(snapshot) = &self.ui.snapshot else {
            return;
        };
        if !snapshot.is_mining {
            self.last_mining_tick = Instant::now();
            return;
        }

        let interval = rewards::mining_tick_interval_ms(snapshot.mining_speed);
        if self.last_mining_tick.elapsed() < Duration::from_millis(interval) {
            return;
        }

        let amount = rewards::roll_mining_reward(&mut rand::thread_rng(), snapshot.mining_speed);
        self.send(GameAction::EarnCoins { amount });
        self.toast(format!("⛏ +{amount} coins"));
        self.last_mining_tick = Instant::now();
    }

    /// A pet tap: the engine bumps happiness, and the host sometimes rolls
    /// a small coin bonus on top.
    pub fn pet_tap(&mut self) {
        self.send(GameAction::Pet);
        if let Some(amount) = rewards::roll_pet_bonus(&mut rand::thread_rng()) {
            self.send(GameAction::EarnCoins { amount });
            self.toast(format!("+{amount} coins!"));
        }
    }

    pub fn toast(&mut self, text: impl Into<String>) {
        self.ui.toasts.push(Toast {
            text: text.into(),
            at: Instant::now(),
        });
    }
}

impl eframe::App for PetApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.settings.ui_scale);

        self.drain_responses();
        self.poll_decay();
        self.poll_mining_tick();

        self.ui.toasts.retain(|t| t.at.elapsed() < TOAST_LIFETIME);
        if matches!(&self.ui.pet_says, Some((_, at)) if at.elapsed() > SPEECH_LIFETIME) {
            self.ui.pet_says = None;
        }

        super::left_panel::draw_left_panel(ctx, self);
        super::right_panel::draw_right_panel(ctx, self);
        super::center_panel::draw_center_panel(ctx, self);

        // Keep the timers moving even when the player is idle.
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

/* =========================
   UI Helpers
   ========================= */

pub fn format_number(n: u32) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_abbreviate_like_the_hud() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_500), "1.5K");
        assert_eq!(format_number(2_000_000), "2.0M");
    }
}
