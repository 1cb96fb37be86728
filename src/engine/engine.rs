use std::sync::mpsc::{Receiver, Sender};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::engine::apply_action::{apply_action, use_ai_credit};
use crate::engine::chat_client;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::engine::save_io::SaveStore;
use crate::model::action::ActionOutcome;
use crate::model::game_save::GameSave;
use crate::model::game_state::{GameState, TimestampMs};
use crate::model::mood::PetMood;

pub fn now_ms() -> TimestampMs {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Owns the authoritative in-memory state. Commands arrive over the channel
/// one at a time, each transition runs to completion, and the whole record
/// is saved and re-broadcast after every applied one.
pub struct Engine {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
    state: GameState,
    store: Box<dyn SaveStore>,
}

impl Engine {
    pub fn new(
        rx: Receiver<EngineCommand>,
        tx: Sender<EngineResponse>,
        store: Box<dyn SaveStore>,
    ) -> Self {
        // Storage is read once here; from now on the in-memory record wins.
        let state = store
            .load()
            .map(|save| save.state)
            .unwrap_or_else(|| GameState::new(now_ms()));

        Self { rx, tx, state, store }
    }

    pub fn run(&mut self) {
        let _ = self.tx.send(EngineResponse::StateChanged {
            snapshot: self.state.clone(),
        });

        while let Ok(cmd) = self.rx.recv() {
            match cmd {
                EngineCommand::Apply(action) => {
                    let name = action.short_name();
                    match apply_action(&mut self.state, action, now_ms()) {
                        ActionOutcome::Applied => {
                            self.store.save(&GameSave::new(self.state.clone()));
                            let _ = self.tx.send(EngineResponse::StateChanged {
                                snapshot: self.state.clone(),
                            });
                        }
                        ActionOutcome::Rejected { reason } => {
                            let _ = self.tx.send(EngineResponse::ActionRejected {
                                action: name,
                                reason,
                            });
                        }
                    }
                }

                EngineCommand::Chat => {
                    if !use_ai_credit(&mut self.state, now_ms()) {
                        let _ = self.tx.send(EngineResponse::PetSaid {
                            text: "I need AI credits to talk!".into(),
                        });
                        continue;
                    }
                    self.store.save(&GameSave::new(self.state.clone()));
                    let _ = self.tx.send(EngineResponse::StateChanged {
                        snapshot: self.state.clone(),
                    });

                    let mood = PetMood::of(self.state.happiness, self.state.energy);
                    let text = chat_client::pet_reply(mood)
                        .unwrap_or_else(|_| "Woof! (AI error)".into());
                    let _ = self.tx.send(EngineResponse::PetSaid { text });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::engine::save_io::memory::MemoryStore;
    use crate::model::action::GameAction;

    fn run_engine(
        store: MemoryStore,
        commands: Vec<EngineCommand>,
    ) -> Vec<EngineResponse> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        for cmd in commands {
            cmd_tx.send(cmd).unwrap();
        }
        drop(cmd_tx); // run() drains the queue and returns

        let mut engine = Engine::new(cmd_rx, resp_tx, Box::new(store));
        engine.run();

        resp_rx.try_iter().collect()
    }

    #[test]
    fn startup_emits_a_snapshot_of_fresh_state() {
        let responses = run_engine(MemoryStore::default(), vec![]);

        assert_eq!(responses.len(), 1);
        match &responses[0] {
            EngineResponse::StateChanged { snapshot } => {
                assert_eq!(snapshot.coins, 100);
            }
            _ => panic!("expected a snapshot"),
        }
    }

    #[test]
    fn applied_actions_save_and_broadcast() {
        let store = MemoryStore::default();
        let responses = run_engine(
            store.clone(),
            vec![EngineCommand::Apply(GameAction::EarnCoins { amount: 25 })],
        );

        // startup snapshot + one change
        assert_eq!(responses.len(), 2);
        match &responses[1] {
            EngineResponse::StateChanged { snapshot } => assert_eq!(snapshot.coins, 125),
            _ => panic!("expected a snapshot"),
        }
        assert_eq!(store.saved().unwrap().state.coins, 125);
    }

    #[test]
    fn rejected_actions_report_without_saving() {
        let store = MemoryStore::default();
        let responses = run_engine(
            store.clone(),
            vec![EngineCommand::Apply(GameAction::UseInventoryItem {
                item_id: "nothing".into(),
            })],
        );

        assert_eq!(responses.len(), 2);
        match &responses[1] {
            EngineResponse::ActionRejected { action, reason } => {
                assert_eq!(*action, "UseInventoryItem");
                assert!(reason.contains("nothing"));
            }
            _ => panic!("expected a rejection"),
        }
        assert!(store.saved().is_none());
    }

    #[test]
    fn chat_without_credits_answers_with_the_canned_line() {
        let store = MemoryStore::default();
        let mut state = GameState::new(1_000);
        state.ai_credits = 0;
        store.preload(GameSave::new(state));

        let responses = run_engine(store.clone(), vec![EngineCommand::Chat]);

        assert_eq!(responses.len(), 2);
        match &responses[1] {
            EngineResponse::PetSaid { text } => {
                assert_eq!(text, "I need AI credits to talk!");
            }
            _ => panic!("expected a chat line"),
        }
        // the credit gate rejected, so nothing new was persisted
        assert_eq!(store.saved().unwrap().state.ai_credits, 0);
    }

    #[test]
    fn engine_hydrates_from_the_store() {
        let store = MemoryStore::default();
        let mut state = GameState::new(1_000);
        state.coins = 777;
        store.preload(GameSave::new(state));

        let responses = run_engine(store, vec![]);
        match &responses[0] {
            EngineResponse::StateChanged { snapshot } => assert_eq!(snapshot.coins, 777),
            _ => panic!("expected a snapshot"),
        }
    }
}
