use serde::{Deserialize, Serialize};

use crate::model::catalog::ShopItem;
use crate::model::game_state::{AccessoryKind, Scene};

/// Every transition the engine knows how to apply. The UI never mutates
/// state directly; it sends one of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameAction {
    Feed,
    Play,
    Pet,

    EarnCoins { amount: u32 },
    AddAiCredits { amount: u32 },
    UseAiCredit,

    Buy { item: ShopItem },
    UseInventoryItem { item_id: String },
    EquipAccessory { accessory_id: String },
    UnequipAccessory { kind: AccessoryKind },
    UpgradeMiningSpeed,

    ClaimDailyReward,

    StartMining,
    StopMining,

    SetScene { scene: Scene },
    UnlockScene { scene: Scene, cost: u32 },

    UpdateHappiness,
    UpdateMiningEnergy,
    UpdateLastActive,

    ResetStats,
}

impl GameAction {
    pub fn short_name(&self) -> &'static str {
        match self {
            GameAction::Feed => "Feed",
            GameAction::Play => "Play",
            GameAction::Pet => "Pet",
            GameAction::EarnCoins { .. } => "EarnCoins",
            GameAction::AddAiCredits { .. } => "AddAiCredits",
            GameAction::UseAiCredit => "UseAiCredit",
            GameAction::Buy { .. } => "Buy",
            GameAction::UseInventoryItem { .. } => "UseInventoryItem",
            GameAction::EquipAccessory { .. } => "EquipAccessory",
            GameAction::UnequipAccessory { .. } => "UnequipAccessory",
            GameAction::UpgradeMiningSpeed => "UpgradeMiningSpeed",
            GameAction::ClaimDailyReward => "ClaimDailyReward",
            GameAction::StartMining => "StartMining",
            GameAction::StopMining => "StopMining",
            GameAction::SetScene { .. } => "SetScene",
            GameAction::UnlockScene { .. } => "UnlockScene",
            GameAction::UpdateHappiness => "UpdateHappiness",
            GameAction::UpdateMiningEnergy => "UpdateMiningEnergy",
            GameAction::UpdateLastActive => "UpdateLastActive",
            GameAction::ResetStats => "ResetStats",
        }
    }
}

/// Outcome of one transition. Rejected means the state is untouched; the
/// reason is for the player, not for control flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Applied,
    Rejected { reason: String },
}

impl ActionOutcome {
    pub fn rejected(reason: impl Into<String>) -> Self {
        ActionOutcome::Rejected { reason: reason.into() }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, ActionOutcome::Applied)
    }
}
