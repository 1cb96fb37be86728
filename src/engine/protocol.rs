use crate::model::action::GameAction;
use crate::model::game_state::GameState;

pub enum EngineCommand {
    Apply(GameAction),

    /// Spend one AI credit and have the pet say something.
    Chat,
}

pub enum EngineResponse {
    /// Emitted after every applied transition (and once at startup) with a
    /// read-only snapshot of the whole record.
    StateChanged { snapshot: GameState },

    /// The action was a no-op; the reason is for player feedback.
    ActionRejected {
        action: &'static str,
        reason: String,
    },

    /// The pet's chat line, AI-generated or canned.
    PetSaid { text: String },
}
