use serde::{Deserialize, Serialize};

/// Milliseconds since the Unix epoch. All engine bookkeeping uses this unit.
pub type TimestampMs = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessoryKind {
    Hat,
    Glasses,
    Collar,
}

impl AccessoryKind {
    pub fn label(&self) -> &'static str {
        match self {
            AccessoryKind::Hat => "Hat",
            AccessoryKind::Glasses => "Glasses",
            AccessoryKind::Collar => "Collar",
        }
    }
}

/// Cosmetic item owned by the pet. Ownership is permanent once purchased;
/// only the equipped flag changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accessory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub kind: AccessoryKind,
    pub equipped: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Food,
    Toy,
}

/// Consumable held in the inventory. Removed entirely when quantity hits 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub kind: ItemKind,
    pub energy_boost: u32,
    pub happiness_boost: u32,
    pub quantity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scene {
    Warehouse,
    Park,
    Town,
    City,
}

impl Scene {
    pub const ALL: [Scene; 4] = [Scene::Warehouse, Scene::Park, Scene::Town, Scene::City];

    pub fn label(&self) -> &'static str {
        match self {
            Scene::Warehouse => "Warehouse",
            Scene::Park => "Park",
            Scene::Town => "Town",
            Scene::City => "City",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnlockedScenes {
    pub warehouse: bool,
    pub park: bool,
    pub town: bool,
    pub city: bool,
}

impl UnlockedScenes {
    pub fn is_unlocked(&self, scene: Scene) -> bool {
        match scene {
            Scene::Warehouse => self.warehouse,
            Scene::Park => self.park,
            Scene::Town => self.town,
            Scene::City => self.city,
        }
    }

    pub fn unlock(&mut self, scene: Scene) {
        match scene {
            Scene::Warehouse => self.warehouse = true,
            Scene::Park => self.park = true,
            Scene::Town => self.town = true,
            Scene::City => self.city = true,
        }
    }
}

impl Default for UnlockedScenes {
    fn default() -> Self {
        Self {
            warehouse: true,
            park: false,
            town: false,
            city: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardKind {
    Coins { amount: u32 },
    Item { item_id: String, quantity: u32 },
}

/// One slot in the fixed 7-day reward calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReward {
    pub day: u32,
    pub claimed: bool,
    pub reward: RewardKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRewardState {
    /// Local midnight of the last claim, epoch ms. 0 = never claimed.
    pub last_claim_date: TimestampMs,
    pub current_streak: u32,
    pub max_streak: u32,
    pub rewards: Vec<DailyReward>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedingState {
    pub daily_allowance: u32,
    pub remaining_allowance: u32,
    pub last_allowance_date: TimestampMs,
}

/// The one persisted aggregate. Every transition is a synchronous
/// read-modify-write of this whole record; there is no other state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub coins: u32,
    pub happiness: f64,
    pub energy: f64,
    pub ai_credits: u32,

    pub last_fed: TimestampMs,
    pub last_played: TimestampMs,
    pub last_active: TimestampMs,
    pub last_happiness_update: TimestampMs,
    pub last_energy_update: TimestampMs,

    pub is_mining: bool,
    pub mining_speed: u32,
    pub mining_upgrade_cost: u32,

    pub accessories: Vec<Accessory>,
    pub inventory: Vec<InventoryItem>,

    pub current_scene: Scene,
    pub unlocked_scenes: UnlockedScenes,

    pub daily_rewards: DailyRewardState,
    pub feeding: FeedingState,
}

/// The 7-day calendar the streak wraps through indefinitely.
pub fn initial_reward_schedule() -> Vec<DailyReward> {
    vec![
        DailyReward { day: 1, claimed: false, reward: RewardKind::Coins { amount: 50 } },
        DailyReward { day: 2, claimed: false, reward: RewardKind::Coins { amount: 100 } },
        DailyReward {
            day: 3,
            claimed: false,
            reward: RewardKind::Item { item_id: "premium_food".into(), quantity: 1 },
        },
        DailyReward { day: 4, claimed: false, reward: RewardKind::Coins { amount: 150 } },
        DailyReward { day: 5, claimed: false, reward: RewardKind::Coins { amount: 200 } },
        DailyReward {
            day: 6,
            claimed: false,
            reward: RewardKind::Item { item_id: "super_toy".into(), quantity: 1 },
        },
        DailyReward { day: 7, claimed: false, reward: RewardKind::Coins { amount: 500 } },
    ]
}

impl GameState {
    /// Fresh state for a first launch (and for resetStats).
    pub fn new(now: TimestampMs) -> Self {
        Self {
            coins: 100,
            happiness: 70.0,
            energy: 80.0,
            ai_credits: 5,

            last_fed: now,
            last_played: now,
            last_active: now,
            last_happiness_update: now,
            last_energy_update: now,

            is_mining: false,
            mining_speed: 1,
            mining_upgrade_cost: 100,

            accessories: Vec::new(),
            inventory: Vec::new(),

            current_scene: Scene::Warehouse,
            unlocked_scenes: UnlockedScenes::default(),

            daily_rewards: DailyRewardState {
                last_claim_date: 0,
                current_streak: 0,
                max_streak: 0,
                rewards: initial_reward_schedule(),
            },
            feeding: FeedingState {
                daily_allowance: 3,
                remaining_allowance: 3,
                last_allowance_date: now,
            },
        }
    }

    pub fn inventory_item(&self, item_id: &str) -> Option<&InventoryItem> {
        self.inventory.iter().find(|i| i.id == item_id)
    }

    pub fn accessory(&self, accessory_id: &str) -> Option<&Accessory> {
        self.accessories.iter().find(|a| a.id == accessory_id)
    }

    pub fn equipped(&self, kind: AccessoryKind) -> Option<&Accessory> {
        self.accessories.iter().find(|a| a.kind == kind && a.equipped)
    }
}

/// Stats are displayed (and stored) with two decimals, matching how decay
/// amounts accumulate.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Clamp a stat into [0, 100] and round.
pub fn clamp_stat(value: f64) -> f64 {
    round2(value.clamp(0.0, 100.0))
}
