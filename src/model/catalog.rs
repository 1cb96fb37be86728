use serde::{Deserialize, Serialize};

use crate::model::game_state::{AccessoryKind, InventoryItem, ItemKind, Scene};

/// A purchasable entry in the shop. Each category carries only the fields
/// that matter for its branch of the purchase logic, so `Buy` can match
/// exhaustively instead of poking at optional fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShopItem {
    Food {
        id: String,
        name: String,
        description: String,
        cost: u32,
        energy_boost: u32,
        happiness_boost: u32,
    },
    Toy {
        id: String,
        name: String,
        description: String,
        cost: u32,
        happiness_boost: u32,
    },
    Accessory {
        id: String,
        name: String,
        description: String,
        cost: u32,
        kind: AccessoryKind,
    },
    CreditPack {
        id: String,
        name: String,
        description: String,
        cost: u32,
        credits: u32,
    },
}

impl ShopItem {
    pub fn id(&self) -> &str {
        match self {
            ShopItem::Food { id, .. }
            | ShopItem::Toy { id, .. }
            | ShopItem::Accessory { id, .. }
            | ShopItem::CreditPack { id, .. } => id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ShopItem::Food { name, .. }
            | ShopItem::Toy { name, .. }
            | ShopItem::Accessory { name, .. }
            | ShopItem::CreditPack { name, .. } => name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            ShopItem::Food { description, .. }
            | ShopItem::Toy { description, .. }
            | ShopItem::Accessory { description, .. }
            | ShopItem::CreditPack { description, .. } => description,
        }
    }

    pub fn cost(&self) -> u32 {
        match self {
            ShopItem::Food { cost, .. }
            | ShopItem::Toy { cost, .. }
            | ShopItem::Accessory { cost, .. }
            | ShopItem::CreditPack { cost, .. } => *cost,
        }
    }

    pub fn category_label(&self) -> &'static str {
        match self {
            ShopItem::Food { .. } => "Food",
            ShopItem::Toy { .. } => "Toy",
            ShopItem::Accessory { .. } => "Accessory",
            ShopItem::CreditPack { .. } => "Credits",
        }
    }
}

fn food(id: &str, name: &str, description: &str, cost: u32, energy: u32, happiness: u32) -> ShopItem {
    ShopItem::Food {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        cost,
        energy_boost: energy,
        happiness_boost: happiness,
    }
}

fn toy(id: &str, name: &str, description: &str, cost: u32, happiness: u32) -> ShopItem {
    ShopItem::Toy {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        cost,
        happiness_boost: happiness,
    }
}

fn accessory(id: &str, name: &str, description: &str, cost: u32, kind: AccessoryKind) -> ShopItem {
    ShopItem::Accessory {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        cost,
        kind,
    }
}

fn credits(id: &str, name: &str, description: &str, cost: u32, amount: u32) -> ShopItem {
    ShopItem::CreditPack {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        cost,
        credits: amount,
    }
}

/// The full shop catalog. Static configuration consumed by the engine,
/// never produced by it.
pub fn shop_items() -> Vec<ShopItem> {
    vec![
        food("1", "Premium Kibble", "High quality food that boosts energy significantly", 50, 40, 10),
        food("5", "Energy Treat", "Special treat that quickly restores energy", 30, 20, 0),
        food("7", "Luxury Feast", "Gourmet meal for your pet", 75, 30, 25),
        toy("2", "Squeaky Bone", "A fun toy that makes your pet happy", 80, 30),
        toy("6", "Interactive Ball", "A bouncy ball to play with", 60, 25),
        toy("8", "Mining Pickaxe", "A toy that simulates mining", 100, 35),
        accessory("3", "Dogecoin Hat", "Stylish hat for your crypto-loving pet", 150, AccessoryKind::Hat),
        accessory("9", "Miner Hat", "A hat with a headlamp for mining in style", 200, AccessoryKind::Hat),
        accessory("10", "Cool Sunglasses", "Stylish sunglasses for your pet", 120, AccessoryKind::Glasses),
        accessory("11", "Crypto Visor", "Futuristic glasses for monitoring crypto prices", 180, AccessoryKind::Glasses),
        accessory("12", "Diamond Collar", "Luxurious collar with diamond studs", 250, AccessoryKind::Collar),
        accessory("13", "Bitcoin Collar", "A collar with Bitcoin symbols", 220, AccessoryKind::Collar),
        credits("c1", "Basic Credit Pack", "5 AI conversation credits for your pet", 50, 5),
        credits("c2", "Premium Credit Pack", "15 AI conversation credits for your pet", 120, 15),
        credits("c3", "Ultimate Credit Pack", "50 AI conversation credits for your pet", 350, 50),
    ]
}

/// Item definitions granted by the daily-reward calendar. Not sold in the
/// shop, so the claim path synthesizes them from here.
pub fn reward_item(item_id: &str) -> Option<InventoryItem> {
    match item_id {
        "premium_food" => Some(InventoryItem {
            id: "premium_food".into(),
            name: "Premium Food".into(),
            description: "High quality food that boosts energy significantly".into(),
            kind: ItemKind::Food,
            energy_boost: 40,
            happiness_boost: 10,
            quantity: 0,
        }),
        "super_toy" => Some(InventoryItem {
            id: "super_toy".into(),
            name: "Super Toy".into(),
            description: "A fun toy that makes your pet happy".into(),
            kind: ItemKind::Toy,
            energy_boost: 0,
            happiness_boost: 30,
            quantity: 0,
        }),
        _ => None,
    }
}

/// One-time unlock price per scene. Warehouse is free and starts unlocked.
pub fn scene_unlock_cost(scene: Scene) -> u32 {
    match scene {
        Scene::Warehouse => 0,
        Scene::Park => 200,
        Scene::Town => 500,
        Scene::City => 1000,
    }
}
