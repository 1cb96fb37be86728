use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::model::catalog::ShopItem;
use crate::model::game_state::{AccessoryKind, Scene};

const BASE_URL: &str = "https://api.vibecodeapp.com";
const GENERATE_ENDPOINT: &str = "/api/storage/generate-image";

const BASE_STYLE: &str = "pixel art style, cute, vibrant colors, for a virtual pet game, \
     doge theme, on transparent background, no text";

#[derive(Serialize)]
struct GenerateImageRequest {
    prompt: String,
    options: GenerateImageOptions,
}

#[derive(Serialize)]
struct GenerateImageOptions {
    size: String,
    quality: String,
    format: String,
}

#[derive(Deserialize)]
struct GenerateImageResponse {
    success: bool,
    data: Option<GeneratedImage>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedImage {
    image_url: String,
}

/// Prompt for a shop item's art, keyed off its category.
pub fn item_prompt(item: &ShopItem) -> String {
    match item {
        ShopItem::Food { name, .. } => {
            format!("A cute {name} item for dogs, dog food or treat, {BASE_STYLE}")
        }
        ShopItem::Toy { name, .. } => {
            format!("A colorful {name} dog toy, {BASE_STYLE}")
        }
        ShopItem::Accessory { name, kind, .. } => match kind {
            AccessoryKind::Hat => {
                format!("A cute {name} hat for a dog to wear on its head, {BASE_STYLE}")
            }
            AccessoryKind::Glasses => {
                format!("Cute {name} glasses for a dog to wear, {BASE_STYLE}")
            }
            AccessoryKind::Collar => {
                format!("A fancy {name} collar for dogs, {BASE_STYLE}")
            }
        },
        ShopItem::CreditPack { name, .. } => {
            format!("A glowing {name} token stack for a virtual pet game, {BASE_STYLE}")
        }
    }
}

/// Prompt for a scene backdrop.
pub fn scene_prompt(scene: Scene) -> String {
    let setting = match scene {
        Scene::Warehouse => "a cozy warehouse interior with crates and warm lamps",
        Scene::Park => "a sunny park with trees, grass and a small pond",
        Scene::Town => "a friendly small-town street with shops",
        Scene::City => "a lively city skyline at dusk with neon signs",
    };
    format!("A wide background of {setting}, {BASE_STYLE}")
}

/// Ask the generation endpoint for an image, returning its URL.
pub fn generate_image(prompt: &str) -> Result<String> {
    let client = Client::new();

    let req = GenerateImageRequest {
        prompt: prompt.to_string(),
        options: GenerateImageOptions {
            size: "1024x1024".into(),
            quality: "medium".into(),
            format: "png".into(),
        },
    };

    let resp: GenerateImageResponse = client
        .post(format!("{BASE_URL}{GENERATE_ENDPOINT}"))
        .json(&req)
        .send()?
        .json()?;

    match resp.data {
        Some(data) if resp.success => Ok(data.image_url),
        _ => Err(anyhow!("image generation returned no image")),
    }
}

/// Decode downloaded bytes into something egui can upload.
pub fn decode_image(bytes: &[u8]) -> Result<egui::ColorImage> {
    let decoded = image::load_from_memory(bytes)?.to_rgba8();
    let size = [decoded.width() as usize, decoded.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, &decoded))
}

fn cache_path(key: &str) -> PathBuf {
    let mut path = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("hashpals");
    fs::create_dir_all(&path).ok();
    path.push(format!("{key}.png"));
    path
}

/// Cached art for a cache key (item id or scene name): disk hit first,
/// otherwise generate, download and remember the bytes.
pub fn cached_art(key: &str, prompt: &str) -> Result<egui::ColorImage> {
    let path = cache_path(key);
    if let Ok(bytes) = fs::read(&path) {
        if let Ok(img) = decode_image(&bytes) {
            return Ok(img);
        }
    }

    let url = generate_image(prompt)?;
    let bytes = Client::new().get(&url).send()?.bytes()?;
    let img = decode_image(&bytes)?;
    let _ = fs::write(&path, &bytes);
    Ok(img)
}
