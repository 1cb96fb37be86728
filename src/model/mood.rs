/// Display mood derived from the two care stats. Low energy wins over
/// happiness: a tired pet looks sleepy no matter how pleased it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetMood {
    Happy,
    Neutral,
    Sad,
    Sleepy,
    Excited,
}

impl PetMood {
    pub fn of(happiness: f64, energy: f64) -> Self {
        if energy < 30.0 {
            return PetMood::Sleepy;
        }
        if happiness > 80.0 {
            PetMood::Excited
        } else if happiness > 60.0 {
            PetMood::Happy
        } else if happiness > 40.0 {
            PetMood::Neutral
        } else {
            PetMood::Sad
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PetMood::Happy => "Happy",
            PetMood::Neutral => "Neutral",
            PetMood::Sad => "Sad",
            PetMood::Sleepy => "Sleepy",
            PetMood::Excited => "Excited",
        }
    }

    pub fn face(&self) -> &'static str {
        match self {
            PetMood::Happy => "(^ω^)",
            PetMood::Neutral => "(・ω・)",
            PetMood::Sad => "(;ω;)",
            PetMood::Sleepy => "(-ω-) zzz",
            PetMood::Excited => "(☆ω☆)!",
        }
    }
}
