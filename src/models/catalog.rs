use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RetreatKey {
    Weightloss,
    Vegan,
    Mindfulness,
    Detox,
}

impl RetreatKey {
    pub const ALL: [RetreatKey; 4] = [
        RetreatKey::Weightloss,
        RetreatKey::Vegan,
        RetreatKey::Mindfulness,
        RetreatKey::Detox,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RetreatKey::Weightloss => "weightloss",
            RetreatKey::Vegan => "vegan",
            RetreatKey::Mindfulness => "mindfulness",
            RetreatKey::Detox => "detox",
        }
    }
}

impl fmt::Display for RetreatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RetreatKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RetreatKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ActivityDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub duration_hrs: u8,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ItineraryDay {
    pub day: u8,
    pub title: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Retreat {
    pub id: RetreatKey,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub hero: &'static str,
    pub base_price_per_night: f64,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
    pub activities: &'static [ActivityDefinition],
    pub sample_itinerary: &'static [ItineraryDay],
}

/// Per-package vocabulary for the personalize step.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct RetreatTheme {
    pub goals: &'static [&'static str],
    pub diets: &'static [&'static str],
    pub featured_addons: &'static [&'static str],
    pub tagline: &'static str,
}

/// Flat-priced extra, charged once per booking.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Addon {
    pub id: &'static str,
    pub name: &'static str,
    pub price: f64,
}

pub static RETREATS: [Retreat; 4] = [
    Retreat {
        id: RetreatKey::Weightloss,
        title: "Weight Loss Retreat",
        subtitle: "Reclaim Your Energy",
        hero: "/assets/retreat-weightloss.jpg",
        base_price_per_night: 220.0,
        description: "Transform your body and spirit with guided movement, nourishing cuisine, and mindful daily rituals.",
        highlights: &[
            "Daily movement coaching",
            "Nutrition workshops",
            "Spa & sauna access",
            "1:1 progress consults",
        ],
        activities: &[
            ActivityDefinition { id: "yoga", name: "Morning Yoga Flow", duration_hrs: 1 },
            ActivityDefinition { id: "hike", name: "Guided Forest Hike", duration_hrs: 2 },
            ActivityDefinition { id: "nutrition", name: "Nutrition Masterclass", duration_hrs: 1 },
            ActivityDefinition { id: "ice", name: "Cold Plunge & Sauna", duration_hrs: 1 },
        ],
        sample_itinerary: &[
            ItineraryDay {
                day: 1,
                title: "Arrivals & Reset",
                items: &["Check-in & welcome tea", "Breathwork & light stretch", "Chef's light dinner"],
            },
            ItineraryDay {
                day: 2,
                title: "Metabolic Kickoff",
                items: &["Sunrise yoga", "Fueling right class", "Forest hike & picnic", "Evening sauna"],
            },
            ItineraryDay {
                day: 3,
                title: "Momentum Day",
                items: &["Mobility session", "HIIT-lite circuit", "Cold plunge reset", "Smart carbs demo"],
            },
            ItineraryDay {
                day: 4,
                title: "Integration",
                items: &["Gentle flow", "Goal mapping 1:1", "Farewell brunch"],
            },
        ],
    },
    Retreat {
        id: RetreatKey::Vegan,
        title: "Vegan Wellness",
        subtitle: "Nourish from Within",
        hero: "/assets/retreat-vegan.jpg",
        base_price_per_night: 180.0,
        description: "Plant-powered healing: organic menus, sustainable living, rejuvenating spa practices.",
        highlights: &["Farm-to-table dining", "Fermentation lab", "Herbalism walk", "Sound bath"],
        activities: &[
            ActivityDefinition { id: "farm", name: "Garden Harvest Walk", duration_hrs: 1 },
            ActivityDefinition { id: "cook", name: "Vegan Cooking Studio", duration_hrs: 2 },
            ActivityDefinition { id: "sound", name: "Evening Sound Bath", duration_hrs: 1 },
        ],
        sample_itinerary: &[
            ItineraryDay { day: 1, title: "Root", items: &["Welcome circle", "Garden tasting", "Fireplace stories"] },
            ItineraryDay { day: 2, title: "Bloom", items: &["Sun salutation", "Cooking studio", "Local market visit"] },
            ItineraryDay { day: 3, title: "Thrive", items: &["Herbalism basics", "Forest meditation", "Sound bath"] },
        ],
    },
    Retreat {
        id: RetreatKey::Mindfulness,
        title: "Mindfulness Retreat",
        subtitle: "Find Your Quiet",
        hero: "/assets/retreat-mindfulness.jpg",
        base_price_per_night: 200.0,
        description: "Take space to slow down, breathe deeper, and listen within, fully guided.",
        highlights: &["Meditation coaching", "Silent breakfast", "Journaling corners", "Star-gazing deck"],
        activities: &[
            ActivityDefinition { id: "med", name: "Guided Meditation", duration_hrs: 1 },
            ActivityDefinition { id: "journal", name: "Journaling Practice", duration_hrs: 1 },
            ActivityDefinition { id: "stargaze", name: "Night Sky Gazing", duration_hrs: 1 },
        ],
        sample_itinerary: &[
            ItineraryDay { day: 1, title: "Arrive", items: &["Grounding walk", "Intro to breath", "Early lights out"] },
            ItineraryDay { day: 2, title: "Settle", items: &["Silent breakfast", "Meditation blocks", "Tea ceremony"] },
            ItineraryDay { day: 3, title: "Soften", items: &["Body scan workshop", "Guided journaling", "Stargazing"] },
        ],
    },
    Retreat {
        id: RetreatKey::Detox,
        title: "Digital Detox",
        subtitle: "Unplug to Reconnect",
        hero: "/assets/retreat-detox.jpg",
        base_price_per_night: 160.0,
        description: "Step away from screens and into slow living: long walks, real conversations, deep rest.",
        highlights: &["Phone lockbox", "Campfire socials", "Analog games", "No-work promise"],
        activities: &[
            ActivityDefinition { id: "walk", name: "Coastline Walk", duration_hrs: 2 },
            ActivityDefinition { id: "camp", name: "Campfire Stories", duration_hrs: 1 },
            ActivityDefinition { id: "paint", name: "Analog Art Hour", duration_hrs: 1 },
        ],
        sample_itinerary: &[
            ItineraryDay { day: 1, title: "Exhale", items: &["Digital hand-in", "Forest slow walk", "Campfire tea"] },
            ItineraryDay { day: 2, title: "Play", items: &["Analog art hour", "Kayak cove", "Board-games night"] },
            ItineraryDay { day: 3, title: "Reconnect", items: &["Sunrise stretch", "Beach picnic", "No-screen ceremony"] },
        ],
    },
];

pub static THEMES: [(RetreatKey, RetreatTheme); 4] = [
    (
        RetreatKey::Weightloss,
        RetreatTheme {
            goals: &["Lose 2–3kg safely", "Boost metabolism", "Reset sleep & energy", "Learn fat-smart meals"],
            diets: &["High-protein", "Low-carb", "Dairy-free", "Gluten-free"],
            featured_addons: &["spa", "private"],
            tagline: "Metabolic momentum meets gentle coaching.",
        },
    ),
    (
        RetreatKey::Vegan,
        RetreatTheme {
            goals: &["Plant-powered reset", "Master 5 vegan recipes", "Gut health focus", "Sustainable habits"],
            diets: &["Vegan", "Gluten-free", "Nut-free", "Soy-light"],
            featured_addons: &["photos", "airport"],
            tagline: "Farm-to-table flavors, mind-to-body renewal.",
        },
    ),
    (
        RetreatKey::Mindfulness,
        RetreatTheme {
            goals: &["Daily meditation habit", "Lower stress baseline", "Journal with clarity", "Better sleep quality"],
            diets: &["Light vegetarian", "Caffeine-light", "Dairy-free", "Gluten-free"],
            featured_addons: &["private", "spa"],
            tagline: "Quiet mind. Soft body. Clear next step.",
        },
    ),
    (
        RetreatKey::Detox,
        RetreatTheme {
            goals: &["Unplug fully", "Rebuild routines", "Deep rest schedule", "Nature immersion"],
            diets: &["Whole-food", "Gluten-free", "No added sugar", "Dairy-free"],
            featured_addons: &["airport", "photos"],
            tagline: "Slow living, real presence, true reset.",
        },
    ),
];

pub static ADDONS: [Addon; 4] = [
    Addon { id: "airport", name: "Airport Transfers", price: 50.0 },
    Addon { id: "spa", name: "90-min Deep Tissue Spa", price: 95.0 },
    Addon { id: "photos", name: "Retreat Photo Session", price: 120.0 },
    Addon { id: "private", name: "Private Coaching 60m", price: 70.0 },
];
