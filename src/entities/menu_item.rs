// 🍽️ Menu Item Entity - a dish on the menu with stable identity
//
// "The UUID is the dish. Everything else is what we said about it at creation."
//
// - Course is a closed enumeration (no free-text categories)
// - Intensity is derived from price ONCE, when the item is created
// - Items are never edited in place; remove and re-add instead

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

// ============================================================================
// ITEM ID
// ============================================================================

/// Opaque identifier of a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Fresh random identifier
    pub fn new() -> Self {
        ItemId(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(ItemId)
    }
}

// ============================================================================
// COURSE
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Course {
    /// Served first
    #[default]
    Starter,

    /// Main course
    Main,

    /// Served last
    Dessert,
}

impl Course {
    /// Every course, in menu order
    pub const ALL: [Course; 3] = [Course::Starter, Course::Main, Course::Dessert];

    pub fn as_str(&self) -> &'static str {
        match self {
            Course::Starter => "STARTER",
            Course::Main => "MAIN",
            Course::Dessert => "DESSERT",
        }
    }

    /// Next course in menu order (wraps around)
    pub fn next(&self) -> Self {
        match self {
            Course::Starter => Course::Main,
            Course::Main => Course::Dessert,
            Course::Dessert => Course::Starter,
        }
    }

    /// Previous course in menu order (wraps around)
    pub fn previous(&self) -> Self {
        match self {
            Course::Starter => Course::Dessert,
            Course::Main => Course::Starter,
            Course::Dessert => Course::Main,
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown course {0:?}: expected STARTER, MAIN or DESSERT")]
pub struct ParseCourseError(pub String);

impl FromStr for Course {
    type Err = ParseCourseError;

    /// Case-insensitive. Accepts the plural and "main course" spellings
    /// that show up in older menus.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "STARTER" | "STARTERS" => Ok(Course::Starter),
            "MAIN" | "MAINS" | "MAIN COURSE" => Ok(Course::Main),
            "DESSERT" | "DESSERTS" => Ok(Course::Dessert),
            _ => Err(ParseCourseError(s.to_string())),
        }
    }
}

// ============================================================================
// INTENSITY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Intensity {
    Mild,
    Balanced,
    Strong,
}

impl Intensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Mild => "Mild",
            Intensity::Balanced => "Balanced",
            Intensity::Strong => "Strong",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Price thresholds used to label a dish's intensity.
///
/// - price < `balanced_from` → Mild
/// - `balanced_from` ≤ price < `strong_from` → Balanced
/// - price ≥ `strong_from` → Strong
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntensityScale {
    pub balanced_from: f64,
    pub strong_from: f64,
}

impl IntensityScale {
    /// Older menus closed the Balanced band at 65 instead of 60
    pub fn legacy() -> Self {
        IntensityScale {
            balanced_from: 45.0,
            strong_from: 65.0,
        }
    }

    pub fn classify(&self, price: f64) -> Intensity {
        if price < self.balanced_from {
            Intensity::Mild
        } else if price < self.strong_from {
            Intensity::Balanced
        } else {
            Intensity::Strong
        }
    }
}

impl Default for IntensityScale {
    fn default() -> Self {
        IntensityScale {
            balanced_from: 45.0,
            strong_from: 60.0,
        }
    }
}

// ============================================================================
// MENU ITEM
// ============================================================================

/// A dish on the menu.
///
/// Only the catalog constructs these (see `MenuCatalog::add_item`), so every
/// item has passed validation and carries an intensity derived from its price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Stable identity - NEVER changes
    pub id: ItemId,

    pub name: String,
    pub description: String,
    pub category: Course,
    pub price: f64,

    /// Snapshot taken at creation; never recomputed
    pub intensity: Intensity,

    /// Display image URI
    pub image: String,

    pub ingredients: Vec<String>,

    pub created_at: DateTime<Utc>,
}

impl MenuItem {
    pub(crate) fn new(
        name: String,
        description: String,
        category: Course,
        price: f64,
        intensity: Intensity,
        image: String,
        ingredients: Vec<String>,
    ) -> Self {
        MenuItem {
            id: ItemId::new(),
            name,
            description,
            category,
            price,
            intensity,
            image,
            ingredients,
            created_at: Utc::now(),
        }
    }

    /// Price with currency prefix, e.g. "R150.00"
    pub fn display_price(&self, currency: &str) -> String {
        format!("{}{:.2}", currency, self.price)
    }

    /// Case-insensitive substring match on name, description and ingredients.
    /// `needle` must already be lowercase.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .ingredients
                .iter()
                .any(|i| i.to_lowercase().contains(needle))
    }
}

// ============================================================================
// TESTS
// ============================================================================
