//! Recipe categories and their provider search parameters.
//!
//! The category set is closed and fixed at compile time. Each category is
//! described by one record in [`CATEGORY_REGISTRY`], which carries display
//! metadata for listings and a structured [`ProviderQuery`] that outbound
//! search adapters translate into their own wire parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of recipe categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeCategory {
    PlantBasedMeals,
    KidsMeals,
    LightMeals,
    HeartyMeals,
    MeatStews,
    VeggieStews,
    SeafoodStews,
    FusionStews,
    Soups,
    Drinks,
    Pastries,
}

/// Raised when a category key is not part of the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown recipe category: {key}")]
pub struct UnknownCategoryError {
    /// Key as supplied by the caller.
    pub key: String,
}

/// Provider-agnostic search parameters for one category.
///
/// Empty strings and zero bounds mean "not set"; adapters must omit them
/// from outbound requests rather than sending defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderQuery {
    /// Free-text query terms, comma separated.
    pub query: &'static str,
    /// Diet tags, comma separated.
    pub diet: &'static str,
    /// Meal type tags, comma separated.
    pub meal_type: &'static str,
    /// Cuisine tags, comma separated.
    pub cuisine: &'static str,
    pub min_calories: u32,
    pub max_calories: u32,
    pub max_fat: u32,
    pub min_protein: u32,
}

impl ProviderQuery {
    const fn empty() -> Self {
        Self {
            query: "",
            diet: "",
            meal_type: "",
            cuisine: "",
            min_calories: 0,
            max_calories: 0,
            max_fat: 0,
            min_protein: 0,
        }
    }
}

/// Static description of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDefinition {
    pub category: RecipeCategory,
    pub display_name: &'static str,
    pub description: &'static str,
    /// Image path served when a recipe carries no picture of its own.
    pub default_image: &'static str,
    pub provider_query: ProviderQuery,
}

impl CategoryDefinition {
    /// Stable wire key, for example `plant_based_meals`.
    pub fn key(&self) -> &'static str {
        self.category.as_str()
    }
}

/// Every category in presentation order. Position `i` describes the variant
/// whose discriminant is `i`.
pub static CATEGORY_REGISTRY: [CategoryDefinition; 11] = [
    CategoryDefinition {
        category: RecipeCategory::PlantBasedMeals,
        display_name: "Plant-Based Meals",
        description: "Vegan/vegetarian options (no animal products)",
        default_image: "/images/vegan.jpeg",
        provider_query: ProviderQuery {
            diet: "vegan,vegetarian",
            meal_type: "main course",
            ..ProviderQuery::empty()
        },
    },
    CategoryDefinition {
        category: RecipeCategory::KidsMeals,
        display_name: "Kids' Meals",
        description: "Fun, simple, and nutritious meals for children",
        default_image: "/images/kids-meals.jpeg",
        provider_query: ProviderQuery {
            query: "kid friendly",
            meal_type: "main course",
            max_calories: 500,
            ..ProviderQuery::empty()
        },
    },
    CategoryDefinition {
        category: RecipeCategory::LightMeals,
        display_name: "Light Meals (Weight Loss)",
        description: "Low-calorie, balanced recipes",
        default_image: "/images/light-meals.jpeg",
        provider_query: ProviderQuery {
            meal_type: "main course",
            max_calories: 400,
            max_fat: 15,
            ..ProviderQuery::empty()
        },
    },
    CategoryDefinition {
        category: RecipeCategory::HeartyMeals,
        display_name: "Hearty Meals (Weight Gain)",
        description: "High-calorie, energy-packed recipes",
        default_image: "/images/hearty-meals.jpeg",
        provider_query: ProviderQuery {
            meal_type: "main course",
            min_calories: 600,
            min_protein: 25,
            ..ProviderQuery::empty()
        },
    },
    CategoryDefinition {
        category: RecipeCategory::MeatStews,
        display_name: "Meat Stews",
        description: "Beef, chicken, goat, lamb, and other meat-based stews",
        default_image: "/images/stews.jpeg",
        provider_query: ProviderQuery {
            query: "beef stew,chicken stew,lamb stew",
            meal_type: "main course",
            ..ProviderQuery::empty()
        },
    },
    CategoryDefinition {
        category: RecipeCategory::VeggieStews,
        display_name: "Veggie Stews",
        description: "Lentil, bean, mushroom, and vegetable stews",
        default_image: "/images/vegetable-stews.jpeg",
        provider_query: ProviderQuery {
            query: "vegetable stew",
            diet: "vegetarian",
            meal_type: "main course",
            ..ProviderQuery::empty()
        },
    },
    CategoryDefinition {
        category: RecipeCategory::SeafoodStews,
        display_name: "Seafood & Fish Stews",
        description: "Fish stews, seafood mixes, and ocean-inspired flavors",
        default_image: "/images/fish&sea-food.jpeg",
        provider_query: ProviderQuery {
            query: "fish stew,seafood stew",
            meal_type: "main course",
            ..ProviderQuery::empty()
        },
    },
    CategoryDefinition {
        category: RecipeCategory::FusionStews,
        display_name: "Fusion Stews",
        description: "Cultural and traditional varieties (e.g., goulash, curries)",
        default_image: "/images/fusion.jpeg",
        provider_query: ProviderQuery {
            query: "stew,curry",
            meal_type: "main course",
            cuisine: "African,Asian,European,Latin American",
            ..ProviderQuery::empty()
        },
    },
    CategoryDefinition {
        category: RecipeCategory::Soups,
        display_name: "Soups",
        description: "Warm, comforting soups",
        default_image: "/images/soups.jpeg",
        provider_query: ProviderQuery {
            query: "soup",
            meal_type: "soup",
            ..ProviderQuery::empty()
        },
    },
    CategoryDefinition {
        category: RecipeCategory::Drinks,
        display_name: "Drinks",
        description: "Smoothies, juices, teas, and other beverages",
        default_image: "/images/drinks&smoothies.jpeg",
        provider_query: ProviderQuery {
            query: "smoothie,juice,tea",
            meal_type: "drink",
            ..ProviderQuery::empty()
        },
    },
    CategoryDefinition {
        category: RecipeCategory::Pastries,
        display_name: "Pastries",
        description: "Baked goods such as cakes, cookies, pies, and breads",
        default_image: "/images/pastries.jpeg",
        provider_query: ProviderQuery {
            query: "pastry,cake,cookie,pie,bread",
            meal_type: "dessert,bread",
            ..ProviderQuery::empty()
        },
    },
];

impl RecipeCategory {
    /// Wire key for this category.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PlantBasedMeals => "plant_based_meals",
            Self::KidsMeals => "kids_meals",
            Self::LightMeals => "light_meals",
            Self::HeartyMeals => "hearty_meals",
            Self::MeatStews => "meat_stews",
            Self::VeggieStews => "veggie_stews",
            Self::SeafoodStews => "seafood_stews",
            Self::FusionStews => "fusion_stews",
            Self::Soups => "soups",
            Self::Drinks => "drinks",
            Self::Pastries => "pastries",
        }
    }

    /// Parse a wire key, rejecting anything outside the closed set.
    ///
    /// # Examples
    /// ```
    /// use recipes_backend::domain::RecipeCategory;
    ///
    /// assert_eq!(RecipeCategory::parse("soups"), Ok(RecipeCategory::Soups));
    /// assert!(RecipeCategory::parse("Soups").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, UnknownCategoryError> {
        CATEGORY_REGISTRY
            .iter()
            .map(|definition| definition.category)
            .find(|category| category.as_str() == raw)
            .ok_or_else(|| UnknownCategoryError {
                key: raw.to_owned(),
            })
    }

    /// Registry record for this category.
    pub fn definition(self) -> &'static CategoryDefinition {
        &CATEGORY_REGISTRY[self as usize]
    }

    pub fn display_name(self) -> &'static str {
        self.definition().display_name
    }

    pub fn provider_query(self) -> &'static ProviderQuery {
        &self.definition().provider_query
    }

    pub fn default_image(self) -> &'static str {
        self.definition().default_image
    }
}

impl fmt::Display for RecipeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecipeCategory {
    type Err = UnknownCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Read-only view over [`CATEGORY_REGISTRY`].
#[derive(Debug, Default, Clone, Copy)]
pub struct CategoryRegistry;

impl CategoryRegistry {
    /// All category records in presentation order.
    pub fn all() -> &'static [CategoryDefinition] {
        &CATEGORY_REGISTRY
    }

    /// Resolve a wire key to its record.
    pub fn lookup(key: &str) -> Result<&'static CategoryDefinition, UnknownCategoryError> {
        RecipeCategory::parse(key).map(RecipeCategory::definition)
    }
}
