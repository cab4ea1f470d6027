//! Deterministic substitute results served when the provider is degraded.
//!
//! Six categories carry a curated set; the rest get two placeholders whose
//! text is derived from the category display name.

use crate::domain::RecipeCategory;

use super::RecipeSummary;

struct Substitute {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    image: &'static str,
    ready_in_minutes: u32,
    servings: u32,
    source_name: &'static str,
    source_url: &'static str,
    ingredients: &'static [&'static str],
    instructions: &'static str,
}

impl Substitute {
    fn to_summary(&self) -> RecipeSummary {
        RecipeSummary {
            id: self.id.to_owned(),
            title: self.title.to_owned(),
            description: self.description.to_owned(),
            image: self.image.to_owned(),
            ready_in_minutes: self.ready_in_minutes,
            servings: self.servings,
            source_name: self.source_name.to_owned(),
            source_url: self.source_url.to_owned(),
            ingredients: owned(self.ingredients),
            instructions: self.instructions.to_owned(),
        }
    }
}

const PLANT_BASED: &[Substitute] = &[
    Substitute {
        id: "mock_pb_1",
        title: "Quinoa Buddha Bowl",
        description: "Nutritious bowl with quinoa, roasted vegetables, and tahini dressing",
        image: "/images/plant-based.jpg",
        ready_in_minutes: 25,
        servings: 2,
        source_name: "Plant-Based Kitchen",
        source_url: "https://example.com/quinoa-bowl",
        ingredients: &["Quinoa", "Sweet potato", "Chickpeas", "Tahini"],
        instructions: "Cook quinoa, roast vegetables, assemble bowl with tahini dressing",
    },
    Substitute {
        id: "mock_pb_2",
        title: "Lentil Curry",
        description: "Spicy red lentil curry with coconut milk and aromatic spices",
        image: "/images/plant-based.jpg",
        ready_in_minutes: 30,
        servings: 4,
        source_name: "Vegan Delights",
        source_url: "https://example.com/lentil-curry",
        ingredients: &["Red lentils", "Coconut milk", "Curry spices", "Tomatoes"],
        instructions: "Simmer lentils with spices and coconut milk until tender",
    },
    Substitute {
        id: "mock_pb_3",
        title: "Avocado Toast Supreme",
        description: "Gourmet avocado toast with hemp seeds and microgreens",
        image: "/images/plant-based.jpg",
        ready_in_minutes: 10,
        servings: 1,
        source_name: "Healthy Eats",
        source_url: "https://example.com/avocado-toast",
        ingredients: &["Sourdough bread", "Avocado", "Hemp seeds", "Microgreens"],
        instructions: "Toast bread, mash avocado, top with seeds and greens",
    },
];

const KIDS: &[Substitute] = &[
    Substitute {
        id: "mock_km_1",
        title: "Mini Cheese Quesadillas",
        description: "Kid-friendly quesadillas with mild cheese and hidden vegetables",
        image: "/images/kids-meals.jpg",
        ready_in_minutes: 15,
        servings: 2,
        source_name: "Family Kitchen",
        source_url: "https://example.com/mini-quesadillas",
        ingredients: &["Tortillas", "Mild cheese", "Hidden veggies"],
        instructions: "Fill tortillas with cheese and veggies, cook until golden",
    },
    Substitute {
        id: "mock_km_2",
        title: "Chicken Nuggets",
        description: "Homemade baked chicken nuggets that kids absolutely love",
        image: "/images/kids-meals.jpg",
        ready_in_minutes: 25,
        servings: 4,
        source_name: "Kid-Approved",
        source_url: "https://example.com/chicken-nuggets",
        ingredients: &["Chicken breast", "Breadcrumbs", "Eggs"],
        instructions: "Coat chicken in breadcrumbs and bake until crispy",
    },
    Substitute {
        id: "mock_km_3",
        title: "Mac and Cheese Cups",
        description: "Individual mac and cheese portions baked in muffin cups",
        image: "/images/kids-meals.jpg",
        ready_in_minutes: 20,
        servings: 6,
        source_name: "Fun Foods",
        source_url: "https://example.com/mac-cheese-cups",
        ingredients: &["Pasta", "Cheese sauce", "Breadcrumbs"],
        instructions: "Mix pasta with cheese, bake in muffin tins",
    },
];

const LIGHT: &[Substitute] = &[
    Substitute {
        id: "mock_lm_1",
        title: "Greek Salad",
        description: "Fresh Mediterranean salad with feta cheese and olives",
        image: "/images/light-meals.jpg",
        ready_in_minutes: 10,
        servings: 2,
        source_name: "Healthy Living",
        source_url: "https://example.com/greek-salad",
        ingredients: &["Cucumber", "Tomatoes", "Feta", "Olives"],
        instructions: "Chop vegetables, add feta and olives, dress with olive oil",
    },
    Substitute {
        id: "mock_lm_2",
        title: "Zucchini Noodles",
        description: "Low-carb zucchini noodles with fresh pesto sauce",
        image: "/images/light-meals.jpg",
        ready_in_minutes: 15,
        servings: 2,
        source_name: "Diet Kitchen",
        source_url: "https://example.com/zucchini-noodles",
        ingredients: &["Zucchini", "Basil pesto", "Cherry tomatoes"],
        instructions: "Spiralize zucchini, toss with pesto and tomatoes",
    },
    Substitute {
        id: "mock_lm_3",
        title: "Cauliflower Rice Bowl",
        description: "Nutritious cauliflower rice with grilled vegetables",
        image: "/images/light-meals.jpg",
        ready_in_minutes: 20,
        servings: 2,
        source_name: "Clean Eating",
        source_url: "https://example.com/cauliflower-rice",
        ingredients: &["Cauliflower", "Bell peppers", "Broccoli"],
        instructions: "Rice cauliflower, grill vegetables, combine in bowl",
    },
];

const SOUPS: &[Substitute] = &[
    Substitute {
        id: "mock_so_1",
        title: "Roasted Tomato Soup",
        description: "Velvety soup of oven-roasted tomatoes, garlic, and basil",
        image: "/images/soups.jpg",
        ready_in_minutes: 45,
        servings: 4,
        source_name: "Soup Kitchen",
        source_url: "https://example.com/roasted-tomato-soup",
        ingredients: &["Tomatoes", "Garlic", "Basil", "Vegetable stock"],
        instructions: "Roast tomatoes and garlic, simmer with stock, blend with basil",
    },
    Substitute {
        id: "mock_so_2",
        title: "Chicken Noodle Soup",
        description: "Classic comforting broth with tender chicken and egg noodles",
        image: "/images/soups.jpg",
        ready_in_minutes: 40,
        servings: 6,
        source_name: "Home Comforts",
        source_url: "https://example.com/chicken-noodle-soup",
        ingredients: &["Chicken thighs", "Egg noodles", "Carrots", "Celery"],
        instructions: "Poach chicken in stock with vegetables, add noodles until tender",
    },
    Substitute {
        id: "mock_so_3",
        title: "Spiced Lentil Soup",
        description: "Warming red lentil soup with cumin and a squeeze of lemon",
        image: "/images/soups.jpg",
        ready_in_minutes: 30,
        servings: 4,
        source_name: "Pulse Pantry",
        source_url: "https://example.com/spiced-lentil-soup",
        ingredients: &["Red lentils", "Onion", "Cumin", "Lemon"],
        instructions: "Soften onion with cumin, simmer lentils until soft, finish with lemon",
    },
];

const DRINKS: &[Substitute] = &[
    Substitute {
        id: "mock_dr_1",
        title: "Green Smoothie",
        description: "Healthy green smoothie with spinach, banana, and mango",
        image: "/images/drinks.jpg",
        ready_in_minutes: 5,
        servings: 1,
        source_name: "Smoothie Bar",
        source_url: "https://example.com/green-smoothie",
        ingredients: &["Spinach", "Banana", "Mango", "Coconut water"],
        instructions: "Blend all ingredients until smooth",
    },
    Substitute {
        id: "mock_dr_2",
        title: "Iced Coffee",
        description: "Refreshing iced coffee with vanilla and cream",
        image: "/images/drinks.jpg",
        ready_in_minutes: 10,
        servings: 1,
        source_name: "Coffee Shop",
        source_url: "https://example.com/iced-coffee",
        ingredients: &["Coffee", "Ice", "Vanilla", "Cream"],
        instructions: "Brew coffee, add ice and flavorings",
    },
    Substitute {
        id: "mock_dr_3",
        title: "Fruit Infused Water",
        description: "Refreshing water infused with fresh fruits and herbs",
        image: "/images/drinks.jpg",
        ready_in_minutes: 5,
        servings: 4,
        source_name: "Hydration Station",
        source_url: "https://example.com/infused-water",
        ingredients: &["Water", "Cucumber", "Mint", "Lemon"],
        instructions: "Add fruits and herbs to water, let infuse",
    },
];

const PASTRIES: &[Substitute] = &[
    Substitute {
        id: "mock_pa_1",
        title: "Chocolate Croissants",
        description: "Buttery croissants filled with rich dark chocolate",
        image: "/images/pastries.jpg",
        ready_in_minutes: 180,
        servings: 8,
        source_name: "French Bakery",
        source_url: "https://example.com/chocolate-croissants",
        ingredients: &["Puff pastry", "Dark chocolate", "Butter", "Egg wash"],
        instructions: "Wrap chocolate in pastry, proof, and bake until golden",
    },
    Substitute {
        id: "mock_pa_2",
        title: "Apple Turnovers",
        description: "Flaky pastry turnovers filled with spiced apples",
        image: "/images/pastries.jpg",
        ready_in_minutes: 45,
        servings: 6,
        source_name: "Pastry Chef",
        source_url: "https://example.com/apple-turnovers",
        ingredients: &["Puff pastry", "Apples", "Cinnamon", "Sugar"],
        instructions: "Fill pastry with spiced apples, seal and bake",
    },
    Substitute {
        id: "mock_pa_3",
        title: "Blueberry Muffins",
        description: "Fluffy muffins bursting with fresh blueberries",
        image: "/images/pastries.jpg",
        ready_in_minutes: 30,
        servings: 12,
        source_name: "Bakehouse",
        source_url: "https://example.com/blueberry-muffins",
        ingredients: &["Flour", "Blueberries", "Sugar", "Eggs"],
        instructions: "Mix batter, fold in blueberries, bake in muffin tins",
    },
];

fn curated(category: RecipeCategory) -> Option<&'static [Substitute]> {
    match category {
        RecipeCategory::PlantBasedMeals => Some(PLANT_BASED),
        RecipeCategory::KidsMeals => Some(KIDS),
        RecipeCategory::LightMeals => Some(LIGHT),
        RecipeCategory::Soups => Some(SOUPS),
        RecipeCategory::Drinks => Some(DRINKS),
        RecipeCategory::Pastries => Some(PASTRIES),
        RecipeCategory::HeartyMeals
        | RecipeCategory::MeatStews
        | RecipeCategory::VeggieStews
        | RecipeCategory::SeafoodStews
        | RecipeCategory::FusionStews => None,
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

fn placeholders(category: RecipeCategory) -> Vec<RecipeSummary> {
    let name = category.display_name();
    let lower = name.to_lowercase();
    let image = format!("/images/{}.jpg", lower.replace(' ', "-"));

    vec![
        RecipeSummary {
            id: "mock_def_1".to_owned(),
            title: format!("Delicious {name} Recipe"),
            description: format!("A wonderful {lower} recipe from our curated collection"),
            image: image.clone(),
            ready_in_minutes: 30,
            servings: 4,
            source_name: "Recipe Collection".to_owned(),
            source_url: "https://example.com/recipe".to_owned(),
            ingredients: owned(&["Fresh ingredients", "Quality seasonings", "Love and care"]),
            instructions: "Follow traditional cooking methods for best results".to_owned(),
        },
        RecipeSummary {
            id: "mock_def_2".to_owned(),
            title: format!("Classic {name} Dish"),
            description: format!("Traditional {lower} preparation with modern touches"),
            image,
            ready_in_minutes: 45,
            servings: 6,
            source_name: "Traditional Kitchen".to_owned(),
            source_url: "https://example.com/classic".to_owned(),
            ingredients: owned(&[
                "Traditional ingredients",
                "Authentic spices",
                "Time-tested methods",
            ]),
            instructions: "Prepare using time-honored techniques".to_owned(),
        },
    ]
}

/// Substitute summaries for `category`, at most `limit` of them.
pub fn substitutes(category: RecipeCategory, limit: usize) -> Vec<RecipeSummary> {
    match curated(category) {
        Some(set) => set.iter().take(limit).map(Substitute::to_summary).collect(),
        None => placeholders(category).into_iter().take(limit).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CategoryRegistry;
    use rstest::rstest;

    #[rstest]
    fn every_category_has_substitutes() {
        for definition in CategoryRegistry::all() {
            assert!(!substitutes(definition.category, 50).is_empty());
        }
    }

    #[rstest]
    #[case(RecipeCategory::Soups, 3, 3)]
    #[case(RecipeCategory::Soups, 50, 3)]
    #[case(RecipeCategory::Pastries, 2, 2)]
    #[case(RecipeCategory::MeatStews, 12, 2)]
    #[case(RecipeCategory::MeatStews, 1, 1)]
    fn respects_limit_and_available_count(
        #[case] category: RecipeCategory,
        #[case] limit: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(substitutes(category, limit).len(), expected);
    }

    #[rstest]
    fn soup_substitutes_are_soups() {
        let titles: Vec<String> = substitutes(RecipeCategory::Soups, 3)
            .into_iter()
            .map(|summary| summary.title)
            .collect();
        assert!(titles.iter().all(|title| title.ends_with("Soup")));
    }

    #[rstest]
    fn placeholders_derive_text_from_display_name() {
        let summaries = substitutes(RecipeCategory::SeafoodStews, 2);
        let first = summaries.first().expect("first placeholder");
        assert_eq!(first.title, "Delicious Seafood & Fish Stews Recipe");
        assert_eq!(first.image, "/images/seafood-&-fish-stews.jpg");
        assert!(first.description.contains("seafood & fish stews"));
    }
}
