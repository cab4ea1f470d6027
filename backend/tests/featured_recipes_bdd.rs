//! Behaviour tests for the featured recipe listing endpoint.

use std::sync::{Arc, Mutex};

use actix_web::{App, test as actix_test, web};
use chrono::{DateTime, Duration, TimeZone, Utc};
use recipes_backend::Trace;
use recipes_backend::domain::FeaturedRecipesService;
use recipes_backend::domain::ports::{
    FixtureCategoryRecipesQuery, FixtureRecipeDiscoveryQuery, FixtureRecipeRatingQuery,
};
use recipes_backend::inbound::http::featured::list_featured;
use recipes_backend::inbound::http::state::HttpState;
use recipes_backend::outbound::persistence::{InMemoryRecipeCatalogue, StoredRecipe};
use recipes_backend::test_support::catalogue::stored_recipe;
use recipes_backend::test_support::clock::MutableClock;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;

struct FeaturedWorld {
    now: DateTime<Utc>,
    clock: Arc<MutableClock>,
    recipes: Vec<StoredRecipe>,
    last_status: Option<u16>,
    last_body: Option<Value>,
}

impl Default for FeaturedWorld {
    fn default() -> Self {
        let now = Utc
            .with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        Self {
            now,
            clock: Arc::new(MutableClock::new(now)),
            recipes: Vec::new(),
            last_status: None,
            last_body: None,
        }
    }
}

impl FeaturedWorld {
    fn add_recipe(&mut self, days_ago: i64, ratings: &[i32]) {
        let title = format!("Recipe {}", self.recipes.len() + 1);
        let created_at = self.now - Duration::days(days_ago);
        self.recipes
            .push(stored_recipe(&title, "soups", created_at, ratings));
    }

    fn http_state(&self) -> HttpState {
        let catalogue = Arc::new(InMemoryRecipeCatalogue::new(self.recipes.clone()));
        HttpState::new(
            Arc::new(FixtureRecipeDiscoveryQuery),
            Arc::new(FeaturedRecipesService::new(catalogue, self.clock.clone())),
            Arc::new(FixtureRecipeRatingQuery),
            Arc::new(FixtureCategoryRecipesQuery),
        )
    }

    fn body(&self) -> &Value {
        self.last_body.as_ref().expect("response body")
    }
}

#[fixture]
fn world() -> Mutex<FeaturedWorld> {
    Mutex::new(FeaturedWorld::default())
}

fn perform_request(world: &Mutex<FeaturedWorld>, uri: &str) {
    let state = world.lock().expect("world lock").http_state();
    let (status, body) = actix_rt::System::new().block_on(async move {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .wrap(Trace)
                .service(web::scope("/api/v1").service(list_featured)),
        )
        .await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
        let status = response.status().as_u16();
        let body: Value = actix_test::read_body_json(response).await;
        (status, body)
    });

    let mut world = world.lock().expect("world lock");
    world.last_status = Some(status);
    world.last_body = Some(body);
}

#[given("a recipe created {days} days ago with {count} ratings of {score}")]
fn a_recipe_with_ratings(world: &Mutex<FeaturedWorld>, days: i64, count: usize, score: i32) {
    let ratings = vec![score; count];
    world.lock().expect("world lock").add_recipe(days, &ratings);
}

#[given("{count} recipes created {days} days ago")]
fn several_unrated_recipes(world: &Mutex<FeaturedWorld>, count: usize, days: i64) {
    let mut world = world.lock().expect("world lock");
    for _ in 0..count {
        world.add_recipe(days, &[]);
    }
}

#[given("the calendar moves forward {days} days")]
fn the_calendar_moves_forward(world: &Mutex<FeaturedWorld>, days: i64) {
    world.lock().expect("world lock").clock.advance_days(days);
}

#[when("the client requests the featured recipes")]
fn the_client_requests_the_featured_recipes(world: &Mutex<FeaturedWorld>) {
    perform_request(world, "/api/v1/recipes/featured");
}

#[when("the client requests featured recipes with query {query}")]
fn the_client_requests_featured_recipes_with_query(world: &Mutex<FeaturedWorld>, query: String) {
    perform_request(world, &format!("/api/v1/recipes/featured?{query}"));
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &Mutex<FeaturedWorld>, status: u16) {
    let world = world.lock().expect("world lock");
    assert_eq!(world.last_status, Some(status));
}

#[then("the page lists {count} recipes")]
fn the_page_lists_recipes(world: &Mutex<FeaturedWorld>, count: usize) {
    let world = world.lock().expect("world lock");
    let recipes = world.body()["recipes"].as_array().expect("recipes array");
    assert_eq!(recipes.len(), count);
}

#[then("the featured averages are in descending order")]
fn the_featured_averages_are_in_descending_order(world: &Mutex<FeaturedWorld>) {
    let world = world.lock().expect("world lock");
    let averages: Vec<f64> = world.body()["recipes"]
        .as_array()
        .expect("recipes array")
        .iter()
        .map(|recipe| recipe["average_rating"].as_f64().expect("average"))
        .collect();
    assert!(
        averages.windows(2).all(|pair| pair[0] >= pair[1]),
        "averages out of order: {averages:?}"
    );
}

#[then("the page reports {total} total pages")]
fn the_page_reports_total_pages(world: &Mutex<FeaturedWorld>, total: u64) {
    let world = world.lock().expect("world lock");
    assert_eq!(world.body()["total_pages"].as_u64(), Some(total));
}

#[then("the page has a previous page but no next page")]
fn the_page_has_previous_but_no_next(world: &Mutex<FeaturedWorld>) {
    let world = world.lock().expect("world lock");
    assert_eq!(world.body()["has_prev"], Value::Bool(true));
    assert_eq!(world.body()["has_next"], Value::Bool(false));
}

#[then("the error code is {code}")]
fn the_error_code_is(world: &Mutex<FeaturedWorld>, code: String) {
    let world = world.lock().expect("world lock");
    assert_eq!(world.body()["code"].as_str(), Some(code.as_str()));
}

#[then("the error details name the field {field}")]
fn the_error_details_name_the_field(world: &Mutex<FeaturedWorld>, field: String) {
    let world = world.lock().expect("world lock");
    assert_eq!(
        world.body()["details"]["field"].as_str(),
        Some(field.as_str())
    );
}

#[scenario(
    path = "tests/features/featured_recipes.feature",
    name = "Qualifying recipes are listed best first"
)]
fn qualifying_recipes_are_listed_best_first(world: Mutex<FeaturedWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/featured_recipes.feature",
    name = "Recent recipes age out of the listing"
)]
fn recent_recipes_age_out_of_the_listing(world: Mutex<FeaturedWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/featured_recipes.feature",
    name = "Large catalogues are split into pages"
)]
fn large_catalogues_are_split_into_pages(world: Mutex<FeaturedWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/featured_recipes.feature",
    name = "A page past the end is empty"
)]
fn a_page_past_the_end_is_empty(world: Mutex<FeaturedWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/featured_recipes.feature",
    name = "Malformed page numbers are rejected"
)]
fn malformed_page_numbers_are_rejected(world: Mutex<FeaturedWorld>) {
    drop(world);
}
