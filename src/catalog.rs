// 📋 Menu Catalog - the ordered collection of dishes for this session
//
// The catalog is the single store behind every screen:
// - add_item / remove_item are the ONLY mutators
// - everything else is a read-only query over the current items
// - insertion order is menu order

use crate::entities::{Course, IntensityScale, ItemId, MenuItem};
use crate::schema::{ItemCandidate, ValidationError};
use serde::Serialize;
use tracing::{debug, error, info};

// ============================================================================
// CATEGORY SUMMARY
// ============================================================================

/// Per-course stats for the menu header
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub course: Course,
    pub count: usize,
    /// Mean price, two decimals ("0.00" when the course is empty)
    pub average_price: String,
}

// ============================================================================
// MENU CATALOG
// ============================================================================

/// In-memory menu for one application session.
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
    scale: IntensityScale,
}

impl MenuCatalog {
    /// Create new empty catalog
    pub fn new(scale: IntensityScale) -> Self {
        MenuCatalog {
            items: Vec::new(),
            scale,
        }
    }

    /// Create catalog with the house dishes pre-loaded
    pub fn with_defaults(scale: IntensityScale) -> Self {
        let mut catalog = MenuCatalog::new(scale);
        catalog.register_default_items();
        catalog
    }

    /// Seed the house dishes through the regular add path so they get the
    /// same validation and intensity rule as anything a user enters.
    fn register_default_items(&mut self) {
        for candidate in default_items() {
            if let Err(e) = self.add_item(candidate) {
                // Only reachable if the literals below are edited badly
                error!("Skipping invalid seed item: {}", e);
            }
        }
    }

    /// Thresholds applied to items added from now on
    pub fn intensity_scale(&self) -> IntensityScale {
        self.scale
    }

    /// Validate a candidate and append it to the end of the menu.
    ///
    /// Nothing is appended when validation fails.
    pub fn add_item(&mut self, candidate: ItemCandidate) -> Result<&MenuItem, ValidationError> {
        let validated = candidate.validate().map_err(|e| {
            debug!(error = %e, "Rejected menu item");
            e
        })?;

        let intensity = self.scale.classify(validated.price);
        let item = MenuItem::new(
            validated.name,
            validated.description,
            validated.category,
            validated.price,
            intensity,
            validated.image,
            validated.ingredients,
        );

        info!(
            id = %item.id,
            name = %item.name,
            course = %item.category,
            price = item.price,
            intensity = %item.intensity,
            "Added menu item"
        );

        let index = self.items.len();
        self.items.push(item);
        Ok(&self.items[index])
    }

    /// Remove the item with this id. Unknown ids are ignored.
    pub fn remove_item(&mut self, id: ItemId) -> Option<MenuItem> {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                let removed = self.items.remove(index);
                info!(id = %removed.id, name = %removed.name, "Removed menu item");
                Some(removed)
            }
            None => {
                debug!(id = %id, "Remove ignored: no such menu item");
                None
            }
        }
    }

    /// All items in menu order
    pub fn list_items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Find item by id
    pub fn find_by_id(&self, id: ItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items of one course, in menu order. The iterator is lazy and can be
    /// cloned to walk the same selection again.
    pub fn filter_by_category(
        &self,
        course: Course,
    ) -> impl Iterator<Item = &MenuItem> + Clone + '_ {
        self.items.iter().filter(move |item| item.category == course)
    }

    pub fn count_by_category(&self, course: Course) -> usize {
        self.filter_by_category(course).count()
    }

    /// Mean price of one course formatted to two decimals.
    /// "0.00" when the course has no items.
    pub fn average_price_by_category(&self, course: Course) -> String {
        let (count, total) = self
            .filter_by_category(course)
            .fold((0usize, 0.0f64), |(count, total), item| {
                (count + 1, total + item.price)
            });

        if count == 0 {
            return "0.00".to_string();
        }

        format!("{:.2}", total / count as f64)
    }

    /// Count and average for every course, in menu order
    pub fn category_summary(&self) -> Vec<CategorySummary> {
        Course::ALL
            .iter()
            .map(|&course| CategorySummary {
                course,
                count: self.count_by_category(course),
                average_price: self.average_price_by_category(course),
            })
            .collect()
    }

    /// Case-insensitive search over name, description and ingredients.
    /// A blank query returns the whole menu.
    pub fn search_items(&self, query: &str) -> Vec<&MenuItem> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.items.iter().collect();
        }

        self.items
            .iter()
            .filter(|item| item.matches(&needle))
            .collect()
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::with_defaults(IntensityScale::default())
    }
}

// ============================================================================
// HOUSE DISHES
// ============================================================================

fn default_items() -> Vec<ItemCandidate> {
    vec![
        ItemCandidate::new(
            "Buffalo wings",
            "Buffalo wings are spicy fried chicken wings tossed in hot sauce and butter.",
            Course::Starter,
            "150",
        )
        .with_image(
            "https://tse4.mm.bing.net/th/id/OIP.hexQPaITteCkSHZKrFZshAHaHa?cb=12&pid=ImgDet&w=164&h=164&c=7&dpr=1,5&o=7&rm=3",
        )
        .with_ingredients(
            "Chicken wings, flour, butter, hot sauce, garlic powder, salt, pepper, oil",
        ),
        ItemCandidate::new(
            "Beef burger and chips",
            "Beef burger with chips is a grilled meat patty in a bun, served with fried potatoes.",
            Course::Main,
            "114",
        )
        .with_image(
            "https://img.taste.com.au/M8fxpuu9/taste/2016/11/beef-burgers-with-double-fried-chips-100842-1.jpeg",
        )
        .with_ingredients(
            "Beef patty, burger bun, lettuce, tomato, cheese, onion, pickles, sauce, potatoes, oil, salt",
        ),
        ItemCandidate::new(
            "Chocolate cake",
            "Chocolate cake is a sweet, moist cake flavored with rich cocoa.",
            Course::Dessert,
            "55",
        )
        .with_image(
            "https://christinebailey.co.uk/wp-content/uploads/2015/01/chocolate-cake-slice-e1448521562644.jpg",
        )
        .with_ingredients(
            "Flour, sugar, cocoa powder, eggs, butter, milk, baking powder, vanilla essence, salt",
        ),
    ]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Intensity;

    fn candidate(name: &str, course: Course, price: &str) -> ItemCandidate {
        ItemCandidate::new(name, format!("{} description", name), course, price)
            .with_image("https://example.com/dish.jpg")
            .with_ingredients("salt, pepper")
    }

    fn empty_catalog() -> MenuCatalog {
        MenuCatalog::new(IntensityScale::default())
    }

    #[test]
    fn test_catalog_defaults() {
        let catalog = MenuCatalog::default();

        assert_eq!(catalog.len(), 3);

        let names: Vec<&str> = catalog.list_items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Buffalo wings", "Beef burger and chips", "Chocolate cake"]
        );

        // One dish per course
        for course in Course::ALL {
            assert_eq!(catalog.count_by_category(course), 1);
        }
    }

    #[test]
    fn test_default_items_follow_intensity_rule() {
        let catalog = MenuCatalog::default();
        let items = catalog.list_items();

        assert_eq!(items[0].intensity, Intensity::Strong); // 150
        assert_eq!(items[1].intensity, Intensity::Strong); // 114
        assert_eq!(items[2].intensity, Intensity::Balanced); // 55
        assert_eq!(items[0].ingredients.len(), 8);
        assert_eq!(items[0].ingredients[0], "Chicken wings");
    }

    #[test]
    fn test_add_item_appends_with_derived_intensity() {
        let mut catalog = MenuCatalog::default();
        let before = catalog.len();

        let added = catalog
            .add_item(
                ItemCandidate::new("Malva pudding", "Warm sponge", Course::Dessert, "50")
                    .with_image("https://example.com/malva.jpg")
                    .with_ingredients("apricot jam, cream"),
            )
            .unwrap()
            .clone();

        assert_eq!(added.name, "Malva pudding");
        assert_eq!(added.description, "Warm sponge");
        assert_eq!(added.category, Course::Dessert);
        assert_eq!(added.price, 50.0);
        assert_eq!(added.intensity, Intensity::Balanced);
        assert_eq!(added.image, "https://example.com/malva.jpg");
        assert_eq!(added.ingredients, vec!["apricot jam", "cream"]);

        assert_eq!(catalog.len(), before + 1);
        let matching: Vec<&MenuItem> = catalog
            .list_items()
            .iter()
            .filter(|i| i.id == added.id)
            .collect();
        assert_eq!(matching.len(), 1);

        // Appended at the end
        assert_eq!(catalog.list_items().last().unwrap().id, added.id);
    }

    #[test]
    fn test_add_item_intensity_thresholds() {
        let mut catalog = empty_catalog();

        let mild = catalog.add_item(candidate("A", Course::Main, "44.99")).unwrap().intensity;
        let balanced = catalog.add_item(candidate("B", Course::Main, "50")).unwrap().intensity;
        let strong = catalog.add_item(candidate("C", Course::Main, "70")).unwrap().intensity;

        assert_eq!(mild, Intensity::Mild);
        assert_eq!(balanced, Intensity::Balanced);
        assert_eq!(strong, Intensity::Strong);
    }

    #[test]
    fn test_add_item_uses_catalog_scale() {
        let mut catalog = MenuCatalog::new(IntensityScale::legacy());

        let item = catalog.add_item(candidate("A", Course::Main, "62")).unwrap();
        assert_eq!(item.intensity, Intensity::Balanced);
    }

    #[test]
    fn test_add_item_invalid_price_leaves_catalog_unchanged() {
        let mut catalog = MenuCatalog::default();
        let before = catalog.len();

        for price in ["0", "-5", "cheap"] {
            let err = catalog.add_item(candidate("Bad", Course::Main, price)).unwrap_err();
            assert_eq!(
                err,
                ValidationError::InvalidPrice {
                    input: price.to_string()
                }
            );
        }

        assert_eq!(catalog.len(), before);
    }

    #[test]
    fn test_add_item_missing_name_leaves_catalog_unchanged() {
        let mut catalog = MenuCatalog::default();
        let before = catalog.len();

        let err = catalog.add_item(candidate("", Course::Main, "80")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields {
                fields: vec!["name"]
            }
        );
        assert_eq!(catalog.len(), before);
    }

    #[test]
    fn test_remove_existing_item() {
        let mut catalog = MenuCatalog::default();
        let before = catalog.len();
        let id = catalog.list_items()[1].id;

        let removed = catalog.remove_item(id);

        assert_eq!(removed.map(|i| i.name), Some("Beef burger and chips".to_string()));
        assert_eq!(catalog.len(), before - 1);
        assert!(catalog.list_items().iter().all(|i| i.id != id));
        assert!(catalog.find_by_id(id).is_none());
    }

    #[test]
    fn test_remove_unknown_item_is_noop() {
        let mut catalog = MenuCatalog::default();
        let before: Vec<ItemId> = catalog.list_items().iter().map(|i| i.id).collect();

        assert!(catalog.remove_item(ItemId::new()).is_none());

        let after: Vec<ItemId> = catalog.list_items().iter().map(|i| i.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_remove_twice_is_idempotent() {
        let mut catalog = MenuCatalog::default();
        let id = catalog.list_items()[0].id;

        assert!(catalog.remove_item(id).is_some());
        assert!(catalog.remove_item(id).is_none());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_filter_by_category_preserves_order() {
        let mut catalog = empty_catalog();
        catalog.add_item(candidate("Soup", Course::Starter, "40")).unwrap();
        catalog.add_item(candidate("Steak", Course::Main, "180")).unwrap();
        catalog.add_item(candidate("Salad", Course::Starter, "35")).unwrap();

        let starters: Vec<&str> = catalog
            .filter_by_category(Course::Starter)
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(starters, vec!["Soup", "Salad"]);
    }

    #[test]
    fn test_filter_by_category_is_restartable() {
        let catalog = MenuCatalog::default();

        let mains = catalog.filter_by_category(Course::Main);
        let first_pass = mains.clone().count();
        let second_pass = mains.count();

        assert_eq!(first_pass, 1);
        assert_eq!(second_pass, 1);
    }

    #[test]
    fn test_filter_by_category_empty() {
        let mut catalog = empty_catalog();
        catalog.add_item(candidate("Soup", Course::Starter, "40")).unwrap();

        assert_eq!(catalog.filter_by_category(Course::Dessert).count(), 0);
    }

    #[test]
    fn test_average_price_empty_course() {
        let catalog = empty_catalog();

        assert_eq!(catalog.average_price_by_category(Course::Starter), "0.00");
    }

    #[test]
    fn test_average_price_by_category() {
        let mut catalog = empty_catalog();
        catalog.add_item(candidate("Wings", Course::Starter, "120")).unwrap();
        catalog.add_item(candidate("Ribs", Course::Starter, "150")).unwrap();
        catalog.add_item(candidate("Steak", Course::Main, "300")).unwrap();

        assert_eq!(catalog.average_price_by_category(Course::Starter), "135.00");
        assert_eq!(catalog.average_price_by_category(Course::Main), "300.00");
        assert_eq!(catalog.average_price_by_category(Course::Dessert), "0.00");
    }

    #[test]
    fn test_category_summary() {
        let catalog = MenuCatalog::default();
        let summary = catalog.category_summary();

        assert_eq!(summary.len(), 3);
        assert_eq!(summary[0].course, Course::Starter);
        assert_eq!(summary[0].count, 1);
        assert_eq!(summary[0].average_price, "150.00");
        assert_eq!(summary[1].average_price, "114.00");
        assert_eq!(summary[2].average_price, "55.00");
    }

    #[test]
    fn test_search_items() {
        let catalog = MenuCatalog::default();

        // Name
        let hits = catalog.search_items("BURGER");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Beef burger and chips");

        // Description
        let hits = catalog.search_items("cocoa");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Chocolate cake");

        // Ingredient shared by two dishes, catalog order
        let hits: Vec<&str> = catalog
            .search_items("butter")
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(hits, vec!["Buffalo wings", "Chocolate cake"]);

        assert!(catalog.search_items("sushi").is_empty());
    }

    #[test]
    fn test_search_blank_query_returns_everything() {
        let catalog = MenuCatalog::default();

        assert_eq!(catalog.search_items("").len(), 3);
        assert_eq!(catalog.search_items("   ").len(), 3);
    }
}
