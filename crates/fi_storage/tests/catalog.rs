use fi_core::{Category, CategoryFilter, NewsItem};
use fi_storage::{MemorySource, NewsCatalog};

fn catalog() -> NewsCatalog {
    NewsCatalog::new(MemorySource::seeded().items().to_vec())
}

fn ids(items: &[NewsItem]) -> Vec<u32> {
    items.iter().map(|i| i.id).collect()
}

#[test]
fn test_all_with_empty_search_returns_everything_in_order() {
    let catalog = catalog();
    let result = catalog.query("all", "");
    assert_eq!(result, catalog.items());
    assert_eq!(ids(&result), vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_category_filter_only_keeps_that_category() {
    let catalog = catalog();
    for category in Category::ALL {
        let result = catalog.query(category.as_str(), "");
        assert!(!result.is_empty());
        assert!(result.iter().all(|i| i.category == category));
    }
}

#[test]
fn test_technology_tab() {
    let result = catalog().query("Technology", "");
    assert_eq!(ids(&result), vec![1, 6]);
}

#[test]
fn test_search_is_case_insensitive_over_title_and_summary() {
    let catalog = catalog();

    let result = catalog.query("all", "championship");
    assert_eq!(ids(&result), vec![3]);

    // "transformer" only appears in the summary of item 1
    let result = catalog.query("all", "TRANSFORMER");
    assert_eq!(ids(&result), vec![1]);

    for text in ["ai", "Market", "record", "zzz"] {
        let needle = text.to_lowercase();
        for item in catalog.query("all", text) {
            assert!(
                item.title.to_lowercase().contains(&needle)
                    || item.summary.to_lowercase().contains(&needle)
            );
        }
    }
    assert!(catalog.query("all", "zzz").is_empty());
}

#[test]
fn test_tab_value_must_match_exactly() {
    let catalog = catalog();
    assert!(catalog.query("technology", "").is_empty());
    assert!(catalog.query("ALL", "").is_empty());
    assert!(catalog.query(" Sports ", "").is_empty());
    assert!(catalog.query("all ", "").is_empty());
    assert_eq!(ids(&catalog.query("Sports", "")), vec![3, 8]);
}

#[test]
fn test_category_and_search_combine() {
    let catalog = catalog();
    let result = catalog.query_filter(CategoryFilter::Only(Category::Business), "bitcoin");
    assert_eq!(ids(&result), vec![7]);
    assert!(catalog.query("Sports", "bitcoin").is_empty());
}

#[test]
fn test_query_is_deterministic() {
    let catalog = catalog();
    assert_eq!(catalog.query("all", "new"), catalog.query("all", "new"));
    assert_eq!(catalog.query("Sports", ""), catalog.query("Sports", ""));
}

#[test]
fn test_featured_prefers_trending() {
    let catalog = catalog();

    assert!(NewsCatalog::featured(&[]).is_none());

    let all = catalog.query("all", "");
    assert_eq!(NewsCatalog::featured(&all).map(|i| i.id), Some(1));

    // Politics has no trending item, so the first one is featured
    let politics = catalog.query("Politics", "");
    assert_eq!(NewsCatalog::featured(&politics).map(|i| i.id), Some(5));

    // Item 3 is not trending but item 8 is
    let sports = catalog.query("Sports", "");
    assert_eq!(NewsCatalog::featured(&sports).map(|i| i.id), Some(8));
}
