use vitrina::store::seed::sample_products;
use vitrina::{search_products, CatalogQuery, FilterOptions, Product, SortKey};

fn ids(products: &[Product]) -> Vec<&str> {
    products.iter().map(|product| product.id.as_str()).collect()
}

#[test]
fn test_default_query_keeps_every_sample_product() {
    // Step 1: Run the pipeline with untouched defaults
    let products = sample_products();
    let query = CatalogQuery::default();
    let results = query.results(&products);

    // Step 2: Every sample product is priced inside the default range
    assert_eq!(results.len(), products.len());
    for product in &results {
        assert!(product.price >= 0.0 && product.price <= 200.0);
    }
}

#[test]
fn test_results_are_a_subset_of_the_input() {
    let products = sample_products();
    let query = CatalogQuery {
        filters: FilterOptions {
            rating: 4.5,
            in_stock: true,
            ..FilterOptions::default()
        },
        sort: SortKey::PriceLow,
        ..CatalogQuery::default()
    };

    let results = query.results(&products);
    for result in &results {
        assert!(
            products.iter().any(|product| product.id == result.id),
            "result {} does not come from the input set",
            result.id
        );
    }
}

#[test]
fn test_route_category_narrows_and_all_does_not() {
    let products = sample_products();

    let men = CatalogQuery {
        route_category: Some("men".to_owned()),
        ..CatalogQuery::default()
    };
    let results = men.results(&products);
    assert_eq!(results.len(), 4);
    assert!(results.iter().all(|product| product.category == "men"));

    let all = CatalogQuery {
        route_category: Some("all".to_owned()),
        ..CatalogQuery::default()
    };
    assert_eq!(all.results(&products).len(), products.len());
}

#[test]
fn test_panel_categories_apply_even_with_a_route_category() {
    let products = sample_products();

    // Step 1: Panel selection alone narrows to women
    let panel_only = CatalogQuery {
        filters: FilterOptions {
            categories: vec!["women".to_owned()],
            ..FilterOptions::default()
        },
        ..CatalogQuery::default()
    };
    assert_eq!(panel_only.results(&products).len(), 2);

    // Step 2: A conflicting route category intersects down to nothing
    let conflicting = CatalogQuery {
        route_category: Some("men".to_owned()),
        filters: FilterOptions {
            categories: vec!["women".to_owned()],
            ..FilterOptions::default()
        },
        ..CatalogQuery::default()
    };
    assert!(conflicting.results(&products).is_empty());
}

#[test]
fn test_price_range_bounds_are_inclusive() {
    let mut products = sample_products();
    products.truncate(2);
    products[0].price = 10.0;
    products[1].price = 30.0;

    let query = CatalogQuery {
        filters: FilterOptions {
            price_range: (10.0, 30.0),
            ..FilterOptions::default()
        },
        ..CatalogQuery::default()
    };
    assert_eq!(query.results(&products).len(), 2);

    let below = CatalogQuery {
        filters: FilterOptions {
            price_range: (10.01, 30.0),
            ..FilterOptions::default()
        },
        ..CatalogQuery::default()
    };
    assert_eq!(below.results(&products).len(), 1);
}

#[test]
fn test_out_of_range_product_is_dropped_by_default_filters() {
    let mut products = sample_products();
    products[0].price = 250.0;

    let query = CatalogQuery::default();
    let results = query.results(&products);
    assert_eq!(results.len(), products.len() - 1);
    assert!(results.iter().all(|product| product.id != products[0].id));
}

#[test]
fn test_size_and_color_filters_match_any_overlap() {
    let products = sample_products();

    let sizes = CatalogQuery {
        filters: FilterOptions {
            sizes: vec!["XXL".to_owned()],
            ..FilterOptions::default()
        },
        ..CatalogQuery::default()
    };
    // Only the polo shirt carries XXL
    assert_eq!(ids(&sizes.results(&products)), vec!["6"]);

    let colors = CatalogQuery {
        filters: FilterOptions {
            colors: vec!["red".to_owned(), "burgundy".to_owned()],
            ..FilterOptions::default()
        },
        ..CatalogQuery::default()
    };
    // The summer dress is the only red product, nothing is burgundy
    assert_eq!(ids(&colors.results(&products)), vec!["4"]);
}

#[test]
fn test_brand_filter() {
    let products = sample_products();
    let query = CatalogQuery {
        filters: FilterOptions {
            brands: vec!["Fashion Co".to_owned()],
            ..FilterOptions::default()
        },
        ..CatalogQuery::default()
    };
    assert_eq!(ids(&query.results(&products)), vec!["2", "5"]);
}

#[test]
fn test_rating_threshold_is_skipped_at_zero() {
    let products = sample_products();

    let zero = CatalogQuery::default();
    assert_eq!(zero.results(&products).len(), products.len());

    let strict = CatalogQuery {
        filters: FilterOptions {
            rating: 4.5,
            ..FilterOptions::default()
        },
        ..CatalogQuery::default()
    };
    let results = strict.results(&products);
    assert!(results.iter().all(|product| product.rating >= 4.5));
    assert_eq!(results.len(), 5);
}

#[test]
fn test_in_stock_and_on_sale_flags() {
    let products = sample_products();

    let stocked = CatalogQuery {
        filters: FilterOptions {
            in_stock: true,
            ..FilterOptions::default()
        },
        ..CatalogQuery::default()
    };
    // The polo shirt is the only out-of-stock sample
    assert!(stocked
        .results(&products)
        .iter()
        .all(|product| product.id != "6"));

    let on_sale = CatalogQuery {
        filters: FilterOptions {
            on_sale: true,
            ..FilterOptions::default()
        },
        ..CatalogQuery::default()
    };
    // Default featured sort floats 1 and 4 ahead of the rest
    assert_eq!(ids(&on_sale.results(&products)), vec!["1", "4", "3", "7"]);
}

#[test]
fn test_sort_price_low_and_high_are_reverses() {
    let products = sample_products();

    let low = CatalogQuery {
        sort: SortKey::PriceLow,
        ..CatalogQuery::default()
    };
    let low_results = low.results(&products);
    assert_eq!(ids(&low_results), vec!["7", "3", "1", "6", "8", "4", "2", "5"]);

    let high = CatalogQuery {
        sort: SortKey::PriceHigh,
        ..CatalogQuery::default()
    };
    let high_results = high.results(&products);
    let mut reversed = ids(&high_results);
    reversed.reverse();
    assert_eq!(ids(&low_results), reversed);
}

#[test]
fn test_sort_rating_and_newest() {
    let products = sample_products();

    let rating = CatalogQuery {
        sort: SortKey::Rating,
        ..CatalogQuery::default()
    };
    assert_eq!(
        ids(&rating.results(&products)),
        vec!["7", "4", "2", "5", "1", "8", "6", "3"]
    );

    let newest = CatalogQuery {
        sort: SortKey::Newest,
        ..CatalogQuery::default()
    };
    assert_eq!(
        ids(&newest.results(&products)),
        vec!["7", "4", "3", "1", "2", "8", "5", "6"]
    );
}

#[test]
fn test_featured_sort_is_stable() {
    let products = sample_products();
    let query = CatalogQuery {
        sort: SortKey::Featured,
        ..CatalogQuery::default()
    };
    // Featured products first, original order preserved inside each group
    assert_eq!(
        ids(&query.results(&products)),
        vec!["1", "2", "4", "8", "3", "5", "6", "7"]
    );
}

#[test]
fn test_search_stage_runs_inside_the_pipeline() {
    let products = sample_products();
    let query = CatalogQuery {
        search: Some("HOODIE".to_owned()),
        sort: SortKey::PriceLow,
        ..CatalogQuery::default()
    };
    assert_eq!(ids(&query.results(&products)), vec!["1"]);

    let empty = CatalogQuery {
        search: Some(String::new()),
        ..CatalogQuery::default()
    };
    assert_eq!(empty.results(&products).len(), products.len());
}

#[test]
fn test_search_products_matches_name_or_description() {
    let products = sample_products();

    let by_name = search_products(&products, "jacket");
    assert_eq!(ids(&by_name), vec!["2", "8"]);

    // "fleece" only appears in the hoodie description
    let by_description = search_products(&products, "fleece");
    assert_eq!(ids(&by_description), vec!["1"]);

    let everything = search_products(&products, "");
    assert_eq!(everything.len(), products.len());
}

#[test]
fn test_sort_key_string_round_trip() {
    for key in [
        SortKey::Featured,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Rating,
        SortKey::Newest,
    ] {
        let parsed = key
            .as_str()
            .parse::<SortKey>()
            .expect("Failed to parse sort key back from its string form");
        assert_eq!(parsed, key);
    }
    assert!("price".parse::<SortKey>().is_err());
}
