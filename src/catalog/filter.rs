use crate::entities::product::Product;

#[derive(Clone, Debug, PartialEq)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub price_range: (f32, f32),
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub brands: Vec<String>,
    pub rating: f32,
    pub in_stock: bool,
    pub on_sale: bool,
}

impl Default for FilterOptions {
    fn default() -> FilterOptions {
        FilterOptions {
            categories: Vec::new(),
            price_range: (0.0, 200.0),
            sizes: Vec::new(),
            colors: Vec::new(),
            brands: Vec::new(),
            rating: 0.0,
            in_stock: false,
            on_sale: false,
        }
    }
}

//stages run in a fixed order, each one narrowing the working set
pub(crate) fn apply(
    products: &mut Vec<Product>,
    route_category: Option<&str>,
    filters: &FilterOptions,
) {
    if let Some(route) = route_category {
        if route != "all" {
            products.retain(|product| product.category == route);
        }
    }

    //the panel category filter runs on its own, even when a route
    //category already narrowed the set
    if !filters.categories.is_empty() {
        products.retain(|product| filters.categories.contains(&product.category));
    }

    let (min, max) = filters.price_range;
    products.retain(|product| product.price >= min && product.price <= max);

    if !filters.sizes.is_empty() {
        products.retain(|product| product.sizes.iter().any(|size| filters.sizes.contains(size)));
    }

    if !filters.colors.is_empty() {
        products.retain(|product| {
            product
                .colors
                .iter()
                .any(|color| filters.colors.contains(color))
        });
    }

    if !filters.brands.is_empty() {
        products.retain(|product| filters.brands.contains(&product.brand));
    }

    if filters.rating > 0.0 {
        products.retain(|product| product.rating >= filters.rating);
    }

    if filters.in_stock {
        products.retain(|product| product.in_stock);
    }

    if filters.on_sale {
        products.retain(|product| product.on_sale());
    }
}
