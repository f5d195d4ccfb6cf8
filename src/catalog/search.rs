use crate::entities::product::Product;

pub(crate) fn matches(product: &Product, query: &str) -> bool {
    let needle = query.to_lowercase();
    product.name.to_lowercase().contains(&needle)
        || product.description.to_lowercase().contains(&needle)
}

//global search path: name/description containment only, no filter stages
pub fn search_products(products: &[Product], query: &str) -> Vec<Product> {
    if query.is_empty() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|product| matches(product, query))
        .cloned()
        .collect()
}
