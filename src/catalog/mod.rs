pub mod filter;
pub mod search;
pub mod sort;

pub use filter::FilterOptions;
pub use search::search_products;
pub use sort::SortKey;

use crate::entities::product::Product;

//derives the visible product list for the shop page: pure function of
//its inputs, recomputed on every filter/sort/search change
#[derive(Clone, Debug, Default)]
pub struct CatalogQuery {
    pub route_category: Option<String>,
    pub filters: FilterOptions,
    pub sort: SortKey,
    pub search: Option<String>,
}

impl CatalogQuery {
    pub fn results(&self, all_products: &[Product]) -> Vec<Product> {
        let mut products = all_products.to_vec();

        filter::apply(&mut products, self.route_category.as_deref(), &self.filters);

        if let Some(query) = self.search.as_deref() {
            if !query.is_empty() {
                products.retain(|product| search::matches(product, query));
            }
        }

        sort::apply(&mut products, self.sort);
        products
    }
}
