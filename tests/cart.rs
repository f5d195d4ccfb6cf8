use tokio;
use vitrina::store::backend::{MemoryBackend, StorageBackend};
use vitrina::store::seed::sample_products;
use vitrina::{Cart, CartLine, StoreError, CART_STORAGE_KEY};

fn line(product_id: &str, size: &str, color: &str, quantity: u32) -> CartLine {
    CartLine {
        id: CartLine::line_id(product_id, size, color),
        product_id: product_id.to_owned(),
        name: format!("Product {}", product_id),
        name_ar: String::new(),
        price: 10.0,
        image: String::new(),
        size: size.to_owned(),
        color: color.to_owned(),
        quantity,
    }
}

#[test]
fn test_same_variant_merges_into_one_line() {
    let mut cart = Cart::new();

    // Step 1: Add the same product variant twice
    cart.add(line("1", "M", "black", 1));
    cart.add(line("1", "M", "black", 1));

    // Step 2: One line with the summed quantity
    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items()[0].quantity, 2);
    assert_eq!(cart.items()[0].id, "1-M-black");
}

#[test]
fn test_different_variants_stay_separate() {
    let mut cart = Cart::new();
    cart.add(line("1", "M", "black", 1));
    cart.add(line("1", "L", "black", 1));
    cart.add(line("1", "M", "gray", 1));

    assert_eq!(cart.items().len(), 3);
    assert_eq!(cart.total_items(), 3);
}

#[test]
fn test_remove_returns_the_dropped_line() {
    let mut cart = Cart::new();
    cart.add(line("1", "M", "black", 2));

    let removed = cart.remove("1-M-black").expect("Line should exist");
    assert_eq!(removed.quantity, 2);
    assert!(cart.is_empty());
    assert!(cart.remove("1-M-black").is_none());
}

#[test]
fn test_set_quantity_zero_drops_the_line() {
    let mut cart = Cart::new();
    cart.add(line("1", "M", "black", 3));

    cart.set_quantity("1-M-black", 5);
    assert_eq!(cart.items()[0].quantity, 5);

    cart.set_quantity("1-M-black", 0);
    assert!(cart.is_empty());

    // Unknown ids are ignored
    cart.set_quantity("2-L-blue", 4);
    assert!(cart.is_empty());
}

#[test]
fn test_totals() {
    let mut cart = Cart::new();
    let mut cheap = line("1", "M", "black", 2);
    cheap.price = 24.99;
    let mut dear = line("2", "L", "blue", 1);
    dear.price = 89.99;
    cart.add(cheap);
    cart.add(dear);

    assert_eq!(cart.total_items(), 3);
    assert_eq!(cart.total_price(), 24.99 * 2.0 + 89.99);

    cart.clear();
    assert!(cart.is_empty());
    assert_eq!(cart.total_price(), 0.0);
}

#[test]
fn test_checkout_summary_shipping_threshold() {
    // Step 1: Below the threshold the flat rate applies
    let mut cart = Cart::new();
    let mut small = line("1", "M", "black", 1);
    small.price = 49.99;
    cart.add(small);

    let summary = cart.checkout_summary();
    assert_eq!(summary.subtotal, 49.99);
    assert_eq!(summary.shipping, 5.99);
    assert_eq!(summary.tax, 49.99 * 0.08);
    assert_eq!(summary.grand_total, 49.99 + 5.99 + 49.99 * 0.08);

    // Step 2: Above the threshold shipping is free
    cart.set_quantity("1-M-black", 2);
    let summary = cart.checkout_summary();
    assert_eq!(summary.shipping, 0.0);
    assert_eq!(summary.grand_total, summary.subtotal + summary.tax);
}

#[test]
fn test_from_product_snapshots_the_listing() {
    let products = sample_products();
    let hoodie = &products[0];

    let line = CartLine::from_product(hoodie, "M", "black", 2);
    assert_eq!(line.id, "1-M-black");
    assert_eq!(line.product_id, hoodie.id);
    assert_eq!(line.name, hoodie.name);
    assert_eq!(line.price, hoodie.price);
    assert_eq!(line.image, hoodie.images[0]);
    assert_eq!(line.quantity, 2);
}

#[tokio::test]
async fn test_cart_persists_under_its_own_key() {
    let backend = MemoryBackend::new();

    // Step 1: Save a cart with one line
    let mut cart = Cart::new();
    cart.add(line("1", "M", "black", 2));
    cart.save(&backend, CART_STORAGE_KEY)
        .await
        .expect("Failed to save cart");

    // Step 2: Loading from the same key reproduces it
    let loaded = Cart::load(&backend, CART_STORAGE_KEY)
        .await
        .expect("Failed to load cart");
    assert_eq!(loaded, cart);

    // Step 3: A missing key loads as an empty cart
    let empty = Cart::load(&backend, "some-other-key")
        .await
        .expect("Failed to load missing cart");
    assert!(empty.is_empty());
}

#[tokio::test]
async fn test_corrupt_cart_payload_is_a_snapshot_error() {
    let backend = MemoryBackend::new();
    backend
        .write(CART_STORAGE_KEY, "{not json")
        .await
        .expect("Failed to write corrupt payload");

    let err = Cart::load(&backend, CART_STORAGE_KEY)
        .await
        .expect_err("Corrupt payload should not load");
    assert!(matches!(err, StoreError::Snapshot(_)));
}
