use chrono::{DateTime, TimeZone, Utc};

use crate::entities::{Address, AddressKind, CartLine, Category, Order, OrderStatus, Product};

pub fn sample_products() -> Vec<Product> {
    let mut products = vec![
        Product {
            id: "1".to_owned(),
            name: "Loose Fit Hoodie".to_owned(),
            name_ar: "هودي فضفاض".to_owned(),
            description: "Relaxed fit hoodie in soft brushed fleece.".to_owned(),
            description_ar: "هودي بقصة مريحة من قماش ناعم.".to_owned(),
            price: 24.99,
            original_price: Some(34.99),
            discount: None,
            images: vec![pexels(8532616)],
            category: "men".to_owned(),
            category_ar: "رجال".to_owned(),
            sizes: strings(&["S", "M", "L", "XL"]),
            colors: strings(&["black", "gray"]),
            rating: 4.5,
            review_count: 128,
            in_stock: true,
            featured: true,
            tags: strings(&["hoodie", "casual", "winter"]),
            brand: "NextGen".to_owned(),
            created_at: jan(15),
            updated_at: None,
        },
        Product {
            id: "2".to_owned(),
            name: "Striped Jacket".to_owned(),
            name_ar: "جاكيت مخطط".to_owned(),
            description: "Tailored jacket with a fine stripe pattern.".to_owned(),
            description_ar: "جاكيت أنيق بنقشة مخططة.".to_owned(),
            price: 89.99,
            original_price: None,
            discount: None,
            images: vec![pexels(8532617)],
            category: "men".to_owned(),
            category_ar: "رجال".to_owned(),
            sizes: strings(&["M", "L", "XL"]),
            colors: strings(&["blue", "navy"]),
            rating: 4.7,
            review_count: 86,
            in_stock: true,
            featured: true,
            tags: strings(&["jacket", "formal"]),
            brand: "Fashion Co".to_owned(),
            created_at: jan(12),
            updated_at: None,
        },
        Product {
            id: "3".to_owned(),
            name: "Gradient T-shirt".to_owned(),
            name_ar: "تي شيرت متدرج".to_owned(),
            description: "Lightweight cotton tee with a gradient print.".to_owned(),
            description_ar: "تي شيرت قطني خفيف بطباعة متدرجة.".to_owned(),
            price: 19.99,
            original_price: Some(24.99),
            discount: None,
            images: vec![pexels(8532618)],
            category: "men".to_owned(),
            category_ar: "رجال".to_owned(),
            sizes: strings(&["XS", "S", "M", "L", "XL"]),
            colors: strings(&["white", "gray"]),
            rating: 4.2,
            review_count: 54,
            in_stock: true,
            featured: false,
            tags: strings(&["t-shirt", "summer"]),
            brand: "Style Plus".to_owned(),
            created_at: jan(18),
            updated_at: None,
        },
        Product {
            id: "4".to_owned(),
            name: "Summer Dress".to_owned(),
            name_ar: "فستان صيفي".to_owned(),
            description: "Flowy midi dress in breathable fabric.".to_owned(),
            description_ar: "فستان متوسط الطول من قماش يسمح بمرور الهواء.".to_owned(),
            price: 49.99,
            original_price: Some(69.99),
            discount: None,
            images: vec![pexels(8532619)],
            category: "women".to_owned(),
            category_ar: "نساء".to_owned(),
            sizes: strings(&["XS", "S", "M", "L"]),
            colors: strings(&["red", "pink", "yellow"]),
            rating: 4.8,
            review_count: 203,
            in_stock: true,
            featured: true,
            tags: strings(&["dress", "summer"]),
            brand: "Trendy".to_owned(),
            created_at: jan(20),
            updated_at: None,
        },
        Product {
            id: "5".to_owned(),
            name: "Classic Blazer".to_owned(),
            name_ar: "بليزر كلاسيكي".to_owned(),
            description: "Single-breasted blazer for everyday office wear.".to_owned(),
            description_ar: "بليزر بصف أزرار واحد للارتداء اليومي.".to_owned(),
            price: 119.99,
            original_price: None,
            discount: None,
            images: vec![pexels(8532620)],
            category: "women".to_owned(),
            category_ar: "نساء".to_owned(),
            sizes: strings(&["S", "M", "L"]),
            colors: strings(&["black", "navy"]),
            rating: 4.6,
            review_count: 77,
            in_stock: true,
            featured: false,
            tags: strings(&["blazer", "office"]),
            brand: "Fashion Co".to_owned(),
            created_at: jan(8),
            updated_at: None,
        },
        Product {
            id: "6".to_owned(),
            name: "Polo Shirt".to_owned(),
            name_ar: "قميص بولو".to_owned(),
            description: "Pique polo shirt with a two-button placket.".to_owned(),
            description_ar: "قميص بولو بياقة كلاسيكية.".to_owned(),
            price: 29.99,
            original_price: None,
            discount: None,
            images: vec![pexels(8532621)],
            category: "men".to_owned(),
            category_ar: "رجال".to_owned(),
            sizes: strings(&["S", "M", "L", "XL", "XXL"]),
            colors: strings(&["white", "navy", "green"]),
            rating: 4.3,
            review_count: 65,
            in_stock: false,
            featured: false,
            tags: strings(&["polo", "casual"]),
            brand: "NextGen".to_owned(),
            created_at: jan(5),
            updated_at: None,
        },
        Product {
            id: "7".to_owned(),
            name: "Kids Rainbow Tee".to_owned(),
            name_ar: "تي شيرت قوس قزح للأطفال".to_owned(),
            description: "Colorful crew-neck tee for kids.".to_owned(),
            description_ar: "تي شيرت ملون بياقة دائرية للأطفال.".to_owned(),
            price: 14.99,
            original_price: Some(19.99),
            discount: None,
            images: vec![pexels(8532622)],
            category: "children".to_owned(),
            category_ar: "أطفال".to_owned(),
            sizes: strings(&["XS", "S", "M"]),
            colors: strings(&["yellow", "green", "pink"]),
            rating: 4.9,
            review_count: 41,
            in_stock: true,
            featured: false,
            tags: strings(&["t-shirt", "kids"]),
            brand: "Style Plus".to_owned(),
            created_at: jan(22),
            updated_at: None,
        },
        Product {
            id: "8".to_owned(),
            name: "Denim Jacket".to_owned(),
            name_ar: "جاكيت جينز".to_owned(),
            description: "Washed denim jacket with button front.".to_owned(),
            description_ar: "جاكيت جينز مغسول بأزرار أمامية.".to_owned(),
            price: 39.99,
            original_price: None,
            discount: None,
            images: vec![pexels(8532623)],
            category: "children".to_owned(),
            category_ar: "أطفال".to_owned(),
            sizes: strings(&["XS", "S", "M"]),
            colors: strings(&["blue"]),
            rating: 4.4,
            review_count: 92,
            in_stock: true,
            featured: true,
            tags: strings(&["jacket", "denim"]),
            brand: "Trendy".to_owned(),
            created_at: jan(10),
            updated_at: None,
        },
    ];
    //keeps the stored discount consistent with the price pair
    for product in &mut products {
        product.refresh_discount();
    }
    products
}

pub fn sample_categories() -> Vec<Category> {
    vec![
        Category {
            id: "1".to_owned(),
            name: "Men".to_owned(),
            name_ar: "رجال".to_owned(),
            slug: "men".to_owned(),
            image: pexels(1043474),
            products_count: 4,
            created_at: Some(jan(1)),
            updated_at: None,
        },
        Category {
            id: "2".to_owned(),
            name: "Women".to_owned(),
            name_ar: "نساء".to_owned(),
            slug: "women".to_owned(),
            image: pexels(972995),
            products_count: 2,
            created_at: Some(jan(1)),
            updated_at: None,
        },
        Category {
            id: "3".to_owned(),
            name: "Children".to_owned(),
            name_ar: "أطفال".to_owned(),
            slug: "children".to_owned(),
            image: pexels(1620760),
            products_count: 2,
            created_at: Some(jan(1)),
            updated_at: None,
        },
    ]
}

pub fn sample_orders() -> Vec<Order> {
    vec![
        Order {
            id: "001".to_owned(),
            user_id: "1".to_owned(),
            items: vec![CartLine {
                id: "1-M-black".to_owned(),
                product_id: "1".to_owned(),
                name: "Loose Fit Hoodie".to_owned(),
                name_ar: "هودي فضفاض".to_owned(),
                price: 24.99,
                image: pexels(8532616),
                size: "M".to_owned(),
                color: "black".to_owned(),
                quantity: 2,
            }],
            total: 49.98,
            status: OrderStatus::Processing,
            shipping_address: Address {
                id: "1".to_owned(),
                kind: AddressKind::Home,
                first_name: "John".to_owned(),
                last_name: "Doe".to_owned(),
                street: "123 Main St".to_owned(),
                city: "New York".to_owned(),
                state: "NY".to_owned(),
                zip_code: "10001".to_owned(),
                country: "USA".to_owned(),
                phone: "+1234567890".to_owned(),
                is_default: true,
            },
            payment_method: "card".to_owned(),
            created_at: jan(20),
            updated_at: jan(20),
        },
        Order {
            id: "002".to_owned(),
            user_id: "2".to_owned(),
            items: vec![CartLine {
                id: "2-L-blue".to_owned(),
                product_id: "2".to_owned(),
                name: "Striped Jacket".to_owned(),
                name_ar: "جاكيت مخطط".to_owned(),
                price: 89.99,
                image: pexels(8532617),
                size: "L".to_owned(),
                color: "blue".to_owned(),
                quantity: 1,
            }],
            total: 89.99,
            status: OrderStatus::Shipped,
            shipping_address: Address {
                id: "2".to_owned(),
                kind: AddressKind::Home,
                first_name: "Jane".to_owned(),
                last_name: "Smith".to_owned(),
                street: "456 Oak Ave".to_owned(),
                city: "Los Angeles".to_owned(),
                state: "CA".to_owned(),
                zip_code: "90001".to_owned(),
                country: "USA".to_owned(),
                phone: "+1987654321".to_owned(),
                is_default: true,
            },
            payment_method: "paypal".to_owned(),
            created_at: jan(19),
            updated_at: jan(19),
        },
    ]
}

//utils
fn jan(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 10, 0, 0).unwrap()
}

fn pexels(id: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{}/pexels-photo-{}.jpeg?auto=compress&cs=tinysrgb&w=800",
        id, id
    )
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
