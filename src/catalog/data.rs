// src/catalog/data.rs
use super::models::{Category, Product, Shipment, TimelineStep};
use indexmap::IndexMap;

#[allow(clippy::too_many_arguments)]
fn product(
    id: u32,
    name: &str,
    category: Category,
    location: &str,
    price: u32,
    unit: &str,
    badge: &str,
    icon: &str,
) -> Product {
    Product {
        id,
        name: name.into(),
        category,
        location: location.into(),
        price,
        unit: unit.into(),
        badge: badge.into(),
        icon: icon.into(),
    }
}

fn step(label: &str, time: &str, reached: bool) -> TimelineStep {
    TimelineStep {
        label: label.into(),
        time: time.into(),
        reached,
    }
}

pub fn builtin_products() -> Vec<Product> {
    use Category::*;

    vec![
        product(1, "Fresh Tomatoes", Vegetables, "Punjab, India", 45, "/kg", "Organic", "🍅"),
        product(2, "Basmati Rice", Grains, "Haryana, India", 85, "/kg", "Premium", "🌾"),
        product(3, "Fresh Milk", Dairy, "Gujarat, India", 55, "/liter", "A2", "🥛"),
        product(4, "Mangoes", Fruits, "Maharashtra, India", 120, "/kg", "Alphonso", "🥭"),
        product(5, "Fresh Spinach", Vegetables, "West Bengal, India", 30, "/kg", "Organic", "🥬"),
        product(6, "Bananas", Fruits, "Tamil Nadu, India", 40, "/dozen", "Fresh", "🍌"),
        product(7, "Cottage Cheese", Dairy, "Punjab, India", 180, "/kg", "Fresh", "🧀"),
        product(8, "Carrots", Vegetables, "Karnataka, India", 35, "/kg", "Organic", "🥕"),
        product(9, "Apples", Fruits, "Himachal Pradesh, India", 150, "/kg", "Premium", "🍎"),
    ]
}

pub fn builtin_shipments() -> IndexMap<String, Shipment> {
    let mut shipments = IndexMap::new();

    shipments.insert(
        "FL-2024-8523".to_string(),
        Shipment {
            status: "In Transit".into(),
            product: "Fresh Tomatoes".into(),
            from: "Punjab".into(),
            to: "Delhi".into(),
            estimated: "2 hours".into(),
            timeline: vec![
                step("Order Placed", "Today, 8:00 AM", true),
                step("Picked Up", "Today, 9:30 AM", true),
                step("In Transit", "Today, 11:00 AM", true),
                step("Out for Delivery", "Expected 2:00 PM", false),
                step("Delivered", "Expected 3:00 PM", false),
            ],
        },
    );

    shipments.insert(
        "FL-2024-7621".to_string(),
        Shipment {
            status: "Delivered".into(),
            product: "Basmati Rice".into(),
            from: "Haryana".into(),
            to: "Mumbai".into(),
            estimated: "Delivered".into(),
            timeline: vec![
                step("Order Placed", "Yesterday, 7:00 AM", true),
                step("Picked Up", "Yesterday, 10:00 AM", true),
                step("In Transit", "Yesterday, 2:00 PM", true),
                step("Out for Delivery", "Today, 8:00 AM", true),
                step("Delivered", "Today, 10:30 AM", true),
            ],
        },
    );

    shipments.insert(
        "FL-2024-9142".to_string(),
        Shipment {
            status: "Processing".into(),
            product: "Fresh Milk".into(),
            from: "Gujarat".into(),
            to: "Ahmedabad".into(),
            estimated: "4 hours".into(),
            timeline: vec![
                step("Order Placed", "Today, 10:00 AM", true),
                step("Processing", "In Progress", true),
                step("Ready for Pickup", "Pending", false),
                step("In Transit", "Pending", false),
                step("Delivered", "Expected 2:00 PM", false),
            ],
        },
    );

    shipments
}
