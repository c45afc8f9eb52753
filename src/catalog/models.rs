// src/catalog/models.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Vegetables,
    Grains,
    Dairy,
    Fruits,
}

impl Category {
    /// Filter-bar order.
    pub const ALL: [Category; 4] = [
        Category::Vegetables,
        Category::Grains,
        Category::Dairy,
        Category::Fruits,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Vegetables => "vegetables",
            Category::Grains => "grains",
            Category::Dairy => "dairy",
            Category::Fruits => "fruits",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Vegetables => "Vegetables",
            Category::Grains => "Grains",
            Category::Dairy => "Dairy",
            Category::Fruits => "Fruits",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: Category,
    pub location: String,
    /// Whole rupees.
    pub price: u32,
    pub unit: String,
    pub badge: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineStep {
    pub label: String,
    pub time: String,
    pub reached: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    pub status: String,
    pub product: String,
    pub from: String,
    pub to: String,
    pub estimated: String,
    /// Display order, assumed chronological.
    pub timeline: Vec<TimelineStep>,
}

impl Shipment {
    pub fn reached_steps(&self) -> usize {
        self.timeline.iter().filter(|s| s.reached).count()
    }
}
