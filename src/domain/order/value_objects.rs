use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Order Value Objects
// ============================================================================

/// Identifier handed back by the gateway once an order is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Delivery status, a closed choice on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Pendiente")]
    Pending,
    #[serde(rename = "En camino")]
    InTransit,
    #[serde(rename = "Entregado")]
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::InTransit,
        OrderStatus::Delivered,
    ];

    /// Label shown in the status select
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pendiente",
            OrderStatus::InTransit => "En Camino",
            OrderStatus::Delivered => "Entregado",
        }
    }
}

/// One product entry attached to an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "productLabel")]
    pub label: String,
    #[serde(rename = "productUnits")]
    pub units: u32,
}

impl LineItem {
    pub fn new(label: impl Into<String>, units: u32) -> Self {
        Self {
            label: label.into(),
            units,
        }
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - Unidades: {}", self.label, self.units)
    }
}

/// Fully validated order, ready for the gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    #[serde(rename = "orderTitle")]
    pub title: String,
    #[serde(rename = "userId")]
    pub customer_id: String,
    #[serde(rename = "state")]
    pub status: OrderStatus,
    #[serde(rename = "initialPoint")]
    pub origin_point: String,
    #[serde(rename = "destinyPoint")]
    pub destination_point: String,
    #[serde(rename = "asignedUserId")]
    pub courier_id: String,
    #[serde(rename = "products")]
    pub line_items: Vec<LineItem>,
}

// ============================================================================
// Unit Tests
// ============================================================================
