// ============================================================================
// Composer Configuration
// ============================================================================

#[derive(Clone, Debug)]
pub struct ComposerConfig {
    /// Route the host navigates to after an order is created
    pub orders_route: String,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            orders_route: "/orders".to_string(),
        }
    }
}

impl ComposerConfig {
    pub fn with_orders_route(mut self, route: impl Into<String>) -> Self {
        self.orders_route = route.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_route() {
        assert_eq!(ComposerConfig::default().orders_route, "/orders");
    }

    #[test]
    fn test_with_orders_route() {
        let config = ComposerConfig::default().with_orders_route("/pedidos");
        assert_eq!(config.orders_route, "/pedidos");
    }
}
