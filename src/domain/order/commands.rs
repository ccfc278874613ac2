use super::value_objects::OrderStatus;

// ============================================================================
// Composer Commands - Represent operator intent on the order form
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum ComposerCommand {
    SetTitle(String),
    SelectCustomer(String),
    SelectStatus(OrderStatus),
    SetOriginPoint(String),
    SetDestinationPoint(String),
    SelectCourier(String),
    AddProduct,
    EditProduct { index: usize },
    DeleteProduct { index: usize },
    SetProductLabel(String),
    SetProductUnits(String),
    ConfirmProduct,
    CancelProduct,
}
