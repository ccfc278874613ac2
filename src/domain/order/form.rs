use super::errors::{FieldError, ValidationErrors};
use super::value_objects::{LineItem, OrderDraft, OrderStatus};

// ============================================================================
// Order Form - raw operator input before validation
// ============================================================================

/// Required inputs of the order form, in the order they are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Customer,
    Status,
    OriginPoint,
    DestinationPoint,
    Courier,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Title,
        FormField::Customer,
        FormField::Status,
        FormField::OriginPoint,
        FormField::DestinationPoint,
        FormField::Courier,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Título de la Orden",
            FormField::Customer => "Asignar a cliente",
            FormField::Status => "Estado",
            FormField::OriginPoint => "Punto Inicial",
            FormField::DestinationPoint => "Punto de Destino",
            FormField::Courier => "Asignar a repartidor",
        }
    }

    /// Hint shown in the empty input
    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Title => "Introduce el título de la orden",
            FormField::Customer => "Selecciona un cliente asignado",
            FormField::Status => "Selecciona un estado",
            FormField::OriginPoint => "Introduce el punto inicial",
            FormField::DestinationPoint => "Introduce el punto de destino",
            FormField::Courier => "Selecciona un repartidor asignado",
        }
    }

    pub fn required_message(&self) -> &'static str {
        match self {
            FormField::Title => "Por favor ingresa un título para la orden",
            FormField::Customer => "Por favor selecciona un cliente asignado",
            FormField::Status => "Por favor selecciona un estado",
            FormField::OriginPoint => "Por favor ingresa el punto inicial",
            FormField::DestinationPoint => "Por favor ingresa el punto de destino",
            FormField::Courier => "Por favor selecciona un repartidor asignado",
        }
    }
}

/// Current values of the order inputs. Selections are `None` until chosen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderForm {
    pub title: String,
    pub customer_id: Option<String>,
    pub status: Option<OrderStatus>,
    pub origin_point: String,
    pub destination_point: String,
    pub courier_id: Option<String>,
}

impl OrderForm {
    fn text(value: &str) -> Option<&str> {
        Some(value).filter(|v| !v.is_empty())
    }

    fn choice(value: &Option<String>) -> Option<&str> {
        value.as_deref().filter(|v| !v.is_empty())
    }

    /// Validate and merge the line items into a complete draft.
    /// Every missing field is reported, in form order.
    pub fn to_draft(&self, line_items: &[LineItem]) -> Result<OrderDraft, ValidationErrors> {
        let title = Self::text(&self.title);
        let customer_id = Self::choice(&self.customer_id);
        let status = self.status;
        let origin_point = Self::text(&self.origin_point);
        let destination_point = Self::text(&self.destination_point);
        let courier_id = Self::choice(&self.courier_id);

        match (title, customer_id, status, origin_point, destination_point, courier_id) {
            (
                Some(title),
                Some(customer_id),
                Some(status),
                Some(origin_point),
                Some(destination_point),
                Some(courier_id),
            ) => Ok(OrderDraft {
                title: title.to_string(),
                customer_id: customer_id.to_string(),
                status,
                origin_point: origin_point.to_string(),
                destination_point: destination_point.to_string(),
                courier_id: courier_id.to_string(),
                line_items: line_items.to_vec(),
            }),
            _ => {
                let present = [
                    (FormField::Title, title.is_some()),
                    (FormField::Customer, customer_id.is_some()),
                    (FormField::Status, status.is_some()),
                    (FormField::OriginPoint, origin_point.is_some()),
                    (FormField::DestinationPoint, destination_point.is_some()),
                    (FormField::Courier, courier_id.is_some()),
                ];
                let errors = present
                    .into_iter()
                    .filter(|(_, ok)| !ok)
                    .map(|(field, _)| FieldError::missing(field))
                    .collect();
                Err(ValidationErrors::new(errors))
            }
        }
    }

    /// Check every required field without building a draft
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        self.to_draft(&[]).map(|_| ())
    }
}
