//! Type-specific processing rules
//!
//! Each rule sets the status of one order. Collaborator faults of the
//! matching family become a terminal status; any other error is returned to
//! the caller.

use crate::adapters::export::TabularExporter;
use crate::adapters::verification::{ApiStatus, VerificationClient, VerificationResponse};
use crate::domain::constants::{
    EXPORT_COLUMNS, HIGH_VALUE_NOTE_LABEL, HIGH_VALUE_NOTE_TEXT, HIGH_VALUE_ORDER_THRESHOLD,
    PROCESSED_ORDER_THRESHOLD, VERIFICATION_DATA_THRESHOLD,
};
use crate::domain::{Order, OrderFlowError, OrderStatus, OwnerId, Result};
use uuid::Uuid;

/// Default prefix of Type A sink names
pub const DEFAULT_FILE_PREFIX: &str = "orders_type_A";

/// Owner segment used when a batch has no owner
pub const UNASSIGNED_OWNER: &str = "unassigned";

/// Builds a unique sink name: `{prefix}_{owner}_{unix_millis}_{uuid8}.csv`
pub fn export_sink_name(prefix: &str, owner_id: Option<OwnerId>) -> String {
    let owner = owner_id.map_or_else(|| UNASSIGNED_OWNER.to_string(), |id| id.to_string());
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{prefix}_{owner}_{millis}_{}.csv", &suffix[..8])
}

/// Data rows for a Type A export
///
/// One row with the order's current values, plus a note row for high-value
/// orders.
pub fn export_rows(order: &Order) -> Vec<Vec<String>> {
    let mut rows = vec![vec![
        order.id().to_string(),
        order.order_type().to_string(),
        format!("{:.2}", order.amount()),
        order.is_special().to_string(),
        order.status().to_string(),
        order.priority().to_string(),
    ]];

    if order.amount() > HIGH_VALUE_ORDER_THRESHOLD {
        let mut note = vec![String::new(); EXPORT_COLUMNS.len() - 2];
        note.push(HIGH_VALUE_NOTE_LABEL.to_string());
        note.push(HIGH_VALUE_NOTE_TEXT.to_string());
        rows.push(note);
    }

    rows
}

/// Export rule for Type A orders
///
/// # Errors
///
/// Returns any exporter error other than an export fault.
pub async fn export_order(
    order: &mut Order,
    owner_id: Option<OwnerId>,
    exporter: &dyn TabularExporter,
    file_prefix: &str,
) -> Result<()> {
    let sink_name = export_sink_name(file_prefix, owner_id);
    let rows = export_rows(order);

    match exporter.write(&sink_name, &EXPORT_COLUMNS, &rows).await {
        Ok(()) => {
            tracing::debug!(order_id = %order.id(), sink = %sink_name, "Order exported");
            order.set_status(OrderStatus::Exported);
            Ok(())
        }
        Err(OrderFlowError::Export(e)) => {
            tracing::warn!(order_id = %order.id(), sink = %sink_name, error = %e, "Export failed");
            order.set_status(OrderStatus::ExportFailed);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Maps a verification response to a status
///
/// # Errors
///
/// Returns a validation error for a success response without data.
pub fn verification_status(order: &Order, response: &VerificationResponse) -> Result<OrderStatus> {
    match response.status {
        ApiStatus::Success => {
            let data = response.data.ok_or_else(|| {
                OrderFlowError::Validation(format!(
                    "Verification of order {} succeeded without data",
                    order.id()
                ))
            })?;

            if data >= VERIFICATION_DATA_THRESHOLD && order.amount() < PROCESSED_ORDER_THRESHOLD {
                Ok(OrderStatus::Processed)
            } else if data < VERIFICATION_DATA_THRESHOLD || order.is_special() {
                Ok(OrderStatus::Pending)
            } else {
                Ok(OrderStatus::Error)
            }
        }
        ApiStatus::Failure | ApiStatus::Error => Ok(OrderStatus::ApiError),
    }
}

/// Verification rule for Type B orders
///
/// # Errors
///
/// Returns any client error other than a verification fault, and the error
/// from [`verification_status`].
pub async fn verify_order(order: &mut Order, client: &dyn VerificationClient) -> Result<()> {
    let status = match client.verify(order.id()).await {
        Ok(response) => verification_status(order, &response)?,
        Err(OrderFlowError::Verification(e)) => {
            tracing::warn!(order_id = %order.id(), error = %e, "Verification call failed");
            OrderStatus::ApiFailure
        }
        Err(e) => return Err(e),
    };

    order.set_status(status);
    Ok(())
}

/// Completion rule for Type C orders
pub fn complete_order(order: &mut Order) {
    let status = if order.is_special() {
        OrderStatus::Completed
    } else {
        OrderStatus::InProgress
    };
    order.set_status(status);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrderId, OrderType};
    use test_case::test_case;

    fn order(amount: f64, is_special: bool) -> Order {
        Order::new(OrderId::new(1), OrderType::B, amount, is_special).unwrap()
    }

    #[test_case(60.0, 50.0, false => OrderStatus::Processed; "data at threshold and small amount")]
    #[test_case(99.99, 80.0, true => OrderStatus::Processed; "processed wins over special")]
    #[test_case(150.0, 30.0, false => OrderStatus::Pending; "low data")]
    #[test_case(150.0, 60.0, true => OrderStatus::Pending; "special with high amount")]
    #[test_case(100.0, 60.0, false => OrderStatus::Error; "amount at threshold")]
    #[test_case(150.0, 50.0, false => OrderStatus::Error; "high amount not special")]
    fn test_verification_status_success(amount: f64, data: f64, is_special: bool) -> OrderStatus {
        verification_status(
            &order(amount, is_special),
            &VerificationResponse::success(data),
        )
        .unwrap()
    }

    #[test_case(ApiStatus::Failure)]
    #[test_case(ApiStatus::Error)]
    fn test_verification_status_not_success(status: ApiStatus) {
        let result =
            verification_status(&order(10.0, false), &VerificationResponse::with_status(status));
        assert_eq!(result.unwrap(), OrderStatus::ApiError);
    }

    #[test]
    fn test_success_without_data_is_unclassified() {
        let err = verification_status(
            &order(10.0, false),
            &VerificationResponse::with_status(ApiStatus::Success),
        )
        .unwrap_err();
        assert!(!err.is_collaborator_fault());
    }

    #[test]
    fn test_export_rows() {
        let order = Order::new(OrderId::new(7), OrderType::A, 151.0, true).unwrap();
        let rows = export_rows(&order);
        assert_eq!(
            rows,
            vec![
                vec!["7", "A", "151.00", "true", "new", "low"],
                vec!["", "", "", "", "Note", "High value order"],
            ]
        );

        let order = Order::new(OrderId::new(8), OrderType::A, 150.0, false).unwrap();
        assert_eq!(export_rows(&order).len(), 1);
    }

    #[test]
    fn test_export_sink_name() {
        let name = export_sink_name(DEFAULT_FILE_PREFIX, Some(OwnerId::new(42)));
        let re = regex::Regex::new(r"^orders_type_A_42_\d+_[0-9a-f]{8}\.csv$").unwrap();
        assert!(re.is_match(&name), "unexpected sink name {name}");

        let name = export_sink_name("custom", None);
        assert!(name.starts_with("custom_unassigned_"));
        assert_ne!(name, export_sink_name("custom", None));
    }

    #[test]
    fn test_complete_order() {
        let mut special = Order::new(OrderId::new(1), OrderType::C, 5.0, true).unwrap();
        complete_order(&mut special);
        assert_eq!(special.status(), OrderStatus::Completed);

        let mut regular = Order::new(OrderId::new(2), OrderType::C, 5.0, false).unwrap();
        complete_order(&mut regular);
        assert_eq!(regular.status(), OrderStatus::InProgress);
    }
}
