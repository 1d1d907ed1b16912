use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::database::models::{
    DeliveryVisitInput, NewDeliveryVisit, NewPackage, NewReceivedItem, PackageInput,
    ReceivedItemInput, Recipient, UNKNOWN_COMPANY, VisitorInput,
};
use crate::database::repositories::{
    CompanyRepository, DeliveryRepository, NewVisitor, PackageRepository, ResidentRepository,
};
use crate::desk::{self, DeskError, require, short_timestamp};
use crate::error::AppError;

/// Draws allowed before giving up on finding a free withdrawal code.
const MAX_CODE_ATTEMPTS: usize = 32;

/// Recipient fields copied onto a package or visit.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRecipient {
    pub name: String,
    pub unit: String,
    pub block: String,
    pub resident_id: Option<Uuid>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Copies name, unit and block from the resident, or checks the typed-in
/// fields. Only the unit is mandatory for manual entries.
pub async fn resolve_recipient(
    residents: &ResidentRepository,
    recipient: &Recipient,
) -> Result<ResolvedRecipient, AppError> {
    match recipient {
        Recipient::Linked { resident_id } => {
            let resident = residents
                .get_resident_by_id(*resident_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Resident not found".to_string()))?;

            Ok(ResolvedRecipient {
                name: resident.name,
                unit: resident.unit,
                block: resident.block,
                resident_id: Some(resident.id),
            })
        }
        Recipient::Manual {
            recipient_name,
            unit,
            block,
        } => Ok(ResolvedRecipient {
            name: recipient_name.trim().to_string(),
            unit: require(unit, "unit")?,
            block: block.trim().to_string(),
            resident_id: None,
        }),
    }
}

pub async fn prepare_package(
    residents: &ResidentRepository,
    packages: &PackageRepository,
    input: PackageInput,
    now: NaiveDateTime,
) -> Result<NewPackage, AppError> {
    let recipient = resolve_recipient(residents, &input.recipient).await?;
    let recipient_name = require(&recipient.name, "recipientName")?;
    let package_type = require(&input.package_type, "packageType")?;

    let taken = packages.get_pending_withdrawal_codes().await?;
    let withdrawal_code = desk::unused_withdrawal_code(&taken, MAX_CODE_ATTEMPTS)
        .ok_or_else(|| {
            AppError::internal_server_error_message("Could not allocate a free withdrawal code")
        })?;

    Ok(NewPackage {
        unit: recipient.unit,
        block: recipient.block,
        recipient_name,
        package_type,
        sender: non_empty(input.sender),
        tracking_code: non_empty(input.tracking_code),
        withdrawal_code,
        received_at: short_timestamp(now),
        description: non_empty(input.description),
        observations: non_empty(input.observations),
    })
}

pub async fn prepare_visitor(
    residents: &ResidentRepository,
    input: VisitorInput,
    now: NaiveDateTime,
) -> Result<NewVisitor, AppError> {
    let name = require(&input.name, "name")?;
    let host = resolve_recipient(residents, &input.host).await?;

    Ok(NewVisitor {
        name,
        document: non_empty(input.document),
        phone: non_empty(input.phone),
        unit: host.unit,
        block: host.block,
        resident_name: non_empty(Some(host.name)),
        resident_id: host.resident_id,
        entry_time: short_timestamp(now),
        observations: input.observations.trim().to_string(),
    })
}

pub async fn prepare_received_item(
    residents: &ResidentRepository,
    input: ReceivedItemInput,
    now: NaiveDateTime,
) -> Result<NewReceivedItem, AppError> {
    let recipient = resolve_recipient(residents, &input.recipient).await?;
    let left_by = require(&input.left_by, "leftBy")?;
    let description = require(&input.description, "description")?;

    Ok(NewReceivedItem {
        operation_type: input.operation_type,
        unit: recipient.unit,
        block: recipient.block,
        recipient_name: non_empty(Some(recipient.name)),
        resident_id: recipient.resident_id,
        left_by,
        document: non_empty(input.document),
        description,
        shift: input.shift.trim().to_string(),
        observations: input.observations.trim().to_string(),
        received_at: short_timestamp(now),
    })
}

/// Name shown for a driver's company. A missing or deleted company shows
/// as [`UNKNOWN_COMPANY`].
pub async fn resolve_company_name(
    companies: &CompanyRepository,
    company_id: Option<Uuid>,
) -> Result<String, AppError> {
    let company = match company_id {
        Some(id) => companies.get_company_by_id(id).await?,
        None => None,
    };

    Ok(company.map_or_else(|| UNKNOWN_COMPANY.to_string(), |c| c.name))
}

/// Copies driver and company from a registered driver, or takes the names
/// typed at the desk.
pub async fn prepare_delivery_visit(
    deliveries: &DeliveryRepository,
    input: DeliveryVisitInput,
) -> Result<NewDeliveryVisit, AppError> {
    if input.package_count < 0 {
        return Err(DeskError::NegativePackageCount.into());
    }

    let (driver_name, company_name) = match input.driver_id {
        Some(driver_id) => {
            let driver = deliveries
                .get_driver_by_id(driver_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Delivery driver not found".to_string()))?;
            (driver.name, driver.company_name)
        }
        None => (
            require(&input.driver_name, "driverName")?,
            input.company_name.trim().to_string(),
        ),
    };

    Ok(NewDeliveryVisit {
        driver_id: input.driver_id,
        driver_name,
        company_name,
        package_count: input.package_count,
        shift: input.shift,
        observations: input.observations.trim().to_string(),
    })
}
