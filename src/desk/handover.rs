use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::DeskError;
use super::timestamp::long_timestamp;
use crate::database::models::{NewOccurrence, RosterEntry};

/// Notes written during a shift plus the two employees handing over.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandoverDraft {
    #[serde(default)]
    pub outgoing_employee_name: String,
    #[serde(default)]
    pub incoming_employee_name: String,
    #[serde(default)]
    pub note: String,
}

fn selected<'a>(
    roster: &[RosterEntry],
    name: &'a str,
    role: &'static str,
) -> Result<&'a str, DeskError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DeskError::EmployeeNotSelected(role));
    }
    if !roster.iter().any(|entry| entry.name == name) {
        return Err(DeskError::UnknownEmployee(name.to_string()));
    }
    Ok(name)
}

/// Turns a handover draft into an occurrence stamped with the long timestamp.
///
/// The draft is only borrowed: on failure the caller still holds the note.
pub fn compose_handover(
    roster: &[RosterEntry],
    draft: &HandoverDraft,
    now: NaiveDateTime,
) -> Result<NewOccurrence, DeskError> {
    let outgoing = selected(roster, &draft.outgoing_employee_name, "outgoing")?;
    let incoming = selected(roster, &draft.incoming_employee_name, "incoming")?;

    let note = draft.note.trim();
    if note.is_empty() {
        return Err(DeskError::EmptyNote);
    }

    Ok(NewOccurrence {
        outgoing_employee_name: outgoing.to_string(),
        incoming_employee_name: incoming.to_string(),
        description: note.to_string(),
        timestamp: long_timestamp(now),
    })
}
