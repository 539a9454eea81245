use migration::seed_data::{COUNTRIES, GUESTS, STATUSES};
use time::OffsetDateTime;

use crate::errors::domain::DomainError;
use crate::repos::{Country, GuestInvitation, InvitationStatus};

pub(super) fn countries() -> Vec<Country> {
    COUNTRIES
        .iter()
        .map(|&(id, code, name_en, name_lt)| Country {
            id,
            country_code: code.to_string(),
            country_name_en: name_en.to_string(),
            country_name_lt: name_lt.to_string(),
        })
        .collect()
}

pub(super) fn statuses() -> Result<Vec<InvitationStatus>, DomainError> {
    STATUSES
        .iter()
        .map(|&(id, name)| {
            Ok(InvitationStatus {
                id,
                status_name: name.parse()?,
            })
        })
        .collect()
}

pub(super) fn invitations(created_at: OffsetDateTime) -> Vec<GuestInvitation> {
    GUESTS
        .iter()
        .zip(1_i64..)
        .map(
            |(&(guid, full_name, call, language, fly_from, status_id), id)| GuestInvitation {
                id,
                invite_guid: guid.to_string(),
                guest_full_name: full_name.to_string(),
                guest_call: call.to_string(),
                guest_language: language.to_string(),
                fly_from,
                status_id,
                created_at,
                updated_at: None,
            },
        )
        .collect()
}
