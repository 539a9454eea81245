use actix_web::web;

pub mod countries;
pub mod guests;
pub mod health;
pub mod invitations;

/// Registers every route. `main.rs` adds middleware around this; tests mount
/// it directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Invitation routes: /api/invitations/{invite_guid}/**
    cfg.service(web::scope("/api/invitations").configure(invitations::configure_routes));

    // Guest routes: /api/guests/{guest_id}/**
    cfg.service(web::scope("/api/guests").configure(guests::configure_routes));

    // Country routes: /api/countries
    cfg.service(web::scope("/api/countries").configure(countries::configure_routes));
}
