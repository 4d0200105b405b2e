pub mod collections;
pub mod events;
pub mod index;
pub mod login;
pub mod moderation;
pub mod spots;

/// Configures the web app by adding services from each web file.
pub fn configure(conf: &mut actix_web::web::ServiceConfig) {
    // Route resolution stops at the first match.
    index::configure(conf);
    login::configure(conf);
    moderation::configure(conf);
    spots::configure(conf);
    events::configure(conf);
    collections::configure(conf);
}
