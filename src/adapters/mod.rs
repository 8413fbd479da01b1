// Adapters layer: concrete implementations of the domain ports against
// external systems (Home Assistant REST API, tokio timers, tracing).

pub mod clock;
pub mod events;
pub mod hass;
pub mod resolver;
