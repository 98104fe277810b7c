pub mod api_client;
pub mod cliente_service;
pub mod destino_service;
pub mod email_service;
pub mod estado_service;
pub mod georef_service;
pub mod keep_alive;
pub mod remito_service;

pub use api_client::{ApiClient, ApiError};
pub use keep_alive::KeepAliveService;
