// Configuración del envío programado de reportes por correo (cron del
// backend) y ABM de destinatarios.

use serde::{Deserialize, Serialize};

use super::api_client::{ApiClient, ApiError};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CronConfig {
    pub habilitado: bool,
    /// Expresión cron que interpreta el backend (p. ej. "0 8 * * 1-5")
    pub expresion: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EmailDestinatario {
    pub id: i64,
    pub correo: String,
    pub nombre: String,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EmailDestinatarioPayload {
    pub correo: String,
    pub nombre: String,
}

pub async fn obtener_cron_config(api: &ApiClient) -> Result<CronConfig, ApiError> {
    api.get_json("/api/email/cron-config", "Configuración").await
}

pub async fn guardar_cron_config(
    api: &ApiClient,
    config: &CronConfig,
) -> Result<CronConfig, ApiError> {
    api.post_json("/api/email/cron-config", config, "Configuración")
        .await
}

pub async fn actualizar_horario(api: &ApiClient, expresion: &str) -> Result<CronConfig, ApiError> {
    let cuerpo = serde_json::json!({ "expresion": expresion });
    api.post_json("/api/email/update-schedule", &cuerpo, "Configuración")
        .await
}

pub async fn obtener_destinatarios(api: &ApiClient) -> Result<Vec<EmailDestinatario>, ApiError> {
    api.get_json("/api/email-destinatarios", "Destinatario").await
}

pub async fn crear_destinatario(
    api: &ApiClient,
    payload: &EmailDestinatarioPayload,
) -> Result<EmailDestinatario, ApiError> {
    api.post_json("/api/email-destinatarios", payload, "Destinatario")
        .await
}

pub async fn actualizar_destinatario(
    api: &ApiClient,
    id: i64,
    payload: &EmailDestinatarioPayload,
) -> Result<EmailDestinatario, ApiError> {
    api.put_json(&format!("/api/email-destinatarios/{}", id), payload, "Destinatario")
        .await
}

pub async fn eliminar_destinatario(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/api/email-destinatarios/{}", id), "Destinatario")
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn la_cron_config_va_y_vuelve_del_json_del_backend() {
        let json = r#"{"habilitado":true,"expresion":"0 8 * * 1-5"}"#;
        let config: CronConfig = serde_json::from_str(json).unwrap();
        assert!(config.habilitado);
        assert_eq!(config.expresion, "0 8 * * 1-5");
        assert_eq!(serde_json::to_string(&config).unwrap(), json);
    }

    #[test]
    fn el_payload_de_destinatario_no_lleva_id() {
        let payload = EmailDestinatarioPayload {
            correo: "deposito@acme.com.ar".to_string(),
            nombre: "Depósito".to_string(),
        };
        let v = serde_json::to_value(&payload).unwrap();
        assert_eq!(v["correo"], "deposito@acme.com.ar");
        assert_eq!(v["nombre"], "Depósito");
        assert!(v.get("id").is_none());
    }
}
