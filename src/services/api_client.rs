// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio: arma URLs, serializa, normaliza errores.
// Los servicios por recurso (cliente, destino, remito, ...) lo envuelven.
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::FormData;

use crate::utils::constants::backend_url;

/// Error normalizado de la capa de servicios. Los hooks lo atrapan, lo
/// loguean y degradan al resultado vacío; nunca llega crudo a la vista.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Error de red: {0}")]
    Red(String),
    #[error("{entidad} no encontrado")]
    NoEncontrado { entidad: &'static str },
    #[error("HTTP {status}: {mensaje}")]
    Http { status: u16, mensaje: String },
    #[error("Respuesta inválida del servidor: {0}")]
    Formato(String),
}

#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: backend_url().to_string(),
        }
    }

    /// Para tests y para apuntar a otra instancia (Render vs local)
    pub fn con_base(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn url(&self, ruta: &str) -> String {
        format!("{}{}", self.base_url, ruta)
    }

    /// Arma la query `page`, `limit` y pares extra `clave=valor`.
    /// Los valores vacíos no viajan.
    pub fn url_paginada(&self, ruta: &str, pagina: u32, limite: u32, extras: &[(&str, String)]) -> String {
        let mut url = format!("{}{}?page={}&limit={}", self.base_url, ruta, pagina, limite);
        for (clave, valor) in extras {
            if !valor.is_empty() {
                url.push('&');
                url.push_str(clave);
                url.push('=');
                url.push_str(&urlencode(valor));
            }
        }
        url
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        ruta: &str,
        entidad: &'static str,
    ) -> Result<T, ApiError> {
        let response = Request::get(&self.url(ruta))
            .send()
            .await
            .map_err(|e| ApiError::Red(e.to_string()))?;
        leer_json(response, entidad).await
    }

    /// GET con URL ya armada (paginadas y APIs externas)
    pub async fn get_json_url<T: DeserializeOwned>(
        &self,
        url: &str,
        entidad: &'static str,
    ) -> Result<T, ApiError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Red(e.to_string()))?;
        leer_json(response, entidad).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        ruta: &str,
        cuerpo: &B,
        entidad: &'static str,
    ) -> Result<T, ApiError> {
        let response = Request::post(&self.url(ruta))
            .json(cuerpo)
            .map_err(|e| ApiError::Formato(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Red(e.to_string()))?;
        leer_json(response, entidad).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        ruta: &str,
        cuerpo: &B,
        entidad: &'static str,
    ) -> Result<T, ApiError> {
        let response = Request::put(&self.url(ruta))
            .json(cuerpo)
            .map_err(|e| ApiError::Formato(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Red(e.to_string()))?;
        leer_json(response, entidad).await
    }

    /// PUT sin cuerpo (p. ej. transiciones de estado, liberar)
    pub async fn put_vacio<T: DeserializeOwned>(
        &self,
        ruta: &str,
        entidad: &'static str,
    ) -> Result<T, ApiError> {
        let response = Request::put(&self.url(ruta))
            .send()
            .await
            .map_err(|e| ApiError::Red(e.to_string()))?;
        leer_json(response, entidad).await
    }

    pub async fn post_vacio<T: DeserializeOwned>(
        &self,
        ruta: &str,
        entidad: &'static str,
    ) -> Result<T, ApiError> {
        let response = Request::post(&self.url(ruta))
            .send()
            .await
            .map_err(|e| ApiError::Red(e.to_string()))?;
        leer_json(response, entidad).await
    }

    /// Multipart (alta/edición de remito con archivo adjunto)
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        ruta: &str,
        form: FormData,
        entidad: &'static str,
    ) -> Result<T, ApiError> {
        let response = Request::post(&self.url(ruta))
            .body(form)
            .map_err(|e| ApiError::Formato(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Red(e.to_string()))?;
        leer_json(response, entidad).await
    }

    pub async fn put_multipart<T: DeserializeOwned>(
        &self,
        ruta: &str,
        form: FormData,
        entidad: &'static str,
    ) -> Result<T, ApiError> {
        let response = Request::put(&self.url(ruta))
            .body(form)
            .map_err(|e| ApiError::Formato(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Red(e.to_string()))?;
        leer_json(response, entidad).await
    }

    pub async fn delete(&self, ruta: &str, entidad: &'static str) -> Result<(), ApiError> {
        let response = Request::delete(&self.url(ruta))
            .send()
            .await
            .map_err(|e| ApiError::Red(e.to_string()))?;
        chequear_status(&response, entidad)?;
        Ok(())
    }
}

async fn leer_json<T: DeserializeOwned>(
    response: Response,
    entidad: &'static str,
) -> Result<T, ApiError> {
    chequear_status(&response, entidad)?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Formato(e.to_string()))
}

fn chequear_status(response: &Response, entidad: &'static str) -> Result<(), ApiError> {
    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    if status == 404 {
        return Err(ApiError::NoEncontrado { entidad });
    }
    Err(ApiError::Http {
        status,
        mensaje: response.status_text(),
    })
}

/// Percent-encoding mínimo para valores de query (espacios y reservados).
fn urlencode(valor: &str) -> String {
    let mut salida = String::with_capacity(valor.len());
    for byte in valor.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                salida.push(byte as char)
            }
            _ => salida.push_str(&format!("%{:02X}", byte)),
        }
    }
    salida
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_paginada_omite_valores_vacios() {
        let api = ApiClient::con_base("http://localhost:3000");
        let url = api.url_paginada("/cliente", 1, 5, &[("razonSocial", String::new())]);
        assert_eq!(url, "http://localhost:3000/cliente?page=1&limit=5");
    }

    #[test]
    fn url_paginada_arma_un_solo_par_clave_valor() {
        let api = ApiClient::con_base("http://localhost:3000");
        let url = api.url_paginada("/cliente", 1, 5, &[("razonSocial", "ACME".to_string())]);
        assert_eq!(
            url,
            "http://localhost:3000/cliente?page=1&limit=5&razonSocial=ACME"
        );
    }

    #[test]
    fn los_valores_de_query_se_escapan() {
        let api = ApiClient::con_base("http://localhost:3000");
        let url = api.url_paginada(
            "/destino",
            2,
            5,
            &[("localidad", "Mar del Plata".to_string())],
        );
        assert_eq!(
            url,
            "http://localhost:3000/destino?page=2&limit=5&localidad=Mar%20del%20Plata"
        );
    }

    #[test]
    fn el_404_se_traduce_a_mensaje_de_entidad() {
        let err = ApiError::NoEncontrado { entidad: "Cliente" };
        assert_eq!(err.to_string(), "Cliente no encontrado");
    }
}
