use super::api_client::{ApiClient, ApiError};
use crate::models::{CampoBusquedaDestino, Destino, DestinoPayload, RespuestaPaginada};

const ENTIDAD: &str = "Destino";

/// Mismo contrato de búsqueda que clientes: un único par `{campo: valor}`,
/// trimmeado, omitido si quedó vacío.
pub fn params_busqueda(
    filtro: &Option<(CampoBusquedaDestino, String)>,
) -> Vec<(&'static str, String)> {
    match filtro {
        Some((campo, valor)) => vec![(campo.clave(), valor.trim().to_string())],
        None => Vec::new(),
    }
}

pub async fn buscar_destinos(
    api: &ApiClient,
    pagina: u32,
    limite: u32,
    filtro: Option<(CampoBusquedaDestino, String)>,
) -> Result<RespuestaPaginada<Destino>, ApiError> {
    let extras = params_busqueda(&filtro);
    let url = api.url_paginada("/destino", pagina, limite, &extras);
    api.get_json_url(&url, ENTIDAD).await
}

pub async fn obtener_destino(api: &ApiClient, id: i64) -> Result<Destino, ApiError> {
    api.get_json(&format!("/destino/{}", id), ENTIDAD).await
}

pub async fn crear_destino(api: &ApiClient, payload: &DestinoPayload) -> Result<Destino, ApiError> {
    log::info!("📝 Creando destino: {}", payload.nombre);
    api.post_json("/destino", payload, ENTIDAD).await
}

pub async fn actualizar_destino(
    api: &ApiClient,
    id: i64,
    payload: &DestinoPayload,
) -> Result<Destino, ApiError> {
    api.put_json(&format!("/destino/{}", id), payload, ENTIDAD)
        .await
}

pub async fn eliminar_destino(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    log::info!("🗑️ Eliminando destino {}", id);
    api.delete(&format!("/destino/{}", id), ENTIDAD).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cada_campo_de_busqueda_usa_su_clave() {
        for campo in CampoBusquedaDestino::todos() {
            let filtro = Some((campo, "Rosario".to_string()));
            let params = params_busqueda(&filtro);
            assert_eq!(params, vec![(campo.clave(), "Rosario".to_string())]);
        }
    }

    #[test]
    fn el_payload_de_destino_serializa_en_camel_case() {
        let payload = DestinoPayload {
            nombre: "Depósito Rosario".to_string(),
            pais: crate::models::Pais::Argentina,
            provincia: "Santa Fe".to_string(),
            localidad: "Rosario".to_string(),
            direccion: "Av. Circunvalación 100".to_string(),
            contactos: Vec::new(),
        };
        let v = serde_json::to_value(&payload).unwrap();
        assert_eq!(v["nombre"], "Depósito Rosario");
        assert_eq!(v["pais"], "Argentina");
        assert!(v["contactos"].as_array().unwrap().is_empty());
    }
}
