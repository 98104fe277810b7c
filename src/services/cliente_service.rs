use super::api_client::{ApiClient, ApiError};
use crate::models::{CampoBusquedaCliente, Cliente, ClientePayload, RespuestaPaginada};

const ENTIDAD: &str = "Cliente";

/// Par de query de la búsqueda: el valor viaja trimmeado, y si quedó vacío
/// `url_paginada` lo omite.
pub fn params_busqueda(
    filtro: &Option<(CampoBusquedaCliente, String)>,
) -> Vec<(&'static str, String)> {
    match filtro {
        Some((campo, valor)) => vec![(campo.clave(), valor.trim().to_string())],
        None => Vec::new(),
    }
}

/// Listado paginado con búsqueda server-side por un único campo.
pub async fn buscar_clientes(
    api: &ApiClient,
    pagina: u32,
    limite: u32,
    filtro: Option<(CampoBusquedaCliente, String)>,
) -> Result<RespuestaPaginada<Cliente>, ApiError> {
    let extras = params_busqueda(&filtro);
    let url = api.url_paginada("/cliente", pagina, limite, &extras);
    api.get_json_url(&url, ENTIDAD).await
}

pub async fn obtener_cliente(api: &ApiClient, id: i64) -> Result<Cliente, ApiError> {
    api.get_json(&format!("/cliente/{}", id), ENTIDAD).await
}

pub async fn crear_cliente(api: &ApiClient, payload: &ClientePayload) -> Result<Cliente, ApiError> {
    log::info!("📝 Creando cliente: {}", payload.razon_social);
    api.post_json("/cliente", payload, ENTIDAD).await
}

/// El backend exige contactos no vacíos en la edición cuando el flag de
/// contactos está activo; la validación local ya lo bloqueó antes.
pub async fn actualizar_cliente(
    api: &ApiClient,
    id: i64,
    payload: &ClientePayload,
) -> Result<Cliente, ApiError> {
    api.put_json(&format!("/cliente/{}", id), payload, ENTIDAD)
        .await
}

pub async fn eliminar_cliente(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    log::info!("🗑️ Eliminando cliente {}", id);
    api.delete(&format!("/cliente/{}", id), ENTIDAD).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn la_busqueda_arma_un_solo_par_campo_valor() {
        let filtro = Some((CampoBusquedaCliente::CuitRut, " 20123456786 ".to_string()));
        assert_eq!(
            params_busqueda(&filtro),
            vec![("cuit_rut", "20123456786".to_string())]
        );
        assert!(params_busqueda(&None).is_empty());
    }

    #[test]
    fn la_busqueda_vacia_no_agrega_query() {
        let api = ApiClient::con_base("http://localhost:3000");
        let filtro = Some((CampoBusquedaCliente::RazonSocial, "   ".to_string()));
        let url = api.url_paginada("/cliente", 1, 5, &params_busqueda(&filtro));
        assert_eq!(url, "http://localhost:3000/cliente?page=1&limit=5");
    }
}
