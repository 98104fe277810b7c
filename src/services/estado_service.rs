use super::api_client::{ApiClient, ApiError};
use crate::models::{Estado, EstadoRemito};

/// Enumeración de referencia `GET /estado`. Se carga una vez por vista y se
/// usa para mapear nombre ↔ id en las transiciones.
pub async fn obtener_estados(api: &ApiClient) -> Result<Vec<Estado>, ApiError> {
    api.get_json("/estado", "Estado").await
}

/// Id del estado del backend que corresponde a un estado del ciclo de vida
pub fn id_de_estado(estados: &[Estado], estado: EstadoRemito) -> Option<i64> {
    estados
        .iter()
        .find(|e| e.nombre == estado.nombre())
        .map(|e| e.id)
}

/// Estado del ciclo de vida que corresponde a una fila del backend
pub fn estado_por_id(estados: &[Estado], id: i64) -> Option<EstadoRemito> {
    estados
        .iter()
        .find(|e| e.id == id)
        .and_then(|e| EstadoRemito::desde_nombre(&e.nombre))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estados_de_prueba() -> Vec<Estado> {
        [
            "Autorizado",
            "En preparación",
            "En carga",
            "En camino",
            "Entregado",
            "No entregado",
            "Retenido",
        ]
        .iter()
        .enumerate()
        .map(|(i, nombre)| Estado {
            id: i as i64 + 1,
            nombre: nombre.to_string(),
        })
        .collect()
    }

    #[test]
    fn nombre_e_id_van_y_vuelven() {
        let estados = estados_de_prueba();
        let id = id_de_estado(&estados, EstadoRemito::EnCamino).unwrap();
        assert_eq!(estado_por_id(&estados, id), Some(EstadoRemito::EnCamino));
    }

    #[test]
    fn ids_desconocidos_no_mapean() {
        let estados = estados_de_prueba();
        assert_eq!(estado_por_id(&estados, 99), None);
        assert_eq!(id_de_estado(&[], EstadoRemito::Autorizado), None);
    }
}
