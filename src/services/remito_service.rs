use chrono::NaiveDate;
use web_sys::{File, FormData};

use super::api_client::{ApiClient, ApiError};
use crate::models::{FiltrosRemitos, Remito, RemitoPayload, RespuestaPaginada};

const ENTIDAD: &str = "Remito";

/// Query params de `GET /remito` para un juego de filtros confirmado.
/// En el camino de fechas-local (`incluir_fechas = false`) el rango NO viaja:
/// el backend devuelve hasta 1000 filas y el recorte se hace acá.
pub fn params_listado(filtros: &FiltrosRemitos, incluir_fechas: bool) -> Vec<(&'static str, String)> {
    let mut extras: Vec<(&'static str, String)> = Vec::new();
    let numero = filtros.numero_asignado.trim();
    if !numero.is_empty() {
        extras.push(("numeroAsignado", numero.to_string()));
    }
    if let Some(id) = filtros.cliente_id {
        extras.push(("clienteId", id.to_string()));
    }
    if let Some(id) = filtros.destino_id {
        extras.push(("destinoId", id.to_string()));
    }
    if let Some(id) = filtros.estado_id {
        extras.push(("estadoId", id.to_string()));
    }
    if let Some(prioridad) = filtros.prioridad {
        extras.push(("prioridad", prioridad.clave().to_string()));
    }
    if incluir_fechas {
        if let Some(desde) = filtros.fecha_desde {
            extras.push(("fechaDesde", formato_fecha(desde)));
        }
        if let Some(hasta) = filtros.fecha_hasta {
            extras.push(("fechaHasta", formato_fecha(hasta)));
        }
    }
    extras
}

fn formato_fecha(fecha: NaiveDate) -> String {
    fecha.format("%Y-%m-%d").to_string()
}

pub async fn buscar_remitos(
    api: &ApiClient,
    pagina: u32,
    limite: u32,
    filtros: &FiltrosRemitos,
    incluir_fechas: bool,
) -> Result<RespuestaPaginada<Remito>, ApiError> {
    let extras = params_listado(filtros, incluir_fechas);
    let url = api.url_paginada("/remito", pagina, limite, &extras);
    api.get_json_url(&url, ENTIDAD).await
}

/// Remitos ya agendados para un día (agenda)
pub async fn buscar_remitos_agendados(
    api: &ApiClient,
    fecha: NaiveDate,
    limite: u32,
) -> Result<RespuestaPaginada<Remito>, ApiError> {
    let extras = vec![("fechaAgenda", formato_fecha(fecha))];
    let url = api.url_paginada("/remito", 1, limite, &extras);
    api.get_json_url(&url, ENTIDAD).await
}

pub async fn obtener_remito(api: &ApiClient, id: i64) -> Result<Remito, ApiError> {
    api.get_json(&format!("/remito/{}", id), ENTIDAD).await
}

/// Alta de remito (`POST /remitoFinal`): multipart con los escalares, las
/// mercaderías como JSON string y el archivo adjunto si lo hay.
pub async fn crear_remito(
    api: &ApiClient,
    payload: &RemitoPayload,
    archivo: Option<File>,
) -> Result<Remito, ApiError> {
    log::info!("📝 Creando remito {}", payload.numero_asignado);
    let form = armar_form(payload, archivo)?;
    api.post_multipart("/remitoFinal", form, ENTIDAD).await
}

/// Edición: JSON cuando no cambia el adjunto, multipart cuando sí.
pub async fn actualizar_remito(
    api: &ApiClient,
    id: i64,
    payload: &RemitoPayload,
    archivo: Option<File>,
) -> Result<Remito, ApiError> {
    let ruta = format!("/remito/{}", id);
    match archivo {
        Some(_) => {
            let form = armar_form(payload, archivo)?;
            api.put_multipart(&ruta, form, ENTIDAD).await
        }
        None => {
            let cuerpo = serde_json::json!({
                "numeroAsignado": payload.numero_asignado,
                "observaciones": payload.observaciones,
                "prioridad": payload.prioridad,
                "clienteId": payload.cliente_id,
                "destinoId": payload.destino_id,
                "mercaderias": payload.mercaderias,
            });
            api.put_json(&ruta, &cuerpo, ENTIDAD).await
        }
    }
}

/// Transición de estado confirmada por el servidor. El remito devuelto es la
/// fuente de verdad: nunca avanzamos estado local sin esta respuesta.
/// `motivo` solo viaja en "No entregado" (el backend lo acumula en
/// razonesNoEntrega).
pub async fn actualizar_estado(
    api: &ApiClient,
    id: i64,
    estado_id: i64,
    motivo: Option<&str>,
) -> Result<Remito, ApiError> {
    let ruta = format!("/remito/{}/estado/{}", id, estado_id);
    match motivo {
        Some(motivo) => {
            let cuerpo = serde_json::json!({ "motivo": motivo });
            api.put_json(&ruta, &cuerpo, ENTIDAD).await
        }
        None => api.put_vacio(&ruta, ENTIDAD).await,
    }
}

/// Reentrega one-shot: el backend marca esReentrega=true y devuelve el remito
/// con las mercaderías recargadas en un ciclo Autorizado nuevo.
pub async fn iniciar_reentrega(api: &ApiClient, id: i64) -> Result<Remito, ApiError> {
    log::info!("🔁 Iniciando reentrega del remito {}", id);
    api.post_vacio(&format!("/remito/{}/iniciar-reentrega", id), ENTIDAD)
        .await
}

/// Liberar un remito retenido: el servidor restaura el estado previo.
pub async fn liberar(api: &ApiClient, id: i64) -> Result<Remito, ApiError> {
    api.put_vacio(&format!("/remito/{}/liberar", id), ENTIDAD)
        .await
}

/// Setea o limpia la fecha de agenda (atributo ortogonal al estado)
pub async fn agendar(
    api: &ApiClient,
    id: i64,
    fecha: Option<NaiveDate>,
) -> Result<Remito, ApiError> {
    let cuerpo = serde_json::json!({ "fechaAgenda": fecha.map(formato_fecha) });
    api.put_json(&format!("/remito/{}", id), &cuerpo, ENTIDAD)
        .await
}

pub async fn eliminar_remito(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    log::info!("🗑️ Eliminando remito {}", id);
    api.delete(&format!("/remito/{}", id), ENTIDAD).await
}

fn armar_form(payload: &RemitoPayload, archivo: Option<File>) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(|_| ApiError::Formato("FormData".to_string()))?;
    let _ = form.append_with_str("numeroAsignado", &payload.numero_asignado);
    let _ = form.append_with_str("observaciones", &payload.observaciones);
    let _ = form.append_with_str("prioridad", payload.prioridad.clave());
    let _ = form.append_with_str("clienteId", &payload.cliente_id.to_string());
    let _ = form.append_with_str("destinoId", &payload.destino_id.to_string());
    let mercaderias = serde_json::to_string(&payload.mercaderias)
        .map_err(|e| ApiError::Formato(e.to_string()))?;
    let _ = form.append_with_str("mercaderias", &mercaderias);
    if let Some(archivo) = archivo {
        let _ = form.append_with_blob_and_filename("archivoAdjunto", &archivo, &archivo.name());
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Prioridad;

    fn fecha(d: &str) -> NaiveDate {
        d.parse().unwrap()
    }

    #[test]
    fn los_campos_vacios_no_viajan() {
        let filtros = FiltrosRemitos {
            numero_asignado: "   ".to_string(),
            ..Default::default()
        };
        assert!(params_listado(&filtros, true).is_empty());
    }

    #[test]
    fn el_numero_viaja_trimmeado() {
        let filtros = FiltrosRemitos {
            numero_asignado: "  R-0042 ".to_string(),
            ..Default::default()
        };
        let params = params_listado(&filtros, true);
        assert_eq!(params, vec![("numeroAsignado", "R-0042".to_string())]);
    }

    #[test]
    fn en_el_camino_local_las_fechas_no_viajan() {
        let filtros = FiltrosRemitos {
            cliente_id: Some(7),
            prioridad: Some(Prioridad::Urgente),
            fecha_desde: Some(fecha("2024-01-01")),
            fecha_hasta: Some(fecha("2024-01-31")),
            ..Default::default()
        };
        let con_fechas = params_listado(&filtros, true);
        assert!(con_fechas.iter().any(|(k, _)| *k == "fechaDesde"));
        assert!(con_fechas.iter().any(|(k, _)| *k == "fechaHasta"));

        let sin_fechas = params_listado(&filtros, false);
        assert_eq!(
            sin_fechas,
            vec![
                ("clienteId", "7".to_string()),
                ("prioridad", "urgente".to_string()),
            ]
        );
    }
}
