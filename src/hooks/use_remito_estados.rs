// ============================================================================
// CONTROLADOR DEL CICLO DE VIDA DEL REMITO (sincronizado con backend)
// ============================================================================
// estadoId es la fuente de verdad durable y hay otros operadores editando en
// paralelo: NINGUNA acción avanza el estado local sin el round-trip
// confirmado. La tabla de transiciones (models::estado) solo decide qué
// ofrecer y qué rechazar antes de llamar al servidor.
// ============================================================================

use yew::prelude::*;

use crate::models::{
    validar_accion, AccionRemito, ChecklistPreparacion, Estado, EstadoRemito, Remito,
};
use crate::services::{estado_service, remito_service, ApiClient};

/// Snapshot guardado al retener: estado previo + checklist de preparación,
/// para que "Liberar" restaure ambos tal cual estaban.
#[derive(Clone, PartialEq, Debug)]
pub struct SnapshotRetencion {
    pub estado_previo: EstadoRemito,
    pub checklist: ChecklistPreparacion,
}

impl SnapshotRetencion {
    /// Leyenda junto al botón Liberar: a qué estado vuelve el remito
    pub fn nota_liberar(&self) -> String {
        format!("Al liberar vuelve a \"{}\"", self.estado_previo.nombre())
    }
}

pub struct UseRemitoEstadosHandle {
    pub remito: UseStateHandle<Remito>,
    pub estados: UseStateHandle<Vec<Estado>>,
    pub checklist: UseStateHandle<ChecklistPreparacion>,
    pub ocupado: UseStateHandle<bool>,
    pub aviso: UseStateHandle<Option<String>>,
    /// Presente solo mientras el remito está retenido
    pub snapshot: UseStateHandle<Option<SnapshotRetencion>>,
    /// (acción, motivo) — el motivo solo aplica a "No entregado"
    pub ejecutar: Callback<(AccionRemito, Option<String>)>,
    /// (índice de mercadería, preparada)
    pub marcar_mercaderia: Callback<(usize, bool)>,
}

impl UseRemitoEstadosHandle {
    pub fn estado_actual(&self) -> Option<EstadoRemito> {
        estado_service::estado_por_id(&self.estados, self.remito.estado_id)
    }

    /// Acciones a ofrecer en la vista según la tabla de transiciones
    pub fn acciones(&self) -> Vec<AccionRemito> {
        self.estado_actual()
            .map(|e| e.acciones_disponibles(self.remito.es_reentrega))
            .unwrap_or_default()
    }

    /// Mensaje fijo cuando la reentrega ya se consumió
    pub fn reentrega_agotada(&self) -> bool {
        self.estado_actual() == Some(EstadoRemito::NoEntregado) && self.remito.es_reentrega
    }

    /// Leyenda de restauración mientras hay una retención activa
    pub fn nota_liberar(&self) -> Option<String> {
        self.snapshot.as_ref().map(SnapshotRetencion::nota_liberar)
    }
}

#[hook]
pub fn use_remito_estados(api: ApiClient, inicial: Remito) -> UseRemitoEstadosHandle {
    let cantidad_mercaderias = inicial.mercaderias.len();
    let remito = use_state(|| inicial);
    let estados = use_state(Vec::<Estado>::new);
    let checklist = use_state(|| ChecklistPreparacion::nueva(cantidad_mercaderias));
    let snapshot = use_state(|| None::<SnapshotRetencion>);
    let ocupado = use_state(|| false);
    let aviso = use_state(|| None::<String>);

    // Enumeración de estados: una sola carga al montar
    {
        let estados = estados.clone();
        let api = api.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match estado_service::obtener_estados(&api).await {
                    Ok(filas) => estados.set(filas),
                    Err(e) => log::error!("❌ Error cargando estados: {}", e),
                }
            });
            || ()
        });
    }

    let marcar_mercaderia = {
        let checklist = checklist.clone();
        Callback::from(move |(indice, preparada): (usize, bool)| {
            let mut nueva = (*checklist).clone();
            nueva.marcar(indice, preparada);
            checklist.set(nueva);
        })
    };

    let ejecutar = {
        let remito = remito.clone();
        let estados = estados.clone();
        let checklist = checklist.clone();
        let snapshot = snapshot.clone();
        let ocupado = ocupado.clone();
        let aviso = aviso.clone();

        Callback::from(move |(accion, motivo): (AccionRemito, Option<String>)| {
            if *ocupado {
                return;
            }
            let Some(estado_actual) = estado_service::estado_por_id(&estados, remito.estado_id)
            else {
                aviso.set(Some("Estados todavía no cargados".to_string()));
                return;
            };

            if let Err(mensaje) = validar_accion(
                estado_actual,
                accion,
                remito.es_reentrega,
                &checklist,
                motivo.as_deref(),
            ) {
                aviso.set(Some(mensaje.to_string()));
                return;
            }

            let api = api.clone();
            let remito = remito.clone();
            let estados_filas = (*estados).clone();
            let checklist = checklist.clone();
            let snapshot = snapshot.clone();
            let ocupado = ocupado.clone();
            let aviso = aviso.clone();
            let id = remito.id;

            ocupado.set(true);
            aviso.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                let resultado = match accion {
                    AccionRemito::HabilitarReentrega => {
                        remito_service::iniciar_reentrega(&api, id).await
                    }
                    AccionRemito::Liberar => remito_service::liberar(&api, id).await,
                    AccionRemito::Retener => {
                        match estado_service::id_de_estado(&estados_filas, EstadoRemito::Retenido)
                        {
                            Some(estado_id) => {
                                remito_service::actualizar_estado(&api, id, estado_id, None).await
                            }
                            None => {
                                aviso.set(Some("Estado Retenido desconocido".to_string()));
                                ocupado.set(false);
                                return;
                            }
                        }
                    }
                    _ => {
                        // transición de la tabla: resolver destino y round-trip
                        let destino = estado_actual.aplicar(accion);
                        let estado_id = destino
                            .and_then(|d| estado_service::id_de_estado(&estados_filas, d));
                        match estado_id {
                            Some(estado_id) => {
                                remito_service::actualizar_estado(
                                    &api,
                                    id,
                                    estado_id,
                                    motivo.as_deref(),
                                )
                                .await
                            }
                            None => {
                                aviso.set(Some(
                                    "No se pudo resolver el estado destino".to_string(),
                                ));
                                ocupado.set(false);
                                return;
                            }
                        }
                    }
                };

                match resultado {
                    Ok(actualizado) => {
                        log::info!(
                            "✅ Remito {} ahora en estadoId {}",
                            actualizado.numero_asignado,
                            actualizado.estado_id
                        );
                        match accion {
                            AccionRemito::Retener => {
                                snapshot.set(Some(SnapshotRetencion {
                                    estado_previo: estado_actual,
                                    checklist: (*checklist).clone(),
                                }));
                            }
                            AccionRemito::Liberar => {
                                // checklist restaurada tal cual estaba al retener
                                if let Some(s) = (*snapshot).clone() {
                                    checklist.set(s.checklist);
                                }
                                snapshot.set(None);
                            }
                            AccionRemito::ComenzarPreparacion => {
                                checklist
                                    .set(ChecklistPreparacion::nueva(actualizado.mercaderias.len()));
                            }
                            AccionRemito::HabilitarReentrega => {
                                // ciclo nuevo: mercaderías recargadas del backend
                                checklist
                                    .set(ChecklistPreparacion::nueva(actualizado.mercaderias.len()));
                            }
                            _ => {}
                        }
                        remito.set(actualizado);
                    }
                    Err(e) => {
                        log::error!("❌ Error en transición de estado: {}", e);
                        aviso.set(Some(e.to_string()));
                    }
                }
                ocupado.set(false);
            });
        })
    };

    UseRemitoEstadosHandle {
        remito,
        estados,
        checklist,
        ocupado,
        aviso,
        snapshot,
        ejecutar,
        marcar_mercaderia,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn la_nota_de_liberar_dice_el_estado_previo() {
        let snapshot = SnapshotRetencion {
            estado_previo: EstadoRemito::EnCamino,
            checklist: ChecklistPreparacion::nueva(2),
        };
        assert_eq!(snapshot.nota_liberar(), "Al liberar vuelve a \"En camino\"");
    }
}
