// ============================================================================
// COORDINADOR DE FILTROS DEL LISTADO DE REMITOS
// ============================================================================
// Dos juegos de filtros: `filtros` (editable) y `filtros_aplicados` (el
// último confirmado, el único que genera requests). Con rango de fechas el
// backend NO filtra por fecha: se piden hasta 1000 filas y el recorte y la
// paginación son locales. Los fetch son imperativos (disparados por Aplicar
// o por el cambio de página), así la reconciliación de página nunca
// realimenta el ciclo.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::use_busqueda_paginada::GuardiaGeneracion;
use crate::models::{clamp_pagina, paginar_local, FiltrosRemitos, Remito, RespuestaPaginada};
use crate::services::{remito_service, ApiClient};
use crate::utils::constants::{
    DEBOUNCE_FILTRO_MS, LIMITE_FILTRO_FECHAS, PAGINA_LISTADO, STORAGE_KEY_FILTROS_REMITOS,
};
use crate::utils::storage;

pub struct UseFiltrosRemitosHandle {
    /// Filtros vivos, todavía sin confirmar
    pub filtros: UseStateHandle<FiltrosRemitos>,
    /// Último juego confirmado (None hasta el primer Aplicar/restauración)
    pub filtros_aplicados: UseStateHandle<Option<FiltrosRemitos>>,
    pub pagina: UseStateHandle<u32>,
    pub resultado: UseStateHandle<RespuestaPaginada<Remito>>,
    pub cargando: UseStateHandle<bool>,
    pub aviso: UseStateHandle<Option<String>>,
    pub editar: Callback<FiltrosRemitos>,
    /// Número de remito con debounce de 500ms (solo edita, nunca fetchea)
    pub editar_numero: Callback<String>,
    pub aplicar: Callback<()>,
    pub limpiar: Callback<()>,
    pub cambiar_pagina: Callback<u32>,
    /// Re-fetch con los filtros ya confirmados (tras un alta/baja/edición)
    pub refrescar: Callback<()>,
}

fn hoy() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Merge del número diferido sobre el ÚLTIMO juego de filtros, no sobre el
/// snapshot del momento de tipeo: una edición intercalada dentro de la
/// ventana de debounce (prioridad, estado, fechas) no se pierde.
fn aplicar_numero_diferido(ultimos: &FiltrosRemitos, numero: String) -> FiltrosRemitos {
    let mut nuevos = ultimos.clone();
    nuevos.numero_asignado = numero;
    nuevos
}

#[hook]
pub fn use_filtros_remitos(api: ApiClient) -> UseFiltrosRemitosHandle {
    let filtros = use_state(|| FiltrosRemitos::reiniciado(hoy()));
    let filtros_aplicados = use_state(|| None::<FiltrosRemitos>);
    let pagina = use_state(|| 1u32);
    let resultado = use_state(RespuestaPaginada::<Remito>::vacia);
    let cargando = use_state(|| false);
    let aviso = use_state(|| None::<String>);

    // espejo de `filtros` fuera del ciclo de render: el timeout del número
    // diferido lee de acá el último juego, no el snapshot de su creación
    let filtros_vivos = use_mut_ref(|| FiltrosRemitos::reiniciado(hoy()));
    // filas ya filtradas por fecha, para paginar localmente sin re-fetch
    let filas_locales = use_mut_ref(|| None::<Vec<Remito>>);
    let guardia: Rc<RefCell<GuardiaGeneracion>> = use_mut_ref(GuardiaGeneracion::default);
    let debounce_numero = use_mut_ref(|| None::<Timeout>);

    let disparar = {
        let api = api.clone();
        let pagina_handle = pagina.clone();
        let resultado = resultado.clone();
        let cargando = cargando.clone();
        let filas_locales = filas_locales.clone();
        let guardia = guardia.clone();

        move |confirmados: FiltrosRemitos, pagina_pedida: u32| {
            let api = api.clone();
            let pagina_handle = pagina_handle.clone();
            let resultado = resultado.clone();
            let cargando = cargando.clone();
            let filas_locales = filas_locales.clone();
            let guardia = guardia.clone();

            let generacion = guardia.borrow_mut().proxima();
            cargando.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                let respuesta = if confirmados.filtra_fechas_local() {
                    // camino local: pedir el tope y recortar acá
                    match remito_service::buscar_remitos(
                        &api,
                        1,
                        LIMITE_FILTRO_FECHAS,
                        &confirmados,
                        false,
                    )
                    .await
                    {
                        Ok(r) => {
                            let filtradas = confirmados.filtrar_por_fechas(&r.data);
                            let pagina_r =
                                paginar_local(&filtradas, pagina_pedida, PAGINA_LISTADO);
                            *filas_locales.borrow_mut() = Some(filtradas);
                            Ok(pagina_r)
                        }
                        Err(e) => Err(e),
                    }
                } else {
                    *filas_locales.borrow_mut() = None;
                    remito_service::buscar_remitos(
                        &api,
                        pagina_pedida,
                        PAGINA_LISTADO,
                        &confirmados,
                        true,
                    )
                    .await
                };

                if !guardia.borrow().vigente(generacion) {
                    log::warn!("⏭️ Respuesta vieja del listado descartada");
                    return;
                }

                match respuesta {
                    Ok(r) => {
                        // reconciliación: si la página pedida quedó fuera de
                        // rango, adoptamos la válida (sin re-fetch: el fetch
                        // es imperativo, no un efecto sobre `pagina`)
                        let valida = clamp_pagina(r.current_page, r.total_pages);
                        if valida != pagina_pedida {
                            log::info!(
                                "📄 Página {} fuera de rango, ajustada a {}",
                                pagina_pedida,
                                valida
                            );
                        }
                        pagina_handle.set(valida);
                        resultado.set(r);
                    }
                    Err(e) => {
                        log::error!("❌ Error listando remitos: {}", e);
                        resultado.set(RespuestaPaginada::vacia());
                        pagina_handle.set(1);
                    }
                }
                cargando.set(false);
            });
        }
    };

    // Restauración de sesión (navegación de vuelta con "conservar filtros"):
    // si hay filtros persistidos, se promueven y se fetchea como un Aplicar.
    {
        let filtros = filtros.clone();
        let filtros_aplicados = filtros_aplicados.clone();
        let filtros_vivos = filtros_vivos.clone();
        let disparar = disparar.clone();
        use_effect_with((), move |_| {
            if let Some(guardados) =
                storage::cargar_sesion::<FiltrosRemitos>(STORAGE_KEY_FILTROS_REMITOS)
            {
                log::info!("📥 Filtros restaurados de la sesión");
                *filtros_vivos.borrow_mut() = guardados.clone();
                filtros.set(guardados.clone());
                filtros_aplicados.set(Some(guardados.clone()));
                disparar(guardados, 1);
            }
            || ()
        });
    }

    let editar = {
        let filtros = filtros.clone();
        let filtros_vivos = filtros_vivos.clone();
        Callback::from(move |nuevos: FiltrosRemitos| {
            *filtros_vivos.borrow_mut() = nuevos.clone();
            filtros.set(nuevos);
        })
    };

    let editar_numero = {
        let filtros = filtros.clone();
        let filtros_vivos = filtros_vivos.clone();
        let debounce_numero = debounce_numero.clone();
        Callback::from(move |valor: String| {
            let filtros = filtros.clone();
            let filtros_vivos = filtros_vivos.clone();
            // reiniciar la ventana de 500ms; el fetch recién sale con Aplicar
            *debounce_numero.borrow_mut() = Some(Timeout::new(DEBOUNCE_FILTRO_MS, move || {
                let nuevos = aplicar_numero_diferido(&filtros_vivos.borrow(), valor);
                *filtros_vivos.borrow_mut() = nuevos.clone();
                filtros.set(nuevos);
            }));
        })
    };

    let aplicar = {
        let filtros = filtros.clone();
        let filtros_aplicados = filtros_aplicados.clone();
        let aviso = aviso.clone();
        let disparar = disparar.clone();
        Callback::from(move |_| {
            let editados = (*filtros).clone();
            if !editados.hay_alguno() {
                aviso.set(Some(
                    "Debe indicar al menos un filtro antes de buscar".to_string(),
                ));
                return;
            }
            aviso.set(None);
            storage::guardar_sesion(STORAGE_KEY_FILTROS_REMITOS, &editados);
            filtros_aplicados.set(Some(editados.clone()));
            disparar(editados, 1);
        })
    };

    let limpiar = {
        let filtros = filtros.clone();
        let filtros_aplicados = filtros_aplicados.clone();
        let resultado = resultado.clone();
        let pagina = pagina.clone();
        let aviso = aviso.clone();
        let filtros_vivos = filtros_vivos.clone();
        let filas_locales = filas_locales.clone();
        Callback::from(move |_| {
            let reiniciados = FiltrosRemitos::reiniciado(hoy());
            *filtros_vivos.borrow_mut() = reiniciados.clone();
            filtros.set(reiniciados.clone());
            filtros_aplicados.set(Some(reiniciados));
            storage::borrar_sesion(STORAGE_KEY_FILTROS_REMITOS);
            *filas_locales.borrow_mut() = None;
            resultado.set(RespuestaPaginada::vacia());
            pagina.set(1);
            aviso.set(None);
        })
    };

    let cambiar_pagina = {
        let filtros_aplicados = filtros_aplicados.clone();
        let pagina = pagina.clone();
        let resultado = resultado.clone();
        let filas_locales = filas_locales.clone();
        let disparar = disparar.clone();
        Callback::from(move |pedida: u32| {
            let Some(confirmados) = (*filtros_aplicados).clone() else {
                return;
            };
            let destino = clamp_pagina(pedida, resultado.total_pages);
            if destino == *pagina {
                return;
            }
            // con cache local de fechas no hay round-trip: solo re-cortar
            let filas = filas_locales.borrow().clone();
            if let Some(filas) = filas {
                let r = paginar_local(&filas, destino, PAGINA_LISTADO);
                pagina.set(r.current_page);
                resultado.set(r);
            } else {
                disparar(confirmados, destino);
            }
        })
    };

    let refrescar = {
        let filtros_aplicados = filtros_aplicados.clone();
        let pagina = pagina.clone();
        Callback::from(move |_| {
            if let Some(confirmados) = (*filtros_aplicados).clone() {
                disparar(confirmados, *pagina);
            }
        })
    };

    UseFiltrosRemitosHandle {
        filtros,
        filtros_aplicados,
        pagina,
        resultado,
        cargando,
        aviso,
        editar,
        editar_numero,
        aplicar,
        limpiar,
        cambiar_pagina,
        refrescar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::paginacion::total_paginas;
    use crate::models::Prioridad;

    // El usuario tipea un número (ventana de 500ms abierta) y cambia la
    // prioridad antes de que venza: el merge corre sobre el último juego de
    // filtros, así que la edición intercalada sobrevive.
    #[test]
    fn el_numero_diferido_no_pisa_ediciones_intercaladas() {
        let espejo = std::rc::Rc::new(RefCell::new(FiltrosRemitos::default()));

        // edición intercalada mientras el timeout del número sigue pendiente
        let mut intercalados = espejo.borrow().clone();
        intercalados.prioridad = Some(Prioridad::Urgente);
        *espejo.borrow_mut() = intercalados;

        // vence la ventana: el número se aplica sobre el espejo vivo
        let nuevos = aplicar_numero_diferido(&espejo.borrow(), "R-0042".to_string());
        assert_eq!(nuevos.numero_asignado, "R-0042");
        assert_eq!(nuevos.prioridad, Some(Prioridad::Urgente));
    }

    #[test]
    fn el_numero_diferido_solo_toca_su_campo() {
        let base = FiltrosRemitos {
            cliente_id: Some(7),
            fecha_desde: Some("2024-01-01".parse().unwrap()),
            ..Default::default()
        };
        let nuevos = aplicar_numero_diferido(&base, "R-0001".to_string());
        assert_eq!(nuevos.cliente_id, Some(7));
        assert_eq!(nuevos.fecha_desde, base.fecha_desde);
        assert_eq!(nuevos.numero_asignado, "R-0001");
    }

    // Escenario del tope de 1000 filas: 1500 coinciden en el servidor pero
    // solo llegan 1000; el total que ve el usuario sale del recorte local.
    #[test]
    fn el_total_sale_del_recorte_local_no_del_backend() {
        let fecha: NaiveDate = "2024-01-15".parse().unwrap();
        let filas: Vec<Remito> = (0..1000i64)
            .map(|i| {
                let mut r = crate::models::remito::remito_de_prueba(
                    i,
                    &format!("R-{i:04}"),
                    fecha,
                );
                // la mitad cae fuera del rango pedido
                if i % 2 == 1 {
                    r.fecha_emision = "2024-03-01".parse().unwrap();
                }
                r
            })
            .collect();

        let filtros = FiltrosRemitos {
            fecha_desde: Some("2024-01-01".parse().unwrap()),
            fecha_hasta: Some("2024-01-31".parse().unwrap()),
            ..Default::default()
        };
        let filtradas = filtros.filtrar_por_fechas(&filas);
        let r = paginar_local(&filtradas, 1, PAGINA_LISTADO);
        assert_eq!(r.total_items, 500);
        assert_eq!(r.total_pages, total_paginas(500, PAGINA_LISTADO));
        assert_eq!(r.data.len(), PAGINA_LISTADO as usize);
    }

    #[test]
    fn pedir_pagina_5_con_2_paginas_reconcilia_sin_loop() {
        let fecha: NaiveDate = "2024-01-15".parse().unwrap();
        let filas: Vec<Remito> = (0..15i64)
            .map(|i| {
                crate::models::remito::remito_de_prueba(i, &format!("R-{i}"), fecha)
            })
            .collect();
        let r = paginar_local(&filas, 5, PAGINA_LISTADO);
        assert_eq!(r.total_pages, 2);
        assert_eq!(r.current_page, 2);
        // la página adoptada coincide con la devuelta: clamp idempotente
        assert_eq!(clamp_pagina(r.current_page, r.total_pages), r.current_page);
    }
}
