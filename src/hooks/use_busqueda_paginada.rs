// ============================================================================
// BÚSQUEDA PAGINADA CON DEBOUNCE (selectores de cliente / destino)
// ============================================================================
// Patrón: texto + campo de búsqueda → debounce 300ms → request paginado al
// backend → lista para elegir UNA fila. El fetch se dispara al abrir el
// modal, al cambiar el texto diferido o el campo (estos dos resetean a
// página 1) y al cambiar de página.
// ============================================================================

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use yew::prelude::*;

use super::use_debounce::use_valor_diferido;
use crate::models::{clamp_pagina, RespuestaPaginada};
use crate::services::ApiError;
use crate::utils::constants::DEBOUNCE_BUSQUEDA_MS;

/// Parámetros de un fetch del selector
#[derive(Clone, PartialEq, Debug)]
pub struct ConsultaBusqueda {
    pub pagina: u32,
    pub limite: u32,
    /// Único par `{campo: valor}`; ausente con la búsqueda vacía
    pub filtro: Option<(String, String)>,
}

/// Guardia contra respuestas fuera de orden: el último request despachado
/// lleva la generación más alta y solo esa respuesta se aplica. El original
/// tenía la carrera (una respuesta lenta vieja pisaba a una rápida nueva);
/// acá se descarta la vieja.
#[derive(Debug, Default)]
pub struct GuardiaGeneracion {
    actual: u64,
}

impl GuardiaGeneracion {
    /// Nueva generación para el request que se va a despachar
    pub fn proxima(&mut self) -> u64 {
        self.actual += 1;
        self.actual
    }

    /// ¿La respuesta con esta generación sigue siendo la última?
    pub fn vigente(&self, generacion: u64) -> bool {
        self.actual == generacion
    }
}

/// Par `{campo: valor}` que viaja en la query: solo si el texto trimmeado
/// no quedó vacío.
pub fn filtro_busqueda(consulta: &str, campo: &str) -> Option<(String, String)> {
    let valor = consulta.trim();
    if valor.is_empty() {
        None
    } else {
        Some((campo.to_string(), valor.to_string()))
    }
}

pub struct UseBusquedaPaginadaHandle<T> {
    /// Texto vivo del input (sin debounce)
    pub consulta: UseStateHandle<String>,
    /// Clave del campo de búsqueda elegido
    pub campo: UseStateHandle<String>,
    pub pagina: UseStateHandle<u32>,
    pub resultado: UseStateHandle<RespuestaPaginada<T>>,
    pub cargando: UseStateHandle<bool>,
    pub cambiar_consulta: Callback<String>,
    pub cambiar_campo: Callback<String>,
    pub pagina_anterior: Callback<()>,
    pub pagina_siguiente: Callback<()>,
}

#[hook]
pub fn use_busqueda_paginada<T, F, Fut>(
    abierto: bool,
    limite: u32,
    campo_inicial: &'static str,
    buscar: F,
) -> UseBusquedaPaginadaHandle<T>
where
    T: Clone + PartialEq + 'static,
    F: Fn(ConsultaBusqueda) -> Fut + 'static,
    Fut: Future<Output = Result<RespuestaPaginada<T>, ApiError>> + 'static,
{
    let consulta = use_state(String::new);
    let campo = use_state(|| campo_inicial.to_string());
    let pagina = use_state(|| 1u32);
    let resultado = use_state(RespuestaPaginada::<T>::vacia);
    let cargando = use_state(|| false);

    let consulta_diferida = use_valor_diferido((*consulta).clone(), DEBOUNCE_BUSQUEDA_MS);

    let guardia: Rc<RefCell<GuardiaGeneracion>> = use_mut_ref(GuardiaGeneracion::default);
    // última (consulta, campo) vista: un cambio acá resetea a página 1
    let clave_anterior = use_mut_ref(|| None::<(String, String)>);
    // página adoptada de la última respuesta: no re-dispara el ciclo de fetch
    let pagina_adoptada = use_mut_ref(|| None::<u32>);

    {
        let pagina_handle = pagina.clone();
        let resultado = resultado.clone();
        let cargando = cargando.clone();
        let guardia = guardia.clone();
        let clave_anterior = clave_anterior.clone();
        let pagina_adoptada = pagina_adoptada.clone();

        use_effect_with(
            (
                abierto,
                consulta_diferida.clone(),
                (*campo).clone(),
                *pagina,
            ),
            move |(abierto, diferida, campo, pagina)| {
                if *abierto {
                    let clave = (diferida.clone(), campo.clone());
                    let cambio_clave = clave_anterior.borrow().as_ref() != Some(&clave);
                    if cambio_clave {
                        *clave_anterior.borrow_mut() = Some(clave);
                    }

                    if cambio_clave && *pagina != 1 {
                        // la corrida del efecto con página 1 hace el fetch
                        pagina_handle.set(1);
                    } else if pagina_adoptada.borrow_mut().take() == Some(*pagina) {
                        // página reconciliada desde la respuesta anterior
                    } else {
                        let generacion = guardia.borrow_mut().proxima();
                        let consulta = ConsultaBusqueda {
                            pagina: *pagina,
                            limite,
                            filtro: filtro_busqueda(diferida, campo),
                        };
                        let pagina_solicitada = *pagina;
                        cargando.set(true);

                        let fut = buscar(consulta);
                        wasm_bindgen_futures::spawn_local(async move {
                            let respuesta = fut.await;
                            if !guardia.borrow().vigente(generacion) {
                                log::warn!(
                                    "⏭️ Respuesta vieja descartada (generación {})",
                                    generacion
                                );
                                return;
                            }
                            match respuesta {
                                Ok(r) => {
                                    let pagina_valida =
                                        clamp_pagina(r.current_page, r.total_pages);
                                    if pagina_valida != pagina_solicitada {
                                        *pagina_adoptada.borrow_mut() = Some(pagina_valida);
                                        pagina_handle.set(pagina_valida);
                                    }
                                    resultado.set(r);
                                }
                                Err(e) => {
                                    log::error!("❌ Error buscando: {}", e);
                                    resultado.set(RespuestaPaginada::vacia());
                                }
                            }
                            cargando.set(false);
                        });
                    }
                }
                || ()
            },
        );
    }

    let cambiar_consulta = {
        let consulta = consulta.clone();
        Callback::from(move |valor: String| consulta.set(valor))
    };

    let cambiar_campo = {
        let campo = campo.clone();
        Callback::from(move |clave: String| campo.set(clave))
    };

    let pagina_anterior = {
        let pagina = pagina.clone();
        let resultado = resultado.clone();
        Callback::from(move |_| {
            let destino = clamp_pagina(pagina.saturating_sub(1), resultado.total_pages);
            if destino != *pagina {
                pagina.set(destino);
            }
        })
    };

    let pagina_siguiente = {
        let pagina = pagina.clone();
        let resultado = resultado.clone();
        Callback::from(move |_| {
            let destino = clamp_pagina(*pagina + 1, resultado.total_pages);
            if destino != *pagina {
                pagina.set(destino);
            }
        })
    };

    UseBusquedaPaginadaHandle {
        consulta,
        campo,
        pagina,
        resultado,
        cargando,
        cambiar_consulta,
        cambiar_campo,
        pagina_anterior,
        pagina_siguiente,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn el_filtro_viaja_trimmeado_y_solo_si_hay_texto() {
        assert_eq!(filtro_busqueda("", "razonSocial"), None);
        assert_eq!(filtro_busqueda("   ", "razonSocial"), None);
        assert_eq!(
            filtro_busqueda(" ACME ", "razonSocial"),
            Some(("razonSocial".to_string(), "ACME".to_string()))
        );
    }

    #[test]
    fn la_guardia_descarta_respuestas_viejas() {
        let mut guardia = GuardiaGeneracion::default();
        let primera = guardia.proxima();
        let segunda = guardia.proxima();
        // la respuesta del primer request llega última: se descarta
        assert!(!guardia.vigente(primera));
        assert!(guardia.vigente(segunda));
        let tercera = guardia.proxima();
        assert!(!guardia.vigente(segunda));
        assert!(guardia.vigente(tercera));
    }
}
