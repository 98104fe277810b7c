// Agenda diaria: lista de remitos con fechaAgenda = fecha elegida, más los
// modales para asignar o quitar remitos del día. Cada apertura monta un
// selector nuevo para que arranque con búsqueda y página limpias.

use std::collections::HashSet;

use chrono::NaiveDate;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{ModoSelectorRemito, SelectorRemito};
use crate::models::Remito;
use crate::services::{remito_service, ApiClient};
use crate::utils::constants::LIMITE_FILTRO_FECHAS;

#[derive(Properties, PartialEq)]
pub struct AgendaProps {
    pub api: ApiClient,
    pub hoy: NaiveDate,
}

#[derive(Clone, PartialEq)]
enum ModalAgenda {
    Cerrado,
    Asignar,
    Quitar,
}

#[function_component(Agenda)]
pub fn agenda(props: &AgendaProps) -> Html {
    let fecha = use_state(|| props.hoy);
    let agendados = use_state(Vec::<Remito>::new);
    let cargando = use_state(|| false);
    let modal = use_state(|| ModalAgenda::Cerrado);
    // fuerza un remonte del selector en cada apertura
    let version_modal = use_state(|| 0u32);

    let cargar = {
        let api = props.api.clone();
        let fecha = fecha.clone();
        let agendados = agendados.clone();
        let cargando = cargando.clone();
        Callback::from(move |_: ()| {
            let api = api.clone();
            let dia = *fecha;
            let agendados = agendados.clone();
            let cargando = cargando.clone();
            cargando.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match remito_service::buscar_remitos_agendados(&api, dia, LIMITE_FILTRO_FECHAS)
                    .await
                {
                    Ok(respuesta) => agendados.set(respuesta.data),
                    Err(e) => log::error!("❌ Error cargando agenda: {}", e),
                }
                cargando.set(false);
            });
        })
    };

    {
        let cargar = cargar.clone();
        use_effect_with(*fecha, move |_| {
            cargar.emit(());
            || ()
        });
    }

    let onchange_fecha = {
        let fecha = fecha.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(dia) = input.value().parse() {
                fecha.set(dia);
            }
        })
    };

    let abrir = |destino: ModalAgenda| {
        let modal = modal.clone();
        let version_modal = version_modal.clone();
        Callback::from(move |_: MouseEvent| {
            version_modal.set(*version_modal + 1);
            modal.set(destino.clone());
        })
    };

    let cerrar_modal = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.set(ModalAgenda::Cerrado))
    };

    let on_asignar = {
        let api = props.api.clone();
        let fecha = fecha.clone();
        let cargar = cargar.clone();
        Callback::from(move |remito: Remito| {
            let api = api.clone();
            let dia = *fecha;
            let cargar = cargar.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match remito_service::agendar(&api, remito.id, Some(dia)).await {
                    Ok(_) => cargar.emit(()),
                    Err(e) => log::error!("❌ Error agendando remito: {}", e),
                }
            });
        })
    };

    let on_quitar = {
        let api = props.api.clone();
        let cargar = cargar.clone();
        Callback::from(move |remito: Remito| {
            let api = api.clone();
            let cargar = cargar.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match remito_service::agendar(&api, remito.id, None).await {
                    Ok(_) => cargar.emit(()),
                    Err(e) => log::error!("❌ Error quitando remito de la agenda: {}", e),
                }
            });
        })
    };

    let filas = agendados.iter().map(|remito| {
        let nombre_estado = remito
            .estado
            .as_ref()
            .map(|e| e.nombre.clone())
            .unwrap_or_default();
        html! {
            <tr key={remito.id}>
                <td>{&remito.numero_asignado}</td>
                <td>{remito.cliente_razon_social.clone().unwrap_or_default()}</td>
                <td>{remito.destino_nombre.clone().unwrap_or_default()}</td>
                <td>{nombre_estado}</td>
            </tr>
        }
    });

    let ya_agendados: HashSet<i64> = agendados.iter().map(|r| r.id).collect();

    html! {
        <div class="pagina-agenda">
            <div class="agenda-encabezado">
                <input
                    type="date"
                    value={fecha.format("%Y-%m-%d").to_string()}
                    onchange={onchange_fecha}
                />
                <button class="btn-primario" onclick={abrir(ModalAgenda::Asignar)}>
                    {"Asignar remito"}
                </button>
                <button
                    disabled={agendados.is_empty()}
                    onclick={abrir(ModalAgenda::Quitar)}
                >
                    {"Quitar remito"}
                </button>
            </div>

            {
                if *cargando {
                    html! { <p class="estado-busqueda">{"Buscando..."}</p> }
                } else if agendados.is_empty() {
                    html! { <p class="estado-busqueda">{"Sin remitos agendados para el día"}</p> }
                } else {
                    html! {
                        <table class="tabla-listado">
                            <thead>
                                <tr>
                                    <th>{"Número"}</th>
                                    <th>{"Cliente"}</th>
                                    <th>{"Destino"}</th>
                                    <th>{"Estado"}</th>
                                </tr>
                            </thead>
                            <tbody>{ for filas }</tbody>
                        </table>
                    }
                }
            }

            {
                match &*modal {
                    ModalAgenda::Cerrado => html! {},
                    ModalAgenda::Asignar => html! {
                        <SelectorRemito
                            key={format!("asignar-{}", *version_modal)}
                            api={props.api.clone()}
                            modo={ModoSelectorRemito::Asignar { ya_agendados: ya_agendados.clone() }}
                            on_select={on_asignar.clone()}
                            on_close={cerrar_modal.clone()}
                        />
                    },
                    ModalAgenda::Quitar => html! {
                        <SelectorRemito
                            key={format!("quitar-{}", *version_modal)}
                            api={props.api.clone()}
                            modo={ModoSelectorRemito::Quitar { agendados: (*agendados).clone() }}
                            on_select={on_quitar.clone()}
                            on_close={cerrar_modal.clone()}
                        />
                    },
                }
            }
        </div>
    }
}
