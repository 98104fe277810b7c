// Listado de remitos: barra de filtros (aplicar explícito), tabla paginada,
// baja con confirmación. La coordinación de filtros/página vive en
// use_filtros_remitos; acá solo se cablea la vista.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{ConfirmarDialog, SelectorCliente, SelectorDestino};
use crate::hooks::use_filtros_remitos;
use crate::models::{Estado, Prioridad, Remito};
use crate::services::{estado_service, remito_service, ApiClient};

#[derive(Properties, PartialEq)]
pub struct ListaRemitosProps {
    pub api: ApiClient,
    pub on_abrir_detalle: Callback<Remito>,
}

#[function_component(ListaRemitos)]
pub fn lista_remitos(props: &ListaRemitosProps) -> Html {
    let coordinador = use_filtros_remitos(props.api.clone());
    let estados = use_state(Vec::<Estado>::new);
    let selector_cliente_abierto = use_state(|| false);
    let selector_destino_abierto = use_state(|| false);
    let remito_a_eliminar = use_state(|| None::<Remito>);

    {
        let estados = estados.clone();
        let api = props.api.clone();
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

    let oninput_numero = {
        let editar_numero = coordinador.editar_numero.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            editar_numero.emit(input.value());
        })
    };

    let onchange_estado = {
        let filtros = coordinador.filtros.clone();
        let editar = coordinador.editar.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut nuevos = (*filtros).clone();
            nuevos.estado_id = select.value().parse().ok();
            editar.emit(nuevos);
        })
    };

    let onchange_prioridad = {
        let filtros = coordinador.filtros.clone();
        let editar = coordinador.editar.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut nuevos = (*filtros).clone();
            nuevos.prioridad = match select.value().as_str() {
                "normal" => Some(Prioridad::Normal),
                "alta" => Some(Prioridad::Alta),
                "urgente" => Some(Prioridad::Urgente),
                _ => None,
            };
            editar.emit(nuevos);
        })
    };

    let onchange_desde = {
        let filtros = coordinador.filtros.clone();
        let editar = coordinador.editar.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut nuevos = (*filtros).clone();
            nuevos.fecha_desde = input.value().parse().ok();
            editar.emit(nuevos);
        })
    };

    let onchange_hasta = {
        let filtros = coordinador.filtros.clone();
        let editar = coordinador.editar.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut nuevos = (*filtros).clone();
            nuevos.fecha_hasta = input.value().parse().ok();
            editar.emit(nuevos);
        })
    };

    let on_cliente = {
        let filtros = coordinador.filtros.clone();
        let editar = coordinador.editar.clone();
        Callback::from(move |cliente: crate::models::Cliente| {
            let mut nuevos = (*filtros).clone();
            nuevos.cliente_id = Some(cliente.id);
            editar.emit(nuevos);
        })
    };

    let on_destino = {
        let filtros = coordinador.filtros.clone();
        let editar = coordinador.editar.clone();
        Callback::from(move |destino: crate::models::Destino| {
            let mut nuevos = (*filtros).clone();
            nuevos.destino_id = Some(destino.id);
            editar.emit(nuevos);
        })
    };

    let confirmar_eliminar = {
        let remito_a_eliminar = remito_a_eliminar.clone();
        let api = props.api.clone();
        let refrescar = coordinador.refrescar.clone();
        Callback::from(move |_| {
            let Some(remito) = (*remito_a_eliminar).clone() else {
                return;
            };
            remito_a_eliminar.set(None);
            let api = api.clone();
            let refrescar = refrescar.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match remito_service::eliminar_remito(&api, remito.id).await {
                    // el listado se re-fetchea en lugar de parchear en memoria
                    Ok(()) => refrescar.emit(()),
                    Err(e) => log::error!("❌ Error eliminando remito: {}", e),
                }
            });
        })
    };

    let filas = coordinador.resultado.data.iter().map(|remito| {
        let abrir = {
            let remito = remito.clone();
            let on_abrir_detalle = props.on_abrir_detalle.clone();
            Callback::from(move |_: MouseEvent| on_abrir_detalle.emit(remito.clone()))
        };
        let eliminar = {
            let remito = remito.clone();
            let remito_a_eliminar = remito_a_eliminar.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                remito_a_eliminar.set(Some(remito.clone()));
            })
        };
        let nombre_estado = remito
            .estado
            .as_ref()
            .map(|e| e.nombre.clone())
            .unwrap_or_default();
        html! {
            <tr key={remito.id} class="fila-seleccionable" onclick={abrir}>
                <td>{&remito.numero_asignado}</td>
                <td>{remito.cliente_razon_social.clone().unwrap_or_default()}</td>
                <td>{remito.destino_nombre.clone().unwrap_or_default()}</td>
                <td>{remito.prioridad.etiqueta()}</td>
                <td>
                    {nombre_estado}
                    { for remito.etiqueta_agenda().map(|etiqueta| html! {
                        <span class="badge-agendado">{etiqueta}</span>
                    }) }
                </td>
                <td>{remito.fecha_emision.format("%d/%m/%Y").to_string()}</td>
                <td><button class="btn-peligro" onclick={eliminar}>{"Eliminar"}</button></td>
            </tr>
        }
    });

    html! {
        <div class="pagina-listado">
            <div class="filtros-barra">
                <input
                    type="text"
                    placeholder="Número de remito"
                    oninput={oninput_numero}
                />
                <button onclick={{
                    let abierto = selector_cliente_abierto.clone();
                    Callback::from(move |_: MouseEvent| abierto.set(true))
                }}>
                    {"Cliente..."}
                </button>
                <button onclick={{
                    let abierto = selector_destino_abierto.clone();
                    Callback::from(move |_: MouseEvent| abierto.set(true))
                }}>
                    {"Destino..."}
                </button>
                <select onchange={onchange_estado}>
                    <option value="">{"Estado"}</option>
                    { for estados.iter().map(|estado| html! {
                        <option value={estado.id.to_string()}>{&estado.nombre}</option>
                    }) }
                </select>
                <select onchange={onchange_prioridad}>
                    <option value="">{"Prioridad"}</option>
                    { for Prioridad::todas().iter().map(|p| html! {
                        <option value={p.clave()}>{p.etiqueta()}</option>
                    }) }
                </select>
                <input type="date" onchange={onchange_desde} />
                <input type="date" onchange={onchange_hasta} />
                <button class="btn-primario" onclick={coordinador.aplicar.reform(|_: MouseEvent| ())}>
                    {"Aplicar"}
                </button>
                <button onclick={coordinador.limpiar.reform(|_: MouseEvent| ())}>{"Limpiar"}</button>
            </div>

            { for coordinador.aviso.as_ref().map(|aviso| html! {
                <p class="aviso">{aviso.clone()}</p>
            }) }

            {
                if *coordinador.cargando {
                    html! { <p class="estado-busqueda">{"Buscando..."}</p> }
                } else if coordinador.resultado.data.is_empty() {
                    html! { <p class="estado-busqueda">{"Sin resultados"}</p> }
                } else {
                    html! {
                        <table class="tabla-listado">
                            <thead>
                                <tr>
                                    <th>{"Número"}</th>
                                    <th>{"Cliente"}</th>
                                    <th>{"Destino"}</th>
                                    <th>{"Prioridad"}</th>
                                    <th>{"Estado"}</th>
                                    <th>{"Emisión"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>{ for filas }</tbody>
                        </table>
                    }
                }
            }

            <div class="paginacion">
                <button
                    disabled={*coordinador.pagina <= 1}
                    onclick={{
                        let cambiar = coordinador.cambiar_pagina.clone();
                        let pagina = *coordinador.pagina;
                        Callback::from(move |_: MouseEvent| cambiar.emit(pagina.saturating_sub(1)))
                    }}
                >
                    {"◀"}
                </button>
                <span>
                    {format!("Página {} de {} ({} remitos)",
                        coordinador.resultado.current_page,
                        coordinador.resultado.total_pages,
                        coordinador.resultado.total_items)}
                </span>
                <button
                    disabled={*coordinador.pagina >= coordinador.resultado.total_pages}
                    onclick={{
                        let cambiar = coordinador.cambiar_pagina.clone();
                        let pagina = *coordinador.pagina;
                        Callback::from(move |_: MouseEvent| cambiar.emit(pagina + 1))
                    }}
                >
                    {"▶"}
                </button>
            </div>

            <SelectorCliente
                abierto={*selector_cliente_abierto}
                api={props.api.clone()}
                on_select={on_cliente}
                on_close={{
                    let abierto = selector_cliente_abierto.clone();
                    Callback::from(move |_| abierto.set(false))
                }}
            />
            <SelectorDestino
                abierto={*selector_destino_abierto}
                api={props.api.clone()}
                on_select={on_destino}
                on_close={{
                    let abierto = selector_destino_abierto.clone();
                    Callback::from(move |_| abierto.set(false))
                }}
            />
            <ConfirmarDialog
                abierto={remito_a_eliminar.is_some()}
                mensaje={
                    (*remito_a_eliminar)
                        .as_ref()
                        .map(|r| format!("¿Eliminar el remito {}?", r.numero_asignado))
                        .unwrap_or_default()
                }
                on_confirmar={confirmar_eliminar}
                on_cancelar={{
                    let remito_a_eliminar = remito_a_eliminar.clone();
                    Callback::from(move |_| remito_a_eliminar.set(None))
                }}
            />
        </div>
    }
}
