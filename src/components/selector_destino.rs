use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::{use_busqueda_paginada, ConsultaBusqueda};
use crate::models::{CampoBusquedaDestino, Destino};
use crate::services::{destino_service, ApiClient};
use crate::utils::constants::PAGINA_SELECTOR;

#[derive(Properties, PartialEq)]
pub struct SelectorDestinoProps {
    pub abierto: bool,
    pub api: ApiClient,
    pub on_select: Callback<Destino>,
    pub on_close: Callback<()>,
}

/// Modal de selección de destino. Mismo patrón que el de clientes:
/// server-side por {provincia, localidad, dirección}, 5 por página.
#[function_component(SelectorDestino)]
pub fn selector_destino(props: &SelectorDestinoProps) -> Html {
    let busqueda = {
        let api = props.api.clone();
        use_busqueda_paginada(
            props.abierto,
            PAGINA_SELECTOR,
            CampoBusquedaDestino::Provincia.clave(),
            move |consulta: ConsultaBusqueda| {
                let api = api.clone();
                async move {
                    let filtro = consulta
                        .filtro
                        .map(|(clave, valor)| (CampoBusquedaDestino::desde_clave(&clave), valor));
                    destino_service::buscar_destinos(&api, consulta.pagina, consulta.limite, filtro)
                        .await
                }
            },
        )
    };

    if !props.abierto {
        return html! {};
    }

    let oninput = {
        let cambiar = busqueda.cambiar_consulta.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cambiar.emit(input.value());
        })
    };

    let onchange_campo = {
        let cambiar = busqueda.cambiar_campo.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cambiar.emit(select.value());
        })
    };

    let cerrar = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let filas = busqueda.resultado.data.iter().map(|destino| {
        let on_select = props.on_select.clone();
        let on_close = props.on_close.clone();
        let seleccionado = destino.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            on_select.emit(seleccionado.clone());
            on_close.emit(());
        });
        html! {
            <tr key={destino.id} class="fila-seleccionable" {onclick}>
                <td>{&destino.nombre}</td>
                <td>{destino.pais.etiqueta()}</td>
                <td>{&destino.provincia}</td>
                <td>{&destino.localidad}</td>
                <td>{&destino.direccion}</td>
            </tr>
        }
    });

    html! {
        <div class="modal active">
            <div class="modal-overlay" onclick={cerrar.clone()}></div>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="modal-header">
                    <h2>{"Seleccionar destino"}</h2>
                    <button class="btn-close" onclick={cerrar}>{"✕"}</button>
                </div>
                <div class="modal-body">
                    <div class="busqueda-barra">
                        <select onchange={onchange_campo}>
                            { for CampoBusquedaDestino::todos().iter().map(|campo| html! {
                                <option
                                    value={campo.clave()}
                                    selected={*busqueda.campo == campo.clave()}
                                >
                                    {campo.etiqueta()}
                                </option>
                            }) }
                        </select>
                        <input
                            type="text"
                            placeholder="Buscar..."
                            value={(*busqueda.consulta).clone()}
                            {oninput}
                        />
                    </div>
                    {
                        if *busqueda.cargando {
                            html! { <p class="estado-busqueda">{"Buscando..."}</p> }
                        } else if busqueda.resultado.data.is_empty() {
                            html! { <p class="estado-busqueda">{"Sin resultados"}</p> }
                        } else {
                            html! {
                                <table class="tabla-seleccion">
                                    <thead>
                                        <tr>
                                            <th>{"Nombre"}</th>
                                            <th>{"País"}</th>
                                            <th>{"Provincia"}</th>
                                            <th>{"Localidad"}</th>
                                            <th>{"Dirección"}</th>
                                        </tr>
                                    </thead>
                                    <tbody>{ for filas }</tbody>
                                </table>
                            }
                        }
                    }
                    <div class="paginacion">
                        <button
                            disabled={*busqueda.pagina <= 1}
                            onclick={busqueda.pagina_anterior.reform(|_: MouseEvent| ())}
                        >
                            {"◀"}
                        </button>
                        <span>
                            {format!("Página {} de {}", busqueda.resultado.current_page, busqueda.resultado.total_pages)}
                        </span>
                        <button
                            disabled={*busqueda.pagina >= busqueda.resultado.total_pages}
                            onclick={busqueda.pagina_siguiente.reform(|_: MouseEvent| ())}
                        >
                            {"▶"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
