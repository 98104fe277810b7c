use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::{use_busqueda_paginada, ConsultaBusqueda};
use crate::models::{CampoBusquedaCliente, Cliente};
use crate::services::{cliente_service, ApiClient};
use crate::utils::constants::PAGINA_SELECTOR;

#[derive(Properties, PartialEq)]
pub struct SelectorClienteProps {
    pub abierto: bool,
    pub api: ApiClient,
    pub on_select: Callback<Cliente>,
    pub on_close: Callback<()>,
}

/// Modal de selección de cliente: búsqueda server-side por un campo a
/// elección, 5 filas por página. El componente queda montado al cerrar, así
/// consulta y campo se conservan entre aperturas.
#[function_component(SelectorCliente)]
pub fn selector_cliente(props: &SelectorClienteProps) -> Html {
    let busqueda = {
        let api = props.api.clone();
        use_busqueda_paginada(
            props.abierto,
            PAGINA_SELECTOR,
            CampoBusquedaCliente::RazonSocial.clave(),
            move |consulta: ConsultaBusqueda| {
                let api = api.clone();
                async move {
                    let filtro = consulta
                        .filtro
                        .map(|(clave, valor)| (CampoBusquedaCliente::desde_clave(&clave), valor));
                    cliente_service::buscar_clientes(&api, consulta.pagina, consulta.limite, filtro)
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

    let filas = busqueda.resultado.data.iter().map(|cliente| {
        let on_select = props.on_select.clone();
        let on_close = props.on_close.clone();
        let seleccionado = cliente.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            on_select.emit(seleccionado.clone());
            on_close.emit(());
        });
        html! {
            <tr key={cliente.id} class="fila-seleccionable" {onclick}>
                <td>{&cliente.razon_social}</td>
                <td>{cliente.cuit_rut.clone().unwrap_or_default()}</td>
                <td>{&cliente.direccion}</td>
            </tr>
        }
    });

    html! {
        <div class="modal active">
            <div class="modal-overlay" onclick={cerrar.clone()}></div>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="modal-header">
                    <h2>{"Seleccionar cliente"}</h2>
                    <button class="btn-close" onclick={cerrar}>{"✕"}</button>
                </div>
                <div class="modal-body">
                    <div class="busqueda-barra">
                        <select onchange={onchange_campo}>
                            { for CampoBusquedaCliente::todos().iter().map(|campo| html! {
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
                                            <th>{"Razón social"}</th>
                                            <th>{"CUIT/RUT"}</th>
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
