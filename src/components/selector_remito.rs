// ============================================================================
// SELECTOR DE REMITOS (agenda)
// ============================================================================
// A diferencia de los selectores de cliente/destino, acá el filtrado es
// LOCAL: la disponibilidad (qué remito no está ya agendado) se calcula en el
// cliente sobre un fetch completo, así que el recorte por texto y la
// paginación también son locales. El padre monta el modal de cero en cada
// apertura, por lo que no persiste consulta entre aperturas.
// ============================================================================

use std::collections::HashSet;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_valor_diferido;
use crate::models::{paginar_local, FiltrosRemitos, Remito};
use crate::services::{remito_service, ApiClient};
use crate::utils::constants::{
    DEBOUNCE_BUSQUEDA_MS, LIMITE_FILTRO_FECHAS, PAGINA_SELECTOR_REMITO,
};

/// Modo del selector: asignar un remito al día elegido, o quitar uno de los
/// ya agendados ese día.
#[derive(Clone, PartialEq)]
pub enum ModoSelectorRemito {
    /// Fuente: todos los remitos menos los ya agendados del llamador
    Asignar { ya_agendados: HashSet<i64> },
    /// Fuente: la lista de remitos del día, provista por el llamador
    Quitar { agendados: Vec<Remito> },
}

/// Disponibles tras excluir ids y aplicar el filtro de texto (substring
/// case-insensitive sobre número asignado o razón social del cliente).
pub fn filtrar_remitos_selector(
    fuente: &[Remito],
    excluir: &HashSet<i64>,
    texto: &str,
) -> Vec<Remito> {
    let aguja = texto.trim().to_lowercase();
    fuente
        .iter()
        .filter(|r| !excluir.contains(&r.id))
        .filter(|r| {
            if aguja.is_empty() {
                return true;
            }
            r.numero_asignado.to_lowercase().contains(&aguja)
                || r.cliente_razon_social
                    .as_deref()
                    .is_some_and(|c| c.to_lowercase().contains(&aguja))
        })
        .cloned()
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct SelectorRemitoProps {
    pub api: ApiClient,
    pub modo: ModoSelectorRemito,
    pub on_select: Callback<Remito>,
    pub on_close: Callback<()>,
}

#[function_component(SelectorRemito)]
pub fn selector_remito(props: &SelectorRemitoProps) -> Html {
    let consulta = use_state(String::new);
    let pagina = use_state(|| 1u32);
    let fuente = use_state(Vec::<Remito>::new);
    let cargando = use_state(|| false);

    let consulta_diferida = use_valor_diferido((*consulta).clone(), DEBOUNCE_BUSQUEDA_MS);

    // Carga de la fuente: fetch completo en modo Asignar, lista del llamador
    // en modo Quitar. El modal se monta fresco en cada apertura.
    {
        let fuente = fuente.clone();
        let cargando = cargando.clone();
        let api = props.api.clone();
        use_effect_with(props.modo.clone(), move |modo| {
            match modo {
                ModoSelectorRemito::Asignar { .. } => {
                    wasm_bindgen_futures::spawn_local(async move {
                        cargando.set(true);
                        match remito_service::buscar_remitos(
                            &api,
                            1,
                            LIMITE_FILTRO_FECHAS,
                            &FiltrosRemitos::default(),
                            true,
                        )
                        .await
                        {
                            Ok(r) => fuente.set(r.data),
                            Err(e) => {
                                log::error!("❌ Error cargando remitos: {}", e);
                                fuente.set(Vec::new());
                            }
                        }
                        cargando.set(false);
                    });
                }
                ModoSelectorRemito::Quitar { agendados } => {
                    fuente.set(agendados.clone());
                }
            }
            || ()
        });
    }

    // recorte local: disponibilidad + texto + paginación
    let excluir = match &props.modo {
        ModoSelectorRemito::Asignar { ya_agendados } => ya_agendados.clone(),
        ModoSelectorRemito::Quitar { .. } => HashSet::new(),
    };
    let disponibles = filtrar_remitos_selector(&fuente, &excluir, &consulta_diferida);
    let resultado = paginar_local(&disponibles, *pagina, PAGINA_SELECTOR_REMITO);

    let oninput = {
        let consulta = consulta.clone();
        let pagina = pagina.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            consulta.set(input.value());
            pagina.set(1);
        })
    };

    let cerrar = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let anterior = {
        let pagina = pagina.clone();
        Callback::from(move |_: MouseEvent| {
            if *pagina > 1 {
                pagina.set(*pagina - 1);
            }
        })
    };
    let siguiente = {
        let pagina = pagina.clone();
        let total = resultado.total_pages;
        Callback::from(move |_: MouseEvent| {
            if *pagina < total {
                pagina.set(*pagina + 1);
            }
        })
    };

    let titulo = match &props.modo {
        ModoSelectorRemito::Asignar { .. } => "Agendar remito",
        ModoSelectorRemito::Quitar { .. } => "Quitar remito de la agenda",
    };

    let filas = resultado.data.iter().map(|remito| {
        let on_select = props.on_select.clone();
        let on_close = props.on_close.clone();
        let seleccionado = remito.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            on_select.emit(seleccionado.clone());
            on_close.emit(());
        });
        html! {
            <tr key={remito.id} class="fila-seleccionable" {onclick}>
                <td>{&remito.numero_asignado}</td>
                <td>{remito.cliente_razon_social.clone().unwrap_or_default()}</td>
                <td>{remito.destino_nombre.clone().unwrap_or_default()}</td>
                <td>{remito.prioridad.etiqueta()}</td>
            </tr>
        }
    });

    html! {
        <div class="modal active">
            <div class="modal-overlay" onclick={cerrar.clone()}></div>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="modal-header">
                    <h2>{titulo}</h2>
                    <button class="btn-close" onclick={cerrar}>{"✕"}</button>
                </div>
                <div class="modal-body">
                    <input
                        type="text"
                        placeholder="Filtrar por número o cliente..."
                        value={(*consulta).clone()}
                        {oninput}
                    />
                    {
                        if *cargando {
                            html! { <p class="estado-busqueda">{"Buscando..."}</p> }
                        } else if resultado.data.is_empty() {
                            html! { <p class="estado-busqueda">{"Sin resultados"}</p> }
                        } else {
                            html! {
                                <table class="tabla-seleccion">
                                    <thead>
                                        <tr>
                                            <th>{"Número"}</th>
                                            <th>{"Cliente"}</th>
                                            <th>{"Destino"}</th>
                                            <th>{"Prioridad"}</th>
                                        </tr>
                                    </thead>
                                    <tbody>{ for filas }</tbody>
                                </table>
                            }
                        }
                    }
                    <div class="paginacion">
                        <button disabled={resultado.current_page <= 1} onclick={anterior}>{"◀"}</button>
                        <span>
                            {format!("Página {} de {}", resultado.current_page, resultado.total_pages)}
                        </span>
                        <button
                            disabled={resultado.current_page >= resultado.total_pages}
                            onclick={siguiente}
                        >
                            {"▶"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::remito::remito_de_prueba;
    use chrono::NaiveDate;

    fn fuente() -> Vec<Remito> {
        let fecha: NaiveDate = "2024-05-01".parse().unwrap();
        vec![
            remito_de_prueba(1, "R-0001", fecha),
            remito_de_prueba(2, "R-0002", fecha),
            remito_de_prueba(3, "X-9000", fecha),
        ]
    }

    #[test]
    fn asignar_excluye_los_ya_agendados() {
        let excluir: HashSet<i64> = [2].into_iter().collect();
        let disponibles = filtrar_remitos_selector(&fuente(), &excluir, "");
        let ids: Vec<i64> = disponibles.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn el_texto_matchea_numero_o_cliente_sin_distinguir_mayusculas() {
        let excluir = HashSet::new();
        let por_numero = filtrar_remitos_selector(&fuente(), &excluir, "x-9");
        assert_eq!(por_numero.len(), 1);
        assert_eq!(por_numero[0].id, 3);

        // todas las fixtures comparten cliente "ACME SA"
        let por_cliente = filtrar_remitos_selector(&fuente(), &excluir, "acme");
        assert_eq!(por_cliente.len(), 3);

        let sin_match = filtrar_remitos_selector(&fuente(), &excluir, "zzz");
        assert!(sin_match.is_empty());
    }

    #[test]
    fn el_recorte_local_pagina_de_a_8() {
        let fecha: NaiveDate = "2024-05-01".parse().unwrap();
        let muchos: Vec<Remito> = (0..20i64)
            .map(|i| remito_de_prueba(i, &format!("R-{i:04}"), fecha))
            .collect();
        let excluir = HashSet::new();
        let disponibles = filtrar_remitos_selector(&muchos, &excluir, "");
        let r = paginar_local(&disponibles, 3, PAGINA_SELECTOR_REMITO);
        assert_eq!(r.total_pages, 3);
        assert_eq!(r.data.len(), 4);
        assert_eq!(r.current_page, 3);
    }
}
