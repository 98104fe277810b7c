// Detalle de un remito: datos, checklist de preparación y botonera de
// acciones del ciclo de vida. Toda la lógica de transiciones vive en
// use_remito_estados; la página solo arma los eventos.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_remito_estados;
use crate::models::{AccionRemito, Remito};
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct DetalleRemitoProps {
    pub api: ApiClient,
    pub remito: Remito,
    pub on_volver: Callback<()>,
}

#[function_component(DetalleRemito)]
pub fn detalle_remito(props: &DetalleRemitoProps) -> Html {
    let ciclo = use_remito_estados(props.api.clone(), props.remito.clone());
    let motivo = use_state(String::new);
    // acción que quedó esperando motivo (solo "No entregado" lo exige)
    let accion_pendiente = use_state(|| None::<AccionRemito>);

    let remito = (*ciclo.remito).clone();

    let ejecutar_accion = {
        let ejecutar = ciclo.ejecutar.clone();
        let motivo = motivo.clone();
        let accion_pendiente = accion_pendiente.clone();
        Callback::from(move |accion: AccionRemito| {
            if accion.requiere_motivo() {
                accion_pendiente.set(Some(accion));
            } else {
                motivo.set(String::new());
                ejecutar.emit((accion, None));
            }
        })
    };

    let confirmar_motivo = {
        let ejecutar = ciclo.ejecutar.clone();
        let motivo = motivo.clone();
        let accion_pendiente = accion_pendiente.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(accion) = *accion_pendiente else {
                return;
            };
            ejecutar.emit((accion, Some((*motivo).clone())));
            accion_pendiente.set(None);
            motivo.set(String::new());
        })
    };

    let botones = ciclo.acciones().into_iter().map(|accion| {
        let ejecutar_accion = ejecutar_accion.clone();
        html! {
            <button
                key={accion.etiqueta()}
                disabled={*ciclo.ocupado}
                onclick={Callback::from(move |_: MouseEvent| ejecutar_accion.emit(accion))}
            >
                {accion.etiqueta()}
            </button>
        }
    });

    let filas_checklist = remito.mercaderias.iter().enumerate().map(|(i, mercaderia)| {
        let marcado = ciclo.checklist.esta_preparada(i);
        let marcar = {
            let marcar_mercaderia = ciclo.marcar_mercaderia.clone();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                marcar_mercaderia.emit((i, input.checked()));
            })
        };
        html! {
            <li key={i}>
                <label>
                    <input type="checkbox" checked={marcado} onchange={marcar} />
                    {format!(
                        "Mercadería #{} — {} kg, {} m³",
                        i + 1,
                        mercaderia.peso_mercaderia,
                        mercaderia.volumen_metros_cubico
                    )}
                </label>
            </li>
        }
    });

    let nombre_estado = remito
        .estado
        .as_ref()
        .map(|e| e.nombre.clone())
        .unwrap_or_default();

    html! {
        <div class="pagina-detalle">
            <button onclick={props.on_volver.reform(|_: MouseEvent| ())}>{"◀ Volver"}</button>

            <h2>{format!("Remito {}", remito.numero_asignado)}</h2>
            <p>
                <strong>{"Estado: "}</strong>
                {nombre_estado}
                { for remito.etiqueta_agenda().map(|etiqueta| html! {
                    <span class="badge-agendado">{etiqueta}</span>
                }) }
            </p>
            <p>
                <strong>{"Cliente: "}</strong>
                {remito.cliente_razon_social.clone().unwrap_or_default()}
            </p>
            <p>
                <strong>{"Destino: "}</strong>
                {remito.destino_nombre.clone().unwrap_or_default()}
            </p>
            <p><strong>{"Prioridad: "}</strong>{remito.prioridad.etiqueta()}</p>
            <p>
                <strong>{"Emisión: "}</strong>
                {remito.fecha_emision.format("%d/%m/%Y").to_string()}
            </p>

            { for ciclo.aviso.as_ref().map(|aviso| html! {
                <p class="aviso">{aviso.clone()}</p>
            }) }

            {
                if !remito.mercaderias.is_empty() {
                    html! {
                        <div class="checklist-preparacion">
                            <h3>{"Mercaderías"}</h3>
                            <ul>{ for filas_checklist }</ul>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            {
                if !remito.razones_no_entrega.is_empty() {
                    html! {
                        <div class="razones-no-entrega">
                            <h3>{"Razones de no entrega"}</h3>
                            <ul>
                                { for remito.razones_no_entrega.iter().map(|razon| html! {
                                    <li>{razon.clone()}</li>
                                }) }
                            </ul>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div class="botonera-acciones">
                { for botones }
                { for ciclo.nota_liberar().map(|nota| html! {
                    <p class="nota-retencion">{nota}</p>
                }) }
                {
                    if ciclo.reentrega_agotada() {
                        html! {
                            <p class="aviso">
                                {"La reentrega ya fue utilizada para este remito"}
                            </p>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>

            {
                if accion_pendiente.is_some() {
                    html! {
                        <div class="motivo-no-entrega">
                            <input
                                type="text"
                                placeholder="Motivo de la no entrega"
                                value={(*motivo).clone()}
                                oninput={{
                                    let motivo = motivo.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        motivo.set(input.value());
                                    })
                                }}
                            />
                            <button disabled={*ciclo.ocupado} onclick={confirmar_motivo}>
                                {"Confirmar"}
                            </button>
                            <button onclick={{
                                let accion_pendiente = accion_pendiente.clone();
                                Callback::from(move |_: MouseEvent| accion_pendiente.set(None))
                            }}>
                                {"Cancelar"}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
