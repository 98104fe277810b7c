use chrono::Local;
use yew::prelude::*;

use crate::models::Remito;
use crate::pages::{Agenda, DetalleRemito, ListaRemitos};
use crate::services::{ApiClient, KeepAliveService};
use crate::utils::constants::{backend_url, contactos_habilitados};

#[derive(Clone, PartialEq)]
enum Pantalla {
    Listado,
    Detalle(Remito),
    Agenda,
}

#[function_component(App)]
pub fn app() -> Html {
    let api = ApiClient::new();
    let pantalla = use_state(|| Pantalla::Listado);

    // Keep-alive del backend: arranca con la app y se corta al desmontar
    use_effect_with((), move |_| {
        let mut keep_alive = KeepAliveService::new();
        keep_alive.iniciar();
        move || keep_alive.detener()
    });

    let ir_a_listado = {
        let pantalla = pantalla.clone();
        Callback::from(move |_: ()| pantalla.set(Pantalla::Listado))
    };
    let ir_a_agenda = {
        let pantalla = pantalla.clone();
        Callback::from(move |_: MouseEvent| pantalla.set(Pantalla::Agenda))
    };
    let abrir_detalle = {
        let pantalla = pantalla.clone();
        Callback::from(move |remito: Remito| pantalla.set(Pantalla::Detalle(remito)))
    };

    log::debug!(
        "🔧 Backend: {} | contactos habilitados: {}",
        backend_url(),
        contactos_habilitados()
    );

    html! {
        <div class="app">
            <nav class="barra-navegacion">
                <button onclick={ir_a_listado.reform(|_: MouseEvent| ())}>{"Remitos"}</button>
                <button onclick={ir_a_agenda}>{"Agenda"}</button>
            </nav>
            {
                match &*pantalla {
                    Pantalla::Listado => html! {
                        <ListaRemitos api={api.clone()} on_abrir_detalle={abrir_detalle} />
                    },
                    Pantalla::Detalle(remito) => html! {
                        <DetalleRemito
                            api={api.clone()}
                            remito={remito.clone()}
                            on_volver={ir_a_listado.clone()}
                        />
                    },
                    Pantalla::Agenda => html! {
                        <Agenda api={api.clone()} hoy={Local::now().date_naive()} />
                    },
                }
            }
        </div>
    }
}
