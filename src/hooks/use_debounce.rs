use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Valor diferido por debounce: cada edición reinicia el timer y recién al
/// vencer se publica el último valor. N ediciones dentro de la ventana
/// producen UNA sola actualización (y por lo tanto un solo fetch aguas
/// arriba).
#[hook]
pub fn use_valor_diferido(valor: String, ms: u32) -> String {
    let diferido = use_state(|| valor.clone());
    {
        let diferido = diferido.clone();
        use_effect_with(valor, move |valor| {
            let valor = valor.clone();
            let timeout = Timeout::new(ms, move || diferido.set(valor));
            // el cleanup cancela el timer pendiente: así se reinicia la ventana
            move || drop(timeout)
        });
    }
    (*diferido).clone()
}
