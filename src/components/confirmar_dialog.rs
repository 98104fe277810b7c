use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmarDialogProps {
    pub abierto: bool,
    pub mensaje: String,
    pub on_confirmar: Callback<()>,
    pub on_cancelar: Callback<()>,
}

/// Diálogo de confirmación que antecede a todo borrado.
#[function_component(ConfirmarDialog)]
pub fn confirmar_dialog(props: &ConfirmarDialogProps) -> Html {
    if !props.abierto {
        return html! {};
    }

    let confirmar = {
        let on_confirmar = props.on_confirmar.clone();
        Callback::from(move |_: MouseEvent| on_confirmar.emit(()))
    };
    let cancelar = {
        let on_cancelar = props.on_cancelar.clone();
        Callback::from(move |_: MouseEvent| on_cancelar.emit(()))
    };

    html! {
        <div class="modal active">
            <div class="modal-overlay" onclick={cancelar.clone()}></div>
            <div class="modal-content modal-confirmar" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="modal-body">
                    <p>{&props.mensaje}</p>
                </div>
                <div class="modal-footer">
                    <button class="btn-secundario" onclick={cancelar}>{"Cancelar"}</button>
                    <button class="btn-peligro" onclick={confirmar}>{"Eliminar"}</button>
                </div>
            </div>
        </div>
    }
}
