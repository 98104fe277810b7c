pub mod confirmar_dialog;
pub mod selector_cliente;
pub mod selector_destino;
pub mod selector_remito;

pub use confirmar_dialog::ConfirmarDialog;
pub use selector_cliente::SelectorCliente;
pub use selector_destino::SelectorDestino;
pub use selector_remito::{filtrar_remitos_selector, ModoSelectorRemito, SelectorRemito};
