pub mod use_busqueda_paginada;
pub mod use_debounce;
pub mod use_filtros_remitos;
pub mod use_remito_estados;

pub use use_busqueda_paginada::{
    use_busqueda_paginada, ConsultaBusqueda, GuardiaGeneracion, UseBusquedaPaginadaHandle,
};
pub use use_debounce::use_valor_diferido;
pub use use_filtros_remitos::{use_filtros_remitos, UseFiltrosRemitosHandle};
pub use use_remito_estados::{use_remito_estados, SnapshotRetencion, UseRemitoEstadosHandle};
