pub mod cliente;
pub mod contacto;
pub mod destino;
pub mod estado;
pub mod georef;
pub mod mercaderia;
pub mod paginacion;
pub mod remito;

pub use cliente::{CampoBusquedaCliente, Cliente, ClientePayload};
pub use contacto::Contacto;
pub use destino::{CampoBusquedaDestino, Destino, DestinoPayload, Pais, SeleccionGeografica};
pub use estado::{
    validar_accion, AccionRemito, ChecklistPreparacion, Estado, EstadoRemito,
};
pub use georef::{Localidad, Provincia, RespuestaLocalidades, RespuestaProvincias};
pub use mercaderia::Mercaderia;
pub use paginacion::{clamp_pagina, paginar_local, total_paginas, RespuestaPaginada};
pub use remito::{FiltrosRemitos, Prioridad, Remito, RemitoPayload};
