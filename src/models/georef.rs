use serde::{Deserialize, Serialize};

// Modelos de la API georef (datos.gob.ar). Solo tomamos id y nombre;
// el resto de los campos de la respuesta se ignora.

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Provincia {
    pub id: String,
    pub nombre: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Localidad {
    pub id: String,
    pub nombre: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct RespuestaProvincias {
    pub provincias: Vec<Provincia>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct RespuestaLocalidades {
    pub localidades: Vec<Localidad>,
}
