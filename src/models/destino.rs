use serde::{Deserialize, Serialize};

use super::contacto::Contacto;
use super::georef::{Localidad, Provincia};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub enum Pais {
    #[default]
    Argentina,
    Brasil,
}

impl Pais {
    pub fn etiqueta(&self) -> &'static str {
        match self {
            Self::Argentina => "Argentina",
            Self::Brasil => "Brasil",
        }
    }

    /// Solo Argentina tiene jerarquía provincia→localidad resuelta por georef;
    /// para Brasil el formulario degrada a texto libre.
    pub fn usa_georef(&self) -> bool {
        matches!(self, Self::Argentina)
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Destino {
    pub id: i64,
    pub nombre: String,
    pub pais: Pais,
    pub provincia: String,
    pub localidad: String,
    pub direccion: String,
    #[serde(default)]
    pub contactos: Vec<Contacto>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct DestinoPayload {
    pub nombre: String,
    pub pais: Pais,
    pub provincia: String,
    pub localidad: String,
    pub direccion: String,
    #[serde(default)]
    pub contactos: Vec<Contacto>,
}

/// Estado del cascadeo geográfico del formulario de destino.
/// Invariante: la localidad solo es elegible con provincia ya elegida para el
/// país actual; cambiar país o provincia invalida las selecciones aguas abajo.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SeleccionGeografica {
    pub pais: Pais,
    pub provincia: Option<Provincia>,
    pub localidad: Option<Localidad>,
}

impl SeleccionGeografica {
    pub fn cambiar_pais(&mut self, pais: Pais) {
        if pais != self.pais {
            self.pais = pais;
            self.provincia = None;
            self.localidad = None;
        }
    }

    pub fn cambiar_provincia(&mut self, provincia: Provincia) {
        if self.provincia.as_ref().map(|p| &p.id) != Some(&provincia.id) {
            self.provincia = Some(provincia);
            self.localidad = None;
        }
    }

    /// Rechaza la selección si todavía no hay provincia.
    pub fn cambiar_localidad(&mut self, localidad: Localidad) -> bool {
        if self.provincia.is_none() {
            return false;
        }
        self.localidad = Some(localidad);
        true
    }

    pub fn localidad_habilitada(&self) -> bool {
        self.provincia.is_some()
    }
}

/// Campos por los que el selector/listado de destinos puede buscar
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CampoBusquedaDestino {
    #[default]
    Provincia,
    Localidad,
    Direccion,
}

impl CampoBusquedaDestino {
    pub fn clave(&self) -> &'static str {
        match self {
            Self::Provincia => "provincia",
            Self::Localidad => "localidad",
            Self::Direccion => "direccion",
        }
    }

    pub fn etiqueta(&self) -> &'static str {
        match self {
            Self::Provincia => "Provincia",
            Self::Localidad => "Localidad",
            Self::Direccion => "Dirección",
        }
    }

    pub fn todos() -> [Self; 3] {
        [Self::Provincia, Self::Localidad, Self::Direccion]
    }

    pub fn desde_clave(clave: &str) -> Self {
        match clave {
            "localidad" => Self::Localidad,
            "direccion" => Self::Direccion,
            _ => Self::Provincia,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provincia(id: &str, nombre: &str) -> Provincia {
        Provincia {
            id: id.to_string(),
            nombre: nombre.to_string(),
        }
    }

    #[test]
    fn localidad_requiere_provincia() {
        let mut sel = SeleccionGeografica::default();
        let loc = Localidad {
            id: "1".to_string(),
            nombre: "Rosario".to_string(),
        };
        assert!(!sel.cambiar_localidad(loc.clone()));
        sel.cambiar_provincia(provincia("82", "Santa Fe"));
        assert!(sel.cambiar_localidad(loc));
        assert!(sel.localidad.is_some());
    }

    #[test]
    fn cambiar_provincia_invalida_la_localidad() {
        let mut sel = SeleccionGeografica::default();
        sel.cambiar_provincia(provincia("82", "Santa Fe"));
        sel.cambiar_localidad(Localidad {
            id: "1".to_string(),
            nombre: "Rosario".to_string(),
        });
        sel.cambiar_provincia(provincia("06", "Buenos Aires"));
        assert!(sel.localidad.is_none());
    }

    #[test]
    fn cambiar_pais_invalida_todo_aguas_abajo() {
        let mut sel = SeleccionGeografica::default();
        sel.cambiar_provincia(provincia("82", "Santa Fe"));
        sel.cambiar_pais(Pais::Brasil);
        assert!(sel.provincia.is_none());
        assert!(sel.localidad.is_none());
        // volver a elegir el mismo país no borra nada
        sel.cambiar_provincia(provincia("rs", "Rio Grande do Sul"));
        sel.cambiar_pais(Pais::Brasil);
        assert!(sel.provincia.is_some());
    }
}
