use serde::{Deserialize, Serialize};

use super::contacto::Contacto;
use crate::utils::validadores::validar_cuit;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    pub id: i64,
    pub razon_social: String,
    /// 11 dígitos con verificador módulo 11 (validado localmente antes del submit)
    #[serde(default)]
    pub cuit_rut: Option<String>,
    pub tipo_empresa_id: i64,
    pub direccion: String,
    #[serde(default)]
    pub contactos: Vec<Contacto>,
}

/// Payload de alta/edición: el id lo asigna siempre el servidor.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClientePayload {
    pub razon_social: String,
    #[serde(default)]
    pub cuit_rut: Option<String>,
    pub tipo_empresa_id: i64,
    pub direccion: String,
    #[serde(default)]
    pub contactos: Vec<Contacto>,
}

impl ClientePayload {
    /// Validación local previa al submit. `requiere_contactos` viene del
    /// AppConfig (flag de contactos): con el flag apagado un cliente sin
    /// contactos es válido.
    pub fn validar(&self, requiere_contactos: bool) -> Vec<String> {
        let mut errores = Vec::new();
        if self.razon_social.trim().is_empty() {
            errores.push("La razón social es obligatoria".to_string());
        }
        if self.direccion.trim().is_empty() {
            errores.push("La dirección es obligatoria".to_string());
        }
        if let Some(cuit) = self.cuit_rut.as_deref() {
            if !cuit.is_empty() && !validar_cuit(cuit) {
                errores.push("El CUIT/RUT no es válido".to_string());
            }
        }
        if requiere_contactos && self.contactos.is_empty() {
            errores.push("Debe cargar al menos un contacto".to_string());
        }
        for contacto in &self.contactos {
            errores.extend(contacto.validar());
        }
        errores
    }
}

/// Campos por los que el selector/listado de clientes puede buscar en el backend
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CampoBusquedaCliente {
    #[default]
    RazonSocial,
    CuitRut,
    Direccion,
}

impl CampoBusquedaCliente {
    /// Nombre del query param que espera `GET /cliente`
    pub fn clave(&self) -> &'static str {
        match self {
            Self::RazonSocial => "razonSocial",
            Self::CuitRut => "cuit_rut",
            Self::Direccion => "direccion",
        }
    }

    pub fn etiqueta(&self) -> &'static str {
        match self {
            Self::RazonSocial => "Razón social",
            Self::CuitRut => "CUIT/RUT",
            Self::Direccion => "Dirección",
        }
    }

    pub fn todos() -> [Self; 3] {
        [Self::RazonSocial, Self::CuitRut, Self::Direccion]
    }

    pub fn desde_clave(clave: &str) -> Self {
        match clave {
            "cuit_rut" => Self::CuitRut,
            "direccion" => Self::Direccion,
            _ => Self::RazonSocial,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_base() -> ClientePayload {
        ClientePayload {
            razon_social: "ACME SA".to_string(),
            cuit_rut: Some("20123456786".to_string()),
            tipo_empresa_id: 1,
            direccion: "Av. Siempre Viva 742".to_string(),
            contactos: Vec::new(),
        }
    }

    #[test]
    fn cliente_sin_contactos_es_valido_con_flag_apagado() {
        assert!(payload_base().validar(false).is_empty());
    }

    #[test]
    fn cliente_sin_contactos_es_invalido_con_flag_prendido() {
        let errores = payload_base().validar(true);
        assert!(errores.iter().any(|e| e.contains("al menos un contacto")));
    }

    #[test]
    fn cuit_invalido_bloquea_el_submit() {
        let mut p = payload_base();
        p.cuit_rut = Some("20123456780".to_string());
        assert!(p.validar(false).iter().any(|e| e.contains("CUIT")));
    }

    #[test]
    fn cuit_ausente_no_genera_error() {
        let mut p = payload_base();
        p.cuit_rut = None;
        assert!(p.validar(false).is_empty());
    }
}
