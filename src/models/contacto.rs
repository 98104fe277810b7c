use serde::{Deserialize, Serialize};

use crate::utils::validadores::{validar_correo, validar_telefono};

/// Persona autorizada de un cliente o un destino (nunca de ambos).
/// Su ciclo de vida va atado al submit del formulario del padre.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Contacto {
    #[serde(default)]
    pub id: Option<i64>,
    pub persona_autorizada: String,
    pub correo_electronico: String,
    pub telefono: String,
}

impl Contacto {
    /// Errores de validación inline, en orden de campo. Vacío = válido.
    pub fn validar(&self) -> Vec<String> {
        let mut errores = Vec::new();
        if self.persona_autorizada.trim().is_empty() {
            errores.push("La persona autorizada es obligatoria".to_string());
        }
        if !validar_correo(&self.correo_electronico) {
            errores.push("El correo electrónico no es válido".to_string());
        }
        if !validar_telefono(&self.telefono) {
            errores.push("El teléfono debe tener entre 10 y 15 dígitos".to_string());
        }
        errores
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contacto_completo_es_valido() {
        let c = Contacto {
            id: None,
            persona_autorizada: "Juan Pérez".to_string(),
            correo_electronico: "jperez@acme.com.ar".to_string(),
            telefono: "+541112345678".to_string(),
        };
        assert!(c.validar().is_empty());
    }

    #[test]
    fn contacto_vacio_acumula_errores() {
        let c = Contacto::default();
        assert_eq!(c.validar().len(), 3);
    }
}
