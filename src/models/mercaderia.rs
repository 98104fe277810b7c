use serde::{Deserialize, Serialize};

/// Línea de mercadería de un remito. Se crea/edita/borra solo desde el
/// sub-formulario del remito (paginado local de a 3).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Mercaderia {
    #[serde(default)]
    pub id: Option<i64>,
    pub tipo_mercaderia_id: i64,
    pub valor_declarado: f64,
    pub volumen_metros_cubico: f64,
    pub peso_mercaderia: f64,
    #[serde(default)]
    pub cantidad_pallets: Option<u32>,
    #[serde(default)]
    pub cantidad_racks: Option<u32>,
    #[serde(default)]
    pub cantidad_bultos: Option<u32>,
    #[serde(default)]
    pub cantidad_bobinas: Option<u32>,
    #[serde(default)]
    pub requisitos_especiales: Option<String>,
}

impl Mercaderia {
    pub fn validar(&self) -> Vec<String> {
        let mut errores = Vec::new();
        if self.tipo_mercaderia_id <= 0 {
            errores.push("Debe elegir un tipo de mercadería".to_string());
        }
        if self.valor_declarado <= 0.0 {
            errores.push("El valor declarado debe ser mayor a cero".to_string());
        }
        if self.volumen_metros_cubico <= 0.0 {
            errores.push("El volumen debe ser mayor a cero".to_string());
        }
        if self.peso_mercaderia <= 0.0 {
            errores.push("El peso debe ser mayor a cero".to_string());
        }
        errores
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mercaderia_con_magnitudes_positivas_es_valida() {
        let m = Mercaderia {
            tipo_mercaderia_id: 2,
            valor_declarado: 15000.0,
            volumen_metros_cubico: 1.2,
            peso_mercaderia: 350.0,
            cantidad_pallets: Some(2),
            ..Default::default()
        };
        assert!(m.validar().is_empty());
    }

    #[test]
    fn magnitudes_no_positivas_se_rechazan() {
        let m = Mercaderia {
            tipo_mercaderia_id: 2,
            valor_declarado: 0.0,
            volumen_metros_cubico: -1.0,
            peso_mercaderia: 10.0,
            ..Default::default()
        };
        assert_eq!(m.validar().len(), 2);
    }
}
