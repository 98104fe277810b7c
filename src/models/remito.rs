use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::estado::Estado;
use super::mercaderia::Mercaderia;

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum Prioridad {
    #[default]
    Normal,
    Alta,
    Urgente,
}

impl Prioridad {
    pub fn etiqueta(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Alta => "Alta",
            Self::Urgente => "Urgente",
        }
    }

    /// Valor que viaja en el query param `prioridad`
    pub fn clave(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Alta => "alta",
            Self::Urgente => "urgente",
        }
    }

    pub fn todas() -> [Self; 3] {
        [Self::Normal, Self::Alta, Self::Urgente]
    }
}

/// Remito: el agregado central. Todo es propiedad del servidor; el cliente
/// solo mantiene copias de lectura en estado de componentes.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Remito {
    pub id: i64,
    pub numero_asignado: String,
    pub prioridad: Prioridad,
    pub cliente_id: i64,
    pub destino_id: i64,
    /// Denormalizados por el backend para el listado
    #[serde(default)]
    pub cliente_razon_social: Option<String>,
    #[serde(default)]
    pub destino_nombre: Option<String>,
    pub estado_id: i64,
    #[serde(default)]
    pub estado: Option<Estado>,
    pub fecha_emision: NaiveDate,
    /// Fecha de agenda: atributo ORTOGONAL al ciclo de vida. Un remito puede
    /// estar en cualquier estado y a la vez tener agenda.
    #[serde(default)]
    pub fecha_agenda: Option<NaiveDate>,
    #[serde(default)]
    pub archivo_adjunto: Option<String>,
    #[serde(default)]
    pub observaciones: Option<String>,
    #[serde(default)]
    pub mercaderias: Vec<Mercaderia>,
    #[serde(default)]
    pub es_reentrega: bool,
    #[serde(default)]
    pub razones_no_entrega: Vec<String>,
}

impl Remito {
    /// Etiqueta derivada: "Agendado" se muestra como conveniencia de UI cuando
    /// hay fecha de agenda. NO es un estado del ciclo de vida.
    pub fn etiqueta_agenda(&self) -> Option<&'static str> {
        self.fecha_agenda.map(|_| "Agendado")
    }
}

/// Payload de alta (`POST /remitoFinal`, multipart). El alta exige al menos
/// una mercadería; el archivo adjunto viaja aparte como `web_sys::File`.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct RemitoPayload {
    pub numero_asignado: String,
    pub observaciones: String,
    pub prioridad: Prioridad,
    pub cliente_id: i64,
    pub destino_id: i64,
    pub mercaderias: Vec<Mercaderia>,
}

impl RemitoPayload {
    pub fn validar(&self) -> Vec<String> {
        let mut errores = Vec::new();
        if self.numero_asignado.trim().is_empty() {
            errores.push("El número de remito es obligatorio".to_string());
        }
        if self.cliente_id <= 0 {
            errores.push("Debe seleccionar un cliente".to_string());
        }
        if self.destino_id <= 0 {
            errores.push("Debe seleccionar un destino".to_string());
        }
        if self.mercaderias.is_empty() {
            errores.push("Debe cargar al menos una mercadería".to_string());
        }
        for mercaderia in &self.mercaderias {
            errores.extend(mercaderia.validar());
        }
        errores
    }
}

/// Filtros del listado de remitos. Se mantienen dos copias: la editable
/// (`filtros`) y la última confirmada (`filtros_aplicados`); solo la segunda
/// genera requests (ver use_filtros_remitos).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct FiltrosRemitos {
    #[serde(default)]
    pub numero_asignado: String,
    #[serde(default)]
    pub cliente_id: Option<i64>,
    #[serde(default)]
    pub destino_id: Option<i64>,
    #[serde(default)]
    pub estado_id: Option<i64>,
    #[serde(default)]
    pub prioridad: Option<Prioridad>,
    #[serde(default)]
    pub fecha_desde: Option<NaiveDate>,
    #[serde(default)]
    pub fecha_hasta: Option<NaiveDate>,
}

impl FiltrosRemitos {
    /// Estado al que vuelve "Limpiar": solo el rango de fechas en hoy..hoy.
    pub fn reiniciado(hoy: NaiveDate) -> Self {
        Self {
            fecha_desde: Some(hoy),
            fecha_hasta: Some(hoy),
            ..Default::default()
        }
    }

    /// "Buscar" exige al menos un campo cargado.
    pub fn hay_alguno(&self) -> bool {
        !self.numero_asignado.trim().is_empty()
            || self.cliente_id.is_some()
            || self.destino_id.is_some()
            || self.estado_id.is_some()
            || self.prioridad.is_some()
            || self.fecha_desde.is_some()
            || self.fecha_hasta.is_some()
    }

    /// Con rango de fechas presente, el filtrado de fechas NO se delega al
    /// backend: se pide page=1&limit=1000 y se filtra/pagina local.
    pub fn filtra_fechas_local(&self) -> bool {
        self.fecha_desde.is_some() || self.fecha_hasta.is_some()
    }

    /// Aplica el rango de fechas sobre `fecha_emision`, inclusive en ambos
    /// extremos. totalItems del listado sale del slice filtrado, nunca del
    /// total crudo del backend.
    pub fn filtrar_por_fechas(&self, remitos: &[Remito]) -> Vec<Remito> {
        remitos
            .iter()
            .filter(|r| {
                self.fecha_desde.map_or(true, |d| r.fecha_emision >= d)
                    && self.fecha_hasta.map_or(true, |h| r.fecha_emision <= h)
            })
            .cloned()
            .collect()
    }
}

/// Fixture compartida por los tests de filtros y selectores
#[cfg(test)]
pub(crate) fn remito_de_prueba(id: i64, numero: &str, fecha: NaiveDate) -> Remito {
    Remito {
        id,
        numero_asignado: numero.to_string(),
        prioridad: Prioridad::Normal,
        cliente_id: 1,
        destino_id: 1,
        cliente_razon_social: Some("ACME SA".to_string()),
        destino_nombre: Some("Depósito Rosario".to_string()),
        estado_id: 1,
        estado: None,
        fecha_emision: fecha,
        fecha_agenda: None,
        archivo_adjunto: None,
        observaciones: None,
        mercaderias: Vec::new(),
        es_reentrega: false,
        razones_no_entrega: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fecha(d: &str) -> NaiveDate {
        d.parse().unwrap()
    }

    #[test]
    fn agendado_es_derivado_no_un_estado() {
        let mut r = remito_de_prueba(1, "R-0001", fecha("2024-01-10"));
        assert_eq!(r.etiqueta_agenda(), None);
        r.fecha_agenda = Some(fecha("2024-02-01"));
        assert_eq!(r.etiqueta_agenda(), Some("Agendado"));
        // la agenda no toca el estado
        assert_eq!(r.estado_id, 1);
    }

    #[test]
    fn alta_sin_mercaderias_es_invalida() {
        let p = RemitoPayload {
            numero_asignado: "R-0001".to_string(),
            cliente_id: 1,
            destino_id: 2,
            ..Default::default()
        };
        assert!(p
            .validar()
            .iter()
            .any(|e| e.contains("al menos una mercadería")));
    }

    #[test]
    fn filtros_vacios_no_habilitan_buscar() {
        assert!(!FiltrosRemitos::default().hay_alguno());
        let f = FiltrosRemitos {
            numero_asignado: "   ".to_string(),
            ..Default::default()
        };
        assert!(!f.hay_alguno());
        let f = FiltrosRemitos {
            cliente_id: Some(3),
            ..Default::default()
        };
        assert!(f.hay_alguno());
    }

    #[test]
    fn limpiar_deja_solo_el_rango_de_hoy() {
        let hoy = fecha("2024-06-15");
        let f = FiltrosRemitos::reiniciado(hoy);
        assert_eq!(f.fecha_desde, Some(hoy));
        assert_eq!(f.fecha_hasta, Some(hoy));
        assert!(f.numero_asignado.is_empty());
        assert!(f.cliente_id.is_none());
        assert!(f.filtra_fechas_local());
    }

    #[test]
    fn el_rango_de_fechas_es_inclusivo() {
        let remitos = vec![
            remito_de_prueba(1, "R-1", fecha("2024-01-01")),
            remito_de_prueba(2, "R-2", fecha("2024-01-15")),
            remito_de_prueba(3, "R-3", fecha("2024-01-31")),
            remito_de_prueba(4, "R-4", fecha("2024-02-01")),
        ];
        let f = FiltrosRemitos {
            fecha_desde: Some(fecha("2024-01-01")),
            fecha_hasta: Some(fecha("2024-01-31")),
            ..Default::default()
        };
        let filtrados = f.filtrar_por_fechas(&remitos);
        assert_eq!(filtrados.len(), 3);
        assert!(filtrados.iter().all(|r| r.id != 4));
    }

    #[test]
    fn rango_abierto_filtra_solo_por_el_extremo_presente() {
        let remitos = vec![
            remito_de_prueba(1, "R-1", fecha("2024-01-01")),
            remito_de_prueba(2, "R-2", fecha("2024-03-01")),
        ];
        let f = FiltrosRemitos {
            fecha_desde: Some(fecha("2024-02-01")),
            ..Default::default()
        };
        let filtrados = f.filtrar_por_fechas(&remitos);
        assert_eq!(filtrados.len(), 1);
        assert_eq!(filtrados[0].id, 2);
    }
}
