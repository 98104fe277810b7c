// ============================================================================
// CICLO DE VIDA DEL REMITO
// ============================================================================
// Tabla de transiciones pura. El hook use_remito_estados la usa para decidir
// qué acciones ofrecer; el avance real SIEMPRE pasa por el backend y se adopta
// el estado que devuelve el servidor (estadoId es la fuente de verdad).
// ============================================================================

use serde::{Deserialize, Serialize};

/// Fila de la enumeración `GET /estado` del backend
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Estado {
    pub id: i64,
    pub nombre: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EstadoRemito {
    Autorizado,
    EnPreparacion,
    EnCarga,
    EnCamino,
    Entregado,
    NoEntregado,
    Retenido,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AccionRemito {
    ComenzarPreparacion,
    TerminarPreparacion,
    AsignarViaje,
    MarcarEntregado,
    MarcarNoEntregado,
    Retener,
    Liberar,
    HabilitarReentrega,
}

impl EstadoRemito {
    pub fn nombre(&self) -> &'static str {
        match self {
            Self::Autorizado => "Autorizado",
            Self::EnPreparacion => "En preparación",
            Self::EnCarga => "En carga",
            Self::EnCamino => "En camino",
            Self::Entregado => "Entregado",
            Self::NoEntregado => "No entregado",
            Self::Retenido => "Retenido",
        }
    }

    /// Mapea el `nombre` devuelto por `GET /estado`. "Agendado" NO aparece acá:
    /// es una etiqueta derivada de `fechaAgenda`, no un estado almacenado.
    pub fn desde_nombre(nombre: &str) -> Option<Self> {
        match nombre {
            "Autorizado" => Some(Self::Autorizado),
            "En preparación" => Some(Self::EnPreparacion),
            "En carga" => Some(Self::EnCarga),
            "En camino" => Some(Self::EnCamino),
            "Entregado" => Some(Self::Entregado),
            "No entregado" => Some(Self::NoEntregado),
            "Retenido" => Some(Self::Retenido),
            _ => None,
        }
    }

    /// Entregado no admite más acciones; No entregado solo admite la
    /// reentrega (una vez), así que tampoco se puede retener.
    pub fn es_terminal(&self) -> bool {
        matches!(self, Self::Entregado | Self::NoEntregado)
    }

    /// Acciones ofrecidas desde este estado, según la tabla de transiciones.
    pub fn acciones_disponibles(&self, es_reentrega: bool) -> Vec<AccionRemito> {
        use AccionRemito::*;
        match self {
            Self::Autorizado => vec![ComenzarPreparacion, Retener],
            Self::EnPreparacion => vec![TerminarPreparacion, Retener],
            Self::EnCarga => vec![AsignarViaje, Retener],
            Self::EnCamino => vec![MarcarEntregado, MarcarNoEntregado, Retener],
            Self::Entregado => vec![],
            // reentrega one-shot: con es_reentrega ya en true no se ofrece nada
            Self::NoEntregado if !es_reentrega => vec![HabilitarReentrega],
            Self::NoEntregado => vec![],
            Self::Retenido => vec![Liberar],
        }
    }

    /// Estado resultante de una acción. `Liberar` devuelve `None` porque el
    /// destino depende del snapshot previo a la retención (lo restaura el
    /// backend en `PUT /remito/:id/liberar`).
    pub fn aplicar(&self, accion: AccionRemito) -> Option<EstadoRemito> {
        use AccionRemito::*;
        match (self, accion) {
            (Self::Autorizado, ComenzarPreparacion) => Some(Self::EnPreparacion),
            (Self::EnPreparacion, TerminarPreparacion) => Some(Self::EnCarga),
            (Self::EnCarga, AsignarViaje) => Some(Self::EnCamino),
            (Self::EnCamino, MarcarEntregado) => Some(Self::Entregado),
            (Self::EnCamino, MarcarNoEntregado) => Some(Self::NoEntregado),
            (estado, Retener) if !estado.es_terminal() && *estado != Self::Retenido => {
                Some(Self::Retenido)
            }
            (Self::NoEntregado, HabilitarReentrega) => Some(Self::Autorizado),
            _ => None,
        }
    }
}

impl AccionRemito {
    pub fn etiqueta(&self) -> &'static str {
        match self {
            Self::ComenzarPreparacion => "Comenzar preparación",
            Self::TerminarPreparacion => "Terminar preparación",
            Self::AsignarViaje => "Asignar viaje",
            Self::MarcarEntregado => "Entregado",
            Self::MarcarNoEntregado => "No entregado",
            Self::Retener => "Retener",
            Self::Liberar => "Liberar",
            Self::HabilitarReentrega => "Habilitar reentrega",
        }
    }

    /// No entregado exige un motivo no vacío (se acumula en razonesNoEntrega)
    pub fn requiere_motivo(&self) -> bool {
        matches!(self, Self::MarcarNoEntregado)
    }
}

/// Checklist de preparación: un flag por mercadería real del remito, todas
/// sin preparar al entrar a "En preparación". Es estado de UI local (el
/// backend solo persiste estadoId); se snapshotea junto con el estado previo
/// al retener y se restaura tal cual al liberar.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ChecklistPreparacion {
    preparadas: Vec<bool>,
}

impl ChecklistPreparacion {
    pub fn nueva(cantidad_mercaderias: usize) -> Self {
        Self {
            preparadas: vec![false; cantidad_mercaderias],
        }
    }

    pub fn marcar(&mut self, indice: usize, preparada: bool) {
        if let Some(flag) = self.preparadas.get_mut(indice) {
            *flag = preparada;
        }
    }

    pub fn esta_preparada(&self, indice: usize) -> bool {
        self.preparadas.get(indice).copied().unwrap_or(false)
    }

    pub fn completa(&self) -> bool {
        self.preparadas.iter().all(|p| *p)
    }

    pub fn len(&self) -> usize {
        self.preparadas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.preparadas.is_empty()
    }
}

/// Chequeo previo al round-trip: además de la tabla, "Terminar preparación"
/// se rechaza mientras quede mercadería sin marcar, y "No entregado" exige
/// motivo. Devuelve el mensaje para el usuario cuando la acción no procede.
pub fn validar_accion(
    estado: EstadoRemito,
    accion: AccionRemito,
    es_reentrega: bool,
    checklist: &ChecklistPreparacion,
    motivo: Option<&str>,
) -> Result<(), &'static str> {
    if !estado.acciones_disponibles(es_reentrega).contains(&accion) {
        if accion == AccionRemito::HabilitarReentrega && es_reentrega {
            return Err("La reentrega ya fue utilizada para este remito");
        }
        return Err("La acción no está disponible en el estado actual");
    }
    if accion == AccionRemito::TerminarPreparacion && !checklist.completa() {
        return Err("Debe marcar todas las mercaderías como preparadas");
    }
    if accion.requiere_motivo() && motivo.map_or(true, |m| m.trim().is_empty()) {
        return Err("Debe indicar el motivo de la no entrega");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use AccionRemito::*;
    use EstadoRemito::*;

    const TODOS: [EstadoRemito; 7] = [
        Autorizado,
        EnPreparacion,
        EnCarga,
        EnCamino,
        Entregado,
        NoEntregado,
        Retenido,
    ];
    const ACCIONES: [AccionRemito; 8] = [
        ComenzarPreparacion,
        TerminarPreparacion,
        AsignarViaje,
        MarcarEntregado,
        MarcarNoEntregado,
        Retener,
        Liberar,
        HabilitarReentrega,
    ];

    #[test]
    fn el_camino_feliz_recorre_la_tabla() {
        assert_eq!(Autorizado.aplicar(ComenzarPreparacion), Some(EnPreparacion));
        assert_eq!(EnPreparacion.aplicar(TerminarPreparacion), Some(EnCarga));
        assert_eq!(EnCarga.aplicar(AsignarViaje), Some(EnCamino));
        assert_eq!(EnCamino.aplicar(MarcarEntregado), Some(Entregado));
        assert_eq!(EnCamino.aplicar(MarcarNoEntregado), Some(NoEntregado));
    }

    #[test]
    fn solo_las_transiciones_de_la_tabla_son_alcanzables() {
        // Autorizado no llega a Entregado en un paso
        for accion in ACCIONES {
            if let Some(destino) = Autorizado.aplicar(accion) {
                assert_ne!(destino, Entregado);
            }
        }
        // los terminales no aplican ninguna acción
        for accion in ACCIONES {
            assert_eq!(Entregado.aplicar(accion), None);
        }
        // Retenido solo libera, y Liberar no resuelve destino sin snapshot
        for accion in ACCIONES {
            assert_eq!(Retenido.aplicar(accion), None);
        }
        assert_eq!(Retenido.acciones_disponibles(false), vec![Liberar]);
    }

    #[test]
    fn retener_solo_desde_no_terminales() {
        for estado in TODOS {
            let puede = estado.aplicar(Retener).is_some();
            let esperado = !estado.es_terminal() && estado != Retenido;
            assert_eq!(puede, esperado, "estado {:?}", estado);
        }
    }

    #[test]
    fn la_reentrega_es_one_shot() {
        assert_eq!(
            NoEntregado.acciones_disponibles(false),
            vec![HabilitarReentrega]
        );
        assert!(NoEntregado.acciones_disponibles(true).is_empty());
        let err = validar_accion(
            NoEntregado,
            HabilitarReentrega,
            true,
            &ChecklistPreparacion::default(),
            None,
        )
        .unwrap_err();
        assert!(err.contains("reentrega ya fue utilizada"));
    }

    #[test]
    fn terminar_preparacion_exige_checklist_completa() {
        let mut checklist = ChecklistPreparacion::nueva(3);
        checklist.marcar(0, true);
        checklist.marcar(2, true);
        let err = validar_accion(
            EnPreparacion,
            TerminarPreparacion,
            false,
            &checklist,
            None,
        )
        .unwrap_err();
        assert!(err.contains("todas las mercaderías"));

        checklist.marcar(1, true);
        assert!(validar_accion(EnPreparacion, TerminarPreparacion, false, &checklist, None).is_ok());
    }

    #[test]
    fn no_entregado_exige_motivo() {
        let checklist = ChecklistPreparacion::default();
        assert!(validar_accion(EnCamino, MarcarNoEntregado, false, &checklist, None).is_err());
        assert!(validar_accion(EnCamino, MarcarNoEntregado, false, &checklist, Some("  ")).is_err());
        assert!(validar_accion(
            EnCamino,
            MarcarNoEntregado,
            false,
            &checklist,
            Some("Domicilio cerrado")
        )
        .is_ok());
    }

    #[test]
    fn nombres_van_y_vuelven() {
        for estado in TODOS {
            assert_eq!(EstadoRemito::desde_nombre(estado.nombre()), Some(estado));
        }
        // "Agendado" no es un estado del ciclo de vida
        assert_eq!(EstadoRemito::desde_nombre("Agendado"), None);
    }
}
