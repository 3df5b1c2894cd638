// ============================================================================
// SESSION STATE - MÁQUINA PURA (sin red, sin DOM)
// ============================================================================
// La app está SIEMPRE en exactamente uno de tres estados de autorización.
// Las decisiones de render/routing solo se toman desde estados resueltos.
// ============================================================================

use crate::models::{Role, SessionUser};
use crate::services::ApiError;

#[derive(Clone, PartialEq, Debug)]
pub enum AuthPhase {
    /// Validación en vuelo o aún no lanzada; la UI solo puede mostrar carga.
    Unknown,
    Anonymous,
    Authenticated(SessionUser),
}

impl AuthPhase {
    pub fn role(&self) -> Option<Role> {
        match self {
            AuthPhase::Authenticated(user) => Some(user.role),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, AuthPhase::Unknown)
    }
}

/// Único escritor del estado de sesión. Serializa las validaciones (como
/// máximo una en vuelo) y garantiza que una validación fallida siempre
/// termina en `Anonymous`, nunca en un `Authenticated` rancio.
#[derive(Debug)]
pub struct SessionMachine {
    phase: AuthPhase,
    validating: bool,
}

impl Default for SessionMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionMachine {
    pub fn new() -> Self {
        Self { phase: AuthPhase::Unknown, validating: false }
    }

    pub fn phase(&self) -> &AuthPhase {
        &self.phase
    }

    /// `true` si el caller debe lanzar la llamada de introspección.
    /// Deduplica: ni dos validaciones concurrentes, ni re-validar una fase
    /// ya resuelta en cada navegación.
    pub fn begin_validation(&mut self) -> bool {
        if self.validating || self.phase.is_resolved() {
            return false;
        }
        self.validating = true;
        true
    }

    /// Cualquier fallo (red, 401, 419) cierra en `Anonymous`: fail closed.
    pub fn finish_validation(&mut self, outcome: Result<SessionUser, ApiError>) -> AuthPhase {
        self.validating = false;
        self.phase = match outcome {
            Ok(user) => AuthPhase::Authenticated(user),
            Err(_) => AuthPhase::Anonymous,
        };
        self.phase.clone()
    }

    /// Transición tras un sign-in confirmado por introspección.
    pub fn signed_in(&mut self, user: SessionUser) -> AuthPhase {
        self.validating = false;
        self.phase = AuthPhase::Authenticated(user);
        self.phase.clone()
    }

    pub fn signed_out(&mut self) -> AuthPhase {
        self.validating = false;
        self.phase = AuthPhase::Anonymous;
        self.phase.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> SessionUser {
        SessionUser { id: 7, username: Some("hariom123".to_string()), role }
    }

    #[test]
    fn starts_unknown() {
        let machine = SessionMachine::new();
        assert_eq!(*machine.phase(), AuthPhase::Unknown);
        assert!(!machine.phase().is_resolved());
    }

    #[test]
    fn serializes_concurrent_validations() {
        let mut machine = SessionMachine::new();
        assert!(machine.begin_validation());
        // Segunda llamada mientras la primera sigue en vuelo: no-op
        assert!(!machine.begin_validation());
    }

    #[test]
    fn failed_validation_is_anonymous() {
        let mut machine = SessionMachine::new();
        assert!(machine.begin_validation());
        let phase = machine.finish_validation(Err(ApiError::Unauthorized));
        assert_eq!(phase, AuthPhase::Anonymous);

        // También errores de red: fail closed
        let mut machine = SessionMachine::new();
        machine.begin_validation();
        let phase = machine.finish_validation(Err(ApiError::Network("offline".into())));
        assert_eq!(phase, AuthPhase::Anonymous);
    }

    #[test]
    fn successful_validation_keeps_role() {
        let mut machine = SessionMachine::new();
        machine.begin_validation();
        let phase = machine.finish_validation(Ok(user(Role::OrderManager)));
        assert_eq!(phase.role(), Some(Role::OrderManager));
    }

    #[test]
    fn resolved_phase_is_not_revalidated_per_navigation() {
        let mut machine = SessionMachine::new();
        machine.begin_validation();
        machine.finish_validation(Ok(user(Role::Admin)));
        // El gate de cada página pide validar al montar; ya resuelto, no-op
        assert!(!machine.begin_validation());
    }

    #[test]
    fn sign_out_is_sticky_anonymous() {
        let mut machine = SessionMachine::new();
        machine.begin_validation();
        machine.finish_validation(Ok(user(Role::Admin)));
        assert_eq!(machine.signed_out(), AuthPhase::Anonymous);
        assert!(!machine.begin_validation());
    }

    #[test]
    fn sign_in_after_sign_out_recovers() {
        let mut machine = SessionMachine::new();
        machine.signed_out();
        let phase = machine.signed_in(user(Role::ProductManager));
        assert_eq!(phase.role(), Some(Role::ProductManager));
    }
}
