//! Identifier handling for the two lookup forms.
//!
//! The full-record lookup and the quick points lookup normalize input
//! differently and word their "not found" message differently. Both refuse to
//! issue a request for an empty identifier.

use crate::api::{ApiError, Endpoints};
use crate::model::TransactionSummary;
use crate::rules::RECENT_TRANSACTIONS_SHOWN;

pub const EMPTY_ID_MESSAGE: &str = "Ingresa una cédula para buscar";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    /// Full customer record, `GET /api/users/{id}`.
    User,
    /// Points only, `GET /api/puntos/cliente/{id}`.
    Customer,
}

impl LookupKind {
    /// Normalized identifier, or `None` when nothing is left to search for.
    ///
    /// `User` drops every whitespace run (`" V 1234 "` becomes `"V1234"`);
    /// `Customer` only trims the ends.
    pub fn normalize(&self, input: &str) -> Option<String> {
        let id = match self {
            LookupKind::User => input.split_whitespace().collect::<String>(),
            LookupKind::Customer => input.trim().to_string(),
        };
        (!id.is_empty()).then_some(id)
    }

    pub fn url(&self, endpoints: &Endpoints, id: &str) -> String {
        match self {
            LookupKind::User => endpoints.user(id),
            LookupKind::Customer => endpoints.customer_points(id),
        }
    }

    pub fn not_found_message(&self) -> &'static str {
        match self {
            LookupKind::User => "Usuario no encontrado",
            LookupKind::Customer => "Cliente no encontrado",
        }
    }

    /// Inline message for a failed lookup.
    pub fn error_message(&self, error: &ApiError) -> String {
        match error {
            ApiError::NotFound { .. } => self.not_found_message().to_string(),
            ApiError::Status { .. } => error.to_string(),
            ApiError::Transport(_) | ApiError::Decode(_) => match self {
                LookupKind::User => "Error al buscar usuario".to_string(),
                LookupKind::Customer => error.to_string(),
            },
        }
    }
}

/// The transactions the lookup lists, plus the "showing n of m" note when
/// some are left out.
pub fn recent_transactions(
    transactions: &[TransactionSummary],
) -> (&[TransactionSummary], Option<String>) {
    let shown = &transactions[..transactions.len().min(RECENT_TRANSACTIONS_SHOWN)];
    let note = (transactions.len() > RECENT_TRANSACTIONS_SHOWN).then(|| {
        format!(
            "Mostrando {} de {} transacciones",
            RECENT_TRANSACTIONS_SHOWN,
            transactions.len()
        )
    });
    (shown, note)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction(n: usize) -> TransactionSummary {
        TransactionSummary {
            id: format!("T-{}", n),
            date: "2024-01-01".to_string(),
            store: "Caracas".to_string(),
            item: "Cable".to_string(),
            quantity: 1,
            amount: 10.0,
            points: 10,
        }
    }

    #[test]
    fn user_lookup_compacts_whitespace() {
        assert_eq!(
            LookupKind::User.normalize(" V 1234 "),
            Some("V1234".to_string())
        );
        assert_eq!(
            LookupKind::User.normalize("V-12\t345\n678"),
            Some("V-12345678".to_string())
        );
    }

    #[test]
    fn customer_lookup_only_trims() {
        assert_eq!(
            LookupKind::Customer.normalize(" V 1234 "),
            Some("V 1234".to_string())
        );
    }

    #[test]
    fn blank_input_issues_no_request() {
        for kind in [LookupKind::User, LookupKind::Customer] {
            assert_eq!(kind.normalize(""), None);
            assert_eq!(kind.normalize("  \t "), None);
        }
    }

    #[test]
    fn not_found_wording_depends_on_kind() {
        let err = ApiError::from_response(404, "Not Found", r#"{"detail": "no existe"}"#);
        assert_eq!(LookupKind::User.error_message(&err), "Usuario no encontrado");
        assert_eq!(
            LookupKind::Customer.error_message(&err),
            "Cliente no encontrado"
        );
    }

    #[test]
    fn other_statuses_show_detail_or_code() {
        let with_detail = ApiError::from_response(422, "", r#"{"detail": "Cédula inválida"}"#);
        assert_eq!(LookupKind::User.error_message(&with_detail), "Cédula inválida");
        let bare = ApiError::from_response(500, "", "");
        assert_eq!(LookupKind::Customer.error_message(&bare), "Error 500");
    }

    #[test]
    fn urls_follow_kind() {
        let endpoints = Endpoints::new("");
        assert_eq!(LookupKind::User.url(&endpoints, "V-1"), "/api/users/V-1");
        assert_eq!(
            LookupKind::Customer.url(&endpoints, "V 1"),
            "/api/puntos/cliente/V%201"
        );
    }

    #[test]
    fn at_most_ten_transactions_are_listed() {
        let few: Vec<_> = (0..3).map(transaction).collect();
        let (shown, note) = recent_transactions(&few);
        assert_eq!(shown.len(), 3);
        assert_eq!(note, None);

        let many: Vec<_> = (0..15).map(transaction).collect();
        let (shown, note) = recent_transactions(&many);
        assert_eq!(shown.len(), 10);
        assert_eq!(shown[0].id, "T-0");
        assert_eq!(note.as_deref(), Some("Mostrando 10 de 15 transacciones"));
    }
}
