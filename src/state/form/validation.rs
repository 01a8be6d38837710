//! Submit-time validation of the sign-up form
//!
//! Every rule is per-field and independent; fields that pass produce no
//! entry. Messages are the fixed strings the sign-up page shows under each
//! field. The "Other" companions are deliberately not cross-validated
//! against their selects.

use super::signup_form::{FieldId, SignupForm};
use std::collections::HashMap;

/// Validation messages keyed by the failing field
pub type FieldErrors = HashMap<FieldId, &'static str>;

/// Check the whole form. Ok(()) means the submission pipeline may run.
pub fn validate(form: &SignupForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if form.name.trim().chars().count() < 2 {
        errors.insert(FieldId::Name, "Informe seu nome");
    }
    if !is_valid_email(&form.email) {
        errors.insert(FieldId::Email, "E-mail inválido");
    }
    if form.org_size.is_empty() {
        errors.insert(FieldId::OrgSize, "Selecione o porte");
    }
    if form.sector.is_empty() {
        errors.insert(FieldId::Sector, "Informe o setor");
    }
    if form.timeline.is_empty() {
        errors.insert(FieldId::Timeline, "Selecione um prazo");
    }
    if form.accepts_beta != "Sim" && form.accepts_beta != "Não" {
        errors.insert(FieldId::AcceptsBeta, "Selecione uma opção");
    }
    if form.price_range.is_empty() {
        errors.insert(FieldId::PriceRange, "Selecione uma faixa");
    }
    if form.goals.is_empty() {
        errors.insert(FieldId::Goals, "Selecione ao menos um objetivo");
    }
    if form.pain_points.is_empty() {
        errors.insert(FieldId::PainPoints, "Selecione ao menos um problema");
    }
    if form.modules.is_empty() {
        errors.insert(FieldId::Modules, "Selecione ao menos um módulo");
    }
    if form.previous_attempts.trim().chars().count() < 5 {
        errors.insert(FieldId::PreviousAttempts, "Conte um pouco do que já tentou");
    }
    if !form.consent {
        errors.insert(FieldId::Consent, "É necessário aceitar o consentimento");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Address grammar of the sign-up page: restricted local part, at least one
/// domain label plus an alphabetic TLD of two or more letters.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }

    if local.is_empty() || local.starts_with('.') || local.contains("..") {
        return false;
    }
    if !local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "_'+-.".contains(c))
    {
        return false;
    }
    // The character right before the @ may not be a dot or apostrophe
    if !local
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_alphanumeric() || "_+-".contains(c))
    {
        return false;
    }

    let mut labels = domain.split('.');
    let Some(tld) = labels.next_back() else {
        return false;
    };
    if tld.chars().count() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }

    let mut label_count = 0;
    for label in labels {
        label_count += 1;
        let mut chars = label.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphanumeric() => {}
            _ => return false,
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return false;
        }
    }
    label_count >= 1
}
