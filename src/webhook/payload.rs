//! Transport payload for the Sheets webhook
//!
//! The Apps Script endpoint maps form keys straight onto spreadsheet
//! columns, so key names, their order and the repeated-key convention for
//! multi-selects all have to stay exactly as the receiving script expects.

use crate::state::SignupForm;

/// Fixed note attached to every lead row
const SUBMISSION_MESSAGE: &str = "Cadastro lista de espera CoopHub";

/// Fixed origin marker the spreadsheet filters on
const SUBMISSION_SOURCE: &str = "Landing CoopHub";

/// Flatten the form into the ordered key/value pairs the endpoint expects.
///
/// Set-valued fields contribute one pair per selection. The five free-text
/// optionals are trimmed and dropped entirely when blank; every other field
/// is always present, an empty value encoding as `key=`. The lead's name is
/// duplicated under a plain `name` key for the receiving script.
pub fn to_pairs(form: &SignupForm) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    push(&mut pairs, "nome", &form.name);
    push(&mut pairs, "email", &form.email);
    push(&mut pairs, "porte", &form.org_size);
    push(&mut pairs, "setor", &form.sector);
    push_trimmed(&mut pairs, "setorOutro", &form.sector_other);
    push(&mut pairs, "numCooperados", &form.member_count);
    push(&mut pairs, "tempoImplantacao", &form.timeline);
    push(&mut pairs, "aceitaBeta", &form.accepts_beta);
    push(&mut pairs, "faixaPreco", &form.price_range);
    push_each(&mut pairs, "objetivos", &form.goals);
    push_trimmed(&mut pairs, "objetivoOutro", &form.goals_other);
    push_each(&mut pairs, "problemas", &form.pain_points);
    push_trimmed(&mut pairs, "problemaOutro", &form.pain_points_other);
    push_trimmed(&mut pairs, "problemasLivre", &form.pain_points_notes);
    push_each(&mut pairs, "modulos", &form.modules);
    push_trimmed(&mut pairs, "integracoes", &form.integrations);
    push(&mut pairs, "tentou", &form.previous_attempts);
    push(&mut pairs, "consent", if form.consent { "true" } else { "false" });
    push(&mut pairs, "message", SUBMISSION_MESSAGE);
    push(&mut pairs, "name", &form.name);
    push(&mut pairs, "_source", SUBMISSION_SOURCE);

    pairs
}

/// Encode the pairs as an application/x-www-form-urlencoded body
/// (spaces as `+`, everything else percent-encoded as UTF-8)
pub fn encode(pairs: &[(String, String)]) -> String {
    // Serializing string pairs cannot fail
    serde_urlencoded::to_string(pairs).unwrap_or_default()
}

fn push(pairs: &mut Vec<(String, String)>, key: &str, value: &str) {
    pairs.push((key.to_string(), value.to_string()));
}

/// Trimmed on the way out; blank means the key is absent from the body
fn push_trimmed(pairs: &mut Vec<(String, String)>, key: &str, value: &str) {
    let trimmed = value.trim();
    if !trimmed.is_empty() {
        pairs.push((key.to_string(), trimmed.to_string()));
    }
}

fn push_each(pairs: &mut Vec<(String, String)>, key: &str, values: &[String]) {
    for value in values {
        pairs.push((key.to_string(), value.clone()));
    }
}
