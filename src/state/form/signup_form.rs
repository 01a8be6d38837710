//! Sign-up form state and field cursor model

use super::options;

/// Identifies a field of the sign-up form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    OrgSize,
    Sector,
    SectorOther,
    MemberCount,
    Timeline,
    AcceptsBeta,
    PriceRange,
    Goals,
    GoalsOther,
    PainPoints,
    PainPointsOther,
    PainPointsNotes,
    Modules,
    Integrations,
    PreviousAttempts,
    Consent,
    Submit,
}

/// Widget kind of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Select,
    MultiSelect,
    Checkbox,
    Button,
}

/// Display and focus order of the form fields
pub const FIELD_ORDER: [FieldId; 19] = [
    FieldId::Name,
    FieldId::Email,
    FieldId::OrgSize,
    FieldId::Sector,
    FieldId::SectorOther,
    FieldId::MemberCount,
    FieldId::Timeline,
    FieldId::AcceptsBeta,
    FieldId::PriceRange,
    FieldId::Goals,
    FieldId::GoalsOther,
    FieldId::PainPoints,
    FieldId::PainPointsOther,
    FieldId::PainPointsNotes,
    FieldId::Modules,
    FieldId::Integrations,
    FieldId::PreviousAttempts,
    FieldId::Consent,
    FieldId::Submit,
];

impl FieldId {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Name
            | Self::Email
            | Self::SectorOther
            | Self::MemberCount
            | Self::GoalsOther
            | Self::PainPointsOther
            | Self::Integrations => FieldKind::Text,
            Self::PainPointsNotes | Self::PreviousAttempts => FieldKind::TextArea,
            Self::OrgSize | Self::Sector | Self::Timeline | Self::AcceptsBeta | Self::PriceRange => {
                FieldKind::Select
            }
            Self::Goals | Self::PainPoints | Self::Modules => FieldKind::MultiSelect,
            Self::Consent => FieldKind::Checkbox,
            Self::Submit => FieldKind::Button,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Nome",
            Self::Email => "E-mail",
            Self::OrgSize => "Porte da cooperativa",
            Self::Sector => "Setor principal",
            Self::SectorOther => "Se marcou 'Outro', qual?",
            Self::MemberCount => "Nº de cooperados (aprox)",
            Self::Timeline => "Tempo desejado para implementar",
            Self::AcceptsBeta => "Aceitaria participar do beta com feedback quinzenal?",
            Self::PriceRange => "Quanto estaria disposto a pagar (faixa de preço)?",
            Self::Goals => "O que você espera alcançar?",
            Self::GoalsOther => "Outro objetivo",
            Self::PainPoints => "Quais problemas quer evitar?",
            Self::PainPointsOther => "Outro problema",
            Self::PainPointsNotes => "Quer detalhar?",
            Self::Modules => "Quais módulos têm mais interesse?",
            Self::Integrations => "Integrações desejadas",
            Self::PreviousAttempts => "O que você já tentou e não funcionou?",
            Self::Consent => "Consentimento",
            Self::Submit => "Entrar na lista de espera",
        }
    }

    /// Hint shown while the field is empty
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Name => Some("Seu nome"),
            Self::Email => Some("voce@empresa.com"),
            Self::MemberCount => Some("ex.: 350"),
            Self::GoalsOther | Self::PainPointsOther => Some("Outro (opcional)"),
            Self::PainPointsNotes => {
                Some("Conte detalhes dos problemas que quer evitar (opcional)")
            }
            Self::Integrations => Some("Integrações necessárias (ERP/contábil, etc.)"),
            Self::PreviousAttempts => Some("Conte rapidamente sua experiência"),
            _ => None,
        }
    }

    /// Fixed vocabulary for select and multi-select fields
    pub fn options(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::OrgSize => Some(options::ORG_SIZES),
            Self::Sector => Some(options::SECTORS),
            Self::Timeline => Some(options::TIMELINES),
            Self::AcceptsBeta => Some(options::BETA_CHOICES),
            Self::PriceRange => Some(options::PRICE_RANGES),
            Self::Goals => Some(options::GOALS),
            Self::PainPoints => Some(options::PAIN_POINTS),
            Self::Modules => Some(options::MODULES),
            _ => None,
        }
    }
}

/// Toggle a label in a multi-select: remove when present, append when absent.
/// The order of the remaining elements is preserved.
pub fn toggle_selection(selection: &mut Vec<String>, label: &str) {
    if let Some(pos) = selection.iter().position(|v| v == label) {
        selection.remove(pos);
    } else {
        selection.push(label.to_string());
    }
}

/// All values of the sign-up form plus the focus cursor
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub org_size: String,
    pub sector: String,
    pub sector_other: String,
    pub member_count: String,
    pub timeline: String,
    pub accepts_beta: String,
    pub price_range: String,
    pub goals: Vec<String>,
    pub goals_other: String,
    pub pain_points: Vec<String>,
    pub pain_points_other: String,
    pub pain_points_notes: String,
    pub modules: Vec<String>,
    pub integrations: String,
    pub previous_attempts: String,
    pub consent: bool,
    /// Index into FIELD_ORDER of the focused field
    pub active_field_index: usize,
    /// Highlighted row inside the active multi-select
    pub option_cursor: usize,
}

impl SignupForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            org_size: String::new(),
            sector: String::new(),
            sector_other: String::new(),
            member_count: String::new(),
            timeline: String::new(),
            accepts_beta: "Sim".to_string(),
            price_range: String::new(),
            goals: Vec::new(),
            goals_other: String::new(),
            pain_points: Vec::new(),
            pain_points_other: String::new(),
            pain_points_notes: String::new(),
            modules: Vec::new(),
            integrations: String::new(),
            previous_attempts: String::new(),
            consent: false,
            active_field_index: 0,
            option_cursor: 0,
        }
    }

    /// Restore all values to their defaults and focus the first field
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The currently focused field
    pub fn active_field(&self) -> FieldId {
        FIELD_ORDER[self.active_field_index]
    }

    /// Move focus to the next field (wraps around)
    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % FIELD_ORDER.len();
        self.option_cursor = 0;
    }

    /// Move focus to the previous field (wraps around)
    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = FIELD_ORDER.len() - 1;
        } else {
            self.active_field_index -= 1;
        }
        self.option_cursor = 0;
    }

    /// Scalar value of a text, textarea or select field
    pub fn text_value(&self, id: FieldId) -> &str {
        match id {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::OrgSize => &self.org_size,
            FieldId::Sector => &self.sector,
            FieldId::SectorOther => &self.sector_other,
            FieldId::MemberCount => &self.member_count,
            FieldId::Timeline => &self.timeline,
            FieldId::AcceptsBeta => &self.accepts_beta,
            FieldId::PriceRange => &self.price_range,
            FieldId::GoalsOther => &self.goals_other,
            FieldId::PainPointsOther => &self.pain_points_other,
            FieldId::PainPointsNotes => &self.pain_points_notes,
            FieldId::Integrations => &self.integrations,
            FieldId::PreviousAttempts => &self.previous_attempts,
            FieldId::Goals | FieldId::PainPoints | FieldId::Modules => "",
            FieldId::Consent | FieldId::Submit => "",
        }
    }

    /// Selected labels of a multi-select field
    pub fn selections(&self, id: FieldId) -> Option<&[String]> {
        match id {
            FieldId::Goals => Some(&self.goals),
            FieldId::PainPoints => Some(&self.pain_points),
            FieldId::Modules => Some(&self.modules),
            _ => None,
        }
    }

    fn text_field_mut(&mut self, id: FieldId) -> Option<&mut String> {
        match id {
            FieldId::Name => Some(&mut self.name),
            FieldId::Email => Some(&mut self.email),
            FieldId::SectorOther => Some(&mut self.sector_other),
            FieldId::MemberCount => Some(&mut self.member_count),
            FieldId::GoalsOther => Some(&mut self.goals_other),
            FieldId::PainPointsOther => Some(&mut self.pain_points_other),
            FieldId::PainPointsNotes => Some(&mut self.pain_points_notes),
            FieldId::Integrations => Some(&mut self.integrations),
            FieldId::PreviousAttempts => Some(&mut self.previous_attempts),
            _ => None,
        }
    }

    fn selections_mut(&mut self, id: FieldId) -> Option<&mut Vec<String>> {
        match id {
            FieldId::Goals => Some(&mut self.goals),
            FieldId::PainPoints => Some(&mut self.pain_points),
            FieldId::Modules => Some(&mut self.modules),
            _ => None,
        }
    }

    /// Append a character to the active field (no-op for non-text fields)
    pub fn push_char(&mut self, c: char) {
        let id = self.active_field();
        if let Some(value) = self.text_field_mut(id) {
            value.push(c);
        }
    }

    /// Append a newline to the active field (textarea only)
    pub fn push_newline(&mut self) {
        let id = self.active_field();
        if id.kind() == FieldKind::TextArea {
            if let Some(value) = self.text_field_mut(id) {
                value.push('\n');
            }
        }
    }

    /// Remove the last character of the active field (no-op for non-text fields)
    pub fn backspace(&mut self) {
        let id = self.active_field();
        if let Some(value) = self.text_field_mut(id) {
            value.pop();
        }
    }

    /// Select the next option of the active select field (wraps around)
    pub fn cycle_next(&mut self) {
        self.cycle(1);
    }

    /// Select the previous option of the active select field (wraps around)
    pub fn cycle_prev(&mut self) {
        self.cycle(-1);
    }

    fn cycle(&mut self, step: isize) {
        let id = self.active_field();
        if id.kind() != FieldKind::Select {
            return;
        }
        let Some(opts) = id.options() else { return };
        let current = self.text_value(id);
        let next = match opts.iter().position(|o| *o == current) {
            Some(pos) => {
                let len = opts.len() as isize;
                ((pos as isize + step).rem_euclid(len)) as usize
            }
            // Nothing selected yet: start at either end
            None if step > 0 => 0,
            None => opts.len() - 1,
        };
        let value = opts[next].to_string();
        match id {
            FieldId::OrgSize => self.org_size = value,
            FieldId::Sector => self.sector = value,
            FieldId::Timeline => self.timeline = value,
            FieldId::AcceptsBeta => self.accepts_beta = value,
            FieldId::PriceRange => self.price_range = value,
            _ => {}
        }
    }

    /// Move the option cursor down within the active multi-select
    pub fn option_down(&mut self) {
        if let Some(opts) = self.active_field().options() {
            if self.active_field().kind() == FieldKind::MultiSelect
                && self.option_cursor + 1 < opts.len()
            {
                self.option_cursor += 1;
            }
        }
    }

    /// Move the option cursor up within the active multi-select
    pub fn option_up(&mut self) {
        if self.active_field().kind() == FieldKind::MultiSelect {
            self.option_cursor = self.option_cursor.saturating_sub(1);
        }
    }

    /// Toggle the highlighted option (multi-select) or the consent checkbox
    pub fn toggle_active_option(&mut self) {
        let id = self.active_field();
        match id.kind() {
            FieldKind::MultiSelect => {
                let Some(opts) = id.options() else { return };
                let Some(label) = opts.get(self.option_cursor) else {
                    return;
                };
                let label = *label;
                if let Some(selection) = self.selections_mut(id) {
                    toggle_selection(selection, label);
                }
            }
            FieldKind::Checkbox => {
                self.consent = !self.consent;
            }
            _ => {}
        }
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod defaults {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_empty_values() {
            let form = SignupForm::new();
            assert_eq!(form.name, "");
            assert_eq!(form.email, "");
            assert_eq!(form.org_size, "");
            assert_eq!(form.sector, "");
            assert_eq!(form.timeline, "");
            assert_eq!(form.price_range, "");
            assert!(form.goals.is_empty());
            assert!(form.pain_points.is_empty());
            assert!(form.modules.is_empty());
            assert_eq!(form.previous_attempts, "");
        }

        #[test]
        fn test_new_presets_beta_and_consent() {
            let form = SignupForm::new();
            assert_eq!(form.accepts_beta, "Sim");
            assert!(!form.consent);
        }

        #[test]
        fn test_new_focuses_first_field() {
            let form = SignupForm::new();
            assert_eq!(form.active_field(), FieldId::Name);
            assert_eq!(form.option_cursor, 0);
        }

        #[test]
        fn test_reset_restores_defaults() {
            let mut form = SignupForm::new();
            form.name = "Maria".to_string();
            form.goals = vec!["Relatórios automáticos".to_string()];
            form.consent = true;
            form.active_field_index = 5;

            form.reset();

            assert_eq!(form.name, "");
            assert!(form.goals.is_empty());
            assert!(!form.consent);
            assert_eq!(form.accepts_beta, "Sim");
            assert_eq!(form.active_field_index, 0);
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_field_advances_in_order() {
            let mut form = SignupForm::new();
            form.next_field();
            assert_eq!(form.active_field(), FieldId::Email);
            form.next_field();
            assert_eq!(form.active_field(), FieldId::OrgSize);
        }

        #[test]
        fn test_next_field_wraps_from_submit_to_name() {
            let mut form = SignupForm::new();
            form.active_field_index = FIELD_ORDER.len() - 1;
            assert_eq!(form.active_field(), FieldId::Submit);
            form.next_field();
            assert_eq!(form.active_field(), FieldId::Name);
        }

        #[test]
        fn test_prev_field_wraps_from_name_to_submit() {
            let mut form = SignupForm::new();
            form.prev_field();
            assert_eq!(form.active_field(), FieldId::Submit);
        }

        #[test]
        fn test_field_change_resets_option_cursor() {
            let mut form = SignupForm::new();
            form.active_field_index = 9; // Goals
            form.option_down();
            assert_eq!(form.option_cursor, 1);
            form.next_field();
            assert_eq!(form.option_cursor, 0);
        }

        #[test]
        fn test_field_order_covers_all_nineteen_fields() {
            assert_eq!(FIELD_ORDER.len(), 19);
            assert_eq!(FIELD_ORDER[0], FieldId::Name);
            assert_eq!(FIELD_ORDER[18], FieldId::Submit);
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_push_char_appends_to_text_field() {
            let mut form = SignupForm::new();
            form.push_char('A');
            form.push_char('n');
            form.push_char('a');
            assert_eq!(form.name, "Ana");
        }

        #[test]
        fn test_push_char_ignored_on_select_field() {
            let mut form = SignupForm::new();
            form.active_field_index = 2; // OrgSize
            form.push_char('x');
            assert_eq!(form.org_size, "");
        }

        #[test]
        fn test_backspace_removes_last_char() {
            let mut form = SignupForm::new();
            form.name = "Ana".to_string();
            form.backspace();
            assert_eq!(form.name, "An");
        }

        #[test]
        fn test_backspace_on_empty_field_is_noop() {
            let mut form = SignupForm::new();
            form.backspace();
            assert_eq!(form.name, "");
        }

        #[test]
        fn test_push_newline_only_in_textarea() {
            let mut form = SignupForm::new();
            form.active_field_index = 16; // PreviousAttempts
            form.push_newline();
            assert_eq!(form.previous_attempts, "\n");

            form.active_field_index = 0; // Name
            form.push_newline();
            assert_eq!(form.name, "");
        }
    }

    mod select_cycling {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_cycle_next_from_empty_picks_first_option() {
            let mut form = SignupForm::new();
            form.active_field_index = 2; // OrgSize
            form.cycle_next();
            assert_eq!(form.org_size, "Pequena (até 300)");
        }

        #[test]
        fn test_cycle_prev_from_empty_picks_last_option() {
            let mut form = SignupForm::new();
            form.active_field_index = 3; // Sector
            form.cycle_prev();
            assert_eq!(form.sector, "Outro");
        }

        #[test]
        fn test_cycle_wraps_around() {
            let mut form = SignupForm::new();
            form.active_field_index = 6; // Timeline
            form.timeline = "> 6 meses".to_string();
            form.cycle_next();
            assert_eq!(form.timeline, "1–3 meses");
        }

        #[test]
        fn test_cycle_beta_choice_toggles_between_both() {
            let mut form = SignupForm::new();
            form.active_field_index = 7; // AcceptsBeta
            assert_eq!(form.accepts_beta, "Sim");
            form.cycle_next();
            assert_eq!(form.accepts_beta, "Não");
            form.cycle_next();
            assert_eq!(form.accepts_beta, "Sim");
        }

        #[test]
        fn test_cycle_ignored_on_text_field() {
            let mut form = SignupForm::new();
            form.cycle_next();
            assert_eq!(form.name, "");
        }
    }

    mod multi_select {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_toggle_selection_adds_absent_label() {
            let mut sel = vec![];
            toggle_selection(&mut sel, "Relatórios automáticos");
            assert_eq!(sel, vec!["Relatórios automáticos".to_string()]);
        }

        #[test]
        fn test_toggle_selection_removes_present_label() {
            let mut sel = vec![
                "Operação mais estruturada".to_string(),
                "Relatórios automáticos".to_string(),
            ];
            toggle_selection(&mut sel, "Operação mais estruturada");
            assert_eq!(sel, vec!["Relatórios automáticos".to_string()]);
        }

        #[test]
        fn test_double_toggle_restores_original_order() {
            let original = vec![
                "Operação mais estruturada".to_string(),
                "Processos mais rápidos".to_string(),
                "Relatórios automáticos".to_string(),
            ];
            let mut sel = original.clone();
            toggle_selection(&mut sel, "Processos mais rápidos");
            assert_eq!(
                sel,
                vec![
                    "Operação mais estruturada".to_string(),
                    "Relatórios automáticos".to_string(),
                ]
            );
            toggle_selection(&mut sel, "Processos mais rápidos");
            // Re-added at the end, not at its old position
            assert_eq!(
                sel,
                vec![
                    "Operação mais estruturada".to_string(),
                    "Relatórios automáticos".to_string(),
                    "Processos mais rápidos".to_string(),
                ]
            );
            assert_eq!(sel.len(), original.len());
        }

        #[test]
        fn test_selection_preserves_insertion_order() {
            let mut form = SignupForm::new();
            form.active_field_index = 9; // Goals
            form.option_down(); // cursor on "Processos mais rápidos"
            form.toggle_active_option();
            form.option_up(); // cursor on "Operação mais estruturada"
            form.toggle_active_option();
            assert_eq!(
                form.goals,
                vec![
                    "Processos mais rápidos".to_string(),
                    "Operação mais estruturada".to_string(),
                ]
            );
        }

        #[test]
        fn test_option_cursor_clamps_at_bounds() {
            let mut form = SignupForm::new();
            form.active_field_index = 9; // Goals (5 options)
            form.option_up();
            assert_eq!(form.option_cursor, 0);
            for _ in 0..10 {
                form.option_down();
            }
            assert_eq!(form.option_cursor, 4);
        }

        #[test]
        fn test_toggle_on_consent_flips_flag() {
            let mut form = SignupForm::new();
            form.active_field_index = 17; // Consent
            form.toggle_active_option();
            assert!(form.consent);
            form.toggle_active_option();
            assert!(!form.consent);
        }

        #[test]
        fn test_toggle_ignored_on_text_field() {
            let mut form = SignupForm::new();
            form.toggle_active_option();
            assert!(form.goals.is_empty());
            assert!(!form.consent);
        }
    }

    mod field_metadata {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_kinds_match_widget_expectations() {
            assert_eq!(FieldId::Name.kind(), FieldKind::Text);
            assert_eq!(FieldId::PreviousAttempts.kind(), FieldKind::TextArea);
            assert_eq!(FieldId::OrgSize.kind(), FieldKind::Select);
            assert_eq!(FieldId::Goals.kind(), FieldKind::MultiSelect);
            assert_eq!(FieldId::Consent.kind(), FieldKind::Checkbox);
            assert_eq!(FieldId::Submit.kind(), FieldKind::Button);
        }

        #[test]
        fn test_select_fields_have_options() {
            for id in FIELD_ORDER {
                match id.kind() {
                    FieldKind::Select | FieldKind::MultiSelect => {
                        assert!(id.options().is_some(), "{id:?} should carry a vocabulary");
                        assert!(!id.options().unwrap().is_empty());
                    }
                    _ => assert!(id.options().is_none(), "{id:?} should not carry options"),
                }
            }
        }

        #[test]
        fn test_beta_vocabulary_is_exactly_sim_nao() {
            assert_eq!(FieldId::AcceptsBeta.options(), Some(["Sim", "Não"].as_slice()));
        }
    }
}
