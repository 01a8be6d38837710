//! Fixed option vocabularies for the sign-up form
//!
//! Labels are the exact strings the spreadsheet columns expect, so they are
//! kept in Portuguese and never edited as free text.

/// Cooperative size (porte)
pub const ORG_SIZES: &[&str] = &["Pequena (até 300)", "Média (300–1000)", "Grande (1000+)"];

/// Main sector of activity (setor)
pub const SECTORS: &[&str] = &[
    "Grãos",
    "Leite",
    "Frutas/Hortaliças",
    "Pecuária",
    "Mista",
    "Outro",
];

/// Expected rollout timeline (tempoImplantacao)
pub const TIMELINES: &[&str] = &["1–3 meses", "3–6 meses", "> 6 meses"];

/// Acceptable price range per month (faixaPreco)
pub const PRICE_RANGES: &[&str] = &[
    "Até R$ 49/mês",
    "R$ 50–99/mês",
    "R$ 100–199/mês",
    "R$ 200–399/mês",
    "R$ 400+/mês",
];

/// Goals for adopting the platform (objetivos)
pub const GOALS: &[&str] = &[
    "Operação mais estruturada",
    "Processos mais rápidos",
    "Relatórios automáticos",
    "Transparência para cooperados",
    "Integrações (ERP/contábil)",
];

/// Current pain points (problemas)
pub const PAIN_POINTS: &[&str] = &[
    "Retrabalho e planilhas paralelas",
    "Erros fiscais / notas rejeitadas",
    "Atrasos em recebimento/entrega",
    "Falta de visibilidade financeira",
    "Dificuldade em assembleias/votações",
    "Treinamento demorado da equipe",
];

/// Modules of interest (modulos)
pub const MODULES: &[&str] = &[
    "Cooperados / CRM",
    "Operações (agend./entregas)",
    "Fiscal & Financeiro",
    "Governança / Assembleias",
    "Assistência Técnica",
    "Logística / Romaneios",
    "App Mobile",
    "Integrações ERP/Contábil",
];

/// Beta program participation (aceitaBeta)
pub const BETA_CHOICES: &[&str] = &["Sim", "Não"];
