//! Locale-aware fake identity data using curated name and place lists.
//!
//! All generation is deterministic (same RNG seed = same names).
//! A locale may lack a capability (en_US has no region-code helper);
//! callers see that as `None` and apply their own fallback.

use crate::{
    error::{GenError, GenResult},
    rng::StreamRng,
};
use chrono::NaiveDate;
use std::fmt;

/// Source of identity fields for generated customers.
pub trait FakeDataProvider {
    fn full_name(&self, rng: &mut StreamRng) -> String;

    fn city(&self, rng: &mut StreamRng) -> &'static str;

    /// Two-letter region code, or `None` if the locale has no region helper.
    fn state_code(&self, rng: &mut StreamRng) -> Option<&'static str>;

    /// Uniform date in [start, end], both inclusive.
    fn date_between(&self, rng: &mut StreamRng, start: NaiveDate, end: NaiveDate) -> NaiveDate {
        let span = (end - start).num_days().max(0) as u64;
        let offset = rng.next_u64_below(span + 1);
        start + chrono::Duration::days(offset as i64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    PtBr,
    EnUs,
}

impl Locale {
    /// Parse a locale tag such as `pt_BR` or `en-us`.
    pub fn from_tag(tag: &str) -> GenResult<Self> {
        match tag.trim().replace('-', "_").to_ascii_lowercase().as_str() {
            "pt_br" => Ok(Self::PtBr),
            "en_us" => Ok(Self::EnUs),
            other => Err(GenError::config(format!("unsupported locale '{other}'"))),
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::PtBr => "pt_BR",
            Self::EnUs => "en_US",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Curated-list provider for a single locale.
pub struct LocaleProvider {
    locale: Locale,
}

impl LocaleProvider {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    fn first_names(&self) -> &'static [&'static str] {
        match self.locale {
            Locale::PtBr => PT_BR_FIRST_NAMES,
            Locale::EnUs => EN_US_FIRST_NAMES,
        }
    }

    fn last_names(&self) -> &'static [&'static str] {
        match self.locale {
            Locale::PtBr => PT_BR_LAST_NAMES,
            Locale::EnUs => EN_US_LAST_NAMES,
        }
    }
}

impl FakeDataProvider for LocaleProvider {
    fn full_name(&self, rng: &mut StreamRng) -> String {
        let first = rng.pick(self.first_names());
        let last = rng.pick(self.last_names());
        format!("{first} {last}")
    }

    fn city(&self, rng: &mut StreamRng) -> &'static str {
        match self.locale {
            Locale::PtBr => *rng.pick(PT_BR_CITIES),
            Locale::EnUs => *rng.pick(EN_US_CITIES),
        }
    }

    fn state_code(&self, rng: &mut StreamRng) -> Option<&'static str> {
        match self.locale {
            Locale::PtBr => Some(*rng.pick(PT_BR_STATES)),
            Locale::EnUs => None,
        }
    }
}

const PT_BR_FIRST_NAMES: &[&str] = &[
    "Ana", "Maria", "Juliana", "Fernanda", "Camila", "Beatriz", "Larissa", "Mariana",
    "Gabriela", "Amanda", "Letícia", "Bruna", "Patrícia", "Aline", "Vitória", "Isabela",
    "Luana", "Rafaela", "Yasmin", "Sophia", "Helena", "Alice", "Lívia", "Manuela",
    "João", "José", "Pedro", "Lucas", "Gabriel", "Matheus", "Rafael", "Gustavo",
    "Felipe", "Bruno", "Thiago", "Leonardo", "Rodrigo", "Eduardo", "Vinícius", "Diego",
    "Daniel", "Marcelo", "André", "Carlos", "Enzo", "Miguel", "Arthur", "Heitor",
];

const PT_BR_LAST_NAMES: &[&str] = &[
    "Silva", "Santos", "Oliveira", "Souza", "Rodrigues", "Ferreira", "Alves", "Pereira",
    "Lima", "Gomes", "Costa", "Ribeiro", "Martins", "Carvalho", "Almeida", "Lopes",
    "Soares", "Fernandes", "Vieira", "Barbosa", "Rocha", "Dias", "Nascimento", "Andrade",
    "Moreira", "Nunes", "Marques", "Machado", "Mendes", "Freitas", "Cardoso", "Ramos",
    "Gonçalves", "Santana", "Teixeira", "Araújo", "Pinto", "Correia", "Cavalcanti", "Monteiro",
];

const PT_BR_CITIES: &[&str] = &[
    "São Paulo", "Rio de Janeiro", "Belo Horizonte", "Salvador", "Fortaleza", "Brasília",
    "Curitiba", "Manaus", "Recife", "Porto Alegre", "Belém", "Goiânia", "Guarulhos",
    "Campinas", "São Luís", "Maceió", "Natal", "Teresina", "Campo Grande", "João Pessoa",
    "Florianópolis", "Cuiabá", "Aracaju", "Londrina", "Joinville", "Uberlândia",
    "Ribeirão Preto", "Sorocaba", "Niterói", "Vitória", "Santos", "Juiz de Fora",
];

const PT_BR_STATES: &[&str] = &[
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA",
    "PB", "PR", "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

const EN_US_FIRST_NAMES: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph",
    "Thomas", "Charles", "Daniel", "Matthew", "Anthony", "Mark", "Steven", "Paul",
    "Mary", "Patricia", "Jennifer", "Linda", "Barbara", "Elizabeth", "Susan", "Jessica",
    "Sarah", "Karen", "Lisa", "Nancy", "Emily", "Michelle", "Laura", "Amanda",
];

const EN_US_LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Thompson", "White", "Harris", "Clark",
];

const EN_US_CITIES: &[&str] = &[
    "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia",
    "San Antonio", "San Diego", "Dallas", "Austin", "Jacksonville", "Columbus",
    "Charlotte", "Indianapolis", "Seattle", "Denver", "Boston", "Nashville",
];
