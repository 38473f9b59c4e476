/// States of the Northeast region, where diet and nutrition items are pertinent.
const NORTHEAST_UFS: [&str; 9] = ["AL", "BA", "CE", "MA", "PB", "PE", "PI", "RN", "SE"];

/// Diet and nutrition roots, pertinent only inside the regional rule's states.
const NORTHEAST_KEYWORDS: [&str; 8] = [
    "DIETA", "ENTERAL", "SUPLEMENT", "FORMULA", "CALORIC", "PROTEIC", "LEITE", "NUTRI",
];

/// Terms that disqualify an item outright. Roots ("HIDRAULIC") cover gender
/// and number variations.
const DEFAULT_BLACKLIST: &[&str] = &[
    // construction and building maintenance
    "CONSTRUCAO", "OBRA", "PAVIMENTACAO", "CIMENTO", "ASFALTO", "TIJOLO", "PINTURA", "TINTA",
    "MARCENARIA", "MADEIRA", "FERRAGEM", "FERRAMENTA", "HIDRAULIC", "ELETRIC",
    "MANUTENCAO PREDIAL", "ALVENARIA", "VIDRO", "ILUMINACAO", "LAMPADA", "AR CONDICIONADO",
    "CLIMATIZACAO",
    // vehicles and transport
    "AUTOMOTIVO", "VEICULO", "PNEU", "RODOVIARIO", "MECANICA", "PECA", "RODA", "MOTOR",
    "COMBUSTIVEL", "OLEO LUBRIFICANTE", "OFICINA", "PASSAGEM", "LOCACAO DE VEICULO",
    "TRANSPORTE",
    // food service
    "REFEICAO", "LANCHE", "ALIMENTICIO", "MERENDA", "COZINHA", "COPA", "BUFFET", "COFFEE",
    "ACUCAR", "CAFE", "CESTAS BASICAS", "HORTIFRUTI", "PERECIVEIS", "AGUA MINERAL",
    // office, school and IT
    "ESCOLAR", "DIDATICO", "PEDAGOGICO", "EXPEDIENTE", "PAPELARIA", "LIVRO", "APOSTILA",
    "BRINQUEDO", "JOGOS", "COMPUTADOR", "IMPRESSORA", "TONER", "CARTUCHO", "INFORMATICA",
    "NOTEBOOK", "TECLADO", "MOUSE", "ESTABILIZADOR", "NOBREAK", "SOFTWARE", "SAAS",
    // furniture and appliances
    "MOBILIARIO", "ESTANTE", "CADEIRA", "MESA", "ARMARIO", "ELETRODOMESTICO",
    "ELETROPORTATIL", "GELADEIRA", "FOGAO", "VENTILADOR",
    // building cleaning
    "LIMPEZA PREDIAL", "HIGIENIZACAO", "VASSOURA", "RODO", "LIXEIRA", "SACO DE LIXO",
    "DETERGENTE", "SABAO", "COPO DESCARTAVEL",
    // services and staffing
    "TERCEIRIZACAO", "LOCACAO DE MAO DE OBRA", "ASSISTENCIA MEDICA", "PLANO DE SAUDE",
    "SEGURO", "VIGILANCIA", "PORTARIA", "RECEPCIONISTA", "CONSULTORIA", "TREINAMENTO",
    "EVENTO", "SHOW", "FESTA", "PALCO", "HOSPEDAGEM", "PUBLICIDADE", "MARKETING", "GRAFICA",
    "BANNER",
    // everything else outside the health supply catalogue
    "VETERINARI", "ANIMAL", "BANHO E TOSA", "RACAO", "AGRO", "AGRICOLA", "SEMENTE", "MUDA",
    "ADUBO", "JARDINAGEM", "BELICO", "MILITAR", "ARMAMENTO", "MUNICAO", "FARDA", "UNIFORME",
    "TECIDO", "CONFECCAO", "VESTUARIO", "CAMA MESA E BANHO", "ESPORTE", "MATERIAL ESPORTIVO",
    "BOLA", "TROFEU", "MEDALHA", "MUSICAL", "INSTRUMENTO", "AUDIOVISUAL", "FOTOGRAFI",
    "BRINDE",
];

/// RelevanceRules - Term lists deciding whether an item description is
/// pertinent to a health-supply catalogue
///
/// The defaults reproduce the screening used for the published dataset:
/// a blacklist, a regional diet/nutrition rule and no catalogue keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelevanceRules {
    pub blacklist: Vec<String>,
    pub regional_ufs: Vec<String>,
    pub regional_keywords: Vec<String>,
    pub keywords: Vec<String>,
}

impl Default for RelevanceRules {
    fn default() -> Self {
        Self {
            blacklist: to_owned(DEFAULT_BLACKLIST),
            regional_ufs: to_owned(&NORTHEAST_UFS),
            regional_keywords: to_owned(&NORTHEAST_KEYWORDS),
            keywords: Vec::new(),
        }
    }
}

impl RelevanceRules {
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    /// Replaces the default blacklist.
    pub fn with_blacklist(mut self, blacklist: Vec<String>) -> Self {
        self.blacklist = blacklist;
        self
    }

    /// Appends terms to the active blacklist.
    pub fn with_extra_blacklist(mut self, extra: Vec<String>) -> Self {
        self.blacklist.extend(extra);
        self
    }

    pub fn with_regional_rule(mut self, ufs: Vec<String>, keywords: Vec<String>) -> Self {
        self.regional_ufs = ufs;
        self.regional_keywords = keywords;
        self
    }

    /// Folds text for matching: uppercase, Portuguese accents stripped,
    /// runs of whitespace collapsed to one space.
    pub fn normalize(text: &str) -> String {
        let folded: String = text.to_uppercase().chars().map(fold_accent).collect();
        folded.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

fn fold_accent(c: char) -> char {
    match c {
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'A',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'Ç' => 'C',
        'Ñ' => 'N',
        other => other,
    }
}

fn to_owned(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}
