//! Thematic indicator sets, one per dashboard page.

use serde::{Deserialize, Serialize};

/// Canonical indicator names, exactly as the World Bank export spells them.
pub mod names {
    pub const GDP_PER_CAPITA: &str = "GDP per capita (current US$)";
    pub const CAPITAL_FORMATION: &str = "Gross capital formation (% of GDP)";
    pub const INFLATION: &str = "Inflation, consumer prices (annual %)";
    pub const LIFE_EXPECTANCY: &str = "Life expectancy at birth (years)";
    pub const HEALTH_EXPENDITURE: &str = "Current health expenditure (% of GDP)";
    pub const UNDER5_MORTALITY: &str = "Mortality rate, under-5 (per 1,000 live births)";
    pub const EDUCATION_EXPENDITURE: &str = "Government expenditure on education (% of GDP)";
    pub const SECONDARY_ENROLLMENT: &str = "School enrollment, secondary (% gross)";
    pub const HUMAN_CAPITAL: &str = "Human capital index (0–1 scale)";
    pub const CO2_PER_CAPITA: &str = "CO₂ emissions per capita (t/person, AR5)";
    pub const RENEWABLES: &str = "Renewable energy consumption (% of total final energy)";
    pub const PM25: &str = "PM2.5 air pollution (µg/m³)";
    pub const GINI: &str = "Gini index";
    pub const POVERTY: &str = "Poverty headcount ratio at $3.65/day (2021 PPP)";
    pub const URBAN_POPULATION: &str = "Urban population (% of total population)";
    pub const ACCESS_TO_WATER: &str = "Access to basic drinking water (% of population)";
}

pub use names::GDP_PER_CAPITA;

/// A World Bank series: its code and its canonical name in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub code: &'static str,
    pub name: &'static str,
}

const fn indicator(code: &'static str, name: &'static str) -> Indicator {
    Indicator { code, name }
}

const GDP: Indicator = indicator("NY.GDP.PCAP.CD", GDP_PER_CAPITA);

const ECONOMY: &[Indicator] = &[
    GDP,
    indicator("NE.GDI.TOTL.ZS", names::CAPITAL_FORMATION),
    indicator("FP.CPI.TOTL.ZG", names::INFLATION),
];

const HEALTH: &[Indicator] = &[
    GDP,
    indicator("SP.DYN.LE00.IN", names::LIFE_EXPECTANCY),
    indicator("SH.XPD.CHEX.GD.ZS", names::HEALTH_EXPENDITURE),
    indicator("SH.DYN.MORT", names::UNDER5_MORTALITY),
];

const EDUCATION: &[Indicator] = &[
    GDP,
    indicator("SE.XPD.TOTL.GD.ZS", names::EDUCATION_EXPENDITURE),
    indicator("SE.SEC.ENRR", names::SECONDARY_ENROLLMENT),
    indicator("HD.HCI.OVRL", names::HUMAN_CAPITAL),
];

const ENVIRONMENT: &[Indicator] = &[
    GDP,
    indicator("EN.GHG.CO2.PC.CE.AR5", names::CO2_PER_CAPITA),
    indicator("EG.FEC.RNEW.ZS", names::RENEWABLES),
    indicator("EN.ATM.PM25.MC.M3", names::PM25),
];

const INEQUALITY: &[Indicator] = &[
    GDP,
    indicator("SI.POV.GINI", names::GINI),
    indicator("SI.POV.DDAY", names::POVERTY),
];

const SOCIETY: &[Indicator] = &[
    GDP,
    indicator("SP.URB.TOTL.IN.ZS", names::URBAN_POPULATION),
    indicator("SH.H2O.BASW.ZS", names::ACCESS_TO_WATER),
];

/// Dashboard theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Economy,
    Health,
    Education,
    Environment,
    Inequality,
    Society,
}

impl Theme {
    /// All themes, in page order.
    pub fn all() -> &'static [Theme] {
        &[
            Theme::Economy,
            Theme::Health,
            Theme::Education,
            Theme::Environment,
            Theme::Inequality,
            Theme::Society,
        ]
    }

    /// French page title.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Economy => "Économie",
            Theme::Health => "Santé",
            Theme::Education => "Éducation",
            Theme::Environment => "Environnement",
            Theme::Inequality => "Inégalités",
            Theme::Society => "Société",
        }
    }

    /// The series analyzed on this theme's page, GDP per capita first.
    pub fn indicators(&self) -> &'static [Indicator] {
        match self {
            Theme::Economy => ECONOMY,
            Theme::Health => HEALTH,
            Theme::Education => EDUCATION,
            Theme::Environment => ENVIRONMENT,
            Theme::Inequality => INEQUALITY,
            Theme::Society => SOCIETY,
        }
    }

    pub fn indicator_names(&self) -> Vec<&'static str> {
        self.indicators().iter().map(|i| i.name).collect()
    }

    /// Look up a series by World Bank code across all themes.
    pub fn find_code(code: &str) -> Option<Indicator> {
        Theme::all()
            .iter()
            .flat_map(|t| t.indicators().iter())
            .find(|i| i.code.eq_ignore_ascii_case(code))
            .copied()
    }

    /// A series of this theme, by World Bank code (any case) or exact name.
    pub fn indicator(&self, key: &str) -> Option<Indicator> {
        Theme::find_code(key)
            .or_else(|| self.indicators().iter().find(|i| i.name == key).copied())
            .filter(|i| self.indicators().contains(i))
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "economy" | "economie" | "économie" | "eco" => Ok(Theme::Economy),
            "health" | "sante" | "santé" => Ok(Theme::Health),
            "education" | "éducation" => Ok(Theme::Education),
            "environment" | "environnement" | "env" => Ok(Theme::Environment),
            "inequality" | "inegalites" | "inégalités" => Ok(Theme::Inequality),
            "society" | "societe" | "société" => Ok(Theme::Society),
            _ => Err(format!(
                "Unknown theme: {}. Use: economy, health, education, environment, inequality, or society.",
                s
            )),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Economy => write!(f, "economy"),
            Theme::Health => write!(f, "health"),
            Theme::Education => write!(f, "education"),
            Theme::Environment => write!(f, "environment"),
            Theme::Inequality => write!(f, "inequality"),
            Theme::Society => write!(f, "society"),
        }
    }
}
