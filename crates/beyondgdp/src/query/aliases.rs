//! Phrase tables mapping free-text French and English wording to canonical
//! dataset names.
//!
//! Order matters: every lookup walks these tables front to back and the
//! first hit wins.

use crate::catalog::names::{
    ACCESS_TO_WATER, CAPITAL_FORMATION, CO2_PER_CAPITA, EDUCATION_EXPENDITURE, GDP_PER_CAPITA, GINI,
    HEALTH_EXPENDITURE, HUMAN_CAPITAL, INFLATION, LIFE_EXPECTANCY, PM25, POVERTY, RENEWABLES,
    SECONDARY_ENROLLMENT, UNDER5_MORTALITY, URBAN_POPULATION,
};

/// Indicator phrase → canonical indicator name.
pub static INDICATOR_ALIASES: &[(&str, &str)] = &[
    // Economy
    ("pib", GDP_PER_CAPITA),
    ("pib par habitant", GDP_PER_CAPITA),
    ("pib/habitant", GDP_PER_CAPITA),
    ("gdp", GDP_PER_CAPITA),
    ("gdp per capita", GDP_PER_CAPITA),
    ("revenu par habitant", GDP_PER_CAPITA),
    ("richesse par habitant", GDP_PER_CAPITA),
    ("productivité moyenne", GDP_PER_CAPITA),

    ("formation brute de capital", CAPITAL_FORMATION),
    ("investissement", CAPITAL_FORMATION),
    ("investissements", CAPITAL_FORMATION),
    ("capital formation", CAPITAL_FORMATION),
    ("gfcf", CAPITAL_FORMATION),
    ("formation capital", CAPITAL_FORMATION),
    ("brut capital", CAPITAL_FORMATION),

    ("inflation", INFLATION),
    ("hausse des prix", INFLATION),
    ("prix à la consommation", INFLATION),
    ("variation des prix", INFLATION),

    // Health
    ("espérance de vie", LIFE_EXPECTANCY),
    ("esperance de vie", LIFE_EXPECTANCY),
    ("life expectancy", LIFE_EXPECTANCY),
    ("vie", LIFE_EXPECTANCY),
    ("longevité", LIFE_EXPECTANCY),

    ("dépenses de santé", HEALTH_EXPENDITURE),
    ("depenses de sante", HEALTH_EXPENDITURE),
    ("santé (% pib)", HEALTH_EXPENDITURE),
    ("health expenditure", HEALTH_EXPENDITURE),
    ("dépenses médicales", HEALTH_EXPENDITURE),

    ("mortalité des enfants", UNDER5_MORTALITY),
    ("mortalité moins de 5 ans", UNDER5_MORTALITY),
    ("taux mortalité enfant", UNDER5_MORTALITY),
    ("under 5 mortality", UNDER5_MORTALITY),
    ("u5mr", UNDER5_MORTALITY),

    // Education
    ("dépenses éducation", EDUCATION_EXPENDITURE),
    ("depenses education", EDUCATION_EXPENDITURE),
    ("éducation (% pib)", EDUCATION_EXPENDITURE),
    ("education spending", EDUCATION_EXPENDITURE),

    ("scolarisation secondaire", SECONDARY_ENROLLMENT),
    ("taux scolarisation secondaire", SECONDARY_ENROLLMENT),
    ("école secondaire", SECONDARY_ENROLLMENT),
    ("lycée", SECONDARY_ENROLLMENT),
    ("secondary enrollment", SECONDARY_ENROLLMENT),

    ("capital humain", HUMAN_CAPITAL),
    ("hci", HUMAN_CAPITAL),
    ("indice hci", HUMAN_CAPITAL),
    ("human capital", HUMAN_CAPITAL),

    // Environment
    ("co2", CO2_PER_CAPITA),
    ("co₂", CO2_PER_CAPITA),
    ("émissions co2", CO2_PER_CAPITA),
    ("émissions carbone", CO2_PER_CAPITA),
    ("pollution carbone", CO2_PER_CAPITA),
    ("carbon emissions", CO2_PER_CAPITA),

    ("énergies renouvelables", RENEWABLES),
    ("energies renouvelables", RENEWABLES),
    ("renouvelables", RENEWABLES),
    ("renewables", RENEWABLES),
    ("renewable consumption", RENEWABLES),

    ("pm2.5", PM25),
    ("pollution pm25", PM25),
    ("pollution particules", PM25),
    ("particules fines", PM25),
    ("air quality", PM25),

    // Inequality
    ("gini", GINI),
    ("indice de gini", GINI),
    ("inégalités", GINI),
    ("inegalites", GINI),

    ("pauvreté", POVERTY),
    ("pauvrete", POVERTY),
    ("pauvreté extrême", POVERTY),
    ("pauvreté monétaire", POVERTY),

    // Society
    ("population urbaine", URBAN_POPULATION),
    ("urbain", URBAN_POPULATION),
    ("urbanisation", URBAN_POPULATION),
    ("urban population", URBAN_POPULATION),

    ("eau potable", ACCESS_TO_WATER),
    ("eau", ACCESS_TO_WATER),
    ("eau propre", ACCESS_TO_WATER),
    ("drinking water", ACCESS_TO_WATER),
];

/// Country phrase (lowercase) → canonical country name.
pub static COUNTRY_ALIASES: &[(&str, &str)] = &[
    // Europe
    ("france", "France"),
    ("allemagne", "Germany"),
    ("royaume-uni", "United Kingdom"),
    ("royaume uni", "United Kingdom"),
    ("angleterre", "United Kingdom"),
    ("etats-unis", "United States"),
    ("états-unis", "United States"),
    ("usa", "United States"),
    ("états unis", "United States"),
    ("chine", "China"),
    ("inde", "India"),
    ("japon", "Japan"),
    ("russie", "Russian Federation"),
    ("espagne", "Spain"),
    ("italie", "Italy"),
    ("belgique", "Belgium"),
    ("suisse", "Switzerland"),
    ("autriche", "Austria"),
    ("pologne", "Poland"),
    ("portugal", "Portugal"),
    ("pays-bas", "Netherlands"),
    ("pays bas", "Netherlands"),
    ("irlande", "Ireland"),
    ("islande", "Iceland"),
    ("norvege", "Norway"),
    ("norvège", "Norway"),
    ("suede", "Sweden"),
    ("suède", "Sweden"),
    ("danemark", "Denmark"),
    ("finlande", "Finland"),

    // Africa
    ("algérie", "Algeria"),
    ("algerie", "Algeria"),
    ("maroc", "Morocco"),
    ("tunisie", "Tunisia"),
    ("egypte", "Egypt, Arab Rep."),
    ("égypte", "Egypt, Arab Rep."),
    ("afrique du sud", "South Africa"),
    ("nigeria", "Nigeria"),
    ("ethiopie", "Ethiopia"),
    ("éthiopie", "Ethiopia"),
    ("kenya", "Kenya"),
    ("cameroun", "Cameroon"),
    ("côte d'ivoire", "Cote d'Ivoire"),
    ("cote d'ivoire", "Cote d'Ivoire"),
    ("senegal", "Senegal"),
    ("sénégal", "Senegal"),
    ("mali", "Mali"),
    ("ghana", "Ghana"),

    // Americas
    ("canada", "Canada"),
    ("mexique", "Mexico"),
    ("argentine", "Argentina"),
    ("brésil", "Brazil"),
    ("bresil", "Brazil"),
    ("chili", "Chile"),
    ("pérou", "Peru"),
    ("perou", "Peru"),
    ("colombie", "Colombia"),
    ("venezuela", "Venezuela, RB"),
    ("uruguay", "Uruguay"),
    ("paraguay", "Paraguay"),

    // Asia
    ("indonésie", "Indonesia"),
    ("indonesie", "Indonesia"),
    ("corée du sud", "Korea, Rep."),
    ("corée", "Korea, Rep."),
    ("coree", "Korea, Rep."),
    ("turquie", "Turkiye"),
    ("saoudite", "Saudi Arabia"),
    ("arabie saoudite", "Saudi Arabia"),
    ("émirats arabes unis", "United Arab Emirates"),
    ("emirats arabes unis", "United Arab Emirates"),
    ("qatar", "Qatar"),
    ("pakistan", "Pakistan"),
    ("bangladesh", "Bangladesh"),
    ("vietnam", "Viet Nam"),
    ("thaïlande", "Thailand"),
    ("thailande", "Thailand"),
    ("iran", "Iran, Islamic Rep."),
    ("irak", "Iraq"),

    // Oceania
    ("australie", "Australia"),
    ("nouvelle-zélande", "New Zealand"),
    ("nouvelle zelande", "New Zealand"),

    // Eastern Europe and the Balkans
    ("ukraine", "Ukraine"),
    ("serbie", "Serbia"),
    ("croatie", "Croatia"),
    ("roumanie", "Romania"),
    ("bulgarie", "Bulgaria"),
    ("hongrie", "Hungary"),
    ("tchéquie", "Czechia"),
    ("slovaquie", "Slovak Republic"),
    ("slovénie", "Slovenia"),
    ("lettonie", "Latvia"),
    ("lituanie", "Lithuania"),
    ("estonie", "Estonia"),
];
