//! Static table of the locations every experiment iterates over.

use serde::Serialize;

/// A named point whose weather is fetched by one job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub const fn new(name: &'static str, latitude: f64, longitude: f64) -> Self {
        Self {
            name,
            latitude,
            longitude,
        }
    }
}

/// The 27 Brazilian state capitals, in the order they are processed.
pub static LOCATIONS: &[Location] = &[
    Location::new("Aracaju", -10.9472, -37.0731),
    Location::new("Belém", -1.4558, -48.5039),
    Location::new("Belo Horizonte", -19.9191, -43.9386),
    Location::new("Boa Vista", 2.8235, -60.6758),
    Location::new("Brasília", -15.7801, -47.9292),
    Location::new("Campo Grande", -20.4697, -54.6201),
    Location::new("Cuiabá", -15.5961, -56.0967),
    Location::new("Curitiba", -25.4284, -49.2733),
    Location::new("Florianópolis", -27.5954, -48.5480),
    Location::new("Fortaleza", -3.7172, -38.5434),
    Location::new("Goiânia", -16.6869, -49.2648),
    Location::new("João Pessoa", -7.1153, -34.8610),
    Location::new("Macapá", 0.0355, -51.0705),
    Location::new("Maceió", -9.6658, -35.7350),
    Location::new("Manaus", -3.1019, -60.0250),
    Location::new("Natal", -5.7945, -35.2110),
    Location::new("Palmas", -10.24, -48.3558),
    Location::new("Porto Alegre", -30.0277, -51.2287),
    Location::new("Porto Velho", -8.7619, -63.9039),
    Location::new("Recife", -8.0476, -34.8770),
    Location::new("Rio Branco", -9.9754, -67.8243),
    Location::new("Rio de Janeiro", -22.9083, -43.1970),
    Location::new("Salvador", -12.9714, -38.5014),
    Location::new("São Luís", -2.5387, -44.2825),
    Location::new("São Paulo", -23.5505, -46.6333),
    Location::new("Teresina", -5.0910, -42.8038),
    Location::new("Vitória", -20.3155, -40.3128),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_every_capital_once() {
        assert_eq!(LOCATIONS.len(), 27);
        let names: HashSet<_> = LOCATIONS.iter().map(|l| l.name).collect();
        assert_eq!(names.len(), LOCATIONS.len());
    }

    #[test]
    fn test_coordinates_are_in_range() {
        for location in LOCATIONS {
            assert!((-90.0..=90.0).contains(&location.latitude), "{}", location.name);
            assert!((-180.0..=180.0).contains(&location.longitude), "{}", location.name);
        }
    }

    #[test]
    fn test_table_keeps_processing_order() {
        let names: Vec<_> = LOCATIONS.iter().map(|l| l.name).collect();
        assert_eq!(
            names,
            vec![
                "Aracaju",
                "Belém",
                "Belo Horizonte",
                "Boa Vista",
                "Brasília",
                "Campo Grande",
                "Cuiabá",
                "Curitiba",
                "Florianópolis",
                "Fortaleza",
                "Goiânia",
                "João Pessoa",
                "Macapá",
                "Maceió",
                "Manaus",
                "Natal",
                "Palmas",
                "Porto Alegre",
                "Porto Velho",
                "Recife",
                "Rio Branco",
                "Rio de Janeiro",
                "Salvador",
                "São Luís",
                "São Paulo",
                "Teresina",
                "Vitória",
            ]
        );
    }
}
