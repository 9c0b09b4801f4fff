use crate::api::{year_count, Tendencias};
use crate::charts::{BarPoint, BarSeries, Orientation};

use super::{ANO_FINAL, ANO_INICIAL};

pub struct TendenciaReducaoReport;

impl TendenciaReducaoReport {
    pub fn title() -> &'static str {
        "Melhores Tendências"
    }

    pub fn subtitle() -> &'static str {
        "Maior queda de atrasos entre 2022 e 2024"
    }

    pub fn series(payload: &Tendencias) -> BarSeries {
        let points = payload
            .tendencia_reducao
            .iter()
            .map(|(aeroporto, valores)| {
                let delta =
                    (year_count(valores, ANO_FINAL) - year_count(valores, ANO_INICIAL)).abs();
                BarPoint::new(aeroporto.clone(), delta)
            })
            .collect();

        BarSeries::new("Redução de Atrasos", points, Orientation::Horizontal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reductions_show_as_positive_magnitudes() {
        let payload: Tendencias = serde_json::from_str(
            r#"{
                "tendencia_aumento": {},
                "tendencia_reducao": {
                    "Galeão": {"2022": 50, "2023": 30, "2024": 18},
                    "Viracopos": {"2022": 9, "2024": 4}
                }
            }"#,
        )
        .unwrap();

        let series = TendenciaReducaoReport::series(&payload);

        assert_eq!(series.name, "Redução de Atrasos");
        assert_eq!(series.points[0].label, "Galeão");
        assert_eq!(series.points[0].value, 32);
        assert_eq!(series.points[1].value, 5);
    }
}
