use crate::api::{year_count, Tendencias};
use crate::charts::{BarPoint, BarSeries, Orientation};

use super::{ANO_FINAL, ANO_INICIAL};

pub struct TendenciaAumentoReport;

impl TendenciaAumentoReport {
    pub fn title() -> &'static str {
        "Piores Tendências"
    }

    pub fn subtitle() -> &'static str {
        "Maior aumento de atrasos entre 2022 e 2024"
    }

    pub fn series(payload: &Tendencias) -> BarSeries {
        let points = payload
            .tendencia_aumento
            .iter()
            .map(|(aeroporto, valores)| {
                let delta = year_count(valores, ANO_FINAL) - year_count(valores, ANO_INICIAL);
                BarPoint::new(aeroporto.clone(), delta)
            })
            .collect();

        BarSeries::new("Aumento de Atrasos", points, Orientation::Horizontal)
    }
}
