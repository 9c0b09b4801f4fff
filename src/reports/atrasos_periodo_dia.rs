use crate::api::AtrasosPorDiaEPeriodo;
use crate::charts::{BarPoint, BarSeries, Orientation};

const PERIODOS: [&str; 4] = ["Madrugada", "Manhã", "Tarde", "Noite"];

pub struct AtrasosPeriodoDiaReport;

impl AtrasosPeriodoDiaReport {
    pub fn title() -> &'static str {
        "Total de Atrasos por Período do Dia"
    }

    pub fn subtitle() -> &'static str {
        "Madrugada, manhã, tarde e noite"
    }

    pub fn series(payload: &AtrasosPorDiaEPeriodo) -> BarSeries {
        let points = PERIODOS
            .iter()
            .map(|periodo| {
                let total = payload
                    .por_periodo_do_dia
                    .get(*periodo)
                    .copied()
                    .unwrap_or(0);
                BarPoint::new(*periodo, total)
            })
            .collect();

        BarSeries::new("Total de Atrasos", points, Orientation::Vertical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn periods_keep_a_fixed_order_and_default_to_zero() {
        let payload: AtrasosPorDiaEPeriodo = serde_json::from_str(
            r#"{
                "por_dia_da_semana": {},
                "por_periodo_do_dia": {"Tarde": 40, "Noite": 12}
            }"#,
        )
        .unwrap();

        let series = AtrasosPeriodoDiaReport::series(&payload);

        let labels: Vec<&str> = series.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Madrugada", "Manhã", "Tarde", "Noite"]);

        let values: Vec<i64> = series.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![0, 0, 40, 12]);
    }
}
